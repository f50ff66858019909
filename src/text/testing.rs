//! Expected-transaction builders shared by the text tests.

use crate::font::Glyph;
use crate::interface::test_spy::Sent;

/// The two command transactions that move the cursor to `col` on `page`.
pub fn cursor(page: u8, col: u8) -> Vec<Sent> {
    vec![
        Sent::Cmd(vec![0xB0 | page]),
        Sent::Cmd(vec![col & 0x0F, 0x10 | (col >> 4)]),
    ]
}

/// The data transaction that draws `c`.
pub fn glyph(c: char) -> Vec<Sent> {
    let mut cell = Glyph::from_char(c).columns().to_vec();
    cell.push(0);
    vec![Sent::Data(cell)]
}

macro_rules! expect {
    ($($e:expr),* $(,)?) => {{
        let mut v: Vec<Sent> = Vec::new();
        $( v.extend($e); )*
        v
    }};
}

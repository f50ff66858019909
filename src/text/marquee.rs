//! Single-line horizontal scrolling.

use super::decode::Glyphs;
use super::{draw_glyph, Window};
use crate::display::Display;
use crate::font::GLYPH_FOOTPRINT;
use crate::interface;

/// Draw one marquee frame: blank `page`, then draw the glyphs of `s` left of which `offset`
/// pixels' worth of whole glyphs have been dropped, from the left of the window until the next
/// glyph would start at or past its right edge. Newlines are not line breaks here.
pub(crate) fn render<DI>(
    display: &mut Display<DI>,
    s: &[u8],
    page: u8,
    column: u8,
    max_width: u8,
    offset: u16,
) -> Result<(), DI::Error>
where
    DI: interface::DisplayInterface,
{
    if page >= display.pages() || Glyphs::new(s).next().is_none() {
        return Ok(());
    }

    let window = Window::new(column, max_width, display.width());
    let skip = offset / u16::from(GLYPH_FOOTPRINT);
    trace!("marquee page={} skip={}", page, skip);

    display.clear_page(page)?;
    display.set_cursor(page, window.left as u8)?;

    let mut col = window.left;
    for (glyph, _) in Glyphs::new(s).skip(usize::from(skip)) {
        if col >= window.right {
            break;
        }
        draw_glyph(display, glyph)?;
        col += u16::from(GLYPH_FOOTPRINT);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::display::{Display, DisplaySize};
    use crate::interface::test_spy::{Sent, TestSpyInterface};
    use crate::text::testing::*;

    fn frame(s: &str, page: u8, col: u8, max_width: u8, offset: u16) -> Vec<Sent> {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), DisplaySize::W128H64);
        disp.text().marquee(s, page, col, max_width, offset).unwrap();
        di.sent()
    }

    fn cleared(page: u8) -> Vec<Sent> {
        let mut v = cursor(page, 0);
        for _ in 0..4 {
            v.push(Sent::Data(vec![0; 32]));
        }
        v
    }

    #[test]
    fn blanks_page_then_draws() {
        assert_eq!(
            frame("Hello", 2, 0, 0, 0),
            expect![
                cleared(2),
                cursor(2, 0),
                glyph('H'),
                glyph('e'),
                glyph('l'),
                glyph('l'),
                glyph('o')
            ]
        );
    }

    #[test]
    fn offset_drops_whole_glyphs() {
        assert_eq!(
            frame("Hello", 0, 10, 0, 11),
            expect![
                cleared(0),
                cursor(0, 10),
                glyph('e'),
                glyph('l'),
                glyph('l'),
                glyph('o')
            ]
        );
        assert_eq!(
            frame("Hello", 0, 10, 0, 12),
            expect![cleared(0), cursor(0, 10), glyph('l'), glyph('l'), glyph('o')]
        );
        assert_eq!(frame("Hello", 0, 10, 0, 30), expect![cleared(0), cursor(0, 10)]);
    }

    #[test]
    fn stops_at_window_edge() {
        // The third glyph would start at the edge of a 12 pixel window.
        assert_eq!(
            frame("ABCD", 1, 20, 12, 0),
            expect![cleared(1), cursor(1, 20), glyph('A'), glyph('B')]
        );
        // One more pixel lets it start, and it is drawn whole.
        assert_eq!(
            frame("ABCD", 1, 20, 13, 0),
            expect![cleared(1), cursor(1, 20), glyph('A'), glyph('B'), glyph('C')]
        );
    }

    #[test]
    fn full_width_fits_twenty_two_starts() {
        let line = "x".repeat(30);
        let sent = frame(&line, 0, 0, 0, 0);
        let mut expected = expect![cleared(0), cursor(0, 0)];
        for _ in 0..22 {
            expected.extend(glyph('x'));
        }
        assert_eq!(sent, expected);
    }

    #[test]
    fn newline_is_a_placeholder() {
        assert_eq!(
            frame("a\nb", 0, 0, 0, 0),
            expect![cleared(0), cursor(0, 0), glyph('a'), glyph('?'), glyph('b')]
        );
    }

    #[test]
    fn accents_count_as_one_glyph() {
        assert_eq!(
            frame("çà va", 0, 0, 0, 6),
            expect![cleared(0), cursor(0, 0), glyph('à'), glyph(' '), glyph('v'), glyph('a')]
        );
    }

    #[test]
    fn no_op_cases() {
        assert_eq!(frame("", 0, 0, 0, 0), vec![]);
        assert_eq!(frame("\0abc", 0, 0, 0, 0), vec![]);
        assert_eq!(frame("abc", 8, 0, 0, 0), vec![]);
    }

    #[test]
    fn interface_error_propagates() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), DisplaySize::W128H64);
        di.fail();
        assert_eq!(disp.text().marquee("abc", 0, 0, 0, 0), Err(()));
    }
}

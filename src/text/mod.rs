//! Text rendering straight into display RAM.
//!
//! Text is laid out in fixed-width glyph cells on the display's 8-pixel pages. All layout (line
//! wrapping, centering, scrolling) is worked out while the string is decoded, from the cursor
//! position alone, because nothing already drawn can be read back.
//!
//! Every `print*` method is a parameterization of one layout routine, selected through
//! `PrintOptions`; `marquee` and `put_char` are separate, simpler paths.

#[cfg(test)]
#[macro_use]
mod testing;

pub mod decode;
mod layout;
mod marquee;

pub use self::decode::{measure, next_glyph, Glyphs};

use crate::display::Display;
use crate::font::{Glyph, GLYPH_FOOTPRINT, GLYPH_WIDTH};
use crate::interface;

/// Placement and behaviour of one `Text::print_with` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PrintOptions {
    /// Page the first line is drawn on.
    pub page: u8,
    /// Left edge of the layout window. Out of range columns mean column 0.
    pub column: u8,
    /// Width of the layout window in pixels. 0 extends it to the right edge of the display.
    pub max_width: u8,
    /// Center each line within the layout window.
    pub center: bool,
    /// Pixels to shift the text left by. Whole glyphs covered by the shift are not drawn.
    pub scroll: u16,
}

impl PrintOptions {
    pub fn at(page: u8, column: u8) -> Self {
        PrintOptions {
            page,
            column,
            ..Self::default()
        }
    }

    pub fn max_width(self, max_width: u8) -> Self {
        Self { max_width, ..self }
    }

    pub fn centered(self) -> Self {
        Self {
            center: true,
            ..self
        }
    }

    pub fn scroll(self, scroll: u16) -> Self {
        Self { scroll, ..self }
    }
}

/// The column range a call may draw in: `left` inclusive to `right` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Window {
    pub left: u16,
    pub right: u16,
}

impl Window {
    pub fn new(column: u8, max_width: u8, display_width: u8) -> Self {
        let left = u16::from(if column < display_width { column } else { 0 });
        let right = match max_width {
            0 => u16::from(display_width),
            w => (left + u16::from(w)).min(u16::from(display_width)),
        };
        Window { left, right }
    }

    pub fn width(&self) -> u16 {
        self.right - self.left
    }
}

/// Stream one glyph and its trailing blank column at the cursor.
pub(crate) fn draw_glyph<DI>(display: &mut Display<DI>, glyph: Glyph) -> Result<(), DI::Error>
where
    DI: interface::DisplayInterface,
{
    let mut cell = [0u8; GLYPH_FOOTPRINT as usize];
    cell[..GLYPH_WIDTH as usize].copy_from_slice(glyph.columns());
    display.write(&cell)
}

/// A text renderer mutably borrowing a `Display`. Obtain one with `Display::text`.
///
/// Strings may be anything that views as bytes (`&str`, `&[u8]`, byte string literals); they end
/// at the end of the slice or at the first NUL byte.
pub struct Text<'di, DI>
where
    DI: 'di + interface::DisplayInterface,
{
    display: &'di mut Display<DI>,
}

impl<'di, DI> Text<'di, DI>
where
    DI: 'di + interface::DisplayInterface,
{
    pub(crate) fn new(display: &'di mut Display<DI>) -> Self {
        Text { display }
    }

    /// Print `s` starting at `col` on `page`, wrapping at the right edge of the display and
    /// continuing on the following pages.
    pub fn print<S>(&mut self, s: &S, page: u8, col: u8) -> Result<(), DI::Error>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        self.print_with(s, PrintOptions::at(page, col))
    }

    /// Print `s` starting at `col` on `page`, wrapping within `max_width` pixels.
    pub fn print_bounded<S>(
        &mut self,
        s: &S,
        page: u8,
        col: u8,
        max_width: u8,
    ) -> Result<(), DI::Error>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        self.print_with(s, PrintOptions::at(page, col).max_width(max_width))
    }

    /// Print `s` with each line centered across the full display width, starting on `page`.
    pub fn print_centered<S>(&mut self, s: &S, page: u8) -> Result<(), DI::Error>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        self.print_with(s, PrintOptions::at(page, 0).centered())
    }

    /// Print `s` within `max_width` pixels, shifted left by `scroll` pixels.
    pub fn print_bounded_scrolled<S>(
        &mut self,
        s: &S,
        page: u8,
        col: u8,
        max_width: u8,
        scroll: u16,
    ) -> Result<(), DI::Error>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        self.print_with(
            s,
            PrintOptions::at(page, col).max_width(max_width).scroll(scroll),
        )
    }

    /// Print `s` with any combination of options.
    pub fn print_with<S>(&mut self, s: &S, options: PrintOptions) -> Result<(), DI::Error>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        layout::render(self.display, s.as_ref(), options)
    }

    /// Draw one frame of a horizontally scrolling single line: blank `page`, then draw `s` from
    /// `col` with its first `offset` pixels' worth of whole glyphs skipped, up to `max_width`
    /// pixels (0 for the display edge). Call with a growing `offset` to animate.
    pub fn marquee<S>(
        &mut self,
        s: &S,
        page: u8,
        col: u8,
        max_width: u8,
        offset: u16,
    ) -> Result<(), DI::Error>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        marquee::render(self.display, s.as_ref(), page, col, max_width, offset)
    }

    /// Draw a single character at `col` on `page`.
    pub fn put_char(&mut self, c: char, page: u8, col: u8) -> Result<(), DI::Error> {
        self.display.set_cursor(page, col)?;
        draw_glyph(self.display, Glyph::from_char(c))
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::display::DisplaySize;
    use crate::interface::test_spy::{Sent, TestSpyInterface};

    #[test]
    fn window_bounds() {
        assert_eq!(Window::new(0, 0, 128), Window { left: 0, right: 128 });
        assert_eq!(Window::new(10, 40, 128), Window { left: 10, right: 50 });
        assert_eq!(Window::new(100, 60, 128), Window { left: 100, right: 128 });
        assert_eq!(Window::new(130, 12, 128), Window { left: 0, right: 12 });
        assert_eq!(Window::new(130, 0, 128).width(), 128);
    }

    #[test]
    fn put_char() {
        let mut di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), DisplaySize::W128H64);
        disp.text().put_char('A', 2, 10).unwrap();
        di.check_multi(&expect![cursor(2, 10), glyph('A')]);
        di.clear();
        disp.text().put_char('ç', 0, 0).unwrap();
        di.check_multi(&expect![cursor(0, 0), glyph('ç')]);
    }

    #[test]
    fn put_char_placeholder_and_clamp() {
        let mut di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), DisplaySize::W128H64);
        disp.text().put_char('\u{1}', 9, 200).unwrap();
        di.check_multi(&expect![cursor(0, 0), glyph('?')]);
        di.clear();
        disp.text().put_char('ß', 7, 127).unwrap();
        di.check_multi(&expect![cursor(7, 127), glyph('?')]);
    }

    fn same_as_options<F>(f: F, options: PrintOptions)
    where
        F: FnOnce(&mut Text<TestSpyInterface>),
    {
        let a = TestSpyInterface::new();
        f(&mut Display::new(a.split(), DisplaySize::W128H64).text());
        let b = TestSpyInterface::new();
        Display::new(b.split(), DisplaySize::W128H64)
            .text()
            .print_with("Some text\nto lay out", options)
            .unwrap();
        assert_eq!(a.sent(), b.sent());
    }

    #[test]
    fn variants_are_option_presets() {
        same_as_options(
            |t| t.print("Some text\nto lay out", 2, 7).unwrap(),
            PrintOptions::at(2, 7),
        );
        same_as_options(
            |t| t.print_bounded("Some text\nto lay out", 2, 7, 40).unwrap(),
            PrintOptions::at(2, 7).max_width(40),
        );
        same_as_options(
            |t| t.print_centered("Some text\nto lay out", 3).unwrap(),
            PrintOptions {
                page: 3,
                column: 0,
                max_width: 0,
                center: true,
                scroll: 0,
            },
        );
        same_as_options(
            |t| {
                t.print_bounded_scrolled("Some text\nto lay out", 1, 4, 50, 13)
                    .unwrap()
            },
            PrintOptions::at(1, 4).max_width(50).scroll(13),
        );
    }

    #[test]
    fn accepts_byte_strings() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), DisplaySize::W128H64);
        disp.text().print(&[0xC3, 0xA9, 0x00][..], 0, 0).unwrap();
        disp.text().print(b"e", 0, 6).unwrap();
        di.check_multi(&expect![cursor(0, 0), glyph('é'), cursor(0, 6), glyph('e')]);
    }
}

//! The main API to the display driver. It initializes the display from a `Config`, positions the
//! controller's RAM cursor and streams pixel bytes from it. The text engine is obtained from
//! `Display::text`.
//!
//! There is no framebuffer: bytes written with `write` land in display RAM at the cursor, which
//! the controller advances one column per byte. Nothing can be read back.

use itertools::repeat_n;

use crate::command::consts::*;
use crate::command::*;
use crate::config::Config;
use crate::interface;
use crate::text::Text;

/// Dimensions of the viewable area in pixels. `height` must be a multiple of 8 because the
/// controller addresses rows in pages of 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplaySize {
    pub width: u8,
    pub height: u8,
}

impl DisplaySize {
    pub const W128H64: DisplaySize = DisplaySize {
        width: 128,
        height: 64,
    };
    pub const W128H32: DisplaySize = DisplaySize {
        width: 128,
        height: 32,
    };
    pub const W96H16: DisplaySize = DisplaySize {
        width: 96,
        height: 16,
    };
}

/// A driver for an SSD1306 display.
pub struct Display<DI>
where
    DI: interface::DisplayInterface,
{
    iface: DI,
    size: DisplaySize,
}

impl<DI> Display<DI>
where
    DI: interface::DisplayInterface,
{
    /// Construct a new display driver for a display with viewable dimensions `size`, which is
    /// connected to the interface `iface`.
    pub fn new(iface: DI, size: DisplaySize) -> Self {
        if false
            || size.width == 0
            || size.width > NUM_PIXEL_COLS
            || size.height < 16
            || size.height > NUM_PIXEL_ROWS
            || size.height % 8 != 0
        {
            panic!("Display size not supported by SSD1306.");
        }
        Display { iface, size }
    }

    /// Initialize the display with a config message, leaving it awake and showing RAM contents.
    pub fn init(&mut self, config: Config) -> Result<(), DI::Error> {
        debug!("init {}x{}", self.size.width, self.size.height);
        self.sleep(true)?;
        config.send(&mut self.iface, self.size)?;
        Command::EntireDisplayOn(false).send(&mut self.iface)?;
        Command::SetInverted(false).send(&mut self.iface)?;
        self.sleep(false)
    }

    /// Control sleep mode.
    pub fn sleep(&mut self, enabled: bool) -> Result<(), DI::Error> {
        Command::SetSleepMode(enabled).send(&mut self.iface)
    }

    /// Control the contrast.
    pub fn contrast(&mut self, contrast: u8) -> Result<(), DI::Error> {
        Command::SetContrast(contrast).send(&mut self.iface)
    }

    /// Show the image inverted (lit background, dark text) or normally.
    pub fn invert(&mut self, inverted: bool) -> Result<(), DI::Error> {
        Command::SetInverted(inverted).send(&mut self.iface)
    }

    pub fn size(&self) -> DisplaySize {
        self.size
    }

    /// Width of the viewable area in pixel columns.
    pub fn width(&self) -> u8 {
        self.size.width
    }

    /// Number of 8-pixel pages in the viewable area.
    pub fn pages(&self) -> u8 {
        self.size.height / 8
    }

    /// Move the RAM cursor to `col` on `page`. A page or column outside the viewable area is
    /// replaced by 0.
    pub fn set_cursor(&mut self, page: u8, col: u8) -> Result<(), DI::Error> {
        let page = if page < self.pages() { page } else { 0 };
        let col = if col < self.width() { col } else { 0 };
        trace!("cursor page={} col={}", page, col);
        Command::SetPageStart(page).send(&mut self.iface)?;
        Command::SetColumnStart(col).send(&mut self.iface)
    }

    /// Write pixel columns at the cursor as one data transaction.
    pub fn write(&mut self, columns: &[u8]) -> Result<(), DI::Error> {
        self.iface.send_data(columns)
    }

    /// Write pixel columns at the cursor from an iterator, using constant memory.
    pub fn write_iter<I>(&mut self, mut iter: I) -> Result<(), DI::Error>
    where
        I: Iterator<Item = u8>,
    {
        let mut buf = [0u8; 32];
        loop {
            let mut chunk_len = 0;
            for slot in buf.iter_mut() {
                match iter.next() {
                    Some(columns) => {
                        *slot = columns;
                        chunk_len += 1;
                    }
                    None => break,
                }
            }
            self.iface.send_data(&buf[..chunk_len])?;

            // A short chunk means the iterator is exhausted.
            if chunk_len != buf.len() {
                return Ok(());
            }
        }
    }

    /// Blank one page across the full display width. Pages outside the viewable area are
    /// ignored.
    pub fn clear_page(&mut self, page: u8) -> Result<(), DI::Error> {
        if page >= self.pages() {
            return Ok(());
        }
        self.set_cursor(page, 0)?;
        self.write_iter(repeat_n(0, self.width() as usize))
    }

    /// Blank the whole display.
    pub fn clear(&mut self) -> Result<(), DI::Error> {
        for page in 0..self.pages() {
            self.clear_page(page)?;
        }
        Ok(())
    }

    /// Borrow the display as a text renderer. The borrow is exclusive, so nothing else can move
    /// the cursor while text is being streamed.
    pub fn text(&mut self) -> Text<'_, DI> {
        Text::new(self)
    }

    /// Consume the driver and hand back the interface.
    pub fn release(self) -> DI {
        self.iface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::test_spy::{Sent, TestSpyInterface};

    #[test]
    fn init_defaults() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), DisplaySize::W128H64);
        disp.init(Config::default()).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            (0xAE), // sleep enable
            (0xD5, 0x80), // clock
            (0xA8, 0x3F), // mux ratio 64 lines
            (0xD3, 0x00), // display offset 0
            (0x40), // start line 0
            (0x8D, 0x14), // charge pump
            (0x20, 0x00), // horizontal addressing
            (0xA1), // segment remap
            (0xC8), // COM scan direction
            (0xDA, 0x12), // COM pins
            (0x81, 0x7F), // contrast
            (0xD9, 0xF1), // pre-charge
            (0xDB, 0x40), // VCOMH
            (0xA4), // follow RAM
            (0xA6), // not inverted
            (0xAF) // sleep disable
        ));
    }

    #[test]
    fn init_stops_at_interface_error() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), DisplaySize::W128H64);
        di.fail();
        assert_eq!(disp.init(Config::default()), Err(()));
        di.check_multi(sends!());
    }

    #[test]
    #[should_panic]
    fn unsupported_size() {
        Display::new(
            TestSpyInterface::new(),
            DisplaySize {
                width: 128,
                height: 60,
            },
        );
    }

    #[test]
    fn geometry() {
        let disp = Display::new(TestSpyInterface::new(), DisplaySize::W128H32);
        assert_eq!(disp.width(), 128);
        assert_eq!(disp.pages(), 4);
        let disp = Display::new(TestSpyInterface::new(), DisplaySize::W96H16);
        assert_eq!(disp.width(), 96);
        assert_eq!(disp.pages(), 2);
    }

    #[test]
    fn set_cursor() {
        let mut di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), DisplaySize::W128H64);
        disp.set_cursor(3, 42).unwrap();
        di.check_multi(sends!((0xB3), (0x0A, 0x12)));
        di.clear();
        // Out of range page and column are replaced by 0.
        disp.set_cursor(8, 128).unwrap();
        di.check_multi(sends!((0xB0), (0x00, 0x10)));
    }

    #[test]
    fn set_cursor_clamps_to_display_not_chip() {
        let mut di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), DisplaySize::W96H16);
        disp.set_cursor(2, 100).unwrap();
        di.check_multi(sends!((0xB0), (0x00, 0x10)));
        di.clear();
        disp.set_cursor(1, 95).unwrap();
        di.check_multi(sends!((0xB1), (0x0F, 0x15)));
    }

    #[test]
    fn write_iter_chunks() {
        let mut di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), DisplaySize::W128H64);
        disp.write_iter([0xDE, 0xAD, 0xBE, 0xEF].iter().cycle().cloned().take(34))
            .unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            [0xDE, 0xAD, 0xBE, 0xEF, 0xDE, 0xAD, 0xBE, 0xEF, 0xDE, 0xAD, 0xBE, 0xEF,
             0xDE, 0xAD, 0xBE, 0xEF, 0xDE, 0xAD, 0xBE, 0xEF, 0xDE, 0xAD, 0xBE, 0xEF,
             0xDE, 0xAD, 0xBE, 0xEF, 0xDE, 0xAD, 0xBE, 0xEF],
            [0xDE, 0xAD]
        ));
        di.clear();
        disp.write_iter(std::iter::empty()).unwrap();
        di.check_multi(sends!());
    }

    #[test]
    fn clear_page_blanks_full_width() {
        let mut di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), DisplaySize::W128H64);
        disp.clear_page(5).unwrap();
        assert_eq!(di.commands(), vec![vec![0xB5], vec![0x00, 0x10]]);
        assert_eq!(di.data(), vec![0u8; 128]);
        di.clear();
        disp.clear_page(8).unwrap();
        di.check_multi(sends!());
    }

    #[test]
    fn clear_covers_every_page() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), DisplaySize::W128H32);
        disp.clear().unwrap();
        let pages = di
            .commands()
            .into_iter()
            .filter(|c| c.len() == 1)
            .collect::<Vec<_>>();
        assert_eq!(pages, vec![vec![0xB0], vec![0xB1], vec![0xB2], vec![0xB3]]);
        assert_eq!(di.data().len(), 4 * 128);
    }

    #[test]
    fn runtime_controls() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split(), DisplaySize::W128H64);
        disp.sleep(true).unwrap();
        disp.contrast(0x10).unwrap();
        disp.invert(true).unwrap();
        disp.sleep(false).unwrap();
        di.check_multi(sends!((0xAE), (0x81, 0x10), (0xA7), (0xAF)));
    }
}

//! The command set for the SSD1306.
//!
//! Note 1: The display RAM of the SSD1306 is arranged in 8 pages of 128 columns, where each
//! column of a page is one byte driving 8 vertically-stacked pixels, least significant bit on
//! top. Anywhere there is a "page" address, it refers to one such 8-pixel-tall strip.
//!
//! Arguments outside the range a command accepts are masked or clamped into range rather than
//! rejected, since the chip itself ignores the unused bits.

use crate::interface::DisplayInterface;

pub mod consts {
    //! Limits of the SSD1306 display RAM.

    pub const NUM_PIXEL_COLS: u8 = 128;
    pub const NUM_PIXEL_ROWS: u8 = 64;
    pub const NUM_PAGES: u8 = NUM_PIXEL_ROWS / 8;
    pub const PIXEL_COL_MAX: u8 = NUM_PIXEL_COLS - 1;
    pub const PAGE_MAX: u8 = NUM_PAGES - 1;
}

use self::consts::*;

/// Layout of the GDDRAM address pointer increments when writing image data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressingMode {
    /// The column pointer advances after each data byte and wraps to the next page at the end
    /// of the column range.
    Horizontal,
    /// The page pointer advances after each data byte and wraps to the next column at the end
    /// of the page range.
    Vertical,
    /// The column pointer advances after each data byte and stays on the current page. Page and
    /// column start are set with `SetPageStart` and `SetColumnStart`.
    Page,
}

/// Setting of segment (column) remapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SegmentRemap {
    /// Column address 0 maps to SEG0.
    Forward,
    /// Column address 127 maps to SEG0, mirroring the image horizontally.
    Reverse,
}

/// Setting of the COM line scanning of rows. Changing this setting will flip the image vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComScanDirection {
    /// COM lines scan from COM0 to COM[N-1].
    RowZeroFirst,
    /// COM lines scan from COM[N-1] to COM0.
    RowZeroLast,
}

/// Setting the layout of the COM pins to the display rows. This is dictated by how the display
/// module wires the OLED matrix to the driver chip; see the module datasheet. 128x64 modules are
/// almost always `Alternative`, 128x32 modules `Sequential`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComLayout {
    Sequential,
    Alternative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Set the contrast. Range 0-255.
    SetContrast(u8),
    /// Force every pixel on, ignoring RAM contents (`true`), or follow RAM contents (`false`).
    EntireDisplayOn(bool),
    /// Invert the displayed image, so that a 0 bit in RAM lights the pixel.
    SetInverted(bool),
    /// Control sleep mode. Sleeping turns the panel off while keeping RAM contents.
    SetSleepMode(bool),
    /// Enable or disable the internal charge pump. Required for modules without an external
    /// VCC supply.
    SetChargePump(bool),
    /// Set how the address pointer advances as image data is written. See enum for details.
    SetAddressingMode(AddressingMode),
    /// Set the column address pointer in page addressing mode. Range 0-127. (Note 1)
    SetColumnStart(u8),
    /// Set the page address pointer in page addressing mode. Range 0-7. (Note 1)
    SetPageStart(u8),
    /// Set the RAM row that is shown on the first display row. Range 0-63.
    SetStartLine(u8),
    /// Set segment remapping. See enum for details.
    SetSegmentRemap(SegmentRemap),
    /// Set the MUX ratio, i.e. the number of active COM lines. Range 16-64.
    SetMuxRatio(u8),
    /// Set the COM scan direction. See enum for details.
    SetComScanDirection(ComScanDirection),
    /// Set the vertical COM shift. Range 0-63.
    SetDisplayOffset(u8),
    /// Set the COM pin hardware layout, and whether left/right COM halves are swapped.
    SetComPinConfig(ComLayout, bool),
    /// Set the display clock divide ratio (1-16) and oscillator frequency setting (0-15).
    SetClockDivide(u8, u8),
    /// Set the pre-charge phase lengths in DCLKs. Phase 1 and phase 2 each range 1-15.
    SetPrechargePeriod(u8, u8),
    /// Set the VCOMH deselect level register value. Range 0-7, where 0 is ~0.65*Vcc, 2 is
    /// ~0.77*Vcc and 3 is ~0.83*Vcc.
    SetVcomhDeselect(u8),
}

/// Copy a list of bytes into the front of `$buf` and evaluate to that filled prefix.
macro_rules! encoded {
    ($buf:ident, [$($b:expr),+]) => {{
        let mut len = 0;
        $(
            $buf[len] = $b;
            len += 1;
        )+
        &$buf[..len]
    }};
}

impl Command {
    /// Transmit this command and its arguments to the display at `iface` as a single command
    /// transaction.
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), DI::Error>
    where
        DI: DisplayInterface,
    {
        let mut buf = [0u8; 3];
        let bytes: &[u8] = match self {
            Command::SetContrast(contrast) => encoded!(buf, [0x81, contrast]),
            Command::EntireDisplayOn(ena) => encoded!(buf, [if ena { 0xA5 } else { 0xA4 }]),
            Command::SetInverted(ena) => encoded!(buf, [if ena { 0xA7 } else { 0xA6 }]),
            Command::SetSleepMode(ena) => encoded!(buf, [if ena { 0xAE } else { 0xAF }]),
            Command::SetChargePump(ena) => encoded!(buf, [0x8D, if ena { 0x14 } else { 0x10 }]),
            Command::SetAddressingMode(mode) => {
                let m = match mode {
                    AddressingMode::Horizontal => 0x00,
                    AddressingMode::Vertical => 0x01,
                    AddressingMode::Page => 0x02,
                };
                encoded!(buf, [0x20, m])
            }
            Command::SetColumnStart(col) => {
                let col = col & PIXEL_COL_MAX;
                encoded!(buf, [col & 0x0F, 0x10 | (col >> 4)])
            }
            Command::SetPageStart(page) => encoded!(buf, [0xB0 | (page & PAGE_MAX)]),
            Command::SetStartLine(line) => encoded!(buf, [0x40 | (line & 0x3F)]),
            Command::SetSegmentRemap(remap) => encoded!(
                buf,
                [match remap {
                    SegmentRemap::Forward => 0xA0,
                    SegmentRemap::Reverse => 0xA1,
                }]
            ),
            Command::SetMuxRatio(ratio) => {
                let ratio = match ratio {
                    0..=16 => 16,
                    17..=NUM_PIXEL_ROWS => ratio,
                    _ => NUM_PIXEL_ROWS,
                };
                encoded!(buf, [0xA8, ratio - 1])
            }
            Command::SetComScanDirection(dir) => encoded!(
                buf,
                [match dir {
                    ComScanDirection::RowZeroFirst => 0xC0,
                    ComScanDirection::RowZeroLast => 0xC8,
                }]
            ),
            Command::SetDisplayOffset(offset) => encoded!(buf, [0xD3, offset & 0x3F]),
            Command::SetComPinConfig(layout, swap_halves) => {
                let alt = match layout {
                    ComLayout::Sequential => 0x00,
                    ComLayout::Alternative => 0x10,
                };
                let swap = if swap_halves { 0x20 } else { 0x00 };
                encoded!(buf, [0xDA, 0x02 | alt | swap])
            }
            Command::SetClockDivide(divide, fosc) => {
                let d = match divide {
                    0 => 0,
                    1..=16 => divide - 1,
                    _ => 15,
                };
                encoded!(buf, [0xD5, (fosc & 0x0F) << 4 | d])
            }
            Command::SetPrechargePeriod(phase_1, phase_2) => {
                let p1 = phase_1.max(1) & 0x0F;
                let p2 = phase_2.max(1) & 0x0F;
                encoded!(buf, [0xD9, p2 << 4 | p1])
            }
            Command::SetVcomhDeselect(level) => encoded!(buf, [0xDB, (level & 0x07) << 4]),
        };
        iface.send_commands(bytes)
    }
}

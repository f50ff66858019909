//! Defines the `Config` struct holding the register values sent to the SSD1306 at init time.

use crate::command::*;
use crate::display::DisplaySize;
use crate::interface;

/// A configuration for the display. `Config::default()` holds the values most 128x64 I2C
/// modules expect; builder methods override individual settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    clock_divide: (u8, u8),
    display_offset: u8,
    start_line: u8,
    charge_pump: bool,
    addressing_mode: AddressingMode,
    segment_remap: SegmentRemap,
    com_scan_direction: ComScanDirection,
    com_layout: Option<ComLayout>,
    com_swap_halves: bool,
    contrast: u8,
    precharge_period: (u8, u8),
    vcomh_deselect: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            clock_divide: (1, 8),
            display_offset: 0,
            start_line: 0,
            charge_pump: true,
            addressing_mode: AddressingMode::Horizontal,
            segment_remap: SegmentRemap::Reverse,
            com_scan_direction: ComScanDirection::RowZeroLast,
            com_layout: None,
            com_swap_halves: false,
            contrast: 0x7F,
            precharge_period: (1, 15),
            vcomh_deselect: 4,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend this `Config` to configure the display clock. See `Command::SetClockDivide`.
    pub fn clock_divide(self, divide: u8, fosc: u8) -> Self {
        Self {
            clock_divide: (divide, fosc),
            ..self
        }
    }

    /// Extend this `Config` to shift the image vertically. See `Command::SetDisplayOffset`.
    pub fn display_offset(self, offset: u8) -> Self {
        Self {
            display_offset: offset,
            ..self
        }
    }

    /// Extend this `Config` to set the first RAM row shown. See `Command::SetStartLine`.
    pub fn start_line(self, line: u8) -> Self {
        Self {
            start_line: line,
            ..self
        }
    }

    /// Extend this `Config` to enable or disable the internal charge pump. Modules powered from
    /// an external VCC rail want it off.
    pub fn charge_pump(self, enabled: bool) -> Self {
        Self {
            charge_pump: enabled,
            ..self
        }
    }

    /// Extend this `Config` to select the RAM addressing mode. See `AddressingMode`.
    pub fn addressing_mode(self, mode: AddressingMode) -> Self {
        Self {
            addressing_mode: mode,
            ..self
        }
    }

    /// Extend this `Config` to mirror the image horizontally or not. See `SegmentRemap`.
    pub fn segment_remap(self, remap: SegmentRemap) -> Self {
        Self {
            segment_remap: remap,
            ..self
        }
    }

    /// Extend this `Config` to flip the image vertically or not. See `ComScanDirection`.
    pub fn com_scan_direction(self, direction: ComScanDirection) -> Self {
        Self {
            com_scan_direction: direction,
            ..self
        }
    }

    /// Extend this `Config` to set the COM pin layout explicitly instead of deriving it from the
    /// display height. See `Command::SetComPinConfig`.
    pub fn com_layout(self, layout: ComLayout, swap_halves: bool) -> Self {
        Self {
            com_layout: Some(layout),
            com_swap_halves: swap_halves,
            ..self
        }
    }

    /// Extend this `Config` to set the contrast. See `Command::SetContrast`.
    pub fn contrast(self, contrast: u8) -> Self {
        Self { contrast, ..self }
    }

    /// Extend this `Config` to set the pre-charge phase lengths. See
    /// `Command::SetPrechargePeriod`.
    pub fn precharge_period(self, phase_1: u8, phase_2: u8) -> Self {
        Self {
            precharge_period: (phase_1, phase_2),
            ..self
        }
    }

    /// Extend this `Config` to set the VCOMH deselect level. See `Command::SetVcomhDeselect`.
    pub fn vcomh_deselect(self, level: u8) -> Self {
        Self {
            vcomh_deselect: level,
            ..self
        }
    }

    /// Transmit commands to the display at `iface` necessary to put a display of `size` into the
    /// configuration encoded in `self`.
    pub(crate) fn send<DI>(&self, iface: &mut DI, size: DisplaySize) -> Result<(), DI::Error>
    where
        DI: interface::DisplayInterface,
    {
        let com_layout = self.com_layout.unwrap_or(if size.height > 32 {
            ComLayout::Alternative
        } else {
            ComLayout::Sequential
        });
        let (divide, fosc) = self.clock_divide;
        let (phase_1, phase_2) = self.precharge_period;

        Command::SetClockDivide(divide, fosc).send(iface)?;
        Command::SetMuxRatio(size.height).send(iface)?;
        Command::SetDisplayOffset(self.display_offset).send(iface)?;
        Command::SetStartLine(self.start_line).send(iface)?;
        Command::SetChargePump(self.charge_pump).send(iface)?;
        Command::SetAddressingMode(self.addressing_mode).send(iface)?;
        Command::SetSegmentRemap(self.segment_remap).send(iface)?;
        Command::SetComScanDirection(self.com_scan_direction).send(iface)?;
        Command::SetComPinConfig(com_layout, self.com_swap_halves).send(iface)?;
        Command::SetContrast(self.contrast).send(iface)?;
        Command::SetPrechargePeriod(phase_1, phase_2).send(iface)?;
        Command::SetVcomhDeselect(self.vcomh_deselect).send(iface)
    }
}

//! Text driver for Solomon Systech SSD1306 monochrome OLED displays on I2C.
//!
//! Text is rendered straight into display RAM with a built-in 5x7 font: printable ASCII plus a
//! few accented lowercase letters. There is no framebuffer. Each print call positions the
//! controller's RAM cursor and streams glyph columns, so nothing is read back and memory use does
//! not grow with the display size.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate embedded_hal as hal;
extern crate itertools;
extern crate nb;

#[macro_use]
mod fmt;


pub mod command;
pub mod config;
pub mod display;
pub mod font;
pub mod interface;
pub mod text;

// Re-exports for primary API.
pub use command::{consts, AddressingMode, ComLayout, ComScanDirection, SegmentRemap};
pub use config::Config;
pub use display::{Display, DisplaySize};
pub use font::Glyph;
pub use interface::i2c::I2cInterface;
pub use interface::twi::{TwiBus, TwiInterface};
pub use interface::DisplayInterface;
pub use text::{PrintOptions, Text};

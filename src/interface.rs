//! Transports that carry command and data bytes to the display controller.
//!
//! Every method call on a `DisplayInterface` is one complete bus transaction: start condition,
//! device address, control byte, payload, stop condition. No transaction spans calls.

/// Control byte that prefixes a transaction carrying command bytes.
pub const CONTROL_COMMAND: u8 = 0x00;
/// Control byte that prefixes a transaction carrying display RAM data.
pub const CONTROL_DATA: u8 = 0x40;
/// The usual 7-bit bus address of the SSD1306 (SA0 pulled low). Modules with SA0 pulled high
/// answer at 0x3D.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

pub trait DisplayInterface {
    type Error;

    /// Send a sequence of command bytes (commands together with their arguments).
    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error>;

    /// Send display RAM data. The controller advances its column pointer once per byte.
    fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error>;

    fn send_command(&mut self, cmd: u8) -> Result<(), Self::Error> {
        self.send_commands(&[cmd])
    }

    fn send_data_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.send_data(&[byte])
    }
}

pub mod i2c {
    //! The I2C interface, built on the blocking `embedded_hal` I2C write trait.

    use super::{DisplayInterface, CONTROL_COMMAND, CONTROL_DATA, DEFAULT_ADDRESS};

    /// Largest payload carried in one transaction. Longer payloads are split into consecutive
    /// transactions; the controller's address pointer carries over between them.
    const CHUNK_LEN: usize = 32;

    pub struct I2cInterface<I2C> {
        /// The I2C master device connected to the SSD1306.
        i2c: I2C,
        /// 7-bit device address.
        address: u8,
    }

    impl<I2C> I2cInterface<I2C>
    where
        I2C: hal::blocking::i2c::Write,
    {
        /// Create a new I2C interface to the display driver at the default address 0x3C.
        pub fn new(i2c: I2C) -> Self {
            Self::with_address(i2c, DEFAULT_ADDRESS)
        }

        /// Create a new I2C interface to a display driver strapped to a different 7-bit address.
        pub fn with_address(i2c: I2C, address: u8) -> Self {
            Self { i2c, address }
        }

        /// Consume the interface and hand back the I2C peripheral.
        pub fn release(self) -> I2C {
            self.i2c
        }

        fn transfer(&mut self, control: u8, payload: &[u8]) -> Result<(), I2C::Error> {
            let mut buf = [0u8; CHUNK_LEN + 1];
            buf[0] = control;
            for chunk in payload.chunks(CHUNK_LEN) {
                buf[1..=chunk.len()].copy_from_slice(chunk);
                self.i2c.write(self.address, &buf[..=chunk.len()])?;
            }
            Ok(())
        }
    }

    impl<I2C> DisplayInterface for I2cInterface<I2C>
    where
        I2C: hal::blocking::i2c::Write,
    {
        type Error = I2C::Error;

        fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error> {
            self.transfer(CONTROL_COMMAND, cmds)
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
            self.transfer(CONTROL_DATA, buf)
        }
    }

}

pub mod twi {
    //! A byte-level two-wire interface for microcontrollers whose TWI peripheral is driven
    //! register by register rather than through a transaction-level HAL.
    //!
    //! Each bus step reports `nb::Error::WouldBlock` until the peripheral signals completion,
    //! and this interface spins on it with `nb::block!`. There is no timeout: a bus that never
    //! becomes ready blocks the caller forever.

    use super::{DisplayInterface, CONTROL_COMMAND, CONTROL_DATA, DEFAULT_ADDRESS};

    /// The individual steps of a two-wire master write.
    pub trait TwiBus {
        type Error;

        /// Issue a start (or repeated start) condition.
        fn start(&mut self) -> nb::Result<(), Self::Error>;
        /// Shift one byte out on the bus.
        fn write(&mut self, byte: u8) -> nb::Result<(), Self::Error>;
        /// Issue a stop condition.
        fn stop(&mut self) -> nb::Result<(), Self::Error>;
    }

    pub struct TwiInterface<B> {
        bus: B,
        address: u8,
    }

    impl<B> TwiInterface<B>
    where
        B: TwiBus,
    {
        pub fn new(bus: B) -> Self {
            Self::with_address(bus, DEFAULT_ADDRESS)
        }

        pub fn with_address(bus: B, address: u8) -> Self {
            Self { bus, address }
        }

        pub fn release(self) -> B {
            self.bus
        }

        fn transfer(&mut self, control: u8, payload: &[u8]) -> Result<(), B::Error> {
            nb::block!(self.bus.start())?;
            nb::block!(self.bus.write(self.address << 1))?;
            nb::block!(self.bus.write(control))?;
            for &byte in payload {
                nb::block!(self.bus.write(byte))?;
            }
            nb::block!(self.bus.stop())
        }
    }

    impl<B> DisplayInterface for TwiInterface<B>
    where
        B: TwiBus,
    {
        type Error = B::Error;

        fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Self::Error> {
            self.transfer(CONTROL_COMMAND, cmds)
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
            if buf.is_empty() {
                return Ok(());
            }
            self.transfer(CONTROL_DATA, buf)
        }
    }

}

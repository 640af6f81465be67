//! Bus interface shared by the two display controllers.
//!
//! Both chips sit on the same I2C bus. The text controller frames every
//! payload byte with a register-select byte; the backlight controller takes
//! plain register/value pairs. This module owns the bus handle, the two
//! chip addresses and the delay provider, and is the only place that
//! touches the wire.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::error::Error;

// Register-select bytes prefixed to every text-controller payload
const REG_SELECT_CMD: u8 = 0x80;
const REG_SELECT_DATA: u8 = 0x40;

// The controller needs this long to execute an ordinary command before it
// accepts the next transaction.
const COMMAND_SETTLE_MS: u32 = 2;

/// Addressed register-write access to the text and backlight controllers.
pub struct BusInterface<I2C, D> {
    /// I2C bus shared by both chips
    i2c: I2C,
    /// Delay provider for the mandatory settle times
    pub(crate) delay: D,
    /// Text controller address
    lcd_addr: u8,
    /// Backlight controller address
    rgb_addr: u8,
}

impl<I2C, D> BusInterface<I2C, D> {
    /// Wrap a bus handle and the two chip addresses.
    pub fn new(i2c: I2C, delay: D, lcd_addr: u8, rgb_addr: u8) -> Self {
        BusInterface {
            i2c,
            delay,
            lcd_addr,
            rgb_addr,
        }
    }

    /// Hand back the bus and delay provider. No bus traffic.
    pub(crate) fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

impl<I2C, D> BusInterface<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Send a command byte to the text controller, then let it settle.
    ///
    /// The settle time elapses even when the write failed: a partial
    /// transaction may still have latched in the controller.
    pub(crate) fn cmd(&mut self, command: u8) -> Result<(), Error<I2C::Error>> {
        let res = match self.i2c.write(self.lcd_addr, &[REG_SELECT_CMD, command]) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("I2C write failed for command 0x{:02X}: {:?}", command, e);
                Err(Error::Device(e))
            }
        };
        self.delay.delay_ms(COMMAND_SETTLE_MS);
        res
    }

    /// Send one character byte to the text controller's data register.
    pub(crate) fn data(&mut self, data: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write(self.lcd_addr, &[REG_SELECT_DATA, data])
            .map_err(Error::Device)
    }

    /// Write one backlight controller register.
    pub(crate) fn rgb(&mut self, register: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        match self.i2c.write(self.rgb_addr, &[register, value]) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!(
                    "I2C write failed for backlight register 0x{:02X}: {:?}",
                    register,
                    e
                );
                Err(Error::Device(e))
            }
        }
    }
}

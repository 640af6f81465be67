//! JHD1313M3 RGB backlight LCD driver
//!
//! Driver for the Grove-style 16x2 character LCD built around two chips on
//! one I2C bus: the JHD1313M3 text controller (HD44780-compatible command
//! set, address `0x3E`) and a PCA9633-compatible RGB backlight controller
//! (address `0x62`).
//!
//! The driver is transport-agnostic: it only needs an
//! [`embedded_hal::i2c::I2c`] bus and an [`embedded_hal::delay::DelayNs`]
//! delay provider, so it runs unchanged on any HAL and against a fake bus
//! in tests.
//!
//! ### Usage
//!
//! 1. Bring up your platform's I2C bus and delay provider.
//! 1. Create the driver with [`Jhd1313m3::new`]; this programs both chips
//!    to a known baseline (display on, cursor and blink off, cleared,
//!    white backlight).
//! 1. Use the [`Jhd1313m3`] methods to position the cursor, write text and
//!    set the backlight color.
//!
//! ```no_run
//! # fn example<I2C, D>(i2c: I2C, delay: D) -> Result<(), jhd1313m3::Error<I2C::Error>>
//! # where I2C: embedded_hal::i2c::I2c, D: embedded_hal::delay::DelayNs {
//! use jhd1313m3::{Jhd1313m3, LCD_ADDRESS, RGB_ADDRESS};
//!
//! let mut lcd = Jhd1313m3::new(i2c, delay, LCD_ADDRESS, RGB_ADDRESS)?;
//! lcd.set_rgb(0, 128, 255)?;
//! lcd.set_cursor(0, 0)?;
//! lcd.write_str("Hello")?;
//! # Ok(()) }
//! ```

#![no_std]
#![warn(missing_docs)]
#![allow(clippy::must_use_candidate)]

pub mod cmd;
pub mod driver;
pub mod error;
pub mod flag;
pub mod interface;

pub use crate::driver::{Jhd1313m3, TextDirection};
pub use crate::error::Error;

/// Number of visible character columns
pub const LCD_COLS: u8 = 16;

/// Number of character rows
pub const LCD_ROWS: u8 = 2;

/// Factory bus address of the text controller
pub const LCD_ADDRESS: u8 = 0x3E;

/// Factory bus address of the backlight controller
pub const RGB_ADDRESS: u8 = 0x62;

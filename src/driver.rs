//! JHD1313M3 display driver implementation.
//!
//! The driver owns a [`BusInterface`] for the two controller chips and the
//! shadow copies of the controller's write-only registers. It sequences the
//! power-up programming of both chips and exposes the command surface:
//! clear/home, cursor placement, character output, display-control toggles
//! and backlight color.
//!
//! ## Shadow state
//!
//! The text controller offers no readback. The last value successfully
//! written to the display-control and entry-mode registers is therefore
//! kept in the driver, and every single-flag toggle is a read-modify-write
//! against that shadow followed by a rewrite of the full register. A failed
//! write must not touch the shadow: the shadow describes confirmed device
//! state, never intent, so a caller can safely retry the same logical
//! operation after an error.
//!
//! ## Timing
//!
//! Every command transaction is followed by the controller's mandatory
//! settle delay, issued through the injected delay provider before the call
//! returns. Clear and home need extra time on top of that, and the
//! initialization sequence has its own power-on and function-set waits.
//! Callers cannot observe the driver between a command and its settle.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use ufmt_write::uWrite;

use crate::cmd::{Cmd, RgbReg};
use crate::error::Error;
use crate::flag::Flag;
use crate::interface::BusInterface;
use crate::{LCD_COLS, LCD_ROWS};

// DDRAM base address of each row; the two rows are not contiguous.
const ROW_OFFSETS: [u8; LCD_ROWS as usize] = [0x00, 0x40];

/// Direction the cursor advances after each written character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    /// Cursor moves right after each character (default).
    LeftToRight,
    /// Cursor moves left after each character.
    RightToLeft,
}

/// Driver for the JHD1313M3 16x2 character LCD with RGB backlight.
///
/// Obtained through [`Jhd1313m3::new`], which programs both chips to a
/// known baseline; a handle therefore always refers to an initialized
/// display. Dropping the handle releases only driver-owned state and does
/// not power down or reset the chips.
///
/// All operations take `&mut self` and block until the bus transactions
/// and settle delays complete. The driver holds no lock; the bus transport
/// is the serialization point when the bus is shared.
pub struct Jhd1313m3<I2C, D> {
    interface: BusInterface<I2C, D>,
    /// Shadow of the display-control register: DISPLAY_ON/CURSOR_ON/BLINK_ON
    display_control: u8,
    /// Shadow of the entry-mode register: direction and autoscroll flags
    display_mode: u8,
}

impl<I2C, D> Jhd1313m3<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create the driver and run the full power-up sequence on both chips.
    ///
    /// `lcd_addr` and `rgb_addr` are the 7-bit bus addresses of the text
    /// and backlight controllers; the factory values are
    /// [`LCD_ADDRESS`](crate::LCD_ADDRESS) and
    /// [`RGB_ADDRESS`](crate::RGB_ADDRESS). Addresses above `0x7F` are
    /// rejected with [`Error::InvalidArgument`] before any bus traffic.
    ///
    /// On a bus failure the partially programmed display state is
    /// indeterminate and no handle is produced.
    pub fn new(i2c: I2C, delay: D, lcd_addr: u8, rgb_addr: u8) -> Result<Self, Error<I2C::Error>> {
        if lcd_addr > 0x7F || rgb_addr > 0x7F {
            return Err(Error::InvalidArgument);
        }

        let interface = BusInterface::new(i2c, delay, lcd_addr, rgb_addr);
        let mut lcd = Jhd1313m3 {
            interface,
            display_control: 0,
            display_mode: 0,
        };
        log::info!(
            "Initializing JHD1313M3 (text 0x{:02X}, backlight 0x{:02X})",
            lcd_addr,
            rgb_addr
        );
        lcd.init()?;
        Ok(lcd)
    }

    /// Program both controllers to the baseline state.
    fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        // Controller power-on reset window.
        self.interface.delay.delay_ms(50);

        // Function set: 8-bit interface, 2 lines, 5x8 font. The controller
        // needs longer to latch this than an ordinary command.
        self.interface
            .cmd(Cmd::FUNCTION_SET | Flag::MODE_8BIT | Flag::LINES_2 | Flag::DOTS_5X8)?;
        self.interface.delay.delay_ms(5);

        // Display control baseline: display on, cursor off, blink off.
        let control = Flag::DISPLAY_ON | Flag::CURSOR_OFF | Flag::BLINK_OFF;
        self.interface.cmd(Cmd::DISPLAY_CTRL | control)?;
        self.display_control = control;

        // Entry mode baseline: left to right, no autoscroll.
        let mode = Flag::ENTRY_LEFT | Flag::ENTRY_SHIFT_DECREMENT;
        self.interface.cmd(Cmd::ENTRY_MODE | mode)?;
        self.display_mode = mode;

        self.clear()?;

        // Backlight controller: normal operating mode, push-pull outputs,
        // per-channel PWM enabled on all three channels.
        self.interface.rgb(RgbReg::MODE1, Flag::RGB_MODE1_NORMAL)?;
        self.interface.rgb(RgbReg::MODE2, Flag::RGB_MODE2_OUTDRV)?;
        self.interface.rgb(RgbReg::LEDOUT, Flag::RGB_LEDOUT_PWM_ALL)?;

        // Default to full-brightness white.
        self.set_rgb(255, 255, 255)?;

        log::info!("JHD1313M3 initialized");
        Ok(())
    }

    /// Clear all character cells and return the cursor to (0, 0).
    ///
    /// Clearing is the slowest controller operation; the extra settle time
    /// elapses before this returns, so the next command cannot arrive
    /// early.
    pub fn clear(&mut self) -> Result<(), Error<I2C::Error>> {
        let res = self.interface.cmd(Cmd::CLEAR);
        self.interface.delay.delay_ms(2);
        res
    }

    /// Return the cursor to (0, 0) without clearing. Same settle time as
    /// [`clear`](Self::clear).
    pub fn home(&mut self) -> Result<(), Error<I2C::Error>> {
        let res = self.interface.cmd(Cmd::HOME);
        self.interface.delay.delay_ms(2);
        res
    }

    /// Move the cursor to a character cell.
    ///
    /// `col` counts 0..16, `row` counts 0..2; out-of-range positions are
    /// rejected with [`Error::InvalidArgument`] without any bus traffic.
    /// Position is recomputed from the coordinates on every call, never
    /// tracked.
    pub fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Error<I2C::Error>> {
        if col >= LCD_COLS || row >= LCD_ROWS {
            return Err(Error::InvalidArgument);
        }
        self.interface
            .cmd(Cmd::SET_DDRAM_ADDR | (col + ROW_OFFSETS[row as usize]))
    }

    /// Write a string at the current cursor position.
    ///
    /// Bytes pass straight to the controller's data register and the
    /// cursor auto-advances per the entry mode. There is no wrapping or
    /// bounds handling: past column 15 the controller keeps writing into
    /// its row buffer, which is not necessarily visible. The first failed
    /// byte aborts the stream.
    pub fn write_str(&mut self, s: &str) -> Result<(), Error<I2C::Error>> {
        for byte in s.bytes() {
            self.interface.data(byte)?;
        }
        Ok(())
    }

    /// Write a single raw character byte at the current cursor position.
    ///
    /// The value maps through the controller's character ROM.
    pub fn write_char(&mut self, c: u8) -> Result<(), Error<I2C::Error>> {
        self.interface.data(c)
    }

    /// Set the backlight color, one PWM register per channel.
    ///
    /// The three channel registers are independent and written in
    /// red/green/blue order; there is no multi-register transaction in the
    /// backlight protocol. A failure mid-sequence leaves the channels
    /// already written in effect and nothing is rolled back.
    pub fn set_rgb(&mut self, r: u8, g: u8, b: u8) -> Result<(), Error<I2C::Error>> {
        self.interface.rgb(RgbReg::PWM_RED, r)?;
        self.interface.rgb(RgbReg::PWM_GREEN, g)?;
        self.interface.rgb(RgbReg::PWM_BLUE, b)
    }

    /// Switch the whole display on or off. Display RAM is retained while
    /// off.
    pub fn set_display(&mut self, on: bool) -> Result<(), Error<I2C::Error>> {
        self.update_display_control(Flag::DISPLAY_ON, on)
    }

    /// Show or hide the underline cursor.
    pub fn set_cursor_visible(&mut self, on: bool) -> Result<(), Error<I2C::Error>> {
        self.update_display_control(Flag::CURSOR_ON, on)
    }

    /// Enable or disable blinking of the cursor cell.
    pub fn set_blink(&mut self, on: bool) -> Result<(), Error<I2C::Error>> {
        self.update_display_control(Flag::BLINK_ON, on)
    }

    /// Set the direction the cursor advances after each character.
    pub fn set_text_direction(&mut self, dir: TextDirection) -> Result<(), Error<I2C::Error>> {
        self.update_entry_mode(Flag::ENTRY_LEFT, dir == TextDirection::LeftToRight)
    }

    /// Enable or disable autoscroll: with autoscroll on, writing a
    /// character shifts the existing text instead of moving the cursor.
    pub fn set_autoscroll(&mut self, on: bool) -> Result<(), Error<I2C::Error>> {
        self.update_entry_mode(Flag::ENTRY_SHIFT_INCREMENT, on)
    }

    /// Tear the driver down and hand back the bus and delay provider.
    ///
    /// No bus traffic is issued; both chips keep their last programmed
    /// state.
    pub fn release(self) -> (I2C, D) {
        self.interface.release()
    }

    /// Toggle one display-control flag, preserving the other two.
    ///
    /// The rewrite carries the full flag set from the shadow. The shadow is
    /// committed only after the write is confirmed.
    fn update_display_control(&mut self, mask: u8, on: bool) -> Result<(), Error<I2C::Error>> {
        let control = if on {
            self.display_control | mask
        } else {
            self.display_control & !mask
        };
        self.interface.cmd(Cmd::DISPLAY_CTRL | control)?;
        self.display_control = control;
        Ok(())
    }

    /// Toggle one entry-mode flag, preserving the other. Same shadow
    /// discipline as [`update_display_control`](Self::update_display_control).
    fn update_entry_mode(&mut self, mask: u8, on: bool) -> Result<(), Error<I2C::Error>> {
        let mode = if on {
            self.display_mode | mask
        } else {
            self.display_mode & !mask
        };
        self.interface.cmd(Cmd::ENTRY_MODE | mode)?;
        self.display_mode = mode;
        Ok(())
    }
}

impl<I2C, D> uWrite for Jhd1313m3<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = Error<I2C::Error>;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.write_str(s)
    }
}

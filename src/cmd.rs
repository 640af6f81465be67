/// HD44780-compatible command opcodes understood by the text controller.
///
/// A command byte is the opcode OR'd with its register-specific flags from
/// [`Flag`](crate::flag::Flag).
pub struct Cmd;
#[allow(missing_docs)]
impl Cmd {
    pub const CLEAR: u8 = 0x01;
    pub const HOME: u8 = 0x02;
    pub const ENTRY_MODE: u8 = 0x04;
    pub const DISPLAY_CTRL: u8 = 0x08;
    pub const SHIFT: u8 = 0x10;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_CGRAM_ADDR: u8 = 0x40;
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

/// Register map of the PCA9633-compatible backlight controller.
///
/// The backlight chip takes plain `[register, value]` writes, without the
/// register-select framing the text controller uses.
pub struct RgbReg;
#[allow(missing_docs)]
impl RgbReg {
    pub const MODE1: u8 = 0x00;
    pub const MODE2: u8 = 0x01;
    pub const PWM_RED: u8 = 0x02;
    pub const PWM_GREEN: u8 = 0x03;
    pub const PWM_BLUE: u8 = 0x04;
    pub const LEDOUT: u8 = 0x08;
}

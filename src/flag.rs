/// Flag values for the HD44780 command registers and the backlight
/// controller's mode registers, grouped by the register that owns them.
///
/// The display-control and entry-mode registers are write-only, so the
/// driver keeps a shadow of the last flags it successfully wrote and ORs
/// the full set into every rewrite of the register.
pub struct Flag;
#[allow(missing_docs)]
impl Flag {
    // Entry mode (0x04) flags
    pub const ENTRY_LEFT: u8 = 0x02;
    pub const ENTRY_RIGHT: u8 = 0x00;
    pub const ENTRY_SHIFT_INCREMENT: u8 = 0x01;
    pub const ENTRY_SHIFT_DECREMENT: u8 = 0x00;

    // Display control (0x08) flags
    pub const DISPLAY_ON: u8 = 0x04;
    pub const DISPLAY_OFF: u8 = 0x00;
    pub const CURSOR_ON: u8 = 0x02;
    pub const CURSOR_OFF: u8 = 0x00;
    pub const BLINK_ON: u8 = 0x01;
    pub const BLINK_OFF: u8 = 0x00;

    // Function set (0x20) flags
    pub const MODE_8BIT: u8 = 0x10;
    pub const MODE_4BIT: u8 = 0x00;
    pub const LINES_2: u8 = 0x08;
    pub const LINES_1: u8 = 0x00;
    pub const DOTS_5X10: u8 = 0x04;
    pub const DOTS_5X8: u8 = 0x00;

    // Backlight MODE1 (0x00): normal operation, oscillator running
    pub const RGB_MODE1_NORMAL: u8 = 0x00;

    // Backlight MODE2 (0x01): OUTDRV=1, push-pull output drivers
    pub const RGB_MODE2_OUTDRV: u8 = 0x01;

    // Backlight LEDOUT (0x08): LDRx=10 on all three channels,
    // per-channel PWM without group dimming
    pub const RGB_LEDOUT_PWM_ALL: u8 = 0xAA;
}

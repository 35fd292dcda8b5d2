use super::{CommandFrame, LCD_CMD_DISPLAYCONTROL, SETTING_COMMAND, SPECIAL_COMMAND};
use crate::bit_configurations::DisplayControlBits;

// base setting codes of the backlight channels; each takes 0..=BACKLIGHT_STEPS on top
pub const BACKLIGHT_RED_BASE: u8 = 128; //  128 = off, 157 = 100%
pub const BACKLIGHT_GREEN_BASE: u8 = 158; //  158 = off, 187 = 100%
pub const BACKLIGHT_BLUE_BASE: u8 = 188; //  188 = off, 217 = 100%
pub const BACKLIGHT_STEPS: u8 = 29;

/// Scale a 0-255 channel value onto the 0-29 brightness steps of the firmware. Zero stays
/// exactly zero; any other value is truncated, so small values may also end up at 0.
pub const fn scale_channel(value: u8) -> u8 {
    if value == 0 {
        return 0;
    }
    (value as u16 * BACKLIGHT_STEPS as u16 / 255) as u8
}

/// Encode a backlight color change. The three channel settings are bracketed by switching the
/// display off and back on, as the panel garbles if the backlight changes while it is driven.
///
/// `display_control` is the live control state; cursor and blink are preserved in both bracket
/// bytes. The display is always on after the frame.
pub fn backlight_frame(
    red: u8,
    green: u8,
    blue: u8,
    display_control: DisplayControlBits,
) -> CommandFrame {
    CommandFrame::from_bytes([
        SPECIAL_COMMAND,
        LCD_CMD_DISPLAYCONTROL | display_control.with_display_off().bits(),
        SETTING_COMMAND,
        BACKLIGHT_RED_BASE + scale_channel(red),
        SETTING_COMMAND,
        BACKLIGHT_GREEN_BASE + scale_channel(green),
        SETTING_COMMAND,
        BACKLIGHT_BLUE_BASE + scale_channel(blue),
        SPECIAL_COMMAND,
        LCD_CMD_DISPLAYCONTROL | display_control.with_display_on().bits(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_channel() {
        assert_eq!(scale_channel(0), 0);
        assert_eq!(scale_channel(255), 29);
        assert_eq!(scale_channel(128), 14);

        let mut previous = 0;
        for value in 0..=255u8 {
            let scaled = scale_channel(value);
            assert!(scaled <= BACKLIGHT_STEPS);
            assert!(scaled >= previous, "not monotonic at {}", value);
            previous = scaled;
        }
    }

    #[test]
    fn test_backlight_frame() {
        let frame = backlight_frame(255, 0, 128, DisplayControlBits::default());
        assert_eq!(
            frame.as_bytes(),
            &[0xFE, 0x08, 0x7C, 157, 0x7C, 158, 0x7C, 202, 0xFE, 0x0C]
        );
    }

    #[test]
    fn test_backlight_frame_keeps_cursor_and_blink() {
        let mut control = DisplayControlBits::default();
        control.set_cursor_on(true);
        control.set_blink_on(true);
        let frame = backlight_frame(0, 255, 0, control);
        assert_eq!(
            frame.as_bytes(),
            &[0xFE, 0x0B, 0x7C, 128, 0x7C, 187, 0x7C, 188, 0xFE, 0x0F]
        );

        // a display that was switched off comes back on
        let mut control = DisplayControlBits::default();
        control.set_display_on(false);
        let frame = backlight_frame(0, 0, 255, control);
        assert_eq!(
            frame.as_bytes(),
            &[0xFE, 0x08, 0x7C, 128, 0x7C, 158, 0x7C, 217, 0xFE, 0x0C]
        );
    }
}

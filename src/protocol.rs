//! Encoding of the OpenLCD command protocol. Nothing in this module performs I/O; every function
//! turns a display operation into the exact bytes the display firmware expects.
//!
//! The OpenLCD firmware reserves two escape bytes. `SETTING_COMMAND` (`|`) is followed by one
//! byte selecting a firmware setting, and the same escape is shared by the width, line count,
//! contrast, clear and backlight settings. `SPECIAL_COMMAND` is followed by one byte that is
//! passed to the HD44780 controller behind the firmware. All other bytes are written to the
//! character buffer at the cursor. There is no acknowledgement, so a byte out of place is
//! silently interpreted as a different command.
pub mod address;
pub mod backlight;

pub use address::ddram_address;
pub use backlight::{backlight_frame, scale_channel};

// command escapes
pub const SPECIAL_COMMAND: u8 = 0xFE; //  Pass the following byte to the HD44780 controller
pub const SETTING_COMMAND: u8 = 0x7C; //  Change a firmware setting: width, lines, backlight, etc

// setting commands
pub const SETTING_WIDTH_20: u8 = 0x03; //  Change width to 20 columns
pub const SETTING_WIDTH_16: u8 = 0x04; //  Change width to 16 columns
pub const SETTING_LINES_4: u8 = 0x05; //  Change to 4 lines
pub const SETTING_LINES_2: u8 = 0x06; //  Change to 2 lines
pub const SETTING_LINES_1: u8 = 0x07; //  Change to 1 line
pub const CONTRAST_COMMAND: u8 = 0x18; //  Change the contrast, followed by one byte
pub const CREATE_CHAR_BASE: u8 = 0x1B; //  Store a custom character, 0x1B + location, followed by 8 bytes
pub const WRITE_CHAR_BASE: u8 = 0x23; //  Write a custom character, 0x23 + location
pub const SET_RGB_COMMAND: u8 = 0x2B; //  Set the RGB backlight, followed by three bytes
pub const CLEAR_COMMAND: u8 = 0x2D; //  Clear the display and return the cursor home
pub const ENABLE_SYSTEM_MESSAGE_DISPLAY: u8 = 0x2E; //  Show messages such as 'Contrast: 5'
pub const DISABLE_SYSTEM_MESSAGE_DISPLAY: u8 = 0x2F; //  Hide system messages

// special commands
pub const LCD_CMD_RETURNHOME: u8 = 0x02; //  Set cursor position to zero
pub const LCD_CMD_ENTRYMODESET: u8 = 0x04; //  Sets the entry mode
pub const LCD_CMD_DISPLAYCONTROL: u8 = 0x08; //  Controls the display; does stuff like turning it off and on
pub const LCD_CMD_CURSORSHIFT: u8 = 0x10; //  Lets you move the cursor
pub const LCD_CMD_SETDDRAMADDR: u8 = 0x80; //  Used to set the DDRAM (Display Data RAM)

/// Number of custom character slots in the display firmware.
pub const CUSTOM_CHAR_COUNT: u8 = 8;

const MAX_FRAME_SIZE: usize = 10; // the bracketed backlight frame is the longest

/// A short, ordered run of bytes making up one atomic protocol operation. Frames are built,
/// transmitted in a single I2C write and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandFrame {
    buffer: [u8; MAX_FRAME_SIZE],
    len: usize,
}

impl CommandFrame {
    const fn empty() -> Self {
        CommandFrame {
            buffer: [0; MAX_FRAME_SIZE],
            len: 0,
        }
    }

    /// Build a frame from a fixed list of bytes. `N` must not exceed the frame capacity.
    pub(crate) const fn from_bytes<const N: usize>(bytes: [u8; N]) -> Self {
        let mut frame = Self::empty();
        let mut idx = 0;
        while idx < N {
            frame.buffer[idx] = bytes[idx];
            idx += 1;
        }
        frame.len = N;
        frame
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for CommandFrame {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// `[SETTING_COMMAND, code]`
pub const fn setting_frame(code: u8) -> CommandFrame {
    CommandFrame::from_bytes([SETTING_COMMAND, code])
}

/// `[SPECIAL_COMMAND, code]`
pub const fn special_frame(code: u8) -> CommandFrame {
    CommandFrame::from_bytes([SPECIAL_COMMAND, code])
}

/// A setting that takes one argument byte, such as the contrast.
pub const fn setting_with_argument_frame(code: u8, argument: u8) -> CommandFrame {
    CommandFrame::from_bytes([SETTING_COMMAND, code, argument])
}

/// Sets all three backlight channels at full 0-255 resolution in one setting. Unlike
/// [`backlight_frame`] the display is not switched off while the channels change.
pub const fn rgb_frame(red: u8, green: u8, blue: u8) -> CommandFrame {
    CommandFrame::from_bytes([SETTING_COMMAND, SET_RGB_COMMAND, red, green, blue])
}

/// Stores a 5x8 custom character in one of the eight firmware slots. The location is taken
/// modulo 8 and each row is masked to its 5 pixel bits.
pub const fn custom_char_frame(location: u8, charmap: [u8; 8]) -> CommandFrame {
    let mut bytes = [0u8; MAX_FRAME_SIZE];
    bytes[0] = SETTING_COMMAND;
    bytes[1] = CREATE_CHAR_BASE + (location & (CUSTOM_CHAR_COUNT - 1));
    let mut idx = 0;
    while idx < charmap.len() {
        bytes[idx + 2] = charmap[idx] & 0x1F;
        idx += 1;
    }
    CommandFrame::from_bytes(bytes)
}

/// Prints the custom character stored at `location` (modulo 8) at the cursor.
pub const fn write_custom_char_frame(location: u8) -> CommandFrame {
    setting_frame(WRITE_CHAR_BASE + (location & (CUSTOM_CHAR_COUNT - 1)))
}

/// Setting code selecting the display width, if the width is supported.
pub const fn columns_code(columns: u8) -> Option<u8> {
    match columns {
        16 => Some(SETTING_WIDTH_16),
        20 => Some(SETTING_WIDTH_20),
        _ => None,
    }
}

/// Setting code selecting the number of lines, if the line count is supported.
pub const fn rows_code(rows: u8) -> Option<u8> {
    match rows {
        1 => Some(SETTING_LINES_1),
        2 => Some(SETTING_LINES_2),
        4 => Some(SETTING_LINES_4),
        _ => None,
    }
}

/// The frame sent at initialization, telling the firmware the size of the attached panel and
/// clearing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionSetup {
    pub frame: CommandFrame,
    /// `false` when the rows or columns were not supported and the fallback (16 columns,
    /// 1 line) was encoded instead.
    pub supported: bool,
}

/// Encodes `[width setting, lines setting, clear]` as one transmission. Unsupported dimensions
/// are never passed through: they are replaced by 16 columns and 1 line and flagged.
pub const fn dimension_setup(rows: u8, columns: u8) -> DimensionSetup {
    let (columns, columns_ok) = match columns_code(columns) {
        Some(code) => (code, true),
        None => (SETTING_WIDTH_16, false),
    };
    let (rows, rows_ok) = match rows_code(rows) {
        Some(code) => (code, true),
        None => (SETTING_LINES_1, false),
    };
    DimensionSetup {
        frame: CommandFrame::from_bytes([
            SETTING_COMMAND,
            columns,
            SETTING_COMMAND,
            rows,
            SETTING_COMMAND,
            CLEAR_COMMAND,
        ]),
        supported: columns_ok && rows_ok,
    }
}

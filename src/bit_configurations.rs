use bitfield::bitfield;

// flags for display on/off control
pub const LCD_FLAG_DISPLAYON: u8 = 0x04; //  Turns the display on
pub const LCD_FLAG_CURSORON: u8 = 0x02; //  Turns the cursor on
pub const LCD_FLAG_BLINKON: u8 = 0x01; //  Turns on the blinking cursor

// flags for display entry mode
pub const LCD_FLAG_ENTRYLEFT: u8 = 0x02; //  Text flows from left to right
pub const LCD_FLAG_ENTRYSHIFTINCREMENT: u8 = 0x01; //  Shift the display on each write ('autoscroll')

// flags for display/cursor shift
pub const LCD_FLAG_DISPLAYMOVE: u8 = 0x08; //  Flag for moving the display
pub const LCD_FLAG_CURSORMOVE: u8 = 0x00; //  Flag for moving the cursor
pub const LCD_FLAG_MOVERIGHT: u8 = 0x04; //  Flag for moving right
pub const LCD_FLAG_MOVELEFT: u8 = 0x00; //  Flag for moving left

// Argument bits of the special DISPLAYCONTROL command
bitfield! {
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct DisplayControlBits(u8);
    impl Debug;
    impl BitAnd;
    pub blink_on, set_blink_on: 0;
    pub cursor_on, set_cursor_on: 1;
    pub display_on, set_display_on: 2;
}

impl Default for DisplayControlBits {
    /// Display on, cursor off, blink off. This is the state the OpenLCD firmware boots into.
    fn default() -> Self {
        Self(LCD_FLAG_DISPLAYON)
    }
}

impl DisplayControlBits {
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// The control bits with the display-on flag cleared. Cursor and blink are left untouched.
    pub fn with_display_off(&self) -> Self {
        Self(self.0 & !LCD_FLAG_DISPLAYON)
    }

    /// The control bits with the display-on flag set. Cursor and blink are left untouched.
    pub fn with_display_on(&self) -> Self {
        Self(self.0 | LCD_FLAG_DISPLAYON)
    }
}

// Argument bits of the special ENTRYMODESET command
bitfield! {
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct EntryModeBits(u8);
    impl Debug;
    impl BitAnd;
    pub shift_increment, set_shift_increment: 0;
    pub entry_left, set_entry_left: 1;
}

impl Default for EntryModeBits {
    /// Left to right, no autoscroll.
    fn default() -> Self {
        Self(LCD_FLAG_ENTRYLEFT)
    }
}

impl EntryModeBits {
    pub fn bits(&self) -> u8 {
        self.0
    }
}

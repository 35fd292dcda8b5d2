//! This Rust `embedded-hal`-based library controls a [SparkFun SerLCD](https://www.sparkfun.com/products/16398)
//! character display, or any other display running the OpenLCD firmware, over I2C in an embedded, `no_std` environment.
//!
//! The OpenLCD firmware sits between the I2C bus and an HD44780 compatible controller. Rather than driving the controller
//! pins, the host sends a byte stream: plain bytes are printed at the cursor, the `|` (`0x7C`) escape introduces a
//! firmware setting (panel size, contrast, backlight color, clear), and the `0xFE` escape passes one command byte on
//! to the HD44780 (cursor position, display control, entry mode). This library encodes those byte sequences.
//!
//! Key features include:
//! - Convenient high-level API for controlling the display
//! - 16x1 through 20x4 panels
//! - RGB backlight control
//! - Support for custom characters
//! - `core::fmt::Write` implementation for easy use with the `write!` macro
//! - A fixed width ADC readout line formatter that does not allocate
//! - Compatible with the `embedded-hal` traits v1.0 and later
//! - Optional support for the `defmt` and `ufmt` logging frameworks
//!
//! ## Usage
//! Add this to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! serlcd-character-display = { version = "0.1", features = ["defmt"] }
//! ```
//! The `features = ["defmt"]` line is optional and enables the `defmt` feature, which allows the library's errors to be used with the `defmt` logging
//! framework. Another optional feature is `features = ["ufmt"]`, which enables the `ufmt` feature, allowing the `uwriteln!` and `uwrite!` macros to be used.
//!
//! Create the display with the size of the attached panel:
//! ```rust
//! use serlcd_character_display::{DisplaySize, SerLcd};
//!
//! // board setup
//! let i2c = ...; // I2C peripheral
//! let delay = ...; // DelayNs implementation
//!
//! let mut lcd = SerLcd::new(i2c, DisplaySize::LCD_20X4, delay);
//! ```
//! The default I2C address of the OpenLCD is the 7-bit address `0x72`. The I2C implementation adds the read/write bit,
//! so the address seen on the wire is `0xE4`. Use `SerLcd::new_with_address` for a display that was moved to another address.
//!
//! Initialize the display:
//! ```rust
//! if let Err(e) = lcd.init() {
//!    panic!("Error initializing LCD: {}", e);
//! }
//! ```
//! Use the display:
//! ```rust
//! lcd.set_backlight(255, 0, 128)?.clear()?.set_cursor(0, 1)?;
//! lcd.print("Hello, world!")?;
//! // can also use the `core::fmt::write!` macro
//! use core::fmt::Write;
//!
//! write!(lcd, "Hello, world!")?;
//! ```
//! The various methods for controlling the LCD each return a `Result` that wraps the display object in `Ok()`, allowing for easy chaining
//! of commands.
//!
//! ### Delivery
//! The OpenLCD protocol has no acknowledgement or read-back. A successful `Result` means the bytes were written to the I2C bus,
//! not that the display understood them. Text is written as is, so a text byte equal to `0x7C` or `0xFE` is interpreted by the
//! display as the start of a command.
//!
#![no_std]
use core::fmt::Display;

use embedded_hal::{delay::DelayNs, i2c};

pub mod bit_configurations;
mod driver;
pub mod protocol;
pub mod readout;

pub use readout::AdcReadout;

/// Default 7-bit I2C address of the OpenLCD firmware
pub const DEFAULT_I2C_ADDRESS: u8 = 0x72;

#[derive(Debug, PartialEq, Copy, Clone)]
/// Errors that can occur when using the display
pub enum CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    /// I2C error returned from the underlying I2C implementation. The write is not retried.
    I2cError(I2C::Error),
    /// The display size is not one the firmware supports. The display was configured as 16x1 instead.
    UnsupportedDisplaySize,
    /// Row has no DDRAM address
    RowOutOfRange,
    /// Formatting error
    FormattingError(core::fmt::Error),
}

impl<I2C> From<core::fmt::Error> for CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    fn from(err: core::fmt::Error) -> Self {
        CharacterDisplayError::FormattingError(err)
    }
}

impl<I2C> From<&CharacterDisplayError<I2C>> for &'static str
where
    I2C: i2c::I2c,
{
    fn from(err: &CharacterDisplayError<I2C>) -> Self {
        match err {
            CharacterDisplayError::I2cError(_) => "I2C error",
            CharacterDisplayError::UnsupportedDisplaySize => "Unsupported display size",
            CharacterDisplayError::RowOutOfRange => "Row out of range",
            CharacterDisplayError::FormattingError(_) => "Formatting error",
        }
    }
}

#[cfg(feature = "defmt")]
impl<I2C> defmt::Format for CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    fn format(&self, fmt: defmt::Formatter) {
        let msg: &'static str = From::from(self);
        defmt::write!(fmt, "{}", msg);
    }
}

#[cfg(feature = "ufmt")]
impl<I2C> ufmt::uDisplay for CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    fn fmt<W>(&self, w: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        let msg: &'static str = From::from(self);
        ufmt::uwrite!(w, "{}", msg)
    }
}

impl<I2C> Display for CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = From::from(self);
        write!(f, "{}", msg)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// The size of the attached panel. The firmware supports 1, 2 or 4 rows of 16 or 20 columns.
/// Other values are accepted here and replaced by 16x1 when the display is initialized.
pub struct DisplaySize {
    pub rows: u8,
    pub columns: u8,
}

impl DisplaySize {
    pub const LCD_16X1: DisplaySize = DisplaySize::new(1, 16);
    pub const LCD_16X2: DisplaySize = DisplaySize::new(2, 16);
    pub const LCD_16X4: DisplaySize = DisplaySize::new(4, 16);
    pub const LCD_20X1: DisplaySize = DisplaySize::new(1, 20);
    pub const LCD_20X2: DisplaySize = DisplaySize::new(2, 20);
    pub const LCD_20X4: DisplaySize = DisplaySize::new(4, 20);

    pub const fn new(rows: u8, columns: u8) -> Self {
        DisplaySize { rows, columns }
    }

    /// Whether the firmware can be configured for this size
    pub const fn is_supported(&self) -> bool {
        protocol::rows_code(self.rows).is_some() && protocol::columns_code(self.columns).is_some()
    }
}

impl Display for DisplaySize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

pub(crate) struct DeviceSetupConfig<I2C, DELAY>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
{
    size: DisplaySize,
    i2c: I2C,
    address: u8,
    delay: DELAY,
}

/// An OpenLCD character display on an I2C bus. Owns the bus, the delay and the display state;
/// all commands go through `&mut self` and complete before returning.
pub struct SerLcd<I2C, DELAY>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
{
    config: DeviceSetupConfig<I2C, DELAY>,
    driver: driver::OpenLcdDriver,
}

impl<I2C, DELAY> SerLcd<I2C, DELAY>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
{
    /// Create a new character display object with the default OpenLCD I2C address.
    pub fn new(i2c: I2C, size: DisplaySize, delay: DELAY) -> Self {
        Self::new_with_address(i2c, DEFAULT_I2C_ADDRESS, size, delay)
    }

    /// Create a new character display object with a specific 7-bit I2C address.
    pub fn new_with_address(i2c: I2C, address: u8, size: DisplaySize, delay: DELAY) -> Self {
        Self {
            config: DeviceSetupConfig {
                size,
                i2c,
                address,
                delay,
            },
            driver: driver::OpenLcdDriver::default(),
        }
    }

    /// Initialize the display. This must be called before using the display. Sends the panel size and clears the display.
    ///
    /// If the size is not supported, the display is configured as 16x1 and `UnsupportedDisplaySize` is returned. The display
    /// is usable afterwards.
    pub fn init(&mut self) -> Result<(), CharacterDisplayError<I2C>> {
        self.driver.init(&mut self.config)
    }

    /// returns a reference to the I2C peripheral. mostly needed for testing
    #[cfg(test)]
    fn i2c(&mut self) -> &mut I2C {
        &mut self.config.i2c
    }

    /// returns the `DisplaySize` used to create the display
    pub fn display_size(&self) -> DisplaySize {
        self.config.size
    }

    /// returns the I2C address of the display
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Release the I2C peripheral and the delay
    pub fn release(self) -> (I2C, DELAY) {
        (self.config.i2c, self.config.delay)
    }

    //--------------------------------------------------------------------------------------------------
    // high level commands, for the user!
    //--------------------------------------------------------------------------------------------------

    /// Clear the display and return the cursor home
    pub fn clear(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.clear(&mut self.config)?;
        Ok(self)
    }

    /// Set the cursor to the home position.
    pub fn home(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.home(&mut self.config)?;
        Ok(self)
    }

    /// Set the cursor position at specified column and row. Columns and rows are zero-indexed.
    ///
    /// Rows 0 to 3 are accepted regardless of the display size. On a display with fewer rows, a higher row addresses
    /// DDRAM that is not visible.
    pub fn set_cursor(
        &mut self,
        col: u8,
        row: u8,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.set_cursor(&mut self.config, col, row)?;
        Ok(self)
    }

    /// Set the cursor visibility.
    pub fn show_cursor(
        &mut self,
        show_cursor: bool,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.show_cursor(&mut self.config, show_cursor)?;
        Ok(self)
    }

    /// Set the cursor blinking.
    pub fn blink_cursor(
        &mut self,
        blink_cursor: bool,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.blink_cursor(&mut self.config, blink_cursor)?;
        Ok(self)
    }

    /// Set the display visibility. The display contents are kept while it is off.
    pub fn show_display(
        &mut self,
        show_display: bool,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.show_display(&mut self.config, show_display)?;
        Ok(self)
    }

    /// Scroll the display to the left.
    pub fn scroll_display_left(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.scroll_left(&mut self.config)?;
        Ok(self)
    }

    /// Scroll the display to the right.
    pub fn scroll_display_right(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.scroll_right(&mut self.config)?;
        Ok(self)
    }

    /// Move the cursor one position to the left.
    pub fn move_cursor_left(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.move_cursor_left(&mut self.config)?;
        Ok(self)
    }

    /// Move the cursor one position to the right.
    pub fn move_cursor_right(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.move_cursor_right(&mut self.config)?;
        Ok(self)
    }

    /// Set the text flow direction to left to right.
    pub fn left_to_right(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.left_to_right(&mut self.config)?;
        Ok(self)
    }

    /// Set the text flow direction to right to left.
    pub fn right_to_left(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.right_to_left(&mut self.config)?;
        Ok(self)
    }

    /// Set the auto scroll mode.
    pub fn autoscroll(
        &mut self,
        autoscroll: bool,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.autoscroll(&mut self.config, autoscroll)?;
        Ok(self)
    }

    /// Set the RGB backlight color. Each channel is 0-255 and is scaled to the 30 brightness steps of the firmware;
    /// 0 turns the channel off. The display is switched off while the color changes and is on afterwards.
    pub fn set_backlight(
        &mut self,
        red: u8,
        green: u8,
        blue: u8,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.set_backlight(&mut self.config, red, green, blue)?;
        Ok(self)
    }

    /// Set the RGB backlight color with the single RGB setting of newer firmware, without switching the display off.
    pub fn set_fast_backlight(
        &mut self,
        red: u8,
        green: u8,
        blue: u8,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver
            .set_fast_backlight(&mut self.config, red, green, blue)?;
        Ok(self)
    }

    /// Set the display contrast. The firmware default is 120.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.set_contrast(&mut self.config, contrast)?;
        Ok(self)
    }

    /// Enable or disable the firmware's system messages, such as 'Contrast: 5' shown after a setting change.
    pub fn system_messages(
        &mut self,
        enable: bool,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.system_messages(&mut self.config, enable)?;
        Ok(self)
    }

    /// Create a new custom character in one of the eight slots.
    pub fn create_char(
        &mut self,
        location: u8,
        charmap: [u8; 8],
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver
            .create_char(&mut self.config, location, charmap)?;
        Ok(self)
    }

    /// Print a custom character created with `create_char` at the current cursor position.
    pub fn write_custom_char(
        &mut self,
        location: u8,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.write_custom_char(&mut self.config, location)?;
        Ok(self)
    }

    /// Prints a string to the LCD at the current cursor position.
    pub fn print(&mut self, text: &str) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.write_bytes(text.as_bytes())
    }

    /// Writes raw bytes to the character buffer at the current cursor position. No framing is applied.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.driver.write_bytes(&mut self.config, data)?;
        Ok(self)
    }
}

/// Implement the `core::fmt::Write` trait for the display, allowing it to be used with the `write!` macro.
impl<I2C, DELAY> core::fmt::Write for SerLcd<I2C, DELAY>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
{
    fn write_str(&mut self, s: &str) -> Result<(), core::fmt::Error> {
        if let Err(_e) = self.print(s) {
            return Err(core::fmt::Error);
        }
        Ok(())
    }
}

#[cfg(feature = "ufmt")]
/// Implement the `ufmt::uWrite` trait for the display, allowing it to be used with the `uwriteln!` and `uwrite!` macros.
impl<I2C, DELAY> ufmt::uWrite for SerLcd<I2C, DELAY>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
{
    fn write_str(&mut self, s: &str) -> Result<(), CharacterDisplayError<I2C>> {
        self.print(s)?;
        Ok(())
    }

    type Error = CharacterDisplayError<I2C>;
}

#[cfg(test)]
mod lib_tests {
    extern crate std;
    use super::*;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        i2c::{Mock as I2cMock, Transaction as I2cTransaction},
    };

    #[test]
    fn test_init_sends_dimensions_and_clear() {
        let i2c_address = 0x72_u8;
        let expected_i2c_transactions = std::vec![
            // 20 columns, 4 lines, clear
            I2cTransaction::write(i2c_address, std::vec![0x7C, 0x03, 0x7C, 0x05, 0x7C, 0x2D]),
        ];

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = SerLcd::new(i2c, DisplaySize::LCD_20X4, NoopDelay::new());
        let result = lcd.init();
        assert!(result.is_ok());
        assert!(lcd.display_size() == DisplaySize::LCD_20X4);

        // finish the i2c mock
        lcd.i2c().done();
    }

    #[test]
    fn test_init_unsupported_size_sends_fallback() {
        let i2c_address = 0x72_u8;
        let expected_i2c_transactions = std::vec![
            // 16 columns, 1 line, clear
            I2cTransaction::write(i2c_address, std::vec![0x7C, 0x04, 0x7C, 0x07, 0x7C, 0x2D]),
        ];

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = SerLcd::new(i2c, DisplaySize::new(3, 40), NoopDelay::new());
        assert!(!lcd.display_size().is_supported());
        let result = lcd.init();
        assert!(matches!(
            result,
            Err(CharacterDisplayError::UnsupportedDisplaySize)
        ));

        lcd.i2c().done();
    }

    #[test]
    fn test_init_transport_error_wins_over_size_error() {
        let i2c_address = 0x72_u8;
        let expected_i2c_transactions = std::vec![I2cTransaction::write(
            i2c_address,
            std::vec![0x7C, 0x04, 0x7C, 0x07, 0x7C, 0x2D]
        )
        .with_error(ErrorKind::Other)];

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = SerLcd::new(i2c, DisplaySize::new(0, 16), NoopDelay::new());
        let result = lcd.init();
        assert!(matches!(
            result,
            Err(CharacterDisplayError::I2cError(ErrorKind::Other))
        ));

        lcd.i2c().done();
    }

    #[test]
    fn test_custom_address() {
        let i2c_address = 0x30_u8;
        let expected_i2c_transactions = std::vec![
            I2cTransaction::write(i2c_address, std::vec![0x7C, 0x04, 0x7C, 0x06, 0x7C, 0x2D]),
        ];

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd =
            SerLcd::new_with_address(i2c, i2c_address, DisplaySize::LCD_16X2, NoopDelay::new());
        assert_eq!(lcd.address(), i2c_address);
        lcd.init().unwrap();

        let (mut i2c, _delay) = lcd.release();
        i2c.done();
    }

    #[test]
    fn test_clear_twice() {
        let i2c_address = 0x72_u8;
        let expected_i2c_transactions = std::vec![
            I2cTransaction::write(i2c_address, std::vec![0x7C, 0x2D]),
            I2cTransaction::write(i2c_address, std::vec![0x7C, 0x2D]),
        ];

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = SerLcd::new(i2c, DisplaySize::LCD_16X2, NoopDelay::new());
        let control = lcd.driver.display_control();
        let mode = lcd.driver.display_mode();
        lcd.clear().unwrap().clear().unwrap();
        assert_eq!(lcd.driver.display_control(), control);
        assert_eq!(lcd.driver.display_mode(), mode);

        lcd.i2c().done();
    }

    #[test]
    fn test_home() {
        let i2c_address = 0x72_u8;
        let expected_i2c_transactions =
            std::vec![I2cTransaction::write(i2c_address, std::vec![0xFE, 0x02])];

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = SerLcd::new(i2c, DisplaySize::LCD_16X2, NoopDelay::new());
        lcd.home().unwrap();

        lcd.i2c().done();
    }

    #[test]
    fn test_set_cursor() {
        let i2c_address = 0x72_u8;
        let expected_i2c_transactions = std::vec![
            // LCD_CMD_SETDDRAMADDR | (0 + 0x00)
            I2cTransaction::write(i2c_address, std::vec![0xFE, 0x80]),
            // LCD_CMD_SETDDRAMADDR | (5 + 0x40)
            I2cTransaction::write(i2c_address, std::vec![0xFE, 0xC5]),
            // LCD_CMD_SETDDRAMADDR | (19 + 0x54)
            I2cTransaction::write(i2c_address, std::vec![0xFE, 0xE7]),
            // row 2 on a 2 row display is passed through
            // LCD_CMD_SETDDRAMADDR | (3 + 0x14)
            I2cTransaction::write(i2c_address, std::vec![0xFE, 0x97]),
        ];

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = SerLcd::new(i2c, DisplaySize::LCD_16X2, NoopDelay::new());
        lcd.set_cursor(0, 0).unwrap();
        lcd.set_cursor(5, 1).unwrap();
        lcd.set_cursor(19, 3).unwrap();
        lcd.set_cursor(3, 2).unwrap();

        lcd.i2c().done();
    }

    #[test]
    fn test_set_cursor_row_out_of_range() {
        let i2c = I2cMock::new(&[]);
        let mut lcd = SerLcd::new(i2c, DisplaySize::LCD_20X4, NoopDelay::new());
        let result = lcd.set_cursor(0, 4);
        assert!(matches!(result, Err(CharacterDisplayError::RowOutOfRange)));

        lcd.i2c().done();
    }

    #[test]
    fn test_backlight_sequence() {
        let i2c_address = 0x72_u8;
        let expected_i2c_transactions = std::vec![I2cTransaction::write(
            i2c_address,
            std::vec![0xFE, 0x08 & !0x04, 0x7C, 157, 0x7C, 158, 0x7C, 202, 0xFE, 0x08 | 0x04]
        )];

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = SerLcd::new(i2c, DisplaySize::LCD_16X2, NoopDelay::new());
        lcd.set_backlight(255, 0, 128).unwrap();

        lcd.i2c().done();
    }

    #[test]
    fn test_cursor_toggle_round_trip() {
        let i2c_address = 0x72_u8;
        let expected_i2c_transactions = std::vec![
            // blink on: LCD_CMD_DISPLAYCONTROL | LCD_FLAG_DISPLAYON | LCD_FLAG_BLINKON = 0x0D
            I2cTransaction::write(i2c_address, std::vec![0xFE, 0x0D]),
            // cursor on: 0x0F
            I2cTransaction::write(i2c_address, std::vec![0xFE, 0x0F]),
            // cursor off: 0x0D
            I2cTransaction::write(i2c_address, std::vec![0xFE, 0x0D]),
        ];

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = SerLcd::new(i2c, DisplaySize::LCD_16X2, NoopDelay::new());
        lcd.blink_cursor(true).unwrap();
        let before = lcd.driver.display_control();
        lcd.show_cursor(true).unwrap().show_cursor(false).unwrap();
        assert_eq!(lcd.driver.display_control(), before);

        lcd.i2c().done();
    }

    #[test]
    fn test_print_and_write() {
        use core::fmt::Write;

        let i2c_address = 0x72_u8;
        let expected_i2c_transactions = std::vec![
            I2cTransaction::write(i2c_address, std::vec![b'H', b'i', b'!']),
            I2cTransaction::write(i2c_address, std::vec![b'4', b'2']),
        ];

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = SerLcd::new(i2c, DisplaySize::LCD_16X2, NoopDelay::new());
        lcd.print("Hi!").unwrap();
        // empty strings are not sent
        lcd.print("").unwrap();
        write!(lcd, "{}", 42).unwrap();

        lcd.i2c().done();
    }

    #[test]
    fn test_write_bytes_is_not_framed() {
        let i2c_address = 0x72_u8;
        let expected_i2c_transactions = std::vec![I2cTransaction::write(
            i2c_address,
            std::vec![0x7C, 0x2D, 0xFE]
        )];

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = SerLcd::new(i2c, DisplaySize::LCD_16X2, NoopDelay::new());
        lcd.write_bytes(&[0x7C, 0x2D, 0xFE]).unwrap();

        lcd.i2c().done();
    }

    #[test]
    fn test_print_adc_readout() {
        let i2c_address = 0x72_u8;
        let expected_i2c_transactions = std::vec![
            I2cTransaction::write(i2c_address, std::vec![0xFE, 0x80]),
            I2cTransaction::write(i2c_address, b"ADC: 1023 Bit ".to_vec()),
        ];

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = SerLcd::new(i2c, DisplaySize::LCD_16X2, NoopDelay::new());
        let mut readout = AdcReadout::new();
        lcd.set_cursor(0, 0)
            .unwrap()
            .print(readout.format(1023).unwrap())
            .unwrap();

        lcd.i2c().done();
    }

    #[test]
    fn test_transport_error_is_reported() {
        let i2c_address = 0x72_u8;
        let expected_i2c_transactions = std::vec![
            I2cTransaction::write(i2c_address, std::vec![0x7C, 0x2D]).with_error(ErrorKind::Other),
            I2cTransaction::write(i2c_address, std::vec![b'x']).with_error(ErrorKind::Other),
        ];

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = SerLcd::new(i2c, DisplaySize::LCD_16X2, NoopDelay::new());
        assert!(matches!(
            lcd.clear(),
            Err(CharacterDisplayError::I2cError(ErrorKind::Other))
        ));
        let formatted = core::fmt::Write::write_str(&mut lcd, "x");
        assert_eq!(formatted, Err(core::fmt::Error));

        lcd.i2c().done();
    }

    #[test]
    fn test_error_messages() {
        let err: CharacterDisplayError<I2cMock> = CharacterDisplayError::UnsupportedDisplaySize;
        assert_eq!(std::format!("{}", err), "Unsupported display size");
        let err: CharacterDisplayError<I2cMock> = core::fmt::Error.into();
        assert_eq!(std::format!("{}", err), "Formatting error");
        assert_eq!(std::format!("{}", DisplaySize::LCD_20X4), "20x4");
    }
}

use embedded_hal::{delay::DelayNs, i2c};

use crate::{
    bit_configurations::{
        DisplayControlBits, EntryModeBits, LCD_FLAG_CURSORMOVE, LCD_FLAG_DISPLAYMOVE,
        LCD_FLAG_MOVELEFT, LCD_FLAG_MOVERIGHT,
    },
    protocol::{
        self, CLEAR_COMMAND, CONTRAST_COMMAND, DISABLE_SYSTEM_MESSAGE_DISPLAY,
        ENABLE_SYSTEM_MESSAGE_DISPLAY, LCD_CMD_CURSORSHIFT, LCD_CMD_DISPLAYCONTROL,
        LCD_CMD_ENTRYMODESET, LCD_CMD_RETURNHOME, LCD_CMD_SETDDRAMADDR,
    },
    CharacterDisplayError, DeviceSetupConfig,
};

// settle delays in milliseconds, waited after each transmission
const SETTING_SETTLE_MS: u32 = 10; //  firmware setting commands
const CLEAR_SETTLE_MS: u32 = 20; //  clear, also ends the dimension setup
const SPECIAL_SETTLE_MS: u32 = 50; //  commands passed on to the HD44780
const BACKLIGHT_SETTLE_MS: u32 = 50; //  backlight bracket, written to EEPROM by the firmware
const CUSTOM_CHAR_SETTLE_MS: u32 = 50; //  custom character, written to EEPROM by the firmware
const TEXT_SETTLE_MS: u32 = 10; //  character data

/// Tracks the display state of an OpenLCD and turns display actions into protocol frames.
/// Control and entry-mode flags are only updated after the frame carrying them was written
/// successfully, so the stored state never runs ahead of what was sent.
#[derive(Debug, Default)]
pub struct OpenLcdDriver {
    display_control: DisplayControlBits,
    display_mode: EntryModeBits,
}

impl OpenLcdDriver {
    pub fn display_control(&self) -> DisplayControlBits {
        self.display_control
    }

    pub fn display_mode(&self) -> EntryModeBits {
        self.display_mode
    }

    /// Sends the display dimensions and clears the display. Unsupported dimensions are replaced
    /// by the fallback and reported after the fallback was sent.
    pub fn init<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Initializing OpenLCD {}x{} at address {=u8:#x}",
            device.size.columns,
            device.size.rows,
            device.address
        );
        let setup = protocol::dimension_setup(device.size.rows, device.size.columns);
        self.send(device, setup.frame.as_bytes(), CLEAR_SETTLE_MS)?;

        if !setup.supported {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Unsupported display size {}x{}, sent 16x1 instead",
                device.size.columns,
                device.size.rows
            );
            return Err(CharacterDisplayError::UnsupportedDisplaySize);
        }
        Ok(())
    }

    pub fn clear<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        self.send(device, protocol::setting_frame(CLEAR_COMMAND).as_bytes(), CLEAR_SETTLE_MS)
    }

    pub fn home<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        self.send_special(device, LCD_CMD_RETURNHOME)
    }

    /// Rows are not checked against the configured number of rows, only against the row offset
    /// table. Columns are not checked at all.
    pub fn set_cursor<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
        col: u8,
        row: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        let address =
            protocol::ddram_address(col, row).ok_or(CharacterDisplayError::RowOutOfRange)?;
        self.send_special(device, LCD_CMD_SETDDRAMADDR | address)
    }

    pub fn show_cursor<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
        show_cursor: bool,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        let mut control = self.display_control;
        control.set_cursor_on(show_cursor);
        self.update_display_control(device, control)
    }

    pub fn blink_cursor<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
        blink_cursor: bool,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        let mut control = self.display_control;
        control.set_blink_on(blink_cursor);
        self.update_display_control(device, control)
    }

    pub fn show_display<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
        show_display: bool,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        let mut control = self.display_control;
        control.set_display_on(show_display);
        self.update_display_control(device, control)
    }

    pub fn scroll_left<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        self.send_special(device, LCD_CMD_CURSORSHIFT | LCD_FLAG_DISPLAYMOVE | LCD_FLAG_MOVELEFT)
    }

    pub fn scroll_right<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        self.send_special(device, LCD_CMD_CURSORSHIFT | LCD_FLAG_DISPLAYMOVE | LCD_FLAG_MOVERIGHT)
    }

    pub fn move_cursor_left<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        self.send_special(device, LCD_CMD_CURSORSHIFT | LCD_FLAG_CURSORMOVE | LCD_FLAG_MOVELEFT)
    }

    pub fn move_cursor_right<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        self.send_special(device, LCD_CMD_CURSORSHIFT | LCD_FLAG_CURSORMOVE | LCD_FLAG_MOVERIGHT)
    }

    pub fn left_to_right<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        let mut mode = self.display_mode;
        mode.set_entry_left(true);
        self.update_display_mode(device, mode)
    }

    pub fn right_to_left<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        let mut mode = self.display_mode;
        mode.set_entry_left(false);
        self.update_display_mode(device, mode)
    }

    pub fn autoscroll<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
        autoscroll: bool,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        let mut mode = self.display_mode;
        mode.set_shift_increment(autoscroll);
        self.update_display_mode(device, mode)
    }

    /// Writes the bytes as they are. Bytes equal to `SETTING_COMMAND` or `SPECIAL_COMMAND` are
    /// interpreted by the display as the start of a command.
    pub fn write_bytes<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
        data: &[u8],
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        if data.is_empty() {
            return Ok(());
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("Writing {} bytes of text", data.len());
        self.send(device, data, TEXT_SETTLE_MS)
    }

    pub fn set_backlight<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
        red: u8,
        green: u8,
        blue: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        let frame = protocol::backlight_frame(red, green, blue, self.display_control);
        self.send(device, frame.as_bytes(), BACKLIGHT_SETTLE_MS)?;
        // the bracket always ends with the display switched on
        self.display_control = self.display_control.with_display_on();
        Ok(())
    }

    pub fn set_fast_backlight<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
        red: u8,
        green: u8,
        blue: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        self.send(device, protocol::rgb_frame(red, green, blue).as_bytes(), SETTING_SETTLE_MS)
    }

    pub fn set_contrast<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
        contrast: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        self.send(
            device,
            protocol::setting_with_argument_frame(CONTRAST_COMMAND, contrast).as_bytes(),
            SETTING_SETTLE_MS,
        )
    }

    pub fn system_messages<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
        enable: bool,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        let code = if enable {
            ENABLE_SYSTEM_MESSAGE_DISPLAY
        } else {
            DISABLE_SYSTEM_MESSAGE_DISPLAY
        };
        self.send(device, protocol::setting_frame(code).as_bytes(), SETTING_SETTLE_MS)
    }

    pub fn create_char<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
        location: u8,
        charmap: [u8; 8],
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        self.send(
            device,
            protocol::custom_char_frame(location, charmap).as_bytes(),
            CUSTOM_CHAR_SETTLE_MS,
        )
    }

    pub fn write_custom_char<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
        location: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        self.send(
            device,
            protocol::write_custom_char_frame(location).as_bytes(),
            SETTING_SETTLE_MS,
        )
    }

    fn update_display_control<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
        control: DisplayControlBits,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        self.send_special(device, LCD_CMD_DISPLAYCONTROL | control.bits())?;
        self.display_control = control;
        Ok(())
    }

    fn update_display_mode<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
        mode: EntryModeBits,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        self.send_special(device, LCD_CMD_ENTRYMODESET | mode.bits())?;
        self.display_mode = mode;
        Ok(())
    }

    fn send_special<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
        command: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        self.send(device, protocol::special_frame(command).as_bytes(), SPECIAL_SETTLE_MS)
    }

    /// write the bytes in one I2C transaction, then wait for the display to process them
    fn send<I2C, DELAY>(
        &mut self,
        device: &mut DeviceSetupConfig<I2C, DELAY>,
        data: &[u8],
        settle_ms: u32,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        I2C: i2c::I2c,
        DELAY: DelayNs,
    {
        device
            .i2c
            .write(device.address, data)
            .map_err(CharacterDisplayError::I2cError)?;
        device.delay.delay_ms(settle_ms);
        Ok(())
    }
}

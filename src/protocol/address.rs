/// DDRAM base address of each row. This is the RAM layout of the HD44780 controller inside the
/// OpenLCD for both the 16 and 20 column panels.
pub const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// Map a zero-indexed column and row to the DDRAM address sent with `LCD_CMD_SETDDRAMADDR`.
///
/// The row is not checked against the configured number of rows, and the column is not checked
/// against the panel width. A column past the visible area lands in DDRAM that is not shown,
/// which the display tolerates. Returns `None` only for rows with no offset entry (row >= 4).
pub const fn ddram_address(col: u8, row: u8) -> Option<u8> {
    if row as usize >= ROW_OFFSETS.len() {
        return None;
    }
    Some(col.wrapping_add(ROW_OFFSETS[row as usize]))
}

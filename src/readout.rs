use core::fmt::Write;

/// Template of the ADC readout line. The value is placed in the blank run after `ADC:`.
pub const READOUT_TEMPLATE: &[u8; READOUT_LEN] = b"ADC:      Bit ";
pub const READOUT_LEN: usize = 14;

const FIRST_DIGIT_SLOT: usize = 5;
const LAST_DIGIT_SLOT: usize = 8;
const MAX_DIGITS: usize = LAST_DIGIT_SLOT - FIRST_DIGIT_SLOT + 1;

/// A fixed 14 character line showing a raw ADC reading, right aligned in four digit slots:
/// `ADC:   42 Bit `.
///
/// The line is kept in a buffer owned by the `AdcReadout`, so formatting does not allocate.
/// The returned `&str` borrows that buffer and must be dropped before the next call.
#[derive(Debug, Clone)]
pub struct AdcReadout {
    buffer: [u8; READOUT_LEN],
}

impl Default for AdcReadout {
    fn default() -> Self {
        AdcReadout {
            buffer: *READOUT_TEMPLATE,
        }
    }
}

impl AdcReadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format `value` into the line. Values with more than four decimal digits return an error
    /// and leave the empty template.
    pub fn format(&mut self, value: u16) -> Result<&str, core::fmt::Error> {
        self.buffer = *READOUT_TEMPLATE;

        let mut digits = DigitBuffer::default();
        write!(digits, "{}", value)?;

        // least significant digit goes in the last slot, each further digit one slot left
        for (slot, digit) in (FIRST_DIGIT_SLOT..=LAST_DIGIT_SLOT)
            .rev()
            .zip(digits.as_bytes().iter().rev())
        {
            self.buffer[slot] = *digit;
        }

        core::str::from_utf8(&self.buffer).map_err(|_| core::fmt::Error)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}

/// Decimal digits of a value, at most `MAX_DIGITS` long.
#[derive(Default)]
struct DigitBuffer {
    digits: [u8; MAX_DIGITS],
    len: usize,
}

impl DigitBuffer {
    fn as_bytes(&self) -> &[u8] {
        &self.digits[..self.len]
    }
}

impl Write for DigitBuffer {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let bytes = s.as_bytes();
        if self.len + bytes.len() > MAX_DIGITS {
            return Err(core::fmt::Error);
        }
        self.digits[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        Ok(())
    }
}

//! Single-device register writes

use crate::register::{DecodeMode, Register, MAX_DIGITS, MAX_INTENSITY};

/// A register/data pair for one device in the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    /// Target register
    pub register: Register,
    /// Payload, meaning depends on the register
    pub data: u8,
}

impl Default for Command {
    fn default() -> Self {
        Self::no_op()
    }
}

impl Command {
    /// Create a command for an arbitrary register
    pub const fn new(register: Register, data: u8) -> Self {
        Self { register, data }
    }

    /// No-op padding word (0x00, 0x00)
    pub const fn no_op() -> Self {
        Self::new(Register::NoOp, 0x00)
    }

    /// Write raw segments or a Code-B value to digit `index` (0-7)
    pub const fn digit(index: u8, data: u8) -> Option<Self> {
        match Register::digit(index) {
            Some(register) => Some(Self::new(register, data)),
            None => None,
        }
    }

    /// Set brightness, levels above 0x0F are clamped
    pub const fn intensity(level: u8) -> Self {
        let level = if level > MAX_INTENSITY {
            MAX_INTENSITY
        } else {
            level
        };
        Self::new(Register::Intensity, level)
    }

    /// Scan `digits` digits (1-8), written to the chip as `digits - 1`
    pub const fn scan_limit(digits: u8) -> Option<Self> {
        if digits == 0 || digits > MAX_DIGITS {
            return None;
        }
        Some(Self::new(Register::ScanLimit, digits - 1))
    }

    /// Select which digits use Code-B decoding
    pub const fn decode_mode(mode: DecodeMode) -> Self {
        Self::new(Register::DecodeMode, mode.bits())
    }

    /// Enter (`true`) or leave (`false`) shutdown mode
    ///
    /// Shutdown blanks the display but keeps register contents.
    pub const fn shutdown(enter: bool) -> Self {
        Self::new(Register::Shutdown, if enter { 0x00 } else { 0x01 })
    }

    /// Enter (`true`) or leave (`false`) display-test mode
    pub const fn display_test(enter: bool) -> Self {
        Self::new(Register::DisplayTest, if enter { 0x01 } else { 0x00 })
    }

    /// Check if this is the no-op padding word
    pub const fn is_no_op(&self) -> bool {
        matches!(self.register, Register::NoOp)
    }

    /// Get the 16-bit word as (address, data) bytes in wire order
    pub const fn to_bytes(self) -> [u8; 2] {
        [self.register.addr(), self.data]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_op_is_zero_word() {
        assert_eq!(Command::no_op().to_bytes(), [0x00, 0x00]);
        assert!(Command::default().is_no_op());
    }

    #[test]
    fn test_intensity_clamps() {
        assert_eq!(Command::intensity(0).data, 0);
        assert_eq!(Command::intensity(15).data, 15);
        assert_eq!(Command::intensity(16).data, 15);
        assert_eq!(Command::intensity(255).data, 15);
    }

    #[test]
    fn test_scan_limit_is_count_minus_one() {
        assert_eq!(Command::scan_limit(4).unwrap().to_bytes(), [0x0B, 3]);
        assert_eq!(Command::scan_limit(1).unwrap().data, 0);
        assert_eq!(Command::scan_limit(8).unwrap().data, 7);
        assert_eq!(Command::scan_limit(0), None);
        assert_eq!(Command::scan_limit(9), None);
    }

    #[test]
    fn test_mode_switches() {
        assert_eq!(Command::shutdown(true).to_bytes(), [0x0C, 0x00]);
        assert_eq!(Command::shutdown(false).to_bytes(), [0x0C, 0x01]);
        assert_eq!(Command::display_test(true).to_bytes(), [0x0F, 0x01]);
        assert_eq!(Command::display_test(false).to_bytes(), [0x0F, 0x00]);
    }

    #[test]
    fn test_digit_command() {
        assert_eq!(Command::digit(3, 0x5F).unwrap().to_bytes(), [0x04, 0x5F]);
        assert_eq!(Command::digit(8, 0x00), None);
    }
}

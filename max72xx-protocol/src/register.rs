//! MAX7219/MAX7221 register map
//!
//! Addresses D11-D8 of each 16-bit word. Addresses 0x0D and 0x0E are
//! unused on these parts and are rejected when decoding.

use crate::frame::FrameError;

/// Number of digit registers per device
pub const MAX_DIGITS: u8 = 8;

/// Highest intensity level (31/32 duty cycle)
pub const MAX_INTENSITY: u8 = 0x0F;

/// Register addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// No-op, lets a word pass through an unaddressed device
    NoOp = 0x00,
    Digit0 = 0x01,
    Digit1 = 0x02,
    Digit2 = 0x03,
    Digit3 = 0x04,
    Digit4 = 0x05,
    Digit5 = 0x06,
    Digit6 = 0x07,
    Digit7 = 0x08,
    /// Per-digit Code-B decode enable, turn off for LED matrices
    DecodeMode = 0x09,
    /// PWM brightness, 0x00-0x0F
    Intensity = 0x0A,
    /// Number of scanned digits minus one
    ScanLimit = 0x0B,
    /// 0 = shutdown, 1 = normal operation
    Shutdown = 0x0C,
    /// 1 = all segments on, 0 = normal operation
    DisplayTest = 0x0F,
}

impl Register {
    /// Digit registers in scan order
    pub const DIGITS: [Register; MAX_DIGITS as usize] = [
        Register::Digit0,
        Register::Digit1,
        Register::Digit2,
        Register::Digit3,
        Register::Digit4,
        Register::Digit5,
        Register::Digit6,
        Register::Digit7,
    ];

    /// Get the address byte sent on the wire
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Get the register for digit `index` (0-7)
    pub const fn digit(index: u8) -> Option<Self> {
        if index < MAX_DIGITS {
            Some(Self::DIGITS[index as usize])
        } else {
            None
        }
    }

    /// Check if this is one of the eight digit registers
    pub const fn is_digit(self) -> bool {
        matches!(self.addr(), 0x01..=0x08)
    }
}

impl From<Register> for u8 {
    fn from(register: Register) -> Self {
        register.addr()
    }
}

impl TryFrom<u8> for Register {
    type Error = FrameError;

    fn try_from(addr: u8) -> Result<Self, Self::Error> {
        match addr {
            0x00 => Ok(Register::NoOp),
            0x01..=0x08 => Ok(Self::DIGITS[(addr - 1) as usize]),
            0x09 => Ok(Register::DecodeMode),
            0x0A => Ok(Register::Intensity),
            0x0B => Ok(Register::ScanLimit),
            0x0C => Ok(Register::Shutdown),
            0x0F => Ok(Register::DisplayTest),
            _ => Err(FrameError::UnknownRegister),
        }
    }
}

/// Decode-mode register patterns
///
/// The hardware only documents four useful patterns, so a requested digit
/// count is mapped many-to-one rather than turned into a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeMode {
    /// Raw segment control on every digit (LED matrices)
    #[default]
    None,
    /// Code-B on digit 0 only
    Digit0,
    /// Code-B on digits 0-3
    Digits0To3,
    /// Code-B on all eight digits
    All,
}

impl DecodeMode {
    /// Map a number of decoded digits to a hardware pattern
    ///
    /// - 1 -> digit 0
    /// - 2, 3 or 4 -> digits 0-3
    /// - 8 -> all digits
    /// - anything else -> no decoding
    pub const fn from_digit_count(digits: u8) -> Self {
        match digits {
            1 => DecodeMode::Digit0,
            2..=4 => DecodeMode::Digits0To3,
            8 => DecodeMode::All,
            _ => DecodeMode::None,
        }
    }

    /// Get the decode-mode register value
    pub const fn bits(self) -> u8 {
        match self {
            DecodeMode::None => 0x00,
            DecodeMode::Digit0 => 0x01,
            DecodeMode::Digits0To3 => 0x0F,
            DecodeMode::All => 0xFF,
        }
    }
}

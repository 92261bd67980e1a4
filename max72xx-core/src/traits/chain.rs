//! Display chain driver trait
//!
//! A MAX72xx chain only ever accepts whole frames, so every feature setter
//! is expressed as one frame written to all devices. Implementors provide
//! the chain length and the strobed transmission of a frame; the framing
//! rules and the startup sequence live here as provided methods.

use max72xx_protocol::{Command, DecodeMode, Frame, FrameError};

use crate::config::{ConfigError, DisplayOptions};

/// Errors that can occur when driving a chain
///
/// Every variant except [`ChainError::Bus`] is detected before the bus is
/// touched, so a rejected call produces no strobe edge and no bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChainError<E> {
    /// Chain length outside 1..=8
    InvalidChainLength,
    /// Digit count outside 1..=8
    InvalidConfiguration,
    /// Device index not inside the chain
    InvalidDeviceIndex,
    /// Frame length differs from the chain length
    FrameLengthMismatch,
    /// Frame could not be built
    Frame(FrameError),
    /// Transport failure while shifting a frame
    Bus(E),
}

impl<E> From<ConfigError> for ChainError<E> {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidDeviceCount => ChainError::InvalidChainLength,
            ConfigError::InvalidDigitCount => ChainError::InvalidConfiguration,
        }
    }
}

impl<E> From<FrameError> for ChainError<E> {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::IndexOutOfRange => ChainError::InvalidDeviceIndex,
            FrameError::InvalidLength => ChainError::InvalidChainLength,
            other => ChainError::Frame(other),
        }
    }
}

/// Trait for a daisy chain of MAX72xx devices
pub trait ChainDriver {
    /// Transport error type
    type Error;

    /// Number of devices in the chain (1-8)
    fn length(&self) -> u8;

    /// Transmit a frame as one strobed burst
    ///
    /// Fails with [`ChainError::FrameLengthMismatch`] when the frame does not
    /// carry exactly one command per device.
    fn write_all(&mut self, frame: &Frame) -> Result<(), ChainError<Self::Error>>;

    /// Write `command` to one device, no-ops to the rest
    fn write_one(&mut self, device: u8, command: Command) -> Result<(), ChainError<Self::Error>> {
        let length = self.length();
        if device >= length {
            return Err(ChainError::InvalidDeviceIndex);
        }
        let frame = Frame::single(length, device, command)?;
        self.write_all(&frame)
    }

    /// Write the same command to every device
    fn write_same(&mut self, command: Command) -> Result<(), ChainError<Self::Error>> {
        let frame = Frame::filled(self.length(), command)?;
        self.write_all(&frame)
    }

    /// Scan `digits` digits (1-8) on every device
    fn set_scan_limit(&mut self, digits: u8) -> Result<(), ChainError<Self::Error>> {
        let command = Command::scan_limit(digits).ok_or(ChainError::InvalidConfiguration)?;
        self.write_same(command)
    }

    /// Set brightness on every device, levels above 15 are clamped
    fn set_intensity(&mut self, level: u8) -> Result<(), ChainError<Self::Error>> {
        self.write_same(Command::intensity(level))
    }

    /// Decode the requested number of digits as Code-B
    ///
    /// See [`DecodeMode::from_digit_count`] for how counts map to patterns.
    fn set_decode_mode(&mut self, digits: u8) -> Result<(), ChainError<Self::Error>> {
        self.set_decode_pattern(DecodeMode::from_digit_count(digits))
    }

    /// Write an explicit decode pattern to every device
    fn set_decode_pattern(&mut self, mode: DecodeMode) -> Result<(), ChainError<Self::Error>> {
        self.write_same(Command::decode_mode(mode))
    }

    /// Put every device into low-power shutdown
    fn enter_shutdown(&mut self) -> Result<(), ChainError<Self::Error>> {
        self.write_same(Command::shutdown(true))
    }

    /// Return every device to normal operation
    fn exit_shutdown(&mut self) -> Result<(), ChainError<Self::Error>> {
        self.write_same(Command::shutdown(false))
    }

    /// Light every segment on every device
    fn enter_display_test(&mut self) -> Result<(), ChainError<Self::Error>> {
        self.write_same(Command::display_test(true))
    }

    /// Leave display-test mode on every device
    fn exit_display_test(&mut self) -> Result<(), ChainError<Self::Error>> {
        self.write_same(Command::display_test(false))
    }

    /// Apply the startup sequence
    ///
    /// 1. display test off
    /// 2. scan limit from the digit count
    /// 3. intensity (zero is raised to the minimum visible level)
    /// 4. Code-B decoding on all digits
    /// 5. shutdown off
    ///
    /// The digit count is checked before anything is written.
    fn configure(&mut self, options: &DisplayOptions) -> Result<(), ChainError<Self::Error>> {
        options.validate()?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "configure: {} digits, intensity {}",
            options.digit_count,
            options.effective_intensity()
        );

        self.exit_display_test()?;
        self.set_scan_limit(options.digit_count)?;
        self.set_intensity(options.effective_intensity())?;
        self.set_decode_pattern(DecodeMode::All)?;
        self.exit_shutdown()
    }
}

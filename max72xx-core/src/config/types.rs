//! Configuration type definitions

use max72xx_protocol::{MAX_CHAIN_LENGTH, MAX_DIGITS, MAX_INTENSITY};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Intensity used by `configure` when the caller asks for zero
///
/// Zero is the dimmest PWM step, not "off", so a configured display is
/// always given a visible level.
pub const MIN_CONFIGURED_INTENSITY: u8 = 1;

/// Intensity used by [`DisplayOptions::default`]
pub const DEFAULT_INTENSITY: u8 = 8;

/// Errors found while validating configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Device count outside 1..=8
    InvalidDeviceCount,
    /// Digit count outside 1..=8
    InvalidDigitCount,
}

/// Startup settings applied to every device by `configure`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayOptions {
    /// Number of wired digits (1-8), becomes the scan limit
    pub digit_count: u8,
    /// Brightness (0-15, higher values are clamped)
    pub intensity: u8,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            digit_count: MAX_DIGITS,
            intensity: DEFAULT_INTENSITY,
        }
    }
}

impl DisplayOptions {
    /// Create display options
    pub const fn new(digit_count: u8, intensity: u8) -> Self {
        Self {
            digit_count,
            intensity,
        }
    }

    /// Check the digit count
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.digit_count == 0 || self.digit_count > MAX_DIGITS {
            return Err(ConfigError::InvalidDigitCount);
        }
        Ok(())
    }

    /// Intensity actually written by `configure`
    ///
    /// Zero is raised to [`MIN_CONFIGURED_INTENSITY`], anything above 15
    /// is clamped to 15.
    pub fn effective_intensity(&self) -> u8 {
        self.intensity.clamp(MIN_CONFIGURED_INTENSITY, MAX_INTENSITY)
    }
}

/// Complete chain configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChainConfig {
    /// Number of devices in series (1-8)
    pub devices: u8,
    /// Settings shared by every device
    pub display: DisplayOptions,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            devices: 1,
            display: DisplayOptions::default(),
        }
    }
}

impl ChainConfig {
    /// Create a chain configuration
    pub const fn new(devices: u8, display: DisplayOptions) -> Self {
        Self { devices, display }
    }

    /// Check device count and display options
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.devices == 0 || self.devices as usize > MAX_CHAIN_LENGTH {
            return Err(ConfigError::InvalidDeviceCount);
        }
        self.display.validate()
    }
}

//! Minimal TOML loader for chain configuration
//!
//! Handles only the subset needed for a display chain. It does NOT
//! support the full TOML spec and never allocates.
//!
//! Supported:
//! - `[chain]` and `[display]` section headers
//! - Integer values, bare or quoted
//! - Comments (`# ...`), including trailing comments
//!
//! ```toml
//! [chain]
//! devices = 2
//!
//! [display]
//! digits = 4
//! intensity = 8
//! ```
//!
//! Keys left out keep their [`ChainConfig::default`] values. The result is
//! validated before it is returned.

use super::types::{ChainConfig, ConfigError};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value is not an integer in range for its key
    InvalidValue,
    /// Key not recognized in the current section
    UnknownKey,
    /// Line is neither a header, a `key = value` pair nor a comment
    InvalidLine,
    /// Parsed values failed validation
    Invalid(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(err: ConfigError) -> Self {
        ParseError::Invalid(err)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Chain,
    Display,
}

/// Parse TOML configuration into ChainConfig
pub fn parse_config(input: &str) -> Result<ChainConfig, ParseError> {
    let mut config = ChainConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let header = header.strip_suffix(']').ok_or(ParseError::InvalidSection)?;
            section = parse_section_header(header)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(section, key, value, &mut config)?;
    }

    config.validate()?;
    Ok(config)
}

/// Parse section header like "chain" or "display"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "chain" => Ok(Section::Chain),
        "display" => Ok(Section::Display),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Drop a trailing comment that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse an integer value, quoted or bare
fn parse_int(value: &str) -> Result<u8, ParseError> {
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Apply a parsed value to the appropriate config field
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut ChainConfig,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Chain, "devices" | "length") => config.devices = parse_int(value)?,
        (Section::Display, "digits" | "digit_count") => {
            config.display.digit_count = parse_int(value)?;
        }
        (Section::Display, "intensity") => config.display.intensity = parse_int(value)?,
        (Section::Root, _) => return Err(ParseError::InvalidSection),
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

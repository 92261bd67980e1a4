//! Configuration types
//!
//! Board-agnostic configuration structures, loaded from a small TOML file.

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ParseError};
pub use types::*;

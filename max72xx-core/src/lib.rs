//! Board-agnostic core logic for MAX72xx display chains
//!
//! This crate contains everything above the wire protocol that does not
//! depend on a concrete bus or pin:
//!
//! - Configuration type definitions and validation
//! - A minimal TOML loader for chain configuration
//! - The [`traits::ChainDriver`] trait, which turns the per-feature setters
//!   and the startup sequence into frames

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod traits;

pub use config::{ChainConfig, ConfigError, DisplayOptions};
pub use traits::{ChainDriver, ChainError};

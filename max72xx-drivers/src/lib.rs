//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in max72xx-core:
//!
//! - The MAX7219/MAX7221 chain controller ([`display::Max72xx`])
//! - Adapters from `embedded-hal` 1.0 buses and pins to the HAL traits

#![no_std]
#![deny(unsafe_code)]

pub mod display;

pub use display::{EmbeddedPin, EmbeddedSpi, Max72xx};

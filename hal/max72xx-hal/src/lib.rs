//! MAX72xx Hardware Abstraction Layer
//!
//! This crate defines the two hardware primitives a MAX7219/MAX7221 chain
//! consumes. Chip-specific HALs (or the `embedded-hal` adapters in
//! `max72xx-drivers`) implement them, so the framing logic never touches a
//! concrete peripheral.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application                            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  max72xx-drivers (chain controller)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  max72xx-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  embedded-hal │       │  bit-banged / │
//! │    adapters   │       │   simulated   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`spi::SpiBus`] - Byte-serial full-duplex transfer
//! - [`gpio::OutputPin`] - Load/strobe line

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use spi::SpiBus;

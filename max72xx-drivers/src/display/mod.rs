//! LED display drivers

pub mod embedded;
pub mod max72xx;

pub use embedded::{EmbeddedPin, EmbeddedSpi};
pub use max72xx::Max72xx;

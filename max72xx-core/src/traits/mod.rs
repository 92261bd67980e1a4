//! Hardware abstraction traits
//!
//! These traits define the interface between application code and the
//! transport that actually shifts frames into the chain.

pub mod chain;

pub use chain::{ChainDriver, ChainError};

//! MAX72xx chained command protocol
//!
//! This crate defines the register map of the MAX7219/MAX7221 and the
//! framing used to address one device inside a daisy chain. It has no
//! hardware dependencies and is fully testable on the host.
//!
//! # Wire Format
//!
//! Every device takes a 16-bit word: an address byte followed by a data
//! byte. A chain of N devices is written with one burst of N words while
//! the LOAD line is held low:
//!
//! ```text
//!  LOAD ‾‾╲______________________________________________╱‾‾
//!          ┌──────┬──────┬──────┬──────┬─────┬──────┬──────┐
//!          │ REG0 │ DAT0 │ REG1 │ DAT1 │ ... │ REGn │ DATn │
//!          └──────┴──────┴──────┴──────┴─────┴──────┴──────┘
//! ```
//!
//! The rising edge of LOAD latches every device at once, so a [`Frame`]
//! always carries exactly one [`Command`] per device. Devices that should
//! not change receive a [`Register::NoOp`] word.

#![no_std]
#![deny(unsafe_code)]

pub mod bcd;
pub mod command;
pub mod frame;
pub mod register;

pub use command::Command;
pub use frame::{Frame, FrameError, MAX_CHAIN_LENGTH, MAX_FRAME_BYTES};
pub use register::{DecodeMode, Register, MAX_DIGITS, MAX_INTENSITY};

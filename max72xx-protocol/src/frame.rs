//! Chain frames and their wire encoding
//!
//! A frame holds one [`Command`] per device position. Position 0 is the
//! device nearest the controller and is shifted out first:
//!
//! - bytes `2k` and `2k + 1` carry the address and data of position `k`
//! - a frame of N commands is exactly `2 * N` bytes
//! - unaddressed positions carry the no-op word `0x00 0x00`

use heapless::Vec;

use crate::command::Command;
use crate::register::Register;

/// Maximum number of devices in one chain
pub const MAX_CHAIN_LENGTH: usize = 8;

/// Maximum encoded frame size (one 16-bit word per device)
pub const MAX_FRAME_BYTES: usize = MAX_CHAIN_LENGTH * 2;

/// Errors that can occur while building, encoding or decoding a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Frame length outside 1..=MAX_CHAIN_LENGTH
    InvalidLength,
    /// Device position is not inside the frame
    IndexOutOfRange,
    /// Buffer too small for encoding
    BufferTooSmall,
    /// Byte stream does not split into whole words
    InvalidFrame,
    /// Address byte is not a MAX72xx register
    UnknownRegister,
}

/// One command per device, in shift order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    commands: Vec<Command, MAX_CHAIN_LENGTH>,
}

impl Frame {
    /// Create an empty frame
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a frame of `length` positions all holding `command`
    pub fn filled(length: u8, command: Command) -> Result<Self, FrameError> {
        let length = checked_length(length)?;

        let mut commands = Vec::new();
        commands
            .resize(length, command)
            .map_err(|_| FrameError::InvalidLength)?;

        Ok(Self { commands })
    }

    /// Create a frame addressing only the device at `index`
    ///
    /// Every other position receives a no-op so its registers are untouched.
    pub fn single(length: u8, index: u8, command: Command) -> Result<Self, FrameError> {
        let mut frame = Self::filled(length, Command::no_op())?;
        let slot = frame
            .commands
            .get_mut(index as usize)
            .ok_or(FrameError::IndexOutOfRange)?;
        *slot = command;
        Ok(frame)
    }

    /// Create a frame from a slice of commands (position 0 first)
    pub fn from_commands(commands: &[Command]) -> Result<Self, FrameError> {
        let mut frame = Self::new();
        frame
            .commands
            .extend_from_slice(commands)
            .map_err(|_| FrameError::InvalidLength)?;
        Ok(frame)
    }

    /// Append the command for the next position
    pub fn push(&mut self, command: Command) -> Result<(), FrameError> {
        self.commands
            .push(command)
            .map_err(|_| FrameError::InvalidLength)
    }

    /// Replace the command at `index`
    pub fn set(&mut self, index: u8, command: Command) -> Result<(), FrameError> {
        let slot = self
            .commands
            .get_mut(index as usize)
            .ok_or(FrameError::IndexOutOfRange)?;
        *slot = command;
        Ok(())
    }

    /// Number of device positions
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the frame has no positions
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the command at a position
    pub fn get(&self, index: usize) -> Option<&Command> {
        self.commands.get(index)
    }

    /// All commands, position 0 first
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Iterate over commands in shift order
    pub fn iter(&self) -> core::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    /// Size of the encoded burst in bytes
    pub fn encoded_len(&self) -> usize {
        self.commands.len() * 2
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = self.encoded_len();
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        for (word, command) in buffer.chunks_exact_mut(2).zip(self.commands.iter()) {
            word.copy_from_slice(&command.to_bytes());
        }

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_BYTES>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_BYTES];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| FrameError::BufferTooSmall)?;
        Ok(vec)
    }

    /// Decode a captured burst back into a frame
    pub fn decode(bytes: &[u8]) -> Result<Self, FrameError> {
        if bytes.len() % 2 != 0 {
            return Err(FrameError::InvalidFrame);
        }
        if bytes.len() > MAX_FRAME_BYTES {
            return Err(FrameError::InvalidLength);
        }

        let mut frame = Self::new();
        for word in bytes.chunks_exact(2) {
            let register = Register::try_from(word[0])?;
            frame.push(Command::new(register, word[1]))?;
        }
        Ok(frame)
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a Command;
    type IntoIter = core::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Validate a chain length and widen it for indexing
fn checked_length(length: u8) -> Result<usize, FrameError> {
    let length = length as usize;
    if length == 0 || length > MAX_CHAIN_LENGTH {
        return Err(FrameError::InvalidLength);
    }
    Ok(length)
}

//! GPIO pin abstractions
//!
//! The only pin a MAX72xx chain needs is the shared LOAD (CS) line. Its
//! rising edge latches the most recently shifted register/data pair into
//! every device at once.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set_high(&mut self) {
        T::set_high(self);
    }

    fn set_low(&mut self) {
        T::set_low(self);
    }

    fn is_set_high(&self) -> bool {
        T::is_set_high(self)
    }
}

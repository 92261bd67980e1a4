//! SPI bus abstractions
//!
//! The MAX72xx is write-only from the driver's point of view: every byte is
//! clocked out MSB first in SPI mode 0 at up to 10 MHz, and whatever comes
//! back on DOUT is the byte falling off the far end of the chain. Setting
//! the bus up is left to the caller.

/// Byte-serial SPI bus master
///
/// A single blocking full-duplex exchange per call. Implementations must
/// not return until the byte has physically been shifted out.
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Exchange one byte
    ///
    /// Writes `byte` and returns the byte clocked in at the same time.
    fn transfer(&mut self, byte: u8) -> Result<u8, Self::Error>;

    /// Write data without keeping the replies
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        for &byte in data {
            self.transfer(byte)?;
        }
        Ok(())
    }
}

impl<T: SpiBus + ?Sized> SpiBus for &mut T {
    type Error = T::Error;

    fn transfer(&mut self, byte: u8) -> Result<u8, Self::Error> {
        T::transfer(self, byte)
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, data)
    }
}

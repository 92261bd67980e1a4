//! MAX7219/MAX7221 chain controller
//!
//! Drives up to eight daisy-chained devices over a shared serial bus and a
//! shared LOAD line. Every transmission is one frame: LOAD is pulled low,
//! `2 * length` bytes are shifted out nearest device first, and the rising
//! edge of LOAD latches all devices together.

use max72xx_core::config::ChainConfig;
use max72xx_core::traits::{ChainDriver, ChainError};
use max72xx_hal::{OutputPin, SpiBus};
use max72xx_protocol::{Frame, MAX_CHAIN_LENGTH};

/// MAX72xx chain controller
pub struct Max72xx<SPI, CS> {
    spi: SPI,
    /// LOAD (CS) line shared by every device in the chain
    strobe: CS,
    /// Devices in series (1-8)
    length: u8,
}

impl<SPI, CS> Max72xx<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Create a controller for a chain of `length` devices
    ///
    /// The bus and strobe must already be initialized. Nothing is
    /// transmitted until a command is issued.
    pub fn new(spi: SPI, strobe: CS, length: u8) -> Result<Self, ChainError<SPI::Error>> {
        if length == 0 || length as usize > MAX_CHAIN_LENGTH {
            return Err(ChainError::InvalidChainLength);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("MAX72xx chain: {} devices", length);

        Ok(Self {
            spi,
            strobe,
            length,
        })
    }

    /// Create a controller for a single device
    pub fn single(spi: SPI, strobe: CS) -> Self {
        Self {
            spi,
            strobe,
            length: 1,
        }
    }

    /// Create a controller sized from a validated configuration
    ///
    /// Only the device count is used here; pass `config.display` to
    /// [`ChainDriver::configure`] to apply the rest.
    pub fn from_config(
        spi: SPI,
        strobe: CS,
        config: &ChainConfig,
    ) -> Result<Self, ChainError<SPI::Error>> {
        config.validate()?;
        Self::new(spi, strobe, config.devices)
    }

    /// Release the bus and strobe line
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.strobe)
    }

    /// Shift every command of `frame`, register byte first
    fn shift(&mut self, frame: &Frame) -> Result<(), SPI::Error> {
        for command in frame {
            self.spi.write(&command.to_bytes())?;
        }
        Ok(())
    }
}

impl<SPI, CS> ChainDriver for Max72xx<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    type Error = SPI::Error;

    fn length(&self) -> u8 {
        self.length
    }

    fn write_all(&mut self, frame: &Frame) -> Result<(), ChainError<Self::Error>> {
        if frame.len() != self.length as usize {
            return Err(ChainError::FrameLengthMismatch);
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("MAX72xx frame: {}", frame);

        self.strobe.set_low();
        let result = self.shift(frame);
        // Latch even after a failed transfer so LOAD never stays asserted
        self.strobe.set_high();

        result.map_err(ChainError::Bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use heapless::Vec;
    use max72xx_core::config::DisplayOptions;
    use max72xx_protocol::{Command, Register};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Low,
        High,
        Byte(u8),
    }

    type Log = RefCell<Vec<Event, 128>>;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct BusFault;

    /// Mock bus recording every byte, optionally failing after `budget` bytes
    struct MockSpi<'a> {
        log: &'a Log,
        budget: Option<usize>,
    }

    impl<'a> MockSpi<'a> {
        fn new(log: &'a Log) -> Self {
            Self { log, budget: None }
        }

        fn failing_after(log: &'a Log, bytes: usize) -> Self {
            Self {
                log,
                budget: Some(bytes),
            }
        }
    }

    impl SpiBus for MockSpi<'_> {
        type Error = BusFault;

        fn transfer(&mut self, byte: u8) -> Result<u8, BusFault> {
            if let Some(budget) = self.budget.as_mut() {
                if *budget == 0 {
                    return Err(BusFault);
                }
                *budget -= 1;
            }
            self.log.borrow_mut().push(Event::Byte(byte)).unwrap();
            Ok(0)
        }
    }

    /// Mock strobe recording edges
    struct MockPin<'a> {
        log: &'a Log,
        high: bool,
    }

    impl<'a> MockPin<'a> {
        fn new(log: &'a Log) -> Self {
            Self { log, high: true }
        }
    }

    impl OutputPin for MockPin<'_> {
        fn set_high(&mut self) {
            self.high = true;
            self.log.borrow_mut().push(Event::High).unwrap();
        }

        fn set_low(&mut self) {
            self.high = false;
            self.log.borrow_mut().push(Event::Low).unwrap();
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn chain(log: &Log, length: u8) -> Max72xx<MockSpi<'_>, MockPin<'_>> {
        Max72xx::new(MockSpi::new(log), MockPin::new(log), length).unwrap()
    }

    fn bytes(log: &Log) -> Vec<u8, 128> {
        log.borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Byte(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_new_rejects_length() {
        let log = Log::default();
        for length in [0, 9, 255] {
            let result = Max72xx::new(MockSpi::new(&log), MockPin::new(&log), length);
            assert!(matches!(result, Err(ChainError::InvalidChainLength)));
        }
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_construction_is_silent() {
        let log = Log::default();
        let driver = chain(&log, 8);
        assert_eq!(driver.length(), 8);

        let driver = Max72xx::single(MockSpi::new(&log), MockPin::new(&log));
        assert_eq!(driver.length(), 1);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_write_one_second_of_two() {
        let log = Log::default();
        let mut driver = chain(&log, 2);

        driver
            .write_one(1, Command::new(Register::Digit3, 0x5F))
            .unwrap();

        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::Low,
                Event::Byte(0x00),
                Event::Byte(0x00),
                Event::Byte(0x04),
                Event::Byte(0x5F),
                Event::High,
            ]
        );
    }

    #[test]
    fn test_write_one_rejects_index_without_bus_activity() {
        let log = Log::default();
        let mut driver = chain(&log, 3);

        assert_eq!(
            driver.write_one(3, Command::intensity(4)),
            Err(ChainError::InvalidDeviceIndex)
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_write_all_rejects_mismatched_frame() {
        let log = Log::default();
        let mut driver = chain(&log, 3);

        let short = Frame::filled(2, Command::no_op()).unwrap();
        assert_eq!(
            driver.write_all(&short),
            Err(ChainError::FrameLengthMismatch)
        );
        assert_eq!(
            driver.write_all(&Frame::new()),
            Err(ChainError::FrameLengthMismatch)
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_write_all_sends_frame_in_order() {
        let log = Log::default();
        let mut driver = chain(&log, 3);

        let frame = Frame::from_commands(&[
            Command::new(Register::Digit0, 1),
            Command::new(Register::Digit1, 2),
            Command::new(Register::Digit2, 3),
        ])
        .unwrap();
        driver.write_all(&frame).unwrap();

        assert_eq!(bytes(&log).as_slice(), &[0x01, 1, 0x02, 2, 0x03, 3]);
        let events = log.borrow();
        assert_eq!(events.first(), Some(&Event::Low));
        assert_eq!(events.last(), Some(&Event::High));
    }

    #[test]
    fn test_set_scan_limit_on_all_devices() {
        let log = Log::default();
        let mut driver = chain(&log, 2);

        driver.set_scan_limit(4).unwrap();
        assert_eq!(bytes(&log).as_slice(), &[0x0B, 3, 0x0B, 3]);
    }

    #[test]
    fn test_configure_sequence() {
        let log = Log::default();
        let mut driver = chain(&log, 1);

        driver.configure(&DisplayOptions::new(8, 0)).unwrap();

        assert_eq!(
            bytes(&log).as_slice(),
            &[0x0F, 0x00, 0x0B, 0x07, 0x0A, 0x01, 0x09, 0xFF, 0x0C, 0x01]
        );
        let edges = log
            .borrow()
            .iter()
            .filter(|event| **event == Event::High)
            .count();
        assert_eq!(edges, 5);
    }

    #[test]
    fn test_configure_rejects_without_bus_activity() {
        let log = Log::default();
        let mut driver = chain(&log, 4);

        for digits in [0, 9] {
            assert_eq!(
                driver.configure(&DisplayOptions::new(digits, 8)),
                Err(ChainError::InvalidConfiguration)
            );
        }
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_bus_error_releases_strobe() {
        let log = Log::default();
        let spi = MockSpi::failing_after(&log, 3);
        let mut driver = Max72xx::new(spi, MockPin::new(&log), 2).unwrap();

        assert_eq!(
            driver.write_same(Command::shutdown(false)),
            Err(ChainError::Bus(BusFault))
        );

        let events = log.borrow();
        assert_eq!(events.len(), 5);
        assert_eq!(events.last(), Some(&Event::High));
        drop(events);

        let (_spi, strobe) = driver.release();
        assert!(strobe.is_set_high());
    }

    #[test]
    fn test_from_config() {
        let log = Log::default();
        let config = ChainConfig::new(4, DisplayOptions::default());
        let driver =
            Max72xx::from_config(MockSpi::new(&log), MockPin::new(&log), &config).unwrap();
        assert_eq!(driver.length(), 4);

        let config = ChainConfig::new(0, DisplayOptions::default());
        let result = Max72xx::from_config(MockSpi::new(&log), MockPin::new(&log), &config);
        assert!(matches!(result, Err(ChainError::InvalidChainLength)));
    }
}

//! SPI bus abstractions
//!
//! Provides the single transfer operation the MAX7219 cascade needs, plus
//! an adapter so any embedded-hal 1.0 `SpiDevice` can drive it.

/// SPI bus master
///
/// One call to [`SpiBus::transfer`] is one transaction: chip select is
/// asserted, every byte is shifted out in order, and chip select is
/// released. The MAX7219 latches on the rising edge of LOAD/CS, so a
/// transfer must never be split.
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Send `data` as one chip-select-bracketed transaction
    fn transfer(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: SpiBus + ?Sized> SpiBus for &mut T {
    type Error = T::Error;

    fn transfer(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::transfer(self, data)
    }
}

/// [`SpiBus`] over an embedded-hal `SpiDevice`
///
/// `SpiDevice::write` is defined by embedded-hal as a single transaction
/// with CS asserted for its whole duration, which is exactly the
/// MAX7219 framing requirement.
pub struct SpiDeviceBus<D> {
    device: D,
}

impl<D> SpiDeviceBus<D>
where
    D: embedded_hal::spi::SpiDevice,
{
    /// Wrap an SPI device
    pub fn new(device: D) -> Self {
        Self { device }
    }

    /// Give the underlying device back
    pub fn release(self) -> D {
        self.device
    }
}

impl<D> SpiBus for SpiDeviceBus<D>
where
    D: embedded_hal::spi::SpiDevice,
{
    type Error = D::Error;

    fn transfer(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.device.write(data)
    }
}

/// SPI configuration
///
/// `bus` and `chip_select` identify the peripheral the platform should
/// open (for example `/dev/spidev{bus}.{chip_select}`). The driver never
/// interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Bus index
    pub bus: u8,
    /// Device / chip-select index on that bus
    pub chip_select: u8,
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock mode
    pub mode: Mode,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            bus: 0,
            chip_select: 0,
            frequency: 1_000_000, // 1 MHz
            mode: Mode::Mode0,
        }
    }
}

impl SpiConfig {
    /// Highest serial clock the MAX7219 accepts
    pub const MAX_FREQUENCY: u32 = 10_000_000;

    /// Default config for the given bus selector
    pub fn new(bus: u8, chip_select: u8) -> Self {
        Self {
            bus,
            chip_select,
            ..Self::default()
        }
    }

    /// Override the clock, clamped to what the chip accepts
    pub fn with_frequency(mut self, frequency: u32) -> Self {
        self.frequency = frequency.min(Self::MAX_FREQUENCY);
        self
    }
}

/// SPI clock mode
///
/// The MAX7219 samples DIN on the rising edge with the clock idling low,
/// which is mode 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for embedded_hal::spi::Mode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => embedded_hal::spi::MODE_0,
            Mode::Mode1 => embedded_hal::spi::MODE_1,
            Mode::Mode2 => embedded_hal::spi::MODE_2,
            Mode::Mode3 => embedded_hal::spi::MODE_3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::spi::{ErrorKind, ErrorType, Operation, SpiDevice};
    use heapless::Vec;

    /// Mock SPI device recording each transaction's written bytes
    struct MockDevice {
        transactions: Vec<Vec<u8, 16>, 4>,
    }

    impl MockDevice {
        fn new() -> Self {
            Self {
                transactions: Vec::new(),
            }
        }
    }

    impl ErrorType for MockDevice {
        type Error = core::convert::Infallible;
    }

    impl SpiDevice for MockDevice {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
            let mut written = Vec::new();
            for op in operations.iter() {
                if let Operation::Write(buf) = op {
                    written.extend_from_slice(buf).unwrap();
                }
            }
            self.transactions.push(written).unwrap();
            Ok(())
        }
    }

    #[derive(Debug, PartialEq)]
    struct BrokenWire;

    impl embedded_hal::spi::Error for BrokenWire {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct FailingDevice;

    impl ErrorType for FailingDevice {
        type Error = BrokenWire;
    }

    impl SpiDevice for FailingDevice {
        fn transaction(&mut self, _operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
            Err(BrokenWire)
        }
    }

    #[test]
    fn test_transfer_is_one_transaction() {
        let mut bus = SpiDeviceBus::new(MockDevice::new());

        bus.transfer(&[0x0A, 0x07, 0x0A, 0x07]).unwrap();
        bus.transfer(&[0x0C, 0x01]).unwrap();

        let device = bus.release();
        assert_eq!(device.transactions.len(), 2);
        assert_eq!(device.transactions[0].as_slice(), &[0x0A, 0x07, 0x0A, 0x07]);
        assert_eq!(device.transactions[1].as_slice(), &[0x0C, 0x01]);
    }

    #[test]
    fn test_transfer_error_passes_through() {
        let mut bus = SpiDeviceBus::new(FailingDevice);
        assert_eq!(bus.transfer(&[0x01, 0xFF]), Err(BrokenWire));
    }

    #[test]
    fn test_mut_ref_is_a_bus() {
        fn send<B: SpiBus>(mut bus: B) -> Result<(), B::Error> {
            bus.transfer(&[0x0F, 0x00])
        }

        let mut bus = SpiDeviceBus::new(MockDevice::new());
        send(&mut bus).unwrap();
        assert_eq!(bus.release().transactions.len(), 1);
    }

    #[test]
    fn test_default_config() {
        let config = SpiConfig::default();
        assert_eq!(config.bus, 0);
        assert_eq!(config.chip_select, 0);
        assert_eq!(config.frequency, 1_000_000);
        assert_eq!(config.mode, Mode::Mode0);

        let config = SpiConfig::new(1, 2).with_frequency(50_000_000);
        assert_eq!(config.bus, 1);
        assert_eq!(config.chip_select, 2);
        assert_eq!(config.frequency, SpiConfig::MAX_FREQUENCY);
    }

    #[test]
    fn test_mode_conversion() {
        let mode: embedded_hal::spi::Mode = Mode::Mode0.into();
        assert_eq!(mode, embedded_hal::spi::MODE_0);
        let mode: embedded_hal::spi::Mode = Mode::Mode2.into();
        assert_eq!(mode, embedded_hal::spi::MODE_2);
        let mode: embedded_hal::spi::Mode = SpiConfig::default().mode.into();
        assert_eq!(mode.polarity, embedded_hal::spi::Polarity::IdleLow);
        assert_eq!(mode.phase, embedded_hal::spi::Phase::CaptureOnFirstTransition);
    }
}

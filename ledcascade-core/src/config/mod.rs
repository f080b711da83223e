//! Display configuration
//!
//! Everything needed to bring up a cascade: how many chips, which bus,
//! how bright, how fast messages scroll.

#[cfg(feature = "toml")]
pub mod toml;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::framebuffer::MAX_CASCADED;
use crate::registers::MAX_INTENSITY;

/// Brightness applied by the chip init sequence
pub const DEFAULT_BRIGHTNESS: u8 = 7;

/// Per-column delay for scrolled messages
pub const DEFAULT_SCROLL_DELAY_MS: u32 = 50;

/// Which SPI peripheral the cascade hangs off
///
/// Passed through to the platform untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BusSelector {
    /// Bus index
    pub bus: u8,
    /// Chip-select index on that bus
    pub device: u8,
}

/// Cascade configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Number of daisy-chained MAX7219 chips
    pub cascaded: usize,
    /// Bus selector
    pub spi: BusSelector,
    /// Brightness after init (0-15)
    pub brightness: u8,
    /// Delay before each column of a scrolled message
    pub scroll_delay_ms: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cascaded: 1,
            spi: BusSelector::default(),
            brightness: DEFAULT_BRIGHTNESS,
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
        }
    }
}

impl DisplayConfig {
    /// Default config for a chain of `cascaded` chips
    pub fn new(cascaded: usize) -> Self {
        Self {
            cascaded,
            ..Self::default()
        }
    }

    /// Check the values a cascade can actually use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cascaded == 0 || self.cascaded > MAX_CASCADED {
            return Err(ConfigError::CascadeCount(self.cascaded));
        }
        if self.brightness > MAX_INTENSITY {
            return Err(ConfigError::Brightness(self.brightness));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::default();
        assert_eq!(config.cascaded, 1);
        assert_eq!(config.spi, BusSelector { bus: 0, device: 0 });
        assert_eq!(config.brightness, DEFAULT_BRIGHTNESS);
        assert_eq!(config.scroll_delay_ms, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            DisplayConfig::new(0).validate(),
            Err(ConfigError::CascadeCount(0))
        );
        assert_eq!(
            DisplayConfig::new(MAX_CASCADED + 1).validate(),
            Err(ConfigError::CascadeCount(MAX_CASCADED + 1))
        );
        assert!(DisplayConfig::new(MAX_CASCADED).validate().is_ok());

        let mut config = DisplayConfig::new(4);
        config.brightness = 16;
        assert_eq!(config.validate(), Err(ConfigError::Brightness(16)));
        config.brightness = MAX_INTENSITY;
        assert!(config.validate().is_ok());
    }
}

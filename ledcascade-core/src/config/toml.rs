//! TOML configuration loading
//!
//! Expected layout:
//!
//! ```toml
//! [display]
//! cascaded = 4
//! brightness = 3
//! scroll_delay_ms = 40
//!
//! [display.spi]
//! bus = 0
//! device = 1
//! ```
//!
//! Every key is optional and falls back to [`DisplayConfig::default`].

use serde::Deserialize;

use super::DisplayConfig;
use crate::error::ConfigError;

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    display: DisplayConfig,
}

impl DisplayConfig {
    /// Parse and validate a TOML document
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = ::toml::from_str(input).map_err(|_| ConfigError::Parse)?;
        file.display.validate()?;
        Ok(file.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BusSelector;

    #[test]
    fn test_parse_full_config() {
        let config_str = r#"
[display]
cascaded = 4
brightness = 3
scroll_delay_ms = 40

[display.spi]
bus = 0
device = 1
"#;

        let config = DisplayConfig::from_toml(config_str).unwrap();
        assert_eq!(config.cascaded, 4);
        assert_eq!(config.brightness, 3);
        assert_eq!(config.scroll_delay_ms, 40);
        assert_eq!(config.spi, BusSelector { bus: 0, device: 1 });
    }

    #[test]
    fn test_parse_defaults() {
        let config = DisplayConfig::from_toml("[display]\ncascaded = 2\n").unwrap();
        assert_eq!(config.cascaded, 2);
        assert_eq!(config.brightness, 7);
        assert_eq!(config.spi, BusSelector::default());

        let config = DisplayConfig::from_toml("").unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!(
            DisplayConfig::from_toml("[display]\ncascaded = 0\n"),
            Err(ConfigError::CascadeCount(0))
        );
        assert_eq!(
            DisplayConfig::from_toml("[display]\nbrightness = 20\n"),
            Err(ConfigError::Brightness(20))
        );
        assert_eq!(
            DisplayConfig::from_toml("[display\ncascaded = 2"),
            Err(ConfigError::Parse)
        );
        assert_eq!(
            DisplayConfig::from_toml("[display]\ncascaded = \"four\"\n"),
            Err(ConfigError::Parse)
        );
    }
}

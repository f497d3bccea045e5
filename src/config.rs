//! Process configuration: panel geometry plus low-level strip signal
//! parameters, loaded from TOML with defaults matching the installed
//! hardware.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::PanelGeometry;

/// Errors loading or validating the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("panel geometry must be non-zero in every dimension")]
    ZeroGeometry,
}

/// Low-level strip signal parameters. Consumed only by a hardware strip
/// adapter; carried here so one config file describes the whole rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// GPIO pin driving the data line (18 uses PWM).
    pub gpio_pin: u8,
    /// Signal frequency in hertz (usually 800 kHz).
    pub freq_hz: u32,
    /// DMA channel generating the signal.
    pub dma_channel: u8,
    /// Global brightness, 0 darkest to 255 brightest.
    pub brightness: u8,
    /// Invert the signal (NPN transistor level shift).
    pub invert: bool,
    /// PWM channel; 1 for GPIOs 13, 19, 41, 45, 53.
    pub channel: u8,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            gpio_pin: 18,
            freq_hz: 800_000,
            dma_channel: 10,
            brightness: 40,
            invert: false,
            channel: 0,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub strip: StripConfig,
    pub panel: PanelGeometry,
}

impl Config {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.panel.is_valid() {
            return Err(ConfigError::ZeroGeometry);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_installed_hardware() {
        let config = Config::default();
        assert_eq!(config.strip.gpio_pin, 18);
        assert_eq!(config.strip.freq_hz, 800_000);
        assert_eq!(config.strip.brightness, 40);
        assert_eq!(config.panel.leds_per_frame(), 900);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [strip]
            brightness = 255

            [panel]
            panel_cols = 2
            panel_rows = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.strip.brightness, 255);
        assert_eq!(config.strip.gpio_pin, 18);
        assert_eq!(config.panel.panel_cols, 2);
        assert_eq!(config.panel.led_cols_per_panel, 10);
        assert_eq!(config.panel.leds_per_frame(), 200);
    }

    #[test]
    fn zero_geometry_rejected() {
        let config: Config = toml::from_str(
            r#"
            [panel]
            panel_cols = 0
            "#,
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::ZeroGeometry)));
    }
}

//! User configuration, `~/.bizcard/config.toml`.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CardError, CardResult};

fn default_theme() -> String {
    "light".to_string()
}

fn default_double_tap_window_ms() -> u64 {
    300
}

fn default_orientation_rate_hz() -> u32 {
    30
}

fn default_simulate_orientation() -> bool {
    true
}

/// Ambient settings for the card screen. Interaction state is never
/// persisted; this only covers startup defaults and tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Theme at startup: "light" or "dark".
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Double-tap disambiguation window for the avatar.
    #[serde(default = "default_double_tap_window_ms")]
    pub double_tap_window_ms: u64,
    /// Sample rate of the simulated orientation source.
    #[serde(default = "default_orientation_rate_hz")]
    pub orientation_rate_hz: u32,
    /// When false the screen runs sensor-less (tilt stays at zero).
    #[serde(default = "default_simulate_orientation")]
    pub simulate_orientation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            double_tap_window_ms: default_double_tap_window_ms(),
            orientation_rate_hz: default_orientation_rate_hz(),
            simulate_orientation: default_simulate_orientation(),
        }
    }
}

impl Config {
    /// Directory holding `config.toml` and the optional portfolio override.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bizcard")
    }

    fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Loads the config file, falling back to defaults when it does not
    /// exist yet. A malformed file is an error rather than a silent reset.
    pub fn load_or_default() -> CardResult<Self> {
        let path = Self::config_path();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|source| CardError::ConfigParse { path, source })
    }

    /// Writes the config back, creating the directory on first save.
    pub fn save(&self) -> CardResult<()> {
        let dir = Self::config_dir();
        std::fs::create_dir_all(&dir)?;
        let raw = toml::to_string_pretty(self)
            .map_err(|e| CardError::Config(format!("serialize config: {e}")))?;
        std::fs::write(Self::config_path(), raw)?;
        Ok(())
    }

    pub fn starts_dark(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }

    pub fn double_tap_window(&self) -> Duration {
        Duration::from_millis(self.double_tap_window_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_behavior() {
        let config = Config::default();
        assert!(!config.starts_dark());
        assert_eq!(config.double_tap_window(), Duration::from_millis(300));
        assert_eq!(config.orientation_rate_hz, 30);
        assert!(config.simulate_orientation);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("theme = \"dark\"").unwrap();
        assert!(config.starts_dark());
        assert_eq!(config.double_tap_window_ms, 300);
        assert!(config.simulate_orientation);
    }

    #[test]
    fn toml_round_trip() {
        let config = Config {
            theme: "dark".to_string(),
            double_tap_window_ms: 250,
            orientation_rate_hz: 60,
            simulate_orientation: false,
        };
        let raw = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&raw).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = toml::from_str::<Config>("theme = [1, 2]").unwrap_err();
        assert!(err.to_string().contains("theme"));
    }
}

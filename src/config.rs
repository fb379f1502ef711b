//! Configuration loading
//!
//! Config file resolution order:
//! 1. `--config` command-line argument
//! 2. `DISCOGRAPHY_CONFIG` environment variable
//! 3. `./discography.toml` if it exists
//! 4. Compiled defaults
//!
//! Every section and field is optional; missing ones take their defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::gesture::GestureConfig;

pub const CONFIG_ENV_VAR: &str = "DISCOGRAPHY_CONFIG";
const LOCAL_CONFIG_FILE: &str = "discography.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub gesture: GestureSection,
    pub terminal: TerminalSection,
    pub storage: StorageSection,
    pub logging: LoggingSection,
}

/// Swipe thresholds in logical pixels
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GestureSection {
    pub threshold: f64,
    pub min_delta_to_disambiguate: f64,
    pub track_touch: bool,
    pub track_mouse: bool,
}

impl Default for GestureSection {
    fn default() -> Self {
        let base = GestureConfig::default();
        Self {
            threshold: base.threshold,
            min_delta_to_disambiguate: base.min_delta_to_disambiguate,
            track_touch: base.track_touch,
            // A terminal only ever delivers mouse input
            track_mouse: true,
        }
    }
}

impl GestureSection {
    pub fn to_gesture_config(&self) -> GestureConfig {
        GestureConfig {
            threshold: self.threshold,
            min_delta_to_disambiguate: self.min_delta_to_disambiguate,
            track_touch: self.track_touch,
            track_mouse: self.track_mouse,
        }
    }
}

/// Terminal front-end settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerminalSection {
    /// Logical pixels per terminal column, used to scale mouse drags
    pub cell_width_px: f64,
    /// Logical pixels per terminal row
    pub cell_height_px: f64,
    /// Redraw interval
    pub tick_ms: u64,
    /// Length of the view transition slide
    pub transition_ms: u64,
}

impl Default for TerminalSection {
    fn default() -> Self {
        Self {
            cell_width_px: 8.0,
            cell_height_px: 16.0,
            tick_ms: 33,
            transition_ms: 180,
        }
    }
}

impl TerminalSection {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSection {
    /// Directory holding the rankings record
    pub data_dir: PathBuf,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".cache"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSection {
    pub dir: PathBuf,
    /// Default `EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".logs"),
            filter: "discography_rs=debug,warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Cannot read {}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Resolve and load the config. An explicitly named file must exist;
    /// the implicit local file is only used when present.
    pub fn load(cli_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = cli_path {
            return Self::from_file(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_file(Path::new(&path));
        }
        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::from_file(local);
        }
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("gesture.threshold", self.gesture.threshold),
            ("terminal.cell_width_px", self.terminal.cell_width_px),
            ("terminal.cell_height_px", self.terminal.cell_height_px),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::Config(format!("{name} must be positive, got {value}")));
            }
        }
        let delta = self.gesture.min_delta_to_disambiguate;
        if !(delta.is_finite() && delta >= 0.0) {
            return Err(Error::Config(format!(
                "gesture.min_delta_to_disambiguate must not be negative, got {delta}"
            )));
        }
        if self.terminal.tick_ms == 0 {
            return Err(Error::Config("terminal.tick_ms must be at least 1".to_string()));
        }
        Ok(())
    }
}

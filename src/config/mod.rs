//! Configuration file support for frameinput.
//!
//! Settings are read from `~/.config/frameinput/config.toml`. Every field has
//! a default, so a missing file or a missing section is never an error.

pub mod enums;
pub mod types;

pub use enums::OutputFormat;
pub use types::{InputConfig, ReplayConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure.
///
/// # Example TOML
/// ```toml
/// [input]
/// text_input_on_start = true
/// wheel_scale = 2.0
/// invert_wheel = false
/// hide_cursor_on_start = false
///
/// [replay]
/// output = "json"
/// show_idle_frames = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Input tracker behaviour
    #[serde(default)]
    pub input: InputConfig,

    /// Replay tool output
    #[serde(default)]
    pub replay: ReplayConfig,
}

impl Config {
    /// Clamps values that would make the tracker misbehave, logging a warning
    /// for each one.
    ///
    /// Validated ranges:
    /// - `input.wheel_scale`: 0.1 - 10.0 (non-finite values fall back to 1.0)
    pub fn validate_and_clamp(&mut self) {
        if !self.input.wheel_scale.is_finite() {
            log::warn!(
                "Invalid wheel_scale {}, falling back to 1.0",
                self.input.wheel_scale
            );
            self.input.wheel_scale = 1.0;
        } else if !(0.1..=10.0).contains(&self.input.wheel_scale) {
            log::warn!(
                "Invalid wheel_scale {:.2}, clamping to 0.1-10.0 range",
                self.input.wheel_scale
            );
            self.input.wheel_scale = self.input.wheel_scale.clamp(0.1, 10.0);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("frameinput");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads the user configuration, or defaults if the file does not exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, or defaults if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or is not valid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.input.wheel_scale, 1.0);
        assert!(!config.input.text_input_on_start);
        assert_eq!(config.replay.output, OutputFormat::Text);
        assert!(config.replay.show_idle_frames);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = Config::from_toml("[input]\ninvert_wheel = true\n").unwrap();
        assert!(config.input.invert_wheel);
        assert_eq!(config.input.wheel_scale, 1.0);
        assert_eq!(config.input.effective_wheel_scale(), -1.0);
    }

    #[test]
    fn wheel_scale_is_clamped() {
        let mut config = Config::from_toml("[input]\nwheel_scale = 50.0\n").unwrap();
        config.validate_and_clamp();
        assert_eq!(config.input.wheel_scale, 10.0);

        config.input.wheel_scale = 0.0;
        config.validate_and_clamp();
        assert_eq!(config.input.wheel_scale, 0.1);

        config.input.wheel_scale = f32::NAN;
        config.validate_and_clamp();
        assert_eq!(config.input.wheel_scale, 1.0);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_reads_and_validates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[input]\ntext_input_on_start = true\nwheel_scale = 0.01\n\n[replay]\noutput = \"json\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.input.text_input_on_start);
        assert_eq!(config.input.wheel_scale, 0.1);
        assert_eq!(config.replay.output, OutputFormat::Json);
    }

    #[test]
    fn load_from_rejects_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[input\nwheel_scale = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn toml_output_parses_back() {
        let mut config = Config::default();
        config.input.hide_cursor_on_start = true;
        let rendered = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&rendered).unwrap(), config);
    }

    #[test]
    fn schema_lists_input_section() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("wheel_scale"));
        assert!(schema.contains("hide_cursor_on_start"));
    }
}

// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for PitchBender.
//!
//! Settings are read from a TOML file (or YAML, chosen by the `.yaml` /
//! `.yml` extension). Every field has a default, so an empty file is a
//! valid configuration.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::detect::averager::DEFAULT_SAMPLE_WINDOW;
use crate::music::interval::RATIO_TOLERANCE;
use crate::music::pitch::NoteSpelling;

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Ratio approximation settings
    #[serde(default)]
    pub ratio: RatioConfig,
    /// Pitch detection settings
    #[serde(default)]
    pub detection: DetectionConfig,
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML or YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config = if is_yaml(path) {
            Self::from_yaml(&contents)?
        } else {
            Self::from_toml(&contents)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Failed to parse YAML configuration")
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// Save configuration to a file, in YAML if the extension asks for it
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = if is_yaml(path) {
            serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")?
        } else {
            self.to_toml()?
        };
        fs::write(path, text).with_context(|| format!("Failed to write config file: {:?}", path))
    }

    /// Check that values are in range
    pub fn validate(&self) -> Result<()> {
        let tolerance = self.ratio.tolerance;
        if !tolerance.is_finite() || tolerance <= 0.0 || tolerance >= 1.0 {
            bail!("ratio.tolerance must be between 0 and 1, got {}", tolerance);
        }
        if self.detection.sample_window == 0 {
            bail!("detection.sample_window must be at least 1");
        }
        Ok(())
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Ratio approximation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatioConfig {
    /// Relative tolerance for decimal-to-ratio approximation
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_tolerance() -> f64 {
    RATIO_TOLERANCE
}

impl Default for RatioConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
        }
    }
}

/// Pitch detection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectionConfig {
    /// Positive samples averaged per detection
    #[serde(default = "default_sample_window")]
    pub sample_window: usize,
    /// Accidental spelling for pitch-class names
    #[serde(default)]
    pub spelling: NoteSpelling,
}

fn default_sample_window() -> usize {
    DEFAULT_SAMPLE_WINDOW
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            sample_window: default_sample_window(),
            spelling: NoteSpelling::default(),
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default level filter ("error", "warn", "info", "debug", "trace")
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let text = r#"
[ratio]
tolerance = 1e-3

[detection]
sample_window = 20
spelling = "flats"

[logging]
level = "debug"
"#;

        let config = Config::from_toml(text).unwrap();
        assert_eq!(config.ratio.tolerance, 1e-3);
        assert_eq!(config.detection.sample_window, 20);
        assert_eq!(config.detection.spelling, NoteSpelling::Flats);
        assert_eq!(config.logging.level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.ratio.tolerance, 1e-6);
        assert_eq!(config.detection.sample_window, 50);
        assert_eq!(config.detection.spelling, NoteSpelling::Sharps);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_section() {
        let config = Config::from_toml("[detection]\nspelling = \"flats\"\n").unwrap();
        assert_eq!(config.detection.sample_window, 50);
        assert_eq!(config.detection.spelling, NoteSpelling::Flats);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
detection:
  sample_window: 8
ratio:
  tolerance: 0.0001
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.detection.sample_window, 8);
        assert_eq!(config.ratio.tolerance, 0.0001);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_round_trip() {
        let mut original = Config::default();
        original.ratio.tolerance = 0.01;
        original.detection.spelling = NoteSpelling::Flats;

        let text = original.to_toml().unwrap();
        let parsed = Config::from_toml(&text).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_validate() {
        let mut config = Config::default();
        config.ratio.tolerance = 0.0;
        assert!(config.validate().is_err());

        config.ratio.tolerance = f64::NAN;
        assert!(config.validate().is_err());

        config.ratio.tolerance = 1e-6;
        config.detection.sample_window = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_spelling() {
        assert!(Config::from_toml("[detection]\nspelling = \"naturals\"\n").is_err());
    }
}

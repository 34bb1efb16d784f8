use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration for scrub
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub detection: DetectionConfig,

    #[serde(default)]
    pub synthesis: SynthesisConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Digit groups whose length falls in this window are telephone numbers
    #[serde(default = "default_telephone_window")]
    pub telephone_window: LengthWindow,

    /// Digit groups this short or shorter are dropped as noise
    #[serde(default = "default_noise_floor")]
    pub numeric_noise_floor: usize,

    #[serde(default = "default_min_name_length")]
    pub min_name_length: usize,

    /// Compared case-insensitively against name candidates
    #[serde(default = "default_stop_words")]
    pub name_stop_words: Vec<String>,

    /// Recognizer labels treated as person names
    #[serde(default = "default_person_labels")]
    pub person_labels: Vec<String>,
}

/// Inclusive character-count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthWindow {
    pub min: usize,
    pub max: usize,
}

impl LengthWindow {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    #[serde(default)]
    pub telephone_substitution: TelephoneSubstitution,
}

/// Which part of a telephone number is registered for replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TelephoneSubstitution {
    /// Replace every digit of the match.
    Full,
    /// Keep the first `offset` characters (country/area code) as they are.
    SkipPrefix { offset: usize },
}

impl Default for TelephoneSubstitution {
    fn default() -> Self {
        TelephoneSubstitution::SkipPrefix {
            offset: default_prefix_offset(),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            telephone_window: default_telephone_window(),
            numeric_noise_floor: default_noise_floor(),
            min_name_length: default_min_name_length(),
            name_stop_words: default_stop_words(),
            person_labels: default_person_labels(),
        }
    }
}

fn default_telephone_window() -> LengthWindow {
    LengthWindow::new(14, 16)
}

fn default_noise_floor() -> usize {
    4
}

fn default_min_name_length() -> usize {
    3
}

fn default_prefix_offset() -> usize {
    5
}

fn default_stop_words() -> Vec<String> {
    [
        "date",
        "cordialement",
        "siret",
        "mail",
        "mode",
        "conditions",
        "nous",
        "au",
        "intracom",
        "code",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_person_labels() -> Vec<String> {
    vec!["PER".to_string(), "PERSON".to_string()]
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("telephone window must satisfy 1 <= min <= max, got [{min}, {max}]")]
    InvalidTelephoneWindow { min: usize, max: usize },

    #[error("min_name_length must be at least 1")]
    InvalidMinNameLength,

    #[error("person_labels must not be empty")]
    NoPersonLabels,

    #[error("skip_prefix offset must be at least 1")]
    InvalidPrefixOffset,
}

impl Config {
    /// Check every parameter before any document is processed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let window = self.detection.telephone_window;
        if window.min == 0 || window.min > window.max {
            return Err(ConfigError::InvalidTelephoneWindow {
                min: window.min,
                max: window.max,
            });
        }
        if self.detection.min_name_length == 0 {
            return Err(ConfigError::InvalidMinNameLength);
        }
        if self.detection.person_labels.is_empty() {
            return Err(ConfigError::NoPersonLabels);
        }
        if let TelephoneSubstitution::SkipPrefix { offset: 0 } =
            self.synthesis.telephone_substitution
        {
            return Err(ConfigError::InvalidPrefixOffset);
        }
        Ok(())
    }

    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Load config from an explicit path, which must exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "scrub", "scrub") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.scrub/config.toml")
        }
    }
}

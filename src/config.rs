//! arraykit Configuration
//!
//! Handles parsing and management of arraykit.toml configuration files.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::catalog::Tier;

/// File name searched for in the working directory and its parents.
pub const CONFIG_FILE: &str = "arraykit.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid random range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root configuration structure matching arraykit.toml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ArrayKitConfig {
    /// Demo driver settings
    #[serde(default)]
    pub demo: DemoConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Random input generation
    #[serde(default)]
    pub random: RandomConfig,
}

impl ArrayKitConfig {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: ArrayKitConfig = toml::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load configuration from the current directory or parents.
    pub fn load_from_cwd() -> ConfigResult<Self> {
        let cwd = std::env::current_dir().map_err(ConfigError::Io)?;
        Self::find_and_load(&cwd)
    }

    /// Find and load configuration by searching up from the given directory.
    pub fn find_and_load(start_dir: &Path) -> ConfigResult<Self> {
        match Self::find(start_dir) {
            Some(path) => Self::load(&path),
            None => {
                debug!("no {} found, using defaults", CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    /// Locate the nearest config file at or above `start_dir`.
    pub fn find(start_dir: &Path) -> Option<PathBuf> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.random.min > self.random.max {
            return Err(ConfigError::InvalidRange {
                min: self.random.min,
                max: self.random.max,
            });
        }
        Ok(())
    }
}

/// Demo driver configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Sections run when `arraykit demo` gets no `--section`
    #[serde(default = "default_sections")]
    pub sections: Vec<Tier>,
}

fn default_sections() -> Vec<Tier> {
    Tier::ALL.to_vec()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sections: default_sections(),
        }
    }
}

/// Output format for `run` and `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Random input configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Seed used when `--seed` is not given
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Length used when `run --random` is given without a count
    #[serde(default = "default_len")]
    pub len: usize,

    /// Smallest generated value
    #[serde(default = "default_min")]
    pub min: i32,

    /// Largest generated value
    #[serde(default = "default_max")]
    pub max: i32,
}

fn default_seed() -> u64 {
    42
}

fn default_len() -> usize {
    16
}

fn default_min() -> i32 {
    -50
}

fn default_max() -> i32 {
    50
}

impl RandomConfig {
    pub fn range(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            len: default_len(),
            min: default_min(),
            max: default_max(),
        }
    }
}

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ocean_core::{SimSettings, DEFAULT_CITATIONS, DEFAULT_SIZE_LABEL};
use ocean_logging::ocean_info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// On-disk simulator configuration (RON). Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub reply_delay_ms: u64,
    pub job_start_delay_ms: u64,
    pub tick_period_ms: u64,
    pub max_records: u32,
    /// Upper bound of the random per-tick percentage step.
    pub max_step: u8,
    pub size_label: String,
    pub citations: Vec<String>,
    /// Start with the greeting, sample jobs and query history.
    pub seed_samples: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1500,
            job_start_delay_ms: 1000,
            tick_period_ms: 500,
            max_records: 15_000,
            max_step: 15,
            size_label: DEFAULT_SIZE_LABEL.to_string(),
            citations: DEFAULT_CITATIONS.iter().map(|s| s.to_string()).collect(),
            seed_samples: true,
        }
    }
}

impl SimConfig {
    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                ocean_info!("no config at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config = Self::from_ron(&text)?;
        ocean_info!("loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new();
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_ms == 0 {
            return Err(ConfigError::Invalid("tick_period_ms must be positive".into()));
        }
        if self.max_step == 0 {
            return Err(ConfigError::Invalid("max_step must be positive".into()));
        }
        Ok(())
    }

    pub fn settings(&self) -> SimSettings {
        SimSettings {
            reply_delay: Duration::from_millis(self.reply_delay_ms),
            job_start_delay: Duration::from_millis(self.job_start_delay_ms),
            tick_period: Duration::from_millis(self.tick_period_ms),
            max_records: self.max_records,
            size_label: self.size_label.clone(),
            citations: self.citations.clone(),
        }
    }
}

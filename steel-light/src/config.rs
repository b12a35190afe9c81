use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../package-content/light_config.json5");

/// Tunables of the block light engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    /// Minimum light lost per step, `1..=15`. A block's own opacity wins when higher.
    pub base_attenuation: u8,
    /// Initial capacity of the flood-fill queue.
    pub queue_capacity: usize,
}

/// A configuration that failed to parse or validate.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON5 text is malformed.
    #[error("failed to parse light config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// `base_attenuation` outside `1..=15`.
    #[error("base attenuation must be in range 1..=15, got {0}")]
    BaseAttenuation(u8),
    /// `queue_capacity` of zero.
    #[error("queue capacity must be greater than 0")]
    QueueCapacity,
}

impl LightConfig {
    /// Parses and validates a JSON5 document. Missing fields take their defaults.
    pub fn from_json5(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json5::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a config file, writing the default one first if it does not exist yet.
    pub fn load_or_create(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(path, DEFAULT_CONFIG)
                .with_context(|| format!("writing default config to {}", path.display()))?;
            log::info!("Wrote default light config to {}", path.display());
        }

        let source =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_json5(&source).with_context(|| format!("loading {}", path.display()))
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=15).contains(&self.base_attenuation) {
            return Err(ConfigError::BaseAttenuation(self.base_attenuation));
        }
        if self.queue_capacity == 0 {
            return Err(ConfigError::QueueCapacity);
        }
        Ok(())
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            base_attenuation: 1,
            queue_capacity: 4096,
        }
    }
}

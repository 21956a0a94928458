use std::{fs, path::Path};

use machine_learning::encoding::UnknownCategoryPolicy;
use serde::{Deserialize, Serialize};

use super::{InputsConfig, MarketConfig};
use crate::error::{EstimatorError, Result};

/// Everything a `Session` needs to start. Missing JSON fields take their default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EstimatorConfig {
    pub market: MarketConfig,
    pub inputs: InputsConfig,
    pub unknown_category: UnknownCategoryPolicy,
}

impl EstimatorConfig {
    /// Reads and validates a JSON config file.
    ///
    /// # Errors
    /// Returns an `EstimatorError` if the file can't be read, parsed or is invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| EstimatorError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content)
    }

    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the cross-field constraints serde can't express.
    pub fn validate(&self) -> Result<()> {
        self.market
            .validate()
            .and_then(|_| self.inputs.validate())
            .map_err(EstimatorError::InvalidConfig)
    }
}

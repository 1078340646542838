//! Reference data configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the per-element indicator table is read from.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// CSV file with one row per element
    #[serde(default = "default_indicators_path")]
    pub indicators_path: PathBuf,
}

impl DataConfig {
    /// Validate data configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.indicators_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("data.indicators_path"));
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            indicators_path: default_indicators_path(),
        }
    }
}

fn default_indicators_path() -> PathBuf {
    PathBuf::from("gen_element_imputed.csv")
}

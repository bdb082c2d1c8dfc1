//! Validator configuration, read from TOML:
//!
//! ```toml
//! [[uniqueness]]
//! fields = ["email"]
//! case = "insensitive"
//!
//! [[uniqueness]]
//! fields = ["title"]
//! scope = ["list_id"]
//! absence = "skip"
//! message = "is already on this list"
//! ```

use std::path::Path;

use docguard_model::UniquenessSpec;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{ConfigError, ConfigResult, UniquenessValidator};

/// The uniqueness constraints declared for one kind of document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub uniqueness: Vec<UniquenessSpec>,
}

impl ValidatorConfig {
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. Unlike optional policy files, a missing or
    /// malformed file is an error.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!(
            "Loaded {} uniqueness constraint(s) from {:?}",
            config.uniqueness.len(),
            path
        );
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        for (index, spec) in self.uniqueness.iter().enumerate() {
            spec.validate()
                .map_err(|source| ConfigError::Invalid { index, source })?;
        }
        Ok(())
    }

    pub fn into_validator(self) -> ConfigResult<UniquenessValidator> {
        self.validate()?;
        Ok(UniquenessValidator::from_checked(self.uniqueness))
    }
}

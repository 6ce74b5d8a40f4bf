//! Configuration for the decision services.
//!
//! ```toml
//! [eligibility]
//! retirement_age = 65
//! unacceptable_risk_profile = "HIGH"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::policy::EligibilityPolicy;

/// Oldest retirement age accepted by [`PensionConfig::validate`].
const MAX_RETIREMENT_AGE: u32 = 150;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PensionConfig {
    pub eligibility: EligibilityPolicy,
}

impl PensionConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file (or no path) yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        debug!(
            path = %path.display(),
            retirement_age = config.eligibility.retirement_age,
            "Loaded config"
        );
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: PensionConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let eligibility = &self.eligibility;
        if eligibility.unacceptable_risk_profile.is_empty() {
            return Err(ConfigError::Invalid {
                reason: "unacceptable_risk_profile must not be empty".into(),
            });
        }
        if eligibility.retirement_age == 0 || eligibility.retirement_age > MAX_RETIREMENT_AGE {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "retirement_age must be between 1 and {MAX_RETIREMENT_AGE}, got {}",
                    eligibility.retirement_age
                ),
            });
        }
        Ok(())
    }
}

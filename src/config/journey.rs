use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{AuthflowError, Result};

/// Values configured for one journey step: a free-form label (a prompt
/// string or a raw input field name) mapped to the value to submit.
pub type StepConfig = IndexMap<String, String>;

/// A journey definition loaded from a YAML file.
///
/// Steps are kept in file order; the runner consumes them strictly in
/// sequence, one step per continuation call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyConfig {
    pub platform_url: String,
    pub realm: String,
    pub journey_name: String,
    pub steps: IndexMap<String, StepConfig>,
}

impl JourneyConfig {
    /// Load and parse a journey configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Check structural invariants before any network call is attempted.
    pub fn validate(&self) -> Result<()> {
        if !self.platform_url.starts_with("http") {
            return Err(AuthflowError::Config(
                "Platform URL must start with http or https".to_string(),
            ));
        }
        if self.realm.trim().is_empty() {
            return Err(AuthflowError::Config("Realm cannot be empty".to_string()));
        }
        if self.journey_name.trim().is_empty() {
            return Err(AuthflowError::Config(
                "Journey name cannot be empty".to_string(),
            ));
        }
        if self.steps.is_empty() {
            return Err(AuthflowError::Config(
                "At least one step must be defined".to_string(),
            ));
        }
        Ok(())
    }
}

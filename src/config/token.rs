use std::path::Path;

use serde::Deserialize;

use crate::error::{AuthflowError, Result};

/// Service-account token configuration loaded from a YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    pub service_account_id: String,
    /// Private key in JWK form, kept as the raw JSON string.
    pub jwk_json: String,
    pub platform: String,
    pub scope: String,
    /// Assertion lifetime in seconds.
    #[serde(default = "default_exp_seconds")]
    pub exp_seconds: u64,
    /// Output encoding name; unknown values render as the bare token.
    #[serde(default = "default_output_format")]
    pub output_format: String,
    #[serde(default)]
    pub proxy: Option<String>,
    /// TLS certificate verification, applied per request.
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
}

fn default_exp_seconds() -> u64 {
    899
}

fn default_output_format() -> String {
    "token".to_string()
}

fn default_verify_ssl() -> bool {
    true
}

impl TokenConfig {
    /// Load and parse a token configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Reject configurations with blank required fields.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("service_account_id", &self.service_account_id),
            ("jwk_json", &self.jwk_json),
            ("platform", &self.platform),
            ("scope", &self.scope),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AuthflowError::Config(format!(
                    "Missing required field '{field}' in config file"
                )));
            }
        }
        Ok(())
    }
}

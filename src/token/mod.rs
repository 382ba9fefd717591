//! Service-account token issuance: sign a bearer assertion, exchange it at
//! the platform token endpoint, render the result.

pub mod assertion;
pub mod exchange;
pub mod format;

pub use assertion::{sign_assertion, sign_assertion_at, AssertionClaims, SignedAssertion};
pub use exchange::TokenResult;
pub use format::{format_token, OutputFormat};

use std::time::Duration;

use crate::config::TokenConfig;
use crate::error::Result;

const TOKEN_ENDPOINT_PATH: &str = "/am/oauth2/access_token";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues service-account access tokens via the signed-JWT bearer grant.
pub struct TokenService {
    timeout: Duration,
}

impl TokenService {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sign a bearer assertion for the configured service account and
    /// exchange it for an access token. Errors propagate to the caller.
    pub async fn fetch(&self, config: &TokenConfig) -> Result<TokenResult> {
        let endpoint = audience_url(&config.platform);
        let assertion = assertion::sign_assertion(
            &config.service_account_id,
            &endpoint,
            &config.jwk_json,
            config.exp_seconds,
        )?;
        exchange::exchange_assertion(config, &endpoint, &assertion.jwt, self.timeout).await
    }
}

impl Default for TokenService {
    fn default() -> Self {
        Self::new()
    }
}

/// Token endpoint derived from the platform base URL. Doubles as the
/// assertion audience.
fn audience_url(platform: &str) -> String {
    format!("{}{}", platform.trim_end_matches('/'), TOKEN_ENDPOINT_PATH)
}

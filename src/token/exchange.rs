//! Token-endpoint exchange of a signed assertion for an access token.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::config::TokenConfig;
use crate::error::{AuthflowError, Result};

const CLIENT_ID: &str = "service-account";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Successful token grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenResult {
    pub token: String,
    pub expires_in: Option<u64>,
    pub scope: Option<String>,
}

/// Exchange a signed assertion at the token endpoint.
///
/// TLS verification and proxying apply to a client scoped to this one
/// request, never to shared process state.
pub async fn exchange_assertion(
    config: &TokenConfig,
    endpoint: &str,
    assertion: &str,
    timeout: Duration,
) -> Result<TokenResult> {
    let mut builder = reqwest::Client::builder().timeout(timeout);
    if !config.verify_ssl {
        builder = builder.danger_accept_invalid_certs(true);
    }
    if let Some(proxy) = &config.proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy)?);
    }
    let client = builder.build()?;

    debug!(endpoint, scope = %config.scope, "requesting access token");
    let resp = client
        .post(endpoint)
        .form(&[
            ("client_id", CLIENT_ID),
            ("grant_type", GRANT_TYPE),
            ("assertion", assertion),
            ("scope", config.scope.as_str()),
        ])
        .send()
        .await?;

    let status = resp.status();
    if status != StatusCode::OK {
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthflowError::exchange(status.as_u16(), body));
    }
    let payload: TokenResponse = resp.json().await?;
    debug!(
        expires_in = payload.expires_in,
        scope = payload.scope.as_deref(),
        "access token retrieved"
    );
    Ok(TokenResult {
        token: payload.access_token,
        expires_in: payload.expires_in,
        scope: payload.scope,
    })
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<u64>,
    scope: Option<String>,
}

//! Client for the platform authentication endpoints.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AuthflowError, Result};
use crate::journey::callback::Callback;

const ACCEPT_API_VERSION: &str = "resource=2.0, protocol=1.0";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for journey initialization and continuation.
pub struct AmClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl AmClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Start a journey and receive the first continuation handle and
    /// callback set.
    pub async fn init_journey(
        &self,
        platform_url: &str,
        realm: &str,
        journey_name: &str,
    ) -> Result<InitResponse> {
        let url = format!("{platform_url}/am/json/realms/root/realms/{realm}/authenticate");
        debug!(journey = journey_name, "initializing journey");
        let resp = self
            .client
            .post(&url)
            .query(&[
                ("authIndexType", "service"),
                ("authIndexValue", journey_name),
            ])
            .header("Content-Type", "application/json")
            .header("Accept-API-Version", ACCEPT_API_VERSION)
            .timeout(self.timeout)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(protocol_error("Failed to initialize journey", resp).await);
        }
        let init: InitResponse = resp.json().await?;
        debug!(callbacks = init.callbacks.len(), "journey initialized");
        Ok(init)
    }

    /// Submit filled callbacks and receive the next journey state.
    pub async fn continue_journey(
        &self,
        platform_url: &str,
        realm: &str,
        auth_id: &str,
        callbacks: &[Callback],
    ) -> Result<ContinueResponse> {
        let url = format!("{platform_url}/am/json/realms/root/realms/{realm}/authenticate");
        debug!(auth_id, "continuing journey");
        let resp = self
            .client
            .post(&url)
            .header("Accept-API-Version", ACCEPT_API_VERSION)
            .timeout(self.timeout)
            .json(&ContinueRequest { auth_id, callbacks })
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(protocol_error("Failed to continue journey", resp).await);
        }
        let next: ContinueResponse = resp.json().await?;
        debug!(terminal = next.token_id.is_some(), "continuation answered");
        Ok(next)
    }
}

impl Default for AmClient {
    fn default() -> Self {
        Self::new()
    }
}

/// First response of a journey: a continuation handle plus the callbacks to
/// fill for step one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitResponse {
    pub auth_id: String,
    #[serde(default)]
    pub callbacks: Vec<Callback>,
}

/// A continuation response: either the next step's state or the terminal
/// token id.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContinueResponse {
    pub auth_id: Option<String>,
    pub callbacks: Option<Vec<Callback>>,
    pub token_id: Option<String>,
    pub success_url: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContinueRequest<'a> {
    auth_id: &'a str,
    callbacks: &'a [Callback],
}

async fn protocol_error(context: &str, resp: reqwest::Response) -> AuthflowError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    AuthflowError::Protocol(format!("{context}: status {status}, body {body}"))
}

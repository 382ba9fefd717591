//! Output encodings for a fetched access token.

use serde_json::Value;

use crate::token::exchange::TokenResult;

/// How `token get` renders its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Token,
    Bearer,
    Json,
}

impl From<&str> for OutputFormat {
    /// Unknown encoding names fall back to the bare token form.
    fn from(value: &str) -> Self {
        match value {
            "bearer" => Self::Bearer,
            "json" => Self::Json,
            _ => Self::Token,
        }
    }
}

/// Render a token result in the requested encoding.
pub fn format_token(result: &TokenResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Token => result.token.clone(),
        OutputFormat::Bearer => format!("Bearer {}", result.token),
        OutputFormat::Json => {
            let mut payload = serde_json::Map::new();
            payload.insert("access_token".to_string(), Value::from(result.token.clone()));
            payload.insert("token_type".to_string(), Value::from("Bearer"));
            if let Some(expires_in) = result.expires_in {
                payload.insert("expires_in".to_string(), Value::from(expires_in));
            }
            if let Some(scope) = &result.scope {
                payload.insert("scope".to_string(), Value::from(scope.clone()));
            }
            Value::Object(payload).to_string()
        }
    }
}

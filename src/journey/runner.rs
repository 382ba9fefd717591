//! Journey execution state machine.
//!
//! A run moves Init → Stepping → one of Completed, Failed, or Cancelled.
//! Every error raised after the run starts is folded into a failed outcome:
//! callers always receive a structured result, never a fault.

use std::time::Duration;

use tracing::info;

use crate::config::JourneyConfig;
use crate::error::{AuthflowError, Result};
use crate::journey::api::AmClient;
use crate::journey::matcher;

/// Reported when every configured step ran without the platform issuing a
/// token.
const NO_TOKEN_MESSAGE: &str = "journey completed but no token received";

/// Answers that stop an interactive run. Anything else, including an empty
/// line, continues the journey; only an explicit denial cancels it.
const DENIAL_ANSWERS: &[&str] = &["n", "no", "q", "quit", "abort", "cancel"];

/// Terminal outcome of a journey run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JourneyOutcome {
    Success {
        token_id: String,
        success_url: Option<String>,
    },
    Failed {
        error: String,
    },
    Cancelled,
}

/// Operator confirmation hook for interactive runs.
///
/// The state machine suspends on `ask` after initialization and after each
/// non-terminal continuation. Tests supply a scripted implementation; the
/// CLI reads a line from the terminal.
pub trait ConfirmationPrompt {
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Drives a configured journey against the platform, one step per
/// continuation call.
pub struct JourneyRunner {
    client: AmClient,
}

impl JourneyRunner {
    pub fn new() -> Self {
        Self {
            client: AmClient::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.with_timeout(timeout);
        self
    }

    /// Run the journey to completion without operator interaction.
    pub async fn run(&self, config: &JourneyConfig) -> JourneyOutcome {
        match self.drive(config, None).await {
            Ok(outcome) => outcome,
            Err(err) => JourneyOutcome::Failed {
                error: err.to_string(),
            },
        }
    }

    /// Run the journey, pausing for operator confirmation after every
    /// non-terminal response.
    pub async fn run_interactive(
        &self,
        config: &JourneyConfig,
        prompt: &mut dyn ConfirmationPrompt,
    ) -> JourneyOutcome {
        match self.drive(config, Some(prompt)).await {
            Ok(outcome) => outcome,
            Err(err) => JourneyOutcome::Failed {
                error: err.to_string(),
            },
        }
    }

    async fn drive(
        &self,
        config: &JourneyConfig,
        mut gate: Option<&mut dyn ConfirmationPrompt>,
    ) -> Result<JourneyOutcome> {
        info!(journey = %config.journey_name, "starting journey");
        let init = self
            .client
            .init_journey(&config.platform_url, &config.realm, &config.journey_name)
            .await?;
        let mut auth_id = init.auth_id;
        let mut callbacks = init.callbacks;

        if denied(&mut gate)? {
            return Ok(JourneyOutcome::Cancelled);
        }

        for (index, (step_name, step)) in config.steps.iter().enumerate() {
            info!(step = index + 1, name = %step_name, "processing step");
            matcher::fill_callbacks(&mut callbacks, step);
            let response = self
                .client
                .continue_journey(&config.platform_url, &config.realm, &auth_id, &callbacks)
                .await?;

            if let Some(token_id) = response.token_id {
                info!("authentication successful");
                return Ok(JourneyOutcome::Success {
                    token_id,
                    success_url: response.success_url,
                });
            }

            auth_id = response.auth_id.ok_or_else(|| {
                AuthflowError::Protocol("continuation response missing authId".to_string())
            })?;
            callbacks = response.callbacks.ok_or_else(|| {
                AuthflowError::Protocol("continuation response missing callbacks".to_string())
            })?;

            if denied(&mut gate)? {
                return Ok(JourneyOutcome::Cancelled);
            }
        }

        Ok(JourneyOutcome::Failed {
            error: NO_TOKEN_MESSAGE.to_string(),
        })
    }
}

impl Default for JourneyRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Ask the operator whether to continue. A missing gate never denies.
fn denied(gate: &mut Option<&mut dyn ConfirmationPrompt>) -> Result<bool> {
    let Some(prompt) = gate else {
        return Ok(false);
    };
    let answer = prompt.ask("Continue to next step? [Y/n]")?;
    Ok(is_denial(&answer))
}

fn is_denial(answer: &str) -> bool {
    let normalized = answer.trim().to_ascii_lowercase();
    DENIAL_ANSWERS.contains(&normalized.as_str())
}

#![allow(dead_code)]

use authflow::config::{JourneyConfig, StepConfig, TokenConfig};
use authflow::error::Result;
use authflow::journey::ConfirmationPrompt;
use serde_json::{json, Value};

/// 2048-bit RSA private key used across the token tests, in JWK form.
pub const TEST_JWK: &str = r#"{
  "kty": "RSA",
  "n": "vpwwVj6zFr3yX5JlueFW9z0SjTOhbJ92j0dQEGbtleNOV-SY2RRNOCdkX2jluz2ra-xrCkq9arSGqS6vHaDAIkEt65VaOOeQVDjzRMXkZj1-pGvffGwV-L-M7D_KNmG63vtAvREEtBRtaplXT4tX3wUMpLJmTrCcPd3CYEceJCb0hw30NRZhYQQ94qSZAp5cbIy_wok0P-PFs4qoF_fL0wl3AUaEb4qtU51RR2VvSq9GOHLvogaR5Em7V37o2GJ8vQ2L-LtW7-drySDX6DGh44PB0HHPAgOv3cROJOGXBfvgrb3bogPGiKYD-Fay_Z0IA5C-eHhUGXY3UywsqB-pKQ",
  "e": "AQAB",
  "d": "DyYJn2kXQZjyAM95Pzcd-sNDTK6MRz47JXL09YDApBdvHAQic6ot4ucajoyfKWziyU5-SVCcUjUruJlpuHCUpIRKmn0BsSESMuddyhryJn__pyCdn91VN7I9iG8faogE2oDcacpG9erjsUOjkUJRRvu3QAWfpORbXn1X29_7EMNWrzaJYvRAwGcPSdifOV4cJgERDK891YJ7YZzn0uXdvuZd4f4cStW1qjwufjhezeLd_3fsvI9P-WbKXgSX9SQghigd-kZQOlbnOBnnKUDPhlKf61l4avQua3WA0Jm0olHuiALXIUHNemz6kBZYNWk67312mm7oMzAbapGRiH7iQQ",
  "p": "4optro92Sg0f45JGxGCdjnSLAWre_Tp2SU6jPpsfGX_wmEYbjuj_0aYNb8SE7ZckRu0AcSjPXOyebmPqiychixl0At2-1DP2buQk0UQBzell7HsAX24CFC4H_qqKttyFGoF6qJ3ziOEJynWDYD15mWYo2L0lOtdyW1D0wtfwFvE",
  "q": "12WgBXtGgR3JYmdfkm1-ez41Jviq2lw8g0uNhN_G5aYuL_vTVZ4JReUPdtXGoLPg6vql0lMruoXyVZY4YdWFxV16z1jBECgwULhmJ0UCJ1Rfu27JG2lpnd3kQZzEqomfoBvT9wXipGrDnolXq7mOJSxdZjEDybQHau3xUd-yZbk"
}"#;

/// Public modulus of [`TEST_JWK`], for verifying signatures.
pub const TEST_JWK_N: &str = "vpwwVj6zFr3yX5JlueFW9z0SjTOhbJ92j0dQEGbtleNOV-SY2RRNOCdkX2jluz2ra-xrCkq9arSGqS6vHaDAIkEt65VaOOeQVDjzRMXkZj1-pGvffGwV-L-M7D_KNmG63vtAvREEtBRtaplXT4tX3wUMpLJmTrCcPd3CYEceJCb0hw30NRZhYQQ94qSZAp5cbIy_wok0P-PFs4qoF_fL0wl3AUaEb4qtU51RR2VvSq9GOHLvogaR5Em7V37o2GJ8vQ2L-LtW7-drySDX6DGh44PB0HHPAgOv3cROJOGXBfvgrb3bogPGiKYD-Fay_Z0IA5C-eHhUGXY3UywsqB-pKQ";

/// Public exponent of [`TEST_JWK`].
pub const TEST_JWK_E: &str = "AQAB";

/// Scripted confirmation prompt that replays queued answers and records the
/// questions it was asked.
pub struct ScriptedPrompt {
    answers: Vec<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().rev().map(|s| s.to_string()).collect(),
            questions: Vec::new(),
        }
    }
}

impl ConfirmationPrompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.questions.push(question.to_string());
        Ok(self.answers.pop().unwrap_or_default())
    }
}

pub fn step(pairs: &[(&str, &str)]) -> StepConfig {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

pub fn journey_config(platform_url: &str, steps: Vec<(&str, StepConfig)>) -> JourneyConfig {
    JourneyConfig {
        platform_url: platform_url.to_string(),
        realm: "alpha".to_string(),
        journey_name: "Login".to_string(),
        steps: steps
            .into_iter()
            .map(|(name, step)| (name.to_string(), step))
            .collect(),
    }
}

pub fn token_config(platform: &str) -> TokenConfig {
    TokenConfig {
        service_account_id: "sa-123".to_string(),
        jwk_json: TEST_JWK.to_string(),
        platform: platform.to_string(),
        scope: "fr:am:*".to_string(),
        exp_seconds: 899,
        output_format: "token".to_string(),
        proxy: None,
        verify_ssl: true,
    }
}

pub fn name_callback(prompt: &str, input_name: &str) -> Value {
    json!({
        "type": "NameCallback",
        "output": [{"name": "prompt", "value": prompt}],
        "input": [{"name": input_name, "value": ""}]
    })
}

pub fn password_callback(prompt: &str, input_name: &str) -> Value {
    json!({
        "type": "PasswordCallback",
        "output": [{"name": "prompt", "value": prompt}],
        "input": [{"name": input_name, "value": ""}]
    })
}

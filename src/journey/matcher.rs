//! Heuristic prompt matching.
//!
//! Resolves each callback input against the configured step values. Stages
//! run in strict priority order; the first hit wins:
//!
//! 1. exact match of the prompt text against a step key
//! 2. case-insensitive match of the prompt text against a step key
//! 3. direct match of a step key against the raw input field name
//! 4. keyword category match (identity, password, one-time code, phone)
//! 5. case-insensitive substring containment in either direction
//!
//! An input that matches nothing keeps its original value. Callbacks
//! without a prompt output skip the prompt-based stages but still get the
//! field-name stage.

use serde_json::Value;
use tracing::debug;

use crate::config::StepConfig;
use crate::journey::callback::Callback;

/// Keyword categories for fuzzy matching.
///
/// Order is significant: categories are tried top to bottom and the first
/// one satisfied by both the prompt and some step key wins, so a key that
/// would also satisfy a later category never gets the chance.
const CATEGORIES: &[&[&str]] = &[
    // identity
    &["user", "username", "login", "email", "mail", "identifier"],
    // password
    &["password", "passwd", "pwd", "secret"],
    // one-time code
    &["otp", "one time", "one-time", "code", "pin"],
    // phone
    &["phone", "mobile", "tel", "sms"],
];

/// Fill every input of every callback from the step values.
pub fn fill_callbacks(callbacks: &mut [Callback], step: &StepConfig) {
    for callback in callbacks.iter_mut() {
        let prompt = callback.prompt().map(str::to_string);
        for input in &mut callback.input {
            if let Some(value) = resolve(prompt.as_deref(), &input.name, step) {
                debug!(input = %input.name, "matched callback input");
                input.value = Value::String(value.to_string());
            }
        }
    }
}

/// Resolve one callback input to a configured value.
///
/// `prompt` is the callback's declared prompt text, when it has one;
/// `input_name` is the raw protocol field name of the input slot.
pub fn resolve<'a>(
    prompt: Option<&str>,
    input_name: &str,
    step: &'a StepConfig,
) -> Option<&'a str> {
    if let Some(prompt) = prompt {
        if let Some(value) = step.get(prompt) {
            return Some(value.as_str());
        }
        if let Some(value) = case_insensitive_match(prompt, step) {
            return Some(value);
        }
    }
    if let Some(value) = step.get(input_name) {
        return Some(value.as_str());
    }
    let prompt = prompt?;
    if let Some(value) = category_match(prompt, step) {
        return Some(value);
    }
    substring_match(prompt, step)
}

fn case_insensitive_match<'a>(prompt: &str, step: &'a StepConfig) -> Option<&'a str> {
    step.iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(prompt))
        .map(|(_, value)| value.as_str())
}

fn category_match<'a>(prompt: &str, step: &'a StepConfig) -> Option<&'a str> {
    for keywords in CATEGORIES {
        if !matches_category(prompt, keywords) {
            continue;
        }
        if let Some(value) = step
            .iter()
            .find(|(key, _)| matches_category(key, keywords))
            .map(|(_, value)| value.as_str())
        {
            return Some(value);
        }
    }
    None
}

fn substring_match<'a>(prompt: &str, step: &'a StepConfig) -> Option<&'a str> {
    let prompt = prompt.to_ascii_lowercase();
    step.iter()
        .find(|(key, _)| {
            let key = key.to_ascii_lowercase();
            prompt.contains(&key) || key.contains(&prompt)
        })
        .map(|(_, value)| value.as_str())
}

fn matches_category(text: &str, keywords: &[&str]) -> bool {
    let text = text.to_ascii_lowercase();
    keywords.iter().any(|keyword| text.contains(keyword))
}

//! Wire types for the callback protocol.

use serde::{Deserialize, Serialize};

/// One protocol unit of required or provided information during a journey
/// step.
///
/// Inputs and outputs are kept as ordered lists, never maps: the platform
/// rejects continuation requests whose inputs come back reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Callback {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<CallbackEntry>,
    #[serde(default)]
    pub input: Vec<CallbackEntry>,
}

/// A named slot within a callback. Values are kept loose since the protocol
/// mixes strings, numbers, and booleans across callback kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackEntry {
    pub name: String,
    pub value: serde_json::Value,
}

impl Callback {
    /// The prompt text declared by this callback, when it has one.
    pub fn prompt(&self) -> Option<&str> {
        self.output
            .iter()
            .find(|entry| entry.name == "prompt")
            .and_then(|entry| entry.value.as_str())
    }
}

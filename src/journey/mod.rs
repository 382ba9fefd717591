//! Journey execution: callback protocol types, prompt matching, and the
//! step-by-step state machine.

pub mod api;
pub mod callback;
pub mod matcher;
pub mod runner;

pub use api::{AmClient, ContinueResponse, InitResponse};
pub use callback::{Callback, CallbackEntry};
pub use runner::{ConfirmationPrompt, JourneyOutcome, JourneyRunner};

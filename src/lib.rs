//! authflow: drive callback-based authentication journeys and issue
//! service-account access tokens against an AM-style identity platform.
//!
//! Two independent pipelines:
//! - journey execution: initialize a named journey, fill each callback from
//!   configured step values via heuristic prompt matching, and continue
//!   until the platform returns a token id.
//! - token issuance: sign a JWT bearer assertion with a service account's
//!   private JWK and exchange it for an OAuth2 access token.
//!
//! # Quick Start
//!
//! ```no_run
//! use authflow::config::JourneyConfig;
//! use authflow::journey::JourneyRunner;
//!
//! # async fn example() -> authflow::error::Result<()> {
//! let config = JourneyConfig::from_yaml_file("journey.yaml")?;
//! config.validate()?;
//! let outcome = JourneyRunner::new().run(&config).await;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod journey;
pub mod token;

//! CLI entry point for authflow.

pub mod journey;
pub mod token;

use clap::{Parser, Subcommand};

/// authflow CLI
#[derive(Parser, Debug)]
#[command(
    name = "authflow",
    version,
    about = "Simulate authentication journeys and issue service-account tokens"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authentication journey testing
    Journey(JourneyArgs),
    /// Service-account token operations
    Token(TokenArgs),
}

/// Arguments for the `journey` subcommand group.
#[derive(Parser, Debug)]
pub struct JourneyArgs {
    #[command(subcommand)]
    pub command: JourneyCommands,
}

/// Journey subcommands for running and validating configurations.
#[derive(Subcommand, Debug)]
pub enum JourneyCommands {
    /// Run an authentication journey from a YAML config file
    Run(RunArgs),
    /// Validate a YAML journey configuration file
    Validate(ValidateArgs),
}

/// Arguments for `authflow journey run`.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the YAML configuration file
    pub file: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Pause for confirmation between steps
    #[arg(short, long)]
    pub step_by_step: bool,

    /// Request timeout in milliseconds
    #[arg(short, long, default_value_t = 30_000)]
    pub timeout: u64,
}

/// Arguments for `authflow journey validate`.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the YAML configuration file to validate
    pub file: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the `token` subcommand group.
#[derive(Parser, Debug)]
pub struct TokenArgs {
    #[command(subcommand)]
    pub command: TokenCommands,
}

/// Token subcommands.
#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    /// Fetch a service-account access token from a YAML config
    Get(GetArgs),
}

/// Arguments for `authflow token get`.
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Path to the YAML token configuration file
    #[arg(short = 'C', long = "config")]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_journey_run_with_defaults() {
        let cli = Cli::try_parse_from(["authflow", "journey", "run", "login.yaml"]).unwrap();
        match cli.command {
            Commands::Journey(journey) => match journey.command {
                JourneyCommands::Run(args) => {
                    assert_eq!(args.file, "login.yaml");
                    assert!(!args.verbose);
                    assert!(!args.step_by_step);
                    assert_eq!(args.timeout, 30_000);
                }
                other => panic!("expected Run, got {other:?}"),
            },
            other => panic!("expected Journey, got {other:?}"),
        }
    }

    #[test]
    fn parse_journey_run_with_all_options() {
        let cli = Cli::try_parse_from([
            "authflow", "journey", "run", "login.yaml", "-v", "-s", "-t", "5000",
        ])
        .unwrap();
        match cli.command {
            Commands::Journey(journey) => match journey.command {
                JourneyCommands::Run(args) => {
                    assert!(args.verbose);
                    assert!(args.step_by_step);
                    assert_eq!(args.timeout, 5000);
                }
                other => panic!("expected Run, got {other:?}"),
            },
            other => panic!("expected Journey, got {other:?}"),
        }
    }

    #[test]
    fn parse_journey_validate() {
        let cli = Cli::try_parse_from(["authflow", "journey", "validate", "login.yaml"]).unwrap();
        match cli.command {
            Commands::Journey(journey) => match journey.command {
                JourneyCommands::Validate(args) => assert_eq!(args.file, "login.yaml"),
                other => panic!("expected Validate, got {other:?}"),
            },
            other => panic!("expected Journey, got {other:?}"),
        }
    }

    #[test]
    fn parse_token_get_with_short_config_flag() {
        let cli = Cli::try_parse_from(["authflow", "token", "get", "-C", "token.yaml"]).unwrap();
        match cli.command {
            Commands::Token(token) => match token.command {
                TokenCommands::Get(args) => {
                    assert_eq!(args.config, "token.yaml");
                    assert!(!args.verbose);
                }
            },
            other => panic!("expected Token, got {other:?}"),
        }
    }

    #[test]
    fn parse_token_get_with_long_config_flag() {
        let cli =
            Cli::try_parse_from(["authflow", "token", "get", "--config", "token.yaml", "-v"])
                .unwrap();
        match cli.command {
            Commands::Token(token) => match token.command {
                TokenCommands::Get(args) => {
                    assert_eq!(args.config, "token.yaml");
                    assert!(args.verbose);
                }
            },
            other => panic!("expected Token, got {other:?}"),
        }
    }

    #[test]
    fn parse_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["authflow"]).is_err());
    }

    #[test]
    fn parse_run_missing_file_is_error() {
        assert!(Cli::try_parse_from(["authflow", "journey", "run"]).is_err());
    }

    #[test]
    fn parse_token_get_missing_config_is_error() {
        assert!(Cli::try_parse_from(["authflow", "token", "get"]).is_err());
    }
}

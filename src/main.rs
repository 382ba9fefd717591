//! authflow CLI binary entry point.

use authflow::cli::{Cli, Commands, JourneyCommands, TokenCommands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    init_tracing(verbose_flag(&cli));

    let result = match cli.command {
        Commands::Journey(journey_args) => match journey_args.command {
            JourneyCommands::Run(args) => authflow::cli::journey::handle_run(args).await,
            JourneyCommands::Validate(args) => authflow::cli::journey::handle_validate(args).await,
        },
        Commands::Token(token_args) => match token_args.command {
            TokenCommands::Get(args) => authflow::cli::token::handle_get(args).await,
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn verbose_flag(cli: &Cli) -> bool {
    match &cli.command {
        Commands::Journey(journey_args) => match &journey_args.command {
            JourneyCommands::Run(args) => args.verbose,
            JourneyCommands::Validate(args) => args.verbose,
        },
        Commands::Token(token_args) => match &token_args.command {
            TokenCommands::Get(args) => args.verbose,
        },
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("{}={level}", env!("CARGO_CRATE_NAME")))
        .init();
}

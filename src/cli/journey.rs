//! CLI journey command handlers for run and validate.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::cli::{RunArgs, ValidateArgs};
use crate::config::JourneyConfig;
use crate::error::Result;
use crate::journey::{ConfirmationPrompt, JourneyOutcome, JourneyRunner};

/// Handle `authflow journey run <file>`.
pub async fn handle_run(args: RunArgs) -> Result<()> {
    let config = load_config(&args.file)?;
    let runner = JourneyRunner::new().with_timeout(Duration::from_millis(args.timeout));

    println!("⏳ Running journey: {}", config.journey_name);
    let outcome = if args.step_by_step {
        let mut prompt = StdinPrompt;
        runner.run_interactive(&config, &mut prompt).await
    } else {
        runner.run(&config).await
    };

    match outcome {
        JourneyOutcome::Success {
            token_id,
            success_url,
        } => {
            println!("✅ Journey completed successfully");
            println!("   Token ID: {}...", truncate(&token_id, 20));
            if let Some(url) = success_url {
                println!("   Success URL: {url}");
            }
            Ok(())
        }
        JourneyOutcome::Failed { error } => {
            eprintln!("❌ Journey failed: {error}");
            std::process::exit(1);
        }
        JourneyOutcome::Cancelled => {
            eprintln!("❌ Journey cancelled");
            std::process::exit(1);
        }
    }
}

/// Handle `authflow journey validate <file>`.
pub async fn handle_validate(args: ValidateArgs) -> Result<()> {
    let config = load_config(&args.file)?;
    println!("✅ Configuration is valid!");
    println!("   Journey: {}", config.journey_name);
    println!("   Platform: {}", config.platform_url);
    println!("   Realm: {}", config.realm);
    println!("   Steps: {}", config.steps.len());
    Ok(())
}

fn load_config(file: &str) -> Result<JourneyConfig> {
    if !Path::new(file).exists() {
        eprintln!("❌ Config file not found: {file}");
        std::process::exit(1);
    }
    let config = JourneyConfig::from_yaml_file(file)?;
    config.validate()?;
    Ok(config)
}

/// Terminal-backed confirmation that reads one line from stdin.
struct StdinPrompt;

impl ConfirmationPrompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        print!("{question} ");
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        Ok(answer)
    }
}

fn truncate(value: &str, limit: usize) -> &str {
    match value.char_indices().nth(limit) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

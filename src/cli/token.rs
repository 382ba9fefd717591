//! CLI token command handler for service-account token issuance.

use std::path::Path;

use crate::cli::GetArgs;
use crate::config::TokenConfig;
use crate::error::Result;
use crate::token::{format_token, OutputFormat, TokenService};

/// Handle `authflow token get -C <file>`.
///
/// Prints only the formatted token on stdout so the output can be piped;
/// diagnostics go to stderr.
pub async fn handle_get(args: GetArgs) -> Result<()> {
    if !Path::new(&args.config).exists() {
        eprintln!("❌ Config file not found: {}", args.config);
        std::process::exit(1);
    }
    let config = TokenConfig::from_yaml_file(&args.config)?;
    config.validate()?;

    let result = TokenService::new().fetch(&config).await?;

    let format = OutputFormat::from(config.output_format.as_str());
    println!("{}", format_token(&result, format));
    Ok(())
}

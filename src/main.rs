use anyhow::{Context, Result};
use tracing::error;
use tracing_subscriber::EnvFilter;

use clickup_helper::cli;
use clickup_helper::{config, ClickUpClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = cli::parse_args(&args)? else {
        cli::print_help();
        return Ok(());
    };

    let config = config::load_config()?;
    let command = command.with_default_team(config.team_id.as_deref())?;

    let api_key = config.api_key.clone().unwrap_or_default();
    let client = ClickUpClient::with_base_url(api_key, config.base_url()).with_context(|| {
        format!(
            "Set {} or api_key in {}",
            config::API_KEY_ENV,
            config::config_dir().join("config.toml").display()
        )
    })?;

    match cli::execute(&client, command).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            error!(kind = ?e.kind(), "{e}");
            println!("null");
            std::process::exit(1);
        }
    }
}

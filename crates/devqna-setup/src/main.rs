//! DevQnA setup CLI - one-time provisioning of the remote schema.
//!
//! Run by an operator, never from the request path. Every step tolerates
//! "already exists" so the command can be re-run safely.

mod provision;

use clap::{Parser, Subcommand};
use thiserror::Error;

use devqna_core::config::{normalize_endpoint, BaasConfig};

#[derive(Parser)]
#[command(name = "devqna-setup")]
#[command(about = "Provision the remote database, tables, and attachment bucket")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// BaaS endpoint URL (falls back to DEVQNA_APPWRITE_ENDPOINT)
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<String>,

    /// BaaS project id (falls back to DEVQNA_APPWRITE_PROJECT_ID)
    #[arg(long, global = true, value_name = "ID")]
    project_id: Option<String>,

    /// Server API key (falls back to DEVQNA_APPWRITE_API_KEY)
    #[arg(long, global = true, value_name = "KEY")]
    api_key: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and the content tables with columns and indexes
    Database,
    /// Create the question-attachment bucket
    Storage,
    /// Run both database and storage provisioning
    All,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] devqna_core::Error),
    #[error(
        "BaaS connection is not configured. Pass --endpoint/--project-id/--api-key or set the DEVQNA_APPWRITE_* variables."
    )]
    NotConfigured,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("devqna=info".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();
    let config = resolve_config(cli.endpoint, cli.project_id, cli.api_key)?;

    match cli.command {
        Commands::Database => provision::provision_database(&config).await?,
        Commands::Storage => provision::provision_storage(&config).await?,
        Commands::All => {
            provision::provision_database(&config).await?;
            provision::provision_storage(&config).await?;
        }
    }

    println!("Setup complete");
    Ok(())
}

/// Merge CLI flags over the environment-provided configuration.
fn resolve_config(
    endpoint: Option<String>,
    project_id: Option<String>,
    api_key: Option<String>,
) -> Result<BaasConfig, CliError> {
    let from_env = BaasConfig::from_env()?;

    let endpoint = match endpoint {
        Some(value) => normalize_endpoint(&value)?,
        None => from_env
            .as_ref()
            .map(|config| config.endpoint.clone())
            .ok_or(CliError::NotConfigured)?,
    };
    let project_id = project_id
        .or_else(|| from_env.as_ref().map(|config| config.project_id.clone()))
        .ok_or(CliError::NotConfigured)?;
    let api_key = api_key
        .or_else(|| from_env.as_ref().and_then(|config| config.api_key.clone()))
        .ok_or(CliError::NotConfigured)?;

    Ok(BaasConfig {
        endpoint,
        project_id,
        api_key: Some(api_key),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_config_prefers_cli_flags() {
        let config = resolve_config(
            Some("https://cloud.example.com".to_string()),
            Some("devqna".to_string()),
            Some("server-key".to_string()),
        )
        .unwrap();

        assert_eq!(config.endpoint, "https://cloud.example.com/v1");
        assert_eq!(config.project_id, "devqna");
        assert_eq!(config.api_key.as_deref(), Some("server-key"));
    }

    #[test]
    fn resolve_config_without_flags_or_env_is_an_error() {
        // Missing project id cannot be filled from CLI flags alone.
        let result = resolve_config(Some("https://cloud.example.com".to_string()), None, None);
        assert!(result.is_err());
    }
}

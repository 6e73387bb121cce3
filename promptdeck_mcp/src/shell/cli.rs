//! # Promptdeck MCP Server CLI
//!
//! Command-line interface definition and mode dispatch.

use crate::mcp_service::PromptdeckService;
use crate::utils::logging::init_logging;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use promptdeck_api_client::client::{ApiClient, DEFAULT_BASE_URL};
use promptdeck_api_client::envelope;
use rmcp::ServiceExt;
use std::sync::Arc;
use tracing::info;

/// Promptdeck MCP Server: the Prompt Engineer Helper API as MCP tools.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about,
    long_about = "promptdeck_mcp runs in two modes:

1. Server Mode (default): MCP server over stdio for direct integration.
   Example: promptdeck_mcp

2. Health Mode: issue an unauthenticated health check against the remote
   API and print the JSON result.
   Example: promptdeck_mcp health"
)]
pub struct Cli {
    /// Origin of the remote Prompt Engineer Helper API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Log to stderr instead of file
    #[arg(long)]
    pub log_to_stderr: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check connectivity with the remote API and print the JSON result
    Health,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "info" };
    let log_to_file = !cli.log_to_stderr;
    init_logging(log_level, log_to_file)?;

    let client = Arc::new(
        ApiClient::new(&cli.base_url)
            .with_context(|| format!("invalid base URL: {}", cli.base_url))?,
    );

    match cli.command {
        Some(Command::Health) => run_health_mode(&client, &cli.base_url).await,
        None => run_server_mode(&client).await,
    }
}

/// Diagnostic mode: one unauthenticated health check, printed as JSON.
async fn run_health_mode(client: &ApiClient, base_url: &str) -> Result<()> {
    info!("Checking remote API health at {base_url}");
    let result = client.health_check().await;
    println!("{}", serde_json::to_string_pretty(&result)?);
    client.close().await;
    if envelope::is_error(&result) {
        anyhow::bail!("remote API health check failed");
    }
    Ok(())
}

/// Default mode: MCP server over stdio, until the client disconnects.
async fn run_server_mode(client: &Arc<ApiClient>) -> Result<()> {
    info!("Starting promptdeck MCP server (stdio)");

    let handler = PromptdeckService::new(client.clone());
    let service = handler
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server on stdio")?;

    let outcome = service.waiting().await;

    // Close the shared HTTP channel exactly once on the way out.
    client.close().await;
    info!("MCP server shutting down");

    outcome.context("MCP server terminated abnormally")?;
    Ok(())
}

//! AI PetroTech Platform - demo dashboard server
//!
//! Serves the synthetic drilling dashboard over HTTP and runs its refresh
//! timers until Ctrl+C.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: 0.0.0.0:8080, random data, registers schemas with itself
//! cargo run --release
//!
//! # Reproducible data, no outbound registration
//! ./petrotech-demo --seed 42 --no-schema-registration
//!
//! # Write a starter config
//! ./petrotech-demo --print-config > dashboard.toml
//! ```
//!
//! # Environment Variables
//!
//! - `PETROTECH_CONFIG`: Path to a TOML config file (default: `./dashboard.toml`)
//! - `PETROTECH_ADDR`, `PETROTECH_SEED`, `PETROTECH_SCHEMA_URL`: CLI overrides
//! - `PETROTECH_CORS_ORIGINS`: Comma-separated allowed origins
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use petrotech_demo::api::{create_app, ApiState};
use petrotech_demo::config::DashboardConfig;
use petrotech_demo::schema::{spawn_startup_registration, HttpSchemaSink};
use petrotech_demo::{spawn_polling, Dashboard, SchemaRegistry};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "petrotech-demo")]
#[command(about = "AI PetroTech Platform - synthetic drilling dashboard")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default: "0.0.0.0:8080")
    #[arg(short, long, env = "PETROTECH_ADDR", value_name = "HOST:PORT")]
    addr: Option<String>,

    /// Load this config file instead of searching for one
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed the data generators for a reproducible demo
    #[arg(long, env = "PETROTECH_SEED")]
    seed: Option<u64>,

    /// Base URL that receives the table schemas (default: this server)
    #[arg(long, env = "PETROTECH_SCHEMA_URL", value_name = "URL")]
    schema_url: Option<String>,

    /// Skip startup schema registration
    #[arg(long)]
    no_schema_registration: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

/// Logs go to stderr; stdout is reserved for `--print-config`.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// File config with CLI overrides applied
fn resolve_config(args: &CliArgs) -> Result<DashboardConfig> {
    let mut config = match &args.config {
        Some(path) => DashboardConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => DashboardConfig::load(),
    };

    if let Some(addr) = &args.addr {
        config.server.addr = addr.clone();
    }
    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(url) = &args.schema_url {
        config.schema.base_url = Some(url.clone());
    }
    if args.no_schema_registration {
        config.schema.enabled = false;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Where startup registration goes when no base URL is configured
fn self_url(local: SocketAddr) -> String {
    let host = if local.ip().is_unspecified() {
        "127.0.0.1".to_string()
    } else {
        local.ip().to_string()
    };
    format!("http://{}:{}", host, local.port())
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.log_json);

    let config = resolve_config(&args)?;
    if args.print_config {
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    info!("AI PetroTech Platform - demo dashboard");

    let dashboard = Dashboard::shared(&config);
    let schemas = SchemaRegistry::new();
    let _polling = spawn_polling(&dashboard, &config.timing);

    let app = create_app(ApiState::new(dashboard.clone(), schemas));
    let listener = tokio::net::TcpListener::bind(&config.server.addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.server.addr))?;
    let local = listener.local_addr().context("Listener has no local address")?;
    info!(addr = %local, "HTTP server listening");
    info!("Dashboard available at: {}", self_url(local));

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                cancel_token.cancelled().await;
            })
            .await
    });

    if config.schema.enabled {
        let base = config
            .schema
            .base_url
            .clone()
            .unwrap_or_else(|| self_url(local));
        match HttpSchemaSink::new(&base, config.schema.timeout()) {
            Ok(sink) => {
                spawn_startup_registration(Arc::new(sink));
            }
            Err(e) => error!(error = %e, "Schema registration skipped"),
        }
    }

    server
        .await
        .context("HTTP server task panicked")?
        .context("HTTP server error")?;

    info!("Shutdown complete");
    Ok(())
}

//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `reexpedicion_relay` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Shutdown signal wiring
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tokio_util::sync::CancellationToken;

use reexpedicion_relay::initialization::init_logger_with;
use reexpedicion_relay::{cancel_on_shutdown_signal, run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // .env in the current directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_shutdown_signal(shutdown.clone()));

    if let Err(e) = run_server(config, shutdown).await {
        eprintln!("reexpedicion_relay error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}

//! NOSTOS CLI - command-line shell for the NOSTOS fundraising API

mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use commands::Commands;
use nostos_client::{FileSessionStore, NostosClient, Session};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, debug, error};

#[derive(Parser)]
#[command(name = "nostos")]
#[command(about = "Command-line client for the NOSTOS alumni fundraising API")]
#[command(version)]
struct Cli {
    /// Set logging level
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Configuration file (TOML)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Session file (defaults to NOSTOS_STATE_DIR/session.json)
    #[arg(short = 's', long, global = true)]
    session_file: Option<PathBuf>,

    /// API base URL, overrides the configuration
    #[arg(short = 'u', long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.into())?;

    let client_config = config::load_client_config(cli.config.as_deref(), cli.api_url)?;
    let session_path = config::session_file(cli.session_file);
    debug!(
        base_url = %client_config.base_url,
        session = %session_path.display(),
        "Starting NOSTOS CLI"
    );

    let client = NostosClient::builder()
        .config(client_config)
        .session(Session::new(Arc::new(FileSessionStore::new(session_path))))
        .on_session_expired(|_| eprintln!("Session expired. Run `nostos login` to sign in again."))
        .build()?;

    if let Err(e) = cli.command.execute(&client).await {
        error!("Command failed: {e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

#[derive(Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

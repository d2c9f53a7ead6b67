mod api;
mod app;
mod commands;
mod config;
mod event;
mod guard;
mod net;
mod session;
mod store;
mod tasks;
mod ui;

use clap::Parser;
use color_eyre::{eyre::eyre, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "taskdeck")]
#[command(about = "A terminal client for a personal task tracker")]
#[command(version)]
struct Args {
  /// Path to config file (default: $XDG_CONFIG_HOME/taskdeck/config.yaml)
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Server URL, overriding the config file
  #[arg(short, long)]
  server: Option<String>,

  /// Keep the session and task cache in memory only
  #[arg(long)]
  ephemeral: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  color_eyre::install()?;

  let args = Args::parse();

  // Load configuration
  let config = config::Config::load(args.config.as_deref())?;

  // Override server URL if specified on command line
  let config = if let Some(url) = args.server {
    config::Config {
      server: config::ServerConfig {
        url,
        ..config.server
      },
      ..config
    }
  } else {
    config
  };

  // Logs go to a file; the terminal belongs to the UI
  let _log_guard = init_logging()?;

  // Initialize and run the app
  let mut app = app::App::new(config, args.ephemeral)?;
  app.run().await?;

  Ok(())
}

fn init_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
  let log_dir = dirs::data_dir()
    .or_else(|| dirs::home_dir().map(|p| p.join(".local/share")))
    .ok_or_else(|| eyre!("Could not determine data directory"))?
    .join("taskdeck");

  std::fs::create_dir_all(&log_dir).map_err(|e| eyre!("Failed to create log directory: {}", e))?;

  let appender = tracing_appender::rolling::never(log_dir, "taskdeck.log");
  let (writer, guard) = tracing_appender::non_blocking(appender);

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskdeck=info")))
    .with_writer(writer)
    .with_ansi(false)
    .init();

  Ok(guard)
}

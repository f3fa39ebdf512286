use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod commands;

use crate::commands::Command;
use restyle_core::SettingsManager;

#[derive(Parser, Debug)]
#[command(name = "restyle")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert text into named writing styles")]
struct Args {
    /// Load settings from a specific file instead of ~/.restyle/settings.toml
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    setup_tracing()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    let args = Args::parse();

    let manager = match args.settings {
        Some(path) => SettingsManager::from_path(path)?,
        None => SettingsManager::new()?,
    };

    info!(settings = ?manager.path(), "CLI startup");

    commands::run(args.command, &manager.settings()).await
}

fn setup_tracing() -> Result<()> {
    use std::fs;
    use tracing_subscriber::fmt;

    // Trace to a file so stdout stays clean for streamed conversion output
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    let trace_dir = PathBuf::from(home).join(".restyle").join("trace");
    fs::create_dir_all(&trace_dir)?;

    let log_file = trace_dir.join("restyle.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true),
        )
        .with(EnvFilter::new("info"))
        .init();

    Ok(())
}

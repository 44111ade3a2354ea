use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pillpager_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "pillpager")]
#[command(author, version, about = "An animated pill page indicator in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of ~/.config/pillpager/config.toml
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive demo
    Run {
        /// Number of pages (overrides ui.pages)
        #[arg(short = 'p', long)]
        pages: Option<usize>,
        /// Advance pages automatically
        #[arg(short = 'a', long)]
        autoplay: bool,
        /// Autoplay period in milliseconds
        #[arg(long, default_value_t = 2000)]
        interval_ms: u64,
    },
    /// Print the resolved configuration
    Config,
    /// Write a default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short = 'f', long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);

    let command = cli.command.unwrap_or(Commands::Run {
        pages: None,
        autoplay: false,
        interval_ms: 2000,
    });

    match command {
        Commands::Run { pages, autoplay, interval_ms } => {
            let config = load_config(&config_path)?;
            init_logging(&config, Some(&config.log_path()))?;
            let options = commands::run::RunOptions {
                pages,
                autoplay,
                autoplay_interval: Duration::from_millis(interval_ms.max(1)),
            };
            commands::run::run(config, options).await
        }
        Commands::Config => {
            let config = load_config(&config_path)?;
            init_logging(&config, None)?;
            commands::config::show(&config, &config_path)
        }
        Commands::InitConfig { force } => {
            // Writing a fresh config must work even when the current one is broken
            init_logging(&AppConfig::default(), None)?;
            commands::config::init(&config_path, force)
        }
    }
}

fn load_config(path: &Path) -> Result<Arc<AppConfig>> {
    let config = AppConfig::load_from(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    Ok(Arc::new(config))
}

/// Initialize logging; the TUI logs to a file so the screen stays clean
fn init_logging(config: &AppConfig, log_file: Option<&Path>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }

    Ok(())
}

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use termfolio::config::Config;
use termfolio::site::SectionId;
use termfolio::ui::runtime;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "termfolio", about = "A single-page portfolio site for the terminal")]
struct Cli {
    /// Path to the config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the log file (defaults to the platform state directory).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Open the page scrolled to a section anchor
    /// (home, about, services, work, contact).
    #[arg(long, value_name = "ANCHOR")]
    start: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    tracing::info!(path = %Config::config_path().display(), "configuration loaded");

    let start = cli
        .start
        .as_deref()
        .map(|anchor| {
            SectionId::from_anchor(anchor).ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown anchor '{anchor}' (expected one of: home, about, services, work, contact)"
                )
            })
        })
        .transpose()?;

    runtime::run(config, start).context("ui runtime failed")?;
    Ok(())
}

/// The terminal belongs to the UI, so logs go to a file.
fn init_logging(log_file: Option<PathBuf>) -> anyhow::Result<()> {
    let path = match log_file {
        Some(path) => path,
        None => {
            let dir = dirs::state_dir()
                .or_else(dirs::cache_dir)
                .unwrap_or_else(|| PathBuf::from("."))
                .join("termfolio");
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory '{}'", dir.display()))?;
            dir.join("termfolio.log")
        }
    };

    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file '{}'", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use envcheck::utils::config;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt;

const REQUIRED_KEYS_VAR: &str = "REQUIRED_KEYS";

/// Load a .env file and check that required environment variables are set
#[derive(Debug, Parser)]
#[command(name = "envcheck", version, about)]
struct Cli {
    /// Env file to load instead of the one bundled with envcheck
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    #[arg(long, env = "LOG_LEVEL", default_value_t = Level::INFO)]
    log_level: Level,

    /// Keys that must be set. Read from REQUIRED_KEYS (comma separated) when omitted
    keys: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_level)?;

    match &cli.env_file {
        Some(path) => {
            if !config::load_env_from(path) {
                tracing::warn!("{} was not fully loaded", path.display());
            }
        }
        None => config::load_env(),
    }

    let keys = get_required_keys(cli.keys);

    if keys.is_empty() {
        tracing::warn!("No required keys given, nothing to check");
        return Ok(());
    }

    config::require_keys(&keys).context("Environment check failed")?;

    tracing::info!("All {} required keys are set", keys.len());

    Ok(())
}

fn init_tracing(level: Level) -> Result<()> {
    let timer = time::format_description::parse("[hour]:[minute]:[second]")?;
    let time_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = fmt::time::OffsetTime::new(time_offset, timer);

    tracing_subscriber::fmt()
        .with_timer(timer)
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn get_required_keys(keys: Vec<String>) -> Vec<String> {
    if !keys.is_empty() {
        return keys;
    }

    // Read after loading so the env file can list its own required keys
    let Some(keys) = config::get_optional(REQUIRED_KEYS_VAR) else {
        return Vec::new();
    };

    keys.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

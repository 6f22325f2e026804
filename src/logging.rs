/// Tracing subscriber setup.
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `pixelhead=debug`.
pub const LOG_ENV: &str = "PIXELHEAD_LOG";

const DEFAULT_FILTER: &str = "warn";

/// `<data dir>/pixelhead`, created on demand.
pub fn data_dir() -> Option<PathBuf> {
    let dir = dirs::data_local_dir()?.join("pixelhead");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to stderr. Used by the one-shot commands.
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Log to `pixelhead.log` while the terminal preview owns the screen.
/// Logging is disabled when there is no data directory to write to.
pub fn init_file() -> Result<()> {
    let Some(dir) = data_dir() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("pixelhead.log"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

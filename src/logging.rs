use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

use color_eyre::eyre::{Result, eyre};
use tracing::Level;

use crate::config::LoggingConfig;

pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("perftrack").join("perftrack.log"))
}

pub fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Installs a file-backed subscriber. The terminal belongs to the UI, so
/// nothing is ever logged to stdout or stderr. Returns the log path.
pub fn init_tracing(config: &LoggingConfig, override_path: Option<&Path>) -> Result<PathBuf> {
    let path = override_path
        .map(Path::to_path_buf)
        .or_else(|| config.file.clone())
        .or_else(default_log_path)
        .ok_or_else(|| eyre!("no writable location for the log file"))?;

    ensure_parent_dir(&path)?;
    let file: File = OpenOptions::new().create(true).append(true).open(&path)?;
    let level = parse_level(&config.level);

    let builder = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(level)
        .with_writer(Mutex::new(file));

    let result = if config.format.eq_ignore_ascii_case("json") {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;
    Ok(path)
}

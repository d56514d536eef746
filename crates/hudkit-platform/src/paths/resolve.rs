use std::path::PathBuf;

use hudkit_common::PlatformError;

const APP_NAME: &str = "hudkit";

/// Platform configuration directory for hudkit.
///
/// - Linux: `$XDG_CONFIG_HOME/hudkit` (defaults to `~/.config/hudkit`)
/// - macOS: `~/Library/Application Support/hudkit`
/// - Windows: `%APPDATA%\hudkit`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Platform data directory for hudkit.
///
/// - Linux: `$XDG_DATA_HOME/hudkit` (defaults to `~/.local/share/hudkit`)
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}

use std::path::Path;

use hudkit_common::ConfigError;
use tracing::info;

use crate::schema::HudkitConfig;

use super::paths::{create_default_config, default_config_path};

/// Load config from a TOML file. Missing fields take their defaults.
pub fn load_from_path(path: &Path) -> Result<HudkitConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: HudkitConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse {}: {e}", path.display())))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path, writing a commented default
/// file there first if none exists.
///
/// Linux: `~/.config/hudkit/config.toml`
pub fn load_default() -> Result<HudkitConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(HudkitConfig::default());
    }

    load_from_path(&path)
}

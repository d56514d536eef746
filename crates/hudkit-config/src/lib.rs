//! hudkit configuration.
//!
//! TOML-based configuration with per-section defaults, range validation,
//! and the `--webkit-settings` command-line overrides for the `[webview]`
//! section. Partial config files work: every missing field keeps its
//! default.

pub mod schema;
pub mod settings;
pub mod toml_loader;
pub mod validation;

pub use schema::{HudkitConfig, LogLevel};
pub use settings::{SettingOverride, SettingValue, SettingsRequest};

use std::path::Path;

use hudkit_common::ConfigError;

/// Load and validate the config.
///
/// With `path` set, that file must exist and parse. Without it, the
/// platform default is used and created on first run.
pub fn load_config(path: Option<&Path>) -> Result<HudkitConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Apply `--webkit-settings` overrides and re-validate the result.
pub fn apply_settings(
    config: &mut HudkitConfig,
    overrides: &[SettingOverride],
) -> Result<(), ConfigError> {
    settings::apply_overrides(&mut config.webview, overrides);
    validation::validate(config)
}

/// Serialize a config to pretty-printed JSON (used in debug logs).
pub fn config_to_json(config: &HudkitConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_path_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(p) if p == path));
    }

    #[test]
    fn explicit_path_with_out_of_range_value_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[process]\nread_chunk_bytes = 3\n").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn explicit_path_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\ntitle = \"hud\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.window.title, "hud");
    }

    #[test]
    fn empty_user_agent_override_fails_validation() {
        let mut config = HudkitConfig::default();
        let overrides = match settings::parse_settings("user-agent=").unwrap() {
            SettingsRequest::Apply(overrides) => overrides,
            SettingsRequest::Help => panic!("expected overrides"),
        };

        let err = apply_settings(&mut config, &overrides).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn valid_overrides_are_applied() {
        let mut config = HudkitConfig::default();
        let overrides = [SettingOverride {
            key: "user-agent",
            value: SettingValue::Str("hud/3".into()),
        }];

        apply_settings(&mut config, &overrides).unwrap();
        assert_eq!(config.webview.user_agent.as_deref(), Some("hud/3"));
    }

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&HudkitConfig::default());
        for section in ["window", "webview", "inspector", "process", "logging"] {
            assert!(json.contains(&format!("\"{section}\"")), "missing {section}");
        }
    }
}

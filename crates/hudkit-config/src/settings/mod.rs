//! `--webkit-settings key=value,...` overrides for the `[webview]` section.
//!
//! Boolean settings accept `key`, `key=TRUE` and `key=FALSE`. String
//! settings require `key=value`. The special key `help` asks for the table
//! of known settings.

mod table;

#[cfg(test)]
mod tests;

use hudkit_common::ConfigError;

use crate::schema::WebViewSection;

pub use table::{help_text, SettingKind, SettingSpec, SETTINGS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Bool(bool),
    Str(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingOverride {
    pub key: &'static str,
    pub value: SettingValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsRequest {
    /// Print the settings table and exit.
    Help,
    Apply(Vec<SettingOverride>),
}

/// Parse one `--webkit-settings` argument.
///
/// Entries are handled left to right; the first bad entry is an error, and
/// `help` short-circuits everything after it.
pub fn parse_settings(arg: &str) -> Result<SettingsRequest, ConfigError> {
    let mut overrides = Vec::new();

    for entry in arg.split(',').filter(|e| !e.is_empty()) {
        let (key, value) = match entry.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (entry, None),
        };

        if key == "help" {
            return Ok(SettingsRequest::Help);
        }

        let spec = SETTINGS
            .iter()
            .find(|spec| spec.name == key)
            .ok_or_else(|| ConfigError::UnknownSetting(key.to_string()))?;

        let value = match spec.kind {
            SettingKind::Bool => match value {
                None | Some("TRUE") => SettingValue::Bool(true),
                Some("FALSE") => SettingValue::Bool(false),
                Some(other) => {
                    return Err(ConfigError::InvalidSettingValue {
                        key: key.to_string(),
                        value: other.to_string(),
                        expected: "expected TRUE or FALSE",
                    })
                }
            },
            SettingKind::String => match value {
                Some(v) => SettingValue::Str(v.to_string()),
                None => {
                    return Err(ConfigError::InvalidSettingValue {
                        key: key.to_string(),
                        value: String::new(),
                        expected: "expected key=<string>",
                    })
                }
            },
        };

        overrides.push(SettingOverride {
            key: spec.name,
            value,
        });
    }

    Ok(SettingsRequest::Apply(overrides))
}

/// Apply parsed overrides in order; later entries win.
pub fn apply_overrides(webview: &mut WebViewSection, overrides: &[SettingOverride]) {
    for o in overrides {
        match (o.key, &o.value) {
            ("enable-developer-extras", SettingValue::Bool(v)) => webview.devtools = *v,
            ("media-playback-requires-user-gesture", SettingValue::Bool(v)) => {
                webview.autoplay = !*v
            }
            ("javascript-can-access-clipboard", SettingValue::Bool(v)) => webview.clipboard = *v,
            ("enable-private-browsing", SettingValue::Bool(v)) => webview.incognito = *v,
            ("zoom-hotkeys", SettingValue::Bool(v)) => webview.zoom_hotkeys = *v,
            ("draw-transparent-background", SettingValue::Bool(v)) => webview.transparent = *v,
            ("user-agent", SettingValue::Str(v)) => webview.user_agent = Some(v.clone()),
            (key, value) => tracing::warn!(key, ?value, "ignoring mistyped setting override"),
        }
    }
}

//! Process exit statuses.

use hudkit_common::ConfigError;

pub const SUCCESS: u8 = 0;
/// Bad command line.
pub const USAGE: u8 = 1;
pub const NO_URL: u8 = 2;
/// Unknown `--webkit-settings` key, bad value, or an override that fails
/// validation.
pub const BAD_SETTING: u8 = 3;
/// Config file missing, unparsable or invalid (EX_CONFIG).
pub const CONFIG: u8 = 78;
/// The screen cannot draw transparent windows (EX_UNAVAILABLE).
pub const NOT_COMPOSITED: u8 = 69;
/// Window, webview or runtime could not be created (EX_SOFTWARE).
pub const INTERNAL: u8 = 70;

/// Status for a configuration failure.
pub fn for_config_error(err: &ConfigError) -> u8 {
    match err {
        ConfigError::UnknownSetting(_) | ConfigError::InvalidSettingValue { .. } => BAD_SETTING,
        ConfigError::FileNotFound(_)
        | ConfigError::ParseError(_)
        | ConfigError::ValidationError(_) => CONFIG,
    }
}

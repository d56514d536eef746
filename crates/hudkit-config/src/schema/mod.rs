//! Configuration schema.
//!
//! Every struct uses `serde(default)` so partial configs work.

mod process;
mod system;
mod webview;
mod window;

pub use process::*;
pub use system::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudkitConfig {
    pub window: WindowConfig,
    pub webview: WebViewSection,
    pub inspector: InspectorConfig,
    pub process: ProcessConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: HudkitConfig = toml::from_str("").unwrap();
        assert_eq!(config, HudkitConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_fields() {
        let config: HudkitConfig = toml::from_str(
            r#"
[webview]
clipboard = true

[process]
forward_stderr = false
"#,
        )
        .unwrap();
        assert!(config.webview.clipboard);
        assert!(config.webview.transparent);
        assert!(!config.process.forward_stderr);
        assert_eq!(config.process.read_chunk_bytes, DEFAULT_READ_CHUNK_BYTES);
    }

    #[test]
    fn defaults_match_overlay_behavior() {
        let config = HudkitConfig::default();
        assert!(config.window.always_on_top);
        assert!(config.window.override_redirect);
        assert!(config.webview.transparent);
        assert!(config.webview.devtools);
        assert!(config.webview.autoplay);
        assert!(!config.webview.clipboard);
        assert!(!config.inspector.open_on_start);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn log_level_is_lowercase_in_toml() {
        let config: HudkitConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.directive(), "hudkit=debug");
    }
}

use serde::{Deserialize, Serialize};

/// Web engine settings. `--webkit-settings` overrides are applied on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSection {
    pub transparent: bool,
    /// Allow the developer inspector.
    pub devtools: bool,
    pub user_agent: Option<String>,
    /// Media may start without a user gesture.
    pub autoplay: bool,
    /// Page scripts may read and write the clipboard.
    pub clipboard: bool,
    /// Ephemeral storage: nothing persists between runs.
    pub incognito: bool,
    /// Ctrl +/- zooms the page.
    pub zoom_hotkeys: bool,
}

impl Default for WebViewSection {
    fn default() -> Self {
        Self {
            transparent: true,
            devtools: true,
            user_agent: None,
            autoplay: true,
            clipboard: false,
            incognito: false,
            zoom_hotkeys: false,
        }
    }
}

/// Developer inspector startup behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// Same as `--inspect`.
    pub open_on_start: bool,
    /// Dock the inspector into the overlay instead of its own window.
    pub attached: bool,
}

use serde::{Deserialize, Serialize};

/// Overlay window behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title shown by task switchers that list override-redirect windows.
    pub title: String,
    pub always_on_top: bool,
    /// X11 only: bypass the window manager entirely, so the overlay is not
    /// decorated, tiled or listed.
    pub override_redirect: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "hudkit".into(),
            always_on_top: true,
            override_redirect: true,
        }
    }
}

use std::fmt::Write as _;

use crate::schema::WebViewSection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Bool,
    String,
}

#[derive(Debug, Clone, Copy)]
pub struct SettingSpec {
    pub name: &'static str,
    pub kind: SettingKind,
}

/// Every setting `--webkit-settings` understands.
pub const SETTINGS: &[SettingSpec] = &[
    SettingSpec {
        name: "draw-transparent-background",
        kind: SettingKind::Bool,
    },
    SettingSpec {
        name: "enable-developer-extras",
        kind: SettingKind::Bool,
    },
    SettingSpec {
        name: "enable-private-browsing",
        kind: SettingKind::Bool,
    },
    SettingSpec {
        name: "javascript-can-access-clipboard",
        kind: SettingKind::Bool,
    },
    SettingSpec {
        name: "media-playback-requires-user-gesture",
        kind: SettingKind::Bool,
    },
    SettingSpec {
        name: "user-agent",
        kind: SettingKind::String,
    },
    SettingSpec {
        name: "zoom-hotkeys",
        kind: SettingKind::Bool,
    },
];

fn current_bool(webview: &WebViewSection, name: &str) -> bool {
    match name {
        "draw-transparent-background" => webview.transparent,
        "enable-developer-extras" => webview.devtools,
        "enable-private-browsing" => webview.incognito,
        "javascript-can-access-clipboard" => webview.clipboard,
        "media-playback-requires-user-gesture" => !webview.autoplay,
        "zoom-hotkeys" => webview.zoom_hotkeys,
        _ => false,
    }
}

/// Table of settings with the values currently in effect.
pub fn help_text(webview: &WebViewSection) -> String {
    let mut out = String::from("Available values for --webkit-settings (current in parentheses):\n");
    for spec in SETTINGS {
        let _ = match spec.kind {
            SettingKind::Bool => {
                let v = if current_bool(webview, spec.name) {
                    "TRUE"
                } else {
                    "FALSE"
                };
                writeln!(out, " • {} ({v})", spec.name)
            }
            SettingKind::String => writeln!(
                out,
                " • {}=<string> ('{}')",
                spec.name,
                webview.user_agent.as_deref().unwrap_or("")
            ),
        };
    }
    out
}

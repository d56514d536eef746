/// Configuration for creating the overlay WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Page to load.
    pub url: String,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether the developer inspector may be opened.
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether page scripts may use the clipboard.
    pub clipboard: bool,
    /// Whether media may start without a user gesture.
    pub autoplay: bool,
    /// Non-persistent storage.
    pub incognito: bool,
    /// Ctrl +/- zooms the page.
    pub zoom_hotkeys: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: "about:blank".to_string(),
            transparent: true,
            devtools: true,
            user_agent: None,
            clipboard: false,
            autoplay: true,
            incognito: false,
            zoom_hotkeys: false,
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

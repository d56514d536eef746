use hudkit_common::BridgeError;
use wry::WebView;

use crate::bridge::ScriptSink;

/// Handle to the overlay WebView.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    /// Current URL (best-effort tracking).
    pub(super) current_url: String,
    pub(super) devtools: bool,
}

impl WebViewHandle {
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Record the URL reported by a page load.
    pub fn set_current_url(&mut self, url: String) {
        self.current_url = url;
    }

    /// Execute JavaScript in the page.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Set the WebView bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn devtools_enabled(&self) -> bool {
        self.devtools
    }

    /// Open devtools in the engine's default placement.
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }

    /// Get a reference to the underlying wry WebView.
    pub fn inner(&self) -> &WebView {
        &self.webview
    }
}

impl ScriptSink for WebViewHandle {
    fn evaluate(&self, script: &str) -> Result<(), BridgeError> {
        self.webview
            .evaluate_script(script)
            .map_err(|e| BridgeError::ScriptEvaluation(e.to_string()))
    }
}

impl WebViewHandle {
    /// Replace the page with the load-failure page for `uri`.
    pub fn show_error_page(&self, uri: &str, message: &str) -> Result<(), wry::Error> {
        let html = crate::error_page::error_page_html(message, uri);
        #[cfg(target_os = "linux")]
        {
            use webkit2gtk::WebViewExt;
            use wry::WebViewExtUnix;
            self.webview
                .webview()
                .load_alternate_html(&html, uri, None);
            Ok(())
        }
        #[cfg(not(target_os = "linux"))]
        {
            self.webview.load_html(&html)
        }
    }
}

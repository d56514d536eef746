use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::ipc::BOOTSTRAP_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create the overlay WebView as a child of `window`, covering `bounds`.
    ///
    /// The bridge bootstrap is installed as an initialization script, so it
    /// runs before any page script on every load.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_incognito(config.incognito)
            .with_hotkeys_zoom(config.zoom_hotkeys)
            .with_focused(false);

        if config.transparent {
            builder = builder.with_background_color((0, 0, 0, 0));
        }

        builder = builder.with_initialization_script(BOOTSTRAP_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events));

        builder = builder.with_url(&config.url);

        let webview = builder.build_as_child(window)?;

        debug!(url = %config.url, "WebView created");

        Ok(WebViewHandle {
            webview,
            current_url: config.url,
            devtools: config.devtools,
        })
    }
}

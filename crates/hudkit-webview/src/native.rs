//! Engine signals wry does not surface: load failures and `window.close()`.
//!
//! Only the Linux engine exposes them. Elsewhere nothing is installed and
//! the engine's own behavior applies.

use crate::manager::{EventSink, WebViewHandle};

#[cfg(target_os = "linux")]
pub fn install_page_hooks(handle: &WebViewHandle, events: EventSink) {
    use webkit2gtk::WebViewExt;
    use wry::WebViewExtUnix;

    use crate::events::WebViewEvent;
    use crate::manager::WebViewManager;

    let view = handle.inner().webview();

    let sink = events.clone();
    view.connect_load_failed(move |_, _, uri, error| {
        tracing::warn!(uri, error = %error, "page load failed");
        WebViewManager::push(
            &sink,
            WebViewEvent::LoadFailed {
                uri: uri.to_string(),
                message: error.to_string(),
            },
        );
        false
    });

    view.connect_close(move |_| {
        tracing::info!("page called window.close()");
        WebViewManager::push(&events, WebViewEvent::Closed);
    });
}

#[cfg(not(target_os = "linux"))]
pub fn install_page_hooks(_handle: &WebViewHandle, _events: EventSink) {}

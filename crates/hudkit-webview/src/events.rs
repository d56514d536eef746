//! WebView event types.

use hudkit_common::Rect;
use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Inspector docking changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectorEvent {
    /// The inspector docked into the overlay window.
    Attached,
    /// The docked inspector got a new on-screen rectangle.
    Allocated(Rect),
    /// The inspector left the overlay window.
    Detached,
}

/// Events emitted by the overlay's WebView.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad { state: PageLoadState, url: String },
    /// A bridge message was posted by the guest.
    IpcMessage { body: String },
    /// The engine could not fetch the page at all (Linux only).
    LoadFailed { uri: String, message: String },
    Inspector(InspectorEvent),
    /// The page called `window.close()` (Linux only).
    Closed,
}

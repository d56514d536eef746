//! Creation and event plumbing for the overlay's WebView.

use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;

mod bounds;
mod handle;
mod handlers;
mod lifecycle;
mod types;

pub use bounds::rect_to_wry;
pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Shared event queue. Engine callbacks run on the UI thread but must be
/// `'static`, so they push here and the event loop drains.
pub type EventSink = Arc<Mutex<Vec<WebViewEvent>>>;

pub struct WebViewManager {
    pub(crate) events: EventSink,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    /// Clone of the queue, for hooks installed outside this crate's builder.
    pub fn event_sink(&self) -> EventSink {
        Arc::clone(&self.events)
    }

    pub(crate) fn push(events: &EventSink, event: WebViewEvent) {
        if let Ok(mut evts) = events.lock() {
            evts.push(event);
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

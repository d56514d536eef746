//! Developer inspector: opening it and tracking where it docks.
//!
//! On Linux the WebKit inspector can dock inside the overlay. While docked
//! its widget allocation is reported as `InspectorEvent::Allocated` so the
//! host can keep that rectangle clickable; detaching reports
//! `InspectorEvent::Detached`. Other engines only open detached devtools.

use tracing::{debug, warn};

use crate::manager::{EventSink, WebViewHandle};

pub struct Inspector {
    #[cfg(target_os = "linux")]
    native: Option<webkit2gtk::WebInspector>,
    hint_pending: bool,
}

impl Inspector {
    pub fn new() -> Self {
        Self {
            #[cfg(target_os = "linux")]
            native: None,
            hint_pending: true,
        }
    }

    /// Start reporting attach, allocation and detach events into `events`.
    pub fn install(&mut self, handle: &WebViewHandle, events: EventSink) {
        #[cfg(target_os = "linux")]
        {
            self.native = linux::install(handle, events);
            if self.native.is_none() {
                warn!("engine has no inspector, docking will not be tracked");
            }
        }
        #[cfg(not(target_os = "linux"))]
        {
            let _ = (handle, events);
            debug!("inspector docking is not tracked on this platform");
        }
    }

    /// Open the inspector, docked into the overlay or in its own window.
    pub fn show(&self, handle: &WebViewHandle, attached: bool) {
        if !handle.devtools_enabled() {
            warn!("inspector requested but developer extras are disabled");
            return;
        }
        debug!(attached, "showing inspector");

        #[cfg(target_os = "linux")]
        {
            if let Some(inspector) = &self.native {
                use webkit2gtk::WebInspectorExt;
                // Showing twice opens it undocked.
                inspector.show();
                if !attached {
                    inspector.show();
                }
                return;
            }
        }

        handle.open_devtools();
    }

    /// True exactly once: the first time the inspector docks.
    pub fn take_attach_hint(&mut self) -> bool {
        std::mem::replace(&mut self.hint_pending, false)
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "linux")]
mod linux {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gtk::glib::SignalHandlerId;
    use gtk::prelude::*;
    use webkit2gtk::{WebInspector, WebInspectorExt, WebViewBase, WebViewExt};
    use wry::WebViewExtUnix;

    use hudkit_common::Rect;

    use crate::events::{InspectorEvent, WebViewEvent};
    use crate::manager::{EventSink, WebViewHandle, WebViewManager};

    /// The docked inspector widget and its size-allocate connection.
    type Tracking = Rc<RefCell<Option<(WebViewBase, SignalHandlerId)>>>;

    pub(super) fn install(handle: &WebViewHandle, events: EventSink) -> Option<WebInspector> {
        let inspector = handle.inner().webview().inspector()?;
        let tracking: Tracking = Rc::default();

        let attach_events = events.clone();
        let attach_tracking = Rc::clone(&tracking);
        inspector.connect_attach(move |inspector| {
            if let Some(view) = inspector.web_view() {
                let alloc_events = attach_events.clone();
                let id = view.connect_size_allocate(move |_, alloc| {
                    let rect = Rect::new(alloc.x(), alloc.y(), alloc.width(), alloc.height());
                    WebViewManager::push(
                        &alloc_events,
                        WebViewEvent::Inspector(InspectorEvent::Allocated(rect)),
                    );
                });
                if let Some((old_view, old_id)) = attach_tracking.borrow_mut().replace((view, id)) {
                    old_view.disconnect(old_id);
                }
            }
            WebViewManager::push(&attach_events, WebViewEvent::Inspector(InspectorEvent::Attached));
            false
        });

        inspector.connect_detach(move |_| {
            if let Some((view, id)) = tracking.borrow_mut().take() {
                view.disconnect(id);
            }
            WebViewManager::push(&events, WebViewEvent::Inspector(InspectorEvent::Detached));
            false
        });

        Some(inspector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_hint_fires_once() {
        let mut inspector = Inspector::new();
        assert!(inspector.take_attach_hint());
        assert!(!inspector.take_attach_hint());
        assert!(!inspector.take_attach_hint());
    }
}

//! Host capabilities exposed to the guest page.
//!
//! Every handler runs on the UI thread against `BridgeContext`. Anything
//! that needs the window or the WebView (opening the inspector) is queued on
//! the context and carried out by the idle hook.

mod geometry_handlers;
mod inspector_handlers;
mod process_events;
mod process_handlers;

use hudkit_common::{CallbackId, Generation, MonitorInfo};
use hudkit_process::ProcessSupervisor;
use hudkit_region::GeometryRegistry;
use hudkit_webview::{payload, BridgeDispatcher};
use serde_json::Value;

pub(super) use process_events::deliver_process_update;

/// State the bridge handlers read and mutate.
pub(crate) struct BridgeContext {
    pub(crate) geometry: GeometryRegistry,
    pub(crate) supervisor: ProcessSupervisor,
    /// Page generation that guest spawn ids belong to.
    pub(crate) generation: Generation,
    /// Latest monitor layout, refreshed by the display watcher.
    pub(crate) monitors: Vec<MonitorInfo>,
    /// Inspector opens requested by the page: `true` means docked.
    pub(crate) inspector_requests: Vec<bool>,
}

impl BridgeContext {
    pub(crate) fn new(supervisor: ProcessSupervisor) -> Self {
        Self {
            geometry: GeometryRegistry::new(),
            supervisor,
            generation: Generation::default(),
            monitors: Vec::new(),
            inspector_requests: Vec::new(),
        }
    }

    /// Forget everything that belonged to the previous page.
    pub(crate) fn new_page(&mut self) {
        self.supervisor.kill_all();
        self.generation = self.generation.next();
        self.geometry.clear_user_rects();
        self.inspector_requests.clear();
    }
}

/// Dispatcher with every channel registered.
pub(crate) fn dispatcher() -> BridgeDispatcher<BridgeContext> {
    let mut d = BridgeDispatcher::new();
    d.register_channel("getMonitorLayout", geometry_handlers::get_monitor_layout);
    d.register_channel("setClickableAreas", geometry_handlers::set_clickable_areas);
    d.register_channel("showInspector", inspector_handlers::show_inspector);
    d.register_channel("spawn", process_handlers::spawn);
    d.register_channel("kill", process_handlers::kill);
    d
}

/// Callback id of an object payload's `id` field.
fn callback_id(payload: &Value) -> CallbackId {
    CallbackId(payload::int_field(payload, "id") as u32)
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn registers_every_channel() {
        let d = dispatcher();
        let mut channels: Vec<_> = d.channels().collect();
        channels.sort_unstable();
        assert_eq!(
            channels,
            vec![
                "getMonitorLayout",
                "kill",
                "setClickableAreas",
                "showInspector",
                "spawn"
            ]
        );
    }

    #[tokio::test]
    async fn unknown_channel_is_refused() {
        let mut d = dispatcher();
        let mut ctx = test_support::context();
        let err = d
            .dispatch_raw(&mut ctx, r#"{"channel":"eval","payload":"1"}"#)
            .unwrap_err();
        assert!(matches!(err, hudkit_common::BridgeError::UnknownChannel(_)));
    }

    #[tokio::test]
    async fn new_page_advances_generation_and_clears_guest_state() {
        let mut ctx = test_support::context();
        ctx.geometry
            .set_user_rects(vec![hudkit_common::Rect::new(0, 0, 10, 10)]);
        ctx.inspector_requests.push(true);
        ctx.new_page();

        assert_eq!(ctx.generation, Generation(1));
        assert!(ctx.geometry.user_rects().is_empty());
        assert!(ctx.inspector_requests.is_empty());
    }

    #[test]
    fn callback_id_coerces_missing_to_zero() {
        assert_eq!(callback_id(&json!({"id": 9})), CallbackId(9));
        assert_eq!(callback_id(&json!({})), CallbackId(0));
    }
}

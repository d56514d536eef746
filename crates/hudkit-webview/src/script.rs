//! Builders for host-to-guest scripts.
//!
//! Expression arguments are placed between call parentheses verbatim, so
//! any host-derived text inside them must already have gone through
//! [`crate::escape`]. Event names are quoted here.

use hudkit_common::{CallbackId, MonitorInfo, SpawnId};

use crate::escape::quote;

/// Resolve pending callback `id` with `result_expr`, then drop the entry.
///
/// An empty `result_expr` resolves with `undefined`.
pub fn deliver_script(id: CallbackId, result_expr: &str) -> String {
    format!(
        "window.Hudkit._pendingCallbacks[{id}].resolve({result_expr})\n\
         delete window.Hudkit._pendingCallbacks[{id}]"
    )
}

/// Call every listener registered for `event_name`, in registration order.
pub fn emit_event_script(event_name: &str, data_expr: &str) -> String {
    format!(
        "(function () {{\n  \
         const listenersForEvent = window.Hudkit._listeners.get({name})\n  \
         if (listenersForEvent) {{\n    \
         listenersForEvent.slice().forEach(f => f({data_expr}))\n  \
         }}\n\
         }})()",
        name = quote(event_name),
    )
}

/// Hand one process event to the listener of `spawn_id`.
///
/// `args` follow the event name as call arguments; with none the listener
/// gets `undefined`. With `terminal` set the listener entry is deleted
/// after the call.
pub fn process_event_script(
    spawn_id: SpawnId,
    event: &str,
    args: &[&str],
    terminal: bool,
) -> String {
    let args = if args.is_empty() {
        "undefined".to_string()
    } else {
        args.join(", ")
    };
    let mut script = format!(
        "(function () {{\n  \
         const listener = window.Hudkit._processListeners[{spawn_id}]\n  \
         if (listener) listener({event}, {args})\n",
        event = quote(event),
    );
    if terminal {
        script.push_str(&format!(
            "  delete window.Hudkit._processListeners[{spawn_id}]\n"
        ));
    }
    script.push_str("})()");
    script
}

/// Array literal describing every monitor. Labels are escaped and exposed
/// as both `label` and the older `name`.
pub fn monitor_layout_expr(monitors: &[MonitorInfo]) -> String {
    let mut out = String::from("[");
    for monitor in monitors {
        let r = monitor.rect;
        let label = quote(&monitor.label);
        out.push_str(&format!(
            "{{label:{label},name:{label},x:{},y:{},width:{},height:{}}},",
            r.x,
            r.y,
            r.width,
            r.height
        ));
    }
    out.push(']');
    out
}

/// Printed once, the first time the inspector docks into the overlay.
pub const ATTACHED_INSPECTOR_HINT: &str = "console.info('Note that when the Web Inspector is \
attached to the Hudkit window, you cannot type into it, because the overlay window does not \
receive keyboard events.  To type into this console, detach the Inspector into its own window.')";

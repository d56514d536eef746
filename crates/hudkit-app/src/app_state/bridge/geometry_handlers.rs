//! `getMonitorLayout` and `setClickableAreas`.

use serde_json::Value;

use hudkit_common::{BridgeError, CallbackId};
use hudkit_webview::{payload, script, Replies};

use super::{callback_id, BridgeContext};

/// Payload is the bare callback id. An `{id}` object is accepted too.
pub(super) fn get_monitor_layout(
    ctx: &mut BridgeContext,
    replies: &mut Replies,
    payload: &Value,
) -> Result<(), BridgeError> {
    let id = match payload {
        Value::Object(_) => callback_id(payload),
        bare => CallbackId(payload::to_int32(Some(bare)) as u32),
    };
    replies.open(id)?;
    replies.deliver(id, &script::monitor_layout_expr(&ctx.monitors))
}

/// Payload is `{id, rectangles: [{x, y, width, height}, ...]}`. Replaces the
/// page's clickable areas wholesale; the docked inspector keeps its own.
pub(super) fn set_clickable_areas(
    ctx: &mut BridgeContext,
    replies: &mut Replies,
    payload: &Value,
) -> Result<(), BridgeError> {
    let id = callback_id(payload);
    replies.open(id)?;
    let rects = payload::rect_list(payload, "rectangles");
    tracing::debug!(callback_id = id.0, count = rects.len(), "setting clickable areas");
    ctx.geometry.set_user_rects(rects);
    replies.deliver(id, "")
}

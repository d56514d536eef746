//! `showInspector`.

use serde_json::Value;

use hudkit_common::BridgeError;
use hudkit_webview::{payload, Replies};

use super::{callback_id, BridgeContext};

/// Payload is `{id, shouldAttachToWindow}`. The inspector is opened by the
/// idle hook; the callback resolves right away.
pub(super) fn show_inspector(
    ctx: &mut BridgeContext,
    replies: &mut Replies,
    payload: &Value,
) -> Result<(), BridgeError> {
    let id = callback_id(payload);
    replies.open(id)?;
    let attached = payload::bool_field(payload, "shouldAttachToWindow");
    ctx.inspector_requests.push(attached);
    replies.deliver(id, "")
}

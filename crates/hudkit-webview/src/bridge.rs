//! Host side of the guest command bridge.
//!
//! Guest messages arrive as `{channel, payload}` and are routed to a handler
//! registered under that channel name. Handlers never talk to the engine
//! directly: they queue scripts on [`Replies`], and the owner flushes the
//! queue into a [`ScriptSink`] once the current batch of work is done.

use std::collections::{BTreeMap, HashSet};

use serde_json::Value;
use tracing::{debug, warn};

use hudkit_common::{BridgeError, CallbackId, SpawnId};

use crate::ipc::IpcMessage;
use crate::script;

/// Something that can run a script in the guest page.
pub trait ScriptSink {
    fn evaluate(&self, script: &str) -> Result<(), BridgeError>;
}

/// Handler for one channel. `C` is the host state the handler mutates.
pub type ChannelHandler<C> = fn(&mut C, &mut Replies, &Value) -> Result<(), BridgeError>;

// =============================================================================
// REPLIES
// =============================================================================

/// Outgoing scripts plus the host's view of which callbacks are pending.
#[derive(Debug, Default)]
pub struct Replies {
    pending: HashSet<CallbackId>,
    outbox: Vec<String>,
}

impl Replies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the guest is waiting on `id`.
    pub fn open(&mut self, id: CallbackId) -> Result<(), BridgeError> {
        if !self.pending.insert(id) {
            return Err(BridgeError::DuplicateCallback(id.0));
        }
        Ok(())
    }

    /// Resolve `id` with `result_expr` (already escaped). Each id resolves
    /// once; later attempts fail and queue nothing.
    pub fn deliver(&mut self, id: CallbackId, result_expr: &str) -> Result<(), BridgeError> {
        if !self.pending.remove(&id) {
            return Err(BridgeError::UnknownCallback(id.0));
        }
        debug!(callback_id = id.0, "delivering callback");
        self.outbox.push(script::deliver_script(id, result_expr));
        Ok(())
    }

    /// Notify every listener of `event_name`. Listeners stay registered.
    pub fn emit_event(&mut self, event_name: &str, data_expr: &str) {
        debug!(event = event_name, "emitting guest event");
        self.outbox
            .push(script::emit_event_script(event_name, data_expr));
    }

    /// Pass a process event and its argument expressions to the listener
    /// of `spawn_id`. A `terminal` event also removes that listener.
    pub fn emit_process_event(
        &mut self,
        spawn_id: SpawnId,
        event: &str,
        args: &[&str],
        terminal: bool,
    ) {
        self.outbox
            .push(script::process_event_script(spawn_id, event, args, terminal));
    }

    /// Queue a host-authored script as-is.
    pub fn push_script(&mut self, script: impl Into<String>) {
        self.outbox.push(script.into());
    }

    pub fn take_scripts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.outbox)
    }

    pub fn is_pending(&self, id: CallbackId) -> bool {
        self.pending.contains(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Forget everything. Used when the page is replaced.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.outbox.clear();
    }
}

// =============================================================================
// DISPATCHER
// =============================================================================

pub struct BridgeDispatcher<C> {
    channels: BTreeMap<&'static str, ChannelHandler<C>>,
    replies: Replies,
}

impl<C> BridgeDispatcher<C> {
    pub fn new() -> Self {
        Self {
            channels: BTreeMap::new(),
            replies: Replies::new(),
        }
    }

    /// Expose `handler` under `name`. Returns the handler it replaced.
    pub fn register_channel(
        &mut self,
        name: &'static str,
        handler: ChannelHandler<C>,
    ) -> Option<ChannelHandler<C>> {
        self.channels.insert(name, handler)
    }

    pub fn channels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.channels.keys().copied()
    }

    /// Route one decoded message.
    pub fn dispatch(
        &mut self,
        ctx: &mut C,
        channel: &str,
        payload: &Value,
    ) -> Result<(), BridgeError> {
        let handler = self
            .channels
            .get(channel)
            .ok_or_else(|| BridgeError::UnknownChannel(channel.to_string()))?;
        debug!(channel, "dispatching guest message");
        handler(ctx, &mut self.replies, payload)
    }

    /// Decode a raw `postMessage` body and route it.
    pub fn dispatch_raw(&mut self, ctx: &mut C, body: &str) -> Result<(), BridgeError> {
        let msg = IpcMessage::from_json(body)?;
        self.dispatch(ctx, &msg.channel, &msg.payload)
    }

    pub fn replies(&self) -> &Replies {
        &self.replies
    }

    pub fn replies_mut(&mut self) -> &mut Replies {
        &mut self.replies
    }

    /// Run every queued script, in order. Failures are logged and skipped.
    /// Returns how many scripts ran.
    pub fn flush(&mut self, sink: &dyn ScriptSink) -> usize {
        let scripts = self.replies.take_scripts();
        let mut ran = 0;
        for script in &scripts {
            match sink.evaluate(script) {
                Ok(()) => ran += 1,
                Err(e) => warn!(error = %e, "guest script failed"),
            }
        }
        ran
    }

    /// Drop state that belonged to the previous page.
    pub fn new_page(&mut self) {
        if self.replies.pending_count() > 0 {
            debug!(
                pending = self.replies.pending_count(),
                "discarding callbacks of previous page"
            );
        }
        self.replies.reset();
    }
}

impl<C> Default for BridgeDispatcher<C> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

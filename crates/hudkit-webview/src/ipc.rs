//! Wire protocol between the guest page and the host.
//!
//! Messages flow in both directions:
//! - **Guest -> host**: the bootstrap calls
//!   `window.ipc.postMessage(JSON.stringify({channel, payload}))`, which
//!   triggers the `ipc_handler` registered on the WebView.
//! - **Host -> guest**: the host evaluates generated scripts (see
//!   [`crate::script`]) against the tables the bootstrap installs.

use hudkit_common::BridgeError;
use serde::{Deserialize, Serialize};

/// One guest message as posted by the bootstrap script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    /// Channel name, e.g. `setClickableAreas`.
    pub channel: String,
    /// Channel-specific payload. Missing payloads decode as `null`.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse a raw `postMessage` body.
    pub fn from_json(raw: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(raw).map_err(|e| BridgeError::MalformedMessage(e.to_string()))
    }
}

/// Defines `window.Hudkit` before any page script runs.
///
/// Callback-returning calls park a `{resolve, reject}` pair in
/// `_pendingCallbacks` under a fresh id and send that id to the host, which
/// later resolves and deletes it. `spawn` returns its id synchronously and
/// routes process events to the caller's listener through
/// `_processListeners`; `exit` arrives as `(code, signal)`. Output chunks
/// arrive as binary strings (one code unit per byte) and are decoded here
/// with one streaming `TextDecoder` per stream, so multi-byte characters
/// split across chunks survive.
pub const BOOTSTRAP_SCRIPT: &str = r#"
(function () {
  if (window.Hudkit) return;

  let nextCallbackId = 0;
  let nextSpawnId = 0;

  const post = (channel, payload) =>
    window.ipc.postMessage(JSON.stringify({ channel, payload }));

  const call = (channel, makePayload) =>
    new Promise((resolve, reject) => {
      const id = nextCallbackId++;
      window.Hudkit._pendingCallbacks[id] = { resolve, reject };
      post(channel, makePayload(id));
    });

  const toBytes = (binary) => Uint8Array.from(binary, (c) => c.charCodeAt(0));

  window.Hudkit = {
    on: function (eventName, callback) {
      const listeners = window.Hudkit._listeners;
      if (listeners.has(eventName)) {
        listeners.get(eventName).push(callback);
      } else {
        listeners.set(eventName, [callback]);
      }
    },
    off: function (eventName, callback) {
      const listenersForThisEvent = window.Hudkit._listeners.get(eventName);
      if (listenersForThisEvent) {
        const index = listenersForThisEvent.indexOf(callback);
        if (index !== -1) listenersForThisEvent.splice(index, 1);
      }
    },
    getMonitorLayout: async function () {
      return call('getMonitorLayout', (id) => id);
    },
    setClickableAreas: async function (rectangles) {
      return call('setClickableAreas', (id) => ({ id, rectangles }));
    },
    showInspector: async function (shouldAttachToWindow) {
      shouldAttachToWindow = shouldAttachToWindow ? true : false;
      return call('showInspector', (id) => ({ id, shouldAttachToWindow }));
    },
    spawn: function (program, args, listener) {
      const id = nextSpawnId++;
      const emit = typeof listener === 'function' ? listener : () => {};
      const decoders = {};
      const flush = (dataEvent) => {
        const decoder = decoders[dataEvent];
        if (!decoder) return;
        delete decoders[dataEvent];
        const tail = decoder.decode();
        if (tail) emit(dataEvent, tail);
      };
      window.Hudkit._processListeners[id] = function (event, data, ...rest) {
        switch (event) {
          case 'stdoutData':
          case 'stderrData': {
            const decoder = decoders[event] || (decoders[event] = new TextDecoder());
            emit(event, decoder.decode(toBytes(data), { stream: true }));
            return;
          }
          case 'stdoutEnd':
            flush('stdoutData');
            break;
          case 'stderrEnd':
            flush('stderrData');
            break;
        }
        emit(event, data, ...rest);
      };
      post('spawn', { id, program: String(program), args: (args || []).map(String) });
      return id;
    },
    kill: function (spawnId) {
      post('kill', { id: spawnId });
    },
  };

  const hidden = (value) => ({
    value,
    enumerable: false,
    configurable: false,
    writable: true,
  });
  Object.defineProperty(window.Hudkit, '_pendingCallbacks', hidden({}));
  Object.defineProperty(window.Hudkit, '_listeners', hidden(new Map()));
  Object.defineProperty(window.Hudkit, '_processListeners', hidden({}));
})();
"#;

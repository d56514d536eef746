//! Web engine host for the hudkit overlay.
//!
//! Wraps `wry` to provide:
//! - The overlay's single WebView and its event sink
//! - The `window.Hudkit` bootstrap script and the JSON IPC framing
//! - String escaping for every host value embedded in a guest script
//! - `BridgeDispatcher`: named channels in, correlated callbacks and
//!   listener events out
//! - Inspector attach/detach tracking

pub mod bridge;
pub mod error_page;
pub mod escape;
pub mod events;
pub mod inspector;
pub mod ipc;
pub mod manager;
pub mod native;
pub mod payload;
pub mod script;

pub use bridge::{BridgeDispatcher, ChannelHandler, Replies, ScriptSink};
pub use escape::{escape, escape_bytes, quote};
pub use events::{InspectorEvent, PageLoadState, WebViewEvent};
pub use inspector::Inspector;
pub use ipc::{IpcMessage, BOOTSTRAP_SCRIPT};
pub use manager::{EventSink, WebViewConfig, WebViewHandle, WebViewManager};

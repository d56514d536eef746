//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the overlay window, the WebView, the bridge and the
//! process reactor, and interleaves them from the loop's idle hook.

mod bridge;
mod core;
mod display_watch;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod signals;
mod types;

pub use self::core::OverlayApp;
pub use types::UserEvent;

//! Internal types and constants for the app state module.

use std::time::Duration;

/// Events sent into the winit loop from other threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserEvent {
    /// A child process queued an event.
    ProcessWake,
    /// Open the inspector (e.g. on SIGUSR1).
    ShowInspector { attached: bool },
}

/// How often the idle hook runs when nothing wakes the loop earlier.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// How often monitor layout and compositing support are re-read.
pub(super) const DISPLAY_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Worker threads for the process reactor.
pub(super) const REACTOR_THREADS: usize = 2;

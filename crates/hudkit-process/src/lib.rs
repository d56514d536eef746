//! Child processes spawned on behalf of the guest page.
//!
//! Each child runs in its own task on a tokio runtime owned by the app.
//! Output, termination, and failures come back as `ProcessEvent`s over a
//! channel that the UI thread drains; nothing here touches guest state.

mod spawn;
mod supervisor;
mod types;

pub use supervisor::{ProcessSupervisor, Waker};
pub use types::{ProcessEvent, ProcessUpdate, SupervisorConfig, DEFAULT_READ_CHUNK};

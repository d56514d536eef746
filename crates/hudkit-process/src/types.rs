use hudkit_common::SpawnKey;

/// Default maximum bytes per data event.
pub const DEFAULT_READ_CHUNK: usize = 8_192;

/// One step in a child's lifecycle.
///
/// Per child the order is: `Started` or `Error`; then data and end markers;
/// then exactly one `Exit` (only after `Started`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessEvent {
    Started { pid: u32 },
    Error { message: String },
    Stdout(Vec<u8>),
    StdoutEnd,
    Stderr(Vec<u8>),
    StderrEnd,
    /// `code` is `None` when the child was killed by a signal.
    Exit {
        code: Option<i32>,
        signal: Option<i32>,
    },
}

impl ProcessEvent {
    /// Event name as seen by guest listeners.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Started { .. } => "start",
            Self::Error { .. } => "error",
            Self::Stdout(_) => "stdoutData",
            Self::StdoutEnd => "stdoutEnd",
            Self::Stderr(_) => "stderrData",
            Self::StderrEnd => "stderrEnd",
            Self::Exit { .. } => "exit",
        }
    }
}

/// An event paired with the child it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessUpdate {
    pub key: SpawnKey,
    pub event: ProcessEvent,
    /// Last event for `key`: the record is gone and no more will follow.
    pub terminal: bool,
}

#[derive(Debug, Clone)]
pub struct SupervisorConfig {
    pub forward_stderr: bool,
    pub read_chunk_bytes: usize,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            forward_stderr: true,
            read_chunk_bytes: DEFAULT_READ_CHUNK,
        }
    }
}

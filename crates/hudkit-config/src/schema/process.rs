use serde::{Deserialize, Serialize};

pub const DEFAULT_READ_CHUNK_BYTES: u32 = 8_192;

/// Child processes spawned by the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    /// Deliver stderr to the page as `stderrData`/`stderrEnd` events. When
    /// off, stderr is only logged.
    pub forward_stderr: bool,
    /// Maximum bytes per data event (valid range: 512-1048576).
    pub read_chunk_bytes: u32,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            forward_stderr: true,
            read_chunk_bytes: DEFAULT_READ_CHUNK_BYTES,
        }
    }
}

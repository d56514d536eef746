pub mod errors;
pub mod id;
pub mod types;

pub use errors::{BridgeError, ConfigError, HudkitError, PlatformError, ProcessError};
pub use id::{CallbackId, Generation, SpawnId, SpawnKey};
pub use types::{MonitorInfo, Rect};

pub type Result<T> = std::result::Result<T, HudkitError>;

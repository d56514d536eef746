use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("no such webview setting: {0}")]
    UnknownSetting(String),

    #[error("invalid value for {key}: {value} ({expected})")]
    InvalidSettingValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("window handle error: {0}")]
    WindowHandle(String),

    #[error("input shape error: {0}")]
    InputShape(String),

    #[error("display error: {0}")]
    Display(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Failures at the host/guest boundary. None of these are fatal: they are
/// logged on the host and, where the guest can act on them, reported back
/// through the guest's own channels.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("malformed bridge message: {0}")]
    MalformedMessage(String),

    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    #[error("callback {0} is not pending")]
    UnknownCallback(u32),

    #[error("callback {0} is already pending")]
    DuplicateCallback(u32),

    #[error("script evaluation failed: {0}")]
    ScriptEvaluation(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("spawn id {0} is already running")]
    DuplicateSpawn(u32),

    #[error("{stream} read failed: {source}")]
    Stream {
        stream: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("process reactor is not running")]
    ReactorStopped,
}

#[derive(Debug, thiserror::Error)]
pub enum HudkitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}

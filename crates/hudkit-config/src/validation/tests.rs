use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate(&HudkitConfig::default()).is_ok());
}

#[test]
fn chunk_size_bounds_are_inclusive() {
    let mut config = HudkitConfig::default();
    config.process.read_chunk_bytes = MIN_READ_CHUNK_BYTES;
    assert!(validate(&config).is_ok());
    config.process.read_chunk_bytes = MAX_READ_CHUNK_BYTES;
    assert!(validate(&config).is_ok());
    config.process.read_chunk_bytes = MAX_READ_CHUNK_BYTES + 1;
    assert!(validate(&config).is_err());
}

#[test]
fn collects_every_error() {
    let mut config = HudkitConfig::default();
    config.process.read_chunk_bytes = 0;
    config.window.title = "  ".into();
    config.webview.user_agent = Some(String::new());

    let err = validate(&config).unwrap_err();
    let ConfigError::ValidationError(msg) = err else {
        panic!("expected ValidationError, got {err:?}");
    };
    assert!(msg.contains("process.read_chunk_bytes = 0"));
    assert!(msg.contains("window.title must not be empty"));
    assert!(msg.contains("webview.user_agent must not be empty"));
    assert_eq!(msg.matches("; ").count(), 2);
}

//! Config validation.
//!
//! Each check pushes a message; all messages end up in one
//! `ConfigError::ValidationError`.

mod helpers;

#[cfg(test)]
mod tests;

use hudkit_common::ConfigError;

use crate::schema::HudkitConfig;

use helpers::{validate_non_empty, validate_range};

pub const MIN_READ_CHUNK_BYTES: u32 = 512;
pub const MAX_READ_CHUNK_BYTES: u32 = 1_048_576;

pub fn validate(config: &HudkitConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(
        &mut errors,
        "process.read_chunk_bytes",
        config.process.read_chunk_bytes,
        MIN_READ_CHUNK_BYTES,
        MAX_READ_CHUNK_BYTES,
    );
    validate_non_empty(&mut errors, "window.title", &config.window.title);
    if let Some(ua) = &config.webview.user_agent {
        validate_non_empty(&mut errors, "webview.user_agent", ua);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

//! Graceful shutdown: kill children, destroy the webview, stop the reactor.

use std::time::Duration;

use super::core::OverlayApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl OverlayApp {
    /// Tear everything down. Safe to call more than once.
    ///
    /// Order matters:
    /// 1. Kill children and refuse new spawns
    /// 2. Drop the input shape backend
    /// 3. Destroy the webview
    /// 4. Shut down the tokio runtime
    /// 5. Release the window
    pub(super) fn shutdown(&mut self) {
        if self.tokio_runtime.is_none() && self.window.is_none() {
            return;
        }
        tracing::info!("Initiating graceful shutdown");

        self.ctx.supervisor.shutdown();
        self.ctx.geometry.detach_backend();
        self.webview = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.window = None;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use hudkit_common::{Generation, SpawnId, SpawnKey};

    use crate::app_state::core::test_support::app;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = app();
        app.shutdown();
        assert!(app.tokio_runtime.is_none());
        assert!(app.webview.is_none());
        assert!(!app.ctx.geometry.has_backend());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = app();
        app.shutdown();
        app.shutdown();
        assert!(app.tokio_runtime.is_none());
    }

    #[test]
    fn shutdown_kills_children_and_refuses_spawns() {
        let mut app = app();
        let key = SpawnKey::new(Generation(0), SpawnId(0));
        app.ctx
            .supervisor
            .spawn(key, "sleep", &["30".to_string()])
            .unwrap();
        app.shutdown();

        let again = SpawnKey::new(Generation(0), SpawnId(1));
        assert!(app.ctx.supervisor.spawn(again, "true", &[]).is_err());
    }
}

//! Unix signal hooks.

use tokio::runtime::Runtime;
use winit::event_loop::EventLoopProxy;

use super::types::UserEvent;

/// Open the inspector detached whenever the process receives SIGUSR1.
#[cfg(unix)]
pub(super) fn watch_sigusr1(runtime: &Runtime, proxy: EventLoopProxy<UserEvent>) {
    use tokio::signal::unix::{signal, SignalKind};

    runtime.spawn(async move {
        let mut usr1 = match signal(SignalKind::user_defined1()) {
            Ok(stream) => stream,
            Err(e) => {
                tracing::warn!("Failed to install SIGUSR1 handler: {e}");
                return;
            }
        };
        while usr1.recv().await.is_some() {
            tracing::info!("SIGUSR1 received, opening inspector");
            if proxy
                .send_event(UserEvent::ShowInspector { attached: false })
                .is_err()
            {
                break;
            }
        }
    });
}

#[cfg(not(unix))]
pub(super) fn watch_sigusr1(_runtime: &Runtime, _proxy: EventLoopProxy<UserEvent>) {}

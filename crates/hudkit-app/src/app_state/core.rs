//! OverlayApp struct definition and constructor.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use tokio::runtime::Runtime;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use hudkit_common::HudkitError;
use hudkit_config::HudkitConfig;
use hudkit_process::{ProcessSupervisor, SupervisorConfig, Waker};
use hudkit_webview::{BridgeDispatcher, Inspector, WebViewHandle, WebViewManager};

use super::bridge::{self, BridgeContext};
use super::display_watch::DisplayWatch;
use super::signals;
use super::types::{UserEvent, REACTOR_THREADS};

/// Top-level application state.
pub struct OverlayApp {
    pub(super) config: HudkitConfig,
    pub(super) url: String,
    pub(super) open_inspector: bool,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // The overlay page
    pub(super) webviews: WebViewManager,
    pub(super) webview: Option<WebViewHandle>,
    pub(super) inspector: Inspector,

    // Guest bridge and the state its handlers own
    pub(super) bridge: BridgeDispatcher<BridgeContext>,
    pub(super) ctx: BridgeContext,

    // Process reactor
    pub(super) tokio_runtime: Option<Runtime>,

    pub(super) display: DisplayWatch,
    pub(super) exit_code: u8,
    pub(super) should_exit: bool,
}

impl OverlayApp {
    pub fn new(
        config: HudkitConfig,
        url: String,
        open_inspector: bool,
        proxy: EventLoopProxy<UserEvent>,
    ) -> Result<Self, HudkitError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(REACTOR_THREADS)
            .thread_name("hudkit-io")
            .enable_all()
            .build()?;

        signals::watch_sigusr1(&runtime, proxy.clone());

        let proxy = Mutex::new(proxy);
        let waker: Waker = Arc::new(move || {
            if let Ok(proxy) = proxy.lock() {
                let _ = proxy.send_event(UserEvent::ProcessWake);
            }
        });

        Ok(Self::with_runtime(config, url, open_inspector, runtime, waker))
    }

    /// Assemble the app around an existing reactor runtime.
    pub(super) fn with_runtime(
        config: HudkitConfig,
        url: String,
        open_inspector: bool,
        runtime: Runtime,
        waker: Waker,
    ) -> Self {
        let mut supervisor = ProcessSupervisor::new(
            runtime.handle().clone(),
            SupervisorConfig {
                forward_stderr: config.process.forward_stderr,
                read_chunk_bytes: config.process.read_chunk_bytes as usize,
            },
        );
        supervisor.set_waker(waker);

        Self {
            config,
            url,
            open_inspector,
            window: None,
            webviews: WebViewManager::new(),
            webview: None,
            inspector: Inspector::new(),
            bridge: bridge::dispatcher(),
            ctx: BridgeContext::new(supervisor),
            tokio_runtime: Some(runtime),
            display: DisplayWatch::new(Vec::new(), true, Instant::now()),
            exit_code: crate::exit::SUCCESS,
            should_exit: false,
        }
    }

    /// Process exit status once the loop has returned.
    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

#[cfg(test)]
pub(super) mod test_support {
    use std::sync::Arc;

    use hudkit_config::HudkitConfig;

    use super::OverlayApp;

    /// App with its own reactor and no window.
    pub(in crate::app_state) fn app() -> OverlayApp {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("runtime");
        OverlayApp::with_runtime(
            HudkitConfig::default(),
            "about:blank".to_string(),
            false,
            runtime,
            Arc::new(|| {}),
        )
    }
}

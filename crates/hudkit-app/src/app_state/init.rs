//! Window creation and webview setup.

use std::sync::Arc;
use std::time::Instant;

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowLevel};

use hudkit_common::{HudkitError, MonitorInfo, Rect};
use hudkit_platform::{create_input_shape, is_composited, monitor_info};
use hudkit_region::bounding_box;
use hudkit_webview::manager::rect_to_wry;
use hudkit_webview::{native, WebViewConfig};

use super::core::OverlayApp;
use super::display_watch::DisplayWatch;

// =============================================================================
// INITIALIZATION
// =============================================================================

/// Every connected monitor in physical pixels.
pub(super) fn current_monitors(event_loop: &ActiveEventLoop) -> Vec<MonitorInfo> {
    event_loop
        .available_monitors()
        .map(|handle| monitor_info(&handle))
        .collect()
}

/// Size of `frame` as a window size. Never zero.
pub(super) fn frame_size(frame: Rect) -> PhysicalSize<u32> {
    PhysicalSize::new(frame.width.max(1) as u32, frame.height.max(1) as u32)
}

impl OverlayApp {
    /// Create the overlay window covering every monitor, load the page
    /// into it and install the empty input shape.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(), HudkitError> {
        let monitors = current_monitors(event_loop);
        let frame = bounding_box(&monitors);
        tracing::info!(
            monitors = monitors.len(),
            x = frame.x,
            y = frame.y,
            width = frame.width,
            height = frame.height,
            "Covering monitor layout"
        );

        let window = self.create_window(event_loop, frame)?;

        let webview_config = self.webview_config();
        let bounds = rect_to_wry(Rect::new(0, 0, frame.width, frame.height));
        let handle = self
            .webviews
            .create(&*window, bounds, webview_config)
            .map_err(|e| HudkitError::WebView(e.to_string()))?;

        self.inspector.install(&handle, self.webviews.event_sink());
        native::install_page_hooks(&handle, self.webviews.event_sink());

        // Click-through everywhere until the page claims an area.
        self.ctx
            .geometry
            .attach_backend(create_input_shape(&window));
        window.set_visible(true);

        if self.open_inspector {
            self.inspector
                .show(&handle, self.config.inspector.attached);
        }

        self.display = DisplayWatch::new(monitors.clone(), is_composited(), Instant::now());
        self.ctx.monitors = monitors;
        self.webview = Some(handle);
        self.window = Some(window);

        tracing::info!(url = %self.url, "Overlay ready");
        Ok(())
    }

    fn create_window(
        &self,
        event_loop: &ActiveEventLoop,
        frame: Rect,
    ) -> Result<Arc<Window>, HudkitError> {
        let level = if self.config.window.always_on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };

        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(false)
            .with_active(false)
            .with_visible(false)
            .with_window_level(level)
            .with_position(PhysicalPosition::new(frame.x, frame.y))
            .with_inner_size(frame_size(frame));

        #[cfg(target_os = "linux")]
        let attrs = {
            use winit::platform::x11::WindowAttributesExtX11;
            attrs.with_override_redirect(self.config.window.override_redirect)
        };

        event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| HudkitError::Other(format!("failed to create window: {e}")))
    }

    fn webview_config(&self) -> WebViewConfig {
        let section = &self.config.webview;
        WebViewConfig {
            url: self.url.clone(),
            transparent: section.transparent,
            devtools: section.devtools,
            user_agent: section.user_agent.clone(),
            clipboard: section.clipboard,
            autoplay: section.autoplay,
            incognito: section.incognito,
            zoom_hotkeys: section.zoom_hotkeys,
        }
    }
}

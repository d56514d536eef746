//! The idle hook: toolkit pump, webview events, process events, display
//! sampling and the bridge flush, in that order.

use std::time::Instant;

use winit::dpi::PhysicalPosition;
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use hudkit_common::Rect;
use hudkit_platform::is_composited;
use hudkit_region::bounding_box;
use hudkit_webview::manager::rect_to_wry;
use hudkit_webview::script::ATTACHED_INSPECTOR_HINT;
use hudkit_webview::{InspectorEvent, PageLoadState, WebViewEvent};

use crate::exit;

use super::bridge::deliver_process_update;
use super::core::OverlayApp;
use super::init::{current_monitors, frame_size};
use super::types::POLL_INTERVAL;

impl OverlayApp {
    /// Run one round of polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        pump_toolkit();

        for event in self.webviews.drain_events() {
            self.handle_webview_event(event);
        }
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }

        self.run_inspector_requests();
        self.poll_process_events();

        let now = Instant::now();
        if self.display.due(now) {
            self.poll_display(event_loop, now);
        }

        self.flush_bridge();

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    // =========================================================================
    // WEBVIEW
    // =========================================================================

    pub(super) fn handle_webview_event(&mut self, event: WebViewEvent) {
        match event {
            WebViewEvent::PageLoad {
                state: PageLoadState::Started,
                url,
            } => {
                tracing::info!(url = %url, "Page load started");
                self.ctx.new_page();
                self.bridge.new_page();
            }
            WebViewEvent::PageLoad {
                state: PageLoadState::Finished,
                url,
            } => {
                tracing::info!(url = %url, "Page loaded");
                if let Some(handle) = &mut self.webview {
                    handle.set_current_url(url);
                }
            }
            WebViewEvent::IpcMessage { body } => {
                if let Err(e) = self.bridge.dispatch_raw(&mut self.ctx, &body) {
                    tracing::warn!(error = %e, "Rejected bridge message");
                }
            }
            WebViewEvent::LoadFailed { uri, message } => {
                if let Some(handle) = &self.webview {
                    if let Err(e) = handle.show_error_page(&uri, &message) {
                        tracing::warn!("Failed to show error page: {e}");
                    }
                }
            }
            WebViewEvent::Inspector(InspectorEvent::Attached) => {
                // Geometry follows in `Allocated`; re-install what we have.
                self.ctx.geometry.materialize();
                if self.inspector.take_attach_hint() {
                    self.bridge.replies_mut().push_script(ATTACHED_INSPECTOR_HINT);
                }
            }
            WebViewEvent::Inspector(InspectorEvent::Allocated(rect)) => {
                self.ctx.geometry.set_inspector_rect(Some(rect));
            }
            WebViewEvent::Inspector(InspectorEvent::Detached) => {
                self.ctx.geometry.set_inspector_rect(None);
            }
            WebViewEvent::Closed => {
                self.exit_code = exit::SUCCESS;
                self.should_exit = true;
            }
        }
    }

    fn run_inspector_requests(&mut self) {
        let requests = std::mem::take(&mut self.ctx.inspector_requests);
        if let Some(handle) = &self.webview {
            for attached in requests {
                self.inspector.show(handle, attached);
            }
        }
    }

    // =========================================================================
    // PROCESSES
    // =========================================================================

    pub(super) fn poll_process_events(&mut self) {
        for update in self.ctx.supervisor.drain_events() {
            deliver_process_update(self.ctx.generation, self.bridge.replies_mut(), &update);
        }
    }

    // =========================================================================
    // DISPLAY
    // =========================================================================

    fn poll_display(&mut self, event_loop: &ActiveEventLoop, now: Instant) {
        let changes = self
            .display
            .observe(now, current_monitors(event_loop), is_composited());

        if changes.monitors_changed {
            self.ctx.monitors = self.display.monitors().to_vec();
            tracing::info!(monitors = self.ctx.monitors.len(), "Monitor layout changed");
            self.refit_window();
            self.ctx.geometry.clear_user_rects();
            self.bridge.replies_mut().emit_event("monitors-changed", "");
        }
        if let Some(composited) = changes.composited_changed {
            tracing::info!(composited, "Compositing support changed");
            let data = if composited { "true" } else { "false" };
            self.bridge.replies_mut().emit_event("composited-changed", data);
        }
    }

    /// Move and resize the window to the current monitors' bounding box.
    fn refit_window(&mut self) {
        let frame = bounding_box(&self.ctx.monitors);
        let size = frame_size(frame);
        if let Some(window) = &self.window {
            window.set_outer_position(PhysicalPosition::new(frame.x, frame.y));
            let _ = window.request_inner_size(size);
        }
        self.sync_webview_bounds(size.width, size.height);
    }

    pub(super) fn sync_webview_bounds(&self, width: u32, height: u32) {
        let Some(handle) = &self.webview else {
            return;
        };
        let rect = Rect::new(
            0,
            0,
            i32::try_from(width).unwrap_or(i32::MAX),
            i32::try_from(height).unwrap_or(i32::MAX),
        );
        if let Err(e) = handle.set_bounds(rect_to_wry(rect)) {
            tracing::warn!("Failed to resize webview: {e}");
        }
    }

    // =========================================================================
    // BRIDGE
    // =========================================================================

    fn flush_bridge(&mut self) {
        match &self.webview {
            Some(handle) => {
                self.bridge.flush(handle);
            }
            None => {
                self.bridge.replies_mut().take_scripts();
            }
        }
    }
}

/// Run pending GTK work without blocking.
#[cfg(target_os = "linux")]
fn pump_toolkit() {
    while gtk::events_pending() {
        gtk::main_iteration_do(false);
    }
}

#[cfg(not(target_os = "linux"))]
fn pump_toolkit() {}

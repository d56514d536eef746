//! `InputShape` backends.
//!
//! - `x11`: SHAPE-extension input region, exact per-pixel click-through.
//! - `hittest`: whole-window toggle through winit; the window accepts input
//!   iff the region is non-empty.
//! - `noop`: accepts every region and does nothing.

use std::sync::Arc;

use winit::window::Window;

use hudkit_region::InputShape;

pub mod hittest;
pub mod noop;
#[cfg(target_os = "linux")]
pub mod x11;

/// Pick the best backend available for `window`.
pub fn create_input_shape(window: &Arc<Window>) -> Box<dyn InputShape> {
    #[cfg(target_os = "linux")]
    {
        match x11::X11InputShape::from_window(window.as_ref()) {
            Ok(shape) => return Box::new(shape),
            Err(e) => {
                tracing::warn!(error = %e, "X11 input shapes unavailable, falling back to hit-test");
            }
        }
    }
    Box::new(hittest::HitTestShape::new(Arc::clone(window)))
}

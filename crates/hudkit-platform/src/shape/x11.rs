//! X11 SHAPE-extension input regions.

use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use x11rb::connection::{Connection, RequestConnection};
use x11rb::protocol::shape::{self, ConnectionExt as _, SK, SO};
use x11rb::protocol::xproto::{ClipOrdering, Rectangle};
use x11rb::rust_connection::RustConnection;

use hudkit_common::{PlatformError, Rect};
use hudkit_region::{InputShape, Region};

pub struct X11InputShape {
    conn: RustConnection,
    window: u32,
}

impl X11InputShape {
    /// Connect to the display named by `$DISPLAY` and target `window`.
    pub fn new(window: u32) -> Result<Self, PlatformError> {
        let (conn, _screen) =
            x11rb::connect(None).map_err(|e| PlatformError::Display(e.to_string()))?;

        let has_shape = conn
            .extension_information(shape::X11_EXTENSION_NAME)
            .map_err(|e| PlatformError::Display(e.to_string()))?
            .is_some();
        if !has_shape {
            return Err(PlatformError::NotSupported(
                "X server has no SHAPE extension".into(),
            ));
        }

        Ok(Self { conn, window })
    }

    /// Resolve the X window id behind a winit window.
    pub fn from_window<W: HasWindowHandle>(window: &W) -> Result<Self, PlatformError> {
        let handle = window
            .window_handle()
            .map_err(|e| PlatformError::WindowHandle(e.to_string()))?;
        let id = match handle.as_raw() {
            RawWindowHandle::Xlib(h) => h.window as u32,
            RawWindowHandle::Xcb(h) => h.window.get(),
            other => {
                return Err(PlatformError::NotSupported(format!(
                    "not an X11 window: {other:?}"
                )))
            }
        };
        Self::new(id)
    }
}

impl InputShape for X11InputShape {
    fn apply(&self, region: &Region) -> Result<(), PlatformError> {
        let rects: Vec<Rectangle> = region.rects().iter().map(to_x_rectangle).collect();

        self.conn
            .shape_rectangles(
                SO::SET,
                SK::INPUT,
                ClipOrdering::UNSORTED,
                self.window,
                0,
                0,
                &rects,
            )
            .map_err(|e| PlatformError::InputShape(e.to_string()))?
            .check()
            .map_err(|e| PlatformError::InputShape(e.to_string()))?;
        self.conn
            .flush()
            .map_err(|e| PlatformError::InputShape(e.to_string()))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "x11-shape"
    }
}

/// X rectangles are 16-bit; clamp instead of wrapping.
fn to_x_rectangle(r: &Rect) -> Rectangle {
    Rectangle {
        x: r.x.clamp(i16::MIN as i32, i16::MAX as i32) as i16,
        y: r.y.clamp(i16::MIN as i32, i16::MAX as i32) as i16,
        width: r.width.clamp(0, u16::MAX as i32) as u16,
        height: r.height.clamp(0, u16::MAX as i32) as u16,
    }
}

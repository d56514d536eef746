//! Display queries: monitor geometry and compositing support.

use winit::monitor::MonitorHandle;

use hudkit_common::{MonitorInfo, Rect};

/// Physical geometry and name of one winit monitor.
pub fn monitor_info(handle: &MonitorHandle) -> MonitorInfo {
    let position = handle.position();
    let size = handle.size();
    MonitorInfo::new(
        handle.name().unwrap_or_default(),
        Rect::new(
            position.x,
            position.y,
            i32::try_from(size.width).unwrap_or(i32::MAX),
            i32::try_from(size.height).unwrap_or(i32::MAX),
        ),
    )
}

/// Whether the default screen can blend translucent windows.
///
/// Requires GTK to be initialized on Linux. Other platforms always
/// composite.
pub fn is_composited() -> bool {
    #[cfg(target_os = "linux")]
    {
        gtk::gdk::Screen::default().is_some_and(|screen| screen.is_composited())
    }
    #[cfg(not(target_os = "linux"))]
    {
        true
    }
}

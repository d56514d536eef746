use hudkit_common::{MonitorInfo, Rect};

/// Frame for an overlay that spans every attached monitor.
///
/// The result is the smallest axis-aligned box containing all monitors and
/// the desktop origin. Gaps between monitors are covered too.
pub fn bounding_box(monitors: &[MonitorInfo]) -> Rect {
    let (mut left, mut top, mut right, mut bottom) = (0i32, 0i32, 0i32, 0i32);
    for monitor in monitors {
        let r = monitor.rect;
        left = left.min(r.x);
        top = top.min(r.y);
        right = right.max(r.right());
        bottom = bottom.max(r.bottom());
    }
    Rect::new(
        left,
        top,
        right.saturating_sub(left),
        bottom.saturating_sub(top),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor(x: i32, y: i32, w: i32, h: i32) -> MonitorInfo {
        MonitorInfo::new("", Rect::new(x, y, w, h))
    }

    #[test]
    fn no_monitors_gives_zero_frame() {
        assert_eq!(bounding_box(&[]), Rect::ZERO);
    }

    #[test]
    fn single_monitor() {
        assert_eq!(
            bounding_box(&[monitor(0, 0, 1920, 1080)]),
            Rect::new(0, 0, 1920, 1080)
        );
    }

    #[test]
    fn side_by_side_with_different_heights() {
        let frame = bounding_box(&[monitor(0, 0, 1920, 1080), monitor(1920, 0, 2560, 1440)]);
        assert_eq!(frame, Rect::new(0, 0, 4480, 1440));
    }

    #[test]
    fn offset_monitor_includes_origin() {
        let frame = bounding_box(&[monitor(100, 50, 800, 600)]);
        assert_eq!(frame, Rect::new(0, 0, 900, 650));
    }

    #[test]
    fn negative_origin_monitor() {
        let frame = bounding_box(&[monitor(-1280, -200, 1280, 1024), monitor(0, 0, 1920, 1080)]);
        assert_eq!(frame, Rect::new(-1280, -200, 3200, 1280));
    }
}

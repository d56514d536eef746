use hudkit_common::Rect;

/// Convert a window-relative pixel rectangle to wry bounds.
pub fn rect_to_wry(rect: Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(
            rect.width.max(0) as u32,
            rect.height.max(0) as u32,
        )),
    }
}

//! The two rectangle stores that make up the clickable area.
//!
//! `inspector_rect` belongs to the inspector attach/detach lifecycle and
//! `user_rects` belongs to the guest page. Neither writer can touch the
//! other's store; they are only combined when the region is materialized.

use hudkit_common::Rect;
use tracing::{debug, warn};

use crate::region::Region;
use crate::shape::InputShape;

pub struct GeometryRegistry {
    inspector_rect: Rect,
    user_rects: Vec<Rect>,
    region: Region,
    backend: Option<Box<dyn InputShape>>,
    /// Region most recently accepted by the backend.
    installed: Option<Region>,
}

impl GeometryRegistry {
    pub fn new() -> Self {
        Self {
            inspector_rect: Rect::ZERO,
            user_rects: Vec::new(),
            region: Region::new(),
            backend: None,
            installed: None,
        }
    }

    /// Attach the window's shape backend and install the current region.
    pub fn attach_backend(&mut self, backend: Box<dyn InputShape>) {
        debug!(backend = backend.name(), "input shape backend attached");
        self.backend = Some(backend);
        self.installed = None;
        self.materialize();
    }

    /// Drop the backend, e.g. when the window is destroyed.
    pub fn detach_backend(&mut self) {
        self.backend = None;
        self.installed = None;
    }

    /// Replace every guest-supplied rectangle.
    pub fn set_user_rects(&mut self, rects: Vec<Rect>) {
        self.user_rects = rects;
        self.materialize();
    }

    pub fn clear_user_rects(&mut self) {
        self.set_user_rects(Vec::new());
    }

    /// `None` means the inspector is not attached to the overlay.
    pub fn set_inspector_rect(&mut self, rect: Option<Rect>) {
        self.inspector_rect = rect.unwrap_or(Rect::ZERO);
        self.materialize();
    }

    /// Recompute the union of both stores and install it.
    ///
    /// Without a backend the region is still recomputed but nothing is
    /// installed. Installing an unchanged region is skipped.
    pub fn materialize(&mut self) {
        self.region = Region::from_rects(
            std::iter::once(self.inspector_rect).chain(self.user_rects.iter().copied()),
        );

        let Some(backend) = &self.backend else {
            debug!("no window yet, input shape not installed");
            return;
        };
        if self.installed.as_ref() == Some(&self.region) {
            return;
        }

        match backend.apply(&self.region) {
            Ok(()) => {
                debug!(
                    backend = backend.name(),
                    rects = self.region.rects().len(),
                    area = self.region.area(),
                    "input shape installed"
                );
                self.installed = Some(self.region.clone());
            }
            Err(e) => {
                warn!(backend = backend.name(), error = %e, "failed to install input shape");
                self.installed = None;
            }
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn user_rects(&self) -> &[Rect] {
        &self.user_rects
    }

    pub fn inspector_rect(&self) -> Rect {
        self.inspector_rect
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }
}

impl Default for GeometryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hudkit_common::PlatformError;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder {
        applied: Rc<RefCell<Vec<Region>>>,
        fail: Rc<Cell<bool>>,
    }

    impl InputShape for Recorder {
        fn apply(&self, region: &Region) -> Result<(), PlatformError> {
            if self.fail.get() {
                return Err(PlatformError::InputShape("refused".into()));
            }
            self.applied.borrow_mut().push(region.clone());
            Ok(())
        }

        fn name(&self) -> &'static str {
            "recorder"
        }
    }

    fn registry_with_recorder() -> (GeometryRegistry, Recorder) {
        let recorder = Recorder::default();
        let mut registry = GeometryRegistry::new();
        registry.attach_backend(Box::new(recorder.clone()));
        (registry, recorder)
    }

    #[test]
    fn user_rects_union() {
        let (mut registry, recorder) = registry_with_recorder();
        registry.set_user_rects(vec![Rect::new(0, 0, 10, 10), Rect::new(5, 5, 10, 10)]);

        assert_eq!(registry.region().area(), 175);
        assert!(!registry.region().contains(50, 50));
        let applied = recorder.applied.borrow();
        assert_eq!(applied.last(), Some(registry.region()));
    }

    #[test]
    fn materialize_without_backend_is_noop() {
        let mut registry = GeometryRegistry::new();
        registry.set_user_rects(vec![Rect::new(0, 0, 10, 10)]);
        assert!(!registry.has_backend());
        assert_eq!(registry.region().area(), 100);
    }

    #[test]
    fn attaching_backend_installs_pending_region() {
        let mut registry = GeometryRegistry::new();
        registry.set_user_rects(vec![Rect::new(0, 0, 10, 10)]);

        let recorder = Recorder::default();
        registry.attach_backend(Box::new(recorder.clone()));
        let applied = recorder.applied.borrow();
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].area(), 100);
    }

    #[test]
    fn materialize_is_idempotent() {
        let (mut registry, recorder) = registry_with_recorder();
        registry.set_user_rects(vec![Rect::new(1, 2, 3, 4)]);
        let before = registry.region().clone();
        let installs = recorder.applied.borrow().len();

        registry.materialize();
        registry.materialize();

        assert_eq!(registry.region(), &before);
        assert_eq!(recorder.applied.borrow().len(), installs);
    }

    #[test]
    fn inspector_and_user_stores_are_independent() {
        let (mut registry, _) = registry_with_recorder();
        registry.set_inspector_rect(Some(Rect::new(0, 500, 800, 300)));
        registry.set_user_rects(vec![Rect::new(0, 0, 10, 10)]);
        assert_eq!(registry.region().area(), 800 * 300 + 100);

        // Guest replacing its rects leaves the inspector area alone.
        registry.set_user_rects(Vec::new());
        assert_eq!(registry.region().area(), 800 * 300);
        assert!(registry.region().contains(10, 600));

        // Detaching the inspector leaves the guest area alone.
        registry.set_user_rects(vec![Rect::new(0, 0, 10, 10)]);
        registry.set_inspector_rect(None);
        assert_eq!(registry.inspector_rect(), Rect::ZERO);
        assert_eq!(registry.region().area(), 100);
    }

    #[test]
    fn clear_user_rects_empties_region() {
        let (mut registry, recorder) = registry_with_recorder();
        registry.set_user_rects(vec![Rect::new(0, 0, 10, 10)]);
        registry.clear_user_rects();
        assert!(registry.region().is_empty());
        assert!(registry.user_rects().is_empty());
        assert!(recorder.applied.borrow().last().unwrap().is_empty());
    }

    #[test]
    fn backend_failure_keeps_stores_and_retries() {
        let (mut registry, recorder) = registry_with_recorder();
        recorder.fail.set(true);
        registry.set_user_rects(vec![Rect::new(0, 0, 10, 10)]);
        assert_eq!(registry.user_rects().len(), 1);
        assert_eq!(registry.region().area(), 100);

        recorder.fail.set(false);
        registry.materialize();
        assert_eq!(recorder.applied.borrow().last().unwrap().area(), 100);
    }

    #[test]
    fn detach_backend_stops_installing() {
        let (mut registry, recorder) = registry_with_recorder();
        let installs = recorder.applied.borrow().len();
        registry.detach_backend();
        registry.set_user_rects(vec![Rect::new(0, 0, 10, 10)]);
        assert_eq!(recorder.applied.borrow().len(), installs);
    }
}

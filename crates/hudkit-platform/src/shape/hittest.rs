use std::sync::Arc;

use winit::window::Window;

use hudkit_common::PlatformError;
use hudkit_region::{InputShape, Region};

/// Coarse fallback: the whole window is either clickable or click-through.
pub struct HitTestShape {
    window: Arc<Window>,
}

impl HitTestShape {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl InputShape for HitTestShape {
    fn apply(&self, region: &Region) -> Result<(), PlatformError> {
        self.window
            .set_cursor_hittest(!region.is_empty())
            .map_err(|e| PlatformError::InputShape(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "hittest"
    }
}

use hudkit_common::PlatformError;
use hudkit_region::{InputShape, Region};

/// Backend for headless runs and platforms without input-shape support.
pub struct NoopShape;

impl InputShape for NoopShape {
    fn apply(&self, _region: &Region) -> Result<(), PlatformError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}

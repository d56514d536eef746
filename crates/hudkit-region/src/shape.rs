//! Backend seam for installing a region as the window's input shape.

use hudkit_common::PlatformError;

use crate::region::Region;

/// Installs an input-acceptance region on a realized window.
///
/// Pointer events outside the installed region pass through to whatever is
/// underneath the overlay.
pub trait InputShape {
    /// Replace the window's input region with `region`.
    fn apply(&self, region: &Region) -> Result<(), PlatformError>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

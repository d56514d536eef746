//! Input-region algebra for the overlay window.
//!
//! The overlay is click-through everywhere except inside the union of a few
//! rectangles. This crate computes that union (`Region`), keeps the two
//! rectangle stores that feed it apart (`GeometryRegistry`), and hands the
//! result to a platform `InputShape` backend.

pub mod layout;
pub mod region;
pub mod registry;
pub mod shape;

pub use layout::bounding_box;
pub use region::Region;
pub use registry::GeometryRegistry;
pub use shape::InputShape;

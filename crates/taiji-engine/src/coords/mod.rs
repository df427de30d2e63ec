//! Coordinate and geometry types shared by canvases and sketches.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Sketches that work in a y-up mathematical frame convert explicitly.

mod rect;
mod transform;
mod vec2;
mod viewport;

pub use rect::{PixelBounds, Rect};
pub use transform::Transform;
pub use vec2::Vec2;
pub use viewport::Viewport;

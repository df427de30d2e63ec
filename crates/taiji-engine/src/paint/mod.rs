//! Paint model shared between canvases and sketches.
//!
//! Scope:
//! - color representation (premultiplied alpha over sRGB-encoded channels)
//! - stroke styles (width, caps, joins)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod stroke;

pub use color::Color;
pub use stroke::{LineCap, LineJoin, Stroke};

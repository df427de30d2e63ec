//! 2D drawing surface abstraction.
//!
//! Sketches draw through [`Canvas`] only; the `vello_cpu`-backed [`Pixmap`]
//! and the recording [`crate::scene::DrawList`] are the two implementations.
//!
//! Conventions:
//! - logical pixels, origin top-left, y down
//! - angles in radians, positive is clockwise on screen
//! - colors are premultiplied ([`crate::paint::Color`])

mod path;
mod pixmap;

use std::fmt;

use crate::coords::{Rect, Viewport};
use crate::paint::{Color, Stroke};

pub use path::{ARC_TOLERANCE, Path};
pub use vello_cpu::kurbo::{self, PathEl, Point};
pub use pixmap::Pixmap;

/// Drawing surface with canvas-style fill and stroke operations.
pub trait Canvas {
    /// Current drawable size.
    fn viewport(&self) -> Viewport;

    /// Resets the covered area to transparent.
    fn clear_rect(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fills every subpath of `path` with the nonzero winding rule.
    fn fill_path(&mut self, path: &Path, color: Color);

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);

    /// Clears the whole viewport.
    fn clear(&mut self) {
        let full = Rect::from_viewport(self.viewport());
        self.clear_rect(full);
    }
}

/// Errors raised when creating or resizing a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// Width or height was zero.
    EmptySurface { width: u32, height: u32 },
    /// Width or height beyond what the rasterizer addresses (`u16`).
    TooLarge { width: u32, height: u32 },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::EmptySurface { width, height } => {
                write!(f, "surface has no drawable area ({width}x{height})")
            }
            CanvasError::TooLarge { width, height } => {
                write!(f, "surface too large to rasterize ({width}x{height})")
            }
        }
    }
}

impl std::error::Error for CanvasError {}

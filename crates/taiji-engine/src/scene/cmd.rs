use crate::canvas::{Canvas, Path};
use crate::coords::Rect;
use crate::paint::{Color, Stroke};

/// Renderer-agnostic draw command, one per `Canvas` call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Rect),
    FillRect { rect: Rect, color: Color },
    FillPath { path: Path, color: Color },
    StrokePath { path: Path, stroke: Stroke },
}

impl DrawCmd {
    /// Issues this command against `canvas`.
    pub fn apply(&self, canvas: &mut dyn Canvas) {
        match self {
            DrawCmd::Clear(rect) => canvas.clear_rect(*rect),
            DrawCmd::FillRect { rect, color } => canvas.fill_rect(*rect, *color),
            DrawCmd::FillPath { path, color } => canvas.fill_path(path, *color),
            DrawCmd::StrokePath { path, stroke } => canvas.stroke_path(path, stroke),
        }
    }

    #[inline]
    pub fn is_clear(&self) -> bool {
        matches!(self, DrawCmd::Clear(_))
    }
}

use crate::canvas::{Canvas, Path};
use crate::coords::{Rect, Viewport};
use crate::paint::{Color, Stroke};

use super::DrawCmd;

/// Recorded draw stream.
///
/// Performance characteristics:
/// - every `Canvas` call is an O(1) push (paths are cloned)
/// - `clear()` of the recorder itself keeps allocated capacity for reuse
///
/// Note that `Canvas::clear` on a `DrawList` records a [`DrawCmd::Clear`];
/// use [`DrawList::reset`] to drop the recording.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    viewport: Viewport,
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, items: Vec::new() }
    }

    /// Drops recorded items, keeps capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Items in insertion (paint) order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Items recorded after the most recent clear (all items if none).
    pub fn since_last_clear(&self) -> &[DrawCmd] {
        match self.items.iter().rposition(DrawCmd::is_clear) {
            Some(i) => &self.items[i + 1..],
            None => &self.items,
        }
    }

    /// Stroke commands in paint order.
    pub fn strokes(&self) -> impl Iterator<Item = (&Path, &Stroke)> {
        self.items.iter().filter_map(|cmd| match cmd {
            DrawCmd::StrokePath { path, stroke } => Some((path, stroke)),
            _ => None,
        })
    }

    /// Path fill commands in paint order.
    pub fn path_fills(&self) -> impl Iterator<Item = (&Path, Color)> {
        self.items.iter().filter_map(|cmd| match cmd {
            DrawCmd::FillPath { path, color } => Some((path, *color)),
            _ => None,
        })
    }

    /// Rect fill commands in paint order.
    pub fn rect_fills(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.items.iter().filter_map(|cmd| match cmd {
            DrawCmd::FillRect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }

    /// Issues every recorded command against `canvas`, in order.
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        for cmd in &self.items {
            cmd.apply(canvas);
        }
    }
}

impl Canvas for DrawList {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.push(DrawCmd::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCmd::FillRect { rect, color });
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.push(DrawCmd::FillPath { path: path.clone(), color });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.push(DrawCmd::StrokePath { path: path.clone(), stroke: *stroke });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Pixmap;
    use crate::coords::Vec2;

    fn list() -> DrawList {
        DrawList::new(Viewport::new(20.0, 10.0))
    }

    // ── recording ─────────────────────────────────────────────────────────

    #[test]
    fn canvas_calls_are_recorded_in_order() {
        let mut dl = list();
        dl.clear();
        dl.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::white());
        dl.stroke_path(&Path::line(Vec2::zero(), Vec2::new(5.0, 0.0)), &Stroke::new(1.0, Color::black()));

        assert_eq!(dl.len(), 3);
        assert_eq!(dl.items()[0], DrawCmd::Clear(Rect::new(0.0, 0.0, 20.0, 10.0)));
        assert!(matches!(dl.items()[1], DrawCmd::FillRect { .. }));
        assert_eq!(dl.strokes().count(), 1);
    }

    #[test]
    fn since_last_clear_skips_earlier_frames() {
        let mut dl = list();
        dl.clear();
        dl.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::white());
        dl.clear();
        dl.fill_path(&Path::circle(Vec2::new(5.0, 5.0), 2.0), Color::black());

        let tail = dl.since_last_clear();
        assert_eq!(tail.len(), 1);
        assert!(matches!(tail[0], DrawCmd::FillPath { .. }));
    }

    #[test]
    fn reset_drops_items() {
        let mut dl = list();
        dl.clear();
        dl.reset();
        assert!(dl.is_empty());
    }

    // ── replay ────────────────────────────────────────────────────────────

    #[test]
    fn replay_matches_direct_drawing() {
        let mut dl = list();
        let circle = Path::circle(Vec2::new(10.0, 5.0), 4.0);
        dl.fill_path(&circle, Color::rgba(77, 159, 255, 0.3));
        dl.stroke_path(&circle, &Stroke::round(2.0, Color::white()));

        let mut replayed = Pixmap::new(20, 10).unwrap();
        dl.replay(&mut replayed);

        let mut direct = Pixmap::new(20, 10).unwrap();
        direct.fill_path(&circle, Color::rgba(77, 159, 255, 0.3));
        direct.stroke_path(&circle, &Stroke::round(2.0, Color::white()));

        assert_eq!(replayed.pixels(), direct.pixels());
    }
}

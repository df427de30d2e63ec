//! The composite region: a disk, cut by a sine curve, minus a small disk.
//!
//! Evaluated in the mathematical frame (y up) with `f64`, matching the
//! precision of the reference drawing.

use taiji_engine::coords::{Vec2, Viewport};

/// Pixels per mathematical unit.
pub const SCALE: f64 = 8.0;

/// Outer disk radius squared (`12²`).
const OUTER_RADIUS_SQ: f64 = 144.0;
const OUTER_RADIUS: f64 = 12.0;

const CURVE_AMPLITUDE: f64 = 3.0;
const CURVE_DIVISOR: f64 = 4.0;

const HOLE_CENTER: (f64, f64) = (3.0, -7.0);
const HOLE_RADIUS_SQ: f64 = 4.0;

/// Affine map between pixel and mathematical coordinates:
/// `px = cx + scale·x`, `py = cy − scale·y`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MathFrame {
    pub cx: f64,
    pub cy: f64,
    pub scale: f64,
}

impl MathFrame {
    /// Frame centered on the viewport.
    pub fn centered(viewport: Viewport, scale: f64) -> Self {
        Self {
            cx: viewport.width as f64 / 2.0,
            cy: viewport.height as f64 / 2.0,
            scale,
        }
    }

    #[inline]
    pub fn to_math(&self, px: f64, py: f64) -> (f64, f64) {
        ((px - self.cx) / self.scale, (self.cy - py) / self.scale)
    }

    #[inline]
    pub fn to_pixel(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new((self.cx + self.scale * x) as f32, (self.cy - self.scale * y) as f32)
    }
}

#[inline]
pub fn in_outer_disk(x: f64, y: f64) -> bool {
    x * x + y * y <= OUTER_RADIUS_SQ
}

#[inline]
pub fn right_of_curve(x: f64, y: f64) -> bool {
    x >= CURVE_AMPLITUDE * (y / CURVE_DIVISOR).sin()
}

#[inline]
pub fn outside_hole(x: f64, y: f64) -> bool {
    let dx = x - HOLE_CENTER.0;
    let dy = y - HOLE_CENTER.1;
    dx * dx + dy * dy >= HOLE_RADIUS_SQ
}

/// All three predicates.
#[inline]
pub fn contains(x: f64, y: f64) -> bool {
    in_outer_disk(x, y) && right_of_curve(x, y) && outside_hole(x, y)
}

/// Horizontal run of filled pixels `[x, x + len)` on row `y`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Run {
    pub y: u32,
    pub x: u32,
    pub len: u32,
}

/// Filled pixels of a `width × height` surface, merged into row runs.
///
/// Pixel `(px, py)` is filled iff its mathematical coordinate passes
/// [`contains`]. Only the outer disk's bounding box is scanned; nothing
/// outside it can pass the first predicate.
pub fn filled_runs(frame: &MathFrame, width: u32, height: u32) -> Vec<Run> {
    let reach = OUTER_RADIUS * frame.scale;
    let clamp = |v: f64, max: u32| v.max(0.0).min(max as f64) as u32;
    let x0 = clamp((frame.cx - reach).floor(), width);
    let x1 = clamp((frame.cx + reach).ceil() + 1.0, width);
    let y0 = clamp((frame.cy - reach).floor(), height);
    let y1 = clamp((frame.cy + reach).ceil() + 1.0, height);

    let mut runs = Vec::new();
    for py in y0..y1 {
        let mut open: Option<u32> = None;
        for px in x0..x1 {
            let (x, y) = frame.to_math(px as f64, py as f64);
            match (contains(x, y), open) {
                (true, None) => open = Some(px),
                (false, Some(start)) => {
                    runs.push(Run { y: py, x: start, len: px - start });
                    open = None;
                }
                _ => {}
            }
        }
        if let Some(start) = open {
            runs.push(Run { y: py, x: start, len: x1 - start });
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> MathFrame {
        MathFrame::centered(Viewport::new(300.0, 300.0), SCALE)
    }

    // ── predicates ────────────────────────────────────────────────────────

    #[test]
    fn origin_is_inside() {
        assert!(contains(0.0, 0.0));
    }

    #[test]
    fn far_point_is_outside() {
        assert!(!contains(20.0, 20.0));
    }

    #[test]
    fn hole_center_is_excluded() {
        assert!(in_outer_disk(3.0, -7.0));
        assert!(!outside_hole(3.0, -7.0));
        assert!(!contains(3.0, -7.0));
    }

    #[test]
    fn left_of_curve_is_excluded() {
        // sin(0) = 0, so anything with x < 0 on the y = 0 line is cut away.
        assert!(!contains(-1.0, 0.0));
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert!(in_outer_disk(12.0, 0.0));
        assert!(outside_hole(5.0, -7.0));
        assert!(right_of_curve(0.0, 0.0));
    }

    // ── frame ─────────────────────────────────────────────────────────────

    #[test]
    fn frame_maps_center_to_origin() {
        assert_eq!(frame().to_math(150.0, 150.0), (0.0, 0.0));
        assert_eq!(frame().to_math(158.0, 142.0), (1.0, 1.0));
        assert_eq!(frame().to_pixel(3.0, -7.0), Vec2::new(174.0, 206.0));
    }

    // ── runs ──────────────────────────────────────────────────────────────

    #[test]
    fn runs_have_no_false_positives() {
        let f = frame();
        for run in filled_runs(&f, 300, 300) {
            for px in run.x..run.x + run.len {
                let (x, y) = f.to_math(px as f64, run.y as f64);
                assert!(contains(x, y), "pixel ({px}, {}) fails the predicates", run.y);
            }
        }
    }

    #[test]
    fn runs_match_a_full_scan() {
        let f = frame();
        let mut expected = Vec::new();
        for py in 0..300u32 {
            for px in 0..300u32 {
                let (x, y) = f.to_math(px as f64, py as f64);
                if contains(x, y) {
                    expected.push((px, py));
                }
            }
        }

        let mut got: Vec<(u32, u32)> = filled_runs(&f, 300, 300)
            .into_iter()
            .flat_map(|r| (r.x..r.x + r.len).map(move |px| (px, r.y)))
            .collect();
        got.sort_by_key(|&(px, py)| (px, py));
        expected.sort_by_key(|&(px, py)| (px, py));
        assert_eq!(got, expected);
    }

    #[test]
    fn center_pixel_is_filled() {
        let runs = filled_runs(&frame(), 300, 300);
        assert!(runs.iter().any(|r| r.y == 150 && r.x <= 150 && 150 < r.x + r.len));
    }

    #[test]
    fn tiny_surface_clips_the_scan() {
        // The disk is larger than the surface; runs never leave it.
        let f = MathFrame::centered(Viewport::new(20.0, 10.0), SCALE);
        for r in filled_runs(&f, 20, 10) {
            assert!(r.y < 10);
            assert!(r.x + r.len <= 20);
        }
    }
}

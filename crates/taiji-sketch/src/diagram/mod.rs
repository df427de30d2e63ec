//! Geometric diagram renderer.
//!
//! Four figures drawn centered on the canvas, all with round caps and joins:
//! a circle, a vertical sine curve, a small highlighted circle, and the
//! composite region with its boundaries.

pub mod region;

use std::fmt;
use std::str::FromStr;

use log::debug;
use taiji_engine::canvas::{Canvas, Path};
use taiji_engine::coords::{Rect, Vec2, Viewport};
use taiji_engine::paint::Stroke;
use taiji_engine::time::FrameTime;

use crate::figures::SineCurve;
use crate::palette;
use crate::sketch::check_viewport;
use crate::{SceneError, Sketch};

use region::{MathFrame, Run, SCALE};

/// Radius of the outer circle in pixels (`12 · SCALE`).
pub const CIRCLE_RADIUS: f32 = 96.0;

const PEN_WIDTH: f32 = 3.0;

/// Curve drawn by the `sine` diagram.
pub const SINE: SineCurve = SineCurve::new(30.0, 40.0, 100, 2);

/// The region's cut, `x = 3·sin(y/4)` at `SCALE`.
pub const COMPOSITE_CURVE: SineCurve = SineCurve::new(24.0, 32.0, 96, 2);

const SMALL_CIRCLE_OFFSET: Vec2 = Vec2::new(-30.0, -56.0);
const SMALL_CIRCLE_RADIUS: f32 = 20.0;

/// The excluded disk `(3, −7)`, radius 2, in pixels.
const HOLE_OFFSET: Vec2 = Vec2::new(24.0, 56.0);
const HOLE_RADIUS: f32 = 16.0;

/// Which figure to draw.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DiagramKind {
    Circle,
    Sine,
    SmallCircle,
    Composite,
}

impl DiagramKind {
    pub const ALL: [DiagramKind; 4] = [
        DiagramKind::Circle,
        DiagramKind::Sine,
        DiagramKind::SmallCircle,
        DiagramKind::Composite,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DiagramKind::Circle => "circle",
            DiagramKind::Sine => "sine",
            DiagramKind::SmallCircle => "smallcircle",
            DiagramKind::Composite => "composite",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DiagramKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "circle" => Ok(DiagramKind::Circle),
            "sine" => Ok(DiagramKind::Sine),
            "smallcircle" | "small_circle" | "small-circle" => Ok(DiagramKind::SmallCircle),
            "composite" => Ok(DiagramKind::Composite),
            other => Err(SceneError::InvalidConfig(format!("unknown diagram kind '{other}'"))),
        }
    }
}

/// Clears `canvas` and draws `kind` centered on it.
///
/// Deterministic: the same canvas size and kind always issue the same
/// drawing calls.
pub fn render(canvas: &mut dyn Canvas, kind: DiagramKind) {
    let viewport = canvas.viewport();
    let runs = match kind {
        DiagramKind::Composite => composite_runs(viewport),
        _ => Vec::new(),
    };
    draw(canvas, kind, &runs);
}

fn composite_runs(viewport: Viewport) -> Vec<Run> {
    let frame = MathFrame::centered(viewport, SCALE);
    region::filled_runs(&frame, viewport.width.ceil() as u32, viewport.height.ceil() as u32)
}

fn draw(canvas: &mut dyn Canvas, kind: DiagramKind, runs: &[Run]) {
    canvas.clear();
    let center = canvas.viewport().center();
    let pen = Stroke::round(PEN_WIDTH, palette::accent());

    match kind {
        DiagramKind::Circle => {
            canvas.stroke_path(&Path::circle(center, CIRCLE_RADIUS), &pen);
        }
        DiagramKind::Sine => {
            canvas.stroke_path(&SINE.path_y_up(center), &pen);
        }
        DiagramKind::SmallCircle => {
            let dot = Path::circle(center + SMALL_CIRCLE_OFFSET, SMALL_CIRCLE_RADIUS);
            canvas.fill_path(&dot, palette::accent_alpha(palette::WASH_ALPHA));
            canvas.stroke_path(&dot, &pen);
        }
        DiagramKind::Composite => {
            let wash = palette::accent_alpha(palette::WASH_ALPHA);
            for run in runs {
                canvas.fill_rect(Rect::new(run.x as f32, run.y as f32, run.len as f32, 1.0), wash);
            }

            canvas.stroke_path(&Path::circle(center, CIRCLE_RADIUS), &pen);
            canvas.stroke_path(
                &COMPOSITE_CURVE.path_y_up(center),
                &Stroke::round(4.0, palette::deep()),
            );
            canvas.stroke_path(
                &Path::circle(center + HOLE_OFFSET, HOLE_RADIUS),
                &Stroke::round(2.0, palette::accent()),
            );
        }
    }
}

/// A diagram bound to a viewport, caching the composite fill between frames.
#[derive(Debug, Clone)]
pub struct Diagram {
    kind: DiagramKind,
    viewport: Viewport,
    runs: Vec<Run>,
}

impl Diagram {
    /// Fails with `EmptySurface` when the viewport has no area.
    pub fn new(kind: DiagramKind, viewport: Viewport) -> Result<Self, SceneError> {
        check_viewport(viewport)?;
        let mut d = Self { kind, viewport, runs: Vec::new() };
        d.rebuild();
        Ok(d)
    }

    #[inline]
    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Draws onto `canvas`; a canvas of another size gets a fresh fill scan.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        if canvas.viewport() == self.viewport {
            draw(canvas, self.kind, &self.runs);
        } else {
            render(canvas, self.kind);
        }
    }

    fn rebuild(&mut self) {
        self.runs = match self.kind {
            DiagramKind::Composite => composite_runs(self.viewport),
            _ => Vec::new(),
        };
        debug!("diagram {} laid out for {}x{}", self.kind, self.viewport.width, self.viewport.height);
    }
}

impl Sketch for Diagram {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        check_viewport(viewport)?;
        self.viewport = viewport;
        self.rebuild();
        Ok(())
    }

    fn frame(&mut self, canvas: &mut dyn Canvas, _time: &FrameTime) {
        self.render(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taiji_engine::canvas::{PathEl, Pixmap};
    use taiji_engine::paint::Color;
    use taiji_engine::scene::{DrawCmd, DrawList};

    fn recorded(kind: DiagramKind) -> DrawList {
        let mut dl = DrawList::new(Viewport::new(400.0, 300.0));
        render(&mut dl, kind);
        dl
    }

    // ── kinds ─────────────────────────────────────────────────────────────

    #[test]
    fn kinds_parse_from_names() {
        for kind in DiagramKind::ALL {
            assert_eq!(kind.name().parse::<DiagramKind>(), Ok(kind));
        }
        assert_eq!("small_circle".parse::<DiagramKind>(), Ok(DiagramKind::SmallCircle));
        assert!("hexagon".parse::<DiagramKind>().is_err());
    }

    #[test]
    fn empty_viewport_is_rejected() {
        assert!(matches!(
            Diagram::new(DiagramKind::Circle, Viewport::new(0.0, 0.0)),
            Err(SceneError::EmptySurface { .. })
        ));
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn every_kind_starts_with_a_full_clear() {
        for kind in DiagramKind::ALL {
            let dl = recorded(kind);
            assert_eq!(dl.items()[0], DrawCmd::Clear(Rect::new(0.0, 0.0, 400.0, 300.0)));
        }
    }

    #[test]
    fn circle_strokes_radius_96_with_round_pen() {
        let dl = recorded(DiagramKind::Circle);
        let (path, stroke) = dl.strokes().next().unwrap();
        assert_eq!(stroke.width, 3.0);
        assert_eq!(stroke.color, palette::accent());
        assert_eq!(*stroke, Stroke::round(3.0, palette::accent()));
        let b = path.bounds().unwrap();
        assert!((b.center() - Vec2::new(200.0, 150.0)).length() < 0.05);
        assert!((b.size.x - 192.0).abs() < 0.1);
        assert!((b.size.y - 192.0).abs() < 0.1);
    }

    #[test]
    fn sine_is_one_open_path_of_101_points() {
        let dl = recorded(DiagramKind::Sine);
        let (path, _) = dl.strokes().next().unwrap();
        let els = path.elements();
        assert_eq!(els.len(), 101);
        assert!(matches!(els[0], PathEl::MoveTo(_)));
        assert!(els[1..].iter().all(|e| matches!(e, PathEl::LineTo(_))));
        // y = 0 is sample 50 and lands on the center.
        assert_eq!(els[50], PathEl::LineTo(Vec2::new(200.0, 150.0).into()));
    }

    #[test]
    fn small_circle_fills_then_strokes() {
        let dl = recorded(DiagramKind::SmallCircle);
        let tail = dl.since_last_clear();
        assert_eq!(tail.len(), 2);
        match (&tail[0], &tail[1]) {
            (DrawCmd::FillPath { path, color }, DrawCmd::StrokePath { path: stroked, .. }) => {
                assert_eq!(path, stroked);
                assert_eq!(*color, Color::rgba(77, 159, 255, 0.3));
                assert_eq!(*path, Path::circle(Vec2::new(170.0, 94.0), 20.0));
            }
            other => panic!("unexpected commands {other:?}"),
        }
    }

    #[test]
    fn composite_fills_before_its_three_boundaries() {
        let dl = recorded(DiagramKind::Composite);
        let tail = dl.since_last_clear();
        let first_stroke = tail.iter().position(|c| matches!(c, DrawCmd::StrokePath { .. })).unwrap();
        assert!(first_stroke > 0);
        assert!(tail[..first_stroke].iter().all(|c| matches!(c, DrawCmd::FillRect { .. })));
        assert_eq!(tail.len() - first_stroke, 3);

        let widths: Vec<f32> = dl.strokes().map(|(_, s)| s.width).collect();
        assert_eq!(widths, vec![3.0, 4.0, 2.0]);
    }

    #[test]
    fn composite_fill_rects_are_single_rows() {
        let dl = recorded(DiagramKind::Composite);
        for (rect, color) in dl.rect_fills() {
            assert_eq!(rect.size.y, 1.0);
            assert_eq!(rect.origin.x.fract(), 0.0);
            assert_eq!(color, Color::rgba(77, 159, 255, 0.3));
        }
    }

    #[test]
    fn rendering_twice_is_idempotent() {
        let d = Diagram::new(DiagramKind::Composite, Viewport::new(240.0, 240.0)).unwrap();
        let mut a = Pixmap::new(240, 240).unwrap();
        d.render(&mut a);
        let once = a.pixels().to_vec();
        d.render(&mut a);
        assert_eq!(a.pixels(), &once[..]);
    }

    #[test]
    fn cached_fill_matches_fresh_render() {
        let d = Diagram::new(DiagramKind::Composite, Viewport::new(400.0, 300.0)).unwrap();
        let mut cached = DrawList::new(Viewport::new(400.0, 300.0));
        d.render(&mut cached);
        assert_eq!(cached.items(), recorded(DiagramKind::Composite).items());
    }

    #[test]
    fn resize_rejects_empty_viewport() {
        let mut d = Diagram::new(DiagramKind::Sine, Viewport::new(10.0, 10.0)).unwrap();
        assert!(d.resize(Viewport::new(10.0, 0.0)).is_err());
        assert_eq!(d.viewport(), Viewport::new(10.0, 10.0));
    }
}

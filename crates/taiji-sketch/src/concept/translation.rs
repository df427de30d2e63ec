use taiji_engine::canvas::{Canvas, Path};
use taiji_engine::coords::{Rect, Transform, Vec2, Viewport};
use taiji_engine::paint::{Color, Stroke};
use taiji_engine::time::FrameTime;

use super::stroke_grid;
use crate::figures::SineCurve;
use crate::palette;
use crate::sketch::check_viewport;
use crate::{SceneError, Sketch};

pub const GRID_SPACING: f32 = 30.0;
pub const AXIS_LENGTH: f32 = 60.0;
pub const ANGLE_STEP: f32 = 0.01;

const MODEL_RADIUS: f32 = 80.0;
const MODEL_CURVE: SineCurve = SineCurve::new(25.0, 35.0, 80, 2);
const MODEL_DOT_RADIUS: f32 = 15.0;
const MODEL_DOT_OFFSET: f32 = 40.0;

/// Dark 3D viewport with an axis gizmo and a turning wireframe emblem.
#[derive(Debug, Clone)]
pub struct Translation {
    angle: f32,
}

impl Translation {
    pub fn new(viewport: Viewport) -> Result<Self, SceneError> {
        check_viewport(viewport)?;
        Ok(Self { angle: 0.0 })
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Axis endpoints from `center`: X right, Y up, Z towards the lower left.
    pub fn axes(center: Vec2) -> [(Vec2, Color); 3] {
        [
            (center + Vec2::new(AXIS_LENGTH, 0.0), palette::axis_x()),
            (center + Vec2::new(0.0, -AXIS_LENGTH), palette::axis_y()),
            (center + Vec2::new(-AXIS_LENGTH, AXIS_LENGTH) * 0.5, palette::deep()),
        ]
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let vp = canvas.viewport();
        canvas.fill_rect(Rect::from_viewport(vp), palette::viewport_dark());
        stroke_grid(canvas, GRID_SPACING, &Stroke::new(1.0, Color::rgba(255, 255, 255, 0.1)));

        let center = vp.center();
        for (end, color) in Self::axes(center) {
            canvas.stroke_path(&Path::line(center, end), &Stroke::new(3.0, color));
        }

        let t = Transform::translate(center).rotated(self.angle);
        let wire = Stroke::new(2.0, Color::white());
        canvas.stroke_path(&Path::circle(Vec2::zero(), MODEL_RADIUS).transformed(&t), &wire);
        canvas.stroke_path(
            &MODEL_CURVE.path_local().transformed(&t),
            &wire.with_color(palette::accent()),
        );
        for y in [-MODEL_DOT_OFFSET, MODEL_DOT_OFFSET] {
            let dot = Path::circle(Vec2::new(0.0, y), MODEL_DOT_RADIUS);
            canvas.stroke_path(&dot.transformed(&t), &wire);
        }
    }

    /// Draws, then turns by [`ANGLE_STEP`].
    pub fn draw_and_turn(&mut self, canvas: &mut dyn Canvas) {
        self.draw(canvas);
        self.angle += ANGLE_STEP;
    }
}

impl Sketch for Translation {
    fn name(&self) -> &str {
        "translation"
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        check_viewport(viewport)
    }

    fn frame(&mut self, canvas: &mut dyn Canvas, _time: &FrameTime) {
        self.draw_and_turn(canvas);
    }
}

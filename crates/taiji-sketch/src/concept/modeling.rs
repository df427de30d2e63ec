use taiji_engine::canvas::{Canvas, Path};
use taiji_engine::coords::{Vec2, Viewport};
use taiji_engine::paint::Stroke;
use taiji_engine::time::FrameTime;

use super::stroke_grid;
use crate::figures::SineCurve;
use crate::palette;
use crate::sketch::check_viewport;
use crate::{SceneError, Sketch};

pub const GRID_SPACING: f32 = 40.0;
pub const RADIUS: f32 = 120.0;

/// `x = 30·sin(y/40)` across the full circle.
pub const CURVE: SineCurve = SineCurve::new(30.0, 40.0, 120, 2);

const DOT_RADIUS: f32 = 20.0;

/// Dot centers relative to the canvas center, yang first.
pub const DOTS: [Vec2; 2] = [Vec2::new(-30.0, -70.0), Vec2::new(30.0, 70.0)];

/// Static plate: the emblem's equations drawn over a faint grid.
#[derive(Debug, Clone)]
pub struct Modeling;

impl Modeling {
    pub fn new(viewport: Viewport) -> Result<Self, SceneError> {
        check_viewport(viewport)?;
        Ok(Self)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.clear();
        stroke_grid(canvas, GRID_SPACING, &Stroke::new(1.0, palette::deep_alpha(0.1)));

        let center = canvas.viewport().center();
        let pen = Stroke::new(3.0, palette::deep());
        canvas.stroke_path(&Path::circle(center, RADIUS), &pen);
        canvas.stroke_path(&CURVE.path_y_up(center), &Stroke::new(3.0, palette::accent()));

        for offset in DOTS {
            let dot = Path::circle(center + offset, DOT_RADIUS);
            canvas.fill_path(&dot, palette::deep_alpha(palette::WASH_ALPHA));
            canvas.stroke_path(&dot, &pen);
        }
    }
}

impl Sketch for Modeling {
    fn name(&self) -> &str {
        "modeling"
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        check_viewport(viewport)
    }

    fn frame(&mut self, canvas: &mut dyn Canvas, _time: &FrameTime) {
        self.draw(canvas);
    }
}

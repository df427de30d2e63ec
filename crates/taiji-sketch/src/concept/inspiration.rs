use core::f32::consts::PI;

use taiji_engine::canvas::{Canvas, Path};
use taiji_engine::coords::{Transform, Vec2, Viewport};
use taiji_engine::paint::Color;
use taiji_engine::time::FrameTime;

use crate::sketch::check_viewport;
use crate::{SceneError, Sketch};

/// Emblem radius in pixels.
pub const RADIUS: f32 = 120.0;

/// Radians added after every frame.
pub const ROTATION_STEP: f32 = 0.005;

/// The filled taiji emblem, slowly turning about the canvas center.
#[derive(Debug, Clone)]
pub struct Inspiration {
    rotation: f32,
}

impl Inspiration {
    pub fn new(viewport: Viewport) -> Result<Self, SceneError> {
        check_viewport(viewport)?;
        Ok(Self { rotation: 0.0 })
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Draws the emblem at the current rotation.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.clear();

        let t = Transform::translate(canvas.viewport().center()).rotated(self.rotation);
        let r = RADIUS;
        let half = r / 2.0;
        let dot = r / 6.0;

        let mut left = Path::new();
        left.arc(Vec2::zero(), r, PI / 2.0, PI * 1.5);

        let layers = [
            (Path::circle(Vec2::zero(), r), Color::white()),
            (left, Color::black()),
            (Path::circle(Vec2::new(0.0, -half), half), Color::black()),
            (Path::circle(Vec2::new(0.0, half), half), Color::white()),
            (Path::circle(Vec2::new(0.0, -half), dot), Color::white()),
            (Path::circle(Vec2::new(0.0, half), dot), Color::black()),
        ];
        for (path, color) in &layers {
            canvas.fill_path(&path.transformed(&t), *color);
        }
    }

    /// Draws, then turns by [`ROTATION_STEP`].
    pub fn draw_and_turn(&mut self, canvas: &mut dyn Canvas) {
        self.draw(canvas);
        self.rotation += ROTATION_STEP;
    }
}

impl Sketch for Inspiration {
    fn name(&self) -> &str {
        "inspiration"
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        check_viewport(viewport)
    }

    fn frame(&mut self, canvas: &mut dyn Canvas, _time: &FrameTime) {
        self.draw_and_turn(canvas);
    }
}

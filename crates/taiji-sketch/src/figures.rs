//! Shared parametric figures.

use taiji_engine::canvas::Path;
use taiji_engine::coords::Vec2;

/// `amplitude · sin(y / divisor)`.
#[inline]
pub fn sine_offset(amplitude: f32, divisor: f32, y: f32) -> f32 {
    amplitude * (y / divisor).sin()
}

/// Vertical sine curve `x = amplitude · sin(y / divisor)` sampled at integer
/// `y = -half_span, -half_span + step, …, half_span`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SineCurve {
    pub amplitude: f32,
    pub divisor: f32,
    pub half_span: i32,
    pub step: i32,
}

impl SineCurve {
    pub const fn new(amplitude: f32, divisor: f32, half_span: i32, step: i32) -> Self {
        Self { amplitude, divisor, half_span, step }
    }

    /// Samples as `(x, y)` in the curve's own y-up frame.
    pub fn samples(&self) -> Vec<Vec2> {
        (-self.half_span..=self.half_span)
            .step_by(self.step.max(1) as usize)
            .map(|y| {
                let y = y as f32;
                Vec2::new(sine_offset(self.amplitude, self.divisor, y), y)
            })
            .collect()
    }

    /// Open path with `y` pointing up on screen: `(origin.x + x, origin.y − y)`.
    pub fn path_y_up(&self, origin: Vec2) -> Path {
        Path::polyline(self.samples().into_iter().map(|s| Vec2::new(origin.x + s.x, origin.y - s.y)))
    }

    /// Open path in screen orientation: `(x, y)` as sampled, untranslated.
    pub fn path_local(&self) -> Path {
        Path::polyline(self.samples())
    }
}

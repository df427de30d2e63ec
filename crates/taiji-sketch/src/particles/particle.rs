use taiji_engine::coords::{Rect, Vec2};
use taiji_engine::paint::Color;

use super::random::UnitRandom;
use crate::palette;

/// A drifting point.
///
/// Velocity is in pixels per frame; `size` is the drawn disk radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub opacity: f32,
}

impl Particle {
    pub const MIN_SIZE: f32 = 1.0;
    pub const MAX_SPEED: f32 = 0.25;
    pub const MIN_OPACITY: f32 = 0.2;

    pub fn new(position: Vec2, velocity: Vec2, size: f32, opacity: f32) -> Self {
        Self { position, velocity, size, opacity }
    }

    /// Fresh particle inside `bounds`.
    pub fn spawn(bounds: Rect, random: &mut dyn UnitRandom) -> Self {
        let mut p = Self::new(Vec2::zero(), Vec2::zero(), Self::MIN_SIZE, Self::MIN_OPACITY);
        p.reset(bounds, random);
        p
    }

    /// Reassigns every attribute. Draw order is fixed: x, y, size, speed x,
    /// speed y, opacity.
    pub fn reset(&mut self, bounds: Rect, random: &mut dyn UnitRandom) {
        let x = bounds.origin.x + random.next_unit() * bounds.size.x;
        let y = bounds.origin.y + random.next_unit() * bounds.size.y;
        self.position = Vec2::new(x, y);
        self.size = random.next_unit() * 2.0 + Self::MIN_SIZE;
        let vx = (random.next_unit() - 0.5) * 0.5;
        let vy = (random.next_unit() - 0.5) * 0.5;
        self.velocity = Vec2::new(vx, vy);
        self.opacity = random.next_unit() * 0.5 + Self::MIN_OPACITY;
    }

    /// Moves one frame; a particle that leaves `bounds` on either axis is
    /// reset. Returns whether a reset happened.
    pub fn advance(&mut self, bounds: Rect, random: &mut dyn UnitRandom) -> bool {
        self.position += self.velocity;
        if bounds.contains(self.position) {
            return false;
        }
        self.reset(bounds, random);
        true
    }

    #[inline]
    pub fn color(&self) -> Color {
        palette::accent_alpha(self.opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::random::{RandomSource, ScriptedRandom};

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn spawn_follows_the_draw_order() {
        let mut r = ScriptedRandom::new([0.25, 0.5, 0.75, 0.0, 0.9, 0.4]);
        let p = Particle::spawn(bounds(), &mut r);
        assert_eq!(p.position, Vec2::new(200.0, 300.0));
        assert_eq!(p.size, 2.5);
        assert_eq!(p.velocity.x, -0.25);
        assert!((p.velocity.y - 0.2).abs() < 1e-6);
        assert!((p.opacity - 0.4).abs() < 1e-6);
        assert_eq!(r.draws(), 6);
    }

    #[test]
    fn attribute_ranges_hold() {
        let mut r = RandomSource::seeded(42);
        for _ in 0..2_000 {
            let p = Particle::spawn(bounds(), &mut r);
            assert!(bounds().contains(p.position));
            assert!((1.0..3.0).contains(&p.size));
            assert!(p.velocity.x.abs() <= Particle::MAX_SPEED);
            assert!(p.velocity.y.abs() <= Particle::MAX_SPEED);
            assert!((0.2..0.7).contains(&p.opacity));
        }
    }

    #[test]
    fn moving_inside_bounds_keeps_attributes() {
        let mut p = Particle::new(Vec2::new(10.0, 10.0), Vec2::new(0.2, -0.1), 2.0, 0.5);
        let mut r = ScriptedRandom::constant(0.5);
        assert!(!p.advance(bounds(), &mut r));
        assert!((p.position - Vec2::new(10.2, 9.9)).length() < 1e-5);
        assert_eq!(r.draws(), 0);
    }

    #[test]
    fn leaving_bounds_resets_inside() {
        let mut p = Particle::new(Vec2::new(799.9, 10.0), Vec2::new(0.2, 0.0), 2.0, 0.5);
        let mut r = ScriptedRandom::constant(0.5);
        assert!(p.advance(bounds(), &mut r));
        assert_eq!(p.position, Vec2::new(400.0, 300.0));
        assert_eq!(p.velocity, Vec2::zero());
        assert_eq!(p.size, 2.0);
        assert!((p.opacity - 0.45).abs() < 1e-6);
    }

    #[test]
    fn reaching_the_far_edge_counts_as_outside() {
        let mut p = Particle::new(Vec2::new(10.0, 599.75), Vec2::new(0.0, 0.25), 2.0, 0.5);
        let mut r = ScriptedRandom::constant(0.1);
        assert!(p.advance(bounds(), &mut r));
        assert!(bounds().contains(p.position));
    }

    #[test]
    fn negative_coordinates_count_as_outside() {
        let mut p = Particle::new(Vec2::new(0.1, 300.0), Vec2::new(-0.2, 0.0), 2.0, 0.5);
        let mut r = ScriptedRandom::constant(0.3);
        assert!(p.advance(bounds(), &mut r));
    }
}

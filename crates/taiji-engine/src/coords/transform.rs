use vello_cpu::kurbo::Affine;

use super::Vec2;

/// Similarity transform: uniform scale, then rotation, then translation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translation: Vec2,
    /// Radians, clockwise on screen (y down).
    pub rotation: f32,
    pub scale: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec2::zero(),
        rotation: 0.0,
        scale: 1.0,
    };

    #[inline]
    pub const fn translate(offset: Vec2) -> Self {
        Self { translation: offset, rotation: 0.0, scale: 1.0 }
    }

    /// Builder-style rotation applied before the existing translation.
    #[inline]
    pub fn rotated(mut self, angle: f32) -> Self {
        self.rotation += angle;
        self
    }

    #[inline]
    pub fn scaled(mut self, factor: f32) -> Self {
        self.scale *= factor;
        self
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        (p * self.scale).rotated(self.rotation) + self.translation
    }

    /// Same mapping as [`Transform::apply`], for transforming curves.
    pub fn to_affine(&self) -> Affine {
        Affine::translate((self.translation.x as f64, self.translation.y as f64))
            * Affine::rotate(self.rotation as f64)
            * Affine::scale(self.scale as f64)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn identity_leaves_points_alone() {
        let p = Vec2::new(3.0, -7.0);
        assert_eq!(Transform::IDENTITY.apply(p), p);
    }

    #[test]
    fn rotation_happens_before_translation() {
        let t = Transform::translate(Vec2::new(100.0, 50.0)).rotated(FRAC_PI_2);
        assert!(close(t.apply(Vec2::new(10.0, 0.0)), Vec2::new(100.0, 60.0)));
    }

    #[test]
    fn affine_agrees_with_apply() {
        let t = Transform::translate(Vec2::new(100.0, 50.0)).rotated(0.7).scaled(1.5);
        let p = Vec2::new(12.0, -4.0);
        let via_affine = Vec2::from(t.to_affine() * vello_cpu::kurbo::Point::from(p));
        assert!(close(via_affine, t.apply(p)));
    }
}

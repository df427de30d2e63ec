use super::Vec2;

/// Surface size in logical pixels.
///
/// Sketches treat this as the drawing bounds: `[0, width) × [0, height)`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Size rounded to whole pixels; `None` when either side rounds to zero,
    /// as for a minimized window.
    pub fn pixel_size(self) -> Option<(u32, u32)> {
        if !self.is_valid() {
            return None;
        }
        let (w, h) = (self.width.round() as u32, self.height.round() as u32);
        (w > 0 && h > 0).then_some((w, h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_size_rounds_to_whole_pixels() {
        assert_eq!(Viewport::new(799.6, 600.2).pixel_size(), Some((800, 600)));
    }

    #[test]
    fn minimized_size_has_no_pixels() {
        assert_eq!(Viewport::new(0.0, 0.0).pixel_size(), None);
        assert_eq!(Viewport::new(800.0, 0.3).pixel_size(), None);
        assert_eq!(Viewport::new(f32::NAN, 10.0).pixel_size(), None);
    }
}

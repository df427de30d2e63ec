/// Premultiplied RGBA color with sRGB-encoded channels in `[0, 1]`.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Compositing happens on the encoded values, the way 2D canvases blend.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::from_premul(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::from_premul(1.0, 1.0, 1.0, 1.0)
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    ///
    /// This is the preferred constructor for colors written as hex literals.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from straight RGB bytes and a fractional
    /// alpha, the shape of a CSS `rgba(77, 159, 255, 0.3)` literal.
    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, alpha)
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Same hue with a new straight alpha.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        let (r, g, b, _) = self.to_straight();
        Self::from_straight(r, g, b, alpha)
    }

    /// Porter-Duff source-over: `self` drawn on top of `dst`.
    #[inline]
    pub fn over(self, dst: Color) -> Color {
        let k = 1.0 - self.a;
        Color::from_premul(
            self.r + dst.r * k,
            self.g + dst.g * k,
            self.b + dst.b * k,
            self.a + dst.a * k,
        )
    }

    /// Clamps all channels to [0, 1] and enforces premultiplication.
    #[inline]
    pub fn clamped(self) -> Self {
        let a = self.a.clamp(0.0, 1.0);

        // Clamp premultiplied rgb so it cannot exceed alpha.
        let r = self.r.clamp(0.0, a);
        let g = self.g.clamp(0.0, a);
        let b = self.b.clamp(0.0, a);

        Self { r, g, b, a }
    }

    /// Premultiplied 8-bit channels, the layout uploaded to the GPU.
    #[inline]
    pub fn to_premul_u8(self) -> [u8; 4] {
        let c = self.clamped();
        [to_u8(c.r), to_u8(c.g), to_u8(c.b), to_u8(c.a)]
    }

    /// Reads premultiplied 8-bit channels, the layout rasterizers write.
    #[inline]
    pub fn from_premul_u8([r, g, b, a]: [u8; 4]) -> Self {
        Self::from_premul(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Straight-alpha 8-bit channels, the layout image encoders expect.
    #[inline]
    pub fn to_straight_u8(self) -> [u8; 4] {
        let (r, g, b, a) = self.clamped().to_straight();
        [to_u8(r), to_u8(g), to_u8(b), to_u8(a)]
    }
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn rgba_literal_is_premultiplied() {
        let c = Color::rgba(77, 159, 255, 0.3);
        assert!(close(c.a, 0.3));
        assert!(close(c.b, 0.3));
        assert!(close(c.r, 77.0 / 255.0 * 0.3));
    }

    #[test]
    fn with_alpha_keeps_hue() {
        let c = Color::from_srgb_u8(0, 102, 204, 255).with_alpha(0.5);
        let (r, g, b, a) = c.to_straight();
        assert!(close(r, 0.0));
        assert!(close(g, 102.0 / 255.0));
        assert!(close(b, 204.0 / 255.0));
        assert!(close(a, 0.5));
    }

    #[test]
    fn opaque_over_replaces_destination() {
        let out = Color::white().over(Color::black());
        assert_eq!(out, Color::white());
    }

    #[test]
    fn translucent_over_transparent_keeps_source() {
        let src = Color::rgba(77, 159, 255, 0.3);
        assert_eq!(src.over(Color::transparent()), src);
    }

    #[test]
    fn straight_u8_round_trips_opaque_bytes() {
        assert_eq!(Color::from_srgb_u8(77, 159, 255, 255).to_straight_u8(), [77, 159, 255, 255]);
    }

    #[test]
    fn premul_bytes_round_trip() {
        let c = Color::from_premul_u8([30, 60, 90, 128]);
        assert_eq!(c.to_premul_u8(), [30, 60, 90, 128]);
        assert!(close(c.a, 128.0 / 255.0));
    }

    #[test]
    fn transparent_straight_is_zero() {
        assert_eq!(Color::transparent().to_straight(), (0.0, 0.0, 0.0, 0.0));
    }
}

//! Named colors shared by the sketches.

use taiji_engine::paint::Color;

/// `#4d9fff`, the accent blue.
pub fn accent() -> Color {
    Color::from_srgb_u8(0x4d, 0x9f, 0xff, 0xff)
}

/// `#0066cc`, the deep blue.
pub fn deep() -> Color {
    Color::from_srgb_u8(0x00, 0x66, 0xcc, 0xff)
}

/// Accent blue at `alpha`, e.g. `rgba(77, 159, 255, 0.3)`.
pub fn accent_alpha(alpha: f32) -> Color {
    Color::rgba(77, 159, 255, alpha)
}

/// Deep blue at `alpha`.
pub fn deep_alpha(alpha: f32) -> Color {
    Color::rgba(0, 102, 204, alpha)
}

/// `#2b2b2b`, the 3D viewport background.
pub fn viewport_dark() -> Color {
    Color::from_srgb_u8(0x2b, 0x2b, 0x2b, 0xff)
}

pub fn axis_x() -> Color {
    Color::from_srgb_u8(0xff, 0x00, 0x00, 0xff)
}

pub fn axis_y() -> Color {
    Color::from_srgb_u8(0x00, 0xff, 0x00, 0xff)
}

/// Translucent fill used for highlighted regions and marker dots.
pub const WASH_ALPHA: f32 = 0.3;

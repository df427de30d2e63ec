use vello_cpu::kurbo::{self, Cap, Join};

use super::Color;

/// Shape drawn at the open ends of a stroked subpath.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LineCap {
    /// Ends flush with the endpoint.
    #[default]
    Butt,
    /// Half-disc of radius `width / 2` around the endpoint.
    Round,
}

/// Shape drawn where two segments of a stroked subpath meet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LineJoin {
    /// Disc of radius `width / 2` around the vertex.
    Round,
    /// Triangle closing the outer corner.
    #[default]
    Bevel,
}

/// Stroke style: width in logical pixels, color, caps and joins.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self {
            width,
            color,
            cap: LineCap::default(),
            join: LineJoin::default(),
        }
    }

    /// Round caps and round joins, the pen used for curves.
    #[inline]
    pub fn round(width: f32, color: Color) -> Self {
        Self {
            width,
            color,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }

    #[inline]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// True when the stroke can leave a mark.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.width.is_finite() && self.color.a > 0.0
    }

    /// Geometry part of the style, as the rasterizer takes it.
    pub fn to_kurbo(&self) -> kurbo::Stroke {
        let cap = match self.cap {
            LineCap::Butt => Cap::Butt,
            LineCap::Round => Cap::Round,
        };
        let join = match self.join {
            LineJoin::Round => Join::Round,
            LineJoin::Bevel => Join::Bevel,
        };
        kurbo::Stroke::new(self.width as f64).with_caps(cap).with_join(join)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kurbo_stroke_keeps_width_caps_and_joins() {
        let k = Stroke::round(3.0, Color::white()).to_kurbo();
        assert_eq!(k.width, 3.0);
        assert_eq!(k.start_cap, Cap::Round);
        assert_eq!(k.end_cap, Cap::Round);
        assert_eq!(k.join, Join::Round);

        let k = Stroke::new(1.0, Color::white()).to_kurbo();
        assert_eq!(k.start_cap, Cap::Butt);
        assert_eq!(k.join, Join::Bevel);
    }
}

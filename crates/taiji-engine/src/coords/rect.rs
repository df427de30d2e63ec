use super::{Vec2, Viewport};

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

/// Pixel-aligned half-open span `[x0, x1) × [y0, y1)` on a raster surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PixelBounds {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelBounds {
    #[inline]
    pub fn width(self) -> u32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(self) -> u32 {
        self.y1 - self.y0
    }
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// The full surface `[0, width) × [0, height)`.
    #[inline]
    pub const fn from_viewport(viewport: Viewport) -> Self {
        Self::new(0.0, 0.0, viewport.width, viewport.height)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Grows the rectangle by `by` on every side.
    #[inline]
    pub fn inflate(self, by: f32) -> Self {
        Rect::new(
            self.origin.x - by,
            self.origin.y - by,
            self.size.x + 2.0 * by,
            self.size.y + 2.0 * by,
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = (a.origin.x + a.size.x).min(b.origin.x + b.size.x);
        let y1 = (a.origin.y + a.size.y).min(b.origin.y + b.size.y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }

    /// Pixels touched by this rectangle on a `width × height` surface.
    ///
    /// Edges are rounded outward; `None` when nothing on the surface is touched.
    pub fn pixel_bounds(self, width: u32, height: u32) -> Option<PixelBounds> {
        let surface = Rect::new(0.0, 0.0, width as f32, height as f32);
        let r = self.intersect(surface)?;
        let x0 = r.origin.x.floor().max(0.0) as u32;
        let y0 = r.origin.y.floor().max(0.0) as u32;
        let x1 = ((r.origin.x + r.size.x).ceil() as u32).min(width);
        let y1 = ((r.origin.y + r.size.y).ceil() as u32).min(height);
        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(PixelBounds { x0, y0, x1, y1 })
        }
    }
}

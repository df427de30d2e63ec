use std::fmt;

use vello_cpu::kurbo::{self, Affine};
use vello_cpu::peniko::{self, Fill};
use vello_cpu::RenderContext;

use crate::coords::{PixelBounds, Rect, Viewport};
use crate::paint::{Color, Stroke};

use super::{Canvas, CanvasError, Path};

/// CPU raster surface: one premultiplied [`Color`] per pixel, row-major.
///
/// Shapes are rasterized by `vello_cpu` into a scratch region sized to the
/// shape's pixel bounds, then composited source-over onto the surface.
/// One pixmap pixel is one logical pixel; scaling to the display happens
/// when the pixmap is presented.
pub struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    ctx: Option<RenderContext>,
    scratch: Option<vello_cpu::Pixmap>,
}

impl Pixmap {
    /// Creates a transparent pixmap.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        check_size(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![Color::transparent(); width as usize * height as usize],
            ctx: None,
            scratch: None,
        })
    }

    /// Resizes in place; contents are reset to transparent.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), CanvasError> {
        check_size(width, height)?;
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width as usize * height as usize, Color::transparent());
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixel at `(x, y)`; `None` outside the surface.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Premultiplied RGBA8 bytes, row-major, for texture upload.
    pub fn to_premul_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_premul_u8()).collect()
    }

    /// Straight-alpha RGBA8 bytes, row-major, for image encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_straight_u8()).collect()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Pixel area touched by `r` grown by `margin`.
    fn touched(&self, r: Rect, margin: f32) -> Option<PixelBounds> {
        r.inflate(margin).pixel_bounds(self.width, self.height)
    }

    /// Runs `draw` on a render context covering `area` in surface
    /// coordinates, then blends the result over the pixels.
    fn rasterize(&mut self, area: PixelBounds, draw: impl FnOnce(&mut RenderContext)) {
        // `check_size` keeps every area within u16.
        let (w, h) = (area.width() as u16, area.height() as u16);

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w && ctx.height() == h => ctx,
            _ => RenderContext::new(w, h),
        };
        ctx.reset();
        ctx.set_transform(Affine::translate((-(area.x0 as f64), -(area.y0 as f64))));
        draw(&mut ctx);
        ctx.flush();

        let mut scratch = match self.scratch.take() {
            Some(p) if p.width() == w && p.height() == h => p,
            _ => vello_cpu::Pixmap::new(w, h),
        };
        scratch.data_as_u8_slice_mut().fill(0);
        ctx.render_to_pixmap(&mut scratch);

        self.blend_region(area, scratch.data_as_u8_slice());
        self.ctx = Some(ctx);
        self.scratch = Some(scratch);
    }

    /// Source-over of premultiplied RGBA8 rows covering `area`.
    fn blend_region(&mut self, area: PixelBounds, premul: &[u8]) {
        let rows = premul.chunks_exact(area.width() as usize * 4);
        for (y, row) in (area.y0..area.y1).zip(rows) {
            for (x, px) in (area.x0..area.x1).zip(row.chunks_exact(4)) {
                if px[3] == 0 {
                    continue;
                }
                let src = Color::from_premul_u8([px[0], px[1], px[2], px[3]]);
                let i = self.index(x, y);
                self.pixels[i] = src.over(self.pixels[i]);
            }
        }
    }
}

impl fmt::Debug for Pixmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pixmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Canvas for Pixmap {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }

    /// Clears pixels whose centers fall inside `rect`.
    fn clear_rect(&mut self, rect: Rect) {
        let r = rect.normalized();
        let max = r.max();
        let x0 = (r.origin.x - 0.5).ceil().max(0.0) as u32;
        let y0 = (r.origin.y - 0.5).ceil().max(0.0) as u32;
        let x1 = ((max.x - 0.5).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((max.y - 0.5).ceil().max(0.0) as u32).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let i = self.index(x, y);
                self.pixels[i] = Color::transparent();
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let r = rect.normalized();
        let Some(area) = r.pixel_bounds(self.width, self.height) else {
            return;
        };
        let max = r.max();
        let shape = kurbo::Rect::new(r.origin.x as f64, r.origin.y as f64, max.x as f64, max.y as f64);
        self.rasterize(area, |ctx| {
            ctx.set_paint(paint(color));
            ctx.fill_rect(&shape);
        });
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let Some(extent) = path.bounds() else { return };
        let Some(area) = self.touched(extent, 1.0) else { return };
        self.rasterize(area, |ctx| {
            ctx.set_fill_rule(Fill::NonZero);
            ctx.set_paint(paint(color));
            ctx.fill_path(path.as_bez_path());
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        if !stroke.is_visible() {
            return;
        }
        let Some(extent) = path.bounds() else { return };
        let Some(area) = self.touched(extent, stroke.width * 0.5 + 1.0) else {
            return;
        };
        self.rasterize(area, |ctx| {
            ctx.set_stroke(stroke.to_kurbo());
            ctx.set_paint(paint(stroke.color));
            ctx.stroke_path(path.as_bez_path());
        });
    }
}

fn check_size(width: u32, height: u32) -> Result<(), CanvasError> {
    if width == 0 || height == 0 {
        return Err(CanvasError::EmptySurface { width, height });
    }
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(CanvasError::TooLarge { width, height });
    }
    Ok(())
}

#[inline]
fn paint(color: Color) -> peniko::Color {
    let [r, g, b, a] = color.to_straight_u8();
    peniko::Color::from_rgba8(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    fn blue() -> Color {
        Color::from_srgb_u8(77, 159, 255, 255)
    }

    fn near(a: Color, b: Color) -> bool {
        let tol = 1.5 / 255.0;
        (a.r - b.r).abs() < tol && (a.g - b.g).abs() < tol && (a.b - b.b).abs() < tol && (a.a - b.a).abs() < tol
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn zero_sized_pixmap_is_rejected() {
        assert_eq!(
            Pixmap::new(0, 10).unwrap_err(),
            CanvasError::EmptySurface { width: 0, height: 10 }
        );
    }

    #[test]
    fn oversized_pixmap_is_rejected() {
        assert_eq!(
            Pixmap::new(70_000, 10).unwrap_err(),
            CanvasError::TooLarge { width: 70_000, height: 10 }
        );
    }

    #[test]
    fn resize_resets_contents() {
        let mut p = Pixmap::new(4, 4).unwrap();
        p.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), blue());
        p.resize(8, 2).unwrap();
        assert_eq!(p.width(), 8);
        assert_eq!(p.pixels().len(), 16);
        assert!(p.pixels().iter().all(|c| *c == Color::transparent()));
    }

    // ── rects ─────────────────────────────────────────────────────────────

    #[test]
    fn aligned_fill_rect_stays_inside() {
        let mut p = Pixmap::new(10, 10).unwrap();
        p.fill_rect(Rect::new(2.0, 3.0, 4.0, 1.0), blue());
        assert!(near(p.pixel(2, 3).unwrap(), blue()));
        assert!(near(p.pixel(5, 3).unwrap(), blue()));
        assert_eq!(p.pixel(6, 3), Some(Color::transparent()));
        assert_eq!(p.pixel(2, 4), Some(Color::transparent()));
        assert_eq!(p.pixel(1, 3), Some(Color::transparent()));
    }

    #[test]
    fn half_covered_pixel_gets_half_alpha() {
        let mut p = Pixmap::new(4, 4).unwrap();
        p.fill_rect(Rect::new(1.5, 0.0, 1.0, 1.0), Color::white());
        let c = p.pixel(1, 0).unwrap();
        assert!((c.a - 0.5).abs() < 0.02, "alpha {}", c.a);
    }

    #[test]
    fn fill_rect_blends_over_existing_pixels() {
        let mut p = Pixmap::new(4, 4).unwrap();
        p.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::black());
        p.fill_rect(Rect::new(0.0, 0.0, 2.0, 4.0), Color::rgba(255, 255, 255, 0.5));
        let mixed = p.pixel(0, 0).unwrap();
        assert!((mixed.a - 1.0).abs() < 1e-6);
        assert!((mixed.r - 0.5).abs() < 0.01);
        assert!(near(p.pixel(3, 0).unwrap(), Color::black()));
    }

    #[test]
    fn clear_rect_uses_pixel_centers() {
        let mut p = Pixmap::new(6, 6).unwrap();
        p.fill_rect(Rect::new(0.0, 0.0, 6.0, 6.0), blue());
        p.clear_rect(Rect::new(0.6, 0.0, 2.0, 6.0));
        assert!(near(p.pixel(0, 0).unwrap(), blue()));
        assert_eq!(p.pixel(1, 0), Some(Color::transparent()));
        assert_eq!(p.pixel(2, 5), Some(Color::transparent()));
        assert!(near(p.pixel(3, 0).unwrap(), blue()));
    }

    #[test]
    fn clear_resets_everything() {
        let mut p = Pixmap::new(3, 3).unwrap();
        p.fill_rect(Rect::new(0.0, 0.0, 3.0, 3.0), blue());
        p.clear();
        assert!(p.pixels().iter().all(|c| *c == Color::transparent()));
    }

    // ── paths ─────────────────────────────────────────────────────────────

    #[test]
    fn filled_circle_covers_center_only() {
        let mut p = Pixmap::new(40, 40).unwrap();
        p.fill_path(&Path::circle(Vec2::new(20.0, 20.0), 10.0), blue());
        assert!(near(p.pixel(20, 20).unwrap(), blue()));
        assert_eq!(p.pixel(2, 2), Some(Color::transparent()));
        assert_eq!(p.pixel(20, 32), Some(Color::transparent()));
    }

    #[test]
    fn shapes_clipped_by_the_edge_still_draw() {
        let mut p = Pixmap::new(20, 20).unwrap();
        p.fill_path(&Path::circle(Vec2::new(0.0, 0.0), 8.0), blue());
        assert!(near(p.pixel(1, 1).unwrap(), blue()));
        assert_eq!(p.pixel(10, 10), Some(Color::transparent()));
    }

    #[test]
    fn stroked_circle_leaves_center_empty() {
        let mut p = Pixmap::new(40, 40).unwrap();
        p.stroke_path(&Path::circle(Vec2::new(20.0, 20.0), 10.0), &Stroke::new(3.0, blue()));
        assert_eq!(p.pixel(20, 20), Some(Color::transparent()));
        // (30, 20) lies on the ring.
        assert!(p.pixel(29, 19).unwrap().a > 0.5 || p.pixel(29, 20).unwrap().a > 0.5);
    }

    #[test]
    fn translucent_strokes_accumulate() {
        let mut p = Pixmap::new(10, 10).unwrap();
        let s = Stroke::new(2.0, Color::rgba(255, 255, 255, 0.5));
        let line = Path::line(Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0));
        p.stroke_path(&line, &s);
        let once = p.pixel(5, 5).unwrap().a;
        p.stroke_path(&line, &s);
        let twice = p.pixel(5, 5).unwrap().a;
        assert!((once - 0.5).abs() < 0.01, "once {once}");
        assert!((twice - 0.75).abs() < 0.01, "twice {twice}");
    }

    #[test]
    fn invisible_stroke_draws_nothing() {
        let mut p = Pixmap::new(10, 10).unwrap();
        let line = Path::line(Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0));
        p.stroke_path(&line, &Stroke::new(0.0, blue()));
        assert!(p.pixels().iter().all(|c| *c == Color::transparent()));
    }

    #[test]
    fn straight_bytes_match_pixel_count() {
        let p = Pixmap::new(3, 2).unwrap();
        assert_eq!(p.to_straight_rgba8().len(), 24);
        assert_eq!(p.to_premul_rgba8().len(), 24);
    }
}

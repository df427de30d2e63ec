use core::f32::consts::TAU;

use vello_cpu::kurbo::{self, BezPath, PathEl, Point, Shape};

use crate::coords::{Rect, Transform, Vec2};

/// Maximum distance between the cubic arc approximation and the true circle.
pub const ARC_TOLERANCE: f64 = 0.01;

/// Path builder with canvas-style semantics over a [`kurbo::BezPath`].
///
/// - An arc appended while a subpath is open is joined to it by a straight
///   segment from the current point to the arc start.
/// - A sweep of `2π` or more draws the full circle.
#[derive(Debug, Clone, Default)]
pub struct Path {
    bez: BezPath,
    current: Option<Point>,
    start: Option<Point>,
    closed: bool,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed full circle.
    pub fn circle(center: Vec2, radius: f32) -> Self {
        let mut p = Self::new();
        p.arc(center, radius, 0.0, TAU);
        p
    }

    /// Open polyline through `points`; the first point opens the subpath.
    pub fn polyline(points: impl IntoIterator<Item = Vec2>) -> Self {
        let mut p = Self::new();
        for (i, pt) in points.into_iter().enumerate() {
            if i == 0 {
                p.move_to(pt);
            } else {
                p.line_to(pt);
            }
        }
        p
    }

    /// Straight segment from `a` to `b`.
    pub fn line(a: Vec2, b: Vec2) -> Self {
        let mut p = Self::new();
        p.move_to(a).line_to(b);
        p
    }

    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        let p = Point::from(p);
        self.bez.move_to(p);
        self.current = Some(p);
        self.start = Some(p);
        self.closed = false;
        self
    }

    /// Opens a subpath at `p` when nothing is open yet.
    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        if !self.reopen() {
            return self.move_to(p);
        }
        let p = Point::from(p);
        self.bez.line_to(p);
        self.current = Some(p);
        self
    }

    /// Clockwise arc on screen (y down) from `start` to `end` radians.
    pub fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32) -> &mut Self {
        let radius = radius.max(0.0);
        let first = center + Vec2::from_polar(radius, start);
        if !self.reopen() {
            self.move_to(first);
        } else if self.current != Some(Point::from(first)) {
            self.line_to(first);
        }

        let sweep = clockwise_sweep(start, end);
        if sweep <= 0.0 || radius <= 0.0 {
            return self;
        }
        let arc = kurbo::Arc {
            center: center.into(),
            radii: kurbo::Vec2::new(radius as f64, radius as f64),
            start_angle: start as f64,
            sweep_angle: sweep as f64,
            x_rotation: 0.0,
        };
        for el in arc.append_iter(ARC_TOLERANCE) {
            self.bez.push(el);
        }
        self.current = Some((center + Vec2::from_polar(radius, start + sweep)).into());
        self
    }

    /// Closes the open subpath; the current point returns to its start.
    pub fn close(&mut self) -> &mut Self {
        if self.current.is_some() && !self.closed {
            self.bez.close_path();
            self.current = self.start;
            self.closed = true;
        }
        self
    }

    /// After a close, starts the next subpath at the closing point.
    /// Returns whether a current point exists.
    fn reopen(&mut self) -> bool {
        match self.current {
            Some(p) if self.closed => {
                self.bez.move_to(p);
                self.closed = false;
                true
            }
            Some(_) => true,
            None => false,
        }
    }

    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        self.bez.elements()
    }

    #[inline]
    pub fn as_bez_path(&self) -> &BezPath {
        &self.bez
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bez.elements().is_empty()
    }

    /// Returns a copy with every element mapped through `t`.
    pub fn transformed(&self, t: &Transform) -> Path {
        let affine = t.to_affine();
        Path {
            bez: affine * self.bez.clone(),
            current: self.current.map(|p| affine * p),
            start: self.start.map(|p| affine * p),
            closed: self.closed,
        }
    }

    /// Tight bounds of the curves; `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        let b = self.bez.bounding_box();
        Some(Rect::new(b.x0 as f32, b.y0 as f32, b.width() as f32, b.height() as f32))
    }
}

/// Paths are equal when they hold the same elements.
impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.bez == other.bez
    }
}

/// Clockwise sweep from `start` to `end`, canvas rules.
pub(crate) fn clockwise_sweep(start: f32, end: f32) -> f32 {
    let delta = end - start;
    if delta >= TAU {
        TAU
    } else {
        delta.rem_euclid(TAU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    fn approx(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-3
    }

    #[test]
    fn circle_is_one_ring_of_cubics() {
        let c = Path::circle(Vec2::new(100.0, 100.0), 96.0);
        let els = c.elements();
        assert!(matches!(els[0], PathEl::MoveTo(p) if approx(p, Point::new(196.0, 100.0))));
        assert!(els[1..].iter().all(|e| matches!(e, PathEl::CurveTo(..))));

        let b = c.bounds().unwrap();
        assert!((b.origin.x - 4.0).abs() < 0.05);
        assert!((b.size.x - 192.0).abs() < 0.1);
        assert!((b.size.y - 192.0).abs() < 0.1);

        let PathEl::CurveTo(_, _, end) = *els.last().unwrap() else { panic!("circle must end on a curve") };
        assert!(approx(end, Point::new(196.0, 100.0)));
    }

    #[test]
    fn polyline_keeps_points_in_order() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(5.0, 1.0), Vec2::new(9.0, 4.0)];
        assert_eq!(
            Path::polyline(pts).elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(5.0, 1.0)),
                PathEl::LineTo(Point::new(9.0, 4.0)),
            ]
        );
    }

    #[test]
    fn line_to_without_a_subpath_opens_one() {
        let mut p = Path::new();
        p.line_to(Vec2::new(3.0, 4.0));
        assert_eq!(p.elements(), &[PathEl::MoveTo(Point::new(3.0, 4.0))]);
    }

    #[test]
    fn arc_after_move_to_connects_with_a_segment() {
        let mut p = Path::new();
        p.move_to(Vec2::new(0.0, 0.0)).arc(Vec2::new(10.0, 0.0), 5.0, 0.0, PI);
        let els = p.elements();
        assert_eq!(els[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
        assert!(matches!(els[1], PathEl::LineTo(q) if approx(q, Point::new(15.0, 0.0))));
        assert!(matches!(els[2], PathEl::CurveTo(..)));
    }

    #[test]
    fn half_arc_sweeps_clockwise_through_the_left_side() {
        // π/2 → 3π/2 passes through angle π, i.e. the point left of center.
        let mut p = Path::new();
        p.arc(Vec2::zero(), 10.0, FRAC_PI_2, 3.0 * FRAC_PI_2);
        let b = p.bounds().unwrap();
        assert!((b.origin.x + 10.0).abs() < 1e-2);
        assert!(b.max().x <= 1e-3);
        assert!((b.size.y - 20.0).abs() < 1e-2);
    }

    #[test]
    fn sweep_rules() {
        assert_eq!(clockwise_sweep(0.0, TAU), TAU);
        assert_eq!(clockwise_sweep(0.0, 3.0 * TAU), TAU);
        assert!((clockwise_sweep(PI, 0.0) - PI).abs() < 1e-6);
    }

    #[test]
    fn close_returns_to_the_subpath_start() {
        let mut p = Path::new();
        p.move_to(Vec2::zero()).line_to(Vec2::new(4.0, 0.0)).line_to(Vec2::new(4.0, 4.0)).close();
        p.line_to(Vec2::new(0.0, 4.0));
        let els = p.elements();
        assert_eq!(els[3], PathEl::ClosePath);
        assert_eq!(els[4], PathEl::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(els[5], PathEl::LineTo(Point::new(0.0, 4.0)));
    }

    #[test]
    fn transformed_arc_moves_with_the_transform() {
        let t = Transform::translate(Vec2::new(50.0, 50.0)).rotated(FRAC_PI_2);
        let moved = Path::circle(Vec2::new(10.0, 0.0), 3.0).transformed(&t);
        let center = moved.bounds().unwrap().center();
        assert!((center - Vec2::new(50.0, 60.0)).length() < 1e-3);
        assert!((moved.bounds().unwrap().size.x - 6.0).abs() < 0.05);
    }

    #[test]
    fn empty_path_has_no_bounds() {
        assert_eq!(Path::new().bounds(), None);
    }
}

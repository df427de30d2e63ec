//! Concept plates: the rotating emblem, the modeling plate and the 3D
//! translation plate.

mod inspiration;
mod modeling;
mod translation;

pub use inspiration::Inspiration;
pub use modeling::Modeling;
pub use translation::Translation;

use taiji_engine::canvas::{Canvas, Path};
use taiji_engine::coords::Vec2;
use taiji_engine::paint::Stroke;

/// Grid lines at `0, spacing, 2·spacing, …` strictly inside the viewport;
/// every vertical line first, then every horizontal one.
fn stroke_grid(canvas: &mut dyn Canvas, spacing: f32, stroke: &Stroke) {
    let vp = canvas.viewport();
    for x in grid_stops(vp.width, spacing) {
        canvas.stroke_path(&Path::line(Vec2::new(x, 0.0), Vec2::new(x, vp.height)), stroke);
    }
    for y in grid_stops(vp.height, spacing) {
        canvas.stroke_path(&Path::line(Vec2::new(0.0, y), Vec2::new(vp.width, y)), stroke);
    }
}

fn grid_stops(extent: f32, spacing: f32) -> impl Iterator<Item = f32> {
    (0u32..)
        .map(move |i| i as f32 * spacing)
        .take_while(move |&v| spacing > 0.0 && v < extent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use taiji_engine::coords::Viewport;
    use taiji_engine::paint::Color;
    use taiji_engine::scene::DrawList;

    #[test]
    fn stops_are_half_open() {
        let stops: Vec<f32> = grid_stops(120.0, 40.0).collect();
        assert_eq!(stops, [0.0, 40.0, 80.0]);
    }

    #[test]
    fn zero_spacing_has_no_stops() {
        assert_eq!(grid_stops(100.0, 0.0).count(), 0);
    }

    #[test]
    fn grid_draws_verticals_then_horizontals() {
        let mut list = DrawList::new(Viewport::new(100.0, 50.0));
        stroke_grid(&mut list, 30.0, &Stroke::new(1.0, Color::white()));
        let ends: Vec<_> = list.strokes().map(|(p, _)| p.bounds().unwrap()).collect();
        assert_eq!(ends.len(), 4 + 2);
        assert_eq!(ends[0].size.y, 50.0);
        assert_eq!(ends[3].origin.x, 90.0);
        assert_eq!(ends[4].size.x, 100.0);
        assert_eq!(ends[5].origin.y, 30.0);
    }
}

//! Neighbour search for the link pass.
//!
//! Both searches return `(i, j, distance)` with `i < j`, sorted by `(i, j)`,
//! for every pair closer than `max_distance`.

use std::collections::HashMap;

use taiji_engine::coords::Vec2;

pub type Pair = (usize, usize, f32);

/// Quadratic scan over every pair.
pub fn all_pairs(points: &[Vec2], max_distance: f32) -> Vec<Pair> {
    let mut out = Vec::new();
    for (i, a) in points.iter().enumerate() {
        for (j, b) in points.iter().enumerate().skip(i + 1) {
            let d = a.distance(*b);
            if d < max_distance {
                out.push((i, j, d));
            }
        }
    }
    out
}

/// Uniform grid with cells `max_distance` wide.
///
/// Any pair closer than one cell lies in the same or adjacent cells, so only
/// the 3×3 neighbourhood of each point is visited.
#[derive(Debug)]
pub struct SpatialGrid {
    cell: f32,
    buckets: HashMap<(i32, i32), Vec<usize>>,
}

impl SpatialGrid {
    pub fn build(points: &[Vec2], cell: f32) -> Self {
        let mut buckets: HashMap<(i32, i32), Vec<usize>> = HashMap::new();
        for (i, p) in points.iter().enumerate() {
            buckets.entry(cell_of(*p, cell)).or_default().push(i);
        }
        Self { cell, buckets }
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell
    }

    /// Occupied cells.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Same result as [`all_pairs`] for the points the grid was built from.
    pub fn pairs(&self, points: &[Vec2], max_distance: f32) -> Vec<Pair> {
        let mut out = Vec::new();
        for (i, a) in points.iter().enumerate() {
            let (cx, cy) = cell_of(*a, self.cell);
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let Some(bucket) = self.buckets.get(&(cx + dx, cy + dy)) else { continue };
                    for &j in bucket {
                        if j <= i {
                            continue;
                        }
                        let d = a.distance(points[j]);
                        if d < max_distance {
                            out.push((i, j, d));
                        }
                    }
                }
            }
        }
        out.sort_unstable_by_key(|&(i, j, _)| (i, j));
        out
    }
}

#[inline]
fn cell_of(p: Vec2, cell: f32) -> (i32, i32) {
    ((p.x / cell).floor() as i32, (p.y / cell).floor() as i32)
}

/// Pairs closer than `max_distance`, switching to the grid above `threshold`
/// points.
pub fn close_pairs(points: &[Vec2], max_distance: f32, threshold: usize) -> Vec<Pair> {
    if max_distance <= 0.0 {
        return Vec::new();
    }
    if points.len() > threshold {
        SpatialGrid::build(points, max_distance).pairs(points, max_distance)
    } else {
        all_pairs(points, max_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::random::{RandomSource, UnitRandom};

    fn scattered(n: usize, seed: u64) -> Vec<Vec2> {
        let mut r = RandomSource::seeded(seed);
        (0..n)
            .map(|_| Vec2::new(r.next_unit() * 800.0, r.next_unit() * 600.0))
            .collect()
    }

    #[test]
    fn all_pairs_is_strict() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(119.0, 0.0), Vec2::new(0.0, 121.0)];
        let pairs = all_pairs(&pts, 120.0);
        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].0, pairs[0].1), (0, 1));
        assert_eq!(pairs[0].2, 119.0);
    }

    #[test]
    fn exact_distance_is_not_a_pair() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(120.0, 0.0)];
        assert!(all_pairs(&pts, 120.0).is_empty());
        assert!(SpatialGrid::build(&pts, 120.0).pairs(&pts, 120.0).is_empty());
    }

    #[test]
    fn grid_matches_all_pairs() {
        for seed in [1, 7, 99] {
            let pts = scattered(600, seed);
            let grid = SpatialGrid::build(&pts, 120.0);
            assert_eq!(grid.pairs(&pts, 120.0), all_pairs(&pts, 120.0));
        }
    }

    #[test]
    fn grid_handles_negative_coordinates() {
        let pts = [Vec2::new(-5.0, -5.0), Vec2::new(5.0, 5.0), Vec2::new(-200.0, 0.0)];
        let grid = SpatialGrid::build(&pts, 120.0);
        assert_eq!(grid.pairs(&pts, 120.0), all_pairs(&pts, 120.0));
        assert_eq!(grid.len(), 3);
    }

    #[test]
    fn threshold_selects_the_search() {
        let pts = scattered(50, 3);
        assert_eq!(close_pairs(&pts, 120.0, 10), close_pairs(&pts, 120.0, 400));
    }

    #[test]
    fn non_positive_distance_yields_nothing() {
        let pts = scattered(20, 5);
        assert!(close_pairs(&pts, 0.0, 0).is_empty());
    }
}

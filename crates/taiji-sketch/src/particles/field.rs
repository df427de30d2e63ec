use log::debug;
use taiji_engine::canvas::{Canvas, Path};
use taiji_engine::coords::{Rect, Viewport};
use taiji_engine::paint::Stroke;
use taiji_engine::time::FrameTime;

use super::grid;
use super::particle::Particle;
use super::random::{RandomSource, UnitRandom};
use crate::palette;
use crate::sketch::check_viewport;
use crate::{SceneError, Sketch};

/// Tunables for [`ParticleField`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    /// Pairs strictly closer than this are linked.
    pub link_distance: f32,
    /// Link alpha at distance zero.
    pub link_alpha: f32,
    pub link_width: f32,
    /// Populations above this use the spatial grid.
    pub grid_threshold: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 80,
            link_distance: 120.0,
            link_alpha: 0.15,
            link_width: 1.0,
            grid_threshold: 400,
        }
    }
}

impl FieldConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if !(self.link_distance.is_finite() && self.link_distance > 0.0) {
            return Err(SceneError::InvalidConfig(format!(
                "link distance must be positive, got {}",
                self.link_distance
            )));
        }
        if !(0.0..=1.0).contains(&self.link_alpha) {
            return Err(SceneError::InvalidConfig(format!(
                "link alpha must be within [0, 1], got {}",
                self.link_alpha
            )));
        }
        if !(self.link_width.is_finite() && self.link_width > 0.0) {
            return Err(SceneError::InvalidConfig(format!(
                "link width must be positive, got {}",
                self.link_width
            )));
        }
        Ok(())
    }
}

/// A line between two particles, `a < b`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub alpha: f32,
}

/// `base · (1 − distance / max)`, zero at or beyond `max`.
#[inline]
pub fn link_alpha(distance: f32, max: f32, base: f32) -> f32 {
    if distance >= max {
        0.0
    } else {
        base * (1.0 - distance / max)
    }
}

/// Fixed population of drifting particles inside the canvas bounds.
#[derive(Debug)]
pub struct ParticleField<R: UnitRandom = RandomSource> {
    bounds: Rect,
    config: FieldConfig,
    particles: Vec<Particle>,
    random: R,
}

impl<R: UnitRandom> ParticleField<R> {
    /// Spawns `config.count` particles uniformly over the viewport.
    pub fn new(viewport: Viewport, config: FieldConfig, mut random: R) -> Result<Self, SceneError> {
        check_viewport(viewport)?;
        config.validate()?;

        let bounds = Rect::from_viewport(viewport);
        let particles = (0..config.count)
            .map(|_| Particle::spawn(bounds, &mut random))
            .collect();

        debug!(
            "particle field: {} particles over {}x{}",
            config.count, viewport.width, viewport.height
        );
        Ok(Self { bounds, config, particles, random })
    }

    /// Field with a known population; `config.count` is ignored.
    pub fn from_particles(
        viewport: Viewport,
        config: FieldConfig,
        particles: Vec<Particle>,
        random: R,
    ) -> Result<Self, SceneError> {
        check_viewport(viewport)?;
        config.validate()?;
        Ok(Self {
            bounds: Rect::from_viewport(viewport),
            config,
            particles,
            random,
        })
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// New bounds; particles left outside are reset on their next step.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        check_viewport(viewport)?;
        self.bounds = Rect::from_viewport(viewport);
        Ok(())
    }

    /// Advances every particle by one frame. Returns how many were reset.
    pub fn step(&mut self) -> usize {
        let mut resets = 0;
        for p in &mut self.particles {
            if p.advance(self.bounds, &mut self.random) {
                resets += 1;
            }
        }
        resets
    }

    /// Links between the current positions, ordered by `(a, b)`.
    pub fn links(&self) -> Vec<Link> {
        let positions: Vec<_> = self.particles.iter().map(|p| p.position).collect();
        let max = self.config.link_distance;
        grid::close_pairs(&positions, max, self.config.grid_threshold)
            .into_iter()
            .map(|(a, b, distance)| Link {
                a,
                b,
                distance,
                alpha: link_alpha(distance, max, self.config.link_alpha),
            })
            .collect()
    }

    /// Clears, then draws every particle followed by every link.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.clear();

        for p in &self.particles {
            canvas.fill_path(&Path::circle(p.position, p.size), p.color());
        }

        for link in self.links() {
            let a = self.particles[link.a].position;
            let b = self.particles[link.b].position;
            let stroke = Stroke::new(self.config.link_width, palette::accent_alpha(link.alpha));
            canvas.stroke_path(&Path::line(a, b), &stroke);
        }
    }

    /// One animation frame: step, then draw post-step positions.
    pub fn step_and_draw(&mut self, canvas: &mut dyn Canvas) {
        let resets = self.step();
        if resets > 0 {
            debug!("{resets} particles re-entered the field");
        }
        self.draw(canvas);
    }
}

impl<R: UnitRandom> Sketch for ParticleField<R> {
    fn name(&self) -> &str {
        "particles"
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        ParticleField::resize(self, viewport)
    }

    fn frame(&mut self, canvas: &mut dyn Canvas, _time: &FrameTime) {
        self.step_and_draw(canvas);
    }
}

use std::fmt;

use clap::ValueEnum;
use taiji_engine::coords::Viewport;
use taiji_engine::paint::Color;
use taiji_sketch::concept::{Inspiration, Modeling, Translation};
use taiji_sketch::diagram::{Diagram, DiagramKind};
use taiji_sketch::palette;
use taiji_sketch::particles::{FieldConfig, ParticleField, RandomSource};
use taiji_sketch::{SceneError, Sketch};

/// Every scene the studio can show.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum View {
    /// Drifting particle field
    Hero,
    Circle,
    Sine,
    #[value(name = "smallcircle", aliases = ["small-circle", "small_circle"])]
    SmallCircle,
    /// Disk cut by a sine curve, minus a small disk
    Composite,
    /// Rotating taiji emblem
    Inspiration,
    Modeling,
    /// 3D viewport with axis gizmo
    Translation,
}

impl View {
    /// Builds the sketch for a surface of `viewport`.
    ///
    /// `seed` makes the particle field reproducible; other views ignore it.
    pub fn build(self, viewport: Viewport, seed: Option<u64>) -> Result<Box<dyn Sketch>, SceneError> {
        let sketch: Box<dyn Sketch> = match self {
            View::Hero => {
                let random = seed.map_or_else(RandomSource::from_entropy, RandomSource::seeded);
                Box::new(ParticleField::new(viewport, FieldConfig::default(), random)?)
            }
            View::Circle => Box::new(Diagram::new(DiagramKind::Circle, viewport)?),
            View::Sine => Box::new(Diagram::new(DiagramKind::Sine, viewport)?),
            View::SmallCircle => Box::new(Diagram::new(DiagramKind::SmallCircle, viewport)?),
            View::Composite => Box::new(Diagram::new(DiagramKind::Composite, viewport)?),
            View::Inspiration => Box::new(Inspiration::new(viewport)?),
            View::Modeling => Box::new(Modeling::new(viewport)?),
            View::Translation => Box::new(Translation::new(viewport)?),
        };
        Ok(sketch)
    }

    /// Color behind the sketch when presenting or flattening a snapshot.
    pub fn backdrop(self) -> Color {
        match self {
            View::Inspiration | View::Translation => palette::viewport_dark(),
            _ => Color::white(),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(v) => f.write_str(v.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}

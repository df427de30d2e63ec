//! Particle field: drifting points linked by proximity lines.

mod field;
pub mod grid;
mod particle;
mod random;

pub use field::{FieldConfig, Link, ParticleField, link_alpha};
pub use particle::Particle;
pub use random::{RandomSource, ScriptedRandom, UnitRandom};

//! Procedural sketches drawn through `taiji_engine::canvas::Canvas`.
//!
//! - [`diagram`]: parametric figures (circle, sine, small circle, composite region)
//! - [`particles`]: drifting particle field with fading proximity links
//! - [`concept`]: the taiji emblem, modeling plate and 3D translation plate
//!
//! Every sketch implements [`Sketch`] so one frame loop can drive any of them.

pub mod concept;
pub mod diagram;
pub mod figures;
pub mod palette;
pub mod particles;

mod error;
mod sketch;

pub use error::SceneError;
pub use sketch::Sketch;

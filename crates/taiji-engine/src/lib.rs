//! Taiji engine crate.
//!
//! Drawing primitives and the platform pieces used by sketches:
//! - `coords`, `paint`: geometry and color
//! - `canvas`: the `Canvas` trait, `kurbo` paths and the `vello_cpu`-backed `Pixmap`
//! - `scene`: the recording `DrawList` canvas
//! - `time`: frame clock and the stoppable frame loop
//! - `logging`: one-time `env_logger` setup for binaries
//! - `device`, `render`, `window`, `core`: winit/wgpu runtime that presents a pixmap

pub mod canvas;
pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;

//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - record renderer-agnostic draw commands in paint order
//! - replay a recording onto any [`crate::canvas::Canvas`]
//!
//! A `DrawList` is itself a `Canvas`, so sketches can be recorded and their
//! output inspected without rasterizing.

mod cmd;
mod list;

pub use cmd::DrawCmd;
pub use list::DrawList;

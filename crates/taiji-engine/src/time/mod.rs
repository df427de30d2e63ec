//! Time subsystem.
//!
//! Frame timing utilities decoupled from the window runtime:
//! - one `FrameClock` per loop (or per window); `tick()` once per frame
//! - `FrameLoop` drives a callback from any `FrameSource` until stopped

mod frame_clock;
mod frame_loop;

pub use frame_clock::{FrameClock, FrameTime};
pub use frame_loop::{FixedStep, FrameLoop, FrameSource, IntervalTicker, StopHandle, VsyncTicker};

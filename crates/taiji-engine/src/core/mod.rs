//! Core engine-facing contracts.
//!
//! The stable interface between the window runtime and applications: an
//! [`App`] trait plus the per-frame context it receives.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};

//! GPU device + surface management.
//!
//! Responsibilities:
//! - create the wgpu Instance/Adapter/Device/Queue for a window
//! - configure the Surface (swapchain) and keep it in sync with resizes
//! - acquire frames and hand out an encoder + view for presenting

mod context;
mod error;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use init::GpuInit;

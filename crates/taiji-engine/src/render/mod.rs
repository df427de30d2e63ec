//! GPU presentation of CPU-rendered frames.
//!
//! Sketches rasterize into a [`crate::canvas::Pixmap`]; the presenter uploads
//! it as a texture and draws one window-filling quad.
//!
//! Convention:
//! - pixmap pixels are logical pixels; the quad stretches them to the
//!   physical surface (linear filtering on HiDPI displays)

mod blit;
mod ctx;

pub use blit::PixmapPresenter;
pub use ctx::{RenderCtx, RenderTarget};

//! PNG output for offline renders.

use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};
use log::info;
use taiji_engine::canvas::Pixmap;
use taiji_engine::paint::Color;

/// Converts `pixmap` to straight-alpha RGBA, optionally composited over
/// `backdrop` first.
pub fn to_image(pixmap: &Pixmap, backdrop: Option<Color>) -> Result<RgbaImage> {
    let (w, h) = (pixmap.width(), pixmap.height());
    let bytes = match backdrop {
        None => pixmap.to_straight_rgba8(),
        Some(bg) => pixmap
            .pixels()
            .iter()
            .flat_map(|c| c.over(bg).to_straight_u8())
            .collect(),
    };
    RgbaImage::from_raw(w, h, bytes).with_context(|| format!("pixel buffer does not fill {w}x{h}"))
}

pub fn write_png(pixmap: &Pixmap, backdrop: Option<Color>, path: &Path) -> Result<()> {
    let image = to_image(pixmap, backdrop)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {}x{} snapshot to {}", image.width(), image.height(), path.display());
    Ok(())
}

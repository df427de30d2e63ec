use taiji_engine::canvas::Canvas;
use taiji_engine::coords::Viewport;
use taiji_engine::time::FrameTime;

use crate::SceneError;

/// A drawable, possibly animated, scene.
///
/// `frame` redraws the whole canvas; animated sketches advance their own
/// state by one step per call.
pub trait Sketch {
    /// Short identifier used in logs and the studio CLI.
    fn name(&self) -> &str;

    /// Adopts a new drawing area. Sketches that lay out from
    /// `canvas.viewport()` only validate it.
    fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError>;

    fn frame(&mut self, canvas: &mut dyn Canvas, time: &FrameTime);
}

/// Rejects viewports with no drawable area.
pub(crate) fn check_viewport(viewport: Viewport) -> Result<(), SceneError> {
    if viewport.is_valid() {
        Ok(())
    } else {
        Err(SceneError::EmptySurface {
            width: viewport.width,
            height: viewport.height,
        })
    }
}

use anyhow::{Context, Result};
use log::{debug, error, info};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use taiji_engine::canvas::Pixmap;
use taiji_engine::coords::Viewport;
use taiji_engine::core::{App, AppControl, FrameCtx};
use taiji_engine::time::FrameTime;
use taiji_sketch::Sketch;

use crate::view::View;

/// A sketch and the pixmap it draws into, sized to the window.
struct Stage {
    sketch: Box<dyn Sketch>,
    pixmap: Pixmap,
}

/// What one window frame did to the stage.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Tick {
    /// Nothing to draw on; the stage was left as it was.
    Paused,
    Drawn,
    /// Drawn after building or resizing the stage.
    Relaid { width: u32, height: u32 },
}

/// Windowed driver: one view, redrawn every frame, Escape quits.
pub struct StudioApp {
    view: View,
    seed: Option<u64>,
    stage: Option<Stage>,
}

impl StudioApp {
    pub fn new(view: View, seed: Option<u64>) -> Self {
        Self { view, seed, stage: None }
    }

    /// Builds the stage on first use; afterwards follows the window size.
    fn fit(&mut self, width: u32, height: u32) -> Result<&mut Stage> {
        let viewport = Viewport::new(width as f32, height as f32);
        let stage = match self.stage.take() {
            None => {
                info!("showing {} at {width}x{height}", self.view);
                Stage {
                    sketch: self.view.build(viewport, self.seed)?,
                    pixmap: Pixmap::new(width, height)?,
                }
            }
            Some(mut stage) => {
                if (stage.pixmap.width(), stage.pixmap.height()) != (width, height) {
                    stage.pixmap.resize(width, height)?;
                    stage.sketch.resize(viewport)?;
                }
                stage
            }
        };
        Ok(self.stage.insert(stage))
    }

    /// Advances the sketch by one frame at `size`.
    ///
    /// `None` (a minimized window) pauses: the stage is neither resized nor
    /// stepped, so animated state survives until the window comes back.
    fn tick(&mut self, size: Option<(u32, u32)>, time: &FrameTime) -> Result<Tick> {
        let Some((width, height)) = size else {
            return Ok(Tick::Paused);
        };
        let relayout = self
            .stage
            .as_ref()
            .is_none_or(|s| (s.pixmap.width(), s.pixmap.height()) != (width, height));

        let view = self.view;
        let stage = self
            .fit(width, height)
            .with_context(|| format!("cannot lay out {view} at {width}x{height}"))?;
        stage.sketch.frame(&mut stage.pixmap, time);

        Ok(if relayout { Tick::Relaid { width, height } } else { Tick::Drawn })
    }
}

impl App for StudioApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && event.logical_key == Key::Named(NamedKey::Escape) =>
            {
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let size = ctx.window.pixel_size().filter(|_| ctx.gpu.is_drawable());

        match self.tick(size, &ctx.time) {
            Ok(Tick::Paused) => return AppControl::Continue,
            Ok(Tick::Relaid { width, height }) => {
                debug!("stage laid out at {width}x{height}");
                ctx.runtime.set_title(format!("taiji · {} · {width}×{height}", self.view));
            }
            Ok(Tick::Drawn) => {}
            Err(e) => {
                error!("{e:#}");
                return AppControl::Exit;
            }
        }

        match &self.stage {
            Some(stage) => ctx.present(&stage.pixmap, self.view.backdrop()),
            None => AppControl::Continue,
        }
    }
}

//! Window-less frame driving.

use std::time::Instant;

use anyhow::Result;
use clap::ValueEnum;
use log::info;
use taiji_engine::canvas::Pixmap;
use taiji_engine::time::{FixedStep, FrameLoop, FrameSource, IntervalTicker, VsyncTicker};
use taiji_sketch::Sketch;

/// How frames are paced without a window.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum Pace {
    /// As fast as possible
    Fixed,
    /// Sleep to the frame interval on this thread
    Interval,
    /// Ticks from a background thread
    Vsync,
}

impl Pace {
    pub fn source(self, fps: u32) -> Result<Box<dyn FrameSource>> {
        Ok(match self {
            Pace::Fixed => Box::new(FixedStep::new(fps)),
            Pace::Interval => Box::new(IntervalTicker::new(fps)),
            Pace::Vsync => Box::new(VsyncTicker::spawn(fps)?),
        })
    }
}

/// Drives `sketch` into `pixmap` for up to `frames` frames.
pub fn drive<S: FrameSource>(sketch: &mut dyn Sketch, pixmap: &mut Pixmap, source: S, frames: u64) -> u64 {
    let started = Instant::now();
    let done = FrameLoop::new(source)
        .with_max_frames(frames)
        .run(|time| sketch.frame(&mut *pixmap, time));

    let secs = started.elapsed().as_secs_f64();
    if secs > 0.0 {
        info!("{} drew {done} frames in {secs:.2}s ({:.1} fps)", sketch.name(), done as f64 / secs);
    }
    done
}

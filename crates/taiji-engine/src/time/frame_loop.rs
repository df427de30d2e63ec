use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{debug, error, info};

use super::{FrameClock, FrameTime};

/// Cloneable cancellation flag for a running [`FrameLoop`].
///
/// Checked between frames; a frame in progress always completes.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Supplies frame ticks. `None` ends the loop.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<FrameTime>;
}

impl<T: FrameSource + ?Sized> FrameSource for &mut T {
    fn next_frame(&mut self) -> Option<FrameTime> {
        (**self).next_frame()
    }
}

impl<T: FrameSource + ?Sized> FrameSource for Box<T> {
    fn next_frame(&mut self) -> Option<FrameTime> {
        (**self).next_frame()
    }
}

/// Fixed-step frames with no waiting, for offline rendering.
#[derive(Debug, Clone)]
pub struct FixedStep {
    dt: f32,
    next: u64,
}

impl FixedStep {
    pub fn new(fps: u32) -> Self {
        Self { dt: 1.0 / fps.max(1) as f32, next: 0 }
    }
}

impl FrameSource for FixedStep {
    fn next_frame(&mut self) -> Option<FrameTime> {
        let ft = FrameTime::fixed(self.next, self.dt);
        self.next += 1;
        Some(ft)
    }
}

/// Sleeps on the calling thread until each frame deadline.
///
/// Deadlines advance by a fixed interval; after a stall the schedule restarts
/// from now instead of bursting to catch up.
#[derive(Debug)]
pub struct IntervalTicker {
    clock: FrameClock,
    interval: Duration,
    deadline: Option<Instant>,
}

impl IntervalTicker {
    pub fn new(fps: u32) -> Self {
        Self {
            clock: FrameClock::new(),
            interval: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            deadline: None,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl FrameSource for IntervalTicker {
    fn next_frame(&mut self) -> Option<FrameTime> {
        let now = Instant::now();
        match self.deadline {
            // First frame fires immediately.
            None => {
                self.deadline = Some(now + self.interval);
                self.clock.reset();
            }
            Some(deadline) => {
                if deadline > now {
                    thread::sleep(deadline - now);
                    self.deadline = Some(deadline + self.interval);
                } else {
                    self.deadline = Some(now + self.interval);
                }
            }
        }
        Some(self.clock.tick())
    }
}

/// Ticks pushed by a background thread at a target rate.
///
/// The thread exits once the receiving side is gone; dropping the ticker
/// closes the channel and joins it.
pub struct VsyncTicker {
    rx: Option<Receiver<()>>,
    clock: FrameClock,
    thread_handle: Option<JoinHandle<()>>,
}

impl VsyncTicker {
    pub fn spawn(target_fps: u32) -> Result<Self> {
        let target_fps = target_fps.max(1);
        let frame_duration = Duration::from_secs_f64(1.0 / target_fps as f64);
        // One pending tick at most; a slow consumer drops frames instead of queueing them.
        let (tx, rx) = mpsc::sync_channel::<()>(1);

        let thread_handle = thread::Builder::new()
            .name("vsync".to_string())
            .spawn(move || {
                debug!("vsync ticker started ({target_fps} fps)");
                loop {
                    thread::sleep(frame_duration);
                    match tx.try_send(()) {
                        Ok(()) | Err(mpsc::TrySendError::Full(())) => {}
                        Err(mpsc::TrySendError::Disconnected(())) => break,
                    }
                }
                debug!("vsync ticker exiting");
            })
            .context("failed to spawn vsync thread")?;

        info!("vsync ticker spawned at {target_fps} fps");
        Ok(Self {
            rx: Some(rx),
            clock: FrameClock::new(),
            thread_handle: Some(thread_handle),
        })
    }
}

impl FrameSource for VsyncTicker {
    fn next_frame(&mut self) -> Option<FrameTime> {
        self.rx.as_ref()?.recv().ok()?;
        Some(self.clock.tick())
    }
}

impl Drop for VsyncTicker {
    fn drop(&mut self) {
        drop(self.rx.take());
        if let Some(handle) = self.thread_handle.take() {
            if let Err(e) = handle.join() {
                error!("vsync thread panicked: {e:?}");
            }
        }
    }
}

/// Runs a per-frame callback until stopped, the frame cap is hit, or the
/// source runs dry.
pub struct FrameLoop<S: FrameSource> {
    source: S,
    stop: StopHandle,
    max_frames: Option<u64>,
}

impl<S: FrameSource> FrameLoop<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            stop: StopHandle::new(),
            max_frames: None,
        }
    }

    /// Stops after `frames` callbacks.
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Handle that cancels this loop; may be moved to another thread.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Drives `on_frame` and returns the number of frames run.
    pub fn run<F>(&mut self, mut on_frame: F) -> u64
    where
        F: FnMut(&FrameTime),
    {
        let mut frames = 0u64;
        while !self.stop.is_stopped() {
            if self.max_frames.is_some_and(|max| frames >= max) {
                break;
            }
            let Some(time) = self.source.next_frame() else {
                debug!("frame source exhausted");
                break;
            };
            on_frame(&time);
            frames += 1;
        }
        debug!("frame loop finished after {frames} frames");
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Source that yields a fixed number of frames.
    struct Finite(u64);

    impl FrameSource for Finite {
        fn next_frame(&mut self) -> Option<FrameTime> {
            if self.0 == 0 {
                return None;
            }
            self.0 -= 1;
            Some(FrameTime::fixed(0, 0.016))
        }
    }

    // ── FrameLoop ─────────────────────────────────────────────────────────

    #[test]
    fn stop_handle_ends_the_loop_between_frames() {
        let mut lp = FrameLoop::new(FixedStep::new(60));
        let stop = lp.stop_handle();
        let mut seen = Vec::new();
        let n = lp.run(|t| {
            seen.push(t.frame_index);
            if t.frame_index == 4 {
                stop.stop();
            }
        });
        assert_eq!(n, 5);
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn max_frames_caps_the_loop() {
        let mut lp = FrameLoop::new(FixedStep::new(60)).with_max_frames(3);
        assert_eq!(lp.run(|_| {}), 3);
    }

    #[test]
    fn exhausted_source_ends_the_loop() {
        let mut lp = FrameLoop::new(Finite(2));
        assert_eq!(lp.run(|_| {}), 2);
    }

    #[test]
    fn stopped_before_start_runs_nothing() {
        let mut lp = FrameLoop::new(FixedStep::new(60));
        lp.stop_handle().stop();
        assert_eq!(lp.run(|_| panic!("frame ran after stop")), 0);
    }

    // ── sources ───────────────────────────────────────────────────────────

    #[test]
    fn fixed_step_advances_frame_index() {
        let mut src = FixedStep::new(50);
        let a = src.next_frame().unwrap();
        let b = src.next_frame().unwrap();
        assert_eq!((a.frame_index, b.frame_index), (0, 1));
        assert!((b.dt - 0.02).abs() < 1e-6);
    }

    #[test]
    fn interval_ticker_waits_between_frames() {
        let mut ticker = IntervalTicker::new(200);
        let start = Instant::now();
        let mut lp = FrameLoop::new(&mut ticker).with_max_frames(3);
        lp.run(|_| {});
        // Frame 0 is immediate, frames 1 and 2 each wait one 5 ms interval.
        assert!(start.elapsed() >= Duration::from_millis(9));
    }

    #[test]
    fn vsync_ticker_delivers_and_joins_on_drop() {
        let ticker = VsyncTicker::spawn(500).unwrap();
        let mut lp = FrameLoop::new(ticker).with_max_frames(3);
        let mut indices = Vec::new();
        lp.run(|t| indices.push(t.frame_index));
        assert_eq!(indices, vec![0, 1, 2]);
        drop(lp);
    }
}

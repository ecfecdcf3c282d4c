// scheduler.rs - Frame scheduler
//
// Two states, STOPPED and RUNNING. While running exactly one frame request
// is outstanding at a time; asking again before it fires is a no-op.
// Stopping cancels the outstanding request so no frame lands on a surface
// that has gone away.
//
// The refresh signal comes from a `FrameSource`: requestAnimationFrame in
// the browser, `ManualFrames` for headless hosts and tests.

use std::fmt;

use tracing::{debug, info, warn};

use crate::error::{CanvasError, CanvasResult};

/// Consecutive undrawable frames, with none drawn since `start`, before the
/// scheduler gives up.
pub const MAX_UNAVAILABLE_FRAMES: u32 = 120;

pub trait FrameSource {
    type Handle: Copy + PartialEq + fmt::Debug;

    /// Ask for one callback on the next display refresh
    fn request(&mut self) -> CanvasResult<Self::Handle>;

    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Stopped,
    Running,
}

pub struct FrameScheduler<S: FrameSource> {
    source: S,
    state: SchedulerState,
    pending: Option<S::Handle>,

    // Surface health since the last start
    unavailable: u32,
    drawn: bool,
}

impl<S: FrameSource> FrameScheduler<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: SchedulerState::Stopped,
            pending: None,
            unavailable: 0,
            drawn: false,
        }
    }

    pub fn state(&self) -> SchedulerState { self.state }
    pub fn is_running(&self) -> bool { self.state == SchedulerState::Running }
    pub fn has_pending(&self) -> bool { self.pending.is_some() }
    pub fn source(&self) -> &S { &self.source }
    pub fn source_mut(&mut self) -> &mut S { &mut self.source }

    /// STOPPED -> RUNNING and request the first frame
    pub fn start(&mut self) -> CanvasResult<()> {
        if self.is_running() { return Ok(()); }

        self.state = SchedulerState::Running;
        self.unavailable = 0;
        self.drawn = false;
        if let Err(err) = self.request_frame() {
            self.state = SchedulerState::Stopped;
            return Err(err);
        }
        info!("frame loop started");
        Ok(())
    }

    /// RUNNING -> STOPPED, cancelling the outstanding request
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.source.cancel(handle);
            debug!(?handle, "cancelled pending frame");
        }
        if self.is_running() {
            self.state = SchedulerState::Stopped;
            info!("frame loop stopped");
        }
    }

    /// Request the next frame unless one is already outstanding
    pub fn request_frame(&mut self) -> CanvasResult<()> {
        if !self.is_running() || self.pending.is_some() {
            return Ok(());
        }
        self.pending = Some(self.source.request()?);
        Ok(())
    }

    /// The requested frame has fired. Returns whether to run it.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        self.is_running()
    }

    /// Account for the frame's outcome and schedule the next one
    pub fn end_frame(&mut self, result: CanvasResult<()>) -> CanvasResult<()> {
        match result {
            Ok(()) => {
                self.unavailable = 0;
                self.drawn = true;
            }
            Err(CanvasError::SurfaceUnavailable { width, height }) => {
                self.unavailable += 1;
                if !self.drawn && self.unavailable >= MAX_UNAVAILABLE_FRAMES {
                    let frames = self.unavailable;
                    warn!(frames, "surface never became available, stopping");
                    self.stop();
                    return Err(CanvasError::SurfaceLost { frames });
                }
                debug!(width, height, "surface unavailable, frame skipped");
            }
            Err(err) => {
                self.stop();
                return Err(err);
            }
        }
        if let Err(err) = self.request_frame() {
            warn!(%err, "next frame refused, stopping");
            self.stop();
            return Err(err);
        }
        Ok(())
    }
}

/// Frame source driven by hand: `fire` hands out the outstanding request
#[derive(Debug, Default)]
pub struct ManualFrames {
    next: u64,
    pending: Option<u64>,
    requested: u64,
    cancelled: u64,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver the outstanding refresh, if any
    pub fn fire(&mut self) -> Option<u64> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool { self.pending.is_some() }
    pub fn requested(&self) -> u64 { self.requested }
    pub fn cancelled(&self) -> u64 { self.cancelled }
}

impl FrameSource for ManualFrames {
    type Handle = u64;

    fn request(&mut self) -> CanvasResult<u64> {
        self.next += 1;
        self.pending = Some(self.next);
        self.requested += 1;
        Ok(self.next)
    }

    fn cancel(&mut self, handle: u64) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

//! Frame scheduling
//!
//! The host (a browser's `requestAnimationFrame`, or a test double) hands out
//! one handle per requested frame. [`Scheduler`] holds at most one of those
//! at a time and cancels it when stopped or dropped, so no tick can fire
//! after teardown.

use std::fmt::Debug;

use crate::{render, Game, InputEvent, Surface, SurfaceError};

/// Source of display refresh callbacks
pub trait FrameHost {
    type Handle: Copy + Debug;

    /// Ask for one callback on the next display refresh
    fn request_frame(&mut self) -> Result<Self::Handle, SurfaceError>;

    /// Revoke a previously requested callback
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Owns the single outstanding frame request
pub struct Scheduler<H: FrameHost> {
    host: H,
    pending: Option<H::Handle>,
    running: bool,
}

impl<H: FrameHost> Scheduler<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            pending: None,
            running: false,
        }
    }

    /// Begin requesting frames. Calling this while a frame is already
    /// pending does not request a second one.
    pub fn start(&mut self) -> Result<(), SurfaceError> {
        self.running = true;
        self.schedule_next()
    }

    /// Request the next frame if running and nothing is pending
    pub fn schedule_next(&mut self) -> Result<(), SurfaceError> {
        if !self.running || self.has_pending() {
            return Ok(());
        }
        match self.host.request_frame() {
            Ok(handle) => {
                self.pending = Some(handle);
                Ok(())
            }
            Err(e) => {
                self.running = false;
                Err(e)
            }
        }
    }

    /// Called when the host fires a callback. Consumes the pending handle
    /// and reports whether the tick should run; callbacks that arrive
    /// after `stop` are ignored.
    pub fn begin_frame(&mut self) -> bool {
        let had_pending = self.pending.take().is_some();
        had_pending && self.running
    }

    /// Stop and cancel any outstanding request
    pub fn stop(&mut self) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.host.cancel_frame(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

}

impl<H: FrameHost> Drop for Scheduler<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Drives input → simulation → render once per display refresh
pub struct FrameLoop<H: FrameHost, S: Surface> {
    game: Game,
    scheduler: Scheduler<H>,
    surface: S,
}

impl<H: FrameHost, S: Surface> FrameLoop<H, S> {
    pub fn new(game: Game, host: H, surface: S) -> Self {
        Self {
            game,
            scheduler: Scheduler::new(host),
            surface,
        }
    }

    /// Start (or resume) the loop. Resuming after `stop` restarts the
    /// frame clock so the paused time is not simulated.
    pub fn start(&mut self) -> Result<(), SurfaceError> {
        if !self.scheduler.is_running() {
            self.game.clock.reset();
        }
        self.scheduler.start().inspect_err(|e| {
            log::warn!("Frame loop failed to start: {e}");
        })
    }

    pub fn stop(&mut self) {
        if self.scheduler.is_running() {
            log::debug!("Frame loop stopped at tick {}", self.game.tick);
        }
        self.scheduler.stop();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Queue input for the next tick; never applied mid-frame
    pub fn push_input(&mut self, input: InputEvent) {
        self.game.push_input(input);
    }

    /// Host refresh callback
    pub fn on_frame(&mut self, timestamp_ms: f64) {
        if !self.scheduler.begin_frame() {
            return;
        }

        self.game.advance(timestamp_ms);

        // A torn-down surface just ends the loop
        if !self.surface.is_available() {
            log::debug!("Render target detached");
            self.stop();
            return;
        }
        if let Err(e) = render(&mut self.surface, &self.game.state, &self.game.config) {
            log::debug!("Render failed, stopping: {e}");
            self.stop();
            return;
        }

        if let Err(e) = self.scheduler.schedule_next() {
            log::warn!("Could not schedule next frame: {e}");
            self.stop();
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

}

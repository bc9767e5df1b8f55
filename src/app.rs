//! Single-threaded control loop.
//!
//! Each iteration: refresh the geometry, take at most one key, ask the clock
//! whether an automatic advance is due, and redraw if anything changed.
//! [`App::step`] runs one iteration at an explicit instant so the loop can be
//! driven deterministically over a [`HeadlessDisplay`](crate::display::HeadlessDisplay).

use crate::display::Display;
use crate::error::Result;
use crate::marquee::{Dispatch, FrameRenderer, KeyMap, MarqueeState, TickScheduler, dispatch};
use std::time::{Duration, Instant};

/// Sleep between iterations that had nothing to do.
pub const DEFAULT_IDLE_SLEEP: Duration = Duration::from_millis(1);

/// Outcome of one loop iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// No key arrived and no tick fired.
    Idle,
    /// A key was handled or the marquee advanced.
    Busy,
    /// Quit was requested.
    Quit,
}

/// The marquee application over some display.
pub struct App<D: Display> {
    display: D,
    state: MarqueeState,
    keymap: KeyMap,
    frame: FrameRenderer,
    clock: TickScheduler,
    idle_sleep: Duration,
    dirty: bool,
    frames: u64,
}

impl<D: Display> App<D> {
    /// Build an app; the tick schedule starts at `now`.
    pub fn new(display: D, state: MarqueeState, keymap: KeyMap, now: Instant) -> Self {
        let frame = FrameRenderer::new(&keymap);
        Self {
            display,
            state,
            keymap,
            frame,
            clock: TickScheduler::new(now),
            idle_sleep: DEFAULT_IDLE_SLEEP,
            dirty: true,
            frames: 0,
        }
    }

    #[must_use]
    pub fn with_idle_sleep(mut self, idle_sleep: Duration) -> Self {
        self.idle_sleep = idle_sleep;
        self
    }

    #[must_use]
    pub fn state(&self) -> &MarqueeState {
        &self.state
    }

    /// Mutable state; the next step redraws.
    pub fn state_mut(&mut self) -> &mut MarqueeState {
        self.dirty = true;
        &mut self.state
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Frames drawn so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one iteration as of `now`.
    pub fn step(&mut self, now: Instant) -> Result<Step> {
        let (rows, cols) = self.display.size()?;
        if self.state.apply_geometry(rows, cols) {
            self.dirty = true;
        }

        let mut busy = false;
        if let Some(key) = self.display.poll_key()? {
            busy = true;
            match dispatch(&mut self.state, &self.keymap, key) {
                Dispatch::Quit => return Ok(Step::Quit),
                Dispatch::Updated => self.dirty = true,
                Dispatch::Ignored => {}
            }
        }

        if self.clock.poll(now, self.state.speed_ms) {
            self.state.advance();
            self.dirty = true;
            busy = true;
        }

        if self.dirty {
            self.frame.draw(&mut self.display, &self.state)?;
            self.dirty = false;
            self.frames += 1;
        }

        Ok(if busy { Step::Busy } else { Step::Idle })
    }

    /// Run against the wall clock until quit.
    pub fn run(&mut self) -> Result<()> {
        self.clock.reset(Instant::now());
        tracing::info!(
            speed_ms = self.state.speed_ms,
            direction = ?self.state.direction,
            "marquee started"
        );
        loop {
            match self.step(Instant::now())? {
                Step::Quit => break,
                Step::Idle => std::thread::sleep(self.idle_sleep),
                Step::Busy => {}
            }
        }
        tracing::info!(frames = self.frames, "marquee stopped");
        Ok(())
    }

    /// Run `ticks` automatic advances on simulated time starting at `start`,
    /// without sleeping. Queued keys are handled first. Returns `false` if
    /// quit was requested.
    pub fn run_ticks(&mut self, start: Instant, ticks: u64) -> Result<bool> {
        self.clock.reset(start);
        let mut now = start;
        loop {
            match self.step(now)? {
                Step::Quit => return Ok(false),
                Step::Busy => {}
                Step::Idle => break,
            }
        }
        for _ in 0..ticks {
            now += Duration::from_secs_f64(self.state.speed_ms / 1000.0);
            if self.step(now)? == Step::Quit {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

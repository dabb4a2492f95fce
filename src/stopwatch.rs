use timer_core::{format_mm_ss_mmm, TimerCore, TimerState};

use crate::config::Labels;
use crate::surface::{Clock, FrameHandle, FrameScheduler, Surface};

/// Page elements the stopwatch writes to. Any of them may be missing.
#[derive(Default)]
pub struct StopwatchSurfaces {
    pub display: Option<Box<dyn Surface>>,
    pub start_stop: Option<Box<dyn Surface>>,
    pub reset: Option<Box<dyn Surface>>,
}

pub struct StopwatchEngine<C: Clock, F: FrameScheduler> {
    timer: TimerCore,
    clock: C,
    frames: F,
    pending_frame: Option<FrameHandle>,
    surfaces: StopwatchSurfaces,
    labels: Labels,
}

impl<C: Clock, F: FrameScheduler> StopwatchEngine<C, F> {
    pub fn new(clock: C, frames: F, surfaces: StopwatchSurfaces, labels: Labels) -> Self {
        let engine = Self {
            timer: TimerCore::new(),
            clock,
            frames,
            pending_frame: None,
            surfaces,
            labels,
        };
        engine.render();
        engine.sync_controls();
        engine
    }

    pub fn start(&mut self) {
        let now = self.clock.now_ms();
        if !self.timer.start(now) {
            return;
        }
        log::info!("stopwatch started with {:.0} ms banked", self.timer.accumulated_ms());
        self.sync_controls();
        self.schedule_frame();
    }

    pub fn stop(&mut self) {
        let now = self.clock.now_ms();
        if !self.timer.stop(now) {
            return;
        }
        if let Some(handle) = self.pending_frame.take() {
            self.frames.cancel_frame(handle);
        }
        log::info!("stopwatch stopped at {:.0} ms", self.timer.accumulated_ms());
        self.render();
        self.sync_controls();
    }

    pub fn reset(&mut self) {
        if !self.timer.reset() {
            log::debug!("reset ignored while running");
            return;
        }
        log::info!("stopwatch reset");
        self.render();
        self.sync_controls();
    }

    /// Start/stop control handler: the timer state alone decides which action applies.
    pub fn toggle(&mut self) {
        if self.timer.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn current_elapsed_ms(&self) -> f64 {
        self.timer.elapsed_ms(self.clock.now_ms())
    }

    pub fn render(&self) {
        if let Some(display) = &self.surfaces.display {
            display.set_text(&format_mm_ss_mmm(self.current_elapsed_ms()));
        }
    }

    /// Display refresh callback. Renders and reschedules while running, otherwise lets the loop lapse.
    pub fn on_frame(&mut self) {
        self.pending_frame = None;
        if !self.timer.is_running() {
            return;
        }
        self.render();
        self.schedule_frame();
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn accumulated_ms(&self) -> f64 {
        self.timer.accumulated_ms()
    }

    pub fn frame_pending(&self) -> bool {
        self.pending_frame.is_some()
    }

    fn schedule_frame(&mut self) {
        if self.pending_frame.is_none() {
            self.pending_frame = self.frames.request_frame();
        }
    }

    fn sync_controls(&self) {
        if let Some(start_stop) = &self.surfaces.start_stop {
            start_stop.set_text(self.labels.text(self.timer.label()));
        }
        if let Some(reset) = &self.surfaces.reset {
            reset.set_disabled(!self.timer.reset_enabled());
        }
    }
}

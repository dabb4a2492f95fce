//! Pure timing logic library with no platform dependencies.
//! Testable on host, driven by the browser clock in the widget.

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TimerState {
    /// Never started since creation or the last reset.
    Idle,
    Running,
    /// Stopped with at least one closed run segment banked.
    Paused,
}

/// Label the start/stop control should carry for a given state.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum StartStopLabel {
    Start,
    Stop,
    Resume,
}

impl From<TimerState> for StartStopLabel {
    fn from(state: TimerState) -> Self {
        match state {
            TimerState::Idle => StartStopLabel::Start,
            TimerState::Running => StartStopLabel::Stop,
            TimerState::Paused => StartStopLabel::Resume,
        }
    }
}

pub struct TimerCore {
    state: TimerState,
    accumulated_ms: f64,
    segment_start_ms: Option<f64>,
}

impl TimerCore {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            accumulated_ms: 0.0,
            segment_start_ms: None,
        }
    }

    /// Opens a run segment. Returns false if one was already open.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.state == TimerState::Running {
            return false;
        }
        self.segment_start_ms = Some(now_ms);
        self.state = TimerState::Running;
        true
    }

    /// Closes the open run segment and banks it. Returns false if nothing was running.
    pub fn stop(&mut self, now_ms: f64) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        if let Some(start) = self.segment_start_ms.take() {
            self.accumulated_ms += segment_ms(start, now_ms);
        }
        self.state = TimerState::Paused;
        true
    }

    /// Zeroes the accumulator. Refused while a segment is open.
    pub fn reset(&mut self) -> bool {
        if self.state == TimerState::Running {
            return false;
        }
        self.accumulated_ms = 0.0;
        self.segment_start_ms = None;
        self.state = TimerState::Idle;
        true
    }

    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        match (self.state, self.segment_start_ms) {
            (TimerState::Running, Some(start)) => self.accumulated_ms + segment_ms(start, now_ms),
            _ => self.accumulated_ms,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn accumulated_ms(&self) -> f64 {
        self.accumulated_ms
    }

    pub fn segment_start_ms(&self) -> Option<f64> {
        self.segment_start_ms
    }

    pub fn label(&self) -> StartStopLabel {
        self.state.into()
    }

    /// Reset only makes sense once something has been banked and the timer is stopped.
    pub fn reset_enabled(&self) -> bool {
        self.state == TimerState::Paused
    }
}

impl Default for TimerCore {
    fn default() -> Self {
        Self::new()
    }
}

// A clock reading behind the segment start counts as zero, never negative.
fn segment_ms(start_ms: f64, now_ms: f64) -> f64 {
    (now_ms - start_ms).max(0.0)
}

/// Format milliseconds as "MM:SS:mmm". Minutes are not capped at 59.
pub fn format_mm_ss_mmm(ms: f64) -> String {
    let total_ms = if ms.is_finite() && ms > 0.0 { ms.floor() as u64 } else { 0 };
    let m = total_ms / 60_000;
    let s = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{:02}:{:02}:{:03}", m, s, millis)
}

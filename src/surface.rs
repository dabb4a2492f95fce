//! Seams between the widget logic and the page it runs on.

/// One interactive element on the page.
///
/// Writes are best effort: an implementation that cannot apply a change
/// drops it rather than failing the caller.
pub trait Surface {
    fn set_text(&self, text: &str);
    fn set_disabled(&self, disabled: bool);
    fn set_attribute(&self, name: &str, value: &str);
    fn set_display(&self, display: &str);
    /// The display value currently in effect, after stylesheets are applied.
    fn computed_display(&self) -> String;
    fn set_class(&self, class: &str, on: bool);
}

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FrameHandle(pub i32);

/// Schedules one call to the owner's frame callback on the next display refresh.
pub trait FrameScheduler {
    fn request_frame(&self) -> Option<FrameHandle>;
    fn cancel_frame(&self, handle: FrameHandle);
}

/// `Instant`-backed clock for native targets, where there is no `performance.now()`.
#[cfg(not(target_arch = "wasm32"))]
pub struct InstantClock {
    origin: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl InstantClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for InstantClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

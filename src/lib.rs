//! Stopwatch widget: a start/stop/reset stopwatch, a visual toggle switch and
//! a collapsible about panel.
//!
//! The components only talk to the page through [`surface::Surface`],
//! [`surface::Clock`] and [`surface::FrameScheduler`], so they run and test
//! on the host. The `web` feature adds the browser bindings that find the
//! elements and wire events to them.

pub mod config;
pub mod keys;
pub mod panel;
pub mod stopwatch;
pub mod surface;
pub mod toggle;

#[cfg(feature = "web")]
pub mod web;

#[cfg(test)]
mod fakes;

pub use config::{Labels, Selectors, WidgetConfig};
pub use panel::DisclosurePanel;
pub use stopwatch::{StopwatchEngine, StopwatchSurfaces};
pub use surface::{Clock, FrameHandle, FrameScheduler, Surface};
pub use timer_core::{format_mm_ss_mmm, StartStopLabel, TimerCore, TimerState};
pub use toggle::ToggleControl;

#[cfg(feature = "web")]
pub use web::mount;

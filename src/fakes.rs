//! In-memory stand-ins for the page, used by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::surface::{Clock, FrameHandle, FrameScheduler, Surface};

#[derive(Default)]
struct ElementState {
    text: String,
    disabled: bool,
    attributes: HashMap<String, String>,
    inline_display: Option<String>,
    stylesheet_display: String,
    classes: HashSet<String>,
}

#[derive(Clone)]
pub struct FakeSurface(Rc<RefCell<ElementState>>);

impl FakeSurface {
    pub fn new() -> Self {
        Self::with_stylesheet_display("block")
    }

    pub fn with_stylesheet_display(display: &str) -> Self {
        Self(Rc::new(RefCell::new(ElementState {
            stylesheet_display: display.to_string(),
            ..ElementState::default()
        })))
    }

    pub fn boxed(&self) -> Box<dyn Surface> {
        Box::new(self.clone())
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    pub fn inline_display(&self) -> Option<String> {
        self.0.borrow().inline_display.clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }
}

impl Surface for FakeSurface {
    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_display(&self, display: &str) {
        self.0.borrow_mut().inline_display = Some(display.to_string());
    }

    fn computed_display(&self) -> String {
        let state = self.0.borrow();
        state
            .inline_display
            .clone()
            .unwrap_or_else(|| state.stylesheet_display.clone())
    }

    fn set_class(&self, class: &str, on: bool) {
        let mut state = self.0.borrow_mut();
        if on {
            state.classes.insert(class.to_string());
        } else {
            state.classes.remove(class);
        }
    }
}

/// Clock that only moves when the test says so.
#[derive(Clone, Default)]
pub struct ManualClock(Rc<Cell<f64>>);

impl ManualClock {
    pub fn advance(&self, ms: f64) {
        self.0.set(self.0.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.0.get()
    }
}

#[derive(Default)]
struct SchedulerState {
    next_id: i32,
    pending: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
}

/// Records frame requests; the test fires them by calling the engine's `on_frame`.
#[derive(Clone, Default)]
pub struct FakeScheduler(Rc<RefCell<SchedulerState>>);

impl FakeScheduler {
    pub fn pending(&self) -> usize {
        self.0.borrow().pending.len()
    }

    pub fn cancelled(&self) -> usize {
        self.0.borrow().cancelled.len()
    }

    /// Drops all pending requests, as the browser does once it runs them.
    pub fn fire(&self) -> usize {
        self.0.borrow_mut().pending.drain(..).count()
    }
}

impl FrameScheduler for FakeScheduler {
    fn request_frame(&self) -> Option<FrameHandle> {
        let mut state = self.0.borrow_mut();
        state.next_id += 1;
        let handle = FrameHandle(state.next_id);
        state.pending.push(handle);
        Some(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        let mut state = self.0.borrow_mut();
        state.pending.retain(|h| *h != handle);
        state.cancelled.push(handle);
    }
}

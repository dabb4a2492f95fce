//! Browser bindings: finds the widget's elements on the page and wires them
//! to the stopwatch, toggle and panel.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent, Performance, Window};

use crate::config::WidgetConfig;
use crate::keys::is_activation_key;
use crate::panel::DisclosurePanel;
use crate::stopwatch::{StopwatchEngine, StopwatchSurfaces};
use crate::surface::{Clock, FrameHandle, FrameScheduler, Surface};
use crate::toggle::ToggleControl;

pub struct DomSurface {
    window: Window,
    element: HtmlElement,
}

impl DomSurface {
    pub fn new(window: &Window, element: &HtmlElement) -> Self {
        Self {
            window: window.clone(),
            element: element.clone(),
        }
    }

    fn boxed(window: &Window, element: &HtmlElement) -> Box<dyn Surface> {
        Box::new(Self::new(window, element))
    }
}

impl Surface for DomSurface {
    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn set_disabled(&self, disabled: bool) {
        if disabled {
            self.element.set_attribute("disabled", "").ok();
        } else {
            self.element.remove_attribute("disabled").ok();
        }
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.element.set_attribute(name, value).ok();
    }

    fn set_display(&self, display: &str) {
        self.element.style().set_property("display", display).ok();
    }

    fn computed_display(&self) -> String {
        match self.window.get_computed_style(&self.element) {
            Ok(Some(style)) => style.get_property_value("display").unwrap_or_default(),
            _ => self
                .element
                .style()
                .get_property_value("display")
                .unwrap_or_default(),
        }
    }

    fn set_class(&self, class: &str, on: bool) {
        self.element.class_list().toggle_with_force(class, on).ok();
    }
}

/// `performance.now()`: monotonic, unaffected by wall-clock adjustments.
pub struct PerformanceClock {
    performance: Performance,
}

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        self.performance.now()
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` scheduling. The callback is installed after the
/// engine exists, since it has to call back into it.
pub struct AnimationFrameScheduler {
    window: Window,
    callback: FrameCallback,
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&self) -> Option<FrameHandle> {
        let callback = self.callback.borrow();
        let callback = callback.as_ref()?;
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle(id)),
            Err(err) => {
                log::error!("requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.window.cancel_animation_frame(handle.0).ok();
    }
}

pub type WebStopwatch = StopwatchEngine<PerformanceClock, AnimationFrameScheduler>;

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    mount(&WidgetConfig::default())
}

/// Wires every widget part whose elements are present on the page.
pub fn mount(config: &WidgetConfig) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config.log_level).ok();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if let Err(err) = wire_toggle(&window, &document, config) {
        log::error!("toggle wiring failed: {:?}", err);
    }
    if let Err(err) = wire_panel(&window, &document, config) {
        log::error!("about panel wiring failed: {:?}", err);
    }
    if let Err(err) = wire_stopwatch(&window, &document, config) {
        log::error!("stopwatch wiring failed: {:?}", err);
    }
    log::info!("stopwatch widget mounted");
    Ok(())
}

fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    match document.query_selector(selector) {
        Ok(Some(element)) => match element.dyn_into::<HtmlElement>() {
            Ok(element) => Some(element),
            Err(_) => {
                log::warn!("{} is not an HTML element, skipping", selector);
                None
            }
        },
        Ok(None) => {
            log::warn!("no element matches {}, skipping", selector);
            None
        }
        Err(err) => {
            log::error!("invalid selector {}: {:?}", selector, err);
            None
        }
    }
}

fn on_click(element: &HtmlElement, mut handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut()>::new(move || handler());
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn on_activation_key(
    element: &HtmlElement,
    mut handler: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if is_activation_key(&event.key()) {
            event.prevent_default();
            handler();
        }
    });
    element.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn wire_toggle(window: &Window, document: &Document, config: &WidgetConfig) -> Result<(), JsValue> {
    let Some(element) = query(document, &config.selectors.toggle) else {
        return Ok(());
    };
    let toggle = Rc::new(RefCell::new(ToggleControl::new(
        DomSurface::boxed(window, &element),
        &config.toggle_on_class,
    )));

    let clicked = toggle.clone();
    on_click(&element, move || {
        clicked.borrow_mut().activate();
    })?;
    on_activation_key(&element, move || {
        toggle.borrow_mut().activate();
    })
}

fn wire_panel(window: &Window, document: &Document, config: &WidgetConfig) -> Result<(), JsValue> {
    let trigger = query(document, &config.selectors.panel_trigger);
    let page = query(document, &config.selectors.panel);
    let (Some(trigger), Some(page)) = (trigger, page) else {
        log::warn!("about panel needs both trigger and panel, skipping");
        return Ok(());
    };
    let panel = Rc::new(RefCell::new(DisclosurePanel::new(
        DomSurface::boxed(window, &trigger),
        DomSurface::boxed(window, &page),
    )));

    let clicked = panel.clone();
    on_click(&trigger, move || {
        let visible = clicked.borrow_mut().toggle();
        log::debug!("about panel visible: {}", visible);
    })?;
    on_activation_key(&trigger, move || {
        panel.borrow_mut().toggle();
    })
}

fn wire_stopwatch(window: &Window, document: &Document, config: &WidgetConfig) -> Result<(), JsValue> {
    let display = query(document, &config.selectors.display);
    let start_stop = query(document, &config.selectors.start_stop);
    let reset = query(document, &config.selectors.reset);

    let performance = window
        .performance()
        .ok_or_else(|| JsValue::from_str("performance clock unavailable"))?;
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let frames = AnimationFrameScheduler {
        window: window.clone(),
        callback: callback.clone(),
    };
    let surfaces = StopwatchSurfaces {
        display: display.as_ref().map(|e| DomSurface::boxed(window, e)),
        start_stop: start_stop.as_ref().map(|e| DomSurface::boxed(window, e)),
        reset: reset.as_ref().map(|e| DomSurface::boxed(window, e)),
    };
    let engine = Rc::new(RefCell::new(StopwatchEngine::new(
        PerformanceClock { performance },
        frames,
        surfaces,
        config.labels.clone(),
    )));

    let weak: Weak<RefCell<WebStopwatch>> = Rc::downgrade(&engine);
    *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
        if let Some(engine) = weak.upgrade() {
            engine.borrow_mut().on_frame();
        }
    }));

    if let Some(start_stop) = &start_stop {
        let engine = engine.clone();
        on_click(start_stop, move || engine.borrow_mut().toggle())?;
    }
    if let Some(reset) = &reset {
        let engine = engine.clone();
        on_click(reset, move || engine.borrow_mut().reset())?;
    }
    expose_debug_api(window, &config.debug_global, &engine)
}

fn expose_debug_api(
    window: &Window,
    name: &str,
    engine: &Rc<RefCell<WebStopwatch>>,
) -> Result<(), JsValue> {
    let api = js_sys::Object::new();
    let actions: [(&str, fn(&mut WebStopwatch)); 3] = [
        ("start", WebStopwatch::start),
        ("stop", WebStopwatch::stop),
        ("reset", WebStopwatch::reset),
    ];
    for (key, action) in actions {
        let engine = engine.clone();
        let closure = Closure::<dyn FnMut()>::new(move || action(&mut *engine.borrow_mut()));
        js_sys::Reflect::set(&api, &JsValue::from_str(key), closure.as_ref())?;
        closure.forget();
    }
    js_sys::Reflect::set(window, &JsValue::from_str(name), &api)?;
    log::debug!("debug api exposed as window.{}", name);
    Ok(())
}

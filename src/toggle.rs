use crate::surface::Surface;

/// On/off switch with no effect beyond its own appearance.
pub struct ToggleControl {
    on: bool,
    element: Box<dyn Surface>,
    on_class: String,
}

impl ToggleControl {
    /// `aria-checked` stays unset until the first activation.
    pub fn new(element: Box<dyn Surface>, on_class: &str) -> Self {
        Self {
            on: false,
            element,
            on_class: on_class.to_string(),
        }
    }

    pub fn activate(&mut self) -> bool {
        self.on = !self.on;
        self.element.set_class(&self.on_class, self.on);
        self.element
            .set_attribute("aria-checked", if self.on { "true" } else { "false" });
        self.on
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

use crate::surface::Surface;

/// Collapsible "about" panel and the element that shows or hides it.
///
/// Visibility is tracked here and pushed to the page; the panel's style is
/// only consulted once, to seed the initial state.
pub struct DisclosurePanel {
    visible: bool,
    trigger: Box<dyn Surface>,
    panel: Box<dyn Surface>,
}

impl DisclosurePanel {
    pub fn new(trigger: Box<dyn Surface>, panel: Box<dyn Surface>) -> Self {
        trigger.set_attribute("role", "button");
        trigger.set_attribute("tabindex", "0");
        let visible = panel.computed_display() != "none";
        let disclosure = Self { visible, trigger, panel };
        disclosure.sync_expanded();
        disclosure
    }

    pub fn toggle(&mut self) -> bool {
        self.set_visible(!self.visible);
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.panel.set_display(if visible { "block" } else { "none" });
        self.sync_expanded();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn sync_expanded(&self) {
        self.trigger
            .set_attribute("aria-expanded", if self.visible { "true" } else { "false" });
    }
}

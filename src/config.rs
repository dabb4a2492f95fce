use timer_core::StartStopLabel;

/// CSS selectors used to find the widget's surfaces on the page.
#[derive(Clone, Debug)]
pub struct Selectors {
    pub toggle: String,
    pub display: String,
    pub start_stop: String,
    pub reset: String,
    pub panel_trigger: String,
    pub panel: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            toggle: String::from(".toggle-btn"),
            display: String::from(".stopwatch-display"),
            start_stop: String::from(".start-stop-btn"),
            reset: String::from(".reset-btn"),
            panel_trigger: String::from(".about-section"),
            panel: String::from(".about-page"),
        }
    }
}

/// Text shown on the start/stop control for each timer state.
#[derive(Clone, Debug)]
pub struct Labels {
    pub start: String,
    pub stop: String,
    pub resume: String,
}

impl Labels {
    pub fn text(&self, label: StartStopLabel) -> &str {
        match label {
            StartStopLabel::Start => &self.start,
            StartStopLabel::Stop => &self.stop,
            StartStopLabel::Resume => &self.resume,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            start: String::from("Start"),
            stop: String::from("Stop"),
            resume: String::from("Resume"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct WidgetConfig {
    pub selectors: Selectors,
    pub labels: Labels,
    /// Class added to the toggle while it is on.
    pub toggle_on_class: String,
    /// Name of the `window` property exposing start/stop/reset for debugging.
    pub debug_global: String,
    pub log_level: log::Level,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            labels: Labels::default(),
            toggle_on_class: String::from("is-on"),
            debug_global: String::from("__stopwatch"),
            log_level: log::Level::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_text() {
        let labels = Labels::default();
        assert_eq!(labels.text(StartStopLabel::Start), "Start");
        assert_eq!(labels.text(StartStopLabel::Stop), "Stop");
        assert_eq!(labels.text(StartStopLabel::Resume), "Resume");
    }

    #[test]
    fn test_localized_labels() {
        let labels = Labels {
            start: String::from("Démarrer"),
            stop: String::from("Arrêter"),
            resume: String::from("Reprendre"),
        };
        assert_eq!(labels.text(StartStopLabel::Resume), "Reprendre");
    }
}

//! Canvas configuration.

/// Tunables for input routing.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Maximum gap, in seconds, between two presses that form a double-click.
    pub double_click_interval: f32,
    /// Whether Tab / Shift-Tab move focus along the focus chain.
    pub tab_navigation: bool,
    /// Whether a press nobody accepts drops keyboard focus.
    pub clear_focus_on_empty_click: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            double_click_interval: 0.3,
            tab_navigation: true,
            clear_focus_on_empty_click: true,
        }
    }
}

impl CanvasConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the double-click interval in seconds (builder).
    pub fn with_double_click_interval(mut self, seconds: f32) -> Self {
        self.double_click_interval = seconds;
        self
    }

    /// Enable or disable Tab focus traversal (builder).
    pub fn with_tab_navigation(mut self, enabled: bool) -> Self {
        self.tab_navigation = enabled;
        self
    }

    /// Enable or disable clearing focus on unhandled presses (builder).
    pub fn with_clear_focus_on_empty_click(mut self, enabled: bool) -> Self {
        self.clear_focus_on_empty_click = enabled;
        self
    }
}

//! Default metrics for new nodes.
//!
//! Every constant the engine uses when it creates a node lives here, so a
//! plugin can tune them once (or load them from JSON) instead of restyling
//! every node it builds.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Spacing;

// ---------------------------------------------------------------------------
// WidgetHeights
// ---------------------------------------------------------------------------

/// Initial pixel height of each widget kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetHeights {
    pub label: f64,
    pub button: f64,
    pub checkbox: f64,
    pub dropdown: f64,
    pub color_picker: f64,
    pub spinner: f64,
    pub list_view: f64,
    pub viewport: f64,
}

impl Default for WidgetHeights {
    fn default() -> Self {
        Self {
            label: 12.0,
            button: 13.0,
            checkbox: 10.0,
            dropdown: 13.0,
            color_picker: 12.0,
            spinner: 13.0,
            list_view: 64.0,
            viewport: 64.0,
        }
    }
}

// ---------------------------------------------------------------------------
// GroupBoxMetrics
// ---------------------------------------------------------------------------

/// Padding of a group box frame. The top padding depends on whether the
/// frame shows a label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupBoxMetrics {
    /// Top padding when the label is non-empty.
    pub labelled_top: f64,
    /// Top padding without a label.
    pub bare_top: f64,
    /// Bottom padding.
    pub bottom: f64,
}

impl GroupBoxMetrics {
    /// How much the top padding changes when the label appears or disappears.
    pub fn label_delta(&self) -> f64 {
        self.labelled_top - self.bare_top
    }
}

impl Default for GroupBoxMetrics {
    fn default() -> Self {
        Self { labelled_top: 13.0, bare_top: 8.0, bottom: 5.0 }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Defaults applied to newly created nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Margins of new boxes.
    pub element_margins: Spacing,
    /// Margins of new widgets.
    pub widget_margins: Spacing,
    /// Padding of new boxes and windows.
    pub box_padding: Spacing,
    /// Extra window padding reserved for the title bar and bottom border.
    pub window_chrome: Spacing,
    /// Initial width of a new window.
    pub window_width: f64,
    /// Windows never get shorter than this.
    pub min_window_height: f64,
    /// Group box frame padding.
    pub group_box: GroupBoxMetrics,
    /// Initial widget heights.
    pub heights: WidgetHeights,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            element_margins: Spacing::new(0.0, 0.0, 2.0, 0.0),
            widget_margins: Spacing::new(2.0, 2.0, 4.0, 2.0),
            box_padding: Spacing::new(3.0, 4.0, 3.0, 4.0),
            window_chrome: Spacing::new(15.0, 0.0, 1.0, 0.0),
            window_width: 100.0,
            min_window_height: 16.0,
            group_box: GroupBoxMetrics::default(),
            heights: WidgetHeights::default(),
        }
    }
}

impl Config {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the margins of new widgets (builder).
    pub fn with_widget_margins(mut self, margins: Spacing) -> Self {
        self.widget_margins = margins;
        self
    }

    /// Set the margins of new boxes (builder).
    pub fn with_element_margins(mut self, margins: Spacing) -> Self {
        self.element_margins = margins;
        self
    }

    /// Set the padding of new boxes (builder).
    pub fn with_box_padding(mut self, padding: Spacing) -> Self {
        self.box_padding = padding;
        self
    }

    /// Set the initial window width (builder).
    pub fn with_window_width(mut self, width: f64) -> Self {
        self.window_width = width;
        self
    }

    /// Set the minimum window height (builder).
    pub fn with_min_window_height(mut self, height: f64) -> Self {
        self.min_window_height = height;
        self
    }

    /// Replace the widget heights (builder).
    pub fn with_heights(mut self, heights: WidgetHeights) -> Self {
        self.heights = heights;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.widget_margins, Spacing::new(2.0, 2.0, 4.0, 2.0));
        assert_eq!(config.box_padding, Spacing::new(3.0, 4.0, 3.0, 4.0));
        assert_eq!(config.heights.label, 12.0);
        assert_eq!(config.heights.checkbox, 10.0);
        assert_eq!(config.min_window_height, 16.0);
        assert_eq!(config.group_box.label_delta(), 5.0);
    }

    #[test]
    fn builders() {
        let config = Config::new()
            .with_window_width(250.0)
            .with_min_window_height(40.0)
            .with_box_padding(Spacing::all(1.0));
        assert_eq!(config.window_width, 250.0);
        assert_eq!(config.min_window_height, 40.0);
        assert_eq!(config.box_padding, Spacing::all(1.0));
    }

    #[test]
    fn from_json_partial() {
        let config = Config::from_json(r#"{ "window_width": 320, "heights": { "label": 10 } }"#).unwrap();
        assert_eq!(config.window_width, 320.0);
        assert_eq!(config.heights.label, 10.0);
        assert_eq!(config.heights.button, 13.0);
        assert_eq!(config.widget_margins, Config::default().widget_margins);
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(Config::from_json("{ window_width: ").is_err());
    }
}

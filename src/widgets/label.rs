//! Label widget: a line of static text.

use crate::config::WidgetHeights;
use crate::description::{TextProps, WidgetProps};
use crate::widget::traits::{Control, WidgetKind};

/// A text label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Label {
    text: String,
}

impl Label {
    /// Create a label with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Control for Label {
    const KIND: &'static str = "label";

    fn widget_type(&self) -> &'static str {
        "label"
    }

    fn props(&self) -> WidgetProps {
        WidgetProps::Text(TextProps { text: self.text.clone() })
    }

    fn default_height(&self, heights: &WidgetHeights) -> f64 {
        heights.label
    }

    fn from_kind(kind: &WidgetKind) -> Option<&Self> {
        Self::borrow_kind(kind)
    }

    fn from_kind_mut(kind: &mut WidgetKind) -> Option<&mut Self> {
        Self::borrow_kind_mut(kind)
    }
}

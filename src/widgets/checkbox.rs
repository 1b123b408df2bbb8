//! Checkbox widget: a tick box with text behind it.

use crate::config::WidgetHeights;
use crate::description::{CheckboxProps, WidgetProps};
use crate::event::{Event, Interaction};
use crate::widget::traits::{Control, WidgetKind};

/// A checkbox. New checkboxes start unchecked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Checkbox {
    text: String,
    checked: bool,
}

impl Checkbox {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), checked: false }
    }

    /// Set the initial state (builder pattern).
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
}

impl Control for Checkbox {
    const KIND: &'static str = "checkbox";

    fn widget_type(&self) -> &'static str {
        "checkbox"
    }

    fn props(&self) -> WidgetProps {
        WidgetProps::Checkbox(CheckboxProps { text: self.text.clone(), is_checked: self.checked })
    }

    fn default_height(&self, heights: &WidgetHeights) -> f64 {
        heights.checkbox
    }

    fn interact(&mut self, interaction: Interaction) -> Option<Event> {
        match interaction {
            Interaction::Check(checked) => {
                self.checked = checked;
                Some(Event::Toggled(checked))
            }
            _ => None,
        }
    }

    fn from_kind(kind: &WidgetKind) -> Option<&Self> {
        Self::borrow_kind(kind)
    }

    fn from_kind_mut(kind: &mut WidgetKind) -> Option<&mut Self> {
        Self::borrow_kind_mut(kind)
    }
}

//! Dropdown widget: pick one item from a fixed list.
//!
//! [`Dropdown::color_picker`] builds a dropdown listing the host's 32 palette
//! colours, whose selected index is the palette index.

use crate::config::WidgetHeights;
use crate::description::{DropdownProps, WidgetProps};
use crate::error::{Error, Result};
use crate::event::{Event, Interaction};
use crate::widget::traits::{Control, WidgetKind};

/// Host palette colour names, in palette order.
pub const PALETTE: [&str; 32] = [
    "Black",
    "Grey",
    "White",
    "Dark Purple",
    "Light Purple",
    "Bright Purple",
    "Dark Blue",
    "Light Blue",
    "Icy Blue",
    "Teal",
    "Aquamarine",
    "Saturated Green",
    "Dark Green",
    "Moss Green",
    "Bright Green",
    "Olive Green",
    "Dark Olive Green",
    "Bright Yellow",
    "Yellow",
    "Dark Yellow",
    "Light Orange",
    "Dark Orange",
    "Light Brown",
    "Saturated Brown",
    "Dark Brown",
    "Salmon Pink",
    "Bordeaux Red",
    "Saturated Red",
    "Bright Red",
    "Dark Pink",
    "Bright Pink",
    "Light Pink",
];

/// A dropdown list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dropdown {
    items: Vec<String>,
    selected: usize,
    color_picker: bool,
}

impl Dropdown {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { items: items.into_iter().map(Into::into).collect(), selected: 0, color_picker: false }
    }

    /// A dropdown of the palette colour names.
    pub fn color_picker() -> Self {
        Self { color_picker: true, ..Self::new(PALETTE) }
    }

    /// Whether this dropdown was built by [`Dropdown::color_picker`].
    pub fn is_color_picker(&self) -> bool {
        self.color_picker
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Replace the items. The selection is reset if it no longer fits.
    pub fn set_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        if self.selected >= self.items.len() {
            self.selected = 0;
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected item's text, if the list is not empty.
    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }

    /// Select an item by index.
    pub fn set_selected_index(&mut self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(Error::IndexOutOfRange { index, len: self.items.len() });
        }
        self.selected = index;
        Ok(())
    }
}

impl Control for Dropdown {
    const KIND: &'static str = "dropdown";

    fn widget_type(&self) -> &'static str {
        "dropdown"
    }

    fn props(&self) -> WidgetProps {
        WidgetProps::Dropdown(DropdownProps { items: self.items.clone(), selected_index: self.selected })
    }

    fn default_height(&self, heights: &WidgetHeights) -> f64 {
        if self.color_picker {
            heights.color_picker
        } else {
            heights.dropdown
        }
    }

    fn check(&self, interaction: Interaction) -> Result<()> {
        match interaction {
            Interaction::Select(index) if index >= self.items.len() => {
                Err(Error::IndexOutOfRange { index, len: self.items.len() })
            }
            _ => Ok(()),
        }
    }

    fn interact(&mut self, interaction: Interaction) -> Option<Event> {
        match interaction {
            Interaction::Select(index) => {
                self.set_selected_index(index).ok()?;
                Some(Event::Selected(index))
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

// ===========================================================================
// Tests
// ===========================================================================

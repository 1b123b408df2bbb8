//! Description records: flat, host-consumable snapshots of nodes.
//!
//! Producing a description never mutates the tree. Records serialize to the
//! camelCase shape the host GUI API expects; event callbacks are not part of
//! the record (the host reports interactions through
//! [`Ui::dispatch`](crate::Ui::dispatch) instead).

use serde::Serialize;

use crate::geometry::Region;
use crate::widgets::list_view::{Cell, Scrollbars};

// ---------------------------------------------------------------------------
// Widget records
// ---------------------------------------------------------------------------

/// The description of a single host widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDescription {
    /// Host widget type (e.g. `"label"`, `"dropdown"`).
    #[serde(rename = "type")]
    pub widget_type: &'static str,
    /// Unique name used to find the live host widget.
    pub name: String,
    /// Position relative to the window's top-left corner.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub is_disabled: bool,
    /// Kind-specific fields.
    #[serde(flatten)]
    pub props: WidgetProps,
}

impl WidgetDescription {
    /// The window-relative rectangle.
    pub fn region(&self) -> Region {
        Region::new(self.x, self.y, self.width, self.height)
    }
}

/// Kind-specific description fields, flattened into [`WidgetDescription`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WidgetProps {
    /// Labels, spinners and group boxes.
    Text(TextProps),
    Button(ButtonProps),
    Checkbox(CheckboxProps),
    Dropdown(DropdownProps),
    ListView(ListViewProps),
    Viewport(ViewportProps),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextProps {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<u32>,
    pub border: bool,
    pub is_pressed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxProps {
    pub text: String,
    pub is_checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownProps {
    pub items: Vec<String>,
    pub selected_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListViewProps {
    pub scrollbars: Scrollbars,
    pub is_striped: bool,
    pub show_column_headers: bool,
    pub can_select: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_cell: Option<Cell>,
    pub columns: Vec<ColumnDescription>,
    pub items: Vec<Vec<String>>,
}

/// One list view column. Exactly one of the width fields groups is present,
/// depending on the column's width mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    pub can_sort: bool,
    pub header_tooltip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportProps {
    pub view_x: f64,
    pub view_y: f64,
    pub zoom: i32,
    pub rotation: i32,
}

// ---------------------------------------------------------------------------
// Window record
// ---------------------------------------------------------------------------

/// The description handed to the host when a window is opened, and applied
/// to the live window when window-level state changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowDescription {
    pub classification: String,
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub title: String,
    /// `[title bar, main]` palette indices.
    pub colours: [u8; 2],
    pub widgets: Vec<WidgetDescription>,
    /// Screen position, only present when reopening at a known place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl WindowDescription {
    /// Find a widget description by name.
    pub fn widget(&self, name: &str) -> Option<&WidgetDescription> {
        self.widgets.iter().find(|w| w.name == name)
    }
}

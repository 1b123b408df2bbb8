//! List view widget: a scrollable table of text items.
//!
//! A list view has zero or more [`ListViewColumn`]s and a list of items, each
//! item holding one text field per column (or a single field when there are
//! fewer than two columns). Adding or removing items and changing the column
//! count all change the widget's shape, so the host window is rebuilt.

use serde::Serialize;

use crate::config::WidgetHeights;
use crate::description::{ColumnDescription, ListViewProps, WidgetProps};
use crate::error::{Error, Result};
use crate::event::{Event, Interaction};
use crate::widget::traits::{Control, WidgetKind};

// ---------------------------------------------------------------------------
// Small types
// ---------------------------------------------------------------------------

/// Which scrollbars the host shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scrollbars {
    None,
    Horizontal,
    #[default]
    Vertical,
    Both,
}

/// A row/column position inside a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// How the host sizes a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Sized by content, optionally bounded.
    Auto { min: Option<f64>, max: Option<f64> },
    /// A share of the width. Only works when every column uses a ratio.
    Ratio(f64),
    /// A fixed pixel width.
    Fixed(f64),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Auto { min: None, max: None }
    }
}

// ---------------------------------------------------------------------------
// ListViewColumn
// ---------------------------------------------------------------------------

/// A list view column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListViewColumn {
    header: Option<String>,
    tooltip: String,
    can_sort: bool,
    width: ColumnWidth,
}

impl ListViewColumn {
    /// A column with a header and automatic width.
    pub fn new(header: impl Into<String>) -> Self {
        Self { header: Some(header.into()), ..Self::default() }
    }

    /// A column without a header.
    pub fn untitled() -> Self {
        Self::default()
    }

    /// Set the header tooltip (builder pattern).
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    /// Allow sorting by this column (builder pattern).
    pub fn with_can_sort(mut self, can_sort: bool) -> Self {
        self.can_sort = can_sort;
        self
    }

    /// Set the width mode (builder pattern).
    pub fn with_width(mut self, width: ColumnWidth) -> Self {
        self.width = width;
        self
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn can_sort(&self) -> bool {
        self.can_sort
    }

    pub fn width(&self) -> ColumnWidth {
        self.width
    }

    pub fn set_width(&mut self, width: ColumnWidth) {
        self.width = width;
    }

    fn describe(&self) -> ColumnDescription {
        let mut desc = ColumnDescription {
            header: self.header.clone(),
            can_sort: self.can_sort,
            header_tooltip: self.tooltip.clone(),
            min_width: None,
            max_width: None,
            ratio_width: None,
            width: None,
        };
        match self.width {
            ColumnWidth::Auto { min, max } => {
                desc.min_width = min.filter(|w| *w > 0.0);
                desc.max_width = max.filter(|w| *w > 0.0);
            }
            ColumnWidth::Ratio(ratio) => desc.ratio_width = Some(ratio),
            ColumnWidth::Fixed(width) => desc.width = Some(width),
        }
        desc
    }
}

// ---------------------------------------------------------------------------
// ListView
// ---------------------------------------------------------------------------

/// A list view.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    columns: Vec<ListViewColumn>,
    items: Vec<Vec<String>>,
    scrollbars: Scrollbars,
    striped: bool,
    show_column_headers: bool,
    can_select: bool,
    selected: Option<Cell>,
    highlighted: Option<Cell>,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            items: Vec::new(),
            scrollbars: Scrollbars::Vertical,
            striped: false,
            show_column_headers: true,
            can_select: false,
            selected: None,
            highlighted: None,
        }
    }
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[ListViewColumn] {
        &self.columns
    }

    /// Replace the columns. An empty list keeps the current columns.
    pub fn set_columns(&mut self, columns: Vec<ListViewColumn>) {
        if !columns.is_empty() {
            self.columns = columns;
        }
    }

    /// Replace the columns with plain headed columns.
    pub fn set_column_headers<I, S>(&mut self, headers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_columns(headers.into_iter().map(ListViewColumn::new).collect());
    }

    /// Mutable access to one column.
    pub fn column_mut(&mut self, index: usize) -> Option<&mut ListViewColumn> {
        self.columns.get_mut(index)
    }

    pub fn items(&self) -> &[Vec<String>] {
        &self.items
    }

    /// Append an item. It must have one field per column, or exactly one
    /// field when the list view has fewer than two columns.
    pub fn add_item<I, S>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let expected = self.columns.len().max(1);
        if fields.len() != expected {
            return Err(Error::ColumnMismatch { expected, found: fields.len() });
        }
        self.items.push(fields);
        Ok(())
    }

    /// Remove the item at `index`, keeping the selection on the same item.
    pub fn remove_item(&mut self, index: usize) -> Result<Vec<String>> {
        if index >= self.items.len() {
            return Err(Error::IndexOutOfRange { index, len: self.items.len() });
        }
        let removed = self.items.remove(index);
        self.selected = match self.selected {
            Some(cell) if cell.row == index => None,
            Some(cell) if cell.row > index => Some(Cell::new(cell.row - 1, cell.column)),
            other => other,
        };
        Ok(removed)
    }

    /// Remove every item.
    pub fn clear_items(&mut self) {
        self.items.clear();
        self.selected = None;
        self.highlighted = None;
    }

    pub fn scrollbars(&self) -> Scrollbars {
        self.scrollbars
    }

    pub fn set_scrollbars(&mut self, scrollbars: Scrollbars) {
        self.scrollbars = scrollbars;
    }

    /// Whether every other row has a different background.
    pub fn is_striped(&self) -> bool {
        self.striped
    }

    pub fn set_striped(&mut self, striped: bool) {
        self.striped = striped;
    }

    /// Whether column headers are shown. The host never shows them for a
    /// list view without columns.
    pub fn show_column_headers(&self) -> bool {
        self.show_column_headers
    }

    pub fn set_show_column_headers(&mut self, show: bool) {
        self.show_column_headers = show;
    }

    pub fn can_select(&self) -> bool {
        self.can_select
    }

    pub fn set_can_select(&mut self, can_select: bool) {
        self.can_select = can_select;
    }

    pub fn selected_cell(&self) -> Option<Cell> {
        self.selected
    }

    pub fn set_selected_cell(&mut self, cell: Option<Cell>) {
        self.selected = cell;
    }

    /// The cell under the pointer, as last reported by the host.
    pub fn highlighted_cell(&self) -> Option<Cell> {
        self.highlighted
    }
}

impl Control for ListView {
    const KIND: &'static str = "list view";

    fn widget_type(&self) -> &'static str {
        "listview"
    }

    fn props(&self) -> WidgetProps {
        WidgetProps::ListView(ListViewProps {
            scrollbars: self.scrollbars,
            is_striped: self.striped,
            show_column_headers: self.show_column_headers && !self.columns.is_empty(),
            can_select: self.can_select,
            selected_cell: self.selected.filter(|_| self.can_select),
            columns: self.columns.iter().map(ListViewColumn::describe).collect(),
            items: self.items.clone(),
        })
    }

    fn default_height(&self, heights: &WidgetHeights) -> f64 {
        heights.list_view
    }

    fn interact(&mut self, interaction: Interaction) -> Option<Event> {
        match interaction {
            Interaction::CellClick { row, column } => {
                self.selected = Some(Cell::new(row, column));
                Some(Event::CellClicked { row, column })
            }
            Interaction::CellHighlight { row, column } => {
                self.highlighted = Some(Cell::new(row, column));
                Some(Event::CellHighlighted { row, column })
            }
            _ => None,
        }
    }

    fn shape(&self) -> (usize, usize) {
        (self.columns.len(), self.items.len())
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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn rides() -> ListView {
        let mut view = ListView::new();
        view.set_column_headers(["Ride", "Excitement"]);
        view.add_item(["Wooden Coaster", "6.20"]).unwrap();
        view.add_item(["Merry-Go-Round", "1.10"]).unwrap();
        view.add_item(["Log Flume", "4.85"]).unwrap();
        view
    }

    #[test]
    fn item_fields_must_match_columns() {
        let mut view = rides();
        let err = view.add_item(["Maze"]).unwrap_err();
        assert!(matches!(err, Error::ColumnMismatch { expected: 2, found: 1 }));

        let mut plain = ListView::new();
        plain.add_item(["only"]).unwrap();
        assert!(plain.add_item(["a", "b"]).is_err());
    }

    #[test]
    fn remove_item_adjusts_selection() {
        let mut view = rides();
        view.set_selected_cell(Some(Cell::new(2, 1)));
        view.remove_item(0).unwrap();
        assert_eq!(view.selected_cell(), Some(Cell::new(1, 1)));

        view.remove_item(1).unwrap();
        assert_eq!(view.selected_cell(), None);
        assert_eq!(view.items().len(), 1);

        assert!(matches!(view.remove_item(5), Err(Error::IndexOutOfRange { index: 5, len: 1 })));
    }

    #[test]
    fn headers_hidden_without_columns() {
        let view = ListView::new();
        assert!(view.show_column_headers());
        let WidgetProps::ListView(props) = view.props() else { panic!("not a list view") };
        assert!(!props.show_column_headers);
    }

    #[test]
    fn selection_described_only_when_selectable() {
        let mut view = rides();
        view.set_selected_cell(Some(Cell::new(0, 0)));
        let WidgetProps::ListView(props) = view.props() else { panic!("not a list view") };
        assert_eq!(props.selected_cell, None);

        view.set_can_select(true);
        let WidgetProps::ListView(props) = view.props() else { panic!("not a list view") };
        assert_eq!(props.selected_cell, Some(Cell::new(0, 0)));
    }

    #[test]
    fn column_width_modes() {
        let auto = ListViewColumn::new("A").with_width(ColumnWidth::Auto { min: Some(20.0), max: Some(-1.0) });
        let ratio = ListViewColumn::new("B").with_width(ColumnWidth::Ratio(2.0));
        let fixed = ListViewColumn::untitled().with_tooltip("Cost").with_width(ColumnWidth::Fixed(40.0));

        assert_eq!(
            serde_json::to_value(auto.describe()).unwrap(),
            json!({ "header": "A", "canSort": false, "headerTooltip": "", "minWidth": 20.0 })
        );
        assert_eq!(
            serde_json::to_value(ratio.describe()).unwrap(),
            json!({ "header": "B", "canSort": false, "headerTooltip": "", "ratioWidth": 2.0 })
        );
        assert_eq!(
            serde_json::to_value(fixed.describe()).unwrap(),
            json!({ "canSort": false, "headerTooltip": "Cost", "width": 40.0 })
        );
    }

    #[test]
    fn cell_interactions_update_state() {
        let mut view = rides();
        assert_eq!(
            view.interact(Interaction::CellClick { row: 1, column: 0 }),
            Some(Event::CellClicked { row: 1, column: 0 })
        );
        assert_eq!(view.selected_cell(), Some(Cell::new(1, 0)));
        view.interact(Interaction::CellHighlight { row: 2, column: 1 });
        assert_eq!(view.highlighted_cell(), Some(Cell::new(2, 1)));
    }

    #[test]
    fn shape_tracks_columns_and_items() {
        let mut view = rides();
        assert_eq!(view.shape(), (2, 3));
        view.add_item(["Maze", "2.00"]).unwrap();
        assert_eq!(view.shape(), (2, 4));
        view.set_columns(Vec::new());
        assert_eq!(view.columns().len(), 2);
    }

    #[test]
    fn scrollbars_serialize_lowercase() {
        assert_eq!(serde_json::to_value(Scrollbars::Both).unwrap(), json!("both"));
        assert_eq!(ListView::new().scrollbars(), Scrollbars::Vertical);
    }
}

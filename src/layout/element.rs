//! Element geometry: size resolution, size setters, change propagation.
//!
//! Sizes are resolved on every query from the stored [`Dimension`]s and the
//! current state of the ancestors; nothing is cached except the positions the
//! parent's layout pass writes.

use crate::error::{Error, Result};
use crate::geometry::{Axis, Offset, Region, Size};
use crate::tree::{Dimension, NodeId};
use crate::ui::Ui;

impl Ui {
    // -- resolution ---------------------------------------------------------

    /// Resolved width in pixels.
    pub fn pixel_width(&self, id: NodeId) -> f64 {
        self.pixel_size(id, Axis::Horizontal)
    }

    /// Resolved height in pixels.
    pub fn pixel_height(&self, id: NodeId) -> f64 {
        self.pixel_size(id, Axis::Vertical)
    }

    /// Resolved size along `axis`.
    ///
    /// 1. Roots use their stored value.
    /// 2. The filler of a parent stacking along `axis` gets the parent's
    ///    remaining space.
    /// 3. Relative sizes are a percentage of the parent's content size. Along
    ///    the parent's main axis the collapsed gaps between siblings are taken
    ///    off first, so siblings at 50% + 50% fit exactly.
    /// 4. Otherwise the stored pixel value.
    pub fn pixel_size(&self, id: NodeId, axis: Axis) -> f64 {
        let element = &self.tree[id].element;
        let stored = element.dimension(axis);
        let Some(parent) = self.tree.parent(id) else {
            return stored.value;
        };
        let main_axis = self.container(parent).map(|c| c.axis);

        if element.is_filler && main_axis == Some(axis) {
            return self.remaining_space(parent, axis);
        }
        if stored.relative {
            let mut base = self.content_size(parent, axis);
            if main_axis == Some(axis) {
                base -= self.total_child_margins(parent, axis);
            }
            return base / 100.0 * stored.value;
        }
        stored.value
    }

    /// Resolved size of both axes.
    pub fn pixel_dimensions(&self, id: NodeId) -> Size {
        Size::new(self.pixel_width(id), self.pixel_height(id))
    }

    // -- absolute setters ---------------------------------------------------

    /// Set an absolute width. Windows route through their own bounds logic.
    pub fn set_width(&mut self, id: NodeId, pixels: f64) {
        self.set_size(id, Axis::Horizontal, pixels);
    }

    /// Set an absolute height. Windows never get shorter than the configured
    /// minimum.
    pub fn set_height(&mut self, id: NodeId, pixels: f64) {
        self.set_size(id, Axis::Vertical, pixels);
    }

    pub(crate) fn set_size(&mut self, id: NodeId, axis: Axis, pixels: f64) {
        if self.is_window(id) {
            self.set_window_size(id, axis, pixels);
            return;
        }
        *self.tree[id].element.dimension_mut(axis) = Dimension::pixels(pixels);
        self.on_dimensions_changed(id);
    }

    // -- relative setters ---------------------------------------------------

    /// Size the width as a percentage of the parent's content width.
    ///
    /// The percentage is not clamped; values above 100 overflow the parent.
    /// Windows have no parent and ignore relative sizes.
    pub fn set_relative_width(&mut self, id: NodeId, percentage: f64) {
        self.set_relative_size(id, Axis::Horizontal, percentage);
    }

    /// Size the height as a percentage of the parent's content height.
    pub fn set_relative_height(&mut self, id: NodeId, percentage: f64) {
        self.set_relative_size(id, Axis::Vertical, percentage);
    }

    fn set_relative_size(&mut self, id: NodeId, axis: Axis, percentage: f64) {
        if self.is_window(id) {
            return;
        }
        *self.tree[id].element.dimension_mut(axis) = Dimension::percent(percentage);
        self.on_dimensions_changed(id);
    }

    /// The width as a percentage of the parent's content width.
    ///
    /// Relative widths are returned exactly as set. Absolute widths are
    /// converted, which needs a parent.
    pub fn relative_width(&self, id: NodeId) -> Result<f64> {
        self.relative_size(id, Axis::Horizontal)
    }

    pub fn relative_height(&self, id: NodeId) -> Result<f64> {
        self.relative_size(id, Axis::Vertical)
    }

    fn relative_size(&self, id: NodeId, axis: Axis) -> Result<f64> {
        let stored = self.tree[id].element.dimension(axis);
        if stored.relative {
            return Ok(stored.value);
        }
        let parent = self.tree.parent(id).ok_or(Error::NoParent(id))?;
        Ok(stored.value / self.content_size(parent, axis) * 100.0)
    }

    /// Whether the size along `axis` is relative.
    pub fn has_relative_size(&self, id: NodeId, axis: Axis) -> bool {
        self.tree[id].element.dimension(axis).relative
    }

    // -- positions ----------------------------------------------------------

    /// Offset from the parent's origin, as placed by the last layout pass.
    pub fn position(&self, id: NodeId) -> Offset {
        self.tree[id].element.position
    }

    /// Position relative to the window's top-left corner: the sum of every
    /// ancestor's local offset. Windows are at the origin of themselves.
    pub fn window_position(&self, id: NodeId) -> Offset {
        if self.is_window(id) {
            return Offset::ZERO;
        }
        let own = self.tree[id].element.position;
        match self.tree.parent(id) {
            Some(parent) => self.window_position(parent) + own,
            None => own,
        }
    }

    /// The window-relative rectangle a description would report.
    pub fn window_region(&self, id: NodeId) -> Region {
        Region::from_parts(self.window_position(id), self.pixel_dimensions(id))
    }

    // -- propagation --------------------------------------------------------

    /// Re-lay out after a geometry change of `id`.
    ///
    /// A container lays out its own children first and forwards the change
    /// to every child sized relative to it. Then the parent (if any) lays out
    /// its children again, and `id` is marked for sync.
    pub fn on_dimensions_changed(&mut self, id: NodeId) {
        if self.is_container(id) {
            self.update_child_dimensions(id);
            let children = self.tree.children(id).to_vec();
            for child in children {
                if self.tree[child].element.has_relative_size() {
                    self.on_dimensions_changed(child);
                }
            }
        }
        if let Some(parent) = self.tree.parent(id) {
            self.update_child_dimensions(parent);
        }
        self.request_sync(id);
    }

    /// Mark `id` as out of date with the host.
    ///
    /// Does nothing unless the node belongs to an open window: a closed tree
    /// is described from scratch when it opens.
    pub fn request_sync(&mut self, id: NodeId) {
        if self.is_in_open_window(id) {
            self.tree[id].element.require_sync = true;
        }
    }

    /// Whether `id` or any of its ancestors is marked for sync.
    pub fn requires_sync(&self, id: NodeId) -> bool {
        self.tree[id].element.require_sync
            || self.tree.ancestors(id).into_iter().any(|a| self.tree[a].element.require_sync)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Spacing;

    #[test]
    fn roots_use_stored_value() {
        let mut ui = Ui::new();
        let column = ui.vertical_box();
        // A detached box keeps its stored 100 even though it means 100%.
        assert_eq!(ui.pixel_width(column), 100.0);
        ui.set_height(column, 40.0);
        assert_eq!(ui.pixel_height(column), 40.0);
    }

    #[test]
    fn relative_cross_axis_uses_full_content() {
        let mut ui = Ui::new();
        let column = ui.vertical_box();
        ui.set_width(column, 208.0);
        let label = ui.label("x");
        ui.add_child(column, label).unwrap();
        ui.set_relative_width(label, 50.0);
        // Content is 208 - 4 - 4 = 200.
        assert_eq!(ui.pixel_width(label), 100.0);
    }

    #[test]
    fn relative_main_axis_subtracts_gaps() {
        let mut ui = Ui::new();
        let row = ui.horizontal_box();
        ui.set_width(row, 208.0);
        let left = ui.label("l");
        let right = ui.label("r");
        ui.add_child(row, left).unwrap();
        ui.add_child(row, right).unwrap();
        ui.set_margins(left, Spacing::new(0.0, 4.0, 0.0, 0.0));
        ui.set_margins(right, Spacing::new(0.0, 0.0, 0.0, 0.0));
        ui.set_relative_width(left, 50.0);
        ui.set_relative_width(right, 50.0);
        // (200 - 4) / 2 each.
        assert_eq!(ui.pixel_width(left), 98.0);
        assert_eq!(ui.pixel_width(right), 98.0);
        assert_eq!(ui.position(right).x, 4.0 + 98.0 + 4.0);
    }

    #[test]
    fn percentages_are_not_clamped() {
        let mut ui = Ui::new();
        let column = ui.vertical_box();
        ui.set_width(column, 108.0);
        let label = ui.label("x");
        ui.add_child(column, label).unwrap();
        ui.set_relative_width(label, 150.0);
        assert_eq!(ui.pixel_width(label), 150.0);
        ui.set_relative_width(label, -10.0);
        assert_eq!(ui.pixel_width(label), -10.0);
    }

    #[test]
    fn relative_size_round_trips_exactly() {
        let mut ui = Ui::new();
        let column = ui.vertical_box();
        let label = ui.label("x");
        ui.add_child(column, label).unwrap();
        ui.set_relative_width(label, 33.3);
        assert_eq!(ui.relative_width(label).unwrap(), 33.3);
    }

    #[test]
    fn relative_size_from_pixels() {
        let mut ui = Ui::new();
        let column = ui.vertical_box();
        ui.set_width(column, 208.0);
        let label = ui.label("x");
        ui.add_child(column, label).unwrap();
        ui.set_width(label, 50.0);
        assert_eq!(ui.relative_width(label).unwrap(), 25.0);
    }

    #[test]
    fn relative_size_needs_parent() {
        let mut ui = Ui::new();
        let label = ui.label("x");
        ui.set_width(label, 50.0);
        assert!(matches!(ui.relative_width(label), Err(Error::NoParent(id)) if id == label));
        ui.set_relative_height(label, 10.0);
        assert_eq!(ui.relative_height(label).unwrap(), 10.0);
    }

    #[test]
    fn window_position_sums_ancestors() {
        let mut ui = Ui::new();
        let window = ui.window("w", "W");
        let column = ui.vertical_box();
        let label = ui.label("x");
        ui.add_child(window, column).unwrap();
        ui.add_child(column, label).unwrap();

        // Window padding 18 top / 4 left, box padding 3 top / 4 left, label
        // margin 2 left.
        assert_eq!(ui.window_position(window), Offset::ZERO);
        assert_eq!(ui.window_position(column), Offset::new(4.0, 18.0));
        assert_eq!(ui.window_position(label), Offset::new(4.0 + 4.0 + 2.0, 18.0 + 3.0));
    }

    #[test]
    fn closed_trees_never_get_dirty() {
        let mut ui = Ui::new();
        let window = ui.window("w", "W");
        let label = ui.label("x");
        ui.add_child(window, label).unwrap();
        ui.set_height(label, 30.0);
        assert!(!ui.requires_sync(label));
        assert!(!ui.requires_sync(window));
    }
}

//! Stacking strategy shared by vertical and horizontal boxes.
//!
//! One pass walks the children in order along the container's main axis:
//!
//! ```text
//!  padding.leading ─┐
//!                   ▼
//!   ┌───────┐ gap ┌───────┐ gap ┌───────┐ padding.trailing
//!   │ child │◄───►│ child │◄───►│ child │◄──────────────►│
//!   └───────┘     └───────┘     └───────┘
//!   gap = max(previous trailing margin, next leading margin)
//! ```
//!
//! On the cross axis each child sits at the leading padding plus its own
//! leading margin. Afterwards a box with an absolute main size grows to fit
//! its children; horizontal boxes also grow in height to fit the tallest
//! absolutely sized child. Boxes never shrink on their own.

use tracing::debug;

use crate::geometry::{Axis, Offset, Region, Size};
use crate::tree::NodeId;
use crate::ui::Ui;

impl Ui {
    /// Position every child of `id` and grow `id` if the children overflow.
    ///
    /// Child containers are laid out first, so their own growth is known
    /// before they are measured. Children whose rectangle moved are marked
    /// for sync.
    pub fn update_child_dimensions(&mut self, id: NodeId) {
        let Some(container) = self.container(id) else {
            return;
        };
        let axis = container.axis;
        let cross = axis.cross();
        let padding = container.padding;
        let children = self.tree.children(id).to_vec();

        let mut cursor = padding.leading(axis);
        // Extent the box must have, not counting children whose size is
        // derived from the box itself.
        let mut required = padding.leading(axis);
        let mut tallest = 0.0_f64;

        for (index, &child) in children.iter().enumerate() {
            if self.is_container(child) {
                self.update_child_dimensions(child);
            }

            let element = &self.tree[child].element;
            let derived = element.is_filler || element.dimension(axis).relative;
            let height_is_relative = element.height.relative;
            let cross_margin = element.margins.leading(cross);

            let mut position = Offset::ZERO;
            position.set_along(axis, cursor);
            position.set_along(cross, padding.leading(cross) + cross_margin);

            let size = self.pixel_dimensions(child);
            let main = size.along(axis);
            let gap = match children.get(index + 1) {
                Some(&next) => self.gap_between(child, next, axis),
                None => 0.0,
            };
            cursor += main + gap;
            required += if derived { 0.0 } else { main } + gap;

            if axis == Axis::Horizontal && !height_is_relative {
                tallest = tallest.max(size.height);
            }

            self.place(child, position, size);
        }

        self.grow_to_fit(id, axis, required + padding.trailing(axis));
        if axis == Axis::Horizontal && !children.is_empty() {
            self.grow_to_fit(id, Axis::Vertical, tallest + padding.height());
        }
    }

    /// Store a child's local rectangle, marking it for sync if it moved or
    /// changed size.
    fn place(&mut self, child: NodeId, position: Offset, size: Size) {
        let region = Region::from_parts(position, size);
        let element = &mut self.tree[child].element;
        element.position = position;
        if element.layout != region {
            element.layout = region;
            self.request_sync(child);
        }
    }

    /// Grow an absolutely sized axis of `id` to at least `extent`.
    fn grow_to_fit(&mut self, id: NodeId, axis: Axis, extent: f64) {
        let stored = self.tree[id].element.dimension(axis);
        if stored.relative || extent <= stored.value {
            return;
        }
        debug!(node = ?id, ?axis, from = stored.value, to = extent, "container grows to fit children");
        self.set_size(id, axis, extent);
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
    fn vertical_stack_positions() {
        let mut ui = Ui::new();
        let column = ui.vertical_box();
        let a = ui.label("a");
        let b = ui.checkbox("b");
        ui.add_child(column, a).unwrap();
        ui.add_child(column, b).unwrap();

        // Padding 3 top / 4 left, widget margins 2 top / 4 bottom / 2 left.
        assert_eq!(ui.position(a), Offset::new(4.0 + 2.0, 3.0));
        assert_eq!(ui.position(b), Offset::new(4.0 + 2.0, 3.0 + 12.0 + 4.0));
    }

    #[test]
    fn horizontal_stack_positions() {
        let mut ui = Ui::new();
        let row = ui.horizontal_box();
        let a = ui.text_button("a");
        let b = ui.text_button("b");
        ui.add_child(row, a).unwrap();
        ui.add_child(row, b).unwrap();
        ui.set_width(a, 30.0);
        ui.set_width(b, 30.0);

        assert_eq!(ui.position(a), Offset::new(4.0, 3.0 + 2.0));
        assert_eq!(ui.position(b), Offset::new(4.0 + 30.0 + 2.0, 3.0 + 2.0));
    }

    #[test]
    fn margin_gap_is_the_larger_side() {
        let mut ui = Ui::new();
        let column = ui.vertical_box();
        ui.set_padding(column, Spacing::ZERO).unwrap();
        let a = ui.label("a");
        let b = ui.label("b");
        ui.add_child(column, a).unwrap();
        ui.add_child(column, b).unwrap();

        ui.set_margins(a, Spacing::new(0.0, 0.0, 4.0, 0.0));
        ui.set_margins(b, Spacing::new(6.0, 0.0, 0.0, 0.0));
        assert_eq!(ui.position(b).y - (ui.position(a).y + 12.0), 6.0);

        ui.set_margins(a, Spacing::new(0.0, 0.0, 9.0, 0.0));
        assert_eq!(ui.position(b).y - (ui.position(a).y + 12.0), 9.0);
    }

    #[test]
    fn absolute_box_grows_but_never_shrinks() {
        let mut ui = Ui::new();
        let column = ui.vertical_box();
        ui.set_height(column, 10.0);
        let tall = ui.label("tall");
        ui.set_height(tall, 50.0);
        ui.add_child(column, tall).unwrap();
        assert_eq!(ui.pixel_height(column), 50.0 + 3.0 + 3.0);

        ui.set_height(tall, 5.0);
        assert_eq!(ui.pixel_height(column), 56.0);
    }

    #[test]
    fn relative_box_does_not_grow() {
        let mut ui = Ui::new();
        let window = ui.window("w", "W");
        let column = ui.vertical_box();
        ui.add_child(window, column).unwrap();
        ui.set_relative_height(column, 50.0);
        let before = ui.pixel_height(column);

        let tall = ui.label("tall");
        ui.set_height(tall, 500.0);
        ui.add_child(column, tall).unwrap();
        assert!(ui.has_relative_size(column, Axis::Vertical));
        assert_eq!(ui.relative_height(column).unwrap(), 50.0);
        assert!(ui.pixel_height(column) >= before);
    }

    #[test]
    fn horizontal_box_fits_tallest_child() {
        let mut ui = Ui::new();
        let row = ui.horizontal_box();
        let short = ui.label("s");
        let tall = ui.list_view();
        ui.add_child(row, short).unwrap();
        ui.add_child(row, tall).unwrap();
        assert_eq!(ui.pixel_height(row), 64.0 + 3.0 + 3.0);
    }

    #[test]
    fn nested_growth_propagates_up() {
        let mut ui = Ui::new();
        let window = ui.window("w", "W");
        let column = ui.vertical_box();
        ui.add_child(window, column).unwrap();
        let list = ui.list_view();
        ui.add_child(column, list).unwrap();

        // Column: 3 + 64 + 3. Window: 18 + column + 4.
        assert_eq!(ui.pixel_height(column), 70.0);
        assert_eq!(ui.pixel_height(window), 18.0 + 70.0 + 4.0);
    }

    #[test]
    fn filler_does_not_drive_growth() {
        let mut ui = Ui::new();
        let column = ui.vertical_box();
        ui.set_height(column, 100.0);
        let a = ui.label("a");
        let fill = ui.list_view();
        ui.add_child(column, a).unwrap();
        ui.add_child(column, fill).unwrap();
        ui.set_remaining_height_filler(column, fill).unwrap();

        assert_eq!(ui.pixel_height(column), 100.0);
        // 100 - 6 padding - 12 label - 4 gap.
        assert_eq!(ui.pixel_height(fill), 78.0);
    }

    #[test]
    fn layout_region_is_recorded() {
        let mut ui = Ui::new();
        let column = ui.vertical_box();
        ui.set_width(column, 108.0);
        let label = ui.label("x");
        ui.add_child(column, label).unwrap();
        assert_eq!(
            ui.node(label).element().layout,
            Region::new(6.0, 3.0, 100.0, 12.0)
        );
    }

    #[test]
    fn overflowing_siblings_grow_box_and_zero_the_filler() {
        let mut ui = Ui::new();
        let column = ui.vertical_box();
        let a = ui.label("a");
        let fill = ui.label("fill");
        ui.add_child(column, a).unwrap();
        ui.add_child(column, fill).unwrap();
        ui.set_remaining_height_filler(column, fill).unwrap();
        ui.set_height(column, 30.0);
        // 24 content - 12 label - 4 gap.
        assert_eq!(ui.pixel_height(fill), 8.0);

        // The filler would go negative; only the absolute label counts
        // toward the extent, so the box grows to 3 + 40 + 4 + 3.
        ui.set_height(a, 40.0);
        assert_eq!(ui.pixel_height(column), 50.0);
        assert_eq!(ui.pixel_height(fill), 0.0);
        assert_eq!(ui.position(fill), Offset::new(4.0 + 2.0, 3.0 + 40.0 + 4.0));
    }
}

//! Container rules: children, content area, collapsed gaps, fillers.

use crate::error::{Error, Result};
use crate::geometry::Axis;
use crate::tree::NodeId;
use crate::ui::Ui;

impl Ui {
    // -- children -----------------------------------------------------------

    /// Append `child` to `parent` and lay `parent` out again.
    ///
    /// A child sized relative to its parent gets a second pass once it is
    /// attached, so it resolves against the real content area. Adding to an
    /// open window rebuilds the host window on the next tick.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.is_container(parent) {
            return Err(Error::NotAContainer(parent));
        }
        if self.is_window(child) {
            return Err(Error::WindowNotRoot(child));
        }
        if self.tree.parent(child).is_some() {
            return Err(Error::AlreadyAttached(child));
        }
        if self.tree.is_ancestor_or_self(child, parent) {
            return Err(Error::Cycle { parent, child });
        }

        self.tree.attach(parent, child);
        self.update_child_dimensions(parent);
        if self.tree[child].element.has_relative_size() {
            self.on_dimensions_changed(child);
        }
        self.request_refresh(parent);
        Ok(())
    }

    /// Detach `child` from `parent`. The child keeps its subtree and can be
    /// added somewhere else.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if self.tree.parent(child) != Some(parent) {
            return Err(Error::NotAChild { parent, child });
        }
        // Refresh while the child still resolves to the window.
        self.request_refresh(parent);

        if let Some(container) = self.container_mut(parent) {
            if container.filler == Some(child) {
                container.filler = None;
            }
        }
        self.tree[child].element.is_filler = false;
        self.tree.detach(child);
        self.update_child_dimensions(parent);
        Ok(())
    }

    // -- content area -------------------------------------------------------

    /// Pixel size minus the padding along `axis`.
    pub fn content_size(&self, id: NodeId, axis: Axis) -> f64 {
        let padding = self.container(id).map_or(0.0, |c| c.padding.along(axis));
        self.pixel_size(id, axis) - padding
    }

    pub fn content_width(&self, id: NodeId) -> f64 {
        self.content_size(id, Axis::Horizontal)
    }

    pub fn content_height(&self, id: NodeId) -> f64 {
        self.content_size(id, Axis::Vertical)
    }

    /// Sum of the collapsed gaps between adjacent children along `axis`.
    pub fn total_child_margins(&self, id: NodeId, axis: Axis) -> f64 {
        self.tree
            .children(id)
            .windows(2)
            .map(|pair| self.gap_between(pair[0], pair[1], axis))
            .sum()
    }

    /// The collapsed gap between neighbours `before` and `after`.
    pub(crate) fn gap_between(&self, before: NodeId, after: NodeId, axis: Axis) -> f64 {
        let before = self.tree[before].element.margins;
        let after = self.tree[after].element.margins;
        before.collapse(after, axis)
    }

    // -- fillers ------------------------------------------------------------

    /// Content size along `axis` minus every non-filler child and every gap.
    /// Can be negative when the children overflow.
    pub fn remaining_space(&self, id: NodeId, axis: Axis) -> f64 {
        let claimed: f64 = self
            .tree
            .children(id)
            .iter()
            .filter(|&&child| !self.tree[child].element.is_filler)
            .map(|&child| self.pixel_size(child, axis))
            .sum();
        self.content_size(id, axis) - claimed - self.total_child_margins(id, axis)
    }

    pub fn remaining_width(&self, id: NodeId) -> f64 {
        self.remaining_space(id, Axis::Horizontal)
    }

    pub fn remaining_height(&self, id: NodeId) -> f64 {
        self.remaining_space(id, Axis::Vertical)
    }

    /// Let `child` take the horizontal space its siblings leave. `parent`
    /// must be a horizontal box.
    pub fn set_remaining_width_filler(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.set_filler(parent, child, Axis::Horizontal)
    }

    /// Let `child` take the vertical space its siblings leave. `parent` must
    /// be a vertical box.
    pub fn set_remaining_height_filler(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.set_filler(parent, child, Axis::Vertical)
    }

    fn set_filler(&mut self, parent: NodeId, child: NodeId, axis: Axis) -> Result<()> {
        let container = self.container(parent).ok_or(Error::NotAContainer(parent))?;
        if container.axis != axis {
            return Err(Error::AxisMismatch { node: parent, expected: axis });
        }
        let previous = container.filler;
        if self.tree.parent(child) != Some(parent) {
            return Err(Error::NotAChild { parent, child });
        }

        if let Some(previous) = previous {
            self.tree[previous].element.is_filler = false;
        }
        if let Some(container) = self.container_mut(parent) {
            container.filler = Some(child);
        }
        self.tree[child].element.is_filler = true;
        self.update_child_dimensions(parent);
        self.on_dimensions_changed(child);
        Ok(())
    }

    /// Stop using a filler; the former filler goes back to its own size.
    pub fn clear_remaining_filler(&mut self, parent: NodeId) {
        let Some(previous) = self.container_mut(parent).and_then(|c| c.filler.take()) else {
            return;
        };
        self.tree[previous].element.is_filler = false;
        self.update_child_dimensions(parent);
        self.on_dimensions_changed(previous);
    }

    /// The current filler of a container.
    pub fn remaining_filler(&self, parent: NodeId) -> Option<NodeId> {
        self.container(parent)?.filler
    }

    /// Whether `id` is its parent's filler.
    pub fn is_remaining_filler(&self, id: NodeId) -> bool {
        self.tree[id].element.is_filler
    }
}

// ===========================================================================
// Tests
// ===========================================================================

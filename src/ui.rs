//! The `Ui` arena: owns every node, the config and the name generator.
//!
//! Nodes are created detached through the constructor methods here and wired
//! together with [`Ui::add_child`]. Geometry operations live in
//! [`layout`](crate::layout), window operations in [`window`](crate::window)
//! and event dispatch in [`event`](crate::event); all of them are `impl Ui`
//! blocks over the same arena.

use std::collections::HashMap;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::geometry::{Axis, Size, Spacing};
use crate::tree::{Container, Dimension, Element, Frame, Node, NodeId, NodeKind, Tree};
use crate::widget::{Control, WidgetKind, WidgetNode};
use crate::widgets::{Button, Checkbox, Dropdown, GroupBox, Label, ListView, Spinner, Viewport};
use crate::window::WindowState;

// ---------------------------------------------------------------------------
// NameGen
// ---------------------------------------------------------------------------

/// Sequential, arena-scoped generator of host widget names.
///
/// Names look like `checkbox-4`: the widget type and a counter shared by all
/// kinds, so no two widgets of one `Ui` ever share a name.
#[derive(Debug, Default)]
pub struct NameGen {
    next: u64,
}

impl NameGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next name with the given prefix.
    pub fn next(&mut self, prefix: &str) -> String {
        let n = self.next;
        self.next += 1;
        format!("{prefix}-{n}")
    }
}

// ---------------------------------------------------------------------------
// Ui
// ---------------------------------------------------------------------------

/// Owner of a forest of windows, boxes and widgets.
///
/// # Examples
///
/// ```
/// use oui::Ui;
///
/// let mut ui = Ui::new();
/// let window = ui.window("demo", "Demo");
/// let label = ui.label("Hello");
/// ui.add_child(window, label).unwrap();
///
/// // The window's content area is 100 - 4 - 4 = 92 px wide and a new
/// // label fills all of it.
/// assert_eq!(ui.pixel_width(label), 92.0);
/// ```
#[derive(Debug)]
pub struct Ui {
    pub(crate) tree: Tree,
    pub(crate) config: Config,
    names: NameGen,
    by_name: HashMap<String, NodeId>,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    /// An empty arena using the default metrics.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// An empty arena using custom metrics for new nodes.
    pub fn with_config(config: Config) -> Self {
        Self { tree: Tree::new(), config, names: NameGen::new(), by_name: HashMap::new() }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying arena, for read-only inspection.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Whether the node still exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.tree.contains(id)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.parent(id)
    }

    /// Children in layout order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.tree.children(id)
    }

    // -- constructors -------------------------------------------------------

    /// A box stacking children top to bottom.
    pub fn vertical_box(&mut self) -> NodeId {
        self.insert_box(Container::new(Axis::Vertical, self.config.box_padding))
    }

    /// A box stacking children left to right.
    pub fn horizontal_box(&mut self) -> NodeId {
        self.insert_box(Container::new(Axis::Horizontal, self.config.box_padding))
    }

    /// A vertical box drawn with a frame and an optional label.
    pub fn group_box(&mut self, text: impl Into<String>) -> NodeId {
        let text = text.into();
        let metrics = self.config.group_box;
        let mut padding = self.config.box_padding;
        padding.top = if text.is_empty() { metrics.bare_top } else { metrics.labelled_top };
        padding.bottom = metrics.bottom;

        let name = self.names.next("groupbox");
        let frame = Frame::Group(GroupBox::new(name.clone(), text));
        let id = self.insert_box(Container::new(Axis::Vertical, padding).with_frame(frame));
        self.by_name.insert(name, id);
        id
    }

    /// A closed window. Windows are vertical boxes that are always roots and
    /// always sized in absolute pixels.
    pub fn window(&mut self, classification: impl Into<String>, title: impl Into<String>) -> NodeId {
        let padding = self.config.box_padding + self.config.window_chrome;
        let size = Size::new(
            self.config.window_width,
            padding.height().max(self.config.min_window_height),
        );
        let state = WindowState::new(classification.into(), title.into(), size);
        let element = Element::new(
            Dimension::pixels(size.width),
            Dimension::pixels(size.height),
            self.config.element_margins,
        );
        let container =
            Container::new(Axis::Vertical, padding).with_frame(Frame::Window(Box::new(state)));
        self.tree.insert(Node::new(element, NodeKind::Container(container)))
    }

    /// A widget of any kind.
    pub fn widget(&mut self, control: impl Control) -> NodeId {
        let height = control.default_height(&self.config.heights);
        let kind: WidgetKind = control.into();
        let name = self.names.next(kind.widget_type());
        let element = Element::new(
            Dimension::percent(100.0),
            Dimension::pixels(height),
            self.config.widget_margins,
        );
        let node = Node::new(element, NodeKind::Widget(WidgetNode::new(name.clone(), kind)));
        let id = self.tree.insert(node);
        self.by_name.insert(name, id);
        id
    }

    pub fn label(&mut self, text: impl Into<String>) -> NodeId {
        self.widget(Label::new(text))
    }

    pub fn text_button(&mut self, text: impl Into<String>) -> NodeId {
        self.widget(Button::text(text))
    }

    pub fn image_button(&mut self, image: u32) -> NodeId {
        self.widget(Button::image(image))
    }

    pub fn checkbox(&mut self, text: impl Into<String>) -> NodeId {
        self.widget(Checkbox::new(text))
    }

    pub fn dropdown<I, S>(&mut self, items: I) -> NodeId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.widget(Dropdown::new(items))
    }

    pub fn color_picker(&mut self) -> NodeId {
        self.widget(Dropdown::color_picker())
    }

    pub fn spinner(&mut self, value: f64, step: f64) -> NodeId {
        self.widget(Spinner::new(value, step))
    }

    pub fn list_view(&mut self) -> NodeId {
        self.widget(ListView::new())
    }

    pub fn viewport(&mut self, view_x: f64, view_y: f64) -> NodeId {
        self.widget(Viewport::new(view_x, view_y))
    }

    fn insert_box(&mut self, container: Container) -> NodeId {
        let element = Element::new(
            Dimension::percent(100.0),
            Dimension::pixels(0.0),
            self.config.element_margins,
        );
        self.tree.insert(Node::new(element, NodeKind::Container(container)))
    }

    // -- lookup -------------------------------------------------------------

    /// The host name of a widget or group box.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        let node = self.tree.get(id)?;
        match &node.kind {
            NodeKind::Widget(widget) => Some(widget.name()),
            NodeKind::Container(Container { frame: Frame::Group(group), .. }) => Some(group.name()),
            NodeKind::Container(_) => None,
        }
    }

    /// Find a widget or group box by host name.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// The node, panicking on a foreign or destroyed id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.tree[id]
    }

    pub fn container(&self, id: NodeId) -> Option<&Container> {
        self.tree.get(id)?.container()
    }

    pub(crate) fn container_mut(&mut self, id: NodeId) -> Option<&mut Container> {
        self.tree.get_mut(id)?.container_mut()
    }

    pub fn is_container(&self, id: NodeId) -> bool {
        self.container(id).is_some()
    }

    pub fn is_window(&self, id: NodeId) -> bool {
        self.tree.get(id).is_some_and(Node::is_window)
    }

    /// Borrow a widget's state as a concrete kind.
    pub fn get<W: Control>(&self, id: NodeId) -> Option<&W> {
        let widget = self.tree.get(id)?.widget()?;
        W::from_kind(&widget.kind)
    }

    /// Mutate a widget's state and schedule the change for the host.
    ///
    /// If the edit changes the widget's shape (list view columns or items),
    /// the window is rebuilt on the next tick; otherwise the widget is synced.
    pub fn edit<W, R, F>(&mut self, id: NodeId, f: F) -> Result<R>
    where
        W: Control,
        F: FnOnce(&mut W) -> R,
    {
        let wrong = || Error::WrongWidgetKind { node: id, expected: W::KIND };
        let widget = self.tree[id].widget_mut().ok_or_else(wrong)?;
        let before = widget.kind.shape();
        let control = W::from_kind_mut(&mut widget.kind).ok_or_else(wrong)?;
        let result = f(control);

        if widget.kind.shape() != before {
            self.request_refresh(id);
        } else {
            self.request_sync(id);
        }
        Ok(result)
    }

    /// Grey a widget out, or enable it again.
    pub fn set_disabled(&mut self, id: NodeId, disabled: bool) -> Result<()> {
        let widget = self.tree[id]
            .widget_mut()
            .ok_or(Error::WrongWidgetKind { node: id, expected: WidgetKind::KIND })?;
        widget.disabled = disabled;
        self.request_sync(id);
        Ok(())
    }

    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.tree[id].widget().is_some_and(WidgetNode::is_disabled)
    }

    // -- margins and padding -------------------------------------------------

    pub fn margins(&self, id: NodeId) -> Spacing {
        self.tree[id].element.margins
    }

    /// Replace the margins and lay the parent out again.
    pub fn set_margins(&mut self, id: NodeId, margins: Spacing) {
        self.tree[id].element.margins = margins;
        self.on_dimensions_changed(id);
    }

    /// The padding of a container. For windows this includes the title bar
    /// and border chrome.
    pub fn padding(&self, id: NodeId) -> Option<Spacing> {
        self.container(id).map(Container::padding)
    }

    /// Replace the padding of a container. Window chrome is added on top.
    pub fn set_padding(&mut self, id: NodeId, padding: Spacing) -> Result<()> {
        let chrome = self.config.window_chrome;
        let is_window = self.is_window(id);
        let container = self.container_mut(id).ok_or(Error::NotAContainer(id))?;
        container.padding = if is_window { padding + chrome } else { padding };
        self.on_dimensions_changed(id);
        Ok(())
    }

    // -- teardown -----------------------------------------------------------

    /// Drop a node and its subtree from the arena.
    ///
    /// The node is detached from its parent first. An open window is closed
    /// without running its close callback. Ids of destroyed nodes must not be
    /// used again.
    pub fn destroy(&mut self, id: NodeId) {
        if !self.tree.contains(id) {
            return;
        }
        if let Some(parent) = self.tree.parent(id) {
            // Cannot fail: `id` is a child of `parent`.
            let _ = self.remove_child(parent, id);
        }
        for (_, mut node) in self.tree.remove(id) {
            if let Some(state) = node.window_mut() {
                if let Some(mut handle) = state.handle.take() {
                    handle.close();
                }
            }
            match &node.kind {
                NodeKind::Widget(widget) => {
                    self.by_name.remove(widget.name());
                }
                NodeKind::Container(Container { frame: Frame::Group(group), .. }) => {
                    self.by_name.remove(group.name());
                }
                NodeKind::Container(_) => {}
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

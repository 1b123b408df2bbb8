//! Node types: NodeId, Dimension, Element, Container, Node.

use slotmap::new_key_type;

use crate::geometry::{Axis, Offset, Region, Spacing};
use crate::widget::WidgetNode;
use crate::widgets::GroupBox;
use crate::window::WindowState;

new_key_type! {
    /// Unique identifier for a node in a [`Ui`](crate::Ui). Copy, lightweight (u64).
    pub struct NodeId;
}

// ---------------------------------------------------------------------------
// Dimension
// ---------------------------------------------------------------------------

/// A stored width or height.
///
/// `relative` selects the interpretation of `value`: a percentage of the
/// parent's content size, or absolute pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub value: f64,
    pub relative: bool,
}

impl Dimension {
    /// An absolute size in pixels.
    #[inline]
    pub const fn pixels(value: f64) -> Self {
        Self { value, relative: false }
    }

    /// A percentage of the parent's content size. Not clamped.
    #[inline]
    pub const fn percent(value: f64) -> Self {
        Self { value, relative: true }
    }
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// Geometry and identity state shared by every node.
#[derive(Debug, Clone)]
pub struct Element {
    /// Offset from the parent's origin, written by the parent's layout pass.
    pub(crate) position: Offset,
    pub(crate) width: Dimension,
    pub(crate) height: Dimension,
    pub(crate) margins: Spacing,
    /// Absorbs the space its siblings leave along the parent's main axis.
    pub(crate) is_filler: bool,
    /// Visual state differs from what was last pushed to the host.
    pub(crate) require_sync: bool,
    /// Local rectangle from the last layout pass.
    pub(crate) layout: Region,
}

impl Element {
    /// Create an element with the given stored size and margins.
    pub fn new(width: Dimension, height: Dimension, margins: Spacing) -> Self {
        Self {
            position: Offset::ZERO,
            width,
            height,
            margins,
            is_filler: false,
            require_sync: false,
            layout: Region::EMPTY,
        }
    }

    /// The stored size along `axis`.
    #[inline]
    pub fn dimension(&self, axis: Axis) -> Dimension {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Mutable access to the stored size along `axis`.
    #[inline]
    pub fn dimension_mut(&mut self, axis: Axis) -> &mut Dimension {
        match axis {
            Axis::Horizontal => &mut self.width,
            Axis::Vertical => &mut self.height,
        }
    }

    /// Whether either axis is sized relative to the parent.
    #[inline]
    pub fn has_relative_size(&self) -> bool {
        self.width.relative || self.height.relative
    }
}

// ---------------------------------------------------------------------------
// Container
// ---------------------------------------------------------------------------

/// What a container represents on the host side besides its children.
#[derive(Debug)]
pub enum Frame {
    /// A bare layout box, invisible to the host.
    Plain,
    /// A box drawn as a host "groupbox" widget.
    Group(GroupBox),
    /// The root of a host window.
    Window(Box<WindowState>),
}

/// State of a node that lays out children along one axis.
#[derive(Debug)]
pub struct Container {
    pub(crate) axis: Axis,
    pub(crate) padding: Spacing,
    /// The single child sized by the remaining-space rule, if any.
    pub(crate) filler: Option<NodeId>,
    pub(crate) frame: Frame,
}

impl Container {
    /// A plain container stacking along `axis`.
    pub fn new(axis: Axis, padding: Spacing) -> Self {
        Self { axis, padding, filler: None, frame: Frame::Plain }
    }

    /// Replace the frame (builder).
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    /// The main axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The padding between the container's edge and its content area.
    pub fn padding(&self) -> Spacing {
        self.padding
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// Node variants: containers own children, widgets are leaves.
#[derive(Debug)]
pub enum NodeKind {
    Container(Container),
    Widget(WidgetNode),
}

/// A single node in the arena.
#[derive(Debug)]
pub struct Node {
    pub(crate) element: Element,
    pub(crate) kind: NodeKind,
}

impl Node {
    /// Create a node.
    pub fn new(element: Element, kind: NodeKind) -> Self {
        Self { element, kind }
    }

    /// The geometry state.
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// The container state, if this node holds children.
    pub fn container(&self) -> Option<&Container> {
        match &self.kind {
            NodeKind::Container(container) => Some(container),
            NodeKind::Widget(_) => None,
        }
    }

    pub(crate) fn container_mut(&mut self) -> Option<&mut Container> {
        match &mut self.kind {
            NodeKind::Container(container) => Some(container),
            NodeKind::Widget(_) => None,
        }
    }

    /// The widget state, if this node is a leaf widget.
    pub fn widget(&self) -> Option<&WidgetNode> {
        match &self.kind {
            NodeKind::Widget(widget) => Some(widget),
            NodeKind::Container(_) => None,
        }
    }

    pub(crate) fn widget_mut(&mut self) -> Option<&mut WidgetNode> {
        match &mut self.kind {
            NodeKind::Widget(widget) => Some(widget),
            NodeKind::Container(_) => None,
        }
    }

    /// The window state, if this node is a window root.
    pub fn window(&self) -> Option<&WindowState> {
        match &self.kind {
            NodeKind::Container(Container { frame: Frame::Window(state), .. }) => Some(state),
            _ => None,
        }
    }

    pub(crate) fn window_mut(&mut self) -> Option<&mut WindowState> {
        match &mut self.kind {
            NodeKind::Container(Container { frame: Frame::Window(state), .. }) => Some(state),
            _ => None,
        }
    }

    /// Whether this node is a window root.
    pub fn is_window(&self) -> bool {
        self.window().is_some()
    }
}

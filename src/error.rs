//! Error type shared by every fallible operation.
//!
//! Errors are programming mistakes in the consuming code (wrong node, bad
//! tree shape, bad item shape). Operating on a tree that is not attached to an
//! open window is never an error: synchronization is simply skipped.

use crate::geometry::Axis;
use crate::tree::NodeId;

/// Errors returned by [`Ui`](crate::Ui) operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The node must be a direct child of the container.
    #[error("node {child:?} is not a child of {parent:?}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// A relative size was requested for a node without a parent.
    #[error("node {0:?} has no parent to express its size relative to")]
    NoParent(NodeId),

    /// The node cannot hold children.
    #[error("node {0:?} is not a container")]
    NotAContainer(NodeId),

    /// The node is not a window.
    #[error("node {0:?} is not a window")]
    NotAWindow(NodeId),

    /// The operation needs a widget of another kind.
    #[error("node {node:?} is not a {expected} widget")]
    WrongWidgetKind { node: NodeId, expected: &'static str },

    /// The child already has a parent; detach it first.
    #[error("node {0:?} is already attached to a parent")]
    AlreadyAttached(NodeId),

    /// Windows are always roots.
    #[error("window {0:?} cannot be added as a child")]
    WindowNotRoot(NodeId),

    /// Attaching would make a node its own ancestor.
    #[error("adding {child:?} to {parent:?} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },

    /// The container does not stack along the requested axis.
    #[error("container {node:?} does not stack children along the {expected:?} axis")]
    AxisMismatch { node: NodeId, expected: Axis },

    /// `open` was called on a window that already has a host handle.
    #[error("window {0:?} is already open")]
    WindowAlreadyOpen(NodeId),

    /// The host reported an interaction for a name no widget carries.
    #[error("no widget is named {0:?}")]
    UnknownWidget(String),

    /// The widget kind does not react to the reported interaction.
    #[error("widget {name:?} does not support the {interaction} interaction")]
    UnsupportedInteraction { name: String, interaction: &'static str },

    /// A list view item does not have one field per column.
    #[error("expected {expected} fields for the list view item but got {found}")]
    ColumnMismatch { expected: usize, found: usize },

    /// An index past the end of a list.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

//! Node arena: slotmap-backed tree of containers and widgets.

pub mod arena;
pub mod node;

pub use arena::Tree;
pub use node::{Container, Dimension, Element, Frame, Node, NodeId, NodeKind};

//! Widget system: the `Control` trait and the stored widget node.

pub mod traits;

pub use traits::{Control, WidgetKind, WidgetNode};

//! Control trait: description producer and interaction target.
//!
//! Every widget kind implements [`Control`]. A live widget node stores its
//! kind as a tagged [`WidgetKind`] variant; `WidgetKind` itself implements
//! `Control` by dispatching to the variant, so generic code can work with a
//! concrete kind (`ui.get::<Checkbox>(id)`) or with any kind
//! (`ui.get::<WidgetKind>(id)`).

use std::fmt;

use crate::config::WidgetHeights;
use crate::description::WidgetProps;
use crate::error::Result;
use crate::event::{Event, Handler, Interaction};
use crate::widgets::{Button, Checkbox, Dropdown, Label, ListView, Spinner, Viewport};

// ---------------------------------------------------------------------------
// Control trait
// ---------------------------------------------------------------------------

/// Behaviour shared by all widget kinds.
pub trait Control: Sized + Into<WidgetKind> {
    /// Kind name used in error messages.
    const KIND: &'static str;

    /// Host widget type string (e.g. `"checkbox"`).
    fn widget_type(&self) -> &'static str;

    /// Kind-specific description fields. Must not mutate anything.
    fn props(&self) -> WidgetProps;

    /// Initial pixel height for a new widget of this kind.
    fn default_height(&self, heights: &WidgetHeights) -> f64;

    /// Reject an interaction whose payload does not fit the current state,
    /// such as a selection past the end of the items.
    fn check(&self, _interaction: Interaction) -> Result<()> {
        Ok(())
    }

    /// Apply a host interaction to local state.
    ///
    /// Returns the event for the widget's handler, or `None` if this kind does
    /// not react to the interaction.
    fn interact(&mut self, _interaction: Interaction) -> Option<Event> {
        None
    }

    /// A structural fingerprint. When an edit changes it, the host must
    /// rebuild the window's native widgets instead of patching them.
    fn shape(&self) -> (usize, usize) {
        (0, 0)
    }

    /// Borrow this kind out of a stored [`WidgetKind`].
    fn from_kind(kind: &WidgetKind) -> Option<&Self>;

    /// Mutably borrow this kind out of a stored [`WidgetKind`].
    fn from_kind_mut(kind: &mut WidgetKind) -> Option<&mut Self>;
}

// ---------------------------------------------------------------------------
// WidgetKind
// ---------------------------------------------------------------------------

/// Tagged union of every widget kind.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetKind {
    Label(Label),
    Button(Button),
    Checkbox(Checkbox),
    Dropdown(Dropdown),
    Spinner(Spinner),
    ListView(ListView),
    Viewport(Viewport),
}

macro_rules! each_kind {
    ($kind:expr, $w:ident => $body:expr) => {
        match $kind {
            WidgetKind::Label($w) => $body,
            WidgetKind::Button($w) => $body,
            WidgetKind::Checkbox($w) => $body,
            WidgetKind::Dropdown($w) => $body,
            WidgetKind::Spinner($w) => $body,
            WidgetKind::ListView($w) => $body,
            WidgetKind::Viewport($w) => $body,
        }
    };
}

impl Control for WidgetKind {
    const KIND: &'static str = "leaf";

    fn widget_type(&self) -> &'static str {
        each_kind!(self, w => w.widget_type())
    }

    fn props(&self) -> WidgetProps {
        each_kind!(self, w => w.props())
    }

    fn default_height(&self, heights: &WidgetHeights) -> f64 {
        each_kind!(self, w => w.default_height(heights))
    }

    fn check(&self, interaction: Interaction) -> Result<()> {
        each_kind!(self, w => w.check(interaction))
    }

    fn interact(&mut self, interaction: Interaction) -> Option<Event> {
        each_kind!(self, w => w.interact(interaction))
    }

    fn shape(&self) -> (usize, usize) {
        each_kind!(self, w => w.shape())
    }

    fn from_kind(kind: &WidgetKind) -> Option<&Self> {
        Some(kind)
    }

    fn from_kind_mut(kind: &mut WidgetKind) -> Option<&mut Self> {
        Some(kind)
    }
}

/// Implements `From<$ty> for WidgetKind` and the two `from_kind` accessors.
macro_rules! kind_variant {
    ($variant:ident, $ty:ty) => {
        impl From<$ty> for WidgetKind {
            fn from(value: $ty) -> Self {
                WidgetKind::$variant(value)
            }
        }

        impl $ty {
            pub(crate) fn borrow_kind(kind: &WidgetKind) -> Option<&Self> {
                match kind {
                    WidgetKind::$variant(w) => Some(w),
                    _ => None,
                }
            }

            pub(crate) fn borrow_kind_mut(kind: &mut WidgetKind) -> Option<&mut Self> {
                match kind {
                    WidgetKind::$variant(w) => Some(w),
                    _ => None,
                }
            }
        }
    };
}

kind_variant!(Label, Label);
kind_variant!(Button, Button);
kind_variant!(Checkbox, Checkbox);
kind_variant!(Dropdown, Dropdown);
kind_variant!(Spinner, Spinner);
kind_variant!(ListView, ListView);
kind_variant!(Viewport, Viewport);

// ---------------------------------------------------------------------------
// WidgetNode
// ---------------------------------------------------------------------------

/// Leaf state stored in the arena for a widget.
pub struct WidgetNode {
    pub(crate) name: String,
    pub(crate) disabled: bool,
    pub(crate) kind: WidgetKind,
    pub(crate) handler: Option<Handler>,
}

impl WidgetNode {
    /// Create a widget node with no handler.
    pub fn new(name: String, kind: WidgetKind) -> Self {
        Self { name, disabled: false, kind, handler: None }
    }

    /// The unique host name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The widget kind and its state.
    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    /// Whether the host should grey the widget out.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether an event handler is installed.
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }
}

impl fmt::Debug for WidgetNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetNode")
            .field("name", &self.name)
            .field("disabled", &self.disabled)
            .field("kind", &self.kind)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_dispatches_type() {
        let kind: WidgetKind = Label::new("Hi").into();
        assert_eq!(kind.widget_type(), "label");
        let kind: WidgetKind = Checkbox::new("Tick").into();
        assert_eq!(kind.widget_type(), "checkbox");
    }

    #[test]
    fn from_kind_matches_variant_only() {
        let kind: WidgetKind = Label::new("Hi").into();
        assert!(Label::from_kind(&kind).is_some());
        assert!(Checkbox::from_kind(&kind).is_none());
        assert!(WidgetKind::from_kind(&kind).is_some());
    }

    #[test]
    fn kind_dispatches_interaction() {
        let mut kind: WidgetKind = Checkbox::new("Tick").into();
        assert_eq!(kind.interact(Interaction::Check(true)), Some(Event::Toggled(true)));
        assert_eq!(kind.interact(Interaction::Click), None);
    }

    #[test]
    fn default_heights_follow_config() {
        let heights = WidgetHeights::default();
        let kind: WidgetKind = Spinner::new(0.0, 1.0).into();
        assert_eq!(kind.default_height(&heights), heights.spinner);
        let kind: WidgetKind = ListView::new().into();
        assert_eq!(kind.default_height(&heights), heights.list_view);
    }

    #[test]
    fn widget_node_debug_hides_handler() {
        let node = WidgetNode::new("label-0".into(), Label::new("x").into());
        let debug = format!("{node:?}");
        assert!(debug.contains("label-0"));
        assert!(debug.contains("handler: false"));
        assert!(!node.has_handler());
    }
}

//! Event handlers and dispatch by widget name.
//!
//! A widget holds at most one [`Handler`]. When the host reports an
//! [`Interaction`] the widget first updates its own state (a checkbox flips,
//! a spinner steps), then the handler runs with mutable access to the whole
//! [`Ui`], so it can restyle or restructure the tree in response.

use tracing::trace;

use super::input::Interaction;
use crate::error::{Error, Result};
use crate::tree::{Node, NodeId};
use crate::ui::Ui;
use crate::widget::Control;

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// What a widget reports to its handler after an interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A button was clicked.
    Clicked,
    /// A checkbox changed to the given state.
    Toggled(bool),
    /// A dropdown item was chosen.
    Selected(usize),
    /// A spinner stepped to a new (already rounded) value.
    ValueChanged(f64),
    /// A list view cell was clicked.
    CellClicked { row: usize, column: usize },
    /// The pointer moved over a list view cell.
    CellHighlighted { row: usize, column: usize },
}

/// Callback invoked with the widget that produced the event.
pub type Handler = Box<dyn FnMut(&mut Ui, NodeId, Event)>;

/// Callback invoked for window-level notifications (tick, close).
pub type WindowHandler = Box<dyn FnMut(&mut Ui, NodeId)>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

impl Ui {
    /// Install the event handler of a widget, replacing any previous one.
    pub fn set_handler<F>(&mut self, id: NodeId, handler: F) -> Result<()>
    where
        F: FnMut(&mut Ui, NodeId, Event) + 'static,
    {
        let widget = self.tree[id]
            .widget_mut()
            .ok_or(Error::WrongWidgetKind { node: id, expected: "leaf" })?;
        widget.handler = Some(Box::new(handler));
        Ok(())
    }

    /// Remove the event handler of a widget. Does nothing for containers.
    pub fn clear_handler(&mut self, id: NodeId) {
        if let Some(widget) = self.tree[id].widget_mut() {
            widget.handler = None;
        }
    }

    /// Route a host interaction to the widget called `name`.
    ///
    /// The widget's local state is updated before its handler runs. Returns
    /// the event that was delivered.
    pub fn dispatch(&mut self, name: &str, interaction: Interaction) -> Result<Event> {
        let id = self
            .find_by_name(name)
            .ok_or_else(|| Error::UnknownWidget(name.to_owned()))?;
        let unsupported = || Error::UnsupportedInteraction {
            name: name.to_owned(),
            interaction: interaction.name(),
        };

        let widget = self.tree[id].widget_mut().ok_or_else(unsupported)?;
        widget.kind.check(interaction)?;
        let event = widget.kind.interact(interaction).ok_or_else(unsupported)?;
        trace!(widget = name, interaction = interaction.name(), ?event, "dispatch");

        // The host already shows checkbox and selection changes; a stepped
        // spinner has new text to push.
        if matches!(event, Event::ValueChanged(_)) {
            self.request_sync(id);
        }

        self.run_handler(id, event);
        Ok(event)
    }

    /// Take the handler out, call it, and put it back unless the handler
    /// replaced itself or destroyed its widget.
    fn run_handler(&mut self, id: NodeId, event: Event) {
        let Some(mut handler) = self.tree[id].widget_mut().and_then(|w| w.handler.take()) else {
            return;
        };
        handler(self, id, event);
        if let Some(widget) = self.tree.get_mut(id).and_then(Node::widget_mut) {
            if widget.handler.is_none() {
                widget.handler = Some(handler);
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

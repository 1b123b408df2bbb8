//! Interactions reported by the host.
//!
//! The host owns input handling. When the user clicks, ticks or selects
//! something inside a window, the host reports it as an [`Interaction`] for a
//! widget name, and the engine turns it into local state plus an
//! [`Event`](super::Event) for the widget's handler.

/// A raw interaction with a host widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// A button was clicked.
    Click,
    /// A checkbox was ticked (`true`) or unticked.
    Check(bool),
    /// A dropdown item was chosen.
    Select(usize),
    /// A spinner's increase button was pressed.
    Increment,
    /// A spinner's decrease button was pressed.
    Decrement,
    /// A list view cell was clicked.
    CellClick { row: usize, column: usize },
    /// The pointer moved over a list view cell.
    CellHighlight { row: usize, column: usize },
}

impl Interaction {
    /// Short name used in error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Interaction::Click => "click",
            Interaction::Check(_) => "check",
            Interaction::Select(_) => "select",
            Interaction::Increment => "increment",
            Interaction::Decrement => "decrement",
            Interaction::CellClick { .. } => "cell click",
            Interaction::CellHighlight { .. } => "cell highlight",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(Interaction::Click.name(), "click");
        assert_eq!(Interaction::Check(true).name(), "check");
        assert_eq!(Interaction::CellClick { row: 1, column: 0 }.name(), "cell click");
    }

    #[test]
    fn is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Interaction>();
    }
}

//! The host GUI boundary.
//!
//! The engine never draws anything. It hands [`WindowDescription`]s to a
//! [`Host`] and receives a [`WindowHandle`] for each opened window, which it
//! then drives on every tick. A plugin binds these traits to the real game
//! API; tests use [`MockHost`](crate::testing::MockHost).

use crate::description::{WidgetDescription, WindowDescription};
use crate::geometry::Offset;

/// Opens host windows.
pub trait Host {
    /// Create a native window from a description.
    fn open_window(&mut self, description: &WindowDescription) -> Box<dyn WindowHandle>;
}

/// A live host window.
///
/// The user may move or resize the window at any time; the engine reads the
/// live size back on every tick.
pub trait WindowHandle {
    /// Screen position of the top-left corner.
    fn position(&self) -> Offset;

    /// Current width, possibly changed by the user.
    fn width(&self) -> f64;

    /// Current height, possibly changed by the user.
    fn height(&self) -> f64;

    fn set_width(&mut self, width: f64);

    fn set_height(&mut self, height: f64);

    /// Apply window-level fields (size bounds, title, colours).
    fn apply(&mut self, description: &WindowDescription);

    /// Copy a widget description onto the native widget with the same name.
    ///
    /// Returns `false` when the window has no widget by that name.
    fn update_widget(&mut self, description: &WidgetDescription) -> bool;

    /// Close the native window. The host will not call back afterwards.
    fn close(&mut self);
}

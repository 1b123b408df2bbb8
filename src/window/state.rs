//! Window root state: identity, colours, resize bounds, host handle.

use std::fmt;

use crate::event::WindowHandler;
use crate::geometry::{Axis, Size};
use crate::host::WindowHandle;

// ---------------------------------------------------------------------------
// Colours
// ---------------------------------------------------------------------------

/// Host palette indices of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colours {
    pub main: u8,
    /// Usually the same as `main`; tabbed windows differ.
    pub title_bar: u8,
}

impl Colours {
    /// Both parts in the same colour.
    pub const fn uniform(colour: u8) -> Self {
        Self { main: colour, title_bar: colour }
    }
}

impl Default for Colours {
    fn default() -> Self {
        Self::uniform(1)
    }
}

// ---------------------------------------------------------------------------
// ResizeBounds
// ---------------------------------------------------------------------------

/// How far the user may resize a window along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeBounds {
    pub enabled: bool,
    pub min: f64,
    pub max: f64,
}

impl ResizeBounds {
    /// Resizing disabled: both bounds equal `size`.
    pub const fn fixed(size: f64) -> Self {
        Self { enabled: false, min: size, max: size }
    }

    /// Keep a disabled axis locked to the current size.
    pub(crate) fn follow(&mut self, size: f64) {
        if !self.enabled {
            self.min = size;
            self.max = size;
        }
    }
}

// ---------------------------------------------------------------------------
// WindowState
// ---------------------------------------------------------------------------

/// State of a window root, stored in its container's frame.
///
/// A window is closed while `handle` is `None`.
pub struct WindowState {
    pub(crate) classification: String,
    pub(crate) title: String,
    pub(crate) colours: Colours,
    pub(crate) horizontal: ResizeBounds,
    pub(crate) vertical: ResizeBounds,
    pub(crate) handle: Option<Box<dyn WindowHandle>>,
    /// The host window must be rebuilt on the next tick.
    pub(crate) requested_refresh: bool,
    pub(crate) on_update: Option<WindowHandler>,
    pub(crate) on_close: Option<WindowHandler>,
}

impl WindowState {
    /// A closed window whose bounds are locked to `size`.
    pub fn new(classification: String, title: String, size: Size) -> Self {
        Self {
            classification,
            title,
            colours: Colours::default(),
            horizontal: ResizeBounds::fixed(size.width),
            vertical: ResizeBounds::fixed(size.height),
            handle: None,
            requested_refresh: false,
            on_update: None,
            on_close: None,
        }
    }

    /// Identifies windows of the same kind on the host.
    pub fn classification(&self) -> &str {
        &self.classification
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn colours(&self) -> Colours {
        self.colours
    }

    /// Resize bounds along `axis`.
    pub fn bounds(&self, axis: Axis) -> ResizeBounds {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    pub(crate) fn bounds_mut(&mut self, axis: Axis) -> &mut ResizeBounds {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    /// Whether the host window exists.
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether a rebuild is scheduled for the next tick.
    pub fn refresh_requested(&self) -> bool {
        self.requested_refresh
    }
}

impl fmt::Debug for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowState")
            .field("classification", &self.classification)
            .field("title", &self.title)
            .field("colours", &self.colours)
            .field("horizontal", &self.horizontal)
            .field("vertical", &self.vertical)
            .field("open", &self.handle.is_some())
            .field("requested_refresh", &self.requested_refresh)
            .finish_non_exhaustive()
    }
}

//! Windows: root state, host lifecycle, descriptions.
//!
//! A window is a vertical box that is always a root. Its [`WindowState`]
//! lives in the container frame; the operations here are `impl Ui` blocks:
//!
//! - this module: lookups, title/colours, resize bounds, callbacks
//! - [`sync`]: open, per-tick update, close, descriptions

pub mod state;
pub mod sync;

pub use state::{Colours, ResizeBounds, WindowState};

use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::Axis;
use crate::tree::{Dimension, NodeId};
use crate::ui::Ui;

impl Ui {
    // -- lookup -------------------------------------------------------------

    /// The state of a window root.
    pub fn window_state(&self, id: NodeId) -> Option<&WindowState> {
        self.tree.get(id)?.window()
    }

    pub(crate) fn window_state_mut(&mut self, id: NodeId) -> Option<&mut WindowState> {
        self.tree.get_mut(id)?.window_mut()
    }

    /// The window `id` belongs to, if its root is one.
    pub fn window_of(&self, id: NodeId) -> Option<NodeId> {
        let root = self.tree.root_of(id);
        self.is_window(root).then_some(root)
    }

    /// Whether the window has a live host handle.
    pub fn is_open(&self, id: NodeId) -> bool {
        self.window_state(id).is_some_and(WindowState::is_open)
    }

    /// Whether `id` is part of a window that is currently open.
    pub(crate) fn is_in_open_window(&self, id: NodeId) -> bool {
        self.window_of(id).is_some_and(|window| self.is_open(window))
    }

    /// Schedule a rebuild of the host window `id` belongs to.
    ///
    /// Needed whenever the set or shape of host widgets changes, which the
    /// host cannot patch in place. Ignored unless the window is open.
    pub fn request_refresh(&mut self, id: NodeId) {
        let Some(window) = self.window_of(id) else {
            return;
        };
        if let Some(state) = self.window_state_mut(window) {
            if state.is_open() && !state.requested_refresh {
                debug!(window = ?window, "window refresh requested");
                state.requested_refresh = true;
            }
        }
    }

    // -- size ---------------------------------------------------------------

    /// Resize a window root. The height never drops below the configured
    /// minimum, an open host window follows, and disabled resize bounds
    /// stay locked to the new size.
    pub(crate) fn set_window_size(&mut self, id: NodeId, axis: Axis, pixels: f64) {
        let pixels = match axis {
            Axis::Horizontal => pixels,
            Axis::Vertical => pixels.max(self.config.min_window_height),
        };
        if let Some(state) = self.window_state_mut(id) {
            if let Some(handle) = state.handle.as_mut() {
                match axis {
                    Axis::Horizontal if handle.width() != pixels => handle.set_width(pixels),
                    Axis::Vertical if handle.height() != pixels => handle.set_height(pixels),
                    _ => {}
                }
            }
            state.bounds_mut(axis).follow(pixels);
        }
        *self.tree[id].element.dimension_mut(axis) = Dimension::pixels(pixels);
        self.on_dimensions_changed(id);
    }

    // -- window-level state -------------------------------------------------

    pub fn title(&self, id: NodeId) -> Option<&str> {
        self.window_state(id).map(WindowState::title)
    }

    /// Change the title bar text. Takes effect on the next tick.
    pub fn set_title(&mut self, id: NodeId, title: impl Into<String>) -> Result<()> {
        let state = self.window_state_mut(id).ok_or(Error::NotAWindow(id))?;
        state.title = title.into();
        self.request_refresh(id);
        Ok(())
    }

    pub fn colours(&self, id: NodeId) -> Option<Colours> {
        self.window_state(id).map(WindowState::colours)
    }

    /// Change the window colours. The title bar follows `main` unless given.
    pub fn set_colours(&mut self, id: NodeId, main: u8, title_bar: Option<u8>) -> Result<()> {
        let state = self.window_state_mut(id).ok_or(Error::NotAWindow(id))?;
        state.colours = Colours { main, title_bar: title_bar.unwrap_or(main) };
        self.request_refresh(id);
        Ok(())
    }

    // -- resizing -----------------------------------------------------------

    /// Let the user resize the window horizontally between `min` and `max`.
    ///
    /// An omitted bound is the current width. Disabling locks both bounds to
    /// the current width.
    pub fn set_horizontal_resize(
        &mut self,
        id: NodeId,
        enabled: bool,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<()> {
        self.set_resize(id, Axis::Horizontal, enabled, min, max)
    }

    /// Let the user resize the window vertically between `min` and `max`.
    ///
    /// An omitted bound is the current height.
    pub fn set_vertical_resize(
        &mut self,
        id: NodeId,
        enabled: bool,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<()> {
        self.set_resize(id, Axis::Vertical, enabled, min, max)
    }

    fn set_resize(
        &mut self,
        id: NodeId,
        axis: Axis,
        enabled: bool,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<()> {
        let current = self.pixel_size(id, axis);
        let state = self.window_state_mut(id).ok_or(Error::NotAWindow(id))?;
        *state.bounds_mut(axis) = if enabled {
            ResizeBounds {
                enabled: true,
                min: min.unwrap_or(current),
                max: max.unwrap_or(current),
            }
        } else {
            ResizeBounds::fixed(current)
        };
        self.request_sync(id);
        Ok(())
    }

    /// The resize bounds of a window along `axis`.
    pub fn resize_bounds(&self, id: NodeId, axis: Axis) -> Option<ResizeBounds> {
        self.window_state(id).map(|state| state.bounds(axis))
    }

    // -- callbacks ----------------------------------------------------------

    /// Run `f` at the end of every tick of an open window.
    pub fn set_on_update<F>(&mut self, id: NodeId, f: F) -> Result<()>
    where
        F: FnMut(&mut Ui, NodeId) + 'static,
    {
        let state = self.window_state_mut(id).ok_or(Error::NotAWindow(id))?;
        state.on_update = Some(Box::new(f));
        Ok(())
    }

    /// Run `f` whenever the window closes, whoever closed it.
    pub fn set_on_close<F>(&mut self, id: NodeId, f: F) -> Result<()>
    where
        F: FnMut(&mut Ui, NodeId) + 'static,
    {
        let state = self.window_state_mut(id).ok_or(Error::NotAWindow(id))?;
        state.on_close = Some(Box::new(f));
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

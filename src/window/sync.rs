//! Host lifecycle of a window: open, per-tick update, close, descriptions.
//!
//! ```text
//!   open ──► host window ──┬─► on_update (every tick)
//!                          │     1. read back the live size
//!                          │     2. push dirty widgets, apply window fields
//!                          │        (a widget the host lost is an error)
//!                          │     3. rebuild if a refresh was requested
//!                          │     4. user callback
//!                          └─► close / on_close
//! ```

use tracing::{debug, trace};

use crate::description::{WidgetDescription, WindowDescription};
use crate::error::{Error, Result};
use crate::event::WindowHandler;
use crate::geometry::{Axis, Offset};
use crate::host::Host;
use crate::tree::{Container, Frame, NodeId, NodeKind};
use crate::ui::Ui;
use crate::widget::Control;

use super::WindowState;

impl Ui {
    // -- lifecycle ----------------------------------------------------------

    /// Open the window on the host.
    ///
    /// The whole tree is described from scratch, so pending sync flags are
    /// dropped.
    pub fn open(&mut self, id: NodeId, host: &mut dyn Host) -> Result<()> {
        let state = self.window_state(id).ok_or(Error::NotAWindow(id))?;
        if state.is_open() {
            return Err(Error::WindowAlreadyOpen(id));
        }

        let description = self.describe_window_at(id, None)?;
        let handle = host.open_window(&description);
        debug!(
            window = ?id,
            classification = %description.classification,
            widgets = description.widgets.len(),
            "window opened"
        );

        if let Some(state) = self.window_state_mut(id) {
            state.handle = Some(handle);
            state.requested_refresh = false;
        }
        self.clear_sync_flags(id);
        Ok(())
    }

    /// Close the window from the application side and run the close
    /// callback. Closing a closed window does nothing.
    pub fn close(&mut self, id: NodeId) -> Result<()> {
        let state = self.window_state_mut(id).ok_or(Error::NotAWindow(id))?;
        let Some(mut handle) = state.handle.take() else {
            return Ok(());
        };
        state.requested_refresh = false;
        handle.close();
        debug!(window = ?id, "window closed");
        self.run_window_handler(id, |state| &mut state.on_close);
        Ok(())
    }

    /// The host closed the window (the user clicked the close button).
    ///
    /// The handle is dropped without calling back into the host, then the
    /// close callback runs.
    pub fn on_close(&mut self, id: NodeId) -> Result<()> {
        let state = self.window_state_mut(id).ok_or(Error::NotAWindow(id))?;
        if state.handle.take().is_none() {
            return Ok(());
        }
        state.requested_refresh = false;
        debug!(window = ?id, "window closed by host");
        self.run_window_handler(id, |state| &mut state.on_close);
        Ok(())
    }

    /// One tick of an open window. Does nothing for a closed window.
    ///
    /// A size the user changed by dragging is read back and laid out first.
    /// Then every widget marked for sync is pushed to the host, followed by
    /// the window-level fields if they changed. A requested refresh closes
    /// the host window and reopens it at the same screen position. The update
    /// callback runs last.
    pub fn on_update(&mut self, id: NodeId, host: &mut dyn Host) -> Result<()> {
        let state = self.window_state(id).ok_or(Error::NotAWindow(id))?;
        let Some(handle) = state.handle.as_ref() else {
            return Ok(());
        };
        let live = (handle.width(), handle.height());

        self.read_back_size(id, Axis::Horizontal, live.0);
        self.read_back_size(id, Axis::Vertical, live.1);
        self.push_changes(id)?;

        if self.window_state(id).is_some_and(WindowState::refresh_requested) {
            self.reopen(id, host)?;
        }

        self.run_window_handler(id, |state| &mut state.on_update);
        Ok(())
    }

    fn read_back_size(&mut self, id: NodeId, axis: Axis, live: f64) {
        let stored = self.pixel_size(id, axis);
        if live != stored {
            debug!(window = ?id, ?axis, from = stored, to = live, "window resized by host");
            self.set_size(id, axis, live);
        }
    }

    /// Send every pending change of an open window to its handle. A pending
    /// refresh describes everything anyway, so nothing is pushed then.
    ///
    /// A widget the handle does not know stops the push with
    /// [`Error::UnknownWidget`]. That widget, everything after it and the
    /// window fields stay dirty for the next tick.
    fn push_changes(&mut self, id: NodeId) -> Result<()> {
        if self.window_state(id).is_some_and(WindowState::refresh_requested) {
            self.clear_sync_flags(id);
            return Ok(());
        }
        let window_dirty = self.tree[id].element.require_sync;

        let pending: Vec<(NodeId, WidgetDescription)> = self
            .tree
            .walk_depth_first(id)
            .into_iter()
            .filter(|&node| self.requires_sync(node))
            .filter_map(|node| self.describe_widget(node).map(|d| (node, d)))
            .collect();
        let window = if window_dirty {
            Some(self.describe_window_at(id, None)?)
        } else {
            None
        };

        let Some(handle) = self.window_state_mut(id).and_then(|s| s.handle.as_mut()) else {
            return Ok(());
        };
        let mut rejected = None;
        for (index, (_, description)) in pending.iter().enumerate() {
            if !handle.update_widget(description) {
                rejected = Some(index);
                break;
            }
            trace!(widget = %description.name, "widget synced");
        }
        if rejected.is_none() {
            if let Some(window) = &window {
                handle.apply(window);
                trace!(window = ?id, "window fields synced");
            }
        }

        self.clear_sync_flags(id);
        let Some(index) = rejected else {
            return Ok(());
        };
        for (node, _) in &pending[index..] {
            self.tree[*node].element.require_sync = true;
        }
        self.tree[id].element.require_sync = window_dirty;
        Err(Error::UnknownWidget(pending[index].1.name.clone()))
    }

    /// Rebuild the host window in place.
    fn reopen(&mut self, id: NodeId, host: &mut dyn Host) -> Result<()> {
        let state = self.window_state_mut(id).ok_or(Error::NotAWindow(id))?;
        state.requested_refresh = false;
        let Some(mut old) = state.handle.take() else {
            return Ok(());
        };
        let position = old.position();
        old.close();

        let description = self.describe_window_at(id, Some(position))?;
        let handle = host.open_window(&description);
        debug!(window = ?id, x = position.x, y = position.y, "window rebuilt");
        if let Some(state) = self.window_state_mut(id) {
            state.handle = Some(handle);
        }
        self.clear_sync_flags(id);
        Ok(())
    }

    fn clear_sync_flags(&mut self, id: NodeId) {
        for node in self.tree.walk_depth_first(id) {
            self.tree[node].element.require_sync = false;
        }
    }

    /// Take a window callback out, run it, and put it back unless the
    /// callback replaced itself or the window was destroyed.
    fn run_window_handler(
        &mut self,
        id: NodeId,
        slot: fn(&mut WindowState) -> &mut Option<WindowHandler>,
    ) {
        let Some(mut handler) = self.window_state_mut(id).and_then(|s| slot(s).take()) else {
            return;
        };
        handler(self, id);
        if let Some(state) = self.window_state_mut(id) {
            let current = slot(state);
            if current.is_none() {
                *current = Some(handler);
            }
        }
    }

    // -- descriptions -------------------------------------------------------

    /// The host description of a single widget or group box frame, with its
    /// rectangle relative to the window. Plain boxes and windows have none.
    pub fn describe_widget(&self, id: NodeId) -> Option<WidgetDescription> {
        let node = self.tree.get(id)?;
        let (widget_type, name, is_disabled, props) = match &node.kind {
            NodeKind::Widget(widget) => (
                widget.kind.widget_type(),
                widget.name.clone(),
                widget.disabled,
                widget.kind.props(),
            ),
            NodeKind::Container(Container { frame: Frame::Group(group), .. }) => {
                (group.widget_type(), group.name.clone(), false, group.props())
            }
            NodeKind::Container(_) => return None,
        };
        let region = self.window_region(id);
        Some(WidgetDescription {
            widget_type,
            name,
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            is_disabled,
            props,
        })
    }

    /// The flattened host widgets of a subtree in layout order. A group box
    /// frame comes right before its children.
    pub fn describe(&self, id: NodeId) -> Vec<WidgetDescription> {
        self.tree
            .walk_depth_first(id)
            .into_iter()
            .filter_map(|node| self.describe_widget(node))
            .collect()
    }

    /// The description a host needs to open the window.
    pub fn describe_window(&self, id: NodeId) -> Result<WindowDescription> {
        self.describe_window_at(id, None)
    }

    pub(crate) fn describe_window_at(
        &self,
        id: NodeId,
        position: Option<Offset>,
    ) -> Result<WindowDescription> {
        let state = self.window_state(id).ok_or(Error::NotAWindow(id))?;
        let horizontal = state.bounds(Axis::Horizontal);
        let vertical = state.bounds(Axis::Vertical);
        let colours = state.colours();
        Ok(WindowDescription {
            classification: state.classification().to_owned(),
            width: self.pixel_width(id),
            height: self.pixel_height(id),
            min_width: horizontal.min,
            max_width: horizontal.max,
            min_height: vertical.min,
            max_height: vertical.max,
            title: state.title().to_owned(),
            colours: [colours.title_bar, colours.main],
            widgets: self.describe(id),
            x: position.map(|p| p.x),
            y: position.map(|p| p.y),
        })
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::host::WindowHandle;
    use crate::testing::MockHost;
    use crate::widgets::{Checkbox, Label, ListView};

    fn demo(ui: &mut Ui) -> (NodeId, NodeId, NodeId) {
        let window = ui.window("demo", "Demo");
        let group = ui.group_box("Options");
        let checkbox = ui.checkbox("Enabled");
        ui.add_child(window, group).unwrap();
        ui.add_child(group, checkbox).unwrap();
        (window, group, checkbox)
    }

    #[test]
    fn describe_lists_group_before_children() {
        let mut ui = Ui::new();
        let (window, group, checkbox) = demo(&mut ui);
        let names: Vec<String> = ui.describe(window).into_iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![ui.name(group).unwrap().to_owned(), ui.name(checkbox).unwrap().to_owned()]
        );
    }

    #[test]
    fn descriptions_use_window_coordinates() {
        let mut ui = Ui::new();
        let (window, _, checkbox) = demo(&mut ui);
        let description = ui.describe_widget(checkbox).unwrap();
        assert_eq!(description.region(), ui.window_region(checkbox));
        assert_eq!(description.x, ui.window_position(checkbox).x);
        assert!(ui.describe_widget(window).is_none());
    }

    #[test]
    fn open_describes_the_window() {
        let mut ui = Ui::new();
        let (window, _, _) = demo(&mut ui);
        ui.set_colours(window, 5, Some(9)).unwrap();
        let mut host = MockHost::new();
        ui.open(window, &mut host).unwrap();

        let record = host.last_window().unwrap();
        assert_eq!(record.description, ui.describe_window(window).unwrap());
        assert_eq!(record.description.colours, [9, 5]);
        assert_eq!(record.description.x, None);
        assert!(ui.is_open(window));
        assert!(matches!(ui.open(window, &mut host), Err(Error::WindowAlreadyOpen(_))));
    }

    #[test]
    fn open_requires_a_window() {
        let mut ui = Ui::new();
        let column = ui.vertical_box();
        let mut host = MockHost::new();
        assert!(matches!(ui.open(column, &mut host), Err(Error::NotAWindow(_))));
        assert_eq!(host.open_count(), 0);
    }

    #[test]
    fn tick_pushes_only_dirty_widgets() {
        let mut ui = Ui::new();
        let (window, _, checkbox) = demo(&mut ui);
        let label = ui.label("Status");
        ui.add_child(window, label).unwrap();
        let mut host = MockHost::new();
        ui.open(window, &mut host).unwrap();

        ui.edit::<Label, _, _>(label, |l| l.set_text("Ready")).unwrap();
        assert!(ui.requires_sync(label));
        assert!(!ui.requires_sync(checkbox));
        ui.on_update(window, &mut host).unwrap();

        let record = host.last_window().unwrap();
        assert_eq!(record.updates.len(), 1);
        assert_eq!(record.updates[0].name, ui.name(label).unwrap());
        assert_eq!(record.applies, 0);
        assert!(!ui.requires_sync(label));

        // Nothing changed since: a second tick sends nothing.
        ui.on_update(window, &mut host).unwrap();
        assert_eq!(host.last_window().unwrap().updates.len(), 1);
    }

    #[test]
    fn window_change_resyncs_everything() {
        let mut ui = Ui::new();
        let (window, _, _) = demo(&mut ui);
        let mut host = MockHost::new();
        ui.open(window, &mut host).unwrap();

        ui.set_width(window, 180.0);
        ui.on_update(window, &mut host).unwrap();

        let record = host.last_window().unwrap();
        assert_eq!(record.width, 180.0);
        assert_eq!(record.applies, 1);
        assert_eq!(record.description.max_width, 180.0);
        // Group frame and checkbox both moved with the new width.
        assert_eq!(record.updates.len(), 2);
        assert_eq!(record.description.widgets, ui.describe(window));
    }

    #[test]
    fn refresh_reopens_at_the_same_position() {
        let mut ui = Ui::new();
        let (window, group, _) = demo(&mut ui);
        let mut host = MockHost::new();
        ui.open(window, &mut host).unwrap();
        host.drag_move(120.0, 64.0);

        let extra = ui.checkbox("Extra");
        ui.add_child(group, extra).unwrap();
        assert!(ui.window_state(window).unwrap().refresh_requested());
        ui.on_update(window, &mut host).unwrap();

        assert_eq!(host.open_count(), 2);
        assert!(!host.window(0).unwrap().open);
        let record = host.last_window().unwrap();
        assert!(record.open);
        assert_eq!(record.position, Offset::new(120.0, 64.0));
        assert_eq!(record.description.x, Some(120.0));
        assert!(record.widget(ui.name(extra).unwrap()).is_some());
        assert!(!ui.window_state(window).unwrap().refresh_requested());
    }

    #[test]
    fn list_shape_change_refreshes() {
        let mut ui = Ui::new();
        let window = ui.window("demo", "Demo");
        let list = ui.list_view();
        ui.add_child(window, list).unwrap();
        let mut host = MockHost::new();
        ui.open(window, &mut host).unwrap();

        ui.edit::<ListView, _, _>(list, |l| l.add_item(["one"])).unwrap().unwrap();
        ui.on_update(window, &mut host).unwrap();
        assert_eq!(host.open_count(), 2);
    }

    #[test]
    fn drag_resize_lays_out_again() {
        let mut ui = Ui::new();
        let (window, group, checkbox) = demo(&mut ui);
        ui.set_horizontal_resize(window, true, Some(100.0), Some(400.0)).unwrap();
        let mut host = MockHost::new();
        ui.open(window, &mut host).unwrap();

        host.drag_resize(300.0, ui.pixel_height(window));
        ui.on_update(window, &mut host).unwrap();

        assert_eq!(ui.pixel_width(window), 300.0);
        assert_eq!(ui.pixel_width(group), 300.0 - 8.0);
        let record = host.last_window().unwrap();
        assert_eq!(record.widget(ui.name(checkbox).unwrap()).unwrap().width, ui.pixel_width(checkbox));
        // The user chose the width; the bounds stay as configured.
        assert_eq!(record.description.max_width, 400.0);
    }

    #[test]
    fn close_runs_callback_once() {
        let mut ui = Ui::new();
        let (window, _, _) = demo(&mut ui);
        let closed = Rc::new(Cell::new(0));
        let counter = Rc::clone(&closed);
        ui.set_on_close(window, move |_, _| counter.set(counter.get() + 1)).unwrap();
        let mut host = MockHost::new();
        ui.open(window, &mut host).unwrap();

        ui.close(window).unwrap();
        ui.close(window).unwrap();
        assert_eq!(closed.get(), 1);
        assert!(!ui.is_open(window));
        assert!(!host.last_window().unwrap().open);
    }

    #[test]
    fn host_close_does_not_call_back_into_host() {
        let mut ui = Ui::new();
        let (window, _, _) = demo(&mut ui);
        let closed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&closed);
        ui.set_on_close(window, move |_, _| flag.set(true)).unwrap();
        let mut host = MockHost::new();
        ui.open(window, &mut host).unwrap();

        ui.on_close(window).unwrap();
        assert!(closed.get());
        assert!(!ui.is_open(window));
        // The mock only flips `open` when the engine calls `close`.
        assert!(host.last_window().unwrap().open);

        // A closed window can be opened again.
        ui.open(window, &mut host).unwrap();
        assert_eq!(host.open_count(), 2);
    }

    #[test]
    fn update_callback_can_edit_widgets() {
        let mut ui = Ui::new();
        let (window, _, checkbox) = demo(&mut ui);
        ui.set_on_update(window, move |ui, _| {
            ui.edit::<Checkbox, _, _>(checkbox, |c| c.set_checked(true)).unwrap();
        })
        .unwrap();
        let mut host = MockHost::new();
        ui.open(window, &mut host).unwrap();

        ui.on_update(window, &mut host).unwrap();
        assert!(ui.requires_sync(checkbox));
        ui.on_update(window, &mut host).unwrap();

        let record = host.last_window().unwrap();
        let pushed = record.widget(ui.name(checkbox).unwrap()).unwrap();
        assert_eq!(pushed, &ui.describe_widget(checkbox).unwrap());
    }

    #[test]
    fn closed_window_ticks_are_ignored() {
        let mut ui = Ui::new();
        let (window, _, _) = demo(&mut ui);
        let mut host = MockHost::new();
        ui.on_update(window, &mut host).unwrap();
        assert_eq!(host.open_count(), 0);
    }

    /// A host window that lost every widget, as after a plugin reload.
    struct ForgetfulWindow {
        applies: Rc<Cell<usize>>,
    }

    impl WindowHandle for ForgetfulWindow {
        fn position(&self) -> Offset {
            Offset::ZERO
        }
        fn width(&self) -> f64 {
            100.0
        }
        fn height(&self) -> f64 {
            60.0
        }
        fn set_width(&mut self, _: f64) {}
        fn set_height(&mut self, _: f64) {}
        fn apply(&mut self, _: &WindowDescription) {
            self.applies.set(self.applies.get() + 1);
        }
        fn update_widget(&mut self, _: &WidgetDescription) -> bool {
            false
        }
        fn close(&mut self) {}
    }

    struct ForgetfulHost {
        applies: Rc<Cell<usize>>,
    }

    impl Host for ForgetfulHost {
        fn open_window(&mut self, _: &WindowDescription) -> Box<dyn WindowHandle> {
            Box::new(ForgetfulWindow { applies: Rc::clone(&self.applies) })
        }
    }

    #[test]
    fn lost_widget_fails_the_tick_and_stays_dirty() {
        let mut ui = Ui::new();
        let window = ui.window("demo", "Demo");
        ui.set_width(window, 100.0);
        ui.set_height(window, 60.0);
        let label = ui.label("Idle");
        ui.add_child(window, label).unwrap();
        let applies = Rc::new(Cell::new(0));
        let mut host = ForgetfulHost { applies: Rc::clone(&applies) };
        ui.open(window, &mut host).unwrap();

        ui.edit::<Label, _, _>(label, |l| l.set_text("Ready")).unwrap();
        let name = ui.name(label).unwrap().to_owned();
        let result = ui.on_update(window, &mut host);
        assert!(matches!(result, Err(Error::UnknownWidget(n)) if n == name));
        assert!(ui.requires_sync(label));
        assert!(!ui.requires_sync(window));

        ui.set_horizontal_resize(window, true, Some(50.0), Some(200.0)).unwrap();
        assert!(ui.on_update(window, &mut host).is_err());
        assert!(ui.requires_sync(window));
        assert_eq!(applies.get(), 0);
    }
}

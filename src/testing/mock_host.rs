//! MockHost: an in-memory host that records what the engine sends it.
//!
//! Every window the engine opens becomes a [`WindowRecord`] in a shared
//! journal. Records stay in the journal after their window closes, so a
//! test can compare the window before and after a refresh.

use std::cell::RefCell;
use std::rc::Rc;

use crate::description::{WidgetDescription, WindowDescription};
use crate::geometry::Offset;
use crate::host::{Host, WindowHandle};

// ---------------------------------------------------------------------------
// WindowRecord
// ---------------------------------------------------------------------------

/// What the mock host knows about one window it opened.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRecord {
    /// The opening description, with later widget updates and window-level
    /// applies folded in.
    pub description: WindowDescription,
    pub position: Offset,
    pub width: f64,
    pub height: f64,
    pub open: bool,
    /// Widget descriptions received through `update_widget`, in order.
    pub updates: Vec<WidgetDescription>,
    /// Number of window-level applies.
    pub applies: usize,
}

impl WindowRecord {
    /// The current state of a widget by name.
    pub fn widget(&self, name: &str) -> Option<&WidgetDescription> {
        self.description.widget(name)
    }
}

type Journal = Rc<RefCell<Vec<WindowRecord>>>;

// ---------------------------------------------------------------------------
// MockHost
// ---------------------------------------------------------------------------

/// A headless [`Host`] for tests.
///
/// # Examples
///
/// ```
/// use oui::testing::MockHost;
/// use oui::Ui;
///
/// let mut host = MockHost::new();
/// let mut ui = Ui::new();
/// let window = ui.window("demo", "Demo");
/// let label = ui.label("Hello");
/// ui.add_child(window, label).unwrap();
///
/// ui.open(window, &mut host).unwrap();
/// let record = host.last_window().unwrap();
/// assert!(record.open);
/// assert_eq!(record.description.widgets.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockHost {
    journal: Journal,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many windows were ever opened, refreshes included.
    pub fn open_count(&self) -> usize {
        self.journal.borrow().len()
    }

    /// A snapshot of the `index`-th opened window.
    pub fn window(&self, index: usize) -> Option<WindowRecord> {
        self.journal.borrow().get(index).cloned()
    }

    /// A snapshot of the most recently opened window.
    pub fn last_window(&self) -> Option<WindowRecord> {
        self.journal.borrow().last().cloned()
    }

    /// Simulate the user dragging the resize handle of the latest window.
    pub fn drag_resize(&mut self, width: f64, height: f64) {
        if let Some(record) = self.journal.borrow_mut().last_mut() {
            record.width = width;
            record.height = height;
        }
    }

    /// Simulate the user moving the latest window.
    pub fn drag_move(&mut self, x: f64, y: f64) {
        if let Some(record) = self.journal.borrow_mut().last_mut() {
            record.position = Offset::new(x, y);
        }
    }
}

impl Host for MockHost {
    fn open_window(&mut self, description: &WindowDescription) -> Box<dyn WindowHandle> {
        let mut journal = self.journal.borrow_mut();
        let cascade = 20.0 * journal.len() as f64;
        let position = match (description.x, description.y) {
            (Some(x), Some(y)) => Offset::new(x, y),
            _ => Offset::new(40.0 + cascade, 40.0 + cascade),
        };
        journal.push(WindowRecord {
            description: description.clone(),
            position,
            width: description.width,
            height: description.height,
            open: true,
            updates: Vec::new(),
            applies: 0,
        });
        Box::new(MockWindow { index: journal.len() - 1, journal: Rc::clone(&self.journal) })
    }
}

// ---------------------------------------------------------------------------
// MockWindow
// ---------------------------------------------------------------------------

/// Handle to one record of a [`MockHost`] journal.
#[derive(Debug)]
pub struct MockWindow {
    index: usize,
    journal: Journal,
}

impl MockWindow {
    fn read<R>(&self, f: impl FnOnce(&WindowRecord) -> R) -> R {
        f(&self.journal.borrow()[self.index])
    }

    fn write<R>(&mut self, f: impl FnOnce(&mut WindowRecord) -> R) -> R {
        f(&mut self.journal.borrow_mut()[self.index])
    }
}

impl WindowHandle for MockWindow {
    fn position(&self) -> Offset {
        self.read(|r| r.position)
    }

    fn width(&self) -> f64 {
        self.read(|r| r.width)
    }

    fn height(&self) -> f64 {
        self.read(|r| r.height)
    }

    fn set_width(&mut self, width: f64) {
        self.write(|r| r.width = width);
    }

    fn set_height(&mut self, height: f64) {
        self.write(|r| r.height = height);
    }

    fn apply(&mut self, description: &WindowDescription) {
        self.write(|r| {
            let widgets = std::mem::take(&mut r.description.widgets);
            r.description = WindowDescription { widgets, ..description.clone() };
            r.applies += 1;
        });
    }

    fn update_widget(&mut self, description: &WidgetDescription) -> bool {
        self.write(|r| {
            let Some(slot) = r.description.widgets.iter_mut().find(|w| w.name == description.name)
            else {
                return false;
            };
            *slot = description.clone();
            r.updates.push(description.clone());
            true
        })
    }

    fn close(&mut self) {
        self.write(|r| r.open = false);
    }
}

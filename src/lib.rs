//! # oui
//!
//! A box-model layout engine for OpenRCT2 plugin windows.
//!
//! The host game only knows flat lists of absolutely positioned widgets. oui
//! lets a plugin build windows out of nested vertical and horizontal boxes
//! instead, sizes everything in pixels or percentages, and keeps the live
//! host window in step with the tree on every tick.
//!
//! ## Core Systems
//!
//! - **[`tree`]**: slotmap-backed node arena
//! - **[`layout`]**: size resolution, margins, fillers, stacking
//! - **[`widget`]** / **[`widgets`]**: the leaf widget kinds and their state
//! - **[`window`]**: window roots, host lifecycle, descriptions
//! - **[`event`]**: host interactions and callbacks
//! - **[`host`]**: the traits a plugin binds to the game API
//! - **[`config`]**: default metrics for new nodes
//! - **[`geometry`]**: Offset, Size, Region, Spacing primitives
//!
//! ## Example
//!
//! ```
//! use oui::testing::MockHost;
//! use oui::Ui;
//!
//! let mut ui = Ui::new();
//! let window = ui.window("my-plugin.main", "My Plugin");
//! let row = ui.horizontal_box();
//! let ok = ui.text_button("OK");
//! let cancel = ui.text_button("Cancel");
//! ui.add_child(window, row).unwrap();
//! ui.add_child(row, ok).unwrap();
//! ui.add_child(row, cancel).unwrap();
//! ui.set_relative_width(ok, 50.0);
//! ui.set_relative_width(cancel, 50.0);
//!
//! let mut host = MockHost::new();
//! ui.open(window, &mut host).unwrap();
//! ui.on_update(window, &mut host).unwrap();
//! assert_eq!(host.last_window().unwrap().description.widgets.len(), 2);
//! ```

// Foundation
pub mod config;
pub mod error;
pub mod geometry;

// Node arena and layout
pub mod layout;
pub mod tree;
pub mod ui;

// Widget system
pub mod widget;
pub mod widgets;

// Windows and the host boundary
pub mod description;
pub mod event;
pub mod host;
pub mod window;

// Headless support
pub mod testing;

pub use config::Config;
pub use description::{WidgetDescription, WindowDescription};
pub use error::{Error, Result};
pub use event::{Event, Interaction};
pub use geometry::{Axis, Offset, Region, Size, Spacing};
pub use host::{Host, WindowHandle};
pub use tree::NodeId;
pub use ui::Ui;

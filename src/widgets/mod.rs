//! Built-in widgets: Label, Button, Checkbox, Dropdown, Spinner, ListView,
//! Viewport, and the GroupBox frame.

pub mod button;
pub mod checkbox;
pub mod dropdown;
pub mod group_box;
pub mod label;
pub mod list_view;
pub mod spinner;
pub mod viewport;

pub use button::{Button, ButtonFace};
pub use checkbox::Checkbox;
pub use dropdown::{Dropdown, PALETTE};
pub use group_box::GroupBox;
pub use label::Label;
pub use list_view::{Cell, ColumnWidth, ListView, ListViewColumn, Scrollbars};
pub use spinner::Spinner;
pub use viewport::Viewport;

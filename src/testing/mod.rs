//! Headless testing support.
//!
//! Use the [`MockHost`] to open windows without a game, then inspect the
//! descriptions and updates the engine sent to it.

pub mod mock_host;

pub use mock_host::{MockHost, MockWindow, WindowRecord};

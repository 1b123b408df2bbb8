//! Events: host interactions, handler payloads, dispatch.

pub mod handler;
pub mod input;

pub use handler::{Event, Handler, WindowHandler};
pub use input::Interaction;

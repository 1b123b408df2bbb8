//! Layout engine: size resolution, container rules, stacking.
//!
//! All of it is implemented as `impl Ui` blocks over the node arena:
//!
//! - [`element`]: pixel sizes, relative sizes, positions, change propagation
//! - [`container`]: children, content area, collapsed gaps, fillers
//! - [`stack`]: the vertical/horizontal child placement pass

pub mod container;
pub mod element;
pub mod stack;

//! Territory-claiming engine in the style of Qix
//!
//! A player traces axis-aligned paths through unclaimed space. When a path
//! reconnects with claimed territory, the unclaimed area is cut along the path
//! and one of the resulting regions is flood-filled and annexed, unless the
//! roaming hostile entity occupies it. The hostile aborts any path it touches.

#![forbid(unsafe_code)]

/// Path tracking, claim resolution, hostile motion and the tick loop
pub mod algorithm;
/// Collaborators around the engine: input, timing, rendering, CLI and errors
pub mod io;
/// Grid state, cell masks, adjacency and rasterization
pub mod spatial;

pub use io::error::{QixError, Result};

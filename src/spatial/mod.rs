//! Spatial data structures for the playing field
//!
//! This module contains:
//! - Per-cell claim state and the derived unclaimed mask
//! - Bit-packed cell masks used for connectivity analysis
//! - The boundary (adjacency) oracle
//! - Line rasterization for drawn paths

/// Boundary test for legal moves and path closure
pub mod adjacency;
/// Axis-aligned movement directions
pub mod direction;
/// Claim state of the playing field
pub mod field;
/// Bit-packed boolean grids
pub mod mask;
/// Segment and polyline rasterization
pub mod raster;

pub use direction::Direction;
pub use field::{CellState, Field};
pub use mask::CellMask;

/// Grid coordinate in `[x, y]` order; `x` grows right, `y` grows down
pub type Position = [i32; 2];

//! Claim resolution for a closed path
//!
//! The closed path is rasterized into a one-cell-wide cut and removed from
//! the unclaimed mask, splitting the unclaimed area into candidate regions.
//! Two seed cells straddle the path's first segment. The region around the
//! first seed is claimed unless the hostile is inside it, in which case the
//! region around the second seed is tried. At most one region is claimed per
//! closure, and none when both sides hold the hostile or neither seed lands
//! on a candidate cell.

use log::{debug, info};
use std::collections::VecDeque;

use crate::algorithm::path::Path;
use crate::spatial::raster::rasterize_polyline;
use crate::spatial::{CellMask, Direction, Field, Position};

/// Which seed produced the claimed region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSide {
    /// Left of a vertical first segment, above a horizontal one
    First,
    /// Right of a vertical first segment, below a horizontal one
    Second,
}

/// Outcome of resolving one closed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A region was annexed
    Claimed {
        /// Seed whose region was taken
        side: SeedSide,
        /// Newly claimed cells in discovery order
        cells: Vec<Position>,
    },
    /// No hostile-free region was found; the field is untouched
    Unresolved,
}

impl Resolution {
    /// Number of cells this resolution claimed
    pub fn claimed_area(&self) -> usize {
        match self {
            Self::Claimed { cells, .. } => cells.len(),
            Self::Unresolved => 0,
        }
    }
}

/// Seed cells on either side of a path's first segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seeds {
    /// Tried first
    pub first: Position,
    /// Tried when the first seed's region is unusable
    pub second: Position,
}

/// A 4-connected set of candidate cells
#[derive(Debug, Clone)]
pub struct Region {
    cells: Vec<Position>,
    members: CellMask,
}

impl Region {
    /// Cells of the region in discovery order
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Number of cells in the region
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Whether the region includes `pos`
    pub fn contains(&self, pos: Position) -> bool {
        self.members.get(pos)
    }

    fn into_cells(self) -> Vec<Position> {
        self.cells
    }
}

/// Seeds offset one cell to either side of the first segment, at its start
///
/// Offsets are clamped to the field. A vertical first segment (equal `x`)
/// offsets horizontally, anything else offsets vertically. Returns `None` for
/// paths with fewer than two vertices.
pub fn seed_cells(path: &Path, width: usize, height: usize) -> Option<Seeds> {
    let [start, next] = match path.vertices() {
        [start, next, ..] => [*start, *next],
        _ => return None,
    };

    let max_x = width.saturating_sub(1) as i32;
    let max_y = height.saturating_sub(1) as i32;

    let seeds = if start[0] == next[0] {
        Seeds {
            first: [(start[0] - 1).max(0), start[1]],
            second: [(start[0] + 1).min(max_x), start[1]],
        }
    } else {
        Seeds {
            first: [start[0], (start[1] - 1).max(0)],
            second: [start[0], (start[1] + 1).min(max_y)],
        }
    };

    Some(seeds)
}

/// Rasterize a closed path into the cut mask
pub fn cut_mask(path: &Path, width: usize, height: usize) -> CellMask {
    rasterize_polyline(path.vertices(), width, height)
}

/// Unclaimed cells of `field` with the cut removed
pub fn candidate_mask(field: &Field, cut: &CellMask) -> CellMask {
    let mut candidate = field.unclaimed_mask().clone();
    candidate.subtract(cut);
    candidate
}

/// Breadth-first 4-connected component of `candidate` containing `seed`
///
/// Returns `None` when `seed` is not a candidate cell.
pub fn flood_region(candidate: &CellMask, seed: Position) -> Option<Region> {
    if !candidate.get(seed) {
        return None;
    }

    let mut members = CellMask::new(candidate.width(), candidate.height());
    let mut cells = Vec::new();
    let mut queue = VecDeque::new();

    members.set(seed, true);
    queue.push_back(seed);

    while let Some(cell) = queue.pop_front() {
        cells.push(cell);
        for direction in Direction::ALL {
            let neighbour = direction.offset(cell, 1);
            if candidate.get(neighbour) && !members.get(neighbour) {
                members.set(neighbour, true);
                queue.push_back(neighbour);
            }
        }
    }

    Some(Region { cells, members })
}

/// Resolve a closed path against the field
///
/// Claims at most one region and never one containing `hostile`. When
/// nothing qualifies the field is left exactly as it was. The outcome depends
/// only on the field, the path and the hostile cell.
pub fn resolve(path: &Path, field: &mut Field, hostile: Position) -> Resolution {
    let (width, height) = (field.width(), field.height());
    let Some(seeds) = seed_cells(path, width, height) else {
        debug!("Closed path has fewer than two vertices; nothing to resolve");
        return Resolution::Unresolved;
    };

    let cut = cut_mask(path, width, height);
    let candidate = candidate_mask(field, &cut);

    for (side, seed) in [(SeedSide::First, seeds.first), (SeedSide::Second, seeds.second)] {
        let Some(region) = flood_region(&candidate, seed) else {
            debug!("{side:?} seed {seed:?} is not a candidate cell");
            continue;
        };
        if region.contains(hostile) {
            debug!("{side:?} seed region holds the hostile at {hostile:?}");
            continue;
        }

        let cells = region.into_cells();
        commit(field, &cells);
        info!(
            "Claimed {} cells from {side:?} seed ({:.1}% of field claimed)",
            cells.len(),
            field.claimed_fraction() * 100.0
        );
        return Resolution::Claimed { side, cells };
    }

    debug!("No hostile-free region on either side of the path");
    Resolution::Unresolved
}

fn commit(field: &mut Field, cells: &[Position]) {
    for &cell in cells {
        field.claim(cell);
    }
}

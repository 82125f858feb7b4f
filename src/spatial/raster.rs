//! Segment and polyline rasterization for drawn paths
//!
//! The same stepping rule backs both the cut mask used during claim
//! resolution and the per-tick trail test used by the hostile and the
//! collision monitor, so every consumer agrees on which cells a path covers.

use crate::spatial::{CellMask, Position};

/// Iterator over the cells of a single segment, endpoints inclusive
///
/// Bresenham stepping; axis-aligned segments yield every cell between the
/// endpoints.
#[derive(Debug, Clone)]
pub struct SegmentCells {
    current: Position,
    end: Position,
    step: [i32; 2],
    dx: i32,
    dy: i32,
    err: i32,
    done: bool,
}

impl Iterator for SegmentCells {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let cell = self.current;
        if cell == self.end {
            self.done = true;
            return Some(cell);
        }

        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.current[0] += self.step[0];
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.current[1] += self.step[1];
        }

        Some(cell)
    }
}

/// Cells covered by the segment from `start` to `end`
pub const fn trace_segment(start: Position, end: Position) -> SegmentCells {
    let dx = (end[0] - start[0]).abs();
    let dy = -(end[1] - start[1]).abs();
    let step = [
        if start[0] < end[0] { 1 } else { -1 },
        if start[1] < end[1] { 1 } else { -1 },
    ];

    SegmentCells {
        current: start,
        end,
        step,
        dx,
        dy,
        err: dx + dy,
        done: false,
    }
}

/// Cells covered by an open polyline through `points`
///
/// A single point covers just that cell; shared vertices are yielded once
/// per segment they belong to.
pub fn trace_polyline(points: &[Position]) -> impl Iterator<Item = Position> + '_ {
    let lone = match points {
        [only] => Some(*only),
        _ => None,
    };

    lone.into_iter().chain(
        points
            .windows(2)
            .flat_map(|pair| match pair {
                [start, end] => Some(trace_segment(*start, *end)),
                _ => None,
            })
            .flatten(),
    )
}

/// Rasterize a polyline into a mask of the given dimensions
///
/// Cells falling outside the mask are dropped.
pub fn rasterize_polyline(points: &[Position], width: usize, height: usize) -> CellMask {
    let mut mask = CellMask::new(width, height);
    for cell in trace_polyline(points) {
        mask.set(cell, true);
    }
    mask
}

/// Whether `cell` lies on the polyline through `points`
///
/// Walks the segments directly, so no mask is allocated per query.
pub fn polyline_contains(points: &[Position], cell: Position) -> bool {
    trace_polyline(points).any(|covered| covered == cell)
}

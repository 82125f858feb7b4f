//! Claim state of the playing field with its derived unclaimed mask
//!
//! The field is created once per session. Its outer border ring starts
//! claimed and claimed cells never revert. Every write goes through
//! [`Field::claim`], which updates the per-cell state and the unclaimed mask
//! together so the two never disagree.

use ndarray::Array2;

use crate::io::configuration::MAX_FIELD_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{CellMask, Position};

/// Ownership state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// Not yet annexed; the hostile roams here
    #[default]
    Unclaimed,
    /// Annexed territory, including the initial border
    Claimed,
}

/// Per-cell claim state of the playing surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Claim state indexed `[y, x]`
    cells: Array2<CellState>,

    /// Set exactly where `cells` is `Unclaimed`
    unclaimed: CellMask,

    border_width: usize,
}

impl Field {
    /// Create a field whose outer ring of `border_width` cells is claimed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `border_width` is zero
    /// - Either dimension exceeds `MAX_FIELD_DIMENSION`
    /// - The border leaves no unclaimed interior
    pub fn new(width: usize, height: usize, border_width: usize) -> Result<Self> {
        if border_width == 0 {
            return Err(invalid_parameter(
                "border_width",
                &border_width,
                &"border must be at least one cell wide",
            ));
        }
        if width > MAX_FIELD_DIMENSION || height > MAX_FIELD_DIMENSION {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{width}x{height}"),
                &format!("each dimension must be at most {MAX_FIELD_DIMENSION}"),
            ));
        }
        if width <= 2 * border_width || height <= 2 * border_width {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{width}x{height}"),
                &format!("border of width {border_width} leaves no unclaimed interior"),
            ));
        }

        let mut cells = Array2::from_elem((height, width), CellState::Unclaimed);
        let mut unclaimed = CellMask::filled(width, height);

        for ((y, x), cell) in cells.indexed_iter_mut() {
            let on_border = x < border_width
                || y < border_width
                || x >= width - border_width
                || y >= height - border_width;
            if on_border {
                *cell = CellState::Claimed;
                unclaimed.set([x as i32, y as i32], false);
            }
        }

        Ok(Self {
            cells,
            unclaimed,
            border_width,
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Width of the initial claimed ring
    pub const fn border_width(&self) -> usize {
        self.border_width
    }

    fn grid_index(&self, pos: Position) -> Option<[usize; 2]> {
        let x = usize::try_from(pos[0]).ok()?;
        let y = usize::try_from(pos[1]).ok()?;
        (x < self.width() && y < self.height()).then_some([y, x])
    }

    /// Whether a position lies on the grid
    pub fn in_bounds(&self, pos: Position) -> bool {
        self.grid_index(pos).is_some()
    }

    /// Claim state of a cell, `None` when out of bounds
    pub fn state(&self, pos: Position) -> Option<CellState> {
        self.grid_index(pos)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Whether the cell is in bounds and claimed
    pub fn is_claimed(&self, pos: Position) -> bool {
        self.state(pos) == Some(CellState::Claimed)
    }

    /// Whether the cell is in bounds and unclaimed
    pub fn is_unclaimed(&self, pos: Position) -> bool {
        self.state(pos) == Some(CellState::Unclaimed)
    }

    /// Whether the cell belongs to the initial border ring
    pub fn is_border(&self, pos: Position) -> bool {
        self.grid_index(pos).is_some_and(|[y, x]| {
            x < self.border_width
                || y < self.border_width
                || x >= self.width() - self.border_width
                || y >= self.height() - self.border_width
        })
    }

    /// Bit mask set exactly on unclaimed cells
    pub const fn unclaimed_mask(&self) -> &CellMask {
        &self.unclaimed
    }

    /// Number of unclaimed cells
    pub fn unclaimed_count(&self) -> usize {
        self.unclaimed.count()
    }

    /// Number of claimed cells, border included
    pub fn claimed_count(&self) -> usize {
        self.width() * self.height() - self.unclaimed_count()
    }

    /// Fraction of the whole field that is claimed, border included
    pub fn claimed_fraction(&self) -> f64 {
        self.claimed_count() as f64 / (self.width() * self.height()) as f64
    }

    /// Mark a cell claimed in both the state grid and the unclaimed mask
    ///
    /// Returns whether the cell changed. Out-of-bounds positions are ignored.
    pub(crate) fn claim(&mut self, pos: Position) -> bool {
        let Some(index) = self.grid_index(pos) else {
            return false;
        };
        let Some(cell) = self.cells.get_mut(index) else {
            return false;
        };
        if *cell == CellState::Claimed {
            return false;
        }
        *cell = CellState::Claimed;
        self.unclaimed.set(pos, false);
        true
    }
}

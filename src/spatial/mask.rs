use bitvec::prelude::*;
use std::fmt;

use crate::spatial::Position;

/// Fixed-size boolean grid packed into a bit vector
///
/// Stored row-major (`y * width + x`). Out-of-bounds reads are `false` and
/// out-of-bounds writes are ignored, so callers never index past the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMask {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl CellMask {
    /// Create a mask with every cell unset
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Create a mask with every cell set
    pub fn filled(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![1; width * height],
            width,
            height,
        }
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Linear bit index for a position, `None` when outside the grid
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        let x = usize::try_from(pos[0]).ok()?;
        let y = usize::try_from(pos[1]).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// Position for a linear bit index
    pub const fn position_of(&self, index: usize) -> Position {
        [(index % self.width) as i32, (index / self.width) as i32]
    }

    /// Test a cell
    pub fn get(&self, pos: Position) -> bool {
        self.index_of(pos)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Set or clear a cell
    pub fn set(&mut self, pos: Position, value: bool) {
        if let Some(index) = self.index_of(pos) {
            self.bits.set(index, value);
        }
    }

    /// Clear every cell that is set in `other`
    ///
    /// Masks of different dimensions are matched by position.
    pub fn subtract(&mut self, other: &Self) {
        for index in other.bits.iter_ones() {
            let pos = other.position_of(index);
            self.set(pos, false);
        }
    }

    /// Count set cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no cell is set
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Iterate over the positions of all set cells in row-major order
    pub fn iter_set(&self) -> impl Iterator<Item = Position> + '_ {
        self.bits.iter_ones().map(|index| self.position_of(index))
    }
}

impl fmt::Display for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CellMask({}x{}, {} set)",
            self.width,
            self.height,
            self.count()
        )
    }
}

//! Boundary oracle deciding where the player may walk and where paths close

use crate::spatial::{Direction, Field, Position};

/// Whether a cell counts as boundary
///
/// A cell is boundary when it is claimed, or when it is unclaimed and at
/// least one in-bounds orthogonal neighbour is claimed. Out-of-bounds cells
/// are never boundary.
pub fn is_boundary(field: &Field, pos: Position) -> bool {
    if !field.in_bounds(pos) {
        return false;
    }
    if field.is_claimed(pos) {
        return true;
    }
    touches_claimed(field, pos)
}

/// Whether any in-bounds orthogonal neighbour of `pos` is claimed
pub fn touches_claimed(field: &Field, pos: Position) -> bool {
    Direction::ALL
        .iter()
        .any(|direction| field.is_claimed(direction.offset(pos, 1)))
}

//! Random-walk motion of the hostile entity
//!
//! Each tick the hostile tries to advance along its current direction. The
//! move is taken when the destination is in bounds, unclaimed and off the
//! live trail. Otherwise it stays put and picks a fresh random direction,
//! which it tries on the next tick. There is no look-ahead.

use log::trace;
use rand::seq::IndexedRandom;
use rand::{SeedableRng, rngs::StdRng};

use crate::spatial::raster::polyline_contains;
use crate::spatial::{Direction, Field, Position};

/// Result of one hostile motion step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostileMove {
    /// Advanced to the given cell
    Moved(Position),
    /// Blocked; stayed in place and drew a new direction
    Turned(Direction),
}

/// The roaming hostile entity
#[derive(Debug, Clone)]
pub struct Hostile {
    position: Position,
    direction: Direction,
    speed: i32,
    rng: StdRng,
}

impl Hostile {
    /// Create a hostile with a seeded direction generator
    pub fn new(position: Position, direction: Direction, speed: i32, seed: u64) -> Self {
        Self {
            position,
            direction,
            speed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Current cell
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Direction attempted on the next tick
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Cells advanced per successful step
    pub const fn speed(&self) -> i32 {
        self.speed
    }

    /// Whether the hostile may occupy `cell` given the live trail
    pub fn can_enter(field: &Field, trail: &[Position], cell: Position) -> bool {
        field.is_unclaimed(cell) && !polyline_contains(trail, cell)
    }

    /// Advance one tick against the field and the live trail polyline
    pub fn advance(&mut self, field: &Field, trail: &[Position]) -> HostileMove {
        let next = self.direction.offset(self.position, self.speed);
        if Self::can_enter(field, trail, next) {
            self.position = next;
            return HostileMove::Moved(next);
        }

        self.direction = Direction::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(self.direction);
        trace!(
            "Hostile blocked at {:?}, now heading {:?}",
            self.position, self.direction
        );
        HostileMove::Turned(self.direction)
    }
}

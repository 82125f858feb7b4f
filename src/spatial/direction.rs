//! Axis-aligned unit directions shared by the player and the hostile

use crate::spatial::Position;

/// One of the four orthogonal movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards decreasing `x`
    Left,
    /// Towards increasing `x`
    Right,
    /// Towards decreasing `y`
    Up,
    /// Towards increasing `y`
    Down,
}

impl Direction {
    /// All four directions in input precedence order
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Unit vector as `[dx, dy]`
    pub const fn delta(self) -> [i32; 2] {
        match self {
            Self::Left => [-1, 0],
            Self::Right => [1, 0],
            Self::Up => [0, -1],
            Self::Down => [0, 1],
        }
    }

    /// Position reached by moving `steps` cells from `from`
    ///
    /// Saturates at the `i32` range, which is always out of bounds.
    pub const fn offset(self, from: Position, steps: i32) -> Position {
        let [dx, dy] = self.delta();
        [
            from[0].saturating_add(dx.saturating_mul(steps)),
            from[1].saturating_add(dy.saturating_mul(steps)),
        ]
    }

    /// Whether the direction moves along the `y` axis
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// The direction pointing the other way
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

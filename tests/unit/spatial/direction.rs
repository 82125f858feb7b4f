//! Tests for direction vectors and offsets

#[cfg(test)]
mod tests {
    use qixfield::spatial::Direction;

    // Tests unit vectors point along the screen axes
    // Verified by flipping the sign of the vertical deltas
    #[test]
    fn test_deltas() {
        assert_eq!(Direction::Left.delta(), [-1, 0]);
        assert_eq!(Direction::Right.delta(), [1, 0]);
        assert_eq!(Direction::Up.delta(), [0, -1]);
        assert_eq!(Direction::Down.delta(), [0, 1]);
    }

    // Tests offsets scale by the step count
    // Verified by ignoring the step multiplier
    #[test]
    fn test_offset_with_steps() {
        assert_eq!(Direction::Right.offset([3, 4], 1), [4, 4]);
        assert_eq!(Direction::Up.offset([3, 4], 2), [3, 2]);
        assert_eq!(Direction::Left.offset([0, 0], 3), [-3, 0]);
    }

    // Tests huge step counts saturate rather than overflow
    // Verified by using unchecked arithmetic
    #[test]
    fn test_offset_saturates() {
        assert_eq!(Direction::Right.offset([5, 5], i32::MAX), [i32::MAX, 5]);
        assert_eq!(Direction::Up.offset([5, 5], i32::MAX), [5, 5 - i32::MAX]);
        assert_eq!(Direction::Left.offset([-5, 0], i32::MAX), [i32::MIN, 0]);
    }

    // Tests precedence order and axis classification
    // Verified by reordering the ALL constant
    #[test]
    fn test_all_order_and_axes() {
        assert_eq!(
            Direction::ALL,
            [
                Direction::Left,
                Direction::Right,
                Direction::Up,
                Direction::Down
            ]
        );
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Down.is_vertical());
        assert!(!Direction::Left.is_vertical());
    }

    // Tests opposite directions pair up
    // Verified by returning the same direction
    #[test]
    fn test_opposite() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
    }
}

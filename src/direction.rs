//! The four linear vectors a word may follow through the grid.
//!
//! Words are only placed "forward": left-to-right, top-to-bottom, or along
//! one of the two forward diagonals. There are no reversed placements, so a
//! word always reads naturally when traced from its start cell.

/// A placement vector, expressed as a unit step per letter.
///
/// The grid's coordinate system has `x` growing rightward and `y` growing
/// downward, so [`Direction::UpRight`] carries a negative `y` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Horizontal, left to right (→).
    Right,
    /// Vertical, top to bottom (↓).
    Down,
    /// Diagonal, down and to the right (↘).
    DownRight,
    /// Diagonal, up and to the right (↗).
    UpRight,
}

impl Direction {
    /// All four placement vectors, in declaration order. The engine shuffles
    /// a copy of this array per word so no direction is systematically
    /// preferred across puzzles.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::UpRight,
    ];

    /// The `(dx, dy)` step applied per letter.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::DownRight => (1, 1),
            Direction::UpRight => (1, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_contains_four_distinct_directions() {
        let unique: HashSet<Direction> = Direction::ALL.into_iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_deltas_are_unit_steps() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert!((dx, dy) != (0, 0));
        }
    }

    #[test]
    fn test_no_reverse_directions() {
        // Every direction must make rightward or downward progress;
        // x never decreases along a placed word.
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            assert!(dx >= 0, "{dir:?} steps leftward");
            assert!(dx == 1 || dy == 1, "{dir:?} makes no forward progress");
        }
    }

    #[test]
    fn test_up_right_steps_up() {
        assert_eq!(Direction::UpRight.delta(), (1, -1));
    }
}

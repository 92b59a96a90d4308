//! The eight straight and diagonal directions a word can run in.

/// A unit step over `{-1, 0, 1}²`, excluding `(0, 0)`.
///
/// Rows grow downwards and columns grow to the right, so [`Direction::South`]
/// moves to the next row and [`Direction::East`] to the next column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    East,
    /// Right to left along a row.
    West,
    /// Top to bottom along a column.
    South,
    /// Bottom to top along a column.
    North,
    /// Down and to the right.
    SouthEast,
    /// Up and to the left.
    NorthWest,
    /// Down and to the left.
    SouthWest,
    /// Up and to the right.
    NorthEast,
}

impl Direction {
    /// All eight directions, in the fixed order used for random draws.
    pub const ALL: [Self; 8] = [
        Self::East,
        Self::West,
        Self::South,
        Self::North,
        Self::SouthEast,
        Self::NorthWest,
        Self::SouthWest,
        Self::NorthEast,
    ];

    /// Creates the direction with the given row and column steps.
    ///
    /// Returns `None` for `(0, 0)` or any step outside `-1..=1`.
    #[must_use]
    pub fn from_steps(row_step: i8, col_step: i8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.row_step() == row_step && d.col_step() == col_step)
    }

    /// Row delta of one step.
    #[must_use]
    pub const fn row_step(self) -> i8 {
        match self {
            Self::East | Self::West => 0,
            Self::South | Self::SouthEast | Self::SouthWest => 1,
            Self::North | Self::NorthWest | Self::NorthEast => -1,
        }
    }

    /// Column delta of one step.
    #[must_use]
    pub const fn col_step(self) -> i8 {
        match self {
            Self::South | Self::North => 0,
            Self::East | Self::SouthEast | Self::NorthEast => 1,
            Self::West | Self::NorthWest | Self::SouthWest => -1,
        }
    }

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::West => Self::East,
            Self::South => Self::North,
            Self::North => Self::South,
            Self::SouthEast => Self::NorthWest,
            Self::NorthWest => Self::SouthEast,
            Self::SouthWest => Self::NorthEast,
            Self::NorthEast => Self::SouthWest,
        }
    }

    /// Returns the cell reached after `steps` steps from `(row, col)`.
    ///
    /// Returns `None` if the cell falls outside a `size`×`size` grid.
    #[must_use]
    pub fn advance(
        self,
        row: usize,
        col: usize,
        steps: usize,
        size: usize,
    ) -> Option<(usize, usize)> {
        let row = offset(row, self.row_step(), steps)?;
        let col = offset(col, self.col_step(), steps)?;
        (row < size && col < size).then_some((row, col))
    }
}

fn offset(base: usize, step: i8, steps: usize) -> Option<usize> {
    match step {
        0 => Some(base),
        1 => base.checked_add(steps),
        _ => base.checked_sub(steps),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_all_directions_are_distinct_unit_steps() {
        let steps: HashSet<_> = Direction::ALL
            .iter()
            .map(|d| (d.row_step(), d.col_step()))
            .collect();
        assert_eq!(steps.len(), 8);
        assert!(!steps.contains(&(0, 0)));
        for (row, col) in steps {
            assert!((-1..=1).contains(&row));
            assert!((-1..=1).contains(&col));
        }
    }

    #[test]
    fn test_from_steps() {
        assert_eq!(Direction::from_steps(0, 1), Some(Direction::East));
        assert_eq!(Direction::from_steps(-1, 1), Some(Direction::NorthEast));
        assert_eq!(Direction::from_steps(0, 0), None);
        assert_eq!(Direction::from_steps(2, 0), None);
    }

    #[test]
    fn test_reversed_negates_steps() {
        for d in Direction::ALL {
            let r = d.reversed();
            assert_eq!(r.row_step(), -d.row_step());
            assert_eq!(r.col_step(), -d.col_step());
            assert_eq!(r.reversed(), d);
        }
    }

    #[test]
    fn test_advance_stays_in_bounds() {
        assert_eq!(Direction::East.advance(0, 0, 2, 3), Some((0, 2)));
        assert_eq!(Direction::East.advance(0, 0, 3, 3), None);
        assert_eq!(Direction::NorthWest.advance(2, 2, 2, 3), Some((0, 0)));
        assert_eq!(Direction::NorthWest.advance(2, 1, 2, 3), None);
        assert_eq!(Direction::SouthWest.advance(0, 2, 2, 3), Some((2, 0)));
    }
}

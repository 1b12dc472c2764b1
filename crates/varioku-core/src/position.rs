//! Board coordinates and peer relations.

use std::fmt::{self, Display};

use crate::BoardSize;

/// A 0-indexed (row, column) coordinate on a board.
///
/// Positions convert to and from row-major cell indices for a given
/// [`BoardSize`]; cells themselves never store their coordinates, so a
/// position can only ever be derived from the slot a cell occupies.
///
/// # Examples
///
/// ```
/// use varioku_core::{BoardSize, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.index(BoardSize::Five), 13);
/// assert_eq!(Position::from_index(13, BoardSize::Five), pos);
///
/// // Peers share a row, a column, or (9x9 only) a box
/// assert!(pos.is_peer_of(Position::new(2, 0), BoardSize::Five));
/// assert!(pos.is_peer_of(Position::new(4, 3), BoardSize::Five));
/// assert!(!pos.is_peer_of(Position::new(4, 4), BoardSize::Five));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a row-major cell index into a position.
    #[must_use]
    pub const fn from_index(index: usize, size: BoardSize) -> Self {
        let n = size.dimension();
        Self {
            row: index / n,
            col: index % n,
        }
    }

    /// Returns the row-major cell index of this position.
    #[must_use]
    pub const fn index(self, size: BoardSize) -> usize {
        self.row * size.dimension() + self.col
    }

    /// Returns true if both coordinates lie on a board of the given size.
    #[must_use]
    pub const fn in_bounds(self, size: BoardSize) -> bool {
        self.row < size.dimension() && self.col < size.dimension()
    }

    /// Returns true if both positions fall in the same box sub-grid.
    ///
    /// Always false for sizes without boxes (5×5 and 7×7).
    #[must_use]
    pub const fn same_box(self, other: Self, size: BoardSize) -> bool {
        match size.box_dimension() {
            Some(b) => self.row / b == other.row / b && self.col / b == other.col / b,
            None => false,
        }
    }

    /// Returns true if `other` is a distinct cell sharing this position's
    /// row, column, or (9×9 only) box.
    #[must_use]
    pub const fn is_peer_of(self, other: Self, size: BoardSize) -> bool {
        if self.row == other.row && self.col == other.col {
            return false;
        }
        self.row == other.row || self.col == other.col || self.same_box(other, size)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

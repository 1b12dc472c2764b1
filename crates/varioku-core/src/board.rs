//! The player-facing board of cells.

use std::fmt::{self, Display};

use derive_more::{Display as DeriveDisplay, Error};

use crate::{BoardSize, Cell, Position};

/// Why a persisted cell sequence could not be restored into a board.
///
/// Any variant means the same thing to a caller: there is no resumable
/// state, discard it and generate a fresh puzzle. Restoring must never
/// crash on bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveDisplay, Error)]
pub enum BoardRestoreError {
    /// The sequence length does not match the board's cell count.
    #[display("expected {expected} cells, found {found}")]
    CellCountMismatch {
        /// Cells required by the board size.
        expected: usize,
        /// Cells actually present.
        found: usize,
    },
    /// A cell value lies outside the playable range.
    #[display("cell {index} holds {value}, outside 0..={max}")]
    ValueOutOfRange {
        /// Row-major index of the offending cell.
        index: usize,
        /// The out-of-range value.
        value: u8,
        /// Largest digit playable on the board.
        max: u8,
    },
    /// A given (fixed) cell has no value.
    #[display("fixed cell {index} is empty")]
    EmptyFixedCell {
        /// Row-major index of the offending cell.
        index: usize,
    },
}

/// A board of `size × size` cells in row-major order.
///
/// The board is created once per game session (by the generator, or by
/// restoring persisted cells), then mutated cell by cell as the player
/// fills it in, and replaced wholesale on a new game. Play-level rules
/// (refusing edits to fixed cells, conflict flagging, hints) live in the
/// session layer; the board itself only stores cells and answers
/// structural questions.
///
/// # Persistence
///
/// The persisted form of a board is its cell sequence; the size is stored
/// alongside it by the collaborator that owns the store.
///
/// ```
/// use varioku_core::{Board, BoardSize, Cell};
///
/// let mut board = Board::empty(BoardSize::Five);
/// *board.cell_mut(0).unwrap() = Cell::given(3);
///
/// let saved = serde_json::to_string(board.cells()).unwrap();
/// let cells: Vec<Cell> = serde_json::from_str(&saved).unwrap();
/// let restored = Board::from_saved(BoardSize::Five, cells).unwrap();
/// assert_eq!(restored, board);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board with every cell empty.
    #[must_use]
    pub fn empty(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::EMPTY; size.cell_count()],
        }
    }

    /// Creates a board from a full cell sequence.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len()` differs from the size's cell count. For
    /// untrusted input use [`from_saved`](Self::from_saved).
    #[must_use]
    pub fn with_cells(size: BoardSize, cells: Vec<Cell>) -> Self {
        assert_eq!(
            cells.len(),
            size.cell_count(),
            "a {size} board needs exactly {} cells",
            size.cell_count()
        );
        Self { size, cells }
    }

    /// Restores a board from persisted cells, validating them.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardRestoreError`] if the sequence has the wrong
    /// length, holds a value outside the board's digit range, or marks an
    /// empty cell as fixed. Callers should treat any error as "no
    /// resumable state" and fall back to generating a fresh puzzle.
    pub fn from_saved(size: BoardSize, cells: Vec<Cell>) -> Result<Self, BoardRestoreError> {
        if cells.len() != size.cell_count() {
            return Err(BoardRestoreError::CellCountMismatch {
                expected: size.cell_count(),
                found: cells.len(),
            });
        }
        let max = size.max_digit();
        for (index, cell) in cells.iter().enumerate() {
            if cell.value() > max {
                return Err(BoardRestoreError::ValueOutOfRange {
                    index,
                    value: cell.value(),
                    max,
                });
            }
            if cell.is_fixed() && cell.is_empty() {
                return Err(BoardRestoreError::EmptyFixedCell { index });
            }
        }
        Ok(Self { size, cells })
    }

    /// Returns the board's size.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at a row-major index, if it exists.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Returns a mutable reference to the cell at a row-major index.
    ///
    /// This does not enforce play rules; sessions guard fixed cells before
    /// reaching for it.
    #[must_use]
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Returns the position of a row-major index, if it is on the board.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Position> {
        (index < self.cells.len()).then(|| Position::from_index(index, self.size))
    }

    /// Returns the row-major index of a position, if it is on the board.
    #[must_use]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        pos.in_bounds(self.size).then(|| pos.index(self.size))
    }

    /// Returns the number of fixed (given) cells.
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_fixed()).count()
    }

    /// Returns true if the board is solved: every cell holds a digit and
    /// none is flagged as conflicting.
    ///
    /// # Examples
    ///
    /// ```
    /// use varioku_core::{Board, BoardSize};
    ///
    /// let mut board = Board::empty(BoardSize::Five);
    /// assert!(!board.is_solved());
    ///
    /// for index in 0..25 {
    ///     let digit = ((index + index / 5) % 5 + 1) as u8;
    ///     board.cell_mut(index).unwrap().set_value(digit);
    /// }
    /// assert!(board.is_solved());
    ///
    /// // A single flagged cell breaks recognition
    /// board.cell_mut(0).unwrap().set_error(true);
    /// assert!(!board.is_solved());
    /// ```
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| !cell.is_empty() && !cell.is_error())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size.dimension();
        for row in 0..n {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..n {
                if col > 0 {
                    write!(f, " ")?;
                }
                let cell = &self.cells[Position::new(row, col).index(self.size)];
                if cell.is_empty() {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", cell.value())?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: BoardSize, given: &[(usize, u8)]) -> Board {
        let mut board = Board::empty(size);
        for &(index, value) in given {
            *board.cell_mut(index).unwrap() = Cell::given(value);
        }
        board
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty(BoardSize::Seven);
        assert_eq!(board.cells().len(), 49);
        assert_eq!(board.fixed_count(), 0);
        assert!(!board.is_solved());
    }

    #[test]
    fn test_indexing() {
        let board = Board::empty(BoardSize::Five);
        assert!(board.cell(24).is_some());
        assert!(board.cell(25).is_none());

        assert_eq!(board.position(7), Some(Position::new(1, 2)));
        assert_eq!(board.position(25), None);

        assert_eq!(board.index_of(Position::new(1, 2)), Some(7));
        assert_eq!(board.index_of(Position::new(0, 5)), None);
    }

    #[test]
    #[should_panic(expected = "needs exactly 25 cells")]
    fn test_with_cells_checks_length() {
        let _ = Board::with_cells(BoardSize::Five, vec![Cell::EMPTY; 24]);
    }

    #[test]
    fn test_fixed_count() {
        let board = board_with(BoardSize::Five, &[(0, 1), (6, 2), (12, 3)]);
        assert_eq!(board.fixed_count(), 3);
    }

    #[test]
    fn test_win_detection() {
        let mut board = Board::empty(BoardSize::Five);
        for index in 0..25 {
            let digit = u8::try_from((index + index / 5) % 5 + 1).unwrap();
            board.cell_mut(index).unwrap().set_value(digit);
        }
        assert!(board.is_solved());

        // Any single empty cell prevents recognition
        let mut with_hole = board.clone();
        with_hole.cell_mut(13).unwrap().set_value(0);
        assert!(!with_hole.is_solved());

        // As does any single flagged cell
        let mut with_error = board;
        with_error.cell_mut(13).unwrap().set_error(true);
        assert!(!with_error.is_solved());
    }

    #[test]
    fn test_from_saved_round_trip() {
        let board = board_with(BoardSize::Five, &[(0, 5), (20, 1)]);
        let json = serde_json::to_string(board.cells()).unwrap();
        let cells: Vec<Cell> = serde_json::from_str(&json).unwrap();
        let restored = Board::from_saved(BoardSize::Five, cells).unwrap();
        assert_eq!(restored, board);
        assert_eq!(restored.fixed_count(), 2);
    }

    #[test]
    fn test_from_saved_rejects_wrong_length() {
        let result = Board::from_saved(BoardSize::Five, vec![Cell::EMPTY; 10]);
        assert_eq!(
            result.unwrap_err(),
            BoardRestoreError::CellCountMismatch {
                expected: 25,
                found: 10
            }
        );
    }

    #[test]
    fn test_from_saved_rejects_out_of_range_value() {
        let mut cells = vec![Cell::EMPTY; 25];
        cells[3].set_value(6);
        let result = Board::from_saved(BoardSize::Five, cells);
        assert_eq!(
            result.unwrap_err(),
            BoardRestoreError::ValueOutOfRange {
                index: 3,
                value: 6,
                max: 5
            }
        );
    }

    #[test]
    fn test_from_saved_rejects_empty_given() {
        let mut cells = vec![Cell::EMPTY; 25];
        cells[8] = Cell::given(2);
        cells[8].set_value(0);
        let result = Board::from_saved(BoardSize::Five, cells);
        assert_eq!(
            result.unwrap_err(),
            BoardRestoreError::EmptyFixedCell { index: 8 }
        );
    }

    #[test]
    fn test_malformed_persisted_json_is_an_error_not_a_crash() {
        for input in [
            "not json at all",
            r#"{"v":1}"#,
            r#"[{"v":1,"f":true}]"#,
            r#"[{"v":"x","f":true,"e":false}]"#,
        ] {
            assert!(serde_json::from_str::<Vec<Cell>>(input).is_err());
        }
    }

    #[test]
    fn test_display() {
        let board = board_with(BoardSize::Five, &[(0, 3), (24, 1)]);
        let rendered = board.to_string();
        assert!(rendered.starts_with("3 . . . ."));
        assert!(rendered.ends_with(". . . . 1"));
    }
}

//! The play session.

use log::trace;
use varioku_core::{Board, BoardRestoreError, BoardSize, Cell, Position};
use varioku_generator::GeneratedPuzzle;

use crate::EntryOutcome;

/// A single play session over a generated or resumed board.
///
/// The session owns the board exclusively and enforces the play rules: a
/// fixed cell is never modified or flagged, requests against a finished
/// board or an out-of-range index are ignored, and every accepted digit
/// entry is validated against its row, column, and (9×9 only) box peers.
///
/// # Example
///
/// ```
/// use varioku_core::{BoardSize, Difficulty};
/// use varioku_game::Game;
/// use varioku_generator::PuzzleGenerator;
///
/// let puzzle = PuzzleGenerator::new().generate_with_seed(BoardSize::Nine, Difficulty::Easy, 3);
/// let mut game = Game::new(puzzle);
///
/// let index = game
///     .board()
///     .cells()
///     .iter()
///     .position(|cell| cell.is_empty())
///     .expect("a carved board has empty cells");
///
/// let outcome = game.enter_digit(index, 5);
/// assert!(outcome.is_applied());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Starts a session on a freshly generated puzzle.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        Self {
            board: puzzle.board,
        }
    }

    /// Starts a session on an explicit board.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    /// Resumes a session from persisted cells.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardRestoreError`] when the cells do not form a valid
    /// board of the given size; callers discard the saved state and
    /// generate a fresh puzzle instead.
    pub fn resume(size: BoardSize, cells: Vec<Cell>) -> Result<Self, BoardRestoreError> {
        Board::from_saved(size, cells).map(|board| Self { board })
    }

    /// Returns the session's board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns true if every cell holds a digit and none is flagged.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Enters a digit into the cell at `index` and validates it.
    ///
    /// The digit is written first, then every other cell sharing the
    /// target's row, column, or (9×9 only) box is scanned. If any such
    /// peer holds the same digit, the target (and only the target) is
    /// flagged as erroneous; peers keep whatever flag they already carry,
    /// even when this entry resolves or creates their conflict. A peer's
    /// flag changes only when that cell is itself re-edited.
    ///
    /// Validation is idempotent: re-entering the same digit on an
    /// unchanged board reproduces the same flag and outcome.
    ///
    /// Ignored without touching the board: an out-of-range index, a digit
    /// outside `1..=N`, a fixed target cell, or a board that is already
    /// solved. Use [`clear_cell`](Self::clear_cell) to empty a cell.
    pub fn enter_digit(&mut self, index: usize, digit: u8) -> EntryOutcome {
        if digit == 0 || digit > self.board.size().max_digit() || !self.accepts_input(index) {
            return EntryOutcome::Ignored;
        }

        let conflict = self.conflicts_with_peer(index, digit);
        let cell = self.board.cell_mut(index).expect("index checked above");
        cell.set_value(digit);
        cell.set_error(conflict);
        trace!("entered {digit} at cell {index}, conflict={conflict}");
        EntryOutcome::Applied { conflict }
    }

    /// Empties the cell at `index` and clears its conflict flag.
    ///
    /// Pencil notes survive. Ignored under the same conditions as
    /// [`enter_digit`](Self::enter_digit).
    pub fn clear_cell(&mut self, index: usize) -> EntryOutcome {
        if !self.accepts_input(index) {
            return EntryOutcome::Ignored;
        }
        self.board
            .cell_mut(index)
            .expect("index checked above")
            .clear();
        EntryOutcome::Applied { conflict: false }
    }

    /// Toggles a pencil-mark note on the cell at `index`.
    ///
    /// Notes are a scratchpad only; validation never reads them. Ignored
    /// for cells that already hold a digit, in addition to the conditions
    /// of [`enter_digit`](Self::enter_digit).
    pub fn toggle_note(&mut self, index: usize, digit: u8) -> EntryOutcome {
        if digit == 0 || digit > self.board.size().max_digit() || !self.accepts_input(index) {
            return EntryOutcome::Ignored;
        }
        let cell = self.board.cell_mut(index).expect("index checked above");
        if !cell.is_empty() {
            return EntryOutcome::Ignored;
        }
        cell.toggle_note(digit);
        EntryOutcome::Applied { conflict: false }
    }

    /// Finds the smallest digit that could go into the cell at `index`.
    ///
    /// Digits are tried in ascending order; a digit is accepted when no
    /// peer holds it, not counting peers that are themselves flagged as
    /// erroneous, so hints stay available on boards that already contain
    /// mistakes. The target cell may hold a (wrong) digit itself.
    ///
    /// Returns `None`, leaving the board untouched, for an out-of-range
    /// index, a fixed cell, a solved board, or when no digit fits.
    #[must_use]
    pub fn hint(&self, index: usize) -> Option<u8> {
        if !self.accepts_input(index) {
            return None;
        }
        self.board
            .size()
            .digits()
            .find(|&digit| self.hint_fits(index, digit))
    }

    /// Fills the cell at `index` with [`hint`](Self::hint)'s digit.
    ///
    /// The cell's conflict flag is cleared along with the write. Returns
    /// the digit placed, or `None` (board untouched) when no hint exists.
    pub fn apply_hint(&mut self, index: usize) -> Option<u8> {
        let digit = self.hint(index)?;
        let cell = self.board.cell_mut(index).expect("hint checked the index");
        cell.set_value(digit);
        cell.set_error(false);
        trace!("hint placed {digit} at cell {index}");
        Some(digit)
    }

    // A request may touch the cell: the board is unfinished, the index is
    // on the board, and the cell is not a given.
    fn accepts_input(&self, index: usize) -> bool {
        !self.is_solved() && self.board.cell(index).is_some_and(|cell| !cell.is_fixed())
    }

    // Entry rule: any other peer holding the digit counts, flagged or not.
    fn conflicts_with_peer(&self, index: usize, digit: u8) -> bool {
        let size = self.board.size();
        let pos = Position::from_index(index, size);
        self.board.cells().iter().enumerate().any(|(i, peer)| {
            i != index
                && peer.value() == digit
                && Position::from_index(i, size).is_peer_of(pos, size)
        })
    }

    // Hint rule: like the entry rule, but peers already flagged as
    // erroneous are ignored.
    fn hint_fits(&self, index: usize, digit: u8) -> bool {
        let size = self.board.size();
        let pos = Position::from_index(index, size);
        !self.board.cells().iter().enumerate().any(|(i, peer)| {
            i != index
                && !peer.is_error()
                && peer.value() == digit
                && Position::from_index(i, size).is_peer_of(pos, size)
        })
    }
}

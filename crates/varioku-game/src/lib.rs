//! Play-session management for varioku puzzles.
//!
//! A [`Game`] owns a board for the duration of one session, from
//! generation (or resume) to a win or a replacement, and is the sole
//! gatekeeper for player edits:
//!
//! - **Digit entry** writes the digit, then scans the cell's row, column,
//!   and (9×9 only) box for duplicates, flagging the edited cell when one
//!   exists. Only the edited cell's flag is ever recomputed.
//! - **Hints** return the smallest digit no non-erroneous peer holds, so a
//!   hint is still available after the player has made mistakes.
//! - **Refused requests** (fixed cells, out-of-range indices, finished
//!   boards) are ordinary [`EntryOutcome::Ignored`] results, never errors.
//!
//! The session deliberately owns nothing else: timers, lives, streaks,
//! sounds, and storage are collaborator concerns that react to the
//! returned outcomes.
//!
//! # Examples
//!
//! ```
//! use varioku_core::{BoardSize, Difficulty};
//! use varioku_game::Game;
//! use varioku_generator::PuzzleGenerator;
//!
//! let puzzle = PuzzleGenerator::new().generate_with_seed(BoardSize::Five, Difficulty::Easy, 7);
//! let mut game = Game::new(puzzle);
//!
//! let index = game
//!     .board()
//!     .cells()
//!     .iter()
//!     .position(|cell| cell.is_empty())
//!     .expect("a carved board has empty cells");
//!
//! if let Some(digit) = game.hint(index) {
//!     let outcome = game.enter_digit(index, digit);
//!     assert!(outcome.is_applied());
//! }
//! ```

mod game;
mod outcome;

pub use self::{game::Game, outcome::EntryOutcome};

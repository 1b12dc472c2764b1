//! Puzzle generation for varioku boards.
//!
//! Generation is a two-step pipeline: a randomized backtracking fill
//! produces a complete solution grid, then carving keeps a difficulty-
//! dependent number of cells as fixed givens and empties the rest. The
//! given-count thresholds come from a [`GivensTable`] injected into the
//! generator, not from constants in the carving code.
//!
//! Every puzzle records the `u64` seed that produced it, so any generated
//! board can be reproduced exactly: in tests, in bug reports, or for a
//! daily-puzzle scheme.
//!
//! # Examples
//!
//! ```
//! use varioku_core::{BoardSize, Difficulty};
//! use varioku_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate_with_seed(BoardSize::Nine, Difficulty::Medium, 42);
//!
//! assert_eq!(puzzle.board.fixed_count(), 33);
//! assert!(puzzle.solution.is_valid_solution());
//! assert_eq!(puzzle.seed, 42);
//!
//! // The same seed always reproduces the same puzzle
//! let again = generator.generate_with_seed(BoardSize::Nine, Difficulty::Medium, 42);
//! assert_eq!(again.board, puzzle.board);
//! ```

use log::debug;
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use varioku_core::{Board, BoardSize, Difficulty, GivensTable};

mod carve;
mod fill;

pub use varioku_core::SolutionGrid;

/// A generated puzzle: the carved board, its solution, and the seed that
/// produced both.
///
/// The board's fixed cells agree with the solution and every other cell is
/// empty with no error flag; it is ready to hand to a play session. The
/// solution is the full grid the board was carved from, one valid
/// completion but not necessarily the only one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The carved board with its givens fixed.
    pub board: Board,
    /// The complete grid the board was carved from.
    pub solution: SolutionGrid,
    /// Seed that reproduces this puzzle via
    /// [`PuzzleGenerator::generate_with_seed`].
    pub seed: u64,
}

/// Generates puzzles for a configured [`GivensTable`].
///
/// The generator is stateless between calls; randomness comes from a
/// per-call PRNG seeded either from entropy ([`generate`](Self::generate))
/// or from an explicit seed
/// ([`generate_with_seed`](Self::generate_with_seed)).
///
/// # Examples
///
/// ```
/// use varioku_core::{BoardSize, Difficulty, GivensTable};
/// use varioku_generator::PuzzleGenerator;
///
/// // A deployment with its own thresholds
/// let generator = PuzzleGenerator::with_table(GivensTable::flat([12, 24, 35]));
/// let puzzle = generator.generate_with_seed(BoardSize::Five, Difficulty::Hard, 1);
/// assert_eq!(puzzle.board.fixed_count(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleGenerator {
    givens: GivensTable,
}

impl PuzzleGenerator {
    /// Creates a generator with the canonical givens table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_table(GivensTable::default())
    }

    /// Creates a generator with an explicit givens table.
    #[must_use]
    pub const fn with_table(givens: GivensTable) -> Self {
        Self { givens }
    }

    /// Returns the configured givens table.
    #[must_use]
    pub const fn givens_table(&self) -> &GivensTable {
        &self.givens
    }

    /// Generates a puzzle from a fresh entropy-drawn seed.
    #[must_use]
    pub fn generate(&self, size: BoardSize, difficulty: Difficulty) -> GeneratedPuzzle {
        let seed = rand::rng().random();
        self.generate_with_seed(size, difficulty, seed)
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same (size, difficulty, seed, table) always yields the same
    /// board and solution.
    #[must_use]
    pub fn generate_with_seed(
        &self,
        size: BoardSize,
        difficulty: Difficulty,
        seed: u64,
    ) -> GeneratedPuzzle {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let solution = fill::filled_grid(size, &mut rng);
        let target = self.givens.target(size, difficulty);
        let board = carve::carve(&solution, target, &mut rng);
        debug!(
            "generated {size} {difficulty} puzzle: seed={seed}, givens={}",
            board.fixed_count()
        );
        GeneratedPuzzle {
            board,
            solution,
            seed,
        }
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

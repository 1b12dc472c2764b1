//! Difficulty tiers and the given-count configuration table.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::BoardSize;

/// Puzzle difficulty tier.
///
/// Together with the board size, the tier selects how many solved cells are
/// kept as fixed givens when a puzzle is carved (see [`GivensTable`]). The
/// tier itself carries no other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Most givens kept.
    Easy,
    /// The middle tier.
    Medium,
    /// Fewest givens kept.
    Hard,
}

impl Difficulty {
    /// Array containing all tiers, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    const fn index(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(label)
    }
}

/// Target number of given (fixed) cells per board size and difficulty.
///
/// The table is configuration handed to the generator, not a constant buried
/// in the carving code: the thresholds changed release over release, and
/// deployments tune them independently. [`GivensTable::default`] is the
/// canonical table; [`GivensTable::flat`] builds the simplified variant that
/// keeps one count per size regardless of tier.
///
/// Targets larger than a board's cell count are clamped when applied, so a
/// misconfigured table degrades to a fully revealed board rather than
/// failing.
///
/// # Examples
///
/// ```
/// use varioku_core::{BoardSize, Difficulty, GivensTable};
///
/// let table = GivensTable::default();
/// assert_eq!(table.target(BoardSize::Nine, Difficulty::Easy), 42);
/// assert_eq!(table.target(BoardSize::Five, Difficulty::Hard), 8);
///
/// // A deployment that ignores difficulty entirely
/// let flat = GivensTable::flat([12, 24, 35]);
/// assert_eq!(flat.target(BoardSize::Seven, Difficulty::Easy), 24);
/// assert_eq!(flat.target(BoardSize::Seven, Difficulty::Hard), 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GivensTable {
    // targets[size][difficulty], sizes smallest first, tiers easiest first
    targets: [[usize; 3]; 3],
}

impl GivensTable {
    /// Creates a table from explicit targets.
    ///
    /// `targets` is indexed `[size][difficulty]` with sizes ordered as in
    /// [`BoardSize::ALL`] and tiers as in [`Difficulty::ALL`].
    #[must_use]
    pub const fn new(targets: [[usize; 3]; 3]) -> Self {
        Self { targets }
    }

    /// Creates a table that keeps the same count for every tier of a size.
    ///
    /// `per_size` is ordered as in [`BoardSize::ALL`].
    #[must_use]
    pub const fn flat(per_size: [usize; 3]) -> Self {
        let mut targets = [[0; 3]; 3];
        let mut i = 0;
        while i < 3 {
            targets[i] = [per_size[i]; 3];
            i += 1;
        }
        Self { targets }
    }

    /// Returns the configured given-cell target for a size and tier.
    #[must_use]
    pub const fn target(&self, size: BoardSize, difficulty: Difficulty) -> usize {
        let size_index = match size {
            BoardSize::Five => 0,
            BoardSize::Seven => 1,
            BoardSize::Nine => 2,
        };
        self.targets[size_index][difficulty.index()]
    }
}

impl Default for GivensTable {
    /// The canonical table carried by current releases.
    fn default() -> Self {
        Self::new([[14, 11, 8], [28, 22, 16], [42, 33, 25]])
    }
}

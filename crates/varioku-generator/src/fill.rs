//! Randomized backtracking fill.

use rand::{Rng, seq::SliceRandom};
use varioku_core::{BoardSize, Position, SolutionGrid};

/// Produces a fully populated grid satisfying the row/column(/box) rules.
///
/// Cells are visited in row-major order; at each cell the playable digits
/// are shuffled before trial, which is the sole source of variety between
/// puzzles. The first complete assignment wins: once the last cell is
/// placed, no alternatives are explored, so the result is the first valid
/// grid along the shuffled candidate order, not a uniform sample.
///
/// # Panics
///
/// Panics if backtracking exhausts every candidate at the root. A filled
/// grid exists for every supported size, so this indicates a broken rule
/// implementation rather than a condition callers could handle.
pub(crate) fn filled_grid<R: Rng>(size: BoardSize, rng: &mut R) -> SolutionGrid {
    let mut grid = SolutionGrid::empty(size);
    let filled = fill_from(&mut grid, 0, rng);
    assert!(
        filled,
        "backtracking exhausted on a {size} board; a solution always exists"
    );
    grid
}

fn fill_from<R: Rng>(grid: &mut SolutionGrid, index: usize, rng: &mut R) -> bool {
    let size = grid.size();
    if index == size.cell_count() {
        return true;
    }
    let pos = Position::from_index(index, size);
    let mut candidates: Vec<u8> = size.digits().collect();
    candidates.shuffle(rng);
    for digit in candidates {
        if grid.is_safe(pos, digit) {
            grid.set(pos, digit);
            if fill_from(grid, index + 1, rng) {
                return true;
            }
            grid.clear(pos);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn test_fills_every_size() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        for size in BoardSize::ALL {
            let grid = filled_grid(size, &mut rng);
            assert!(grid.is_complete());
            assert!(grid.is_valid_solution());
        }
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = filled_grid(BoardSize::Nine, &mut Pcg64Mcg::seed_from_u64(7));
        let b = filled_grid(BoardSize::Nine, &mut Pcg64Mcg::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let a = filled_grid(BoardSize::Nine, &mut Pcg64Mcg::seed_from_u64(1));
        let b = filled_grid(BoardSize::Nine, &mut Pcg64Mcg::seed_from_u64(2));
        assert_ne!(a, b);
    }
}

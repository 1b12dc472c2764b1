//! Given-cell selection.

use log::debug;
use rand::{Rng, seq::SliceRandom};
use varioku_core::{Board, Cell, Position, SolutionGrid};

/// Keeps `target` randomly chosen cells of the solution as fixed givens and
/// empties the rest.
///
/// Every cell starts marked as a given; indices are then visited in random
/// order and unmarked until the target count remains. Targets larger than
/// the board are clamped, so the worst a misconfigured table produces is a
/// fully revealed board. The returned board carries no error flags.
///
/// Nothing checks that the surviving givens admit exactly one completion;
/// a carved puzzle may have several solutions.
pub(crate) fn carve<R: Rng>(solution: &SolutionGrid, target: usize, rng: &mut R) -> Board {
    let size = solution.size();
    let count = size.cell_count();
    let target = target.min(count);

    let mut keep = vec![true; count];
    let mut order: Vec<usize> = (0..count).collect();
    order.shuffle(rng);

    let mut remaining = count;
    for index in order {
        if remaining <= target {
            break;
        }
        keep[index] = false;
        remaining -= 1;
    }
    debug!("kept {remaining} of {count} cells as givens");

    let cells = keep
        .iter()
        .enumerate()
        .map(|(index, &kept)| {
            if kept {
                Cell::given(solution.get(Position::from_index(index, size)))
            } else {
                Cell::EMPTY
            }
        })
        .collect();
    Board::with_cells(size, cells)
}

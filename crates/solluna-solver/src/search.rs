//! Exhaustive completion search.
//!
//! The rule predicates in `solluna_core` only screen; this module answers
//! the exact question by backtracking over every completion of a partial
//! board. A limit caps the count so uniqueness checks stay cheap: asking
//! for at most two completions is enough to distinguish none, one, and
//! many.

use solluna_core::{Line, Position, Symbol, SymbolGrid, rules};

/// Counts the completions of a partial board, stopping at `limit`.
///
/// Empty cells are filled depth-first in row-major order, pruning any
/// placement that makes its row or column infeasible. Returns at most
/// `limit`; a board whose givens already break a rule has zero completions.
///
/// # Examples
///
/// ```
/// use solluna_core::SymbolGrid;
/// use solluna_solver::search;
///
/// let puzzle: SymbolGrid = "SSMSM. MMSMS. SSMSM. MMSMS. SSMSM. MMSMS.".parse()?;
/// assert_eq!(search::count_completions(&puzzle, 2), 1);
/// # Ok::<(), solluna_core::ParseGridError>(())
/// ```
#[must_use]
pub fn count_completions(grid: &SymbolGrid, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    if rules::check_feasible(grid).is_err() {
        return 0;
    }
    let mut work = grid.clone();
    let empties: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|&pos| work[pos].is_none())
        .collect();
    let mut found = 0;
    count_rec(&mut work, &empties, 0, limit, &mut found);
    found
}

/// Returns `true` if the board has exactly one completion.
///
/// This is the exact check behind the carver's cheap
/// [`rules::has_unique_solution`] screen.
#[must_use]
pub fn has_unique_completion(grid: &SymbolGrid) -> bool {
    count_completions(grid, 2) == 1
}

fn count_rec(
    grid: &mut SymbolGrid,
    empties: &[Position],
    depth: usize,
    limit: usize,
    found: &mut usize,
) {
    let Some(&pos) = empties.get(depth) else {
        if rules::is_fully_valid(grid) {
            *found += 1;
        }
        return;
    };
    for symbol in Symbol::ALL {
        grid.set(pos, Some(symbol));
        if placement_feasible(grid, pos) {
            count_rec(grid, empties, depth + 1, limit, found);
        }
        grid.set(pos, None);
        if *found >= limit {
            return;
        }
    }
}

fn placement_feasible(grid: &SymbolGrid, pos: Position) -> bool {
    !rules::line_violates(grid, Line::Row { y: pos.y() })
        && !rules::line_violates(grid, Line::Column { x: pos.x() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> SymbolGrid {
        s.parse().unwrap()
    }

    const SOLVED: &str = "SSMSMM MMSMSS SSMSMM MMSMSS SSMSMM MMSMSS";

    #[test]
    fn complete_valid_board_has_one_completion() {
        assert_eq!(count_completions(&grid(SOLVED), 2), 1);
        assert!(has_unique_completion(&grid(SOLVED)));
    }

    #[test]
    fn forced_puzzle_is_unique() {
        let puzzle = grid("SSMSM. MMSMS. SSMSM. MMSMS. SSMSM. MMSMS.");
        assert!(has_unique_completion(&puzzle));
    }

    #[test]
    fn empty_board_has_many_completions() {
        let board = SymbolGrid::new();
        assert_eq!(count_completions(&board, 2), 2);
        assert!(!has_unique_completion(&board));
        assert_eq!(count_completions(&board, 10), 10);
    }

    #[test]
    fn infeasible_board_has_no_completions() {
        let board = grid("SSS... ...... ...... ...... ...... ......");
        assert_eq!(count_completions(&board, 2), 0);
        assert!(!has_unique_completion(&board));
    }

    #[test]
    fn limit_zero_counts_nothing() {
        assert_eq!(count_completions(&grid(SOLVED), 0), 0);
    }

    #[test]
    fn two_open_cells_in_one_line_can_still_be_unique() {
        // Removing two cells from the same row leaves the row at quota for
        // suns, forcing both; the puzzle stays unique.
        let puzzle = grid("SSMS.. MMSMSS SSMSMM MMSMSS SSMSMM MMSMSS");
        assert!(has_unique_completion(&puzzle));
    }

    #[test]
    fn swap_rectangle_yields_a_second_completion() {
        // Clearing the corners of a rectangle that holds S/M on one
        // diagonal and M/S on the other leaves both assignments legal.
        let puzzle = grid(
            ".SMS.M
             .MSM.S
             SSMSMM
             MMSMSS
             SSMSMM
             MMSMSS",
        );
        assert!(count_completions(&puzzle, 5) >= 2);
        assert!(!has_unique_completion(&puzzle));
    }
}

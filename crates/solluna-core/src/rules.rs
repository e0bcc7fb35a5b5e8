//! Stateless rule predicates.
//!
//! Two structural rules govern every board:
//!
//! * **Balance**: each row and column of a complete board holds exactly
//!   three suns and three moons.
//! * **No-triple**: no three consecutive cells in a row or column hold the
//!   same symbol.
//!
//! Everything here works from the board alone. [`line_violation`] and
//! [`check_feasible`] detect lines that can no longer be completed legally,
//! [`is_fully_valid`] accepts finished boards, and [`has_unique_solution`] /
//! [`has_available_deduction`] are the cheap screens the carver runs on
//! every candidate removal.

use crate::{Line, Position, SYMBOL_QUOTA, Symbol, SymbolGrid};

/// A way in which a line breaks the placement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ViolationKind {
    /// The line holds more than three of the symbol.
    #[display("has more than three {symbol}s")]
    TooMany {
        /// The over-represented symbol.
        symbol: Symbol,
    },
    /// The symbol can no longer reach three in the line.
    #[display("cannot fit three {symbol}s")]
    Unreachable {
        /// The symbol that can no longer reach its quota.
        symbol: Symbol,
    },
    /// Three consecutive cells hold the symbol.
    #[display("has three consecutive {symbol}s")]
    Triple {
        /// The repeated symbol.
        symbol: Symbol,
    },
}

/// A rule violation located on a specific line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{line} {kind}")]
pub struct RuleViolation {
    /// The violating line.
    pub line: Line,
    /// What is wrong with it.
    pub kind: ViolationKind,
}

/// Returns `true` if the completed board satisfies both rules.
///
/// Every row and column must hold exactly three suns and three moons with
/// no three-in-a-row run. A board with empty cells never passes, since an
/// incomplete line cannot have both counts at quota.
///
/// # Examples
///
/// ```
/// use solluna_core::{SymbolGrid, rules};
///
/// let grid: SymbolGrid = "SSMSMM MMSMSS SSMSMM MMSMSS SSMSMM MMSMSS".parse()?;
/// assert!(rules::is_fully_valid(&grid));
/// # Ok::<(), solluna_core::ParseGridError>(())
/// ```
#[must_use]
pub fn is_fully_valid(grid: &SymbolGrid) -> bool {
    Line::ALL.iter().all(|&line| {
        grid.count_in_line(line, Symbol::Sun) == SYMBOL_QUOTA
            && grid.count_in_line(line, Symbol::Moon) == SYMBOL_QUOTA
            && triple_in_line(grid, line).is_none()
    })
}

/// Returns the violation on a single line, if any.
///
/// Works on partial boards: a line violates as soon as it can no longer be
/// completed legally, not only when it is full. Checks, in order, symbol
/// counts over quota, counts that cannot reach quota even if the symbol
/// takes every empty cell, and completed three-in-a-row runs.
#[must_use]
pub fn line_violation(grid: &SymbolGrid, line: Line) -> Option<RuleViolation> {
    let empties = grid.empty_in_line(line);
    for symbol in Symbol::ALL {
        if grid.count_in_line(line, symbol) > SYMBOL_QUOTA {
            return Some(RuleViolation {
                line,
                kind: ViolationKind::TooMany { symbol },
            });
        }
    }
    for symbol in Symbol::ALL {
        if grid.count_in_line(line, symbol) + empties < SYMBOL_QUOTA {
            return Some(RuleViolation {
                line,
                kind: ViolationKind::Unreachable { symbol },
            });
        }
    }
    if let Some(symbol) = triple_in_line(grid, line) {
        return Some(RuleViolation {
            line,
            kind: ViolationKind::Triple { symbol },
        });
    }
    None
}

/// Returns `true` if the line can no longer be completed legally.
#[must_use]
pub fn line_violates(grid: &SymbolGrid, line: Line) -> bool {
    line_violation(grid, line).is_some()
}

/// Checks every line of the board for feasibility.
///
/// # Errors
///
/// Returns the first violation in [`Line::ALL`] order (rows top to bottom,
/// then columns left to right).
pub fn check_feasible(grid: &SymbolGrid) -> Result<(), RuleViolation> {
    for line in Line::ALL {
        if let Some(violation) = line_violation(grid, line) {
            return Err(violation);
        }
    }
    Ok(())
}

/// Fast necessary-condition screen for solution uniqueness.
///
/// Every line already holding three of one symbol has its remaining empty
/// cells counted as forced. The forced counts are summed per line, so a
/// cell forced by both its row and its column counts twice, and the board
/// passes when the total reaches the number of empty cells.
///
/// This is an approximation, not a solver: it can accept boards with
/// several completions and reject boards that are in fact unique. The exact
/// answer lives in the solver crate's completion search; the carver uses
/// this as a cheap first gate.
#[must_use]
pub fn has_unique_solution(grid: &SymbolGrid) -> bool {
    let empty_count = grid.empty_count();
    if empty_count == 0 {
        return true;
    }
    let mut forced = 0;
    for line in Line::ALL {
        let empties = grid.empty_in_line(line);
        if empties == 0 {
            continue;
        }
        if Symbol::ALL
            .iter()
            .any(|&symbol| grid.count_in_line(line, symbol) == SYMBOL_QUOTA)
        {
            forced += empties;
        }
    }
    forced >= empty_count
}

/// Returns `true` if at least one empty cell is logically forced.
///
/// A cell counts as forced when its row or column already holds three of
/// one symbol, or when it completes a three-cell window whose other two
/// cells share a symbol. The carver requires this after every removal so a
/// puzzle can never go hint-dead.
#[must_use]
pub fn has_available_deduction(grid: &SymbolGrid) -> bool {
    Line::ALL.iter().any(|&line| {
        let quota_reached = Symbol::ALL
            .iter()
            .any(|&symbol| grid.count_in_line(line, symbol) == SYMBOL_QUOTA);
        (quota_reached && grid.empty_in_line(line) > 0) || forced_window(grid, line).is_some()
    })
}

/// Finds a three-cell window of `line` with one empty cell and two cells
/// sharing a symbol. Returns the empty position and the shared symbol.
pub(crate) fn forced_window(grid: &SymbolGrid, line: Line) -> Option<(Position, Symbol)> {
    let cells = line.cells();
    for window in cells.windows(3) {
        match (grid[window[0]], grid[window[1]], grid[window[2]]) {
            (None, Some(a), Some(b)) if a == b => return Some((window[0], a)),
            (Some(a), None, Some(b)) if a == b => return Some((window[1], a)),
            (Some(a), Some(b), None) if a == b => return Some((window[2], a)),
            _ => {}
        }
    }
    None
}

fn triple_in_line(grid: &SymbolGrid, line: Line) -> Option<Symbol> {
    let cells = line.cells();
    for window in cells.windows(3) {
        if let (Some(a), Some(b), Some(c)) = (grid[window[0]], grid[window[1]], grid[window[2]])
            && a == b
            && b == c
        {
            return Some(a);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> SymbolGrid {
        s.parse().unwrap()
    }

    const SOLVED: &str = "SSMSMM MMSMSS SSMSMM MMSMSS SSMSMM MMSMSS";

    #[test]
    fn complete_valid_board_passes() {
        assert!(is_fully_valid(&grid(SOLVED)));
        assert!(check_feasible(&grid(SOLVED)).is_ok());
    }

    #[test]
    fn incomplete_board_is_not_fully_valid() {
        let g = grid("SSMSM. MMSMSS SSMSMM MMSMSS SSMSMM MMSMSS");
        assert!(!is_fully_valid(&g));
        assert!(check_feasible(&g).is_ok());
    }

    #[test]
    fn balanced_partial_row_stays_feasible() {
        // Three suns and two moons with one empty cell: still completable.
        let g = grid("SMSMS. ...... ...... ...... ...... ......");
        assert!(!line_violates(&g, Line::Row { y: 0 }));
    }

    #[test]
    fn fourth_sun_in_a_row_violates() {
        let g = grid("SMSMSS ...... ...... ...... ...... ......");
        assert_eq!(
            line_violation(&g, Line::Row { y: 0 }),
            Some(RuleViolation {
                line: Line::Row { y: 0 },
                kind: ViolationKind::TooMany {
                    symbol: Symbol::Sun
                },
            })
        );
    }

    #[test]
    fn overflow_violates_before_the_line_fills() {
        // Four moons with one empty cell: reported as soon as it happens.
        let g = grid("MMSMM. ...... ...... ...... ...... ......");
        let violation = line_violation(&g, Line::Row { y: 0 }).unwrap();
        assert_eq!(
            violation.kind,
            ViolationKind::TooMany {
                symbol: Symbol::Moon
            }
        );

        // Exactly at quota is fine.
        let g = grid("SS.S.. ...S.. ...... ...... ...... ......");
        assert!(check_feasible(&g).is_ok());
    }

    #[test]
    fn overflow_wins_over_unreachable_on_six_cell_lines() {
        // On a six-cell line a symbol that cannot reach quota always means
        // the opposite symbol is over quota, and overflow is what gets
        // reported. Moons at 1 with 1 empty cannot reach 3; suns are at 4.
        let g = grid("S..... S..... M..... S..... ...... S.....");
        let violation = line_violation(&g, Line::Column { x: 0 }).unwrap();
        assert_eq!(
            violation.kind,
            ViolationKind::TooMany {
                symbol: Symbol::Sun
            }
        );
    }

    #[test]
    fn triple_violates_in_rows_and_columns() {
        let g = grid("..SSS. ...... ...... ...... ...... ......");
        assert_eq!(
            line_violation(&g, Line::Row { y: 0 }).unwrap().kind,
            ViolationKind::Triple {
                symbol: Symbol::Sun
            }
        );

        let g = grid("...... M..... M..... M..... ...... ......");
        assert_eq!(
            line_violation(&g, Line::Column { x: 0 }).unwrap().kind,
            ViolationKind::Triple {
                symbol: Symbol::Moon
            }
        );
    }

    #[test]
    fn violation_messages_are_line_scoped() {
        let g = grid("..SSS. ...... ...... ...... ...... ......");
        let violation = check_feasible(&g).unwrap_err();
        assert_eq!(violation.to_string(), "row 1 has three consecutive suns");
    }

    #[test]
    fn uniqueness_screen_accepts_quota_forced_boards() {
        // Every row of the solution keeps three suns; all empties forced.
        let g = grid("SS.S.. MMSMSS SSMSMM MMSMSS SSMSMM MMSMSS");
        assert!(has_unique_solution(&g));
    }

    #[test]
    fn uniqueness_screen_rejects_open_boards() {
        let g = grid("S..... ...... ...... ...... ...... ......");
        assert!(!has_unique_solution(&g));
        assert!(has_unique_solution(&grid(SOLVED)));
    }

    #[test]
    fn deduction_from_quota_line() {
        // Row 1 already holds three suns; its empties are forced to moon.
        let g = grid("SS.S.. ...... ...... ...... ...... ......");
        assert!(has_available_deduction(&g));
    }

    #[test]
    fn deduction_from_flanked_window() {
        let g = grid("S.S... ...... ...... ...... ...... ......");
        assert!(has_available_deduction(&g));
        assert_eq!(
            forced_window(&g, Line::Row { y: 0 }),
            Some((Position::new(1, 0), Symbol::Sun))
        );
    }

    #[test]
    fn deduction_from_adjacent_pair() {
        let g = grid("SS.MM. ...... ...... ...... ...... ......");
        assert!(has_available_deduction(&g));
        assert_eq!(
            forced_window(&g, Line::Row { y: 0 }),
            Some((Position::new(2, 0), Symbol::Sun))
        );
    }

    #[test]
    fn same_symbols_two_apart_do_not_force() {
        // Suns at distance two around an empty cell do not complete any
        // three-cell window, so nothing is forced.
        let g = grid("S...S. ...... ...... ...... ...... ......");
        assert_eq!(forced_window(&g, Line::Row { y: 0 }), None);
        assert!(!has_available_deduction(&g));
    }

    #[test]
    fn no_deduction_on_a_sparse_board() {
        let g = grid("S....M ...... ...... ...... ...... ......");
        assert!(!has_available_deduction(&g));
        assert!(!has_available_deduction(&SymbolGrid::new()));
    }
}

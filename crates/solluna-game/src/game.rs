use std::{
    mem,
    time::{Duration, Instant},
};

use solluna_core::{CELL_COUNT, Line, Position, PositionSet, Symbol, SymbolGrid, rules};
use solluna_generator::GeneratedLevel;
use solluna_solver::{Hint, SolverError, find_hint};

use crate::{
    Advisory, CellState, GameError, GameStatus, Severity, cooldown::HintCooldown, star_rating,
};

/// A Sun & Moon play session.
///
/// Tracks the board as the player sees it, with clue cells locked and every
/// other cell editable. Moves are permissive: a placement that breaks a
/// rule is applied, flagged, and reported, never blocked. The session keeps
/// an undo history, move and hint counters, a hint cooldown, and a queue of
/// [`Advisory`] messages for the caller to drain.
///
/// # Example
///
/// ```
/// use solluna_core::Difficulty;
/// use solluna_game::{Game, GameStatus};
/// use solluna_generator::LevelGenerator;
/// use solluna_solver::DeductionSolver;
///
/// let solver = DeductionSolver::with_all_techniques();
/// let generator = LevelGenerator::new(&solver);
/// let game = Game::new(generator.generate(Difficulty::Easy));
/// assert_eq!(game.status(), GameStatus::Idle);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; CELL_COUNT],
    puzzle: SymbolGrid,
    solution: SymbolGrid,
    status: GameStatus,
    undo_stack: Vec<Move>,
    move_count: usize,
    hints_used: usize,
    invalid: PositionSet,
    hint_cell: Option<Position>,
    cooldown: HintCooldown,
    advisories: Vec<Advisory>,
}

/// Undo record for one applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Move {
    position: Position,
    previous: Option<Symbol>,
}

impl Game {
    /// Creates a session from a generated level.
    ///
    /// Puzzle clues become [`CellState::Given`]; every other cell starts
    /// empty and the session starts [`GameStatus::Idle`].
    ///
    /// # Example
    ///
    /// ```
    /// use solluna_core::Difficulty;
    /// use solluna_game::Game;
    /// use solluna_generator::LevelGenerator;
    /// use solluna_solver::DeductionSolver;
    ///
    /// let solver = DeductionSolver::with_all_techniques();
    /// let generator = LevelGenerator::new(&solver);
    /// let game = Game::new(generator.generate(Difficulty::Easy));
    /// ```
    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(level: GeneratedLevel) -> Self {
        let GeneratedLevel {
            puzzle,
            solution,
            seed: _,
            difficulty: _,
            method: _,
        } = level;
        Self::build(puzzle, solution)
    }

    /// Restores a session from persisted parts.
    ///
    /// Cells with symbols in `puzzle` become clues; symbols in `board` on
    /// non-clue cells are applied as player input. The restored session has
    /// an empty undo history and zeroed counters, and is `InProgress` when
    /// `board` carries any player input, `Idle` otherwise. A full board is
    /// not evaluated at restore time; the next applied move is.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IncompatibleParts`] when `solution` is not a
    /// complete valid board, when a clue contradicts `solution`, or when
    /// `board` disagrees with a clue.
    pub fn from_parts(
        puzzle: &SymbolGrid,
        solution: &SymbolGrid,
        board: &SymbolGrid,
    ) -> Result<Self, GameError> {
        if !solution.is_complete() || !rules::is_fully_valid(solution) {
            return Err(GameError::IncompatibleParts {
                reason: "solution is not a complete valid board",
            });
        }
        for pos in Position::ALL {
            if let Some(clue) = puzzle[pos] {
                if solution[pos] != Some(clue) {
                    return Err(GameError::IncompatibleParts {
                        reason: "puzzle clue contradicts the solution",
                    });
                }
                if board[pos] != Some(clue) {
                    return Err(GameError::IncompatibleParts {
                        reason: "board disagrees with a puzzle clue",
                    });
                }
            }
        }

        let mut this = Self::build(puzzle.clone(), solution.clone());
        let mut has_progress = false;
        for pos in Position::ALL {
            if puzzle[pos].is_none()
                && let Some(symbol) = board[pos]
            {
                this.cells[pos.index()] = CellState::Filled(symbol);
                has_progress = true;
            }
        }
        if has_progress {
            this.status = GameStatus::InProgress;
        }
        this.invalid = compute_invalid(&this.board());
        Ok(this)
    }

    fn build(puzzle: SymbolGrid, solution: SymbolGrid) -> Self {
        let mut cells = [CellState::Empty; CELL_COUNT];
        for pos in Position::ALL {
            if let Some(symbol) = puzzle[pos] {
                cells[pos.index()] = CellState::Given(symbol);
            }
        }
        Self {
            cells,
            puzzle,
            solution,
            status: GameStatus::Idle,
            undo_stack: Vec::new(),
            move_count: 0,
            hints_used: 0,
            invalid: PositionSet::EMPTY,
            hint_cell: None,
            cooldown: HintCooldown::default(),
            advisories: Vec::new(),
        }
    }

    /// Applies a click to the cell at `position`.
    ///
    /// Clicking cycles the cell: empty gains a sun, a sun becomes a moon,
    /// and a moon clears. The move is recorded for undo, the affected row
    /// and column are re-checked, and a full board is evaluated against the
    /// solution. A rule violation flags the cells and queues a warning
    /// advisory; it never blocks the move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Finished`] once the session is solved or
    /// failed, and [`GameError::LockedCell`] when `position` holds a clue.
    pub fn click(&mut self, position: Position) -> Result<(), GameError> {
        self.ensure_playable(position)?;
        let next = match self.cells[position.index()].symbol() {
            None => Some(Symbol::Sun),
            Some(Symbol::Sun) => Some(Symbol::Moon),
            Some(Symbol::Moon) => None,
        };
        self.apply_move(position, next);
        Ok(())
    }

    /// Places `symbol` at `position`, or clears the cell with `None`.
    ///
    /// Setting a cell to its current value is a no-op and records nothing.
    /// Otherwise the move behaves exactly like [`Game::click`], minus the
    /// cycling.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Finished`] once the session is solved or
    /// failed, and [`GameError::LockedCell`] when `position` holds a clue.
    pub fn place(&mut self, position: Position, symbol: Option<Symbol>) -> Result<(), GameError> {
        self.ensure_playable(position)?;
        if self.cells[position.index()].symbol() == symbol {
            return Ok(());
        }
        self.apply_move(position, symbol);
        Ok(())
    }

    /// Undoes the most recent move.
    ///
    /// Restores the previous cell value, drops the record from the
    /// history, and returns the session to `InProgress`. Undoing out of a
    /// failed evaluation reopens play; the move counter is not decreased.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Finished`] once the session is solved and
    /// [`GameError::NothingToUndo`] when the history is empty.
    pub fn undo(&mut self) -> Result<(), GameError> {
        if self.status.is_solved() {
            return Err(self.reject(GameError::Finished {
                status: self.status,
            }));
        }
        let Some(last) = self.undo_stack.pop() else {
            return Err(self.reject(GameError::NothingToUndo));
        };
        self.hint_cell = None;
        self.cells[last.position.index()] = player_cell(last.previous);
        self.status = GameStatus::InProgress;
        self.invalid = compute_invalid(&self.board());
        Ok(())
    }

    /// Resets the board to the original puzzle.
    ///
    /// Clears every player cell, the undo history, and the move counter,
    /// and returns the session to `InProgress`. Hint usage and the hint
    /// cooldown survive, so scoring still sees consumed hints.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Finished`] once the session is solved.
    pub fn reset(&mut self) -> Result<(), GameError> {
        if self.status.is_solved() {
            return Err(self.reject(GameError::Finished {
                status: self.status,
            }));
        }
        for pos in Position::ALL {
            self.cells[pos.index()] = match self.puzzle[pos] {
                Some(symbol) => CellState::Given(symbol),
                None => CellState::Empty,
            };
        }
        self.undo_stack.clear();
        self.move_count = 0;
        self.hint_cell = None;
        self.invalid = PositionSet::EMPTY;
        self.status = GameStatus::InProgress;
        Ok(())
    }

    /// Requests a hint for the current board at time `now`.
    ///
    /// Hints are looked up from the visible board alone and never consult
    /// the stored solution. A forced placement highlights its cell until
    /// the next interaction; when no specific deduction is visible the
    /// hint restates the rules. Every served hint counts towards scoring
    /// and starts the cooldown. The hint text is also queued as an info
    /// advisory.
    ///
    /// # Errors
    ///
    /// Checked in order: [`GameError::Finished`] once the session is
    /// solved or failed, [`GameError::HintCooldown`] while the previous
    /// hint cools down, [`GameError::NoEmptyCells`] on a full board, and
    /// [`GameError::InfeasibleBoard`] when the board breaks a rule so
    /// badly that no completion exists.
    pub fn request_hint(&mut self, now: Instant) -> Result<Hint, GameError> {
        if self.status.is_finished() {
            return Err(self.reject(GameError::Finished {
                status: self.status,
            }));
        }
        if let Some(remaining) = self.cooldown.remaining(now) {
            return Err(self.reject(GameError::HintCooldown { remaining }));
        }
        let board = self.board();
        if board.is_complete() {
            return Err(self.reject(GameError::NoEmptyCells));
        }
        let hint = match find_hint(&board) {
            Ok(hint) => hint,
            Err(SolverError::Infeasible(violation)) => {
                return Err(self.reject(GameError::InfeasibleBoard(violation)));
            }
        };
        self.hint_cell = match &hint {
            Hint::Forced(step) => Some(step.position()),
            Hint::Reminder => None,
        };
        self.hints_used += 1;
        self.cooldown.start(now);
        self.advisories
            .push(Advisory::new("Hint", hint.message(), Severity::Info));
        Ok(hint)
    }

    /// Clears the hint highlight without touching anything else.
    pub fn clear_hint(&mut self) {
        self.hint_cell = None;
    }

    /// Drains the queued advisory messages, oldest first.
    pub fn take_advisories(&mut self) -> Vec<Advisory> {
        mem::take(&mut self.advisories)
    }

    /// Returns the state of the cell at `position`.
    #[must_use]
    pub const fn cell(&self, position: Position) -> CellState {
        self.cells[position.index()]
    }

    /// Returns the board as the player sees it.
    #[must_use]
    pub fn board(&self) -> SymbolGrid {
        let mut grid = SymbolGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.cells[pos.index()].symbol());
        }
        grid
    }

    /// Returns the puzzle the session started from.
    #[must_use]
    pub const fn puzzle(&self) -> &SymbolGrid {
        &self.puzzle
    }

    /// Returns the stored solution.
    #[must_use]
    pub const fn solution(&self) -> &SymbolGrid {
        &self.solution
    }

    /// Returns the session status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the cell highlighted by the last hint, if any.
    #[must_use]
    pub const fn hint_cell(&self) -> Option<Position> {
        self.hint_cell
    }

    /// Returns `true` when `position` sits in a violating row or column.
    #[must_use]
    pub const fn is_cell_invalid(&self, position: Position) -> bool {
        self.invalid.contains(position)
    }

    /// Returns every cell currently flagged by a rule violation.
    #[must_use]
    pub const fn invalid_cells(&self) -> PositionSet {
        self.invalid
    }

    /// Returns the number of moves applied this attempt.
    ///
    /// Undo does not decrease the count; reset zeroes it.
    #[must_use]
    pub const fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the number of hints served this session.
    #[must_use]
    pub const fn hints_used(&self) -> usize {
        self.hints_used
    }

    /// Returns the time left on the hint cooldown at `now`, if running.
    #[must_use]
    pub fn hint_cooldown_remaining(&self, now: Instant) -> Option<Duration> {
        self.cooldown.remaining(now)
    }

    /// Returns the star rating for the session counters so far.
    #[must_use]
    pub const fn star_rating(&self) -> u8 {
        star_rating(self.hints_used, self.move_count)
    }

    fn ensure_playable(&mut self, position: Position) -> Result<(), GameError> {
        if self.status.is_finished() {
            return Err(self.reject(GameError::Finished {
                status: self.status,
            }));
        }
        if self.cells[position.index()].is_given() {
            return Err(self.reject(GameError::LockedCell { position }));
        }
        Ok(())
    }

    /// Queues an advisory for a rejected action and hands the error back.
    fn reject(&mut self, error: GameError) -> GameError {
        self.advisories.push(Advisory::from(&error));
        error
    }

    fn apply_move(&mut self, position: Position, symbol: Option<Symbol>) {
        self.hint_cell = None;
        let previous = self.cells[position.index()].symbol();
        self.undo_stack.push(Move { position, previous });
        self.move_count += 1;
        self.cells[position.index()] = player_cell(symbol);
        self.status = GameStatus::InProgress;

        let board = self.board();
        self.invalid = compute_invalid(&board);
        let touched = [
            Line::Row { y: position.y() },
            Line::Column { x: position.x() },
        ];
        if let Some(violation) = touched
            .into_iter()
            .find_map(|line| rules::line_violation(&board, line))
        {
            self.advisories.push(Advisory::new(
                "Rule violation",
                violation.to_string(),
                Severity::Warning,
            ));
        }

        if board.is_complete() {
            self.resolve_completion(&board);
        }
    }

    /// Evaluates a full board. Winning requires both the stored solution
    /// and an independent pass of the rules.
    fn resolve_completion(&mut self, board: &SymbolGrid) {
        if *board == self.solution && rules::is_fully_valid(board) {
            self.status = GameStatus::Solved;
            let stars = self.star_rating();
            self.advisories.push(Advisory::new(
                "Solved",
                format!(
                    "Finished in {} moves with {} hints for a {stars}-star rating",
                    self.move_count, self.hints_used,
                ),
                Severity::Success,
            ));
        } else {
            self.status = GameStatus::Failed;
            self.advisories.push(Advisory::new(
                "Not solved",
                "The board is full but does not match the solution. Undo or reset to keep going.",
                Severity::Warning,
            ));
        }
    }
}

fn player_cell(symbol: Option<Symbol>) -> CellState {
    match symbol {
        Some(symbol) => CellState::Filled(symbol),
        None => CellState::Empty,
    }
}

fn compute_invalid(board: &SymbolGrid) -> PositionSet {
    let mut invalid = PositionSet::EMPTY;
    for line in Line::ALL {
        if rules::line_violates(board, line) {
            invalid |= line.mask();
        }
    }
    invalid
}

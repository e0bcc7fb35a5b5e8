use solluna_core::{Line, Position, PositionSet, Symbol};

/// A forced placement found by a technique, with its justification.
///
/// A step is self-contained: the position and symbol say what to place, the
/// involved cells say which board state justifies it, and the explanation
/// says why in words. Explanations are derived from the board alone and
/// never reference a stored solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionStep {
    technique_name: &'static str,
    position: Position,
    symbol: Symbol,
    involved: PositionSet,
    line: Option<Line>,
    explanation: String,
}

impl DeductionStep {
    /// Creates a new deduction step.
    #[must_use]
    pub fn new(
        technique_name: &'static str,
        position: Position,
        symbol: Symbol,
        involved: PositionSet,
        line: Option<Line>,
        explanation: String,
    ) -> Self {
        Self {
            technique_name,
            position,
            symbol,
            involved,
            line,
            explanation,
        }
    }

    /// Returns the name of the technique that produced this step.
    #[must_use]
    pub fn technique_name(&self) -> &'static str {
        self.technique_name
    }

    /// Returns the cell to fill.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the symbol forced into the cell.
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns the cells whose contents justify the placement.
    ///
    /// Useful for highlighting; never contains the placed cell itself.
    #[must_use]
    pub fn involved(&self) -> PositionSet {
        self.involved
    }

    /// Returns the line whose constraint forces the placement, if the
    /// deduction is line-scoped.
    #[must_use]
    pub fn line(&self) -> Option<Line> {
        self.line
    }

    /// Returns the human-readable justification.
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

use solluna_core::rules::RuleViolation;

/// Error that can occur while solving.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// The board breaks a placement rule and cannot be completed.
    #[display("infeasible board: {_0}")]
    Infeasible(#[from] RuleViolation),
}

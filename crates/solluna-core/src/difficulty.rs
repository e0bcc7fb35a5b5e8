use std::str::FromStr;

/// Puzzle difficulty band.
///
/// Difficulty only affects generation: it sets the fraction of cells the
/// carver tries to remove from a solution. Display and parse use the
/// kebab-case names that appear in level records (`easy` .. `very-hard`).
///
/// # Examples
///
/// ```
/// use solluna_core::Difficulty;
///
/// assert_eq!(Difficulty::for_level(1), Difficulty::Easy);
/// assert_eq!(Difficulty::for_level(5), Difficulty::VeryHard);
/// assert_eq!(Difficulty::for_level(6), Difficulty::Easy);
/// assert_eq!("very-hard".parse(), Ok(Difficulty::VeryHard));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Difficulty {
    /// Roughly 40% of cells removed.
    #[display("easy")]
    Easy,
    /// Roughly 50% of cells removed.
    #[display("medium")]
    Medium,
    /// Roughly 60% of cells removed.
    #[display("hard")]
    Hard,
    /// Roughly 70% of cells removed.
    #[display("very-hard")]
    VeryHard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::VeryHard];

    const LEVEL_CYCLE: [Self; 5] = [
        Self::Easy,
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::VeryHard,
    ];

    /// Returns the difficulty for a 1-based level number.
    ///
    /// Levels cycle in groups of five: easy, easy, medium, hard, very-hard.
    /// Level 0 is treated as level 1.
    #[must_use]
    pub const fn for_level(level: u32) -> Self {
        Self::LEVEL_CYCLE[(level.saturating_sub(1) % 5) as usize]
    }

    /// Returns the fraction of cells the carver attempts to remove.
    #[must_use]
    pub const fn removal_fraction(self) -> f64 {
        match self {
            Self::Easy => 0.4,
            Self::Medium => 0.5,
            Self::Hard => 0.6,
            Self::VeryHard => 0.7,
        }
    }
}

/// Error returned when parsing a [`Difficulty`] name fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty name {name:?}")]
pub struct ParseDifficultyError {
    /// The unrecognized name.
    pub name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "very-hard" => Ok(Self::VeryHard),
            name => Err(ParseDifficultyError {
                name: name.to_owned(),
            }),
        }
    }
}

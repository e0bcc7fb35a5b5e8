/// One of the two placeable symbols.
///
/// Grid strings encode suns as `S` and moons as `M`; display names are
/// lowercase words, matching the wire format used by level records.
///
/// # Examples
///
/// ```
/// use solluna_core::Symbol;
///
/// assert_eq!(Symbol::Sun.opposite(), Symbol::Moon);
/// assert_eq!(Symbol::Moon.to_string(), "moon");
/// assert_eq!(Symbol::from_char('S'), Some(Symbol::Sun));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Symbol {
    /// The sun symbol.
    #[display("sun")]
    Sun,
    /// The moon symbol.
    #[display("moon")]
    Moon,
}

impl Symbol {
    /// Both symbols, sun first.
    pub const ALL: [Self; 2] = [Self::Sun, Self::Moon];

    /// Returns the other symbol.
    #[must_use]
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Sun => Self::Moon,
            Self::Moon => Self::Sun,
        }
    }

    /// Returns the single-character grid encoding.
    #[must_use]
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Self::Sun => 'S',
            Self::Moon => 'M',
        }
    }

    /// Parses the single-character grid encoding.
    #[must_use]
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'S' => Some(Self::Sun),
            'M' => Some(Self::Moon),
            _ => None,
        }
    }
}

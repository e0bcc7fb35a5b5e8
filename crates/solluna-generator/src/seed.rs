use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Seed for deterministic level generation.
///
/// A seed is 32 bytes, shown and parsed as 64 hex digits. The same seed
/// drives the generator through the same sequence of random choices, so a
/// level can be reproduced from its seed alone.
///
/// # Examples
///
/// ```
/// use solluna_generator::PuzzleSeed;
///
/// let text = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff";
/// let seed: PuzzleSeed = text.parse()?;
/// assert_eq!(seed.to_string(), text);
/// # Ok::<(), solluna_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Wraps raw seed bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Derives a seed from an arbitrary phrase.
    ///
    /// The phrase is hashed with SHA-256, so phrases of any length map to
    /// full 32-byte seeds.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase).into())
    }

    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error parsing a [`PuzzleSeed`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, found {found} characters")]
    WrongLength {
        /// Number of characters in the input.
        found: usize,
    },
    /// The input contains a character that is not a hex digit.
    #[display("invalid character {found:?} in seed")]
    InvalidChar {
        /// The offending character.
        found: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.chars().count();
        if digits != 64 {
            return Err(ParseSeedError::WrongLength { found: digits });
        }
        let mut bytes = [0; 32];
        for (i, c) in s.chars().enumerate() {
            let value = c
                .to_digit(16)
                .ok_or(ParseSeedError::InvalidChar { found: c })?;
            #[expect(clippy::cast_possible_truncation)]
            let value = value as u8;
            bytes[i / 2] = (bytes[i / 2] << 4) | value;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use rand::RngExt as _;

    use super::*;

    #[test]
    fn display_and_parse_round_trip() {
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::try_from(i).unwrap().wrapping_mul(7);
        }
        let seed = PuzzleSeed::from_bytes(bytes);
        let parsed: PuzzleSeed = seed.to_string().parse().unwrap();
        assert_eq!(parsed, seed);
        assert_eq!(parsed.as_bytes(), &bytes);
    }

    #[test]
    fn parse_accepts_uppercase_digits() {
        let lower: PuzzleSeed = "ab".repeat(32).parse().unwrap();
        let upper: PuzzleSeed = "AB".repeat(32).parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(upper.to_string(), "ab".repeat(32));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            "".parse::<PuzzleSeed>(),
            Err(ParseSeedError::WrongLength { found: 0 })
        );
        assert_eq!(
            "0".repeat(63).parse::<PuzzleSeed>(),
            Err(ParseSeedError::WrongLength { found: 63 })
        );
        assert_eq!(
            "0".repeat(65).parse::<PuzzleSeed>(),
            Err(ParseSeedError::WrongLength { found: 65 })
        );
    }

    #[test]
    fn parse_rejects_non_hex_characters() {
        let text = format!("g{}", "0".repeat(63));
        assert_eq!(
            text.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidChar { found: 'g' })
        );
    }

    #[test]
    fn phrases_map_to_stable_seeds() {
        let a = PuzzleSeed::from_phrase("daily level 1");
        let b = PuzzleSeed::from_phrase("daily level 1");
        let c = PuzzleSeed::from_phrase("daily level 2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }

    #[test]
    fn same_seed_yields_same_rng_stream() {
        let seed = PuzzleSeed::from_phrase("rng stream");
        let mut a = seed.rng();
        let mut b = seed.rng();
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }
}

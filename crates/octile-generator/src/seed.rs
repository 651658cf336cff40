use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A 32-byte seed that determines a generated puzzle.
///
/// Seeds are shown and parsed as 64 lowercase or uppercase hexadecimal
/// digits, so a puzzle can be reproduced from its printed seed.
///
/// # Examples
///
/// ```
/// use octile_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1".parse()?;
/// assert_eq!(seed.to_string().parse::<PuzzleSeed>()?, seed);
/// # Ok::<(), octile_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the seed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for PuzzleSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors raised when parsing a [`PuzzleSeed`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The string contains a character that is not a hex digit.
    #[display("invalid hex digit in seed: {ch:?}")]
    InvalidDigit {
        /// The rejected character.
        ch: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::InvalidLength { len });
        }
        let mut bytes = [0; 32];
        let mut chars = s.chars();
        for byte in &mut bytes {
            let mut value = 0;
            for ch in chars.by_ref().take(2) {
                let digit = ch
                    .to_digit(16)
                    .ok_or(SeedParseError::InvalidDigit { ch })?;
                #[allow(clippy::cast_possible_truncation)]
                let digit = digit as u8;
                value = (value << 4) | digit;
            }
            *byte = value;
        }
        Ok(Self(bytes))
    }
}

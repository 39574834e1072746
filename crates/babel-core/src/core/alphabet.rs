//! The 64-glyph alphabet pages are written in.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use super::constants::ALPHABET_LEN;

/// Alphabet used when the caller supplies none: ASCII letters, digits,
/// space and period.
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 .";

/// An ordered set of 64 distinct glyphs.
///
/// Position `i` is the glyph for the 6-bit value `i`, so the order is part
/// of the library's identity: two alphabets with the same characters in a
/// different order render different text.
///
/// # Example
///
/// ```
/// use babel_core::Alphabet;
///
/// let alphabet = Alphabet::default();
/// assert_eq!(alphabet.glyph(0), 'a');
/// assert_eq!(alphabet.glyph(63), '.');
///
/// assert!(Alphabet::new("abc").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    glyphs: [char; ALPHABET_LEN],
}

/// Error when building an [`Alphabet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// The letter set does not hold exactly 64 characters.
    InvalidLength {
        /// Number of characters found.
        found: usize,
    },
    /// A character appears more than once.
    DuplicateGlyph {
        /// The repeated character.
        glyph: char,
        /// Position of its first occurrence.
        first: usize,
        /// Position of the repeat.
        second: usize,
    },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { found } => write!(
                f,
                "alphabet must hold exactly {} characters, found {}",
                ALPHABET_LEN, found
            ),
            Self::DuplicateGlyph {
                glyph,
                first,
                second,
            } => write!(
                f,
                "glyph '{}' appears at positions {} and {}",
                glyph, first, second
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AlphabetError {}

impl Alphabet {
    /// Builds an alphabet from a 64-character letter set.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::InvalidLength`] unless `letters` holds exactly
    /// 64 characters, and [`AlphabetError::DuplicateGlyph`] if any character
    /// repeats.
    pub fn new(letters: &str) -> Result<Self, AlphabetError> {
        let found = letters.chars().count();
        if found != ALPHABET_LEN {
            return Err(AlphabetError::InvalidLength { found });
        }

        let mut glyphs = ['\0'; ALPHABET_LEN];
        for (second, glyph) in letters.chars().enumerate() {
            if let Some(first) = glyphs[..second].iter().position(|&g| g == glyph) {
                return Err(AlphabetError::DuplicateGlyph {
                    glyph,
                    first,
                    second,
                });
            }
            glyphs[second] = glyph;
        }
        Ok(Self { glyphs })
    }

    /// Glyph for a 6-bit value. Bits above the low six are ignored.
    #[inline]
    #[must_use]
    pub fn glyph(&self, value: u8) -> char {
        self.glyphs[usize::from(value & 0x3f)]
    }

    /// All 64 glyphs in value order.
    #[must_use]
    pub fn glyphs(&self) -> &[char; ALPHABET_LEN] {
        &self.glyphs
    }

    /// The letter set as a string.
    #[must_use]
    pub fn letters(&self) -> String {
        self.glyphs.iter().collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        let mut glyphs = ['\0'; ALPHABET_LEN];
        for (slot, glyph) in glyphs.iter_mut().zip(DEFAULT_ALPHABET.chars()) {
            *slot = glyph;
        }
        Self { glyphs }
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet({:?})", self.letters())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.glyphs {
            write!(f, "{}", glyph)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let parsed = Alphabet::new(DEFAULT_ALPHABET).unwrap();
        assert_eq!(parsed, Alphabet::default());
    }

    #[test]
    fn test_glyph_positions() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.glyph(0), 'a');
        assert_eq!(alphabet.glyph(26), 'A');
        assert_eq!(alphabet.glyph(52), '0');
        assert_eq!(alphabet.glyph(62), ' ');
        assert_eq!(alphabet.glyph(63), '.');
    }

    #[test]
    fn test_glyph_ignores_high_bits() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.glyph(0x40), alphabet.glyph(0));
        assert_eq!(alphabet.glyph(0xff), alphabet.glyph(63));
    }

    #[test]
    fn test_rejects_short_and_long() {
        assert_eq!(
            Alphabet::new("abc"),
            Err(AlphabetError::InvalidLength { found: 3 })
        );
        let long: String = DEFAULT_ALPHABET.chars().chain(['!']).collect();
        assert_eq!(
            Alphabet::new(&long),
            Err(AlphabetError::InvalidLength { found: 65 })
        );
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 64 Braille glyphs are 192 bytes of UTF-8.
        let braille: String = (0..64u32)
            .filter_map(|i| char::from_u32(0x2800 + i))
            .collect();
        let alphabet = Alphabet::new(&braille).unwrap();
        assert_eq!(alphabet.glyph(17), '\u{2811}');
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut letters: String = DEFAULT_ALPHABET.chars().take(63).collect();
        letters.push('b');
        assert_eq!(
            Alphabet::new(&letters),
            Err(AlphabetError::DuplicateGlyph {
                glyph: 'b',
                first: 1,
                second: 63
            })
        );
    }

    #[test]
    fn test_letters_roundtrip() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.letters(), DEFAULT_ALPHABET);
        assert_eq!(alphabet.to_string(), DEFAULT_ALPHABET);
    }
}

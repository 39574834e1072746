//! Fixed-width unsigned integers with scrambling arithmetic.
//!
//! A [`FixedWord`] is a little-endian byte string that never holds a value
//! of `digits` bits or more. Plain addition and subtraction report overflow
//! through their return value instead of failing, because overflow is what
//! drives the cascading counters of the seed grid.
//!
//! The "modulo" family ([`FixedWord::add_modulo`], [`FixedWord::shift_modulo`],
//! [`FixedWord::multi_modulo`], [`FixedWord::power_modulo`]) is not arithmetic
//! in any field. Every time a value wraps past the top of the word, the
//! constant [`MODULO_CORRECTION`] is added back at byte 0. The rule is a
//! scrambler and every rendered page depends on it bit for bit.
//!
//! # Example
//!
//! ```
//! use babel_core::FixedWord;
//!
//! let mut w = FixedWord::new(12, 5);
//! assert!(!w.add(0x0ff, 0));
//! assert!(!w.add(1, 0));
//! assert_eq!(w.as_bytes(), &[0x00, 0x01]);
//!
//! // The top byte holds only 4 bits; carrying past them overflows.
//! assert!(w.add(0xf, 1));
//! assert_eq!(w.as_bytes(), &[0x00, 0x00]);
//! ```

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use rand::{CryptoRng, RngCore};

use super::alphabet::Alphabet;
use super::constants::MODULO_CORRECTION;

/// A bit-width-bounded unsigned integer stored least-significant byte first.
///
/// Cloning gives an independent copy with the same parameters and bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FixedWord {
    digits: usize,
    exponent: u32,
    top_mask: u8,
    bytes: Vec<u8>,
}

impl FixedWord {
    /// Creates a zero word of `digits` bits.
    ///
    /// `exponent` is the power used by [`FixedWord::scramble`].
    ///
    /// # Panics
    ///
    /// Panics if `digits` is zero.
    #[must_use]
    pub fn new(digits: usize, exponent: u32) -> Self {
        assert!(digits > 0, "a FixedWord needs at least one bit");
        let top_bits = match digits % 8 {
            0 => 8,
            rem => rem,
        };
        Self {
            digits,
            exponent,
            top_mask: ((1u16 << top_bits) - 1) as u8,
            bytes: vec![0; digits.div_ceil(8)],
        }
    }

    /// Creates a word from little-endian bytes.
    ///
    /// Bytes past the word's length are ignored and the top byte is masked.
    ///
    /// # Panics
    ///
    /// Panics if `digits` is zero.
    #[must_use]
    pub fn from_bytes(digits: usize, exponent: u32, bytes: &[u8]) -> Self {
        let mut word = Self::new(digits, exponent);
        for (slot, &byte) in word.bytes.iter_mut().zip(bytes) {
            *slot = byte;
        }
        word.mask_top();
        word
    }

    /// Number of meaningful bits.
    #[inline]
    #[must_use]
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Exponent applied by [`FixedWord::scramble`].
    #[inline]
    #[must_use]
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Mask of the bits the top byte may hold.
    #[inline]
    #[must_use]
    pub fn top_mask(&self) -> u8 {
        self.top_mask
    }

    /// Storage length in bytes, `ceil(digits / 8)`.
    #[inline]
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// The little-endian bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Byte at `index`, or 0 past the end.
    #[inline]
    #[must_use]
    pub fn byte(&self, index: usize) -> u8 {
        self.bytes.get(index).copied().unwrap_or(0)
    }

    /// Overwrites the byte at `index`.
    ///
    /// Writes past the end are dropped and the top byte is masked.
    pub fn set_byte(&mut self, index: usize, value: u8) {
        if let Some(slot) = self.bytes.get_mut(index) {
            *slot = value;
            self.mask_top();
        }
    }

    /// Returns `true` if every byte is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    /// Resets the value to zero.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Fills the word from a cryptographically strong source, then masks the
    /// top byte so the value stays below `2^digits`.
    pub fn set_random<R>(&mut self, rng: &mut R)
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        rng.fill_bytes(&mut self.bytes);
        self.mask_top();
    }

    #[inline]
    fn mask_top(&mut self) {
        let mask = self.top_mask;
        if let Some(top) = self.bytes.last_mut() {
            *top &= mask;
        }
    }

    // ------------------------------------------------------------------
    // Plain arithmetic
    // ------------------------------------------------------------------

    /// Adds `value` anchored at byte `shift`.
    ///
    /// Negative values subtract. Returns `true` if the sum carried past the
    /// top of the word, in which case the stored value has wrapped modulo
    /// `2^digits`. Parts of `value` that land past the last byte are
    /// dropped without reporting overflow.
    pub fn add(&mut self, value: i64, shift: usize) -> bool {
        if value < 0 {
            self.sub_magnitude(value.unsigned_abs(), shift)
        } else {
            self.add_magnitude(value.unsigned_abs(), shift)
        }
    }

    /// Subtracts `value` anchored at byte `shift`.
    ///
    /// The mirror of [`FixedWord::add`]: returns `true` if the difference
    /// borrowed past the top of the word.
    pub fn sub(&mut self, value: i64, shift: usize) -> bool {
        if value < 0 {
            self.add_magnitude(value.unsigned_abs(), shift)
        } else {
            self.sub_magnitude(value.unsigned_abs(), shift)
        }
    }

    fn add_magnitude(&mut self, mut value: u64, mut shift: usize) -> bool {
        let mut overflowed = false;
        while value > 0xff {
            overflowed |= self.carry_from(shift, (value & 0xff) as u8);
            shift += 1;
            value >>= 8;
        }
        self.carry_from(shift, value as u8) | overflowed
    }

    fn sub_magnitude(&mut self, mut value: u64, mut shift: usize) -> bool {
        let mut overflowed = false;
        while value > 0xff {
            overflowed |= self.borrow_from(shift, (value & 0xff) as u8);
            shift += 1;
            value >>= 8;
        }
        self.borrow_from(shift, value as u8) | overflowed
    }

    /// Adds one byte at `pos` and ripples the carry upward.
    fn carry_from(&mut self, mut pos: usize, value: u8) -> bool {
        let top = self.bytes.len() - 1;
        let mask = u16::from(self.top_mask);
        let mut carry = u16::from(value);
        while carry != 0 && pos <= top {
            let sum = u16::from(self.bytes[pos]) + carry;
            if pos == top {
                self.bytes[pos] = (sum & mask) as u8;
                return sum > mask;
            }
            self.bytes[pos] = (sum & 0xff) as u8;
            carry = sum >> 8;
            pos += 1;
        }
        false
    }

    /// Subtracts one byte at `pos` and ripples the borrow upward.
    fn borrow_from(&mut self, mut pos: usize, value: u8) -> bool {
        let top = self.bytes.len() - 1;
        let mut borrow = i16::from(value);
        while borrow != 0 && pos <= top {
            let diff = i16::from(self.bytes[pos]) - borrow;
            if diff >= 0 {
                self.bytes[pos] = diff as u8;
                return false;
            }
            if pos == top {
                self.bytes[pos] = diff.rem_euclid(i16::from(self.top_mask) + 1) as u8;
                return true;
            }
            self.bytes[pos] = (diff + 0x100) as u8;
            borrow = 1;
            pos += 1;
        }
        false
    }

    // ------------------------------------------------------------------
    // Scrambling arithmetic
    // ------------------------------------------------------------------

    /// Adds the bits of `addend` (little-endian) into the word, adding
    /// [`MODULO_CORRECTION`] at byte 0 after every wrap.
    ///
    /// Each set bit is one addition of its power of two. Bytes past the
    /// word's length contribute nothing. Bits of the top byte above
    /// `digits` wrap immediately and are corrected one by one.
    pub fn add_modulo(&mut self, addend: &[u8]) {
        let top = self.bytes.len() - 1;
        for (pos, &byte) in addend.iter().enumerate().take(top + 1) {
            if byte == 0 {
                continue;
            }
            if pos < top {
                // Below the top byte a whole byte wraps at most once, exactly
                // as its bits would one at a time.
                if self.carry_from(pos, byte) {
                    self.correct();
                }
                continue;
            }
            for bit in 0..8 {
                if byte & (1 << bit) != 0 && self.carry_from(pos, 1 << bit) {
                    self.correct();
                }
            }
        }
    }

    /// Shifts the word left by `count` bits. Each bit pushed past the top
    /// is dropped and [`MODULO_CORRECTION`] added in its place.
    pub fn shift_modulo(&mut self, count: usize) {
        for _ in 0..count {
            let mut carry = 0u8;
            for byte in &mut self.bytes {
                let out = *byte >> 7;
                *byte = (*byte << 1) | carry;
                carry = out;
            }
            let top = self.bytes.len() - 1;
            if carry != 0 || self.bytes[top] > self.top_mask {
                self.bytes[top] &= self.top_mask;
                self.correct();
            }
        }
    }

    /// Long multiplication under the scrambling rule.
    ///
    /// Walks the bits of `multiplier` least-significant first; for each set
    /// bit the current (shifted) value of `self` is accumulated with
    /// [`FixedWord::add_modulo`], and `self` is shifted left by one after
    /// every bit. The accumulator replaces `self` at the end.
    pub fn multi_modulo(&mut self, multiplier: &[u8]) {
        let mut product = Self::new(self.digits, self.exponent);
        for &byte in multiplier {
            for bit in 0..8 {
                if byte & (1 << bit) != 0 {
                    product.add_modulo(&self.bytes);
                }
                self.shift_modulo(1);
            }
        }
        self.bytes = product.bytes;
    }

    /// Raises the word to `exponent` by `exponent - 1` sequential
    /// multiplications against the original value.
    ///
    /// Squaring would take a different path through the wrap corrections
    /// and produce different bytes. Exponents 0 and 1 leave the word
    /// unchanged.
    pub fn power_modulo(&mut self, exponent: u32) {
        let base = self.bytes.clone();
        for _ in 1..exponent {
            self.multi_modulo(&base);
        }
    }

    /// Applies [`FixedWord::power_modulo`] with the word's own exponent.
    ///
    /// A fixed obfuscation transform, not encryption.
    #[doc(alias = "rsa_encode")]
    pub fn scramble(&mut self) -> &mut Self {
        self.power_modulo(self.exponent);
        self
    }

    fn correct(&mut self) {
        // A 1-bit word has no bit for the correction; adding it would wrap
        // forever.
        if self.digits < 2 {
            return;
        }
        while self.carry_from(0, MODULO_CORRECTION) {}
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Maps the word to text, six bits per glyph, least significant first.
    ///
    /// Groups straddle byte boundaries. The result holds exactly
    /// `ceil(digits / 6)` glyphs; bits missing from the last group read as 0.
    ///
    /// ```
    /// use babel_core::{Alphabet, FixedWord};
    ///
    /// let w = FixedWord::from_bytes(12, 5, &[0b0100_0001, 0b0000_0011]);
    /// // bits 0..6 = 1, bits 6..12 = 0b001101 = 13
    /// assert_eq!(w.to_glyphs(&Alphabet::default()), "bn");
    /// ```
    #[doc(alias = "string_mapping64")]
    #[must_use]
    pub fn to_glyphs(&self, alphabet: &Alphabet) -> String {
        let count = self.digits.div_ceil(6);
        let mut text = String::with_capacity(count);
        for group in 0..count {
            let bit = group * 6;
            let pair = u16::from(self.byte(bit / 8)) | (u16::from(self.byte(bit / 8 + 1)) << 8);
            text.push(alphabet.glyph((pair >> (bit % 8)) as u8));
        }
        text
    }
}

impl fmt::Debug for FixedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedWord<{}>(", self.digits)?;
        for byte in self.bytes.iter().rev() {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl fmt::LowerHex for FixedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes.iter().rev() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

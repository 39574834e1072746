//! Property-based tests for FixedWord arithmetic.
//!
//! Uses proptest to check the width invariant, add/sub inversion and the
//! scrambling identities over random widths and values.

use babel_core::{Alphabet, FixedWord};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn arb_word(max_digits: usize) -> impl Strategy<Value = FixedWord> {
    (1..=max_digits).prop_flat_map(|digits| {
        proptest::collection::vec(any::<u8>(), digits.div_ceil(8))
            .prop_map(move |bytes| FixedWord::from_bytes(digits, 5, &bytes))
    })
}

fn in_range(w: &FixedWord) -> bool {
    w.byte(w.byte_len() - 1) <= w.top_mask()
}

// =============================================================================
// Width Invariant
// =============================================================================

proptest! {
    /// set_random never produces a value of `digits` bits or more
    #[test]
    fn prop_set_random_below_width(digits in 1usize..=300, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut w = FixedWord::new(digits, 5);
        w.set_random(&mut rng);
        prop_assert!(in_range(&w));
        prop_assert_eq!(w.byte_len(), digits.div_ceil(8));
    }

    /// add and sub keep the value in range however they overflow
    #[test]
    fn prop_add_sub_stay_in_range(mut w in arb_word(160), value: i64, shift in 0usize..24) {
        w.add(value, shift);
        prop_assert!(in_range(&w));
        w.sub(value, shift);
        prop_assert!(in_range(&w));
    }

    /// the scrambling family keeps the value in range
    #[test]
    fn prop_modulo_ops_stay_in_range(mut w in arb_word(64), addend: Vec<u8>, count in 0usize..80) {
        w.add_modulo(&addend);
        prop_assert!(in_range(&w));
        w.shift_modulo(count);
        prop_assert!(in_range(&w));
        w.scramble();
        prop_assert!(in_range(&w));
    }
}

// =============================================================================
// Add/Sub Inversion
// =============================================================================

proptest! {
    /// sub(v, s) undoes add(v, s) when the value fits inside the word
    #[test]
    fn prop_add_then_sub_restores(w in arb_word(256), value: i64, shift in 0usize..4) {
        prop_assume!(shift + 8 <= w.byte_len());
        let mut x = w.clone();
        x.add(value, shift);
        x.sub(value, shift);
        prop_assert_eq!(x, w);
    }

    /// a negative add is a sub
    #[test]
    fn prop_negative_add_is_sub(w in arb_word(128), value in 0i64..=i64::MAX, shift in 0usize..4) {
        let mut a = w.clone();
        let mut b = w;
        let oa = a.add(-value, shift);
        let ob = b.sub(value, shift);
        prop_assert_eq!(a, b);
        prop_assert_eq!(oa, ob);
    }

    /// add reports overflow exactly when the 128-bit sum leaves the width
    #[test]
    fn prop_add_overflow_flag(digits in 1usize..=120, start: u128, value: u64) {
        let limit = 1u128 << digits;
        let start = start % limit;
        // keep every byte of the addend inside the word
        let value = u128::from(value) % limit.min(1u128 << 63);
        let mut w = FixedWord::from_bytes(digits, 5, &start.to_le_bytes());
        let overflowed = w.add(value as i64, 0);
        let sum = start + value;
        prop_assert_eq!(overflowed, sum >= limit);

        let mut bytes = [0u8; 16];
        bytes[..w.byte_len()].copy_from_slice(w.as_bytes());
        prop_assert_eq!(u128::from_le_bytes(bytes), sum % limit);
    }
}

// =============================================================================
// Scrambling Identities
// =============================================================================

proptest! {
    /// power_modulo(1) is the identity
    #[test]
    fn prop_power_one_identity(w in arb_word(256)) {
        let mut x = w.clone();
        x.power_modulo(1);
        prop_assert_eq!(x, w);
    }

    /// without wraps, add_modulo is plain addition
    #[test]
    fn prop_add_modulo_small_is_sum(a in 0u64..(1 << 40), b in 0u64..(1 << 40)) {
        let mut w = FixedWord::from_bytes(107, 5, &a.to_le_bytes());
        w.add_modulo(&b.to_le_bytes());
        let mut bytes = [0u8; 16];
        bytes[..w.byte_len()].copy_from_slice(w.as_bytes());
        prop_assert_eq!(u128::from_le_bytes(bytes), u128::from(a) + u128::from(b));
    }

    /// without wraps, multi_modulo is plain multiplication
    #[test]
    fn prop_multi_modulo_small_is_product(a in 0u64..(1 << 40), b in 0u64..(1 << 40)) {
        let mut w = FixedWord::from_bytes(107, 5, &a.to_le_bytes());
        w.multi_modulo(&b.to_le_bytes());
        let mut bytes = [0u8; 16];
        bytes[..w.byte_len()].copy_from_slice(w.as_bytes());
        prop_assert_eq!(u128::from_le_bytes(bytes), u128::from(a) * u128::from(b));
    }

    /// scrambling is a pure function of the bytes
    #[test]
    fn prop_scramble_deterministic(w in arb_word(107)) {
        let mut a = w.clone();
        let mut b = w;
        a.scramble();
        b.scramble();
        prop_assert_eq!(a, b);
    }
}

// =============================================================================
// Glyph Mapping
// =============================================================================

proptest! {
    /// a 107-bit word always renders as 18 glyphs, the same every time
    #[test]
    fn prop_cell_renders_18_glyphs(seed: u64) {
        let alphabet = Alphabet::default();
        let mut w = FixedWord::new(107, 5);
        w.set_random(&mut StdRng::seed_from_u64(seed));
        let first = w.to_glyphs(&alphabet);
        prop_assert_eq!(first.chars().count(), 18);
        prop_assert_eq!(w.to_glyphs(&alphabet), first);
    }

    /// glyph count is ceil(digits / 6) for any width
    #[test]
    fn prop_glyph_count(w in arb_word(400)) {
        let text = w.to_glyphs(&Alphabet::default());
        prop_assert_eq!(text.chars().count(), w.digits().div_ceil(6));
    }
}

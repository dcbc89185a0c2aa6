//! Property-based tests for the ternary engine.
//!
//! Drives every width with random binary integers and checks the engine
//! against native integer arithmetic.

use proptest::prelude::*;
use ternary::{
    add, and, balanced_to_binary, balanced_to_unbalanced, binary_to_balanced,
    binary_to_unbalanced, not, or, shift_left, shift_right, sub, unbalanced_to_balanced,
    unbalanced_to_binary, xor, BalancedWord, TernaryError, Trit, Trit16, Trit32, Trit8,
    UnbalancedWord, Width,
};

fn any_trit() -> impl Strategy<Value = Trit> {
    prop_oneof![Just(Trit::N), Just(Trit::O), Just(Trit::P)]
}

/// Any valid balanced word of width `W`.
fn any_balanced<W: Width>() -> impl Strategy<Value = BalancedWord<W>> {
    prop::collection::vec(any_trit(), W::TRITS).prop_map(BalancedWord::from_trits)
}

macro_rules! width_properties {
    ($module:ident, $width:ty, $unsigned:ty, $signed:ty) => {
        mod $module {
            use super::*;

            type W = $width;
            const MAX: i64 = <W as Width>::MAX_BALANCED;

            proptest! {
                #[test]
                fn balanced_roundtrip(v in 0..=(MAX as $unsigned)) {
                    let word = binary_to_balanced::<W>(v).unwrap();
                    prop_assert_eq!(balanced_to_binary(word), v as $signed);
                }

                #[test]
                fn unbalanced_roundtrip(v in 0..=(<W as Width>::MAX_UNBALANCED as $unsigned)) {
                    let word = binary_to_unbalanced::<W>(v).unwrap();
                    prop_assert_eq!(unbalanced_to_binary(word), v);
                }

                #[test]
                fn balanced_rejects_values_past_the_range(v in (MAX as $unsigned + 1)..=<$unsigned>::MAX) {
                    let is_overflow = matches!(
                        binary_to_balanced::<W>(v),
                        Err(TernaryError::NumericOverflow { .. })
                    );
                    prop_assert!(is_overflow);
                }

                #[test]
                fn signed_roundtrip(v in -MAX..=MAX) {
                    let word = BalancedWord::<W>::from_i64(v).unwrap();
                    prop_assert_eq!(word.to_i64(), v);
                }

                #[test]
                fn balanced_through_unbalanced(v in 0..=MAX) {
                    let word = BalancedWord::<W>::from_i64(v).unwrap();
                    let unbalanced = balanced_to_unbalanced(word).unwrap();
                    prop_assert_eq!(unbalanced_to_balanced(unbalanced).unwrap(), word);
                }

                #[test]
                fn unbalanced_through_balanced(v in 0..=(MAX as u64)) {
                    let word = UnbalancedWord::<W>::from_u64(v).unwrap();
                    let balanced = unbalanced_to_balanced(word).unwrap();
                    prop_assert_eq!(balanced_to_unbalanced(balanced).unwrap(), word);
                }

                #[test]
                fn add_matches_native(a in -MAX..=MAX, b in -MAX..=MAX) {
                    let outcome = add(
                        BalancedWord::<W>::from_i64(a).unwrap(),
                        BalancedWord::<W>::from_i64(b).unwrap(),
                    );
                    let exact = a as i128 + b as i128;
                    prop_assert_eq!(outcome.exact_value(), exact);
                    prop_assert_eq!(outcome.overflowed(), exact.abs() > MAX as i128);
                    if !outcome.overflowed() {
                        prop_assert_eq!(outcome.word.to_i64() as i128, exact);
                    }
                }

                #[test]
                fn sub_matches_native(a in -MAX..=MAX, b in -MAX..=MAX) {
                    let outcome = sub(
                        BalancedWord::<W>::from_i64(a).unwrap(),
                        BalancedWord::<W>::from_i64(b).unwrap(),
                    );
                    let exact = a as i128 - b as i128;
                    prop_assert_eq!(outcome.exact_value(), exact);
                    prop_assert_eq!(outcome.overflowed(), exact.abs() > MAX as i128);
                }

                #[test]
                fn not_is_an_involution(w in any_balanced::<W>()) {
                    prop_assert_eq!(not(not(w)), w);
                    prop_assert_eq!(not(w).to_i64(), -w.to_i64());
                }

                #[test]
                fn logic_is_positionwise(a in any_balanced::<W>(), b in any_balanced::<W>()) {
                    let (and_word, or_word, xor_word) = (and(a, b), or(a, b), xor(a, b));
                    for i in 0..<W as Width>::TRITS {
                        prop_assert_eq!(and_word.trit(i), a.trit(i).and(b.trit(i)));
                        prop_assert_eq!(or_word.trit(i), a.trit(i).or(b.trit(i)));
                        prop_assert_eq!(xor_word.trit(i), a.trit(i).xor(b.trit(i)));
                    }
                }

                #[test]
                fn shifts_saturate(w in any_balanced::<W>(), extra in 0usize..64) {
                    let n = <W as Width>::TRITS + extra;
                    prop_assert!(shift_left(w, n).is_zero());
                    prop_assert!(shift_right(w, n).is_zero());
                    prop_assert_eq!(shift_left(w, 0), w);
                    prop_assert_eq!(shift_right(w, 0), w);
                }

                #[test]
                fn shift_left_multiplies_by_three(v in -(MAX / 3)..=(MAX / 3)) {
                    let word = BalancedWord::<W>::from_i64(v).unwrap();
                    prop_assert_eq!(shift_left(word, 1).to_i64(), 3 * v);
                    prop_assert_eq!(shift_right(shift_left(word, 1), 1), word);
                }
            }
        }
    };
}

width_properties!(trit8, Trit8, u16, i16);
width_properties!(trit16, Trit16, u32, i32);
width_properties!(trit32, Trit32, u64, i64);

proptest! {
    /// Every 16-bit pattern is a valid balanced word exactly when no slot
    /// holds the reserved symbol 0b10.
    #[test]
    fn balanced_validation_matches_slots(bits: u16) {
        let expected = (0..8).all(|i| (bits >> (2 * i)) & 0b11 != 0b10);
        prop_assert_eq!(BalancedWord::<Trit8>::from_bits(bits).is_ok(), expected);
    }

    /// Likewise for unbalanced words and the reserved symbol 0b11.
    #[test]
    fn unbalanced_validation_matches_slots(bits: u32) {
        let expected = (0..16).all(|i| (bits >> (2 * i)) & 0b11 != 0b11);
        prop_assert_eq!(UnbalancedWord::<Trit16>::from_bits(bits).is_ok(), expected);
    }

    /// u32 inputs always fit 32 trits, so sums never overflow.
    #[test]
    fn u32_add_on_trit32(a: u32, b: u32) {
        let x = binary_to_balanced::<Trit32>(a as u64).unwrap();
        let y = binary_to_balanced::<Trit32>(b as u64).unwrap();
        let sum = add(x, y).checked().unwrap();
        prop_assert_eq!(balanced_to_binary(sum), a as i64 + b as i64);
    }

    /// u32 differences may be negative; balanced ternary needs no sign trit.
    #[test]
    fn u32_sub_on_trit32(a: u32, b: u32) {
        let x = binary_to_balanced::<Trit32>(a as u64).unwrap();
        let y = binary_to_balanced::<Trit32>(b as u64).unwrap();
        let difference = sub(x, y).checked().unwrap();
        prop_assert_eq!(balanced_to_binary(difference), a as i64 - b as i64);
    }
}

#[test]
fn five_in_both_alphabets() {
    let unbalanced = binary_to_unbalanced::<Trit8>(5).unwrap();
    assert_eq!(&unbalanced.unpack().as_slice()[..2], &[2, 1]);
    assert_eq!(unbalanced_to_binary(unbalanced), 5);

    let balanced = binary_to_balanced::<Trit8>(5).unwrap();
    assert_eq!(
        balanced.trits().take(3).collect::<Vec<_>>(),
        vec![Trit::N, Trit::N, Trit::P]
    );
    assert_eq!(balanced_to_binary(balanced), 5);
}

#[test]
fn two_plus_three() {
    let a = binary_to_balanced::<Trit8>(2).unwrap();
    let b = binary_to_balanced::<Trit8>(3).unwrap();
    assert_eq!(balanced_to_binary(add(a, b).word), 5);
}

#[test]
fn shift_one_left() {
    let one = binary_to_balanced::<Trit8>(1).unwrap();
    assert_eq!(balanced_to_binary(shift_left(one, 1)), 3);
}

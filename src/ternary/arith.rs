//! Balanced ternary addition and subtraction.
//!
//! Words are added trit by trit, least significant first, with a carry in
//! {-1, 0, +1} rippling upward through [`Trit::full_add`]. Subtraction adds
//! the digit-wise negation, which is exact in balanced ternary, so no borrow
//! logic is needed.

use serde::Serialize;

use crate::ternary::error::TernaryError;
use crate::ternary::width::Width;
use crate::ternary::word::BalancedWord;
use crate::ternary::Trit;

/// Result of an addition or subtraction.
///
/// The word is always the sum truncated to N trits. A non-zero `carry` means
/// the exact result did not fit.
#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct AddOutcome<W: Width> {
    /// The N-trit result.
    pub word: BalancedWord<W>,
    /// Carry out of the most significant trit.
    pub carry: Trit,
}

impl<W: Width> AddOutcome<W> {
    /// Returns true if the exact result is outside the word's range.
    #[inline]
    pub fn overflowed(&self) -> bool {
        !self.carry.is_zero()
    }

    /// The result word, or `NumericOverflow` carrying the exact value.
    pub fn checked(self) -> Result<BalancedWord<W>, TernaryError> {
        if self.overflowed() {
            return Err(TernaryError::NumericOverflow {
                value: self.exact_value(),
                trits: W::TRITS,
            });
        }
        Ok(self.word)
    }

    /// The untruncated result: word value plus `carry * 3^N`.
    pub fn exact_value(&self) -> i128 {
        self.word.to_i64() as i128 + self.carry.to_i8() as i128 * 3i128.pow(W::TRITS as u32)
    }
}

impl<W: Width> std::fmt::Debug for AddOutcome<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddOutcome")
            .field("word", &self.word)
            .field("carry", &self.carry)
            .finish()
    }
}

/// Add two balanced words.
pub fn add<W: Width>(a: BalancedWord<W>, b: BalancedWord<W>) -> AddOutcome<W> {
    let mut trits = [Trit::O; crate::ternary::width::MAX_TRITS];
    let mut carry = Trit::O;

    for (i, (x, y)) in a.trits().zip(b.trits()).enumerate() {
        let (sum, new_carry) = x.full_add(y, carry);
        trits[i] = sum;
        carry = new_carry;
    }

    AddOutcome {
        word: BalancedWord::from_trits(trits),
        carry,
    }
}

/// Subtract two balanced words (a - b).
#[inline]
pub fn sub<W: Width>(a: BalancedWord<W>, b: BalancedWord<W>) -> AddOutcome<W> {
    add(a, b.neg())
}

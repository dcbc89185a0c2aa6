//! Conversions between binary integers, unbalanced ternary and balanced
//! ternary.
//!
//! Binary values become words by extracting base-3 remainders into a
//! [`DigitArray`]. Unbalanced digits pack directly; balanced digits first go
//! through [`normalize_carries`], which rewrites each 2 as -1 plus a carry
//! into the next trit. The same pass converts unbalanced words to balanced
//! ones without a detour through binary.

use crate::ternary::error::TernaryError;
use crate::ternary::width::Width;
use crate::ternary::word::{BalancedWord, DigitArray, UnbalancedWord};

/// Extract the base-3 digits of `value`, least significant first.
///
/// Fails if `value` needs more than N digits.
pub fn extract_digits<W: Width>(value: u64) -> Result<DigitArray, TernaryError> {
    let mut digits = DigitArray::for_width::<W>();
    let mut rest = value;
    for digit in digits.as_mut_slice() {
        if rest == 0 {
            break;
        }
        *digit = (rest % 3) as i8;
        rest /= 3;
    }
    if rest != 0 {
        return Err(TernaryError::NumericOverflow {
            value: value as i128,
            trits: W::TRITS,
        });
    }
    Ok(digits)
}

/// Rewrite unbalanced digits {0, 1, 2} as balanced digits {-1, 0, 1} in place.
///
/// Scans from the least significant digit. A 2 becomes -1 and a 3 (a 2 that
/// received a carry) becomes 0, each passing +1 to the next digit. A carry
/// out of the most significant digit is an overflow. Digits outside
/// {0, 1, 2} are rejected before anything is rewritten.
pub fn normalize_carries(digits: &mut DigitArray) -> Result<(), TernaryError> {
    if let Some((position, &digit)) = digits
        .as_slice()
        .iter()
        .enumerate()
        .find(|(_, digit)| !(0..=2).contains(*digit))
    {
        return Err(TernaryError::InvalidDigit {
            position,
            digit,
            alphabet: "unbalanced",
        });
    }
    let mut carry = 0i8;
    for digit in digits.as_mut_slice() {
        let value = *digit + carry;
        (*digit, carry) = match value {
            3 => (0, 1),
            2 => (-1, 1),
            other => (other, 0),
        };
    }
    if carry != 0 {
        return Err(TernaryError::NumericOverflow {
            value: digits_value(digits.as_slice()) + 3i128.pow(digits.len() as u32),
            trits: digits.len(),
        });
    }
    Ok(())
}

/// Positional value of little-endian digits.
fn digits_value(digits: &[i8]) -> i128 {
    digits
        .iter()
        .rev()
        .fold(0i128, |acc, &digit| acc * 3 + digit as i128)
}

/// Encode a binary integer as an unbalanced ternary word.
pub fn binary_to_unbalanced<W: Width>(value: W::Unsigned) -> Result<UnbalancedWord<W>, TernaryError> {
    UnbalancedWord::from_u64(value.into())
}

/// Encode a non-negative binary integer as a balanced ternary word.
pub fn binary_to_balanced<W: Width>(value: W::Unsigned) -> Result<BalancedWord<W>, TernaryError> {
    let value: u64 = value.into();
    let mut digits = extract_digits::<W>(value)?;
    normalize_carries(&mut digits).map_err(|_| TernaryError::NumericOverflow {
        value: value as i128,
        trits: W::TRITS,
    })?;
    BalancedWord::pack(&digits)
}

/// Encode a signed binary integer as a balanced ternary word.
pub fn signed_to_balanced<W: Width>(value: W::Signed) -> Result<BalancedWord<W>, TernaryError> {
    BalancedWord::from_i64(value.into())
}

/// Convert an unbalanced word to the balanced word of the same value.
pub fn unbalanced_to_balanced<W: Width>(word: UnbalancedWord<W>) -> Result<BalancedWord<W>, TernaryError> {
    let mut digits = word.unpack();
    normalize_carries(&mut digits)?;
    BalancedWord::pack(&digits)
}

/// Convert a balanced word to the unbalanced word of the same value.
///
/// Goes through binary. Fails for negative values, which have no unbalanced
/// representation.
pub fn balanced_to_unbalanced<W: Width>(word: BalancedWord<W>) -> Result<UnbalancedWord<W>, TernaryError> {
    let value = word.to_i64();
    let magnitude = u64::try_from(value).map_err(|_| TernaryError::NumericOverflow {
        value: value as i128,
        trits: W::TRITS,
    })?;
    UnbalancedWord::from_u64(magnitude)
}

/// Decode an unbalanced word to a binary integer.
pub fn unbalanced_to_binary<W: Width>(word: UnbalancedWord<W>) -> W::Unsigned {
    W::unsigned_from_u64(word.to_u64())
}

/// Decode a balanced word to a signed binary integer.
pub fn balanced_to_binary<W: Width>(word: BalancedWord<W>) -> W::Signed {
    W::signed_from_i64(word.to_i64())
}

impl<W: Width> UnbalancedWord<W> {
    /// Encode any value up to `3^N - 1`.
    pub fn from_u64(value: u64) -> Result<Self, TernaryError> {
        let digits = extract_digits::<W>(value)?;
        Self::pack(&digits)
    }

    /// Decode to a binary integer.
    pub fn to_u64(&self) -> u64 {
        let mut result: u64 = 0;
        let mut power: u64 = 1;

        for digit in self.unpack().as_slice() {
            result += *digit as u64 * power;
            power *= 3;
        }

        result
    }
}

impl<W: Width> BalancedWord<W> {
    /// Encode any value in `[-(3^N - 1)/2, (3^N - 1)/2]`.
    pub fn from_i64(value: i64) -> Result<Self, TernaryError> {
        if value.unsigned_abs() > W::MAX_BALANCED as u64 {
            return Err(TernaryError::NumericOverflow {
                value: value as i128,
                trits: W::TRITS,
            });
        }

        let mut digits = extract_digits::<W>(value.unsigned_abs())?;
        normalize_carries(&mut digits)?;
        let word = Self::pack(&digits)?;

        if value < 0 {
            Ok(word.neg())
        } else {
            Ok(word)
        }
    }

    /// Decode to a signed binary integer.
    pub fn to_i64(&self) -> i64 {
        let mut result: i64 = 0;
        let mut power: i64 = 1;

        for trit in self.trits() {
            result += trit.to_i8() as i64 * power;
            power *= 3;
        }

        result
    }
}

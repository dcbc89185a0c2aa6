//! Trit-wise logic and shifts.
//!
//! Each logic operation combines the two inputs position by position using
//! the digit tables on [`Trit`]. There is no carry, so positions are
//! independent. The tables are not min/max ternary logic: `N or O` is N and
//! `O xor O` is N.

use crate::ternary::width::Width;
use crate::ternary::word::BalancedWord;
use crate::ternary::Trit;

/// Trait for types that support trit-wise logic.
pub trait TritOps {
    /// The output type for operations that return a value of the same size.
    type Output;

    /// Trit-wise NOT (flip N ↔ P).
    fn ternary_not(&self) -> Self::Output;

    /// Trit-wise AND.
    fn ternary_and(&self, other: &Self) -> Self::Output;

    /// Trit-wise OR.
    fn ternary_or(&self, other: &Self) -> Self::Output;

    /// Trit-wise XOR.
    fn ternary_xor(&self, other: &Self) -> Self::Output;
}

impl TritOps for Trit {
    type Output = Trit;

    #[inline]
    fn ternary_not(&self) -> Trit {
        Trit::not(*self)
    }

    #[inline]
    fn ternary_and(&self, other: &Self) -> Trit {
        Trit::and(*self, *other)
    }

    #[inline]
    fn ternary_or(&self, other: &Self) -> Trit {
        Trit::or(*self, *other)
    }

    #[inline]
    fn ternary_xor(&self, other: &Self) -> Trit {
        Trit::xor(*self, *other)
    }
}

impl<W: Width> BalancedWord<W> {
    /// Apply `f` to each pair of trits at the same position.
    fn zip_with(&self, other: &Self, f: impl Fn(Trit, Trit) -> Trit) -> Self {
        Self::from_trits(self.trits().zip(other.trits()).map(|(a, b)| f(a, b)))
    }

    /// Negate all trits.
    pub fn neg(&self) -> Self {
        Self::from_trits(self.trits().map(Trit::neg))
    }

    /// Shift toward the most significant trit by `n` positions (multiply by
    /// 3^n, truncating). Vacated low trits are zero.
    pub fn shift_left(&self, n: usize) -> Self {
        if n >= W::TRITS {
            return Self::zero();
        }
        Self::from_valid_bits((self.to_u64_bits() << (2 * n)) & W::MASK)
    }

    /// Shift toward the least significant trit by `n` positions. Vacated
    /// high trits are zero; there is no sign extension.
    pub fn shift_right(&self, n: usize) -> Self {
        if n >= W::TRITS {
            return Self::zero();
        }
        Self::from_valid_bits(self.to_u64_bits() >> (2 * n))
    }
}

impl<W: Width> TritOps for BalancedWord<W> {
    type Output = Self;

    fn ternary_not(&self) -> Self {
        self.neg()
    }

    fn ternary_and(&self, other: &Self) -> Self {
        self.zip_with(other, Trit::and)
    }

    fn ternary_or(&self, other: &Self) -> Self {
        self.zip_with(other, Trit::or)
    }

    fn ternary_xor(&self, other: &Self) -> Self {
        self.zip_with(other, Trit::xor)
    }
}

impl<W: Width> std::ops::Neg for BalancedWord<W> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        BalancedWord::neg(&self)
    }
}

/// Trit-wise AND of two balanced words.
#[inline]
pub fn and<W: Width>(a: BalancedWord<W>, b: BalancedWord<W>) -> BalancedWord<W> {
    a.ternary_and(&b)
}

/// Trit-wise OR of two balanced words.
#[inline]
pub fn or<W: Width>(a: BalancedWord<W>, b: BalancedWord<W>) -> BalancedWord<W> {
    a.ternary_or(&b)
}

/// Trit-wise XOR of two balanced words.
#[inline]
pub fn xor<W: Width>(a: BalancedWord<W>, b: BalancedWord<W>) -> BalancedWord<W> {
    a.ternary_xor(&b)
}

/// Trit-wise NOT of a balanced word.
#[inline]
pub fn not<W: Width>(a: BalancedWord<W>) -> BalancedWord<W> {
    a.ternary_not()
}

/// Shift a word left by `n` trits. Shifts of N or more give zero.
#[inline]
pub fn shift_left<W: Width>(a: BalancedWord<W>, n: usize) -> BalancedWord<W> {
    a.shift_left(n)
}

/// Shift a word right by `n` trits. Shifts of N or more give zero.
#[inline]
pub fn shift_right<W: Width>(a: BalancedWord<W>, n: usize) -> BalancedWord<W> {
    a.shift_right(n)
}

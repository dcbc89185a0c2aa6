//! Single balanced ternary digit (trit).
//!
//! A trit holds one of three values: -1, 0, or +1. Inside a packed word each
//! trit occupies one 2-bit slot:
//! - `0b00` = 0 (Zero)
//! - `0b01` = +1 (Positive)
//! - `0b11` = -1 (Negative)
//! - `0b10` = reserved, never a balanced digit

use std::fmt;
use serde::{Serialize, Deserialize};

use crate::ternary::word::symbol;

/// A single balanced ternary digit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Trit {
    /// Negative (-1)
    N = symbol::NEG,
    /// Zero (0)
    #[default]
    O = symbol::ZERO,
    /// Positive (+1)
    P = symbol::ONE,
}

impl Trit {
    /// All possible trit values in order: N, O, P
    pub const ALL: [Trit; 3] = [Trit::N, Trit::O, Trit::P];

    /// Decode a 2-bit balanced symbol. Returns `None` for the reserved symbol.
    #[inline]
    pub const fn from_symbol(bits: u8) -> Option<Self> {
        match bits & 0b11 {
            symbol::ZERO => Some(Trit::O),
            symbol::ONE => Some(Trit::P),
            symbol::NEG => Some(Trit::N),
            _ => None,
        }
    }

    /// The 2-bit balanced symbol for this trit.
    #[inline]
    pub const fn to_symbol(self) -> u8 {
        self as u8
    }

    /// Create a trit from an integer value in {-1, 0, 1}.
    #[inline]
    pub const fn from_i8(value: i8) -> Option<Self> {
        match value {
            -1 => Some(Trit::N),
            0 => Some(Trit::O),
            1 => Some(Trit::P),
            _ => None,
        }
    }

    /// Convert to integer value.
    #[inline]
    pub const fn to_i8(self) -> i8 {
        match self {
            Trit::N => -1,
            Trit::O => 0,
            Trit::P => 1,
        }
    }

    /// Negate the trit (flip N ↔ P, O stays O).
    #[inline]
    pub const fn neg(self) -> Self {
        match self {
            Trit::N => Trit::P,
            Trit::O => Trit::O,
            Trit::P => Trit::N,
        }
    }

    /// Pairwise digit sum, ignoring any carry.
    #[inline]
    pub const fn sum(self, other: Self) -> Self {
        match (self, other) {
            (Trit::N, Trit::N) | (Trit::O, Trit::P) | (Trit::P, Trit::O) => Trit::P,
            (Trit::O, Trit::O) | (Trit::P, Trit::N) | (Trit::N, Trit::P) => Trit::O,
            (Trit::P, Trit::P) | (Trit::N, Trit::O) | (Trit::O, Trit::N) => Trit::N,
        }
    }

    /// Fold an incoming carry into a digit sum.
    ///
    /// A positive carry rotates P → N → O → P, a negative carry rotates
    /// the other way.
    #[inline]
    pub const fn rotate(self, carry: Self) -> Self {
        match (carry, self) {
            (Trit::O, digit) => digit,
            (Trit::P, Trit::P) => Trit::N,
            (Trit::P, Trit::O) => Trit::P,
            (Trit::P, Trit::N) => Trit::O,
            (Trit::N, Trit::P) => Trit::O,
            (Trit::N, Trit::O) => Trit::N,
            (Trit::N, Trit::N) => Trit::P,
        }
    }

    /// Full adder: adds three trits (a, b, c_in), returns (sum, carry_out).
    ///
    /// The carry out is decided by a vote over the three inputs: it is P when
    /// at least two inputs are P and none is N, N when no input is P and at
    /// most one is O, and O otherwise.
    #[inline]
    pub const fn full_add(self, other: Self, carry_in: Self) -> (Self, Self) {
        let digit = self.sum(other).rotate(carry_in);

        let inputs = [self, other, carry_in];
        let mut positive = 0;
        let mut zero = 0;
        let mut negative = 0;
        let mut i = 0;
        while i < inputs.len() {
            match inputs[i] {
                Trit::P => positive += 1,
                Trit::O => zero += 1,
                Trit::N => negative += 1,
            }
            i += 1;
        }

        let carry_out = if positive > 1 && negative == 0 {
            Trit::P
        } else if zero > 1 || positive >= 1 {
            Trit::O
        } else {
            Trit::N
        };

        (digit, carry_out)
    }

    /// Trit-wise NOT: sign flip.
    #[inline]
    pub const fn not(self) -> Self {
        self.neg()
    }

    /// Trit-wise OR: O when both are O, else P when either is P, else N.
    ///
    /// Note that `N or O` is N, unlike a max-based ternary OR.
    #[inline]
    pub const fn or(self, other: Self) -> Self {
        match (self, other) {
            (Trit::O, Trit::O) => Trit::O,
            (Trit::P, _) | (_, Trit::P) => Trit::P,
            _ => Trit::N,
        }
    }

    /// Trit-wise AND: P when both are P, else N when either is N, else O.
    #[inline]
    pub const fn and(self, other: Self) -> Self {
        match (self, other) {
            (Trit::P, Trit::P) => Trit::P,
            (Trit::N, _) | (_, Trit::N) => Trit::N,
            _ => Trit::O,
        }
    }

    /// Trit-wise XOR: N when both are equal (including `O xor O`), else O
    /// when either is O, else P.
    #[inline]
    pub const fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Trit::P, Trit::P) | (Trit::O, Trit::O) | (Trit::N, Trit::N) => Trit::N,
            (Trit::O, _) | (_, Trit::O) => Trit::O,
            _ => Trit::P,
        }
    }

    /// Returns true if this trit is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Trit::O)
    }
}

impl fmt::Debug for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::N => write!(f, "N"),
            Trit::O => write!(f, "O"),
            Trit::P => write!(f, "P"),
        }
    }
}

impl std::ops::Neg for Trit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Trit::neg(self)
    }
}

impl From<Trit> for i8 {
    fn from(trit: Trit) -> Self {
        trit.to_i8()
    }
}

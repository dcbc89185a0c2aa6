//! Packed ternary numerals.
//!
//! This module provides the core types and operations:
//! - [`Trit`] - A single balanced ternary digit (-1, 0, +1)
//! - [`Width`] - The trit count of a word: [`Trit8`], [`Trit16`], [`Trit32`]
//! - [`PackedWord`] - N trits packed two bits each, tagged as
//!   [`BalancedWord`] or [`UnbalancedWord`]
//! - [`convert`] - binary / unbalanced / balanced conversions
//! - [`arith`] - addition and subtraction on balanced words
//! - [`ops`] - trit-wise logic and shifts on balanced words

mod error;
mod trit;
mod width;
pub mod word;
pub mod convert;
pub mod arith;
pub mod ops;

pub use error::TernaryError;
pub use trit::Trit;
pub use width::{Width, Trit8, Trit16, Trit32, MAX_TRITS};
pub use word::{Alphabet, Balanced, Unbalanced, BalancedWord, UnbalancedWord, PackedWord, DigitArray, validate};
pub use convert::{
    binary_to_unbalanced, binary_to_balanced, signed_to_balanced,
    unbalanced_to_balanced, balanced_to_unbalanced,
    unbalanced_to_binary, balanced_to_binary,
};
pub use arith::{add, sub, AddOutcome};
pub use ops::{and, or, xor, not, shift_left, shift_right, TritOps};

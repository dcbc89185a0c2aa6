//! # Ternary Engine
//!
//! Fixed-width balanced and unbalanced ternary numerals.
//!
//! Words of 8, 16 or 32 trits are packed two bits per trit into a native
//! unsigned integer. The crate converts between binary integers, unbalanced
//! ternary (digits 0, 1, 2) and balanced ternary (digits -1, 0, +1), and adds,
//! subtracts and combines balanced words trit by trit without going back
//! through binary.
//!
//! ```
//! use ternary::{add, balanced_to_binary, binary_to_balanced, Trit8};
//!
//! let a = binary_to_balanced::<Trit8>(2).unwrap();
//! let b = binary_to_balanced::<Trit8>(3).unwrap();
//! let sum = add(a, b);
//! assert!(!sum.overflowed());
//! assert_eq!(balanced_to_binary(sum.word), 5);
//! ```

pub mod ternary;

// Re-export commonly used types
pub use ternary::{
    Trit, Width, Trit8, Trit16, Trit32,
    Alphabet, Balanced, Unbalanced, PackedWord, BalancedWord, UnbalancedWord, DigitArray,
    TernaryError, AddOutcome, TritOps,
};
pub use ternary::{
    binary_to_unbalanced, binary_to_balanced, signed_to_balanced,
    unbalanced_to_balanced, balanced_to_unbalanced,
    unbalanced_to_binary, balanced_to_binary,
    add, sub, and, or, xor, not, shift_left, shift_right,
};

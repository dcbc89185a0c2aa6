//! Errors raised by the ternary engine.

use thiserror::Error;

/// Errors that can occur when building, converting or combining packed words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TernaryError {
    /// A 2-bit slot holds the symbol reserved by the word's alphabet
    /// (`0b11` for unbalanced words, `0b10` for balanced words).
    #[error("invalid {alphabet} symbol 0b{symbol:02b} at trit {position}")]
    InvalidDigitSymbol {
        position: usize,
        symbol: u8,
        alphabet: &'static str,
    },

    /// A digit array holds a value the alphabet cannot encode.
    #[error("digit {digit} at trit {position} is not a valid {alphabet} digit")]
    InvalidDigit {
        position: usize,
        digit: i8,
        alphabet: &'static str,
    },

    /// A digit array has the wrong number of digits for the target word.
    #[error("expected {expected} digits, got {actual}")]
    DigitCount { expected: usize, actual: usize },

    /// The value does not fit in the word, or an addition carried out of
    /// the most significant trit.
    #[error("value {value} does not fit in {trits} trits")]
    NumericOverflow { value: i128, trits: usize },
}

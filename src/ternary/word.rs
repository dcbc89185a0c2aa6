//! Packed trit words.
//!
//! A word of width N stores N trits at two bits each, least significant trit
//! at bit offset 0. The same 2-bit symbols serve two alphabets:
//! - unbalanced: `0b00` = 0, `0b01` = 1, `0b10` = 2, `0b11` reserved
//! - balanced: `0b00` = 0, `0b01` = +1, `0b11` = -1, `0b10` reserved
//!
//! [`PackedWord`] is tagged with both its [`Width`] and its [`Alphabet`], so
//! a balanced word can never be handed to an operation expecting an
//! unbalanced one. Every constructor that accepts raw bits validates them.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ternary::error::TernaryError;
use crate::ternary::width::{Width, MAX_TRITS};
use crate::ternary::Trit;

/// The 2-bit slot symbols.
pub mod symbol {
    /// Digit 0 in both alphabets.
    pub const ZERO: u8 = 0b00;
    /// Digit 1 in both alphabets.
    pub const ONE: u8 = 0b01;
    /// Digit 2 (unbalanced only).
    pub const TWO: u8 = 0b10;
    /// Digit -1 (balanced only).
    pub const NEG: u8 = 0b11;
}

/// Digit alphabet of a packed word.
pub trait Alphabet: Copy + Eq + Hash + fmt::Debug + Default + 'static {
    /// Human-readable name used in errors.
    const NAME: &'static str;

    /// The symbol this alphabet never uses.
    const RESERVED: u8;

    /// Symbol for a digit value, or `None` if the digit is not in the alphabet.
    fn encode(digit: i8) -> Option<u8>;

    /// Digit value of a symbol, or `None` for the reserved symbol.
    fn decode(symbol: u8) -> Option<i8>;
}

/// Digits {-1, 0, +1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Balanced;

/// Digits {0, 1, 2}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unbalanced;

impl Alphabet for Balanced {
    const NAME: &'static str = "balanced";
    const RESERVED: u8 = symbol::TWO;

    #[inline]
    fn encode(digit: i8) -> Option<u8> {
        Trit::from_i8(digit).map(Trit::to_symbol)
    }

    #[inline]
    fn decode(symbol: u8) -> Option<i8> {
        Trit::from_symbol(symbol).map(Trit::to_i8)
    }
}

impl Alphabet for Unbalanced {
    const NAME: &'static str = "unbalanced";
    const RESERVED: u8 = symbol::NEG;

    #[inline]
    fn encode(digit: i8) -> Option<u8> {
        match digit {
            0 => Some(symbol::ZERO),
            1 => Some(symbol::ONE),
            2 => Some(symbol::TWO),
            _ => None,
        }
    }

    #[inline]
    fn decode(bits: u8) -> Option<i8> {
        match bits & 0b11 {
            symbol::ZERO => Some(0),
            symbol::ONE => Some(1),
            symbol::TWO => Some(2),
            _ => None,
        }
    }
}

/// Transient per-trit digits, index 0 = least significant trit.
///
/// Digits are plain integers so intermediate values outside either alphabet
/// (such as a 3 produced by an incoming carry) can be held before they are
/// normalized and packed.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DigitArray {
    digits: [i8; MAX_TRITS],
    len: usize,
}

impl DigitArray {
    /// An all-zero array of `len` digits.
    ///
    /// Fails if `len` exceeds [`MAX_TRITS`].
    pub fn zeroed(len: usize) -> Result<Self, TernaryError> {
        if len > MAX_TRITS {
            return Err(TernaryError::DigitCount {
                expected: MAX_TRITS,
                actual: len,
            });
        }
        Ok(Self {
            digits: [0; MAX_TRITS],
            len,
        })
    }

    /// An all-zero array sized for width `W`.
    pub(crate) fn for_width<W: Width>() -> Self {
        Self {
            digits: [0; MAX_TRITS],
            len: W::TRITS,
        }
    }

    /// Build from a slice of digits (index 0 = least significant).
    ///
    /// Fails if the slice is longer than [`MAX_TRITS`].
    pub fn from_slice(digits: &[i8]) -> Result<Self, TernaryError> {
        let mut array = Self::zeroed(digits.len())?;
        array.digits[..array.len].copy_from_slice(digits);
        Ok(array)
    }

    /// Number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the array holds no digits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The digits, least significant first.
    #[inline]
    pub fn as_slice(&self) -> &[i8] {
        &self.digits[..self.len]
    }

    /// Mutable access to the digits.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i8] {
        &mut self.digits[..self.len]
    }

    /// The digits, most significant first.
    pub fn to_msb_first(&self) -> Vec<i8> {
        self.as_slice().iter().rev().copied().collect()
    }
}

impl fmt::Debug for DigitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Check that every slot of `bits` holds a symbol valid for alphabet `A`.
///
/// Bits above the word's `2N` bits must be clear. Fails on the lowest
/// offending trit.
pub fn validate<W: Width, A: Alphabet>(bits: u64) -> Result<(), TernaryError> {
    if bits & !W::MASK != 0 {
        return Err(TernaryError::NumericOverflow {
            value: bits as i128,
            trits: W::TRITS,
        });
    }
    for position in 0..W::TRITS {
        let slot = ((bits >> (2 * position)) & 0b11) as u8;
        if slot == A::RESERVED {
            return Err(TernaryError::InvalidDigitSymbol {
                position,
                symbol: slot,
                alphabet: A::NAME,
            });
        }
    }
    Ok(())
}

/// N trits of alphabet `A` packed into `2N` bits.
pub struct PackedWord<W: Width, A: Alphabet> {
    bits: u64,
    _marker: PhantomData<(W, A)>,
}

/// A balanced ternary word (digits -1, 0, +1).
pub type BalancedWord<W> = PackedWord<W, Balanced>;

/// An unbalanced ternary word (digits 0, 1, 2).
pub type UnbalancedWord<W> = PackedWord<W, Unbalanced>;

impl<W: Width, A: Alphabet> PackedWord<W, A> {
    /// Number of trits in the word.
    pub const WIDTH: usize = W::TRITS;

    /// Wrap bits already known to be valid.
    #[inline]
    pub(crate) const fn from_valid_bits(bits: u64) -> Self {
        Self {
            bits,
            _marker: PhantomData,
        }
    }

    /// The all-zero word.
    #[inline]
    pub const fn zero() -> Self {
        Self::from_valid_bits(0)
    }

    /// Create a word from packed bits, validating every slot.
    pub fn from_bits(bits: W::Bits) -> Result<Self, TernaryError> {
        Self::from_u64_bits(bits.into())
    }

    /// Create a word from packed bits held in a `u64`.
    pub fn from_u64_bits(bits: u64) -> Result<Self, TernaryError> {
        validate::<W, A>(bits)?;
        Ok(Self::from_valid_bits(bits))
    }

    /// Returns true if `bits` is a valid word of this width and alphabet.
    pub fn is_valid(bits: W::Bits) -> bool {
        validate::<W, A>(bits.into()).is_ok()
    }

    /// The packed representation.
    #[inline]
    pub fn bits(&self) -> W::Bits {
        W::bits_from_u64(self.bits)
    }

    /// The packed representation widened to `u64`.
    #[inline]
    pub const fn to_u64_bits(&self) -> u64 {
        self.bits
    }

    /// The 2-bit symbol at `index` (0 = least significant trit).
    ///
    /// # Panics
    /// Panics if `index >= N`.
    #[inline]
    pub fn symbol(&self, index: usize) -> u8 {
        assert!(index < W::TRITS, "trit index {} out of range for {} trits", index, W::TRITS);
        ((self.bits >> (2 * index)) & 0b11) as u8
    }

    /// Returns true if every trit is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.bits == 0
    }

    /// Pack a digit array into a word.
    ///
    /// `digits[i]` lands in slot i, so the last digit occupies the most
    /// significant slot. The array must hold exactly N digits.
    pub fn pack(digits: &DigitArray) -> Result<Self, TernaryError> {
        if digits.len() != W::TRITS {
            return Err(TernaryError::DigitCount {
                expected: W::TRITS,
                actual: digits.len(),
            });
        }
        let mut bits = 0u64;
        for (position, &digit) in digits.as_slice().iter().enumerate().rev() {
            let symbol = A::encode(digit).ok_or(TernaryError::InvalidDigit {
                position,
                digit,
                alphabet: A::NAME,
            })?;
            bits = (bits << 2) | symbol as u64;
        }
        Ok(Self::from_valid_bits(bits))
    }

    /// Unpack into per-trit digit values.
    pub fn unpack(&self) -> DigitArray {
        let mut digits = DigitArray::for_width::<W>();
        let mut bits = self.bits;
        for digit in digits.as_mut_slice() {
            // Slots were validated on construction.
            *digit = A::decode((bits & 0b11) as u8).unwrap_or_default();
            bits >>= 2;
        }
        digits
    }
}

impl<W: Width> BalancedWord<W> {
    /// The trit at `index` (0 = least significant).
    ///
    /// # Panics
    /// Panics if `index >= N`.
    #[inline]
    pub fn trit(&self, index: usize) -> Trit {
        Trit::from_symbol(self.symbol(index)).unwrap_or_default()
    }

    /// Iterate over trits, least significant first.
    pub fn trits(&self) -> impl Iterator<Item = Trit> + '_ {
        (0..W::TRITS).map(move |i| self.trit(i))
    }

    /// Build a word from trits, least significant first.
    ///
    /// Missing high trits are zero; trits beyond N are ignored.
    pub fn from_trits<I: IntoIterator<Item = Trit>>(trits: I) -> Self {
        let mut bits = 0u64;
        for (i, trit) in trits.into_iter().take(W::TRITS).enumerate() {
            bits |= (trit.to_symbol() as u64) << (2 * i);
        }
        Self::from_valid_bits(bits)
    }

    /// Get the sign of this word (the leading non-zero trit).
    pub fn sign(&self) -> Trit {
        (0..W::TRITS)
            .rev()
            .map(|i| self.trit(i))
            .find(|t| !t.is_zero())
            .unwrap_or(Trit::O)
    }
}

impl<W: Width> UnbalancedWord<W> {
    /// The digit (0, 1 or 2) at `index` (0 = least significant).
    ///
    /// # Panics
    /// Panics if `index >= N`.
    #[inline]
    pub fn digit(&self, index: usize) -> u8 {
        self.symbol(index)
    }
}

impl<W: Width, A: Alphabet> Clone for PackedWord<W, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: Width, A: Alphabet> Copy for PackedWord<W, A> {}

impl<W: Width, A: Alphabet> PartialEq for PackedWord<W, A> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<W: Width, A: Alphabet> Eq for PackedWord<W, A> {}

impl<W: Width, A: Alphabet> Hash for PackedWord<W, A> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<W: Width, A: Alphabet> Default for PackedWord<W, A> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<W: Width> fmt::Debug for BalancedWord<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BalancedWord<{}>({:#0w$x} = {})",
            W::TRITS,
            self.bits,
            self.to_i64(),
            w = (W::BITS / 4) as usize + 2
        )
    }
}

impl<W: Width> fmt::Debug for UnbalancedWord<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UnbalancedWord<{}>({:#0w$x} = {})",
            W::TRITS,
            self.bits,
            self.to_u64(),
            w = (W::BITS / 4) as usize + 2
        )
    }
}

impl<W: Width, A: Alphabet> Serialize for PackedWord<W, A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.bits)
    }
}

impl<'de, W: Width, A: Alphabet> Deserialize<'de> for PackedWord<W, A> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u64::deserialize(deserializer)?;
        Self::from_u64_bits(bits).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ternary::{Trit16, Trit32, Trit8};

    #[test]
    fn test_zero_word() {
        let zero = BalancedWord::<Trit8>::zero();
        assert!(zero.is_zero());
        assert_eq!(zero.bits(), 0u16);
        assert!(zero.trits().all(Trit::is_zero));
    }

    #[test]
    fn test_pack_places_last_digit_in_top_slot() {
        let mut digits = DigitArray::zeroed(8).unwrap();
        digits.as_mut_slice()[7] = 2;
        digits.as_mut_slice()[0] = 1;
        let word = UnbalancedWord::<Trit8>::pack(&digits).unwrap();
        assert_eq!(word.bits(), 0b10_00_00_00_00_00_00_01);
        assert_eq!(word.digit(7), 2);
        assert_eq!(word.digit(0), 1);
    }

    #[test]
    fn test_pack_unpack_balanced() {
        let digits = DigitArray::from_slice(&[-1, -1, 1, 0, 0, 0, 0, 0]).unwrap();
        let word = BalancedWord::<Trit8>::pack(&digits).unwrap();
        assert_eq!(word.bits(), 0b01_11_11);
        assert_eq!(word.unpack(), digits);
        assert_eq!(word.trit(0), Trit::N);
        assert_eq!(word.trit(2), Trit::P);
        assert_eq!(word.sign(), Trit::P);
    }

    #[test]
    fn test_pack_rejects_out_of_alphabet_digit() {
        let digits = DigitArray::from_slice(&[0, 2, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(
            BalancedWord::<Trit8>::pack(&digits),
            Err(TernaryError::InvalidDigit { position: 1, digit: 2, alphabet: "balanced" })
        );

        let digits = DigitArray::from_slice(&[0, 0, -1, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(
            UnbalancedWord::<Trit8>::pack(&digits),
            Err(TernaryError::InvalidDigit { position: 2, digit: -1, alphabet: "unbalanced" })
        );
    }

    #[test]
    fn test_pack_rejects_wrong_length() {
        let digits = DigitArray::zeroed(16).unwrap();
        assert_eq!(
            BalancedWord::<Trit8>::pack(&digits),
            Err(TernaryError::DigitCount { expected: 8, actual: 16 })
        );

        let digits = DigitArray::zeroed(4).unwrap();
        assert_eq!(
            UnbalancedWord::<Trit8>::pack(&digits),
            Err(TernaryError::DigitCount { expected: 8, actual: 4 })
        );
    }

    #[test]
    fn test_digit_array_rejects_more_than_max_trits() {
        let mut long = [0i8; 40];
        long[35] = 1;
        assert_eq!(
            DigitArray::from_slice(&long),
            Err(TernaryError::DigitCount { expected: MAX_TRITS, actual: 40 })
        );
        assert!(DigitArray::zeroed(MAX_TRITS + 1).is_err());

        let full = DigitArray::from_slice(&long[..MAX_TRITS]).unwrap();
        assert_eq!(full.len(), MAX_TRITS);
        assert!(BalancedWord::<Trit32>::pack(&full).unwrap().is_zero());
    }

    #[test]
    fn test_reserved_symbol_rejected() {
        // Slot 3 holds 0b10, reserved in the balanced alphabet.
        let bits: u16 = 0b10_00_00_00;
        assert_eq!(
            BalancedWord::<Trit8>::from_bits(bits),
            Err(TernaryError::InvalidDigitSymbol { position: 3, symbol: 0b10, alphabet: "balanced" })
        );
        // The same bits are a valid unbalanced word.
        assert!(UnbalancedWord::<Trit8>::from_bits(bits).is_ok());

        // Slot 0 holds 0b11, reserved in the unbalanced alphabet.
        assert_eq!(
            UnbalancedWord::<Trit16>::from_bits(0b11),
            Err(TernaryError::InvalidDigitSymbol { position: 0, symbol: 0b11, alphabet: "unbalanced" })
        );
        assert!(BalancedWord::<Trit16>::is_valid(0b11));
    }

    #[test]
    fn test_top_slot_is_validated() {
        let bits: u64 = 0b10 << 62;
        assert!(matches!(
            BalancedWord::<Trit32>::from_bits(bits),
            Err(TernaryError::InvalidDigitSymbol { position: 31, .. })
        ));
    }

    #[test]
    fn test_bits_beyond_width_rejected() {
        assert!(matches!(
            BalancedWord::<Trit8>::from_u64_bits(1 << 16),
            Err(TernaryError::NumericOverflow { trits: 8, .. })
        ));
    }

    #[test]
    fn test_from_trits_roundtrip() {
        let trits = [Trit::P, Trit::N, Trit::O, Trit::N];
        let word = BalancedWord::<Trit16>::from_trits(trits);
        let back: Vec<Trit> = word.trits().take(4).collect();
        assert_eq!(back, trits);
        assert!(word.trits().skip(4).all(Trit::is_zero));
    }

    #[test]
    fn test_digit_array_msb_first() {
        let digits = DigitArray::from_slice(&[2, 1, 0]).unwrap();
        assert_eq!(digits.to_msb_first(), vec![0, 1, 2]);
        assert_eq!(digits.len(), 3);
    }

    #[test]
    fn test_serde_validates() {
        let word = BalancedWord::<Trit8>::from_bits(0b01_11_11).unwrap();
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, "31");
        let back: BalancedWord<Trit8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);

        let bad: Result<BalancedWord<Trit8>, _> = serde_json::from_str("2");
        assert!(bad.is_err());
    }

    #[test]
    fn test_serde_validates_unbalanced() {
        let word = UnbalancedWord::<Trit8>::from_bits(0b10_01).unwrap();
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, "9");
        let back: UnbalancedWord<Trit8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);

        // Slot 1 holds 0b11, reserved in the unbalanced alphabet.
        let bad: Result<UnbalancedWord<Trit8>, _> = serde_json::from_str("12");
        assert!(bad.is_err());
    }

    #[test]
    fn test_serde_rejects_bits_beyond_width() {
        let bad: Result<BalancedWord<Trit8>, _> = serde_json::from_str("65536");
        assert!(bad.is_err());
        let bad: Result<UnbalancedWord<Trit8>, _> = serde_json::from_str("65536");
        assert!(bad.is_err());
    }
}

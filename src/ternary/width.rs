//! Word widths.
//!
//! The engine supports three fixed widths. Each is a zero-sized marker type
//! implementing [`Width`], which binds the trit count to the native integers
//! used for packed storage and for the binary side of conversions:
//!
//! | Marker   | Trits | Packed bits | Binary input | Decoded balanced |
//! |----------|-------|-------------|--------------|------------------|
//! | `Trit8`  | 8     | `u16`       | `u16`        | `i16`            |
//! | `Trit16` | 16    | `u32`       | `u32`        | `i32`            |
//! | `Trit32` | 32    | `u64`       | `u64`        | `i64`            |

use std::fmt::Debug;
use std::hash::Hash;

/// A fixed trit count together with its native integer types.
pub trait Width: Copy + Eq + Hash + Debug + Default + 'static {
    /// Number of trits in a word.
    const TRITS: usize;

    /// Bit width of the packed representation (two bits per trit).
    const BITS: u32;

    /// Mask covering every packed slot.
    const MASK: u64;

    /// Largest value an unbalanced word can hold: `3^N - 1`.
    const MAX_UNBALANCED: u64;

    /// Largest magnitude a balanced word can hold: `(3^N - 1) / 2`.
    const MAX_BALANCED: i64;

    /// Packed storage type.
    type Bits: Copy + Eq + Debug + Into<u64>;

    /// Binary integers accepted by the encoders.
    type Unsigned: Copy + Eq + Debug + Into<u64>;

    /// Binary integers produced by the balanced decoder.
    type Signed: Copy + Eq + Debug + Into<i64>;

    /// Narrow packed bits. Callers guarantee `bits & !MASK == 0`.
    fn bits_from_u64(bits: u64) -> Self::Bits;

    /// Narrow an unbalanced value. Callers guarantee `value <= MAX_UNBALANCED`.
    fn unsigned_from_u64(value: u64) -> Self::Unsigned;

    /// Narrow a balanced value. Callers guarantee `|value| <= MAX_BALANCED`.
    fn signed_from_i64(value: i64) -> Self::Signed;
}

macro_rules! impl_width {
    ($(#[$meta:meta])* $name:ident, $trits:expr, $bits:ty, $unsigned:ty, $signed:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name;

        impl Width for $name {
            const TRITS: usize = $trits;
            const BITS: u32 = 2 * $trits;
            const MASK: u64 = <$bits>::MAX as u64;
            const MAX_UNBALANCED: u64 = 3u64.pow($trits) - 1;
            const MAX_BALANCED: i64 = ((3u64.pow($trits) - 1) / 2) as i64;

            type Bits = $bits;
            type Unsigned = $unsigned;
            type Signed = $signed;

            #[inline]
            fn bits_from_u64(bits: u64) -> $bits {
                bits as $bits
            }

            #[inline]
            fn unsigned_from_u64(value: u64) -> $unsigned {
                value as $unsigned
            }

            #[inline]
            fn signed_from_i64(value: i64) -> $signed {
                value as $signed
            }
        }
    };
}

impl_width!(
    /// Eight trits packed into a `u16`.
    Trit8, 8, u16, u16, i16
);
impl_width!(
    /// Sixteen trits packed into a `u32`.
    Trit16, 16, u32, u32, i32
);
impl_width!(
    /// Thirty-two trits packed into a `u64`.
    Trit32, 32, u64, u64, i64
);

/// Upper bound on [`Width::TRITS`] across all widths.
pub const MAX_TRITS: usize = 32;

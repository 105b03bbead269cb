use core::fmt;
use core::hash::Hash;
use core::num::ParseIntError;
use core::str::FromStr;

use num_traits::PrimInt;

/// A primitive integer kind that `Checked` can wrap.
///
/// Implemented for exactly the twelve built-in integer types. The associated
/// constants describe the kind's range; the conversion engine reasons about
/// pairs of kinds purely through `BITS` and `SIGNED`.
pub trait Int:
    PrimInt
    + Default
    + Hash
    + fmt::Debug
    + fmt::Display
    + fmt::Binary
    + fmt::Octal
    + fmt::LowerHex
    + fmt::UpperHex
    + FromStr<Err = ParseIntError>
    + Send
    + Sync
    + 'static
{
    /// The unsigned kind of the same width.
    type Unsigned: Int;

    /// Width in bits.
    const BITS: u32;
    /// Whether the kind can hold negative values.
    const SIGNED: bool;
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;
    const ONE: Self;

    /// Sign- or zero-extends `self` to 128 bits.
    fn to_bits(self) -> u128;

    /// Keeps the low `BITS` bits of `bits`.
    fn from_bits(bits: u128) -> Self;

    fn overflowing_add(self, rhs: Self) -> (Self, bool);
    fn overflowing_sub(self, rhs: Self) -> (Self, bool);
    fn overflowing_mul(self, rhs: Self) -> (Self, bool);
    fn overflowing_div(self, rhs: Self) -> (Self, bool);
    fn overflowing_neg(self) -> (Self, bool);

    /// Truncating remainder; `MIN % -1` is zero instead of a panic.
    fn wrapping_rem(self, rhs: Self) -> Self;

    /// Magnitude in the unsigned kind, exact for `MIN`.
    fn unsigned_abs(self) -> Self::Unsigned;

    #[inline(always)]
    fn is_negative(self) -> bool {
        Self::SIGNED && self < Self::ZERO
    }

    /// Two's-complement reinterpretation between any two kinds, the same as
    /// an `as` cast.
    #[inline(always)]
    fn cast<U: Int>(self) -> U {
        U::from_bits(self.to_bits())
    }
}

macro_rules! impl_int {
    (signed $t:ty => $unsigned:ty) => {
        impl_int!(@impl $t, $unsigned, true, |v: $t| v.unsigned_abs());
    };
    (unsigned $t:ty) => {
        impl_int!(@impl $t, $t, false, |v: $t| v);
    };
    (@impl $t:ty, $unsigned:ty, $signed:literal, $abs:expr) => {
        impl Int for $t {
            type Unsigned = $unsigned;

            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = $signed;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline(always)]
            fn to_bits(self) -> u128 {
                // `as i128` extends by the source signedness
                self as i128 as u128
            }

            #[inline(always)]
            fn from_bits(bits: u128) -> Self {
                bits as $t
            }

            #[inline(always)]
            fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_add(self, rhs)
            }

            #[inline(always)]
            fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_sub(self, rhs)
            }

            #[inline(always)]
            fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_mul(self, rhs)
            }

            #[inline(always)]
            fn overflowing_div(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_div(self, rhs)
            }

            #[inline(always)]
            fn overflowing_neg(self) -> (Self, bool) {
                <$t>::overflowing_neg(self)
            }

            #[inline(always)]
            fn wrapping_rem(self, rhs: Self) -> Self {
                <$t>::wrapping_rem(self, rhs)
            }

            #[inline(always)]
            fn unsigned_abs(self) -> $unsigned {
                ($abs)(self)
            }
        }
    };
}

impl_int!(signed i8 => u8);
impl_int!(signed i16 => u16);
impl_int!(signed i32 => u32);
impl_int!(signed i64 => u64);
impl_int!(signed i128 => u128);
impl_int!(signed isize => usize);

impl_int!(unsigned u8);
impl_int!(unsigned u16);
impl_int!(unsigned u32);
impl_int!(unsigned u64);
impl_int!(unsigned u128);
impl_int!(unsigned usize);

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::{Product, Sum};
use core::marker::PhantomData;
use core::num::ParseIntError;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::convert::{Conversion, widen};
use crate::{Int, OverflowError, Policy, Saturate, Throw, Wrap};

/// An integer of kind `T` whose out-of-range results are handled by `P`.
///
/// The default policy is [`Throw`]. See [`Saturating`] and [`Wrapping`] for
/// the other two.
#[repr(transparent)]
pub struct Checked<T, P = Throw> {
    value: T,
    policy: PhantomData<P>,
}

/// An integer that clamps to its bounds on overflow.
pub type Saturating<T> = Checked<T, Saturate>;

/// An integer that wraps modulo 2^bits on overflow.
pub type Wrapping<T> = Checked<T, Wrap>;

// ============================================================================
// Constants
// ============================================================================

impl<T: Int, P: Policy> Checked<T, P> {
    /// The smallest value of `T`.
    pub const MIN: Self = Self::new(T::MIN);

    /// The largest value of `T`.
    pub const MAX: Self = Self::new(T::MAX);

    /// Zero
    pub const ZERO: Self = Self::new(T::ZERO);

    /// One
    pub const ONE: Self = Self::new(T::ONE);
}

// ============================================================================
// Constructors and Raw Access
// ============================================================================

impl<T: Clone, P> Clone for Checked<T, P> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            policy: PhantomData,
        }
    }
}

impl<T: Copy, P> Copy for Checked<T, P> {}

impl<T: Int, P: Policy> Default for Checked<T, P> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Int, P: Policy> Checked<T, P> {
    /// Wraps a raw value. Always valid, since every `T` is in range.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            policy: PhantomData,
        }
    }

    /// Returns the raw value.
    #[inline(always)]
    pub fn get(self) -> T {
        self.value
    }

    /// Builds from any integer kind, checking the bounds `U` can exceed.
    ///
    /// # Errors
    /// Whatever `P` reports for a value outside `T`'s range.
    #[inline(always)]
    pub fn from_int<U: Int>(value: U) -> crate::Result<Self> {
        Conversion::<T, U>::convert::<P>(value).map(Self::new)
    }

    /// Builds from a checked value of a kind `T` can always hold.
    ///
    /// Fails to compile unless every `U` value fits in `T`.
    #[inline(always)]
    pub fn widen_from<U: Int, Q: Policy>(other: Checked<U, Q>) -> Self {
        Self::new(widen(other.value))
    }

    /// Converts to another kind and policy. The destination policy `Q`
    /// decides what happens to values outside `U`'s range.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn convert<U: Int, Q: Policy>(self) -> crate::Result<Checked<U, Q>> {
        Conversion::<U, T>::convert::<Q>(self.value).map(Checked::new)
    }
}

impl<T: Int, P: Policy> From<T> for Checked<T, P> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn overflow_panic(err: OverflowError) -> ! {
    panic!("{}", err)
}

/// Operators cannot return `Result`, so they abort like debug-mode
/// primitive arithmetic does.
#[inline(always)]
#[track_caller]
pub(crate) fn unwrap_or_panic<T>(result: crate::Result<T>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => overflow_panic(e),
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

impl<T: Int, P: Policy> Checked<T, P> {
    /// Addition. Overflow past `MAX` is too large, past `MIN` too small.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_add(self, rhs: Self) -> crate::Result<Self> {
        let (wrapped, overflow) = self.value.overflowing_add(rhs.value);
        let value = if !overflow {
            Ok(wrapped)
        } else if self.value.is_negative() {
            // both operands negative
            P::too_small(wrapped, "add")
        } else {
            P::too_large(wrapped, "add")
        };
        value.map(Self::new)
    }

    /// Subtraction. For unsigned kinds, `rhs > self` is too small.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_sub(self, rhs: Self) -> crate::Result<Self> {
        let (wrapped, overflow) = self.value.overflowing_sub(rhs.value);
        let value = if !overflow {
            Ok(wrapped)
        } else if !T::SIGNED || self.value.is_negative() {
            P::too_small(wrapped, "sub")
        } else {
            P::too_large(wrapped, "sub")
        };
        value.map(Self::new)
    }

    /// Multiplication. The sign of the exact product picks the direction.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_mul(self, rhs: Self) -> crate::Result<Self> {
        let (wrapped, overflow) = self.value.overflowing_mul(rhs.value);
        let value = if !overflow {
            Ok(wrapped)
        } else if self.value.is_negative() == rhs.value.is_negative() {
            P::too_large(wrapped, "mul")
        } else {
            P::too_small(wrapped, "mul")
        };
        value.map(Self::new)
    }

    /// Truncating division.
    ///
    /// # Errors
    /// `DivZero` when `rhs` is zero, under every policy. `MIN / -1` is too
    /// large.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_div(self, rhs: Self) -> crate::Result<Self> {
        if rhs.value == T::ZERO {
            return P::div_zero("div").map(Self::new);
        }
        let (wrapped, overflow) = self.value.overflowing_div(rhs.value);
        let value = if overflow {
            P::too_large(wrapped, "div")
        } else {
            Ok(wrapped)
        };
        value.map(Self::new)
    }

    /// Truncating remainder; the result takes the sign of `self`.
    ///
    /// # Errors
    /// `DivZero` when `rhs` is zero, under every policy.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_rem(self, rhs: Self) -> crate::Result<Self> {
        if rhs.value == T::ZERO {
            return P::div_zero("rem").map(Self::new);
        }
        Ok(Self::new(self.value.wrapping_rem(rhs.value)))
    }

    /// Negation. `-MIN` is too large; negating a non-zero unsigned value is
    /// too small.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_neg(self) -> crate::Result<Self> {
        let (wrapped, overflow) = self.value.overflowing_neg();
        let value = if !overflow {
            Ok(wrapped)
        } else if T::SIGNED {
            P::too_large(wrapped, "neg")
        } else {
            P::too_small(wrapped, "neg")
        };
        value.map(Self::new)
    }

    /// Adds one.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_inc(self) -> crate::Result<Self> {
        self.try_add(Self::ONE)
    }

    /// Subtracts one.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_dec(self) -> crate::Result<Self> {
        self.try_sub(Self::ONE)
    }

    /// Magnitude in the unsigned kind of the same width.
    ///
    /// Never fails: `abs(MIN)` is `2^(BITS - 1)`, which the unsigned kind
    /// holds.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn abs(self) -> T::Unsigned {
        self.value.unsigned_abs()
    }
}

// ============================================================================
// Shifts
// ============================================================================

impl<T: Int, P: Policy> Checked<T, P> {
    /// Left shift that refuses to drop set bits.
    ///
    /// A non-negative value must stay at or below `MAX`, a negative one at or
    /// above `MIN`. Shifting by `BITS` or more is only exact for zero.
    #[inline]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_shl(self, shift: u32) -> crate::Result<Self> {
        let v = self.value;

        if shift >= T::BITS {
            let value = if v == T::ZERO {
                Ok(v)
            } else if v.is_negative() {
                P::too_small(T::ZERO, "shl")
            } else {
                P::too_large(T::ZERO, "shl")
            };
            return value.map(Self::new);
        }

        let s = shift as usize;
        let wrapped = v << s;
        let value = if v.is_negative() {
            if v < (T::MIN >> s) {
                P::too_small(wrapped, "shl")
            } else {
                Ok(wrapped)
            }
        } else if v > (T::MAX >> s) {
            P::too_large(wrapped, "shl")
        } else {
            Ok(wrapped)
        };
        value.map(Self::new)
    }

    /// Right shift, arithmetic for signed kinds. Never fails; shifting by
    /// `BITS` or more leaves only the sign.
    #[inline(always)]
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn shr(self, shift: u32) -> Self {
        if shift >= T::BITS {
            return if self.value.is_negative() {
                Self::new(!T::ZERO)
            } else {
                Self::ZERO
            };
        }
        Self::new(self.value >> shift as usize)
    }
}

// ============================================================================
// Sign Operations
// ============================================================================

impl<T: Int, P: Policy> Checked<T, P> {
    /// Returns `true` if `self` is positive.
    #[inline(always)]
    pub fn is_positive(self) -> bool {
        self.value > T::ZERO
    }

    /// Returns `true` if `self` is negative.
    #[inline(always)]
    pub fn is_negative(self) -> bool {
        self.value.is_negative()
    }

    /// Returns `true` if `self` is zero.
    #[inline(always)]
    pub fn is_zero(self) -> bool {
        self.value == T::ZERO
    }

    /// `-1`, `0` or `1`. Never fails, since every kind holds all three
    /// values it can produce.
    #[inline(always)]
    pub fn signum(self) -> Self {
        if self.value.is_negative() {
            Self::new(!T::ZERO)
        } else if self.value == T::ZERO {
            Self::ZERO
        } else {
            Self::ONE
        }
    }
}

// ============================================================================
// Operator Overloading
// ============================================================================

macro_rules! impl_fallible_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $try_op:ident) => {
        impl<T: Int, P: Policy> $Op for Checked<T, P> {
            type Output = Self;

            #[inline(always)]
            #[track_caller]
            fn $op(self, rhs: Self) -> Self::Output {
                unwrap_or_panic(self.$try_op(rhs))
            }
        }

        impl<T: Int, P: Policy> $Op<T> for Checked<T, P> {
            type Output = Self;

            #[inline(always)]
            #[track_caller]
            fn $op(self, rhs: T) -> Self::Output {
                unwrap_or_panic(self.$try_op(Self::new(rhs)))
            }
        }

        impl<T: Int, P: Policy> $OpAssign for Checked<T, P> {
            #[inline(always)]
            #[track_caller]
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }

        impl<T: Int, P: Policy> $OpAssign<T> for Checked<T, P> {
            #[inline(always)]
            #[track_caller]
            fn $op_assign(&mut self, rhs: T) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_fallible_op!(Add, add, AddAssign, add_assign, try_add);
impl_fallible_op!(Sub, sub, SubAssign, sub_assign, try_sub);
impl_fallible_op!(Mul, mul, MulAssign, mul_assign, try_mul);
impl_fallible_op!(Div, div, DivAssign, div_assign, try_div);
impl_fallible_op!(Rem, rem, RemAssign, rem_assign, try_rem);

macro_rules! impl_bit_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: Int, P: Policy> $Op for Checked<T, P> {
            type Output = Self;

            #[inline(always)]
            fn $op(self, rhs: Self) -> Self::Output {
                Self::new($Op::$op(self.value, rhs.value))
            }
        }

        impl<T: Int, P: Policy> $Op<T> for Checked<T, P> {
            type Output = Self;

            #[inline(always)]
            fn $op(self, rhs: T) -> Self::Output {
                Self::new($Op::$op(self.value, rhs))
            }
        }

        impl<T: Int, P: Policy> $OpAssign for Checked<T, P> {
            #[inline(always)]
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }

        impl<T: Int, P: Policy> $OpAssign<T> for Checked<T, P> {
            #[inline(always)]
            fn $op_assign(&mut self, rhs: T) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_bit_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_bit_op!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_bit_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl<T: Int, P: Policy> Neg for Checked<T, P> {
    type Output = Self;

    #[inline(always)]
    #[track_caller]
    fn neg(self) -> Self::Output {
        unwrap_or_panic(self.try_neg())
    }
}

impl<T: Int, P: Policy> Not for Checked<T, P> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Self::new(!self.value)
    }
}

impl<T: Int, P: Policy> Shl<u32> for Checked<T, P> {
    type Output = Self;

    #[inline(always)]
    #[track_caller]
    fn shl(self, rhs: u32) -> Self::Output {
        unwrap_or_panic(self.try_shl(rhs))
    }
}

impl<T: Int, P: Policy> Shr<u32> for Checked<T, P> {
    type Output = Self;

    #[inline(always)]
    fn shr(self, rhs: u32) -> Self::Output {
        Checked::shr(self, rhs)
    }
}

impl<T: Int, P: Policy> ShlAssign<u32> for Checked<T, P> {
    #[inline(always)]
    #[track_caller]
    fn shl_assign(&mut self, rhs: u32) {
        *self = *self << rhs;
    }
}

impl<T: Int, P: Policy> ShrAssign<u32> for Checked<T, P> {
    #[inline(always)]
    fn shr_assign(&mut self, rhs: u32) {
        *self = Checked::shr(*self, rhs);
    }
}

// ============================================================================
// Comparisons
// ============================================================================

// Mixed kinds compare by mathematical value: the left operand is range
// checked against the right kind before any cast, so -1i32 never turns into
// u32::MAX.
impl<T: Int, P: Policy, U: Int, Q: Policy> PartialEq<Checked<U, Q>> for Checked<T, P> {
    #[inline]
    fn eq(&self, other: &Checked<U, Q>) -> bool {
        if Conversion::<U, T>::is_too_small(self.value)
            || Conversion::<U, T>::is_too_large(self.value)
        {
            return false;
        }
        self.value.cast::<U>() == other.value
    }
}

impl<T: Int, P: Policy> Eq for Checked<T, P> {}

impl<T: Int, P: Policy, U: Int, Q: Policy> PartialOrd<Checked<U, Q>> for Checked<T, P> {
    #[inline]
    fn partial_cmp(&self, other: &Checked<U, Q>) -> Option<Ordering> {
        let ordering = if Conversion::<U, T>::is_too_small(self.value) {
            Ordering::Less
        } else if Conversion::<U, T>::is_too_large(self.value) {
            Ordering::Greater
        } else {
            self.value.cast::<U>().cmp(&other.value)
        };
        Some(ordering)
    }
}

// A raw integer on the right is compared as a checked value of its own kind,
// so `Checked::<i32>::new(-1) < 1u32` holds.
impl<T: Int, P: Policy, U: Int> PartialEq<U> for Checked<T, P> {
    #[inline]
    fn eq(&self, other: &U) -> bool {
        *self == Checked::<U, P>::new(*other)
    }
}

impl<T: Int, P: Policy, U: Int> PartialOrd<U> for Checked<T, P> {
    #[inline]
    fn partial_cmp(&self, other: &U) -> Option<Ordering> {
        self.partial_cmp(&Checked::<U, P>::new(*other))
    }
}

impl<T: Int, P: Policy> Ord for Checked<T, P> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Int, P: Policy> Hash for Checked<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// ============================================================================
// Formatting and Parsing
// ============================================================================

impl<T: Int, P: Policy> fmt::Display for Checked<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<T: Int, P: Policy> fmt::Debug for Checked<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // {:#?} shows the policy too
            f.debug_struct("Checked")
                .field("value", &self.value)
                .field("policy", &P::NAME)
                .finish()
        } else {
            write!(f, "Checked({})", self.value)
        }
    }
}

macro_rules! impl_radix_fmt {
    ($($Trait:ident),*) => { $(
        impl<T: Int, P: Policy> fmt::$Trait for Checked<T, P> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::$Trait::fmt(&self.value, f)
            }
        }
    )* };
}

impl_radix_fmt!(Binary, Octal, LowerHex, UpperHex);

impl<T: Int, P: Policy> FromStr for Checked<T, P> {
    type Err = ParseIntError;

    /// Parses the underlying kind; out-of-range text is a parse error, not
    /// a policy decision.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<T>().map(Self::new)
    }
}

// ============================================================================
// Iterator Trait Implementations
// ============================================================================

impl<T: Int, P: Policy> Sum for Checked<T, P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a, T: Int, P: Policy> Sum<&'a Checked<T, P>> for Checked<T, P> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + *x)
    }
}

impl<T: Int, P: Policy> Product for Checked<T, P> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a, T: Int, P: Policy> Product<&'a Checked<T, P>> for Checked<T, P> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * *x)
    }
}

// ============================================================================
// num-traits Interop
// ============================================================================

impl<T: Int, P: Policy> num_traits::Bounded for Checked<T, P> {
    #[inline(always)]
    fn min_value() -> Self {
        Self::MIN
    }

    #[inline(always)]
    fn max_value() -> Self {
        Self::MAX
    }
}

impl<T: Int, P: Policy> num_traits::Zero for Checked<T, P> {
    #[inline(always)]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.value == T::ZERO
    }
}

impl<T: Int, P: Policy> num_traits::One for Checked<T, P> {
    #[inline(always)]
    fn one() -> Self {
        Self::ONE
    }
}

// ============================================================================
// Serde Support
// ============================================================================

#[cfg(feature = "serde")]
impl<T: Int + Serialize, P: Policy> Serialize for Checked<T, P> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Int + Deserialize<'de>, P: Policy> Deserialize<'de> for Checked<T, P> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}


#[cfg(test)]
mod negate_abs_tests {
    use super::*;
    use crate::OverflowKind;

    type C = Checked<i32>;
    type S = Saturating<i32>;
    type W = Wrapping<i32>;

    #[test]
    fn test_checked_negate() {
        assert_eq!(-C::new(5), C::new(-5));
        assert_eq!(-C::new(i32::MAX), C::new(-i32::MAX));
        assert_eq!(-C::new(-i32::MAX), C::new(i32::MAX));
        assert_eq!(
            C::new(i32::MIN).try_neg().unwrap_err(),
            OverflowError::TooLarge("neg")
        );
    }

    #[test]
    #[should_panic(expected = "neg: result too large")]
    fn test_checked_negate_min_panics() {
        let _ = -C::new(i32::MIN);
    }

    #[test]
    fn test_saturating_negate() {
        assert_eq!(-S::new(5), S::new(-5));
        assert_eq!(-S::new(i32::MAX), S::new(-i32::MAX));
        assert_eq!(-S::new(i32::MIN), S::new(i32::MAX));
    }

    #[test]
    fn test_wrapping_negate_min_is_min() {
        assert_eq!(-W::new(i32::MIN), W::new(i32::MIN));
        assert_eq!(-W::new(3), W::new(-3));
    }

    #[test]
    fn test_unsigned_negate() {
        assert_eq!(-Checked::<u32>::new(0), Checked::<u32>::new(0));
        assert_eq!(
            Checked::<u32>::new(1).try_neg().unwrap_err().kind(),
            OverflowKind::TooSmall
        );
        assert_eq!(-Saturating::<u32>::new(9), Saturating::<u32>::new(0));
        assert_eq!((-Wrapping::<u8>::new(1)).get(), u8::MAX);
    }

    #[test]
    fn test_abs() {
        assert_eq!(C::new(3).abs(), 3u32);
        assert_eq!(C::new(-3).abs(), 3u32);
        assert_eq!(C::new(i32::MAX).abs(), i32::MAX as u32);
        assert_eq!(C::new(-i32::MAX).abs(), i32::MAX as u32);
        assert_eq!(C::new(i32::MIN).abs(), i32::MAX as u32 + 1);
        assert_eq!(Checked::<i8>::new(i8::MIN).abs(), 128u8);
        assert_eq!(Checked::<i128>::new(i128::MIN).abs(), i128::MAX as u128 + 1);
        assert_eq!(Checked::<u16>::new(40_000).abs(), 40_000u16);
    }
}






#[cfg(test)]
mod iter_tests {
    use super::*;

    type C = Checked<i32>;

    #[test]
    fn test_sum_and_product() {
        let values = [C::new(1), C::new(2), C::new(3), C::new(4)];
        assert_eq!(values.iter().sum::<C>(), C::new(10));
        assert_eq!(values.into_iter().product::<C>(), C::new(24));
    }

    #[test]
    fn test_saturating_sum_clamps() {
        let values = [Saturating::<u8>::new(200), Saturating::<u8>::new(100)];
        assert_eq!(values.iter().sum::<Saturating<u8>>(), Saturating::<u8>::MAX);
    }

    #[test]
    #[should_panic(expected = "mul: result too large")]
    fn test_checked_product_overflow_panics() {
        let _: Checked<u8> = [Checked::<u8>::new(16), Checked::new(16)].into_iter().product();
    }

    #[test]
    fn test_num_traits() {
        use num_traits::{Bounded, One, Zero};

        assert_eq!(<C as Bounded>::max_value(), C::MAX);
        assert_eq!(<C as Bounded>::min_value(), C::MIN);
        assert!(<C as Zero>::zero().is_zero());
        assert_eq!(<C as One>::one(), C::ONE);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Checked::<i32>::new(-17)).unwrap();
        assert_eq!(json, "-17");
    }

    #[test]
    fn test_deserialize() {
        let c: Saturating<u16> = serde_json::from_str("65535").unwrap();
        assert_eq!(c, Saturating::<u16>::MAX);
    }

    #[test]
    fn test_deserialize_out_of_range_fails() {
        assert!(serde_json::from_str::<Checked<u8>>("256").is_err());
    }
}

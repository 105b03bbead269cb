//! Exact fractions over `Checked<i64>`.
//!
//! A [`Rational`] is always in lowest terms with a positive denominator, so
//! structural equality is numeric equality. Intermediate products are reduced
//! before they are formed; whatever still overflows is reported as the
//! underlying [`OverflowError`].

use core::cmp::Ordering;
use core::fmt;
use core::num::ParseIntError;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

use crate::checked::unwrap_or_panic;
use crate::{Checked, Int, OverflowError, Throw};

type Repr = Checked<i64>;

/// Scratch width for sums and quotients: products of two `i64` terms fit
/// with room for one addition.
type Wide = Checked<i128>;

/// Error returned when parsing a [`Rational`] from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRationalError {
    #[error("cannot parse rational from empty string")]
    Empty,

    #[error("invalid integer in rational: {0}")]
    Int(#[from] ParseIntError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),
}

/// A fraction `num / den` of 64-bit integers.
///
/// Invariants: `den > 0` and `gcd(num, den) == 1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    num: Repr,
    den: Repr,
}

/// Greatest common divisor of the magnitudes, as a positive `Checked<i64>`.
///
/// Callers pass a positive denominator as `b`, which bounds the result by
/// `i64::MAX`.
fn gcd(a: Repr, b: Repr) -> crate::Result<Repr> {
    Repr::from_int(gcd_of(a.abs(), b.abs()))
}

fn gcd_of<U: Int>(mut a: U, mut b: U) -> U {
    while b != U::ZERO {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

// ============================================================================
// Constructors
// ============================================================================

impl Rational {
    pub const ZERO: Self = Self::from_integer(0);
    pub const ONE: Self = Self::from_integer(1);

    /// The fraction `n / 1`.
    #[inline(always)]
    pub const fn from_integer(n: i64) -> Self {
        Self {
            num: Repr::new(n),
            den: Repr::new(1),
        }
    }

    /// The fraction `n / d` in lowest terms.
    ///
    /// # Errors
    /// `DivZero` if `d` is zero. `(i64::MIN, -1)` and other pairs whose
    /// normalized form does not fit in `i64` are too large.
    pub fn new(n: i64, d: i64) -> crate::Result<Self> {
        if d == 0 {
            return Err(OverflowError::DivZero("Rational::new"));
        }
        Self::reduce(Wide::widen_from(Repr::new(n)), Wide::widen_from(Repr::new(d)))
    }

    /// Lowest terms of `num / den` for a non-zero `den`, then narrowed back
    /// to `i64`. The gcd may be 2^63 (`i64::MIN / i64::MIN`), which only the
    /// wide form can hold.
    fn reduce(num: Wide, den: Wide) -> crate::Result<Self> {
        let g = Wide::from_int(gcd_of(num.abs(), den.abs()))?;
        let (mut num, mut den) = (num.try_div(g)?, den.try_div(g)?);
        if den.is_negative() {
            num = num.try_neg()?;
            den = den.try_neg()?;
        }

        Ok(Self {
            num: num.convert::<i64, Throw>()?,
            den: den.convert::<i64, Throw>()?,
        })
    }

    #[inline(always)]
    pub fn numer(self) -> i64 {
        self.num.get()
    }

    /// Always positive.
    #[inline(always)]
    pub fn denom(self) -> i64 {
        self.den.get()
    }

    #[inline(always)]
    pub fn is_zero(self) -> bool {
        self.num.is_zero()
    }

    #[inline(always)]
    pub fn is_negative(self) -> bool {
        self.num.is_negative()
    }

    /// Nearest `f64`; large terms lose precision.
    pub fn to_f64(self) -> f64 {
        self.num.get() as f64 / self.den.get() as f64
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

impl Rational {
    /// `-self`. Fails only for a numerator of `i64::MIN`.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_neg(self) -> crate::Result<Self> {
        Ok(Self {
            num: self.num.try_neg()?,
            den: self.den,
        })
    }

    /// `1 / self`, keeping the denominator positive.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_recip(self) -> crate::Result<Self> {
        if self.num.is_zero() {
            return Err(OverflowError::DivZero("recip"));
        }
        if self.num.is_negative() {
            Ok(Self {
                num: self.den.try_neg()?,
                den: self.num.try_neg()?,
            })
        } else {
            Ok(Self {
                num: self.den,
                den: self.num,
            })
        }
    }

    /// Product, cross-reduced so no factor common to the result is ever
    /// multiplied in.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_mul(self, rhs: Self) -> crate::Result<Self> {
        let ab = gcd(self.num, rhs.den)?;
        let ba = gcd(rhs.num, self.den)?;

        // both factors are coprime across, so the result is already reduced
        let num = self.num.try_div(ab)?.try_mul(rhs.num.try_div(ba)?)?;
        let den = self.den.try_div(ba)?.try_mul(rhs.den.try_div(ab)?)?;
        Ok(Self { num, den })
    }

    /// Numerators over the least common denominator, combined by `op`.
    ///
    /// Each scaled numerator is below 2^126 in magnitude, so `op` cannot
    /// overflow the wide form; only a reduced result outside `i64` fails.
    fn combine(
        self,
        rhs: Self,
        op: fn(Wide, Wide) -> crate::Result<Wide>,
    ) -> crate::Result<Self> {
        let divisor = gcd(self.den, rhs.den)?;
        let a_den = Wide::widen_from(self.den.try_div(divisor)?);
        let b_den = Wide::widen_from(rhs.den.try_div(divisor)?);

        let lhs = b_den.try_mul(Wide::widen_from(self.num))?;
        let rhs_num = a_den.try_mul(Wide::widen_from(rhs.num))?;
        let den = a_den.try_mul(Wide::widen_from(rhs.den))?;
        Self::reduce(op(lhs, rhs_num)?, den)
    }

    /// Sum over the least common denominator.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_add(self, rhs: Self) -> crate::Result<Self> {
        self.combine(rhs, Wide::try_add)
    }

    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_sub(self, rhs: Self) -> crate::Result<Self> {
        self.combine(rhs, Wide::try_sub)
    }

    /// Quotient, cross-reducing numerator against numerator and denominator
    /// against denominator; the divisor's sign moves to the numerator.
    ///
    /// # Errors
    /// `DivZero` when `rhs` is zero.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_div(self, rhs: Self) -> crate::Result<Self> {
        if rhs.is_zero() {
            return Err(OverflowError::DivZero("div"));
        }

        let num_gcd = Wide::from_int(gcd_of(self.num.abs(), rhs.num.abs()))?;
        let den_gcd = Wide::widen_from(gcd(self.den, rhs.den)?);

        let num = Wide::widen_from(self.num)
            .try_div(num_gcd)?
            .try_mul(Wide::widen_from(rhs.den).try_div(den_gcd)?)?;
        let den = Wide::widen_from(self.den)
            .try_div(den_gcd)?
            .try_mul(Wide::widen_from(rhs.num).try_div(num_gcd)?)?;
        Self::reduce(num, den)
    }

    /// Adds one.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_inc(self) -> crate::Result<Self> {
        self.try_add(Self::ONE)
    }

    /// Subtracts one.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn try_dec(self) -> crate::Result<Self> {
        self.try_sub(Self::ONE)
    }
}

// ============================================================================
// Operator Overloading
// ============================================================================

impl Neg for Rational {
    type Output = Self;

    #[track_caller]
    fn neg(self) -> Self::Output {
        unwrap_or_panic(self.try_neg())
    }
}

macro_rules! impl_rational_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $try_op:ident) => {
        impl $Op for Rational {
            type Output = Self;

            #[track_caller]
            fn $op(self, rhs: Self) -> Self::Output {
                unwrap_or_panic(self.$try_op(rhs))
            }
        }

        impl $OpAssign for Rational {
            #[track_caller]
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

impl_rational_op!(Add, add, AddAssign, add_assign, try_add);
impl_rational_op!(Sub, sub, SubAssign, sub_assign, try_sub);
impl_rational_op!(Mul, mul, MulAssign, mul_assign, try_mul);
impl_rational_op!(Div, div, DivAssign, div_assign, try_div);

// ============================================================================
// Comparisons
// ============================================================================

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive; i64 * i64 always fits in i128
        let lhs = self.num.get() as i128 * other.den.get() as i128;
        let rhs = other.num.get() as i128 * self.den.get() as i128;
        lhs.cmp(&rhs)
    }
}

// ============================================================================
// Formatting and Parsing
// ============================================================================

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.get() == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.num, self.den)
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Accepts `"n"` or `"n/d"`; the result is reduced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseRationalError::Empty);
        }

        match s.split_once('/') {
            Some((n, d)) => {
                let n = n.trim().parse::<i64>()?;
                let d = d.trim().parse::<i64>()?;
                Ok(Self::new(n, d)?)
            }
            None => Ok(Self::from_integer(s.parse::<i64>()?)),
        }
    }
}

// ============================================================================
// Serde Support
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            (self.num.get(), self.den.get()).serialize(serializer)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = alloc::string::String::deserialize(deserializer)?;
            Self::from_str(&s).map_err(de::Error::custom)
        } else {
            // re-normalize; the pair may come from anywhere
            let (n, d) = <(i64, i64)>::deserialize(deserializer)?;
            Self::new(n, d).map_err(de::Error::custom)
        }
    }
}



#[cfg(test)]
mod comparison_tests {
    use super::*;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn test_ordering() {
        assert!(r(1, 3) < r(1, 2));
        assert!(r(-1, 2) < r(-1, 3));
        assert!(r(-1, 2) < Rational::ZERO);
        assert!(r(i64::MAX, i64::MAX - 1) > Rational::ONE);
        assert!(r(i64::MIN, 1) < r(i64::MIN + 1, 1));
        assert_eq!(r(2, 4).cmp(&r(1, 2)), Ordering::Equal);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(r(1, 4).to_f64(), 0.25);
        assert_eq!(r(-3, 2).to_f64(), -1.5);
    }
}



#[cfg(test)]
mod rational_property_tests {
    use super::*;
    use proptest::prelude::*;

    fn small() -> impl Strategy<Value = i64> {
        -1_000_000i64..1_000_000
    }

    fn nonzero() -> impl Strategy<Value = i64> {
        small().prop_filter("non-zero", |d| *d != 0)
    }

    fn gcd_i128(a: i128, b: i128) -> i128 {
        if b == 0 { a.abs() } else { gcd_i128(b, a % b) }
    }

    proptest! {
        #[test]
        fn prop_new_is_canonical(
            n in any::<i64>(),
            d in any::<i64>().prop_filter("non-zero", |d| *d != 0)
        ) {
            if let Ok(x) = Rational::new(n, d) {
                let (xn, xd) = (x.numer() as i128, x.denom() as i128);
                prop_assert!(xd > 0);
                prop_assert_eq!(gcd_i128(xn, xd), 1);
                prop_assert_eq!(xn * d as i128, n as i128 * xd);
            }
        }

        #[test]
        fn prop_arithmetic_matches_cross_products(
            a in small(), b in nonzero(), c in small(), d in nonzero()
        ) {
            let x = Rational::new(a, b).unwrap();
            let y = Rational::new(c, d).unwrap();
            let (a, b, c, d) = (a as i128, b as i128, c as i128, d as i128);

            let sum = x + y;
            let (sn, sd) = (sum.numer() as i128, sum.denom() as i128);
            prop_assert_eq!(sn * (b * d), (a * d + c * b) * sd);

            let product = x * y;
            let (pn, pd) = (product.numer() as i128, product.denom() as i128);
            prop_assert_eq!(pn * (b * d), (a * c) * pd);

            let sign = (b * d).signum();
            prop_assert_eq!(x.cmp(&y), (a * d * sign).cmp(&(c * b * sign)));
        }
    }
}

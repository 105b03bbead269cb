//! Conversions between integer kinds.
//!
//! Whether a conversion can fail depends only on the widths and signedness of
//! the two kinds. [`Conversion`] folds that into associated constants, so each
//! concrete (from, to) pair compiles down to the comparisons it can actually
//! violate and nothing else:
//!
//! | from → to | lower check | upper check |
//! |---|---|---|
//! | `i16 → i32`, `u8 → i16` | - | - |
//! | `i32 → u32` | yes | - |
//! | `u32 → i32`, `u64 → u8` | - | yes |
//! | `i64 → i8`, `i64 → u8` | yes | yes |

use core::marker::PhantomData;

use crate::{Int, Policy, Result, Saturate, Throw, Wrap};

const CONVERT: &str = "convert";

/// Whether every value of `From` is representable in `To`.
#[inline(always)]
pub const fn is_as_wide_as<To: Int, From: Int>() -> bool {
    if From::SIGNED == To::SIGNED {
        From::BITS <= To::BITS
    } else if To::SIGNED {
        From::BITS < To::BITS
    } else {
        false
    }
}

/// Whether `From` holds values below `To::MIN`.
#[inline(always)]
pub const fn goes_lower_than<From: Int, To: Int>() -> bool {
    if !From::SIGNED {
        false
    } else if !To::SIGNED {
        true
    } else {
        From::BITS > To::BITS
    }
}

/// Whether `From` holds values above `To::MAX`.
#[inline(always)]
pub const fn goes_higher_than<From: Int, To: Int>() -> bool {
    if From::BITS == To::BITS {
        !From::SIGNED && To::SIGNED
    } else {
        From::BITS > To::BITS
    }
}

/// Compile-time classification of the conversion `From → To`.
pub struct Conversion<To, From>(PhantomData<(To, From)>);

impl<To: Int, From: Int> Conversion<To, From> {
    /// Lossless; no runtime check.
    pub const WIDENING: bool = is_as_wide_as::<To, From>();

    /// A runtime lower-bound check is needed.
    pub const CHECK_LOW: bool = goes_lower_than::<From, To>();

    /// A runtime upper-bound check is needed.
    pub const CHECK_HIGH: bool = goes_higher_than::<From, To>();

    const ASSERT_WIDENING: () = assert!(
        Self::WIDENING,
        "widen: destination kind cannot hold every source value"
    );

    /// `To::MIN` expressed in `From`. Only meaningful when `CHECK_LOW` holds,
    /// which guarantees it is representable there.
    #[inline(always)]
    fn min_in_from() -> From {
        To::MIN.cast()
    }

    /// `To::MAX` expressed in `From`. Only meaningful when `CHECK_HIGH` holds.
    #[inline(always)]
    fn max_in_from() -> From {
        To::MAX.cast()
    }

    #[inline(always)]
    pub fn is_too_small(from: From) -> bool {
        Self::CHECK_LOW && from < Self::min_in_from()
    }

    #[inline(always)]
    pub fn is_too_large(from: From) -> bool {
        Self::CHECK_HIGH && from > Self::max_in_from()
    }

    /// Converts `from`, handing out-of-range values to `P`.
    #[inline(always)]
    pub fn convert<P: Policy>(from: From) -> Result<To> {
        let cast: To = from.cast();
        if Self::is_too_small(from) {
            return P::too_small(cast, CONVERT);
        }
        if Self::is_too_large(from) {
            return P::too_large(cast, CONVERT);
        }
        Ok(cast)
    }

    /// Lossless conversion. Instantiating this for a pair that is not
    /// widening is a compile error.
    #[inline(always)]
    pub fn widen(from: From) -> To {
        let () = Self::ASSERT_WIDENING;
        from.cast()
    }
}

/// Converts `from` into `To` under policy `P`.
#[inline(always)]
pub fn convert<To: Int, From: Int, P: Policy>(from: From) -> Result<To> {
    Conversion::<To, From>::convert::<P>(from)
}

/// Converts `from` into `To`, failing when it does not fit.
#[inline(always)]
pub fn try_convert<To: Int, From: Int>(from: From) -> Result<To> {
    convert::<To, From, Throw>(from)
}

/// Converts `from` into `To`, clamping to `To`'s bounds.
#[inline(always)]
pub fn saturating_convert<To: Int, From: Int>(from: From) -> To {
    // Saturate never reports an error
    match convert::<To, From, Saturate>(from) {
        Ok(v) => v,
        Err(_) => unreachable!("saturating conversion cannot fail"),
    }
}

/// Converts `from` into `To` by keeping its low bits.
#[inline(always)]
pub fn wrapping_convert<To: Int, From: Int>(from: From) -> To {
    match convert::<To, From, Wrap>(from) {
        Ok(v) => v,
        Err(_) => unreachable!("wrapping conversion cannot fail"),
    }
}

/// Lossless conversion, rejected at compile time unless `To` can hold every
/// `From` value.
#[inline(always)]
pub fn widen<To: Int, From: Int>(from: From) -> To {
    Conversion::<To, From>::widen(from)
}


#[cfg(test)]
mod conversion_tests {
    use super::*;
    use crate::{OverflowError, OverflowKind};

    #[test]
    fn test_small_values_fit_everywhere() {
        let five = 5i16;
        assert_eq!(try_convert::<i8, _>(five), Ok(5));
        assert_eq!(try_convert::<u8, _>(five), Ok(5));
        assert_eq!(try_convert::<u16, _>(five), Ok(5));
        assert_eq!(try_convert::<i32, _>(five), Ok(5));
        assert_eq!(try_convert::<u32, _>(five), Ok(5));
        assert_eq!(try_convert::<i64, _>(five), Ok(5));
        assert_eq!(try_convert::<u64, _>(five), Ok(5));

        let ufive = 5u16;
        assert_eq!(try_convert::<i8, _>(ufive), Ok(5));
        assert_eq!(try_convert::<u8, _>(ufive), Ok(5));
        assert_eq!(try_convert::<i16, _>(ufive), Ok(5));
        assert_eq!(try_convert::<u128, _>(ufive), Ok(5));
    }

    #[test]
    fn test_negative_into_unsigned() {
        let nfive = -5i16;
        assert_eq!(try_convert::<i8, _>(nfive), Ok(-5));
        assert_eq!(
            try_convert::<u8, _>(nfive),
            Err(OverflowError::TooSmall("convert"))
        );
        assert_eq!(try_convert::<i32, _>(nfive), Ok(-5));
        assert!(try_convert::<u16, _>(nfive).is_err());
        assert!(try_convert::<u32, _>(nfive).is_err());
        assert!(try_convert::<u64, _>(nfive).is_err());
    }

    #[test]
    fn test_same_width_signed_to_unsigned() {
        assert_eq!(try_convert::<u16, _>(-1i16).unwrap_err().kind(), OverflowKind::TooSmall);
        assert_eq!(try_convert::<u16, _>(i16::MAX), Ok(i16::MAX as u16));
        assert_eq!(try_convert::<u32, _>(0i32), Ok(0));
    }

    #[test]
    fn test_same_width_unsigned_to_signed() {
        assert_eq!(try_convert::<i16, _>(i16::MAX as u16), Ok(i16::MAX));
        assert_eq!(
            try_convert::<i16, _>(i16::MAX as u16 + 1).unwrap_err().kind(),
            OverflowKind::TooLarge
        );
        assert_eq!(try_convert::<i64, _>(u64::MAX).unwrap_err().kind(), OverflowKind::TooLarge);
    }

    #[test]
    fn test_narrowing_boundaries() {
        assert_eq!(try_convert::<i8, _>(i8::MAX as i16), Ok(i8::MAX));
        assert_eq!(
            try_convert::<i8, _>(i8::MAX as i16 + 1).unwrap_err().kind(),
            OverflowKind::TooLarge
        );
        assert_eq!(try_convert::<i8, _>(i8::MIN as i16), Ok(i8::MIN));
        assert_eq!(
            try_convert::<i8, _>(i8::MIN as i16 - 1).unwrap_err().kind(),
            OverflowKind::TooSmall
        );

        assert_eq!(try_convert::<u8, _>(-1i16).unwrap_err().kind(), OverflowKind::TooSmall);
        assert_eq!(try_convert::<u8, _>(1i16), Ok(1));
        assert_eq!(try_convert::<u8, _>(u8::MAX as i16), Ok(u8::MAX));
        assert_eq!(
            try_convert::<u8, _>(u8::MAX as i16 + 1).unwrap_err().kind(),
            OverflowKind::TooLarge
        );
    }

    #[test]
    fn test_saturating_convert() {
        assert_eq!(saturating_convert::<i8, _>(1000i32), i8::MAX);
        assert_eq!(saturating_convert::<i8, _>(-1000i32), i8::MIN);
        assert_eq!(saturating_convert::<u8, _>(-1i64), 0);
        assert_eq!(saturating_convert::<i32, _>(u32::MAX), i32::MAX);
        assert_eq!(saturating_convert::<u16, _>(u128::MAX), u16::MAX);
        assert_eq!(saturating_convert::<i8, _>(i8::MAX as i32), i8::MAX);
    }

    #[test]
    fn test_wrapping_convert() {
        assert_eq!(wrapping_convert::<u8, _>(-1i32), u8::MAX);
        assert_eq!(wrapping_convert::<i8, _>(200u8), -56);
        assert_eq!(wrapping_convert::<u16, _>(0x1_2345u32), 0x2345);
        assert_eq!(wrapping_convert::<i64, _>(-3i8), -3);
    }

    #[test]
    fn test_widen() {
        assert_eq!(widen::<i32, _>(-7i8), -7);
        assert_eq!(widen::<i16, _>(u8::MAX), 255);
        assert_eq!(widen::<u128, _>(u64::MAX), u64::MAX as u128);
        assert_eq!(widen::<i64, _>(i64::MIN), i64::MIN);
    }

    #[test]
    fn test_custom_policy_sees_bounds() {
        assert_eq!(convert::<u8, i32, Saturate>(256), Ok(u8::MAX));
        assert_eq!(convert::<u8, i32, Wrap>(256), Ok(0));
        assert_eq!(convert::<u8, i32, Throw>(255), Ok(255));
    }
}

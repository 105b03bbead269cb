//! Overflow-safe fixed-width integers
//!
//! This library wraps the primitive integer kinds in a value type that never
//! overflows silently. What happens when a result does not fit is chosen at
//! the type level by a policy:
//!
//! - **`Checked<T>`** (policy [`Throw`]): out-of-range results are errors
//!   - `try_*` methods return [`OverflowError`]
//!   - operators panic with the error message, like debug-mode primitives
//!
//! - **`Saturating<T>`** (policy [`Saturate`]): out-of-range results clamp to
//!   `T::MIN` / `T::MAX`
//!
//! - **`Wrapping<T>`** (policy [`Wrap`]): results wrap modulo 2^bits
//!
//! Division or remainder by zero fails under every policy.
//!
//! ## Features
//!
//! - **Mixed-kind conversions**: only the bound checks a (from, to) pair can
//!   actually violate are compiled in; provably lossless widening is free
//! - **Mixed-kind comparisons**: `-1i32` compares below `1u32`
//! - **Exact rationals**: [`Rational`] keeps `i64` fractions in lowest terms
//!   on top of `Checked<i64>`
//! - **no_std compatible**
//! - **Serde support** behind the `serde` feature
//!
//! ## Example
//!
//! ```rust
//! use boundint::{Checked, OverflowKind, Saturating, Wrapping};
//!
//! let a = Checked::<i32>::new(i32::MAX);
//! let err = a.try_add(Checked::new(1)).unwrap_err();
//! assert_eq!(err.kind(), OverflowKind::TooLarge);
//!
//! let s = Saturating::<u8>::new(250) + 10;
//! assert_eq!(s.get(), u8::MAX);
//!
//! let w = Wrapping::<i8>::new(i8::MAX) + 1;
//! assert_eq!(w.get(), i8::MIN);
//!
//! assert!(Checked::<i32>::new(-1) < Checked::<u32>::new(1));
//! ```

#![no_std]
#![cfg_attr(test, allow(unused_imports))]

#[cfg(test)]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

mod checked;
pub mod convert;
mod int;
pub mod policy;
mod rational;

pub use checked::{Checked, Saturating, Wrapping};
pub use convert::{convert, saturating_convert, try_convert, widen, wrapping_convert};
pub use int::Int;
pub use policy::{Policy, Saturate, Throw, Wrap};
pub use rational::{ParseRationalError, Rational};

use thiserror::Error;

/// An integer operation whose exact result has no representation under the
/// active policy.
///
/// The payload names the operation that failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverflowError {
    #[error("{0}: result too large to represent")]
    TooLarge(&'static str),

    #[error("{0}: result too small to represent")]
    TooSmall(&'static str),

    #[error("{0}: division by zero")]
    DivZero(&'static str),
}

/// The direction of an [`OverflowError`], without its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverflowKind {
    TooLarge,
    TooSmall,
    DivZero,
}

impl OverflowError {
    #[inline]
    pub const fn kind(&self) -> OverflowKind {
        match self {
            Self::TooLarge(_) => OverflowKind::TooLarge,
            Self::TooSmall(_) => OverflowKind::TooSmall,
            Self::DivZero(_) => OverflowKind::DivZero,
        }
    }

    /// The operation that produced the error, e.g. `"add"` or `"convert"`.
    #[inline]
    pub const fn context(&self) -> &'static str {
        match self {
            Self::TooLarge(who) | Self::TooSmall(who) | Self::DivZero(who) => who,
        }
    }
}

pub type Result<T> = core::result::Result<T, OverflowError>;

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::*;

    #[test]
    fn test_error_kind_and_context() {
        let e = OverflowError::TooSmall("sub");
        assert_eq!(e.kind(), OverflowKind::TooSmall);
        assert_eq!(e.context(), "sub");
        assert_eq!(OverflowError::DivZero("rem").kind(), OverflowKind::DivZero);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            OverflowError::TooLarge("mul").to_string(),
            "mul: result too large to represent"
        );
        assert_eq!(
            OverflowError::DivZero("div").to_string(),
            "div: division by zero"
        );
    }
}

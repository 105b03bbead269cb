//! Overflow policies.
//!
//! A policy decides what an out-of-range result turns into. It is a
//! zero-sized type chosen as the second parameter of [`Checked`], so every
//! `Checked<T, P>` is its own monomorphized type and the hooks inline away.
//!
//! Each hook receives the two's-complement wrapped result the primitive
//! operation produced, which is what lets [`Wrap`] be total without the value
//! type knowing which policy it runs under.
//!
//! [`Checked`]: crate::Checked

use core::fmt;

use crate::{Int, OverflowError, Result};

/// Strategy for results that do not fit in `T`.
pub trait Policy: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Short name used by `Debug` output.
    const NAME: &'static str;

    /// The exact result is above `T::MAX`.
    fn too_large<T: Int>(wrapped: T, context: &'static str) -> Result<T>;

    /// The exact result is below `T::MIN`.
    fn too_small<T: Int>(wrapped: T, context: &'static str) -> Result<T>;

    /// The divisor is zero. There is no value to substitute, so every
    /// provided policy fails here.
    #[inline(always)]
    fn div_zero<T: Int>(context: &'static str) -> Result<T> {
        Err(OverflowError::DivZero(context))
    }
}

/// Fails with [`OverflowError`] on overflow or division by zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Throw;

/// Clamps to the nearest bound; fails on division by zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Saturate;

/// Wraps modulo 2^bits; fails on division by zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Wrap;

impl Policy for Throw {
    const NAME: &'static str = "Throw";

    #[inline(always)]
    fn too_large<T: Int>(_wrapped: T, context: &'static str) -> Result<T> {
        Err(OverflowError::TooLarge(context))
    }

    #[inline(always)]
    fn too_small<T: Int>(_wrapped: T, context: &'static str) -> Result<T> {
        Err(OverflowError::TooSmall(context))
    }
}

impl Policy for Saturate {
    const NAME: &'static str = "Saturate";

    #[inline(always)]
    fn too_large<T: Int>(_wrapped: T, _context: &'static str) -> Result<T> {
        Ok(T::MAX)
    }

    #[inline(always)]
    fn too_small<T: Int>(_wrapped: T, _context: &'static str) -> Result<T> {
        Ok(T::MIN)
    }
}

impl Policy for Wrap {
    const NAME: &'static str = "Wrap";

    #[inline(always)]
    fn too_large<T: Int>(wrapped: T, _context: &'static str) -> Result<T> {
        Ok(wrapped)
    }

    #[inline(always)]
    fn too_small<T: Int>(wrapped: T, _context: &'static str) -> Result<T> {
        Ok(wrapped)
    }
}

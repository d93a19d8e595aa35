//! This crate contains the low-level word utilities shared by the `apint`
//! crates: the `Digit` definitions, bitwidth bookkeeping helpers, widening
//! arithmetic primitives, and the string conversion estimation tables. In
//! rare circumstances someone might want to use the items here for highly
//! optimized routines layered under `apint_core`, but most users should never
//! have to interact with this.

#![no_std]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]

mod parse;
mod widening;

use core::num::NonZeroUsize;

pub use parse::{bits_upper_bound, chars_upper_bound, ParseError, INV_LB_I1F15, LB_I3F13};
pub use widening::{dd_division, widen_add, widen_mul_add};

/// The basic element of the storage in `ApInt`. The data model fixes this to
/// a 64-bit word: values at most 64 bits wide are stored inline as a single
/// `Digit`, wider values as a little-endian `Digit` array, and the raw word
/// view exposed for serialization is defined in terms of 64-bit words.
pub type Digit = u64;

/// Signed version of `Digit`
pub type IDigit = i64;

/// Bitwidth of a `Digit`
pub const BITS: usize = Digit::BITS as usize;

/// Maximum value of a `Digit`
pub const MAX: Digit = Digit::MAX;

/// Number of bytes in a `Digit`
pub const DIGIT_BYTES: usize = (Digit::BITS / u8::BITS) as usize;

/// Bitwidth of the half-words the long division routines decompose into
pub const HALF_BITS: usize = BITS / 2;

/// Utility free function for converting a `usize` to a `NonZeroUsize`. This is
/// mainly intended for usage with literals, and shouldn't be used for fallible
/// conversions.
///
/// # Panics
///
/// If `w == 0`, this function will panic.
#[inline]
#[track_caller]
#[must_use]
pub const fn bw(w: usize) -> NonZeroUsize {
    match NonZeroUsize::new(w) {
        None => {
            panic!("tried to construct an invalid bitwidth of 0 using the `apint::bw` function")
        }
        Some(w) => w,
    }
}

/// Returns the number of extra bits given `w`
#[inline]
pub const fn extra_u(w: usize) -> usize {
    w & (BITS - 1)
}

/// Returns the number of _whole_ digits (not including a digit with unused
/// bits) given `w`
#[inline]
pub const fn digits_u(w: usize) -> usize {
    w.wrapping_shr(BITS.trailing_zeros())
}

/// Returns the number of extra bits given `w`
#[inline]
pub const fn extra(w: NonZeroUsize) -> usize {
    extra_u(w.get())
}

/// Returns the number of _whole_ digits (not including a digit with unused
/// bits) given `w`
#[inline]
pub const fn digits(w: NonZeroUsize) -> usize {
    digits_u(w.get())
}

/// Returns the number of `Digit`s needed to represent `w`, including any
/// digit with unused bits
#[inline]
pub const fn total_digits(w: NonZeroUsize) -> NonZeroUsize {
    // Safety: if `digits(w)` is zero, `extra(w)` must be nonzero
    unsafe { NonZeroUsize::new_unchecked(digits(w).wrapping_add((extra(w) != 0) as usize)) }
}

//! ## Basic Invariants
//!
//! - `ApInt`s have a nonzero bitwidth specified in a `NonZeroUsize`. Being
//!   nonzero, it eliminates several edge cases and ambiguities this crate
//!   would have to handle.
//! - The digits are stored in little endian order. The number of `Digit`s is
//!   the minimum needed to store all bits. If the bitwidth is not a multiple
//!   of `Digit::BITS`, then there will be some unused bits in the last
//!   `Digit`. For example, a bitwidth of 100 bits takes up 2 digits: 64 bits
//!   in the first digit, 36 bits in the least significant bits of the second,
//!   and 28 unused bits in the remaining bits of the second.
//! - Unused bits are zeroed. Functions that write to the digits directly must
//!   run [ApInt::clear_unused_bits] before returning control to a caller that
//!   expects the invariants to hold.
//! - Values whose bitwidth is at most `BITS` are stored inline with no
//!   allocation; only wider values own a heap array.

use alloc::{boxed::Box, vec};
use core::{
    fmt,
    hash::{Hash, Hasher},
    num::NonZeroUsize,
};

use apint_internals::*;

/// The backing storage of an `ApInt`. The variant is fully determined by the
/// bitwidth: `Inline` iff `bw <= BITS`.
#[derive(Clone)]
pub(crate) enum Storage {
    Inline(Digit),
    Heap(Box<[Digit]>),
}

/// An arbitrary bitwidth two's complement integer.
///
/// `ApInt`s do **not** know signedness. Instead, the methods are specified to
/// interpret the bits as unsigned or signed two's complement integers. If a
/// method's documentation does not mention signedness, it either works for
/// both kinds or views the bits as a plain bit string with no integral
/// properties.
///
/// The bitwidth of a value is fixed for its lifetime; operations such as
/// [ApInt::trunc], [ApInt::zext], and [ApInt::sext] produce new values of a
/// different bitwidth rather than mutating in place.
///
/// # Note
///
/// Function names of the form `*_assign` denote inplace assignment
/// operations, where the left hand side is used as an input before being
/// reassigned the value of the output inplace. The non-assigning counterparts
/// are thin copy-then-mutate wrappers, so the algorithmic logic exists in
/// exactly one place.
///
/// Unless otherwise specified, functions that take two `ApInt`s require the
/// bitwidths to be equal, and panic otherwise. Mismatched widths are a
/// programming error, not a recoverable condition; cross-width comparisons
/// must go through explicit extension or [ApInt::is_same_value].
#[derive(Clone)]
pub struct ApInt {
    w: NonZeroUsize,
    storage: Storage,
}

/// # Basic functions
impl ApInt {
    /// Returns the zero value of bitwidth `w`
    #[must_use]
    pub fn zero(w: NonZeroUsize) -> Self {
        let storage = if w.get() <= BITS {
            Storage::Inline(0)
        } else {
            Storage::Heap(vec![0; total_digits(w).get()].into_boxed_slice())
        };
        Self { w, storage }
    }

    /// Creates a value of bitwidth `w` from a `u64`, zero-filling any digits
    /// beyond the first. If `w < 64`, bits of `x` at and above `w` are
    /// truncated off.
    #[must_use]
    pub fn from_u64(w: NonZeroUsize, x: u64) -> Self {
        let mut res = Self::zero(w);
        *res.first_mut() = x;
        res.clear_unused_bits();
        res
    }

    /// Creates a value of bitwidth `w` from an `i64`, filling any digits
    /// beyond the first with the sign of `x`. If `w < 64`, bits of `x` at and
    /// above `w` are truncated off.
    #[must_use]
    pub fn from_i64(w: NonZeroUsize, x: i64) -> Self {
        let mut res = Self::zero(w);
        let fill = if x < 0 { MAX } else { 0 };
        for digit in res.as_mut_slice() {
            *digit = fill;
        }
        *res.first_mut() = x as u64;
        res.clear_unused_bits();
        res
    }

    /// Creates a value of bitwidth `w` from a little endian sequence of
    /// digits. Extra digits beyond the capacity of `w` are ignored, and
    /// missing high digits are zero-filled.
    #[must_use]
    pub fn from_digits(w: NonZeroUsize, digits: &[Digit]) -> Self {
        let mut res = Self::zero(w);
        for (i, digit) in res.as_mut_slice().iter_mut().enumerate() {
            *digit = if i < digits.len() { digits[i] } else { 0 };
        }
        res.clear_unused_bits();
        res
    }

    /// Returns the bitwidth as a `NonZeroUsize`
    #[inline]
    #[must_use]
    pub fn nzbw(&self) -> NonZeroUsize {
        self.w
    }

    /// Returns the bitwidth as a `usize`
    #[inline]
    #[must_use]
    pub fn bw(&self) -> usize {
        self.w.get()
    }

    /// Returns the exact number of `Digit`s needed to store all bits.
    #[inline]
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        total_digits(self.w).get()
    }

    /// Returns the number of extra bits, i.e. `self.bw() % BITS`. If there
    /// are no unused bits, this is zero.
    #[inline]
    #[must_use]
    pub(crate) fn extra(&self) -> usize {
        extra(self.w)
    }

    /// Returns the number of unused bits in the last digit.
    #[inline]
    #[must_use]
    pub(crate) fn unused(&self) -> usize {
        if self.extra() == 0 {
            0
        } else {
            BITS - self.extra()
        }
    }

    /// Returns a little endian view of all the digits of `self`, including
    /// any unused bits (which are always zero). This is the sanctioned
    /// low-level escape hatch for bit-exact interchange; consumers must pair
    /// it with [ApInt::bw] rather than assuming a digit count.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Digit] {
        match &self.storage {
            Storage::Inline(d) => core::slice::from_ref(d),
            Storage::Heap(b) => b,
        }
    }

    /// Returns a mutable little endian view of all the digits of `self`.
    /// Unused bits can be temporarily set, but must be cleared with
    /// [ApInt::clear_unused_bits] before another function expects the
    /// invariants to hold.
    #[inline]
    #[must_use]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Digit] {
        match &mut self.storage {
            Storage::Inline(d) => core::slice::from_mut(d),
            Storage::Heap(b) => b,
        }
    }

    /// Returns the first `Digit`
    #[inline]
    #[must_use]
    pub(crate) fn first(&self) -> Digit {
        self.as_slice()[0]
    }

    /// Returns a mutable reference to the first `Digit`
    #[inline]
    #[must_use]
    pub(crate) fn first_mut(&mut self) -> &mut Digit {
        &mut self.as_mut_slice()[0]
    }

    /// Returns the last `Digit`
    #[inline]
    #[must_use]
    pub(crate) fn last(&self) -> Digit {
        *self.as_slice().last().unwrap()
    }

    /// Returns a mutable reference to the last `Digit`
    #[inline]
    #[must_use]
    pub(crate) fn last_mut(&mut self) -> &mut Digit {
        self.as_mut_slice().last_mut().unwrap()
    }

    /// Clears the unused bits.
    #[inline]
    pub(crate) fn clear_unused_bits(&mut self) {
        let extra = self.extra();
        if extra == 0 {
            return // There are no unused bits
        }
        *self.last_mut() &= MAX >> (BITS - extra);
    }

    /// Gets one `Digit` worth of bits from `self` starting at the bit index
    /// `start`. Bits that extend beyond `self.bw()` are zeroed.
    #[must_use]
    pub(crate) fn get_digit(&self, start: usize) -> Digit {
        let digits = digits_u(start);
        let bits = extra_u(start);
        let len = self.len();
        let mut tmp = 0;
        if digits < len {
            tmp = self.as_slice()[digits] >> bits;
            if bits != 0 && ((digits + 1) < len) {
                tmp |= self.as_slice()[digits + 1] << (BITS - bits);
            }
        }
        tmp
    }

    /// Or-assigns `rhs` to `self` at a position `shl`. Set bits of `rhs` that
    /// are shifted beyond the bitwidth of `self` are truncated.
    pub(crate) fn digit_or_assign(&mut self, rhs: Digit, shl: usize) {
        if shl >= self.bw() {
            return
        }
        let bits = extra_u(shl);
        let digits = digits_u(shl);
        let len = self.len();
        if bits == 0 {
            self.as_mut_slice()[digits] |= rhs;
        } else {
            self.as_mut_slice()[digits] |= rhs << bits;
            if (digits + 1) < len {
                self.as_mut_slice()[digits + 1] |= rhs >> (BITS - bits);
            }
        }
        self.clear_unused_bits();
    }

    /// Panics unless `self` and `rhs` have equal bitwidths. Run at the entry
    /// of every binary operation.
    #[inline]
    #[track_caller]
    pub(crate) fn assert_same_bw(&self, rhs: &Self) {
        assert!(
            self.bw() == rhs.bw(),
            "bitwidth mismatch: {} != {}",
            self.bw(),
            rhs.bw()
        );
    }
}

impl PartialEq for ApInt {
    /// Bit string equality. Values of differing bitwidths are never equal;
    /// use [ApInt::is_same_value] for a zero-extending comparison.
    fn eq(&self, rhs: &Self) -> bool {
        (self.w == rhs.w) && (self.as_slice() == rhs.as_slice())
    }
}

impl Eq for ApInt {}

impl Hash for ApInt {
    /// Equal values of equal bitwidth hash equally, which makes `ApInt`
    /// usable as a key in content-addressed folding structures.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bw().hash(state);
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for ApInt {
    /// Forwards to the `LowerHex` impl
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Display for ApInt {
    /// Forwards to the `Debug` impl
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl ApInt {
    /// Writes the bits content to `f` in chunks of `log2` bits per character,
    /// with underscores every 8 characters and a `_u<bw>` suffix.
    fn fmt_pow2_radix(&self, f: &mut fmt::Formatter, log2: usize, upper: bool) -> fmt::Result {
        use core::fmt::Write;
        let mask: Digit = (1 << log2) - 1;
        let chars = (self.bw() - 1) / log2;
        let mut seen_nonzero = false;
        for j in (0..=chars).rev() {
            let mut char_digit = (self.get_digit(j * log2) & mask) as u8;
            if char_digit == 0 && !seen_nonzero {
                if j == 0 {
                    // we have reached the end without printing anything,
                    // print at least one '0'
                    f.write_char('0')?;
                }
                continue
            }
            seen_nonzero = true;
            if char_digit < 10 {
                char_digit += b'0';
            } else if upper {
                char_digit += b'A' - 10;
            } else {
                char_digit += b'a' - 10;
            }
            f.write_char(char_digit as char)?;
            if ((j % 8) == 0) && (j != 0) {
                f.write_char('_')?;
            }
        }
        f.write_fmt(format_args!("_u{}", self.bw()))
    }
}

impl fmt::LowerHex for ApInt {
    /// Lowercase hexadecimal formatting, e.g. `0xfedcba98_76543210_u100`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("0x")?;
        self.fmt_pow2_radix(f, 4, false)
    }
}

impl fmt::UpperHex for ApInt {
    /// Uppercase hexadecimal formatting, e.g. `0xFEDCBA98_76543210_u100`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("0x")?;
        self.fmt_pow2_radix(f, 4, true)
    }
}

impl fmt::Octal for ApInt {
    /// Octal formatting, e.g. `0o7_76543210_u100`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("0o")?;
        self.fmt_pow2_radix(f, 3, false)
    }
}

impl fmt::Binary for ApInt {
    /// Binary formatting, e.g. `0b11000101_u8`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("0b")?;
        self.fmt_pow2_radix(f, 1, false)
    }
}

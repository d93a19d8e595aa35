//! Per-bit knowledge tracking for compiler value analysis.
//!
//! A [KnownBits] is a pair of same-width [ApInt] masks. A bit set in `zero`
//! means the tracked value's bit is known to be 0, a bit set in `one` means
//! it is known to be 1, and a bit set in neither is unknown (the default). A
//! bit set in both is a conflict, which indicates contradictory information
//! was merged upstream; the lattice does not attempt to resolve it.
//!
//! All bitwise reasoning delegates to `ApInt`'s operators, and `ApInt` knows
//! nothing of this module.

use core::num::NonZeroUsize;

use crate::ApInt;

/// Known-zero and known-one masks describing partial knowledge of the bits
/// of an integer of a fixed bitwidth
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct KnownBits {
    pub zero: ApInt,
    pub one: ApInt,
}

impl KnownBits {
    /// Returns the all-unknown lattice value of bitwidth `w`
    #[must_use]
    pub fn unknown(w: NonZeroUsize) -> Self {
        Self {
            zero: ApInt::zero(w),
            one: ApInt::zero(w),
        }
    }

    /// Returns the lattice value that knows every bit of `value`
    #[must_use]
    pub fn constant(value: &ApInt) -> Self {
        Self {
            zero: value.not(),
            one: value.clone(),
        }
    }

    /// Returns the tracked bitwidth
    #[inline]
    #[must_use]
    pub fn bw(&self) -> usize {
        self.zero.bw()
    }

    /// Returns the tracked bitwidth as a `NonZeroUsize`
    #[inline]
    #[must_use]
    pub fn nzbw(&self) -> NonZeroUsize {
        self.zero.nzbw()
    }

    /// If some bit is claimed to be both known zero and known one. Correct,
    /// non-degenerate analysis never produces this.
    #[must_use]
    pub fn has_conflict(&self) -> bool {
        let mut tmp = self.zero.clone();
        tmp.and_assign(&self.one);
        !tmp.is_zero()
    }

    /// If every bit is known
    #[must_use]
    pub fn is_constant(&self) -> bool {
        debug_assert!(!self.has_conflict());
        let mut tmp = self.zero.clone();
        tmp.or_assign(&self.one);
        tmp.is_umax()
    }

    /// Returns the concrete value when every bit is known
    ///
    /// # Panics
    ///
    /// If `!self.is_constant()`, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn get_constant(&self) -> ApInt {
        assert!(self.is_constant(), "the value is not fully known");
        self.one.clone()
    }

    /// If the value is known to be zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.zero.is_umax()
    }

    /// If the value is known to be all ones
    #[must_use]
    pub fn is_all_ones(&self) -> bool {
        self.one.is_umax()
    }

    /// Sets every bit to known zero
    pub fn set_all_zero(&mut self) {
        self.zero.umax_assign();
        self.one.zero_assign();
    }

    /// Sets every bit to known one
    pub fn set_all_ones(&mut self) {
        self.zero.zero_assign();
        self.one.umax_assign();
    }

    /// Resets every bit to unknown
    pub fn reset_all(&mut self) {
        self.zero.zero_assign();
        self.one.zero_assign();
    }

    /// If the sign bit is known to be one
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.one.msb()
    }

    /// If the sign bit is known to be zero
    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        self.zero.msb()
    }

    /// Pins the sign bit to known one
    pub fn make_negative(&mut self) {
        let msb = self.bw() - 1;
        self.one.set_bit(msb);
    }

    /// Pins the sign bit to known zero
    pub fn make_non_negative(&mut self) {
        let msb = self.bw() - 1;
        self.zero.set_bit(msb);
    }

    /// Truncates both masks to bitwidth `w`
    ///
    /// # Panics
    ///
    /// If `w >= self.bw()`, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn trunc(&self, w: NonZeroUsize) -> Self {
        Self {
            zero: self.zero.trunc(w),
            one: self.one.trunc(w),
        }
    }

    /// Zero-extends the lattice to bitwidth `w`. If `extended_bits_known_zero`
    /// is set, the newly introduced high bits are known zero (the tracked
    /// value is being zero-extended); otherwise they are unknown (the tracked
    /// value's high bits are arbitrary).
    ///
    /// # Panics
    ///
    /// If `w <= self.bw()`, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn zext(&self, w: NonZeroUsize, extended_bits_known_zero: bool) -> Self {
        let old_bw = self.bw();
        let mut zero = self.zero.zext(w);
        if extended_bits_known_zero {
            zero.set_high_bits(w.get() - old_bw);
        }
        Self {
            zero,
            one: self.one.zext(w),
        }
    }

    /// Sign-extends the lattice to bitwidth `w`: the new high bits take on
    /// whatever is known of the sign bit.
    ///
    /// # Panics
    ///
    /// If `w <= self.bw()`, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn sext(&self, w: NonZeroUsize) -> Self {
        Self {
            zero: self.zero.sext(w),
            one: self.one.sext(w),
        }
    }

    /// [KnownBits::zext] or [KnownBits::trunc], whichever applies
    #[must_use]
    pub fn zext_or_trunc(&self, w: NonZeroUsize, extended_bits_known_zero: bool) -> Self {
        if w.get() < self.bw() {
            self.trunc(w)
        } else if w.get() > self.bw() {
            self.zext(w, extended_bits_known_zero)
        } else {
            self.clone()
        }
    }

    /// The minimum number of trailing zeros the value can have: bits forced
    /// to zero at the bottom
    #[must_use]
    pub fn count_min_trailing_zeros(&self) -> usize {
        self.zero.trailing_ones()
    }

    /// The minimum number of trailing ones the value can have
    #[must_use]
    pub fn count_min_trailing_ones(&self) -> usize {
        self.one.trailing_ones()
    }

    /// The maximum number of trailing zeros the value can have: bits not
    /// forced to one at the bottom
    #[must_use]
    pub fn count_max_trailing_zeros(&self) -> usize {
        self.one.tz()
    }

    /// The maximum number of trailing ones the value can have
    #[must_use]
    pub fn count_max_trailing_ones(&self) -> usize {
        self.zero.tz()
    }

    /// The minimum number of leading zeros the value can have
    #[must_use]
    pub fn count_min_leading_zeros(&self) -> usize {
        self.zero.leading_ones()
    }

    /// The minimum number of leading ones the value can have
    #[must_use]
    pub fn count_min_leading_ones(&self) -> usize {
        self.one.leading_ones()
    }

    /// The maximum number of leading zeros the value can have
    #[must_use]
    pub fn count_max_leading_zeros(&self) -> usize {
        self.one.lz()
    }

    /// The maximum number of leading ones the value can have
    #[must_use]
    pub fn count_max_leading_ones(&self) -> usize {
        self.zero.lz()
    }

    /// The minimum number of redundant sign bits, including the sign bit
    /// itself
    #[must_use]
    pub fn count_min_sign_bits(&self) -> usize {
        if self.is_non_negative() {
            return self.count_min_leading_zeros()
        }
        if self.is_negative() {
            return self.count_min_leading_ones()
        }
        // an unknown sign bit still counts as one sign bit
        1
    }

    /// The minimum number of one bits the value can have: the bits forced to
    /// one
    #[must_use]
    pub fn count_min_population(&self) -> usize {
        self.one.count_ones()
    }

    /// The maximum number of one bits the value can have: everything not
    /// forced to zero
    #[must_use]
    pub fn count_max_population(&self) -> usize {
        self.bw() - self.zero.count_ones()
    }

    /// The largest value consistent with the known bits: every bit not known
    /// zero set
    #[must_use]
    pub fn max_value(&self) -> ApInt {
        self.zero.not()
    }

    /// The smallest value consistent with the known bits: only the known one
    /// bits set
    #[must_use]
    pub fn min_value(&self) -> ApInt {
        self.one.clone()
    }

    /// Computes the known bits of `lhs + rhs + carry` without knowing the
    /// concrete values, where `carry` is a 1-bit lattice value for the
    /// carry-in.
    ///
    /// The two optimistic sums bound what the result can be: one treats
    /// every unknown bit as favoring zeros, the other as favoring ones. A
    /// result bit is known exactly when the operand bits and the incoming
    /// carry bit are all individually known there, which is detected through
    /// the carry-chain identity `sum = lhs ^ rhs ^ carry` applied to both
    /// optimistic sums; the final known set intersects the operand known
    /// sets with the known carry chain.
    ///
    /// # Panics
    ///
    /// If the operand bitwidths mismatch or `carry.bw() != 1`, this function
    /// will panic.
    #[track_caller]
    #[must_use]
    pub fn compute_for_add_carry(lhs: &Self, rhs: &Self, carry: &Self) -> Self {
        assert!(carry.bw() == 1, "the carry lattice must be 1 bit wide");
        Self::add_carry_impl(
            lhs,
            rhs,
            carry.zero.get_bit(0),
            carry.one.get_bit(0),
        )
    }

    fn add_carry_impl(lhs: &Self, rhs: &Self, carry_zero: bool, carry_one: bool) -> Self {
        lhs.zero.assert_same_bw(&rhs.zero);

        // possible-all-zero-bits sum: maximize both operands, and the carry
        // unless it is known zero
        let mut possible_sum_zero = lhs.max_value();
        possible_sum_zero.add_assign(&rhs.max_value());
        possible_sum_zero.inc_assign(!carry_zero);
        // possible-all-one-bits sum: minimize both operands, and the carry
        // only when it is known one
        let mut possible_sum_one = lhs.min_value();
        possible_sum_one.add_assign(&rhs.min_value());
        possible_sum_one.inc_assign(carry_one);

        // carry bits known through the carry-chain xor identity
        let mut carry_known_zero = possible_sum_zero.clone();
        carry_known_zero.xor_assign(&lhs.zero);
        carry_known_zero.xor_assign(&rhs.zero);
        carry_known_zero.not_assign();
        let mut carry_known_one = possible_sum_one.clone();
        carry_known_one.xor_assign(&lhs.one);
        carry_known_one.xor_assign(&rhs.one);

        let mut lhs_known = lhs.zero.clone();
        lhs_known.or_assign(&lhs.one);
        let mut rhs_known = rhs.zero.clone();
        rhs_known.or_assign(&rhs.one);
        let mut carry_known = carry_known_zero;
        carry_known.or_assign(&carry_known_one);

        // a sum bit is known only where the operands and the carry chain are
        // all known
        let mut known = lhs_known;
        known.and_assign(&rhs_known);
        known.and_assign(&carry_known);

        let mut zero = possible_sum_zero.not();
        zero.and_assign(&known);
        let mut one = possible_sum_one;
        one.and_assign(&known);
        Self { zero, one }
    }

    /// Computes the known bits of `lhs + rhs` (when `is_add`) or `lhs - rhs`
    /// through [KnownBits::compute_for_add_carry]. Subtraction complements
    /// the subtrahend's masks and forces the carry-in to one, from the two's
    /// complement identity `a - b = a + !b + 1`.
    ///
    /// When `no_signed_wrap` asserts the operation cannot wrap in the signed
    /// sense and the generic carry computation left the sign bit unknown,
    /// the sign bit is refined: adding two non-negatives (or subtracting a
    /// negative from a non-negative) cannot go negative, and the all-negative
    /// converse cannot go non-negative.
    ///
    /// # Panics
    ///
    /// If the operand bitwidths mismatch, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn compute_for_add_sub(is_add: bool, no_signed_wrap: bool, lhs: &Self, rhs: &Self) -> Self {
        let mut out = if is_add {
            // carry-in known zero
            Self::add_carry_impl(lhs, rhs, true, false)
        } else {
            // complement the masks of `rhs` and force the carry-in to one
            let rhs_inv = Self {
                zero: rhs.one.clone(),
                one: rhs.zero.clone(),
            };
            Self::add_carry_impl(lhs, &rhs_inv, false, true)
        };
        if no_signed_wrap && !out.is_negative() && !out.is_non_negative() {
            if is_add && lhs.is_non_negative() && rhs.is_non_negative() {
                out.make_non_negative();
            } else if is_add && lhs.is_negative() && rhs.is_negative() {
                out.make_negative();
            } else if !is_add && lhs.is_non_negative() && rhs.is_negative() {
                out.make_non_negative();
            } else if !is_add && lhs.is_negative() && rhs.is_non_negative() {
                out.make_negative();
            }
        }
        out
    }
}

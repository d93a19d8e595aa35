use apint_internals::*;

use crate::ApInt;

/// # Summation
impl ApInt {
    /// Increment-assigns `self` with a carry-in `cin` and returns the
    /// carry-out bit. If `cin == true` then one is added to `self`, otherwise
    /// nothing happens. `false` is always returned unless `self.is_umax()`.
    pub fn inc_assign(&mut self, cin: bool) -> bool {
        if !cin {
            return false
        }
        let len = self.len();
        for i in 0..(len - 1) {
            match self.as_slice()[i].overflowing_add(1) {
                (v, false) => {
                    self.as_mut_slice()[i] = v;
                    return false
                }
                // if the bits were relatively random, this should rarely
                // happen
                (v, true) => {
                    self.as_mut_slice()[i] = v;
                }
            }
        }
        let (last, oflow) = self.last().overflowing_add(1);
        if self.extra() == 0 {
            *self.last_mut() = last;
            oflow
        } else {
            let mask = MAX << self.extra();
            let oflow = (last & mask) != 0;
            *self.last_mut() = last & !mask;
            oflow
        }
    }

    /// Decrement-assigns `self` with a carry-in `cin` and returns the
    /// carry-out bit. If `cin == false` then one is subtracted from `self`,
    /// otherwise nothing happens. `true` is always returned unless
    /// `self.is_zero()`.
    pub fn dec_assign(&mut self, cin: bool) -> bool {
        if cin {
            return true
        }
        let len = self.len();
        for i in 0..(len - 1) {
            match self.as_slice()[i].overflowing_sub(1) {
                (v, false) => {
                    self.as_mut_slice()[i] = v;
                    return true
                }
                (v, true) => {
                    self.as_mut_slice()[i] = v;
                }
            }
        }
        if self.extra() == 0 {
            let (last, oflow) = self.last().overflowing_add(!0);
            *self.last_mut() = last;
            oflow
        } else {
            let mask = MAX << self.extra();
            let last = self.last().wrapping_add(!mask);
            *self.last_mut() = last & !mask;
            (last & mask) != 0
        }
    }

    /// Negate-assigns `self` if `neg` is true. Note that signed minimum
    /// values will overflow back to themselves.
    pub fn neg_assign(&mut self, neg: bool) {
        if neg {
            self.not_assign();
            self.inc_assign(true);
        }
    }

    /// Absolute-value-assigns `self`. Note that signed minimum values will
    /// overflow, unless `self` is interpreted as unsigned after a call to
    /// this function.
    pub fn abs_assign(&mut self) {
        self.neg_assign(self.msb());
    }

    /// Add-assigns by `rhs`, wrapping around modulo `2^self.bw()`
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch, this function will panic.
    #[track_caller]
    pub fn add_assign(&mut self, rhs: &Self) {
        self.assert_same_bw(rhs);
        let mut carry = 0;
        for (x, y) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            let tmp = widen_add(*x, *y, carry);
            *x = tmp.0;
            carry = tmp.1;
        }
        self.clear_unused_bits();
    }

    /// Subtract-assigns by `rhs`, wrapping around modulo `2^self.bw()`
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch, this function will panic.
    #[track_caller]
    pub fn sub_assign(&mut self, rhs: &Self) {
        self.assert_same_bw(rhs);
        let mut carry = 1;
        for (x, y) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            let tmp = widen_add(*x, !*y, carry);
            *x = tmp.0;
            carry = tmp.1;
        }
        self.clear_unused_bits();
    }

    /// A general summation with carry-in `cin`. `self` is set to
    /// `lhs + rhs + cin`. The unsigned overflow (equivalent to the carry-out
    /// bit) and the signed overflow are returned as a tuple.
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch, this function will panic.
    #[track_caller]
    pub fn cin_sum_assign(&mut self, cin: bool, lhs: &Self, rhs: &Self) -> (bool, bool) {
        self.assert_same_bw(lhs);
        self.assert_same_bw(rhs);
        let len = self.len();
        let mut carry = cin as Digit;
        for i in 0..(len - 1) {
            let tmp = widen_add(lhs.as_slice()[i], rhs.as_slice()[i], carry);
            self.as_mut_slice()[i] = tmp.0;
            carry = tmp.1;
        }
        let tmp = widen_add(lhs.last(), rhs.last(), carry);
        let extra = self.extra();
        if extra == 0 {
            let lhs_sign = (lhs.last() as IDigit) < 0;
            let rhs_sign = (rhs.last() as IDigit) < 0;
            let output_sign = (tmp.0 as IDigit) < 0;
            *self.last_mut() = tmp.0;
            (
                tmp.1 != 0,
                // Signed overflow only happens if the two input signs are the
                // same and the output sign is different
                (lhs_sign == rhs_sign) && (output_sign != lhs_sign),
            )
        } else {
            let lhs_sign = (lhs.last() & (1 << (extra - 1))) != 0;
            let rhs_sign = (rhs.last() & (1 << (extra - 1))) != 0;
            let output_sign = (tmp.0 & (1 << (extra - 1))) != 0;
            let mask = MAX << extra;
            // handle clearing of unused bits
            *self.last_mut() = tmp.0 & !mask;
            (
                (tmp.0 & mask) != 0,
                (lhs_sign == rhs_sign) && (output_sign != lhs_sign),
            )
        }
    }

    /// Returns `self + rhs`, wrapping around modulo `2^self.bw()`
    #[track_caller]
    #[must_use]
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        let mut res = self.clone();
        res.add_assign(rhs);
        res
    }

    /// Returns `self - rhs`, wrapping around modulo `2^self.bw()`
    #[track_caller]
    #[must_use]
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        let mut res = self.clone();
        res.sub_assign(rhs);
        res
    }

    /// Returns the two's complement negation of `self`. Note that signed
    /// minimum values wrap back to themselves.
    #[must_use]
    pub fn wrapping_neg(&self) -> Self {
        let mut res = self.clone();
        res.neg_assign(true);
        res
    }

    /// Returns the absolute value of the signed interpretation of `self`.
    /// Note that signed minimum values wrap back to themselves.
    #[must_use]
    pub fn abs(&self) -> Self {
        let mut res = self.clone();
        res.abs_assign();
        res
    }

    /// Wrapping addition that also reports whether the exact unsigned sum
    /// could not be represented in `self.bw()` bits
    #[track_caller]
    #[must_use]
    pub fn uadd_ov(&self, rhs: &Self) -> (Self, bool) {
        let mut res = Self::zero(self.nzbw());
        let (uof, _) = res.cin_sum_assign(false, self, rhs);
        (res, uof)
    }

    /// Wrapping addition that also reports whether the exact signed sum could
    /// not be represented in `self.bw()` bits
    #[track_caller]
    #[must_use]
    pub fn sadd_ov(&self, rhs: &Self) -> (Self, bool) {
        let mut res = Self::zero(self.nzbw());
        let (_, iof) = res.cin_sum_assign(false, self, rhs);
        (res, iof)
    }

    /// Wrapping subtraction that also reports whether the exact unsigned
    /// difference could not be represented in `self.bw()` bits (i.e. whether
    /// a borrow occured)
    #[track_caller]
    #[must_use]
    pub fn usub_ov(&self, rhs: &Self) -> (Self, bool) {
        let mut res = Self::zero(self.nzbw());
        let tmp = rhs.not();
        let (carry, _) = res.cin_sum_assign(true, self, &tmp);
        // no carry-out means the subtraction borrowed
        (res, !carry)
    }

    /// Wrapping subtraction that also reports whether the exact signed
    /// difference could not be represented in `self.bw()` bits
    #[track_caller]
    #[must_use]
    pub fn ssub_ov(&self, rhs: &Self) -> (Self, bool) {
        let mut res = Self::zero(self.nzbw());
        let tmp = rhs.not();
        // `a - b == a + !b + 1`, and the sign of `!b` is the opposite of the
        // sign of `b`, so the signed overflow of this summation is exactly
        // the signed overflow of the subtraction
        let (_, iof) = res.cin_sum_assign(true, self, &tmp);
        (res, iof)
    }

    /// Addition that saturates to the unsigned maximum instead of wrapping
    #[track_caller]
    #[must_use]
    pub fn uadd_sat(&self, rhs: &Self) -> Self {
        let (res, ov) = self.uadd_ov(rhs);
        if ov {
            Self::umax(self.nzbw())
        } else {
            res
        }
    }

    /// Addition that saturates to the signed maximum or minimum instead of
    /// wrapping
    #[track_caller]
    #[must_use]
    pub fn sadd_sat(&self, rhs: &Self) -> Self {
        let (res, ov) = self.sadd_ov(rhs);
        if ov {
            // the operand signs agree on overflow, saturate toward them
            if self.msb() {
                Self::imin(self.nzbw())
            } else {
                Self::imax(self.nzbw())
            }
        } else {
            res
        }
    }

    /// Subtraction that saturates to zero instead of wrapping
    #[track_caller]
    #[must_use]
    pub fn usub_sat(&self, rhs: &Self) -> Self {
        let (res, ov) = self.usub_ov(rhs);
        if ov {
            Self::zero(self.nzbw())
        } else {
            res
        }
    }

    /// Subtraction that saturates to the signed maximum or minimum instead of
    /// wrapping
    #[track_caller]
    #[must_use]
    pub fn ssub_sat(&self, rhs: &Self) -> Self {
        let (res, ov) = self.ssub_ov(rhs);
        if ov {
            if self.msb() {
                Self::imin(self.nzbw())
            } else {
                Self::imax(self.nzbw())
            }
        } else {
            res
        }
    }
}

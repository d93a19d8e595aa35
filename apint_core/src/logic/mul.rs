use apint_internals::*;

use crate::ApInt;

/// # Multiplication
impl ApInt {
    /// Assigns `cin + (self * rhs)` to `self` and returns the overflow
    pub fn short_cin_mul(&mut self, cin: Digit, rhs: Digit) -> Digit {
        let mut carry = cin;
        for x in self.as_mut_slice() {
            let tmp = widen_mul_add(*x, rhs, carry);
            *x = tmp.0;
            carry = tmp.1;
        }
        let oflow = if self.extra() == 0 {
            carry
        } else {
            (self.last() >> self.extra()) | (carry << (BITS - self.extra()))
        };
        self.clear_unused_bits();
        oflow
    }

    /// Add-assigns `lhs * rhs` to `self` and returns if overflow happened
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch, this function will panic.
    #[track_caller]
    pub fn short_mul_add_assign(&mut self, lhs: &Self, rhs: Digit) -> bool {
        self.assert_same_bw(lhs);
        let mut mul_carry = 0;
        let mut add_carry = 0;
        for (x, y) in self.as_mut_slice().iter_mut().zip(lhs.as_slice()) {
            let tmp0 = widen_mul_add(*y, rhs, mul_carry);
            mul_carry = tmp0.1;
            let tmp1 = widen_add(*x, tmp0.0, add_carry);
            add_carry = tmp1.1;
            *x = tmp1.0;
        }
        let oflow = if self.extra() == 0 {
            (mul_carry != 0) || (add_carry != 0)
        } else {
            (mul_carry != 0)
                || (add_carry != 0)
                || ((self.last() >> self.extra()) != 0)
        };
        self.clear_unused_bits();
        oflow
    }

    /// Multiply-assigns `self` by `rhs`, wrapping around modulo
    /// `2^self.bw()`
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch, this function will panic.
    #[track_caller]
    pub fn mul_assign(&mut self, rhs: &Self) {
        self.assert_same_bw(rhs);
        let mut pad = Self::zero(self.nzbw());
        let len = self.len();
        for self_i in 0..len {
            // carry from the short multiplication
            let mut carry0 = 0;
            let mut carry1 = 0;
            for rhs_i in 0..(len - self_i) {
                let tmp0 = widen_mul_add(
                    self.as_slice()[self_i],
                    rhs.as_slice()[rhs_i],
                    carry0,
                );
                carry0 = tmp0.1;
                let tmp1 = widen_add(pad.as_slice()[self_i + rhs_i], tmp0.0, carry1);
                carry1 = tmp1.1;
                pad.as_mut_slice()[self_i + rhs_i] = tmp1.0;
            }
        }
        pad.clear_unused_bits();
        self.copy_assign(&pad);
    }

    /// Returns `self * rhs`, wrapping around modulo `2^self.bw()`
    #[track_caller]
    #[must_use]
    pub fn wrapping_mul(&self, rhs: &Self) -> Self {
        let mut res = self.clone();
        res.mul_assign(rhs);
        res
    }

    /// Wrapping multiplication that also reports whether the exact unsigned
    /// product could not be represented in `self.bw()` bits. The detection
    /// divides the wrapped product back out and checks that the round trip
    /// reproduces the operand.
    #[track_caller]
    #[must_use]
    pub fn umul_ov(&self, rhs: &Self) -> (Self, bool) {
        let res = self.wrapping_mul(rhs);
        let ov = if rhs.is_zero() {
            false
        } else {
            &res.udiv(rhs) != self
        };
        (res, ov)
    }

    /// Wrapping multiplication that also reports whether the exact signed
    /// product could not be represented in `self.bw()` bits
    #[track_caller]
    #[must_use]
    pub fn smul_ov(&self, rhs: &Self) -> (Self, bool) {
        let res = self.wrapping_mul(rhs);
        let ov = if rhs.is_zero() {
            false
        } else {
            // `imin * -1` wraps back to `imin` and passes the division round
            // trip, so it needs its own check
            (&res.sdiv(rhs) != self) || (self.is_imin() && rhs.is_umax())
        };
        (res, ov)
    }
}

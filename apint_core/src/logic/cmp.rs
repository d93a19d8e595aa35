use apint_internals::*;

use crate::ApInt;

/// # Comparison
impl ApInt {
    /// If `self` is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.as_slice().iter().all(|x| *x == 0)
    }

    /// If `self` is unsigned-one
    #[must_use]
    pub fn is_uone(&self) -> bool {
        (self.first() == 1) && self.as_slice()[1..].iter().all(|x| *x == 0)
    }

    /// If `self` is unsigned-maximum
    #[must_use]
    pub fn is_umax(&self) -> bool {
        let len = self.len();
        if !self.as_slice()[..(len - 1)].iter().all(|x| *x == MAX) {
            return false
        }
        if self.extra() == 0 {
            self.last() == MAX
        } else {
            self.last() == (MAX >> self.unused())
        }
    }

    /// If `self` is signed-maximum
    #[must_use]
    pub fn is_imax(&self) -> bool {
        let len = self.len();
        if !self.as_slice()[..(len - 1)].iter().all(|x| *x == MAX) {
            return false
        }
        if self.extra() == 0 {
            self.last() == (MAX >> 1)
        } else {
            self.last() == !(MAX << (self.extra() - 1))
        }
    }

    /// If `self` is signed-minimum
    #[must_use]
    pub fn is_imin(&self) -> bool {
        let len = self.len();
        if !self.as_slice()[..(len - 1)].iter().all(|x| *x == 0) {
            return false
        }
        if self.extra() == 0 {
            self.last() == (IDigit::MIN as Digit)
        } else {
            self.last() == (1 << (self.extra() - 1))
        }
    }

    /// If the most significant bit of `self` is set, i.e. if the signed
    /// interpretation of `self` is negative
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.msb()
    }

    /// If the signed interpretation of `self` is zero or positive
    #[inline]
    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        !self.msb()
    }

    /// If exactly one bit of `self` is set
    #[must_use]
    pub fn is_power_of_two(&self) -> bool {
        self.count_ones() == 1
    }

    /// Unsigned-less-than comparison, `self < rhs`
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn ult(&self, rhs: &Self) -> bool {
        self.assert_same_bw(rhs);
        for (x, y) in self.as_slice().iter().zip(rhs.as_slice()).rev() {
            if x != y {
                return x < y
            }
            // else it is indeterminant and the next digit has to be checked
        }
        false
    }

    /// Unsigned-less-than-or-equal comparison, `self <= rhs`
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn ule(&self, rhs: &Self) -> bool {
        !rhs.ult(self)
    }

    /// Unsigned-greater-than comparison, `self > rhs`
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn ugt(&self, rhs: &Self) -> bool {
        rhs.ult(self)
    }

    /// Unsigned-greater-than-or-equal comparison, `self >= rhs`
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn uge(&self, rhs: &Self) -> bool {
        !self.ult(rhs)
    }

    /// Signed-less-than comparison, `self < rhs`
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn slt(&self, rhs: &Self) -> bool {
        self.assert_same_bw(rhs);
        if self.msb() != rhs.msb() {
            return self.msb()
        }
        // the same-sign case reduces to an unsigned comparison
        self.ult(rhs)
    }

    /// Signed-less-than-or-equal comparison, `self <= rhs`
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn sle(&self, rhs: &Self) -> bool {
        !rhs.slt(self)
    }

    /// Signed-greater-than comparison, `self > rhs`
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn sgt(&self, rhs: &Self) -> bool {
        rhs.slt(self)
    }

    /// Signed-greater-than-or-equal comparison, `self >= rhs`
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn sge(&self, rhs: &Self) -> bool {
        !self.slt(rhs)
    }

    /// Compares the unsigned values of `lhs` and `rhs` after zero-extending
    /// the narrower operand to the bitwidth of the wider one. This is the
    /// sanctioned way to compare across differing bitwidths.
    #[must_use]
    pub fn is_same_value(lhs: &Self, rhs: &Self) -> bool {
        if lhs.bw() == rhs.bw() {
            return lhs == rhs
        }
        let (narrow, wide) = if lhs.bw() < rhs.bw() {
            (lhs, rhs)
        } else {
            (rhs, lhs)
        };
        &narrow.zext(wide.nzbw()) == wide
    }
}

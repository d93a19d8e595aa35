use core::num::NonZeroUsize;

use apint_internals::*;

use crate::ApInt;

/// # Bitwise
impl ApInt {
    /// Zero-assigns. Same as the unsigned-minimum-value. All bits are set
    /// to 0.
    pub fn zero_assign(&mut self) {
        for digit in self.as_mut_slice() {
            *digit = 0;
        }
    }

    /// Unsigned-maximum-value-assigns. All bits are set to 1.
    pub fn umax_assign(&mut self) {
        for digit in self.as_mut_slice() {
            *digit = MAX;
        }
        self.clear_unused_bits();
    }

    /// Signed-maximum-value-assigns. All bits are set to 1, except for the
    /// most significant bit.
    pub fn imax_assign(&mut self) {
        self.umax_assign();
        let msb = self.bw() - 1;
        self.clear_bit(msb);
    }

    /// Signed-minimum-value-assigns. Only the most significant bit is set.
    pub fn imin_assign(&mut self) {
        self.zero_assign();
        let msb = self.bw() - 1;
        self.set_bit(msb);
    }

    /// Unsigned-one-assigns. Only the least significant bit is set. The
    /// unsigned distinction is important, because a positive one value does
    /// not exist for signed integers with a bitwidth of 1.
    pub fn uone_assign(&mut self) {
        self.zero_assign();
        *self.first_mut() = 1;
    }

    /// Returns the unsigned-maximum (all ones) value of bitwidth `w`
    #[must_use]
    pub fn umax(w: NonZeroUsize) -> Self {
        let mut res = Self::zero(w);
        res.umax_assign();
        res
    }

    /// Returns the signed-maximum value of bitwidth `w`
    #[must_use]
    pub fn imax(w: NonZeroUsize) -> Self {
        let mut res = Self::zero(w);
        res.imax_assign();
        res
    }

    /// Returns the signed-minimum value of bitwidth `w`
    #[must_use]
    pub fn imin(w: NonZeroUsize) -> Self {
        let mut res = Self::zero(w);
        res.imin_assign();
        res
    }

    /// Returns the unsigned-one value of bitwidth `w`
    #[must_use]
    pub fn uone(w: NonZeroUsize) -> Self {
        let mut res = Self::zero(w);
        res.uone_assign();
        res
    }

    /// Returns a value of bitwidth `w` with only the bit at index `i` set
    ///
    /// # Panics
    ///
    /// If `i >= w`, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn one_bit(w: NonZeroUsize, i: usize) -> Self {
        let mut res = Self::zero(w);
        res.set_bit(i);
        res
    }

    /// Returns a value of bitwidth `w` with exactly the bits in `lo..hi` set
    ///
    /// # Panics
    ///
    /// If `lo > hi` or `hi > w`, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn bit_range(w: NonZeroUsize, lo: usize, hi: usize) -> Self {
        let mut res = Self::zero(w);
        res.set_bit_range(lo, hi);
        res
    }

    /// Returns a value of bitwidth `w` with the `n` most significant bits set
    #[track_caller]
    #[must_use]
    pub fn high_bits(w: NonZeroUsize, n: usize) -> Self {
        let mut res = Self::zero(w);
        res.set_high_bits(n);
        res
    }

    /// Returns a value of bitwidth `w` with the `n` least significant bits
    /// set
    #[track_caller]
    #[must_use]
    pub fn low_bits(w: NonZeroUsize, n: usize) -> Self {
        let mut res = Self::zero(w);
        res.set_low_bits(n);
        res
    }

    /// Returns a value of bitwidth `w` tiled with copies of `pattern`,
    /// starting from bit 0. The last copy is truncated if `w` is not a
    /// multiple of the pattern width.
    #[must_use]
    pub fn splat(w: NonZeroUsize, pattern: &Self) -> Self {
        let mut res = Self::zero(w);
        let step = pattern.bw();
        let mut to = 0;
        while to < w.get() {
            let width = core::cmp::min(step, w.get() - to);
            for i in 0..width {
                if pattern.get_bit(i) {
                    res.set_bit(to + i);
                }
            }
            to += step;
        }
        res
    }

    /// Not-assigns `self`, flipping all bits
    pub fn not_assign(&mut self) {
        for digit in self.as_mut_slice() {
            *digit = !*digit;
        }
        self.clear_unused_bits();
    }

    /// Returns `self` with all bits flipped
    #[must_use]
    pub fn not(&self) -> Self {
        let mut res = self.clone();
        res.not_assign();
        res
    }

    /// Copy-assigns the bits of `rhs` to `self`
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch, this function will panic.
    #[track_caller]
    pub fn copy_assign(&mut self, rhs: &Self) {
        self.assert_same_bw(rhs);
        self.as_mut_slice().copy_from_slice(rhs.as_slice());
    }

    /// Or-assigns `rhs` to `self`
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch, this function will panic.
    #[track_caller]
    pub fn or_assign(&mut self, rhs: &Self) {
        self.assert_same_bw(rhs);
        for (x, y) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *x |= *y;
        }
    }

    /// And-assigns `rhs` to `self`
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch, this function will panic.
    #[track_caller]
    pub fn and_assign(&mut self, rhs: &Self) {
        self.assert_same_bw(rhs);
        for (x, y) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *x &= *y;
        }
    }

    /// Xor-assigns `rhs` to `self`
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch, this function will panic.
    #[track_caller]
    pub fn xor_assign(&mut self, rhs: &Self) {
        self.assert_same_bw(rhs);
        for (x, y) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *x ^= *y;
        }
    }

    /// Returns the bit at index `i`
    ///
    /// # Panics
    ///
    /// If `i >= self.bw()`, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn get_bit(&self, i: usize) -> bool {
        assert!(i < self.bw(), "bit index {} out of range for bitwidth {}", i, self.bw());
        (self.as_slice()[digits_u(i)] & (1 << extra_u(i))) != 0
    }

    /// Sets the bit at index `i`
    ///
    /// # Panics
    ///
    /// If `i >= self.bw()`, this function will panic.
    #[track_caller]
    pub fn set_bit(&mut self, i: usize) {
        assert!(i < self.bw(), "bit index {} out of range for bitwidth {}", i, self.bw());
        self.as_mut_slice()[digits_u(i)] |= 1 << extra_u(i);
    }

    /// Clears the bit at index `i`
    ///
    /// # Panics
    ///
    /// If `i >= self.bw()`, this function will panic.
    #[track_caller]
    pub fn clear_bit(&mut self, i: usize) {
        assert!(i < self.bw(), "bit index {} out of range for bitwidth {}", i, self.bw());
        self.as_mut_slice()[digits_u(i)] &= !(1 << extra_u(i));
    }

    /// Flips the bit at index `i`
    ///
    /// # Panics
    ///
    /// If `i >= self.bw()`, this function will panic.
    #[track_caller]
    pub fn flip_bit(&mut self, i: usize) {
        assert!(i < self.bw(), "bit index {} out of range for bitwidth {}", i, self.bw());
        self.as_mut_slice()[digits_u(i)] ^= 1 << extra_u(i);
    }

    /// Sets the bits in the range `lo..hi`. An empty range does nothing.
    ///
    /// # Panics
    ///
    /// If `lo > hi` or `hi > self.bw()`, this function will panic.
    #[track_caller]
    pub fn set_bit_range(&mut self, lo: usize, hi: usize) {
        assert!(lo <= hi && hi <= self.bw(), "invalid bit range {}..{} for bitwidth {}", lo, hi, self.bw());
        if lo == hi {
            return
        }
        let start = digits_u(lo);
        let end = digits_u(hi);
        let start_bits = extra_u(lo);
        let end_bits = extra_u(hi);
        if start == end {
            // The range is entirely contained in one digit
            self.as_mut_slice()[start] |= (MAX << start_bits) & (MAX >> (BITS - end_bits));
            return
        }
        self.as_mut_slice()[start] |= MAX << start_bits;
        for i in (start + 1)..end {
            self.as_mut_slice()[i] = MAX;
        }
        if end_bits != 0 {
            self.as_mut_slice()[end] |= MAX >> (BITS - end_bits);
        }
    }

    /// Sets the `n` least significant bits
    ///
    /// # Panics
    ///
    /// If `n > self.bw()`, this function will panic.
    #[track_caller]
    pub fn set_low_bits(&mut self, n: usize) {
        self.set_bit_range(0, n);
    }

    /// Sets the `n` most significant bits
    ///
    /// # Panics
    ///
    /// If `n > self.bw()`, this function will panic.
    #[track_caller]
    pub fn set_high_bits(&mut self, n: usize) {
        assert!(n <= self.bw(), "cannot set {} high bits of a {} bit value", n, self.bw());
        let lo = self.bw() - n;
        self.set_bit_range(lo, self.bw());
    }

    /// Splices the bits of `sub` into `self` starting at the bit index `pos`,
    /// leaving all other bits unchanged. When the position is digit aligned
    /// whole digits are moved at once, otherwise a general bitwise path is
    /// taken.
    ///
    /// # Panics
    ///
    /// If `pos + sub.bw() > self.bw()`, this function will panic.
    #[track_caller]
    pub fn insert_bits(&mut self, sub: &Self, pos: usize) {
        let subw = sub.bw();
        assert!(
            pos + subw <= self.bw(),
            "cannot insert {} bits at position {} into a {} bit value",
            subw,
            pos,
            self.bw()
        );
        if extra_u(pos) == 0 {
            // digit aligned: move whole digits, then patch the partial last
            // digit of `sub`
            let start = digits_u(pos);
            let whole = digits_u(subw);
            for i in 0..whole {
                self.as_mut_slice()[start + i] = sub.as_slice()[i];
            }
            let sub_extra = extra_u(subw);
            if sub_extra != 0 {
                let mask = MAX >> (BITS - sub_extra);
                let digit = &mut self.as_mut_slice()[start + whole];
                *digit = (*digit & !mask) | (sub.as_slice()[whole] & mask);
            }
            return
        }
        for i in 0..subw {
            if sub.get_bit(i) {
                self.set_bit(pos + i);
            } else {
                self.clear_bit(pos + i);
            }
        }
    }

    /// Extracts a `w` bit field starting at the bit index `pos`. This is the
    /// inverse operation of [ApInt::insert_bits].
    ///
    /// # Panics
    ///
    /// If `pos + w > self.bw()`, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn extract_bits(&self, w: NonZeroUsize, pos: usize) -> Self {
        assert!(
            pos + w.get() <= self.bw(),
            "cannot extract {} bits at position {} from a {} bit value",
            w.get(),
            pos,
            self.bw()
        );
        let mut res = Self::zero(w);
        let len = res.len();
        for i in 0..len {
            res.as_mut_slice()[i] = self.get_digit(pos + (i * BITS));
        }
        res.clear_unused_bits();
        res
    }
}

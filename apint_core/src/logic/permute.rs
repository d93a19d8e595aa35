use apint_internals::*;

use crate::ApInt;

/// # Bit permutation
impl ApInt {
    /// Shift-left-assigns at the digit level
    fn digit_shl_assign(&mut self, s: usize) {
        let s = digits_u(s);
        if s == 0 {
            return
        }
        let len = self.len();
        for i in (s..len).rev() {
            let tmp = self.as_slice()[i - s];
            self.as_mut_slice()[i] = tmp;
        }
        for i in 0..s {
            self.as_mut_slice()[i] = 0;
        }
    }

    /// Shift-left-assigns according to the extra bits of `s`
    fn subdigit_shl_assign(&mut self, s: usize) {
        let s = extra_u(s);
        if s != 0 {
            let len = self.len();
            for i in (1..len).rev() {
                let tmp = (self.as_slice()[i - 1] >> (BITS - s)) | (self.as_slice()[i] << s);
                self.as_mut_slice()[i] = tmp;
            }
            *self.first_mut() <<= s;
        }
        self.clear_unused_bits();
    }

    /// Shift-right-assigns at the digit level, filling vacated digits with
    /// `extension`
    fn digit_shr_assign(&mut self, s: usize, extension: bool) {
        let s = digits_u(s);
        if s == 0 {
            return
        }
        let len = self.len();
        for i in s..len {
            let tmp = self.as_slice()[i];
            self.as_mut_slice()[i - s] = tmp;
        }
        if extension && (self.unused() != 0) {
            // the old last digit moved down and needs its top filled
            let extra = self.extra();
            self.as_mut_slice()[len - 1 - s] |= MAX << extra;
        }
        let fill = if extension { MAX } else { 0 };
        for i in (len - s)..len {
            self.as_mut_slice()[i] = fill;
        }
        if extension {
            self.clear_unused_bits();
        }
    }

    /// Shift-right-assigns according to the extra bits of `s`. `self` must
    /// already be sign-filled above the original bitwidth when `extension` is
    /// requested, which [ApInt::digit_shr_assign] takes care of.
    fn subdigit_shr_assign(&mut self, s: usize, extension: bool) {
        let s = extra_u(s);
        if s == 0 {
            return
        }
        let len = self.len();
        // temporarily fill the unused bits so the extension shifts in ones
        if extension && (self.unused() != 0) {
            *self.last_mut() |= MAX << self.extra();
        }
        for i in 0..(len - 1) {
            let tmp = (self.as_slice()[i] >> s) | (self.as_slice()[i + 1] << (BITS - s));
            self.as_mut_slice()[i] = tmp;
        }
        if extension {
            let last = self.last() >> s;
            *self.last_mut() = last | (MAX << (BITS - s));
        } else {
            *self.last_mut() >>= s;
        }
        self.clear_unused_bits();
    }

    /// Left-shift-assigns by `s` bits. Shifting by the full bitwidth zeroes
    /// `self`.
    ///
    /// # Panics
    ///
    /// If `s > self.bw()`, this function will panic.
    #[track_caller]
    pub fn shl_assign(&mut self, s: usize) {
        assert!(s <= self.bw(), "shift amount {} exceeds bitwidth {}", s, self.bw());
        if s == self.bw() {
            self.zero_assign();
            return
        }
        self.digit_shl_assign(s);
        self.subdigit_shl_assign(s);
    }

    /// Logical-right-shift-assigns by `s` bits, shifting in zeros. Shifting
    /// by the full bitwidth zeroes `self`.
    ///
    /// # Panics
    ///
    /// If `s > self.bw()`, this function will panic.
    #[track_caller]
    pub fn lshr_assign(&mut self, s: usize) {
        assert!(s <= self.bw(), "shift amount {} exceeds bitwidth {}", s, self.bw());
        if s == self.bw() {
            self.zero_assign();
            return
        }
        self.digit_shr_assign(s, false);
        self.subdigit_shr_assign(s, false);
    }

    /// Arithmetic-right-shift-assigns by `s` bits, shifting in copies of the
    /// sign bit. Shifting by the full bitwidth fills `self` with the sign
    /// bit.
    ///
    /// # Panics
    ///
    /// If `s > self.bw()`, this function will panic.
    #[track_caller]
    pub fn ashr_assign(&mut self, s: usize) {
        assert!(s <= self.bw(), "shift amount {} exceeds bitwidth {}", s, self.bw());
        let msb = self.msb();
        if s == self.bw() {
            if msb {
                self.umax_assign();
            } else {
                self.zero_assign();
            }
            return
        }
        self.digit_shr_assign(s, msb);
        self.subdigit_shr_assign(s, msb);
    }

    /// Rotate-left-assigns by `s % self.bw()` bits
    pub fn rotl_assign(&mut self, s: usize) {
        let s = s % self.bw();
        if s == 0 {
            return
        }
        let mut tmp = self.clone();
        tmp.lshr_assign(self.bw() - s);
        self.shl_assign(s);
        self.or_assign(&tmp);
    }

    /// Rotate-right-assigns by `s % self.bw()` bits
    pub fn rotr_assign(&mut self, s: usize) {
        let s = s % self.bw();
        if s == 0 {
            return
        }
        let mut tmp = self.clone();
        tmp.shl_assign(self.bw() - s);
        self.lshr_assign(s);
        self.or_assign(&tmp);
    }

    /// Returns `self << s`. Shifting by the full bitwidth returns zero.
    #[track_caller]
    #[must_use]
    pub fn shl(&self, s: usize) -> Self {
        let mut res = self.clone();
        res.shl_assign(s);
        res
    }

    /// Returns the logical right shift `self >> s`
    #[track_caller]
    #[must_use]
    pub fn lshr(&self, s: usize) -> Self {
        let mut res = self.clone();
        res.lshr_assign(s);
        res
    }

    /// Returns the arithmetic right shift `self >> s`
    #[track_caller]
    #[must_use]
    pub fn ashr(&self, s: usize) -> Self {
        let mut res = self.clone();
        res.ashr_assign(s);
        res
    }

    /// Returns `self.rotl_assign(s)` applied to a copy
    #[must_use]
    pub fn rotl(&self, s: usize) -> Self {
        let mut res = self.clone();
        res.rotl_assign(s);
        res
    }

    /// Returns `self.rotr_assign(s)` applied to a copy
    #[must_use]
    pub fn rotr(&self, s: usize) -> Self {
        let mut res = self.clone();
        res.rotr_assign(s);
        res
    }

    /// Reduces an `ApInt` shift amount to a `usize`, clamping the effective
    /// amount to `self.bw()`. Unlike raw machine shifts, oversized amounts
    /// are well defined and saturate to the all-zero or sign-filled result.
    fn clamped_shift_amount(&self, s: &Self) -> usize {
        if s.sig() > BITS {
            return self.bw()
        }
        core::cmp::min(s.first() as usize, self.bw())
    }

    /// [ApInt::shl] with the amount given as an `ApInt` of any bitwidth. The
    /// effective amount is clamped to `self.bw()`.
    #[must_use]
    pub fn shl_apint(&self, s: &Self) -> Self {
        self.shl(self.clamped_shift_amount(s))
    }

    /// [ApInt::lshr] with the amount given as an `ApInt` of any bitwidth. The
    /// effective amount is clamped to `self.bw()`.
    #[must_use]
    pub fn lshr_apint(&self, s: &Self) -> Self {
        self.lshr(self.clamped_shift_amount(s))
    }

    /// [ApInt::ashr] with the amount given as an `ApInt` of any bitwidth. The
    /// effective amount is clamped to `self.bw()`.
    #[must_use]
    pub fn ashr_apint(&self, s: &Self) -> Self {
        self.ashr(self.clamped_shift_amount(s))
    }

    /// Left shift that also reports whether any set bits were shifted out,
    /// i.e. whether the exact unsigned value `self * 2^s` could not be
    /// represented in `self.bw()` bits
    #[track_caller]
    #[must_use]
    pub fn ushl_ov(&self, s: usize) -> (Self, bool) {
        if s >= self.bw() {
            return (Self::zero(self.nzbw()), !self.is_zero())
        }
        (self.shl(s), s > self.lz())
    }

    /// Left shift that also reports whether the exact signed value
    /// `self * 2^s` could not be represented in `self.bw()` bits
    #[track_caller]
    #[must_use]
    pub fn sshl_ov(&self, s: usize) -> (Self, bool) {
        if s >= self.bw() {
            return (Self::zero(self.nzbw()), !self.is_zero())
        }
        let ov = if self.is_non_negative() {
            s >= self.lz()
        } else {
            s >= self.leading_ones()
        };
        (self.shl(s), ov)
    }

    /// Returns `self` with the order of its bytes reversed. For bitwidths
    /// that are not a multiple of 8 the value is viewed as
    /// `ceil(self.bw() / 8)` bytes with the partial byte at the top.
    #[must_use]
    pub fn byte_swap(&self) -> Self {
        // word-size fast paths
        if self.bw() == 8 {
            return self.clone()
        }
        match self.bw() {
            16 => return Self::from_u64(self.nzbw(), ((self.first() as u16).swap_bytes()) as u64),
            32 => return Self::from_u64(self.nzbw(), ((self.first() as u32).swap_bytes()) as u64),
            48 => {
                return Self::from_u64(self.nzbw(), self.first().swap_bytes() >> 16)
            }
            64 => return Self::from_u64(self.nzbw(), self.first().swap_bytes()),
            _ => (),
        }
        let bytes = self.bw().div_ceil(8);
        let mut res = Self::zero(self.nzbw());
        for i in 0..bytes {
            let byte = self.get_digit(i * 8) & 0xff;
            res.digit_or_assign(byte, (bytes - 1 - i) * 8);
        }
        res
    }

    /// Returns `self` with the order of its bits reversed
    #[must_use]
    pub fn reverse_bits(&self) -> Self {
        // word-size fast paths
        match self.bw() {
            8 => return Self::from_u64(self.nzbw(), ((self.first() as u8).reverse_bits()) as u64),
            16 => {
                return Self::from_u64(self.nzbw(), ((self.first() as u16).reverse_bits()) as u64)
            }
            32 => {
                return Self::from_u64(self.nzbw(), ((self.first() as u32).reverse_bits()) as u64)
            }
            64 => return Self::from_u64(self.nzbw(), self.first().reverse_bits()),
            _ => (),
        }
        let mut res = Self::zero(self.nzbw());
        let bw = self.bw();
        for i in 0..bw {
            if self.get_bit(i) {
                res.set_bit(bw - 1 - i);
            }
        }
        res
    }
}

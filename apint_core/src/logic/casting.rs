use core::num::NonZeroUsize;

use apint_internals::*;

use crate::ApInt;

/// # Casting between bitwidths
///
/// The strict [ApInt::trunc], [ApInt::zext], and [ApInt::sext] require the
/// new bitwidth to actually narrow or widen; the `*_or_self` and `*_or_trunc`
/// variants are the no-op-tolerant conveniences.
impl ApInt {
    /// Copies `self` into a new value of bitwidth `w`, filling any new high
    /// bits with `extension` and truncating if `w` is narrower.
    #[must_use]
    pub(crate) fn resize(&self, w: NonZeroUsize, extension: bool) -> Self {
        let mut res = Self::zero(w);
        if w.get() <= self.bw() {
            // truncation
            let len = res.len();
            res.as_mut_slice().copy_from_slice(&self.as_slice()[..len]);
            res.clear_unused_bits();
        } else {
            let len = self.len();
            res.as_mut_slice()[..len].copy_from_slice(self.as_slice());
            if extension {
                if self.unused() != 0 {
                    res.as_mut_slice()[len - 1] |= MAX << self.extra();
                }
                for digit in &mut res.as_mut_slice()[len..] {
                    *digit = MAX;
                }
                res.clear_unused_bits();
            }
        }
        res
    }

    /// Truncates `self` to a new value of bitwidth `w`, dropping the high
    /// bits
    ///
    /// # Panics
    ///
    /// If `w >= self.bw()`, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn trunc(&self, w: NonZeroUsize) -> Self {
        assert!(
            w.get() < self.bw(),
            "truncation target width {} is not narrower than {}",
            w.get(),
            self.bw()
        );
        self.resize(w, false)
    }

    /// Zero-extends `self` to a new value of bitwidth `w`
    ///
    /// # Panics
    ///
    /// If `w <= self.bw()`, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn zext(&self, w: NonZeroUsize) -> Self {
        assert!(
            w.get() > self.bw(),
            "zero extension target width {} is not wider than {}",
            w.get(),
            self.bw()
        );
        self.resize(w, false)
    }

    /// Sign-extends `self` to a new value of bitwidth `w`
    ///
    /// # Panics
    ///
    /// If `w <= self.bw()`, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn sext(&self, w: NonZeroUsize) -> Self {
        assert!(
            w.get() > self.bw(),
            "sign extension target width {} is not wider than {}",
            w.get(),
            self.bw()
        );
        self.resize(w, self.msb())
    }

    /// [ApInt::trunc] that lets equal-width casts through as plain copies
    ///
    /// # Panics
    ///
    /// If `w > self.bw()`, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn trunc_or_self(&self, w: NonZeroUsize) -> Self {
        if w.get() == self.bw() {
            self.clone()
        } else {
            self.trunc(w)
        }
    }

    /// [ApInt::zext] that lets equal-width casts through as plain copies
    ///
    /// # Panics
    ///
    /// If `w < self.bw()`, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn zext_or_self(&self, w: NonZeroUsize) -> Self {
        if w.get() == self.bw() {
            self.clone()
        } else {
            self.zext(w)
        }
    }

    /// [ApInt::sext] that lets equal-width casts through as plain copies
    ///
    /// # Panics
    ///
    /// If `w < self.bw()`, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn sext_or_self(&self, w: NonZeroUsize) -> Self {
        if w.get() == self.bw() {
            self.clone()
        } else {
            self.sext(w)
        }
    }

    /// Zero-extends or truncates `self` to bitwidth `w`, whichever applies
    #[must_use]
    pub fn zext_or_trunc(&self, w: NonZeroUsize) -> Self {
        if w.get() == self.bw() {
            self.clone()
        } else {
            self.resize(w, false)
        }
    }

    /// Sign-extends or truncates `self` to bitwidth `w`, whichever applies
    #[must_use]
    pub fn sext_or_trunc(&self, w: NonZeroUsize) -> Self {
        if w.get() == self.bw() {
            self.clone()
        } else if w.get() < self.bw() {
            self.resize(w, false)
        } else {
            self.resize(w, self.msb())
        }
    }
}

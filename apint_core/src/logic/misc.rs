use apint_internals::*;

use crate::ApInt;

/// # Miscellanious
impl ApInt {
    /// Returns the least significant bit
    #[inline]
    #[must_use]
    pub fn lsb(&self) -> bool {
        (self.first() & 1) != 0
    }

    /// Returns the most significant bit
    #[inline]
    #[must_use]
    pub fn msb(&self) -> bool {
        if self.extra() == 0 {
            (self.last() as IDigit) < 0
        } else {
            (self.last() & (1 << (self.extra() - 1))) != 0
        }
    }

    /// Returns the number of leading zero bits
    #[must_use]
    pub fn lz(&self) -> usize {
        let len = self.len();
        for (i, x) in self.as_slice().iter().enumerate().rev() {
            if *x != 0 {
                return ((len - 1 - i) * BITS) + (x.leading_zeros() as usize) - self.unused()
            }
        }
        self.bw()
    }

    /// Returns the number of trailing zero bits
    #[must_use]
    pub fn tz(&self) -> usize {
        for (i, x) in self.as_slice().iter().enumerate() {
            if *x != 0 {
                return (i * BITS) + (x.trailing_zeros() as usize)
            }
        }
        self.bw()
    }

    /// Returns the number of leading one bits
    #[must_use]
    pub fn leading_ones(&self) -> usize {
        let len = self.len();
        let extra = self.extra();
        for (i, x) in self.as_slice().iter().enumerate().rev() {
            // fill the unused zero bits of the last digit so they do not
            // break the run of ones
            let x = if (i == (len - 1)) && (extra != 0) {
                *x | (MAX << extra)
            } else {
                *x
            };
            if x != MAX {
                return ((len - 1 - i) * BITS) + (x.leading_ones() as usize) - self.unused()
            }
        }
        self.bw()
    }

    /// Returns the number of trailing one bits
    #[must_use]
    pub fn trailing_ones(&self) -> usize {
        for (i, x) in self.as_slice().iter().enumerate() {
            if *x != MAX {
                let ones = (i * BITS) + (x.trailing_ones() as usize);
                return core::cmp::min(ones, self.bw())
            }
        }
        self.bw()
    }

    /// Returns the number of set ones
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.as_slice()
            .iter()
            .map(|x| x.count_ones() as usize)
            .sum()
    }

    /// Returns the number of significant bits in the unsigned interpretation
    /// of `self`, i.e. `self.bw() - self.lz()`
    #[inline]
    #[must_use]
    pub fn sig(&self) -> usize {
        self.bw() - self.lz()
    }

    /// Returns the number of redundant copies of the sign bit, including the
    /// sign bit itself. The result is at least 1 and is `self.bw()` for zero
    /// and all-ones values.
    #[must_use]
    pub fn sign_bits(&self) -> usize {
        if self.msb() {
            self.leading_ones()
        } else {
            let lz = self.lz();
            if lz == 0 {
                1
            } else {
                lz
            }
        }
    }

    /// Returns the unsigned value of `self` as a `u64`
    ///
    /// # Panics
    ///
    /// If the value does not fit in 64 bits, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn to_u64(&self) -> u64 {
        assert!(
            self.sig() <= BITS,
            "unsigned value with {} significant bits does not fit in a u64",
            self.sig()
        );
        self.first()
    }

    /// Returns the signed value of `self` as an `i64`
    ///
    /// # Panics
    ///
    /// If the signed value does not fit in 64 bits, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn to_i64(&self) -> i64 {
        assert!(
            (self.bw() - self.sign_bits() + 1) <= BITS,
            "signed value with {} significant bits does not fit in an i64",
            self.bw() - self.sign_bits() + 1
        );
        let mut x = self.first();
        if self.msb() && (self.bw() < BITS) {
            // sign extend from within the first digit
            x |= MAX << self.bw();
        }
        x as i64
    }
}

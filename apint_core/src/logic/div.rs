use alloc::vec;
use alloc::vec::Vec;

use apint_internals::*;

use crate::ApInt;

/// Splits the least significant `sig` bits of `x` into little endian 32-bit
/// half-words, with no leading zero half-words beyond `ceil(sig / 32)`.
fn to_half_words(x: &ApInt, sig: usize) -> Vec<u32> {
    let len = sig.div_ceil(HALF_BITS);
    let mut res = Vec::with_capacity(len);
    for i in 0..len {
        res.push(x.get_digit(i * HALF_BITS) as u32);
    }
    res
}

/// Reassembles little endian 32-bit half-words into an `ApInt` of bitwidth
/// `w`, zero-filling the rest
fn from_half_words(w: core::num::NonZeroUsize, hw: &[u32]) -> ApInt {
    let mut res = ApInt::zero(w);
    for (i, x) in hw.iter().enumerate() {
        res.digit_or_assign(*x as Digit, i * HALF_BITS);
    }
    res
}

/// Knuth's Algorithm D on 32-bit half-words. `u` and `v` are little endian
/// with nonzero most significant half-words, `u` has at least as many
/// half-words as `v`, and `v` has at least two. Returns the quotient and
/// remainder half-words.
fn knuth_divide(u: &[u32], v: &[u32]) -> (Vec<u32>, Vec<u32>) {
    const B: u64 = 1 << HALF_BITS;
    let m = u.len();
    let n = v.len();
    debug_assert!(n >= 2);
    debug_assert!(m >= n);
    debug_assert!(v[n - 1] != 0);

    // D1. Normalize so the divisor's most significant bit is set.
    let s = v[n - 1].leading_zeros();
    let mut vn = vec![0u32; n];
    for i in (1..n).rev() {
        vn[i] = shl_carry(v[i], v[i - 1], s);
    }
    vn[0] = v[0] << s;
    let mut un = vec![0u32; m + 1];
    un[m] = if s == 0 {
        0
    } else {
        u[m - 1] >> (HALF_BITS as u32 - s)
    };
    for i in (1..m).rev() {
        un[i] = shl_carry(u[i], u[i - 1], s);
    }
    un[0] = u[0] << s;

    let mut q = vec![0u32; m - n + 1];
    for j in (0..=(m - n)).rev() {
        // D3. Estimate the quotient digit from the top two half-words of the
        // running dividend and the top half-word of the divisor.
        let numer = ((un[j + n] as u64) << HALF_BITS) | (un[j + n - 1] as u64);
        let mut qhat = numer / (vn[n - 1] as u64);
        let mut rhat = numer % (vn[n - 1] as u64);
        // The estimate can be off by at most 2; each correction step
        // decrements it once.
        loop {
            if qhat >= B
                || qhat * (vn[n - 2] as u64) > ((rhat << HALF_BITS) | (un[j + n - 2] as u64))
            {
                qhat -= 1;
                rhat += vn[n - 1] as u64;
                if rhat < B {
                    continue
                }
            }
            break
        }

        // D4. Multiply and subtract.
        let mut k: i64 = 0;
        for i in 0..n {
            let p = qhat * (vn[i] as u64);
            let t = (un[i + j] as i64) - k - ((p & (B - 1)) as i64);
            un[i + j] = t as u32;
            k = ((p >> HALF_BITS) as i64) - (t >> HALF_BITS);
        }
        let t = (un[j + n] as i64) - k;
        un[j + n] = t as u32;

        q[j] = qhat as u32;
        if t < 0 {
            // D6. The estimate was one too large, add the divisor back.
            q[j] -= 1;
            let mut carry = 0u64;
            for i in 0..n {
                let t = (un[i + j] as u64) + (vn[i] as u64) + carry;
                un[i + j] = t as u32;
                carry = t >> HALF_BITS;
            }
            un[j + n] = un[j + n].wrapping_add(carry as u32);
        }
    }

    // D8. Denormalize the remainder.
    let mut rem = vec![0u32; n];
    for i in 0..(n - 1) {
        rem[i] = shr_carry(un[i], un[i + 1], s);
    }
    rem[n - 1] = if s == 0 {
        un[n - 1]
    } else {
        shr_carry(un[n - 1], un[n], s)
    };
    (q, rem)
}

#[inline]
fn shl_carry(hi: u32, lo: u32, s: u32) -> u32 {
    if s == 0 {
        hi
    } else {
        (hi << s) | (lo >> (HALF_BITS as u32 - s))
    }
}

#[inline]
fn shr_carry(lo: u32, hi: u32, s: u32) -> u32 {
    if s == 0 {
        lo
    } else {
        (lo >> s) | (hi << (HALF_BITS as u32 - s))
    }
}

/// # Division
///
/// Note about terminology: the first three letters of "divide", "dividend",
/// and "divisor" all clash with each other, so we use "quo" for quotient,
/// "rem" for remainder, "div" for divisor, and "duo" for dividend (it serves
/// two purposes, being repeatedly subtracted from until it becomes the
/// remainder in the internal algorithms).
///
/// Note that signed division can overflow when `duo.is_imin()` and
/// `div.is_umax()` (negative one in signed interpretation). The overflow
/// results in `quo.is_imin()` and `rem.is_zero()`; [ApInt::sdiv_ov] reports
/// it.
impl ApInt {
    /// Unsigned-divides `self` by `div`, sets `self` to the quotient, and
    /// returns the remainder
    ///
    /// # Panics
    ///
    /// If `div == 0`, this function will panic.
    #[track_caller]
    pub(crate) fn short_udivide_assign(&mut self, div: Digit) -> Digit {
        assert!(div != 0, "division by zero");
        let mut rem = 0;
        let len = self.len();
        for i in (0..len).rev() {
            let y = self.as_slice()[i];
            // the previous remainder is strictly less than `div`, so the
            // quotient of each step fits in one digit
            let tmp = dd_division((y, rem), (div, 0));
            rem = tmp.1 .0;
            self.as_mut_slice()[i] = tmp.0 .0;
        }
        rem
    }

    /// Unsigned-divides `self` by `div` and returns the quotient and
    /// remainder as a tuple.
    ///
    /// The fast paths: a hardware division when the bitwidth fits one digit,
    /// and a half-word short division when the divisor occupies a single
    /// 32-bit half-word. Everything else decomposes into 32-bit half-words
    /// and runs Knuth's Algorithm D.
    ///
    /// # Panics
    ///
    /// If `div == 0` or the bitwidths mismatch, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn udivrem(&self, div: &Self) -> (Self, Self) {
        self.assert_same_bw(div);
        assert!(!div.is_zero(), "division by zero");
        let w = self.nzbw();

        // single digit fast path
        if self.bw() <= BITS {
            let duo = self.first();
            let d = div.first();
            return (
                Self::from_u64(w, duo.wrapping_div(d)),
                Self::from_u64(w, duo.wrapping_rem(d)),
            )
        }

        // quotient is 0 branch
        if self.ult(div) {
            return (Self::zero(w), self.clone())
        }

        let div_sig = div.sig();
        if div_sig <= HALF_BITS {
            // short division by a single half-word divisor
            let mut quo = self.clone();
            let rem = quo.short_udivide_assign(div.first());
            return (quo, Self::from_u64(w, rem))
        }

        let u = to_half_words(self, self.sig());
        let v = to_half_words(div, div_sig);
        let (q, r) = knuth_divide(&u, &v);
        (from_half_words(w, &q), from_half_words(w, &r))
    }

    /// Returns the unsigned quotient `self / div`
    ///
    /// # Panics
    ///
    /// If `div == 0` or the bitwidths mismatch, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn udiv(&self, div: &Self) -> Self {
        self.udivrem(div).0
    }

    /// Returns the unsigned remainder `self % div`
    ///
    /// # Panics
    ///
    /// If `div == 0` or the bitwidths mismatch, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn urem(&self, div: &Self) -> Self {
        self.udivrem(div).1
    }

    /// Signed-divides `self` by `div` and returns the quotient and remainder
    /// as a tuple. The quotient truncates toward zero and the remainder has
    /// the sign of the dividend (or is zero).
    ///
    /// # Panics
    ///
    /// If `div == 0` or the bitwidths mismatch, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn sdivrem(&self, div: &Self) -> (Self, Self) {
        let duo_msb = self.msb();
        let div_msb = div.msb();
        let mut duo = self.clone();
        let mut div = div.clone();
        duo.neg_assign(duo_msb);
        div.neg_assign(div_msb);
        let (mut quo, mut rem) = duo.udivrem(&div);
        quo.neg_assign(duo_msb != div_msb);
        rem.neg_assign(duo_msb);
        (quo, rem)
    }

    /// Returns the signed quotient `self / div`, truncating toward zero
    ///
    /// # Panics
    ///
    /// If `div == 0` or the bitwidths mismatch, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn sdiv(&self, div: &Self) -> Self {
        self.sdivrem(div).0
    }

    /// Returns the signed remainder of `self / div`, with the sign of `self`
    ///
    /// # Panics
    ///
    /// If `div == 0` or the bitwidths mismatch, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn srem(&self, div: &Self) -> Self {
        self.sdivrem(div).1
    }

    /// Signed division that also reports overflow, which happens exactly for
    /// `imin / -1`
    ///
    /// # Panics
    ///
    /// If `div == 0` or the bitwidths mismatch, this function will panic.
    #[track_caller]
    #[must_use]
    pub fn sdiv_ov(&self, div: &Self) -> (Self, bool) {
        let ov = self.is_imin() && div.is_umax();
        (self.sdiv(div), ov)
    }
}

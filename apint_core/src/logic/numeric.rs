use apint_internals::*;

use crate::ApInt;

/// The magic multiplier and shift replacing a signed division by a constant,
/// from [ApInt::magics]
pub struct Magics {
    pub m: ApInt,
    pub s: usize,
}

/// The magic multiplier, shift, and add indicator replacing an unsigned
/// division by a constant, from [ApInt::magicu]
pub struct MagicsU {
    pub m: ApInt,
    pub s: usize,
    pub a: bool,
}

/// # Numerics
impl ApInt {
    /// Returns the integer square root of the unsigned interpretation of
    /// `self`.
    ///
    /// Magnitudes of at most 5 bits are a table lookup, magnitudes below 52
    /// bits round trip through the hardware `sqrt` (a double's mantissa
    /// represents them exactly), and larger magnitudes run a Babylonian
    /// iteration from a power-of-two estimate. Both computed tiers finish
    /// with an exact boundary correction against `x^2` and `(x + 1)^2`.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        let w = self.nzbw();
        let magnitude = self.sig();

        if magnitude <= 5 {
            const RESULTS: [u8; 32] = [
                0, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 5, 5,
                5, 5, 5, 5, 5,
            ];
            return Self::from_u64(w, RESULTS[self.first() as usize] as u64)
        }

        if magnitude < 52 {
            let v = self.first();
            let mut r = libm::sqrt(v as f64) as u64;
            while r * r > v {
                r -= 1;
            }
            while (r + 1) * (r + 1) <= v {
                r += 1;
            }
            return Self::from_u64(w, r)
        }

        // `2^ceil(magnitude / 2)` is at least the root, derived from the
        // binary logarithm of the value
        let mut x = Self::one_bit(w, (magnitude + 1) / 2);
        loop {
            let mut next = self.udiv(&x);
            next.add_assign(&x);
            next.lshr_assign(1);
            if next.uge(&x) {
                break
            }
            x = next;
        }
        // boundary correction in a width that cannot overflow the squares
        let ww = bw(self.bw() + 2);
        let wide = self.zext(ww);
        loop {
            let xw = x.zext(ww);
            if xw.wrapping_mul(&xw).ugt(&wide) {
                x.dec_assign(false);
            } else {
                break
            }
        }
        loop {
            let mut xw = x.zext(ww);
            xw.inc_assign(true);
            if xw.wrapping_mul(&xw).ule(&wide) {
                x.inc_assign(true);
            } else {
                break
            }
        }
        x
    }

    /// Returns the multiplicative inverse of `self` modulo `modulo`, derived
    /// with the extended Euclidean algorithm, or zero if `self` and `modulo`
    /// are not coprime. The result is normalized to be non-negative.
    ///
    /// # Panics
    ///
    /// If the bitwidths mismatch or `self.uge(modulo)`, this function will
    /// panic.
    #[track_caller]
    #[must_use]
    pub fn multiplicative_inverse(&self, modulo: &Self) -> Self {
        self.assert_same_bw(modulo);
        assert!(
            self.ult(modulo),
            "the value must be smaller than the modulo"
        );
        let w = self.nzbw();
        // remainders and Bezout coefficients of the two most recent steps;
        // the coefficients wrap modulo `2^bw` and are interpreted as signed
        let mut r = [modulo.clone(), self.clone()];
        let mut t = [Self::zero(w), Self::uone(w)];
        let mut i = 0;
        while !r[i ^ 1].is_zero() {
            let q = r[i].udiv(&r[i ^ 1]);
            let qr = q.wrapping_mul(&r[i ^ 1]);
            r[i].sub_assign(&qr);
            let qt = q.wrapping_mul(&t[i ^ 1]);
            t[i].sub_assign(&qt);
            i ^= 1;
        }
        if !r[i].is_uone() {
            // not coprime, no inverse exists
            return Self::zero(w)
        }
        let mut res = t[i].clone();
        if res.msb() {
            res.add_assign(modulo);
        }
        res
    }

    /// Calculates the magic number and shift amount for replacing a signed
    /// division by the constant `self` with a multiply and shift, following
    /// Hacker's Delight. The divisor must not be 0, 1, or -1.
    ///
    /// The iteration refines `p` until `2^p` exceeds the correction bound;
    /// the loop condition must stay exactly as written for the result to be
    /// correct, and the loop terminates within `2 * self.bw()` iterations.
    #[must_use]
    pub fn magics(&self) -> Magics {
        let w = self.nzbw();
        let d = self;
        let bw = self.bw();
        debug_assert!(!self.is_zero() && !self.is_uone() && !self.is_umax());
        let signed_min = Self::imin(w);
        let ad = d.abs();
        let t = signed_min.wrapping_add(&d.lshr(bw - 1));
        // the absolute value of nc
        let anc = {
            let mut anc = t.clone();
            anc.dec_assign(false);
            anc.sub_assign(&t.urem(&ad));
            anc
        };
        let mut p = bw - 1;
        let mut q1 = signed_min.udiv(&anc);
        let mut r1 = signed_min.wrapping_sub(&q1.wrapping_mul(&anc));
        let mut q2 = signed_min.udiv(&ad);
        let mut r2 = signed_min.wrapping_sub(&q2.wrapping_mul(&ad));
        loop {
            p += 1;
            q1.shl_assign(1);
            r1.shl_assign(1);
            if r1.uge(&anc) {
                q1.inc_assign(true);
                r1.sub_assign(&anc);
            }
            q2.shl_assign(1);
            r2.shl_assign(1);
            if r2.uge(&ad) {
                q2.inc_assign(true);
                r2.sub_assign(&ad);
            }
            let delta = ad.wrapping_sub(&r2);
            if !(q1.ult(&delta) || ((q1 == delta) && r1.is_zero())) {
                break
            }
        }
        let mut m = q2;
        m.inc_assign(true);
        if d.msb() {
            m.neg_assign(true);
        }
        Magics { m, s: p - bw }
    }

    /// Calculates the magic number, shift amount, and "add" indicator for
    /// replacing an unsigned division by the nonzero constant `self` with a
    /// multiply, adds, and shift, following Hacker's Delight.
    ///
    /// As with [ApInt::magics], the loop condition must stay exactly as
    /// written; it is additionally bounded by `p < 2 * self.bw()`.
    #[must_use]
    pub fn magicu(&self) -> MagicsU {
        let w = self.nzbw();
        let d = self;
        let bw = self.bw();
        debug_assert!(!self.is_zero());
        let signed_min = Self::imin(w);
        let signed_max = Self::imax(w);
        let mut a = false;
        let nc = Self::umax(w).wrapping_sub(&d.wrapping_neg().urem(d));
        let mut p = bw - 1;
        let mut q1 = signed_min.udiv(&nc);
        let mut r1 = signed_min.wrapping_sub(&q1.wrapping_mul(&nc));
        let mut q2 = signed_max.udiv(d);
        let mut r2 = signed_max.wrapping_sub(&q2.wrapping_mul(d));
        loop {
            p += 1;
            if r1.uge(&nc.wrapping_sub(&r1)) {
                q1 = q1.wrapping_add(&q1);
                q1.inc_assign(true);
                r1 = r1.wrapping_add(&r1);
                r1.sub_assign(&nc);
            } else {
                q1 = q1.wrapping_add(&q1);
                r1 = r1.wrapping_add(&r1);
            }
            let mut r2p1 = r2.clone();
            r2p1.inc_assign(true);
            if r2p1.uge(&d.wrapping_sub(&r2)) {
                if q2.uge(&signed_max) {
                    a = true;
                }
                q2 = q2.wrapping_add(&q2);
                q2.inc_assign(true);
                r2 = r2.wrapping_add(&r2);
                r2.inc_assign(true);
                r2.sub_assign(d);
            } else {
                if q2.uge(&signed_min) {
                    a = true;
                }
                q2 = q2.wrapping_add(&q2);
                r2 = r2.wrapping_add(&r2);
                r2.inc_assign(true);
            }
            let delta = {
                let mut delta = d.clone();
                delta.dec_assign(false);
                delta.sub_assign(&r2);
                delta
            };
            if !((p < bw * 2) && (q1.ult(&delta) || ((q1 == delta) && r1.is_zero()))) {
                break
            }
        }
        let mut m = q2;
        m.inc_assign(true);
        MagicsU { m, s: p - bw, a }
    }
}

/// Returns the greatest common divisor of the unsigned interpretations of
/// `a` and `b`, using Stein's binary algorithm: strip the common power of
/// two, then repeatedly subtract the smaller from the larger and re-strip
/// powers of two.
///
/// # Panics
///
/// If the bitwidths mismatch, this function will panic.
#[track_caller]
#[must_use]
pub fn gcd(mut a: ApInt, mut b: ApInt) -> ApInt {
    a.assert_same_bw(&b);
    if a.is_zero() {
        return b
    }
    if b.is_zero() {
        return a
    }
    let a_tz = a.tz();
    let b_tz = b.tz();
    let pow2 = core::cmp::min(a_tz, b_tz);
    a.lshr_assign(a_tz);
    b.lshr_assign(b_tz);
    while a != b {
        if a.ugt(&b) {
            a.sub_assign(&b);
            a.lshr_assign(a.tz());
        } else {
            b.sub_assign(&a);
            b.lshr_assign(b.tz());
        }
    }
    a.shl_assign(pow2);
    a
}

/// Finds the smallest non-negative integer `n` such that
/// `a*n^2 + b*n + c` wraps to zero modulo `2^range_width`, by shifting the
/// parabola so a real root lies at or after the origin and solving with the
/// quadratic formula in a triple-width signed domain. The coefficients are
/// interpreted as signed.
///
/// The computed crossing is verified with a sign change probe between `x`
/// and `x + 1`; `None` is returned when the parabola jumps the multiple of
/// the modulus without landing on it exactly, so a `None` does not prove
/// that no solution exists.
///
/// # Panics
///
/// If the bitwidths mismatch, `a` is zero, or `range_width` is not in
/// `2..=a.bw()`, this function will panic.
#[track_caller]
#[must_use]
pub fn solve_quadratic_equation_wrap(
    a: &ApInt,
    b: &ApInt,
    c: &ApInt,
    range_width: usize,
) -> Option<ApInt> {
    a.assert_same_bw(b);
    a.assert_same_bw(c);
    assert!(!a.is_zero(), "the quadratic coefficient cannot be zero");
    let cw = a.bw();
    assert!(
        (range_width > 1) && (range_width <= cw),
        "range width {} is not in 2..={}",
        range_width,
        cw
    );
    // the working domain: wide enough that no intermediate wraps
    let ww = bw(cw * 3);
    let mut a = a.sext(ww);
    let mut b = b.sext(ww);
    let mut c = c.sext(ww);
    let r = ApInt::one_bit(ww, range_width);

    // normalize the sign of `a`; negating the whole polynomial preserves its
    // roots modulo `r`
    if a.msb() {
        a.neg_assign(true);
        b.neg_assign(true);
        c.neg_assign(true);
    }

    // replace `c` with the equivalent value in `(-r, 0]`, which guarantees a
    // real root at or after the origin
    let mut c_mod = c.clone();
    let mask = {
        let mut mask = r.clone();
        mask.dec_assign(false);
        mask
    };
    c_mod.and_assign(&mask);
    if c_mod.is_zero() {
        return Some(ApInt::zero(bw(cw)))
    }
    let mut cp = c_mod;
    cp.sub_assign(&r);

    // quadratic formula with an integer square root; the discriminant is at
    // least `b^2` because `-4*a*cp` is positive
    let mut d = b.wrapping_mul(&b);
    let mut t = a.wrapping_mul(&cp);
    t.shl_assign(2);
    d.sub_assign(&t);
    let sq = d.sqrt();
    let two_a = a.shl(1);
    // the numerator is non-negative, so the truncating division is a floor
    let mut x = sq.wrapping_sub(&b).sdiv(&two_a);

    let q = |n: &ApInt| {
        // Horner evaluation of `(a*n + b)*n + cp`
        let mut v = a.wrapping_mul(n);
        v.add_assign(&b);
        v = v.wrapping_mul(n);
        v.add_assign(&cp);
        v
    };

    // the rounding of the square root and the division can land one step
    // away from the crossing
    if !q(&x).msb() && !q(&x).is_zero() {
        x.dec_assign(false);
    } else {
        let mut x1 = x.clone();
        x1.inc_assign(true);
        if q(&x1).msb() {
            x.inc_assign(true);
        }
    }

    let vx = q(&x);
    let mut x1 = x.clone();
    x1.inc_assign(true);
    let vx1 = q(&x1);
    if vx.is_zero() && !x.msb() {
        return Some(x.trunc(bw(cw)))
    }
    if vx1.is_zero() {
        return Some(x1.trunc(bw(cw)))
    }
    // a strict sign change means the value jumped over the multiple of the
    // modulus; anything else means the probe missed entirely
    None
}

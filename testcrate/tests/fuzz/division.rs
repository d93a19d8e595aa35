use apint_core::{bw, ApInt};
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};

use crate::fuzz::{eq, fuzz_step};

/// Checks the Euclidean identity and remainder bounds for one dividend and
/// divisor pair
fn udivision_case(duo: &ApInt, div: &ApInt) {
    let (quo, rem) = duo.udivrem(div);
    // x == y * (x / y) + (x % y); no wrap occurs because the exact values
    // are bounded by the dividend
    eq(&quo.wrapping_mul(div).wrapping_add(&rem), duo);
    assert!(rem.ult(div));
    eq(&duo.udiv(div), &quo);
    eq(&duo.urem(div), &rem);
}

fn sdivision_case(duo: &ApInt, div: &ApInt) {
    let (quo, rem) = duo.sdivrem(div);
    // the identity holds modulo 2^w even in the `imin / -1` overflow case
    eq(&quo.wrapping_mul(div).wrapping_add(&rem), duo);
    // the remainder takes the sign of the dividend or is zero
    assert!(rem.is_zero() || (rem.msb() == duo.msb()));
    // |rem| < |div|
    assert!(rem.abs().ult(&div.abs()) || div.is_imin());
    eq(&duo.sdiv(div), &quo);
    eq(&duo.srem(div), &rem);
}

/// Runs division cases through divisors sized to hit the hardware, short
/// division, and Knuth Algorithm D paths
pub fn division(n: u32, seed: u64, w: usize) {
    let w = bw(w);
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    let mut duo = ApInt::zero(w);
    let mut div = ApInt::zero(w);
    for _ in 0..n {
        fuzz_step(&mut rng, &mut duo);
        fuzz_step(&mut rng, &mut div);
        if div.is_zero() {
            div.uone_assign();
        }
        udivision_case(&duo, &div);
        sdivision_case(&duo, &div);

        // force a divisor that fits one half-word
        if w.get() > 32 {
            let small = div.extract_bits(bw(20), 0).zext(w);
            if !small.is_zero() {
                udivision_case(&duo, &small);
            }
        }
        // force a divisor of about half the width, for the add-back prone
        // Knuth path
        if w.get() > 64 {
            let half = div.extract_bits(bw(w.get() / 2), 0).zext(w);
            if !half.is_zero() {
                udivision_case(&duo, &half);
            }
        }

        // quotient of 0 or 1
        udivision_case(&duo, &ApInt::umax(w));
        if !duo.is_zero() {
            udivision_case(&duo, &duo);
        }

        // signed corner cases, including `imin / -1` wrapping
        let imin = ApInt::imin(w);
        let neg_one = ApInt::umax(w);
        sdivision_case(&imin, &neg_one);
        let (quo, rem) = imin.sdivrem(&neg_one);
        eq(&quo, &imin);
        assert!(rem.is_zero());
        let (_, ov) = imin.sdiv_ov(&neg_one);
        assert!(ov);
        let (_, ov) = duo.sdiv_ov(&div);
        assert_eq!(ov, duo.is_imin() && div.is_umax());
    }
}

use apint_core::{bw, ApInt};
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

use crate::fuzz::{eq, fuzz_step};

/// Checks every overflow-reporting and saturating variant against exact
/// arithmetic performed at a wider bitwidth
pub fn overflow(n: u32, seed: u64, w: usize) {
    let w = bw(w);
    let ww = bw(w.get() * 2);
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    let mut x0 = ApInt::zero(w);
    let mut x1 = ApInt::zero(w);

    // does the wide value fit the narrow unsigned/signed interpretation?
    let ufits = |wide: &ApInt| wide.sig() <= w.get();
    let sfits = |wide: &ApInt| (ww.get() - wide.sign_bits() + 1) <= w.get();

    for _ in 0..n {
        fuzz_step(&mut rng, &mut x0);
        fuzz_step(&mut rng, &mut x1);
        let zx0 = x0.zext(ww);
        let zx1 = x1.zext(ww);
        let sx0 = x0.sext(ww);
        let sx1 = x1.sext(ww);

        // unsigned addition
        let exact = zx0.wrapping_add(&zx1);
        let (res, ov) = x0.uadd_ov(&x1);
        eq(&res, &exact.trunc(w));
        assert_eq!(ov, !ufits(&exact));
        let sat = x0.uadd_sat(&x1);
        if ov {
            assert!(sat.is_umax());
        } else {
            eq(&sat, &res);
        }

        // signed addition
        let exact = sx0.wrapping_add(&sx1);
        let (res, ov) = x0.sadd_ov(&x1);
        eq(&res, &exact.trunc(w));
        assert_eq!(ov, !sfits(&exact));
        let sat = x0.sadd_sat(&x1);
        if ov {
            if x0.msb() {
                assert!(sat.is_imin());
            } else {
                assert!(sat.is_imax());
            }
        } else {
            eq(&sat, &res);
        }

        // unsigned subtraction
        let exact = zx0.wrapping_sub(&zx1);
        let (res, ov) = x0.usub_ov(&x1);
        eq(&res, &exact.trunc(w));
        assert_eq!(ov, x0.ult(&x1));
        let sat = x0.usub_sat(&x1);
        if ov {
            assert!(sat.is_zero());
        } else {
            eq(&sat, &res);
        }

        // signed subtraction
        let exact = sx0.wrapping_sub(&sx1);
        let (res, ov) = x0.ssub_ov(&x1);
        eq(&res, &exact.trunc(w));
        assert_eq!(ov, !sfits(&exact));
        let sat = x0.ssub_sat(&x1);
        if ov {
            if x0.msb() {
                assert!(sat.is_imin());
            } else {
                assert!(sat.is_imax());
            }
        } else {
            eq(&sat, &res);
        }

        // unsigned multiplication
        let exact = zx0.wrapping_mul(&zx1);
        let (res, ov) = x0.umul_ov(&x1);
        eq(&res, &exact.trunc(w));
        assert_eq!(ov, !ufits(&exact));

        // signed multiplication
        let exact = sx0.wrapping_mul(&sx1);
        let (res, ov) = x0.smul_ov(&x1);
        eq(&res, &exact.trunc(w));
        assert_eq!(ov, !sfits(&exact));

        // shifts
        let s = (rng.next_u32() as usize) % (w.get() + 1);
        let exact = zx0.shl(s);
        let (res, ov) = x0.ushl_ov(s);
        eq(&res, &exact.trunc(w));
        assert_eq!(ov, !ufits(&exact));
        let exact = sx0.shl(s);
        let (res, ov) = x0.sshl_ov(s);
        eq(&res, &exact.trunc(w));
        assert_eq!(ov, !sfits(&exact));
    }
}

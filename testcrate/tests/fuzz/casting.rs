use apint_core::{bw, ApInt};
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};

use crate::fuzz::{eq, fuzz_step, ne};

/// Extension and truncation laws across a pair of bitwidths `w0 < w1`
pub fn casting(n: u32, seed: u64, w0: usize, w1: usize) {
    assert!(w0 < w1);
    let w0 = bw(w0);
    let w1 = bw(w1);
    let w2 = bw(w1.get() + 7);
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    let mut x0 = ApInt::zero(w0);
    let mut x1 = ApInt::zero(w1);
    for _ in 0..n {
        fuzz_step(&mut rng, &mut x0);
        fuzz_step(&mut rng, &mut x1);

        // chained extension equals direct extension
        eq(&x0.zext(w1).zext(w2), &x0.zext(w2));
        eq(&x0.sext(w1).sext(w2), &x0.sext(w2));

        // extension then truncation is lossless
        eq(&x0.zext(w1).trunc(w0), &x0);
        eq(&x0.sext(w1).trunc(w0), &x0);

        // truncation then extension only loses when bits were significant
        let round = x1.trunc(w0).zext(w1);
        if x1.sig() <= w0.get() {
            eq(&round, &x1);
        } else {
            ne(&round, &x1);
        }

        // zero extension introduces zeros, sign extension replicates the msb
        let zx = x0.zext(w1);
        assert_eq!(zx.sig(), x0.sig());
        assert!(!zx.msb());
        let sx = x0.sext(w1);
        assert_eq!(sx.msb(), x0.msb());
        if x0.msb() {
            assert_eq!(
                sx.leading_ones(),
                (w1.get() - w0.get()) + x0.leading_ones()
            );
        } else {
            eq(&sx, &zx);
        }

        // the tolerant variants agree with the strict ones
        eq(&x0.zext_or_trunc(w1), &x0.zext(w1));
        eq(&x1.zext_or_trunc(w0), &x1.trunc(w0));
        eq(&x0.zext_or_trunc(w0), &x0);
        eq(&x0.sext_or_trunc(w1), &x0.sext(w1));
        eq(&x1.sext_or_trunc(w0), &x1.trunc(w0));
        eq(&x0.zext_or_self(w0), &x0);
        eq(&x0.sext_or_self(w0), &x0);
        eq(&x0.trunc_or_self(w0), &x0);

        // unsigned values are preserved by zext, signed values by sext
        assert!(ApInt::is_same_value(&x0, &x0.zext(w1)));
        if !x0.is_zero() {
            assert_eq!(x0.zext(w1).tz(), x0.tz());
        }

        // splat tiles the pattern
        let tiled = ApInt::splat(w1, &x0);
        eq(&tiled.extract_bits(w0, 0), &x0);
    }
}

use apint_core::{bw, ApInt};
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

use crate::fuzz::{eq, fuzz_step, ne};

/// Bitwise, additive, multiplicative, shift, and counting identities at a
/// single bitwidth
pub fn identities(n: u32, seed: u64, w: usize) {
    let w = bw(w);
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    let mut x0 = ApInt::zero(w);
    let mut x1 = ApInt::zero(w);
    let mut x2 = ApInt::zero(w);
    let zero = ApInt::zero(w);
    for _ in 0..n {
        fuzz_step(&mut rng, &mut x0);
        fuzz_step(&mut rng, &mut x1);
        fuzz_step(&mut rng, &mut x2);
        let s0 = (rng.next_u32() as usize) % w.get();
        let s1 = (rng.next_u32() as usize) % w.get();

        // identity and inversion
        let mut t0 = x0.clone();
        eq(&x0, &t0);
        t0.not_assign();
        ne(&x0, &t0);
        t0.not_assign();
        eq(&x0, &t0);

        // De Morgan's
        let mut t0 = x0.clone();
        t0.and_assign(&x1);
        t0.not_assign();
        let mut t1 = x0.not();
        t1.or_assign(&x1.not());
        eq(&t0, &t1);

        // XOR negation
        let mut t0 = x0.not();
        t0.xor_assign(&x1);
        let mut t1 = x0.clone();
        t1.xor_assign(&x1.not());
        eq(&t0, &t1);

        // commutativity
        eq(&x0.wrapping_add(&x1), &x1.wrapping_add(&x0));
        eq(&x0.wrapping_mul(&x1), &x1.wrapping_mul(&x0));

        // associativity mod 2^w
        eq(
            &x0.wrapping_add(&x1).wrapping_add(&x2),
            &x0.wrapping_add(&x1.wrapping_add(&x2)),
        );

        // x - x == 0
        eq(&x0.wrapping_sub(&x0), &zero);

        // distributivity mod 2^w
        eq(
            &x0.wrapping_mul(&x1.wrapping_add(&x2)),
            &x0.wrapping_mul(&x1).wrapping_add(&x0.wrapping_mul(&x2)),
        );

        // negation is complement plus one
        let mut t0 = x0.not();
        t0.inc_assign(true);
        eq(&x0.wrapping_neg(), &t0);

        // increments
        let mut t0 = x0.clone();
        let oflow = t0.inc_assign(true);
        assert_eq!(oflow, x0.is_umax());
        ne(&x0, &t0);
        let oflow = t0.dec_assign(false);
        assert_eq!(oflow, !x0.is_umax());
        eq(&x0, &t0);

        // absolute value
        let t0 = x0.abs();
        if t0.msb() {
            assert!(x0.is_imin());
        }
        if x0.msb() {
            eq(&t0, &x0.wrapping_neg());
        } else {
            eq(&t0, &x0);
        }

        // shl and lshr compose into a rotation
        let mut t0 = x0.shl(s0);
        if s0 != 0 {
            t0.or_assign(&x0.lshr(w.get() - s0));
        }
        eq(&t0, &x0.rotl(s0));
        eq(&x0.rotl(s0).rotr(s0), &x0);

        // arithmetic shift is a logical shift plus a sign mask
        let mut t0 = x0.lshr(s0);
        if x0.msb() && (s0 != 0) {
            let mut mask = ApInt::umax(w);
            mask.shl_assign(w.get() - s0);
            t0.or_assign(&mask);
        }
        eq(&t0, &x0.ashr(s0));

        // shift boundary behavior
        eq(&x0.shl(w.get()), &zero);
        eq(&x0.lshr(w.get()), &zero);
        if x0.msb() {
            eq(&x0.ashr(w.get()), &ApInt::umax(w));
        } else {
            eq(&x0.ashr(w.get()), &zero);
        }

        // masking partitions the population count
        let mut t0 = x0.clone();
        t0.and_assign(&ApInt::bit_range(w, 0, s0));
        let mut t1 = x0.clone();
        t1.and_assign(&ApInt::bit_range(w, s0, w.get()));
        assert_eq!(x0.count_ones(), t0.count_ones() + t1.count_ones());

        // leading and trailing counts
        if x0.lz() + x0.tz() >= w.get() {
            assert!(x0.is_zero());
            assert_eq!(x0.count_ones(), 0);
            assert_eq!(x0.lz(), w.get());
            assert_eq!(x0.tz(), w.get());
        } else {
            assert!(x0.count_ones() >= 1);
        }
        assert_eq!(x0.leading_ones(), x0.not().lz());
        assert_eq!(x0.trailing_ones(), x0.not().tz());
        assert_eq!(x0.sig(), w.get() - x0.lz());

        // bit get/set/clear/flip
        let mut t0 = x0.clone();
        t0.set_bit(s0);
        assert!(t0.get_bit(s0));
        t0.clear_bit(s0);
        assert!(!t0.get_bit(s0));
        t0.flip_bit(s0);
        assert!(t0.get_bit(s0));

        // insert then extract round trip
        let field_w = bw((s0 % w.get()) + 1);
        if field_w.get() + s1 <= w.get() {
            let mut t0 = x0.clone();
            let field = x1.extract_bits(field_w, 0);
            t0.insert_bits(&field, s1);
            eq(&t0.extract_bits(field_w, s1), &field);
            // everything else is unchanged
            let mut expect = x0.clone();
            let mut mask = ApInt::bit_range(w, s1, s1 + field_w.get());
            mask.not_assign();
            expect.and_assign(&mask);
            let mut got = t0.clone();
            got.and_assign(&mask);
            eq(&got, &expect);
        }

        // reverse_bits is an involution, byte_swap is for whole-byte widths
        eq(&x0.reverse_bits().reverse_bits(), &x0);
        if (w.get() % 8) == 0 {
            eq(&x0.byte_swap().byte_swap(), &x0);
        }
        assert_eq!(x0.reverse_bits().tz(), x0.lz());

        // cross-width comparison through explicit extension
        assert!(ApInt::is_same_value(&x0, &x0.zext(bw(w.get() + 13))));

        // ordering is consistent with subtraction
        if x0.ult(&x1) {
            assert!(!x1.ule(&x0));
            assert!(x1.ugt(&x0));
            ne(&x0, &x1);
        }
        if x0.slt(&x1) {
            assert!(x1.sgt(&x0));
            assert!(!x1.sle(&x0));
        }
        assert!(x0.ule(&x0) && x0.uge(&x0) && x0.sle(&x0) && x0.sge(&x0));
    }
}

use apint_core::{bw, ApInt};
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};

use crate::fuzz::{eq, fuzz_step};

const RADIXES: [u8; 5] = [2, 8, 10, 16, 36];

/// Round trips every radix through rendering and reparsing, in unsigned,
/// signed, and prefixed forms
pub fn strings(n: u32, seed: u64, w: usize) {
    let w = bw(w);
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    let mut x0 = ApInt::zero(w);
    for _ in 0..n {
        fuzz_step(&mut rng, &mut x0);
        for radix in RADIXES {
            // unsigned round trip
            let s = x0.to_string_unsigned(radix);
            eq(&ApInt::from_str_radix(w, &s, radix).unwrap(), &x0);

            // signed round trip, which may render a leading `-`
            let s = x0.to_string_signed(radix);
            eq(&ApInt::from_str_radix(w, &s, radix).unwrap(), &x0);

            // prefixed rendering for the C-literal radixes
            let s = x0.to_string_radix(radix, false, true);
            let stripped = match radix {
                2 => s.strip_prefix("0b").unwrap(),
                8 => {
                    if x0.is_zero() {
                        // "00" strips to a single zero digit
                        &s[1..]
                    } else {
                        s.strip_prefix('0').unwrap()
                    }
                }
                16 => s.strip_prefix("0x").unwrap(),
                _ => s.as_str(),
            };
            eq(&ApInt::from_str_radix(w, stripped, radix).unwrap(), &x0);

            // a width sized by `bits_needed` always fits the string
            let s = x0.to_string_signed(radix);
            let needed = ApInt::bits_needed(&s, radix).unwrap();
            let nb = bw(needed.max(w.get()));
            let big = ApInt::from_str_radix(nb, &s, radix).unwrap();
            if nb == w {
                eq(&big, &x0);
            } else {
                eq(&big, &x0.sext(nb));
            }
        }

        // underscores are ignored by the parser
        let s = x0.to_string_unsigned(16);
        let mut spaced = String::new();
        for (i, c) in s.chars().enumerate() {
            if (i != 0) && ((i % 2) == 0) {
                spaced.push('_');
            }
            spaced.push(c);
        }
        eq(&ApInt::from_str_radix(w, &spaced, 16).unwrap(), &x0);
    }
}

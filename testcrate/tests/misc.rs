//! Concrete scenario and edge case tests

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use apint_core::{bw, ApInt, ParseError};

fn hash_of(x: &ApInt) -> u64 {
    let mut h = DefaultHasher::new();
    x.hash(&mut h);
    h.finish()
}

#[test]
fn wrapping_scenarios() {
    let w = bw(8);
    // 200 + 100 wraps to 44 and reports unsigned overflow
    let a = ApInt::from_u64(w, 200);
    let b = ApInt::from_u64(w, 100);
    assert_eq!(a.wrapping_add(&b).to_u64(), 44);
    let (res, ov) = a.uadd_ov(&b);
    assert_eq!(res.to_u64(), 44);
    assert!(ov);

    // 255 / 16 == 15 remainder 15
    let duo = ApInt::from_str_radix(w, "255", 10).unwrap();
    let div = ApInt::from_u64(w, 16);
    let (quo, rem) = duo.udivrem(&div);
    assert_eq!(quo.to_u64(), 15);
    assert_eq!(rem.to_u64(), 15);
}

#[test]
fn extension_scenarios() {
    // 7 stays 7 under sign extension
    let x = ApInt::from_u64(bw(4), 7);
    assert_eq!(x.sext(bw(8)), ApInt::from_u64(bw(8), 7));
    // 8 in 4 bits is -8, sign extending gives 0xf8
    let x = ApInt::from_u64(bw(4), 8);
    assert!(x.msb());
    assert_eq!(x.sext(bw(8)).to_u64(), 0xf8);
    assert_eq!(x.sext(bw(8)).to_i64(), -8);
    assert_eq!(x.zext(bw(8)).to_u64(), 8);
}

#[test]
fn constructors() {
    let w = bw(100);
    assert!(ApInt::zero(w).is_zero());
    assert!(ApInt::umax(w).is_umax());
    assert!(ApInt::imax(w).is_imax());
    assert!(ApInt::imin(w).is_imin());
    assert!(ApInt::uone(w).is_uone());
    assert!(!ApInt::imax(w).msb());
    assert!(ApInt::imin(w).msb());
    assert_eq!(ApInt::umax(w).count_ones(), 100);
    assert_eq!(ApInt::imax(w).count_ones(), 99);
    assert_eq!(ApInt::imin(w).count_ones(), 1);
    assert_eq!(ApInt::imin(w).tz(), 99);

    // negative scalars sign-fill every digit
    let x = ApInt::from_i64(w, -2);
    assert_eq!(x.count_ones(), 99);
    assert_eq!(x.to_i64(), -2);

    let x = ApInt::one_bit(w, 77);
    assert_eq!(x.tz(), 77);
    assert_eq!(x.count_ones(), 1);

    let x = ApInt::bit_range(w, 10, 90);
    assert_eq!(x.count_ones(), 80);
    assert_eq!(x.tz(), 10);
    assert_eq!(x.lz(), 10);

    assert_eq!(ApInt::low_bits(w, 30).count_ones(), 30);
    assert_eq!(ApInt::high_bits(w, 30).tz(), 70);

    // splat tiles a pattern, truncating the last copy
    let pat = ApInt::from_u64(bw(8), 0b1000_0001);
    let x = ApInt::splat(bw(20), &pat);
    assert_eq!(x.to_u64(), 0b1000_0001_1000_0001 | (1 << 16));

    // word constructors ignore extra and zero-fill missing digits
    let x = ApInt::from_digits(w, &[1, 2, 3, 4]);
    assert_eq!(x.as_slice(), &[1, 2]);
    let x = ApInt::from_digits(w, &[7]);
    assert_eq!(x.as_slice(), &[7, 0]);
}

#[test]
fn string_scenarios() {
    let w = bw(8);
    let x = ApInt::from_u64(w, 0xf8);
    assert_eq!(x.to_string_signed(10), "-8");
    assert_eq!(x.to_string_unsigned(10), "248");
    assert_eq!(x.to_string_radix(16, false, true), "0xf8");
    assert_eq!(x.to_string_radix(2, false, true), "0b11111000");
    assert_eq!(x.to_string_radix(8, false, true), "0370");
    assert_eq!(ApInt::zero(w).to_string_unsigned(10), "0");
    assert_eq!(ApInt::zero(w).to_string_signed(16), "0");
    assert_eq!(ApInt::imin(w).to_string_signed(10), "-128");
    assert_eq!(ApInt::from_u64(w, 35).to_string_unsigned(36), "z");

    assert_eq!(
        ApInt::from_str_radix(w, "-8", 10).unwrap().to_u64(),
        0xf8
    );
    assert_eq!(ApInt::from_str_radix(w, "+127", 10).unwrap().to_u64(), 127);
    assert_eq!(ApInt::from_str_radix(w, "1111_1000", 2).unwrap().to_u64(), 0xf8);

    // error cases
    assert_eq!(
        ApInt::from_str_radix(w, "", 10).unwrap_err(),
        ParseError::Empty
    );
    assert_eq!(
        ApInt::from_str_radix(w, "12", 2).unwrap_err(),
        ParseError::InvalidChar
    );
    assert_eq!(
        ApInt::from_str_radix(w, "ff", 10).unwrap_err(),
        ParseError::InvalidChar
    );
    assert_eq!(
        ApInt::from_str_radix(w, "256", 10).unwrap_err(),
        ParseError::Overflow
    );
    assert_eq!(
        ApInt::from_str_radix(w, "-129", 10).unwrap_err(),
        ParseError::Overflow
    );
    assert_eq!(
        ApInt::from_str_radix(w, "ff", 12).unwrap_err(),
        ParseError::InvalidRadix
    );
    // leading zeros do not overflow
    assert_eq!(
        ApInt::from_str_radix(w, "000000000255", 10).unwrap().to_u64(),
        255
    );

    // widths sized by `bits_needed` always parse
    let needed = ApInt::bits_needed("deadbeef", 16).unwrap();
    assert!(needed >= 32);
    let x = ApInt::from_str_radix(bw(needed), "deadbeef", 16).unwrap();
    assert_eq!(x.to_u64(), 0xdead_beef);
}

#[test]
fn format_impls() {
    let x = ApInt::from_u64(bw(8), 0b11000101);
    assert_eq!(format!("{x:b}"), "0b11000101_u8");
    assert_eq!(format!("{x:x}"), "0xc5_u8");
    assert_eq!(format!("{x:X}"), "0xC5_u8");
    assert_eq!(format!("{x:o}"), "0o305_u8");
    assert_eq!(format!("{x:?}"), "0xc5_u8");
    let x = ApInt::from_str_radix(bw(100), "fedcba9876543210", 16).unwrap();
    assert_eq!(format!("{x:x}"), "0xfedcba98_76543210_u100");
    assert_eq!(format!("{}", ApInt::zero(bw(100))), "0x0_u100");
}

#[test]
fn hashing() {
    let a = ApInt::from_u64(bw(100), 1234);
    let b = ApInt::from_str_radix(bw(100), "1234", 10).unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    // differing widths are differing keys
    let c = ApInt::from_u64(bw(101), 1234);
    assert_ne!(a, c);
}

#[test]
fn float_conversion() {
    let w = bw(128);
    assert_eq!(ApInt::zero(w).to_f64(false), 0.0);
    assert_eq!(ApInt::from_u64(w, 12345).to_f64(false), 12345.0);
    // 2^70 is exactly representable
    let x = ApInt::one_bit(w, 70);
    assert_eq!(x.to_f64(false), 2.0f64.powi(70));
    // 2^70 + 1 rounds back down to 2^70
    let mut y = x.clone();
    y.inc_assign(true);
    assert_eq!(y.to_f64(false), 2.0f64.powi(70));
    // signed interpretation
    let neg = ApInt::from_i64(w, -12345);
    assert_eq!(neg.to_f64(true), -12345.0);
    assert_eq!(neg.to_f32(true), -12345.0f32);
    // unsigned interpretation of the same bits is huge
    assert!(neg.to_f64(false) > 2.0f64.powi(127));
    // overflow to infinity
    let big = ApInt::umax(bw(2000));
    assert_eq!(big.to_f64(false), f64::INFINITY);
    assert_eq!(big.to_f32(false), f32::INFINITY);
    assert_eq!(big.to_f64(true), -1.0);
    // round to nearest even at the mantissa boundary
    let mut x = ApInt::one_bit(w, 70);
    x.set_bit(70 - 53);
    assert_eq!(x.to_f64(false), 2.0f64.powi(70));
    x.set_bit(0);
    assert!(x.to_f64(false) > 2.0f64.powi(70));
}

#[test]
fn integer_extraction() {
    let x = ApInt::from_u64(bw(100), 0xdead_beef);
    assert_eq!(x.to_u64(), 0xdead_beef);
    assert_eq!(x.to_i64(), 0xdead_beef);
    let x = ApInt::from_i64(bw(100), -77);
    assert_eq!(x.to_i64(), -77);
    let x = ApInt::from_i64(bw(33), -1);
    assert_eq!(x.to_i64(), -1);
    assert_eq!(x.to_u64(), (1 << 33) - 1);
}

#[test]
fn rotations_and_swaps() {
    let w = bw(16);
    let x = ApInt::from_u64(w, 0x1234);
    assert_eq!(x.rotl(4).to_u64(), 0x2341);
    assert_eq!(x.rotr(4).to_u64(), 0x4123);
    assert_eq!(x.rotl(16).to_u64(), 0x1234);
    assert_eq!(x.byte_swap().to_u64(), 0x3412);
    assert_eq!(x.reverse_bits().to_u64(), 0x2c48);

    let w = bw(48);
    let x = ApInt::from_u64(w, 0x0000_1234_5678_9abc);
    assert_eq!(x.byte_swap().to_u64(), 0x0000_bc9a_7856_3412);

    // multi-digit byte swap
    let w = bw(128);
    let x = ApInt::from_digits(w, &[0x0123_4567_89ab_cdef, 0x0011_2233_4455_6677]);
    let y = x.byte_swap();
    assert_eq!(
        y.as_slice(),
        &[0x7766_5544_3322_1100, 0xefcd_ab89_6745_2301]
    );
}

#[test]
fn apint_amount_shifts() {
    let w = bw(64);
    let x = ApInt::from_u64(w, 0xff00);
    // amounts beyond the bitwidth clamp instead of being undefined
    let huge = ApInt::umax(bw(200));
    assert!(x.shl_apint(&huge).is_zero());
    assert!(x.lshr_apint(&huge).is_zero());
    assert!(ApInt::from_i64(w, -1).ashr_apint(&huge).is_umax());
    let four = ApInt::from_u64(bw(8), 4);
    assert_eq!(x.shl_apint(&four).to_u64(), 0xff000);
    assert_eq!(x.lshr_apint(&four).to_u64(), 0xff0);
}

#[test]
#[should_panic]
fn width_mismatch_panics() {
    let a = ApInt::zero(bw(8));
    let b = ApInt::zero(bw(9));
    let _ = a.wrapping_add(&b);
}

#[test]
#[should_panic]
fn division_by_zero_panics() {
    let a = ApInt::from_u64(bw(8), 1);
    let _ = a.udivrem(&ApInt::zero(bw(8)));
}

#[test]
#[should_panic]
fn equal_width_trunc_panics() {
    let a = ApInt::zero(bw(8));
    let _ = a.trunc(bw(8));
}

// not every test binary uses every helper
#![allow(dead_code)]

use apint_core::ApInt;
use rand_xoshiro::{rand_core::RngCore, Xoshiro128StarStar};

mod casting;
mod division;
mod identities;
mod overflow;
mod strings;

pub use casting::casting;
pub use division::division;
pub use identities::identities;
pub use overflow::overflow;
pub use strings::strings;

#[track_caller]
fn check_invariants(x: &ApInt) {
    let extra = x.bw() % 64;
    if (extra != 0) && ((*x.as_slice().last().unwrap() & (u64::MAX << extra)) != 0) {
        panic!("unused bits are set");
    }
}

/// Checks for equality and that invariants are being kept
#[track_caller]
pub fn eq(lhs: &ApInt, rhs: &ApInt) {
    check_invariants(lhs);
    check_invariants(rhs);
    assert_eq!(
        lhs.bw(),
        rhs.bw(),
        "mismatched bitwidths: lhs.bw(): {} rhs.bw(): {}",
        lhs.bw(),
        rhs.bw()
    );
    if lhs != rhs {
        panic!("lhs and rhs are not equal when they should be:\nlhs:{lhs:?} rhs:{rhs:?}");
    }
}

/// Checks for nonequality and that invariants are being kept
#[track_caller]
pub fn ne(lhs: &ApInt, rhs: &ApInt) {
    check_invariants(lhs);
    check_invariants(rhs);
    assert_eq!(
        lhs.bw(),
        rhs.bw(),
        "mismatched bitwidths: lhs.bw(): {} rhs.bw(): {}",
        lhs.bw(),
        rhs.bw()
    );
    if lhs == rhs {
        panic!("lhs and rhs are equal when they should not be:\nlhs:{lhs:?} rhs:{rhs:?}");
    }
}

/// Walks `x` through bit patterns with runs and corner patterns that plain
/// uniform randomness would rarely reach
pub fn fuzz_step(rng: &mut Xoshiro128StarStar, x: &mut ApInt) {
    let r0 = (rng.next_u32() as usize) % x.bw();
    let r1 = (rng.next_u32() as usize) % x.bw();
    let mut tmp = ApInt::umax(x.nzbw());
    tmp.shl_assign(r0);
    tmp.rotl_assign(r1);
    match rng.next_u32() % 4 {
        0 => x.or_assign(&tmp),
        1 => x.and_assign(&tmp),
        _ => x.xor_assign(&tmp),
    }
}

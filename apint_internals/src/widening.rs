use crate::{Digit, BITS};

/// Computes x + y + z and returns the widened result as a tuple.
#[inline]
pub const fn widen_add(x: Digit, y: Digit, z: Digit) -> (Digit, Digit) {
    let (sum, carry0) = x.overflowing_add(y);
    let (sum, carry1) = sum.overflowing_add(z);
    (sum, (carry0 as Digit) + (carry1 as Digit))
}

/// Computes (x * y) + z. This cannot overflow, because it returns the value
/// widened into a tuple, where the first element is the least significant part
/// of the integer and the second is the most significant.
#[inline]
pub const fn widen_mul_add(x: Digit, y: Digit, z: Digit) -> (Digit, Digit) {
    let tmp = (x as u128).wrapping_mul(y as u128).wrapping_add(z as u128);
    (tmp as Digit, tmp.wrapping_shr(BITS as u32) as Digit)
}

/// Divides the double-digit `duo` by `div` and returns the quotient and
/// remainder as little-endian double-digit tuples.
///
/// # Panics
///
/// If `div == 0`, this function will panic.
#[inline]
pub const fn dd_division(
    duo: (Digit, Digit),
    div: (Digit, Digit),
) -> ((Digit, Digit), (Digit, Digit)) {
    let duo = duo.0 as u128 | ((duo.1 as u128) << BITS);
    let div = div.0 as u128 | ((div.1 as u128) << BITS);
    let quo = duo.wrapping_div(div);
    let rem = duo.wrapping_rem(div);
    (
        (quo as Digit, (quo >> BITS) as Digit),
        (rem as Digit, (rem >> BITS) as Digit),
    )
}

#[test]
fn widening() {
    assert_eq!(widen_add(Digit::MAX, Digit::MAX, 1), (Digit::MAX, 1));
    // (2^64 - 1)^2 + (2^64 - 1) == (2^64 - 1) * 2^64
    assert_eq!(
        widen_mul_add(Digit::MAX, Digit::MAX, Digit::MAX),
        (0, Digit::MAX)
    );
    assert_eq!(
        dd_division((0, 1), (2, 0)),
        ((1 << (BITS - 1), 0), (0, 0))
    );
}

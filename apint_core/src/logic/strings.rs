use alloc::string::String;
use alloc::vec::Vec;
use core::num::NonZeroUsize;

use apint_internals::*;
use ParseError::*;

use crate::ApInt;

/// The radixes the string conversions support
const RADIXES: [u8; 5] = [2, 8, 10, 16, 36];

/// Runs all pre conversion checks except for `Overflow` checks
const fn verify_for_bytes(src: &[u8], radix: u8) -> Result<(), ParseError> {
    let mut valid_radix = false;
    let mut i = 0;
    while i < RADIXES.len() {
        if RADIXES[i] == radix {
            valid_radix = true;
        }
        i += 1;
    }
    if !valid_radix {
        return Err(InvalidRadix)
    }
    if src.is_empty() {
        return Err(Empty)
    }
    let mut i = 0;
    while i < src.len() {
        let b = src[i];
        i += 1;
        if b == b'_' {
            continue
        }
        let in_decimal_range = b'0' <= b && b < (b'0' + radix);
        let in_lower_range = (radix > 10) && (b'a' <= b) && (b < (b'a' + (radix - 10)));
        let in_upper_range = (radix > 10) && (b'A' <= b) && (b < (b'A' + (radix - 10)));
        if radix <= 10 {
            if !in_decimal_range {
                return Err(InvalidChar)
            }
        } else if !(in_decimal_range || in_lower_range || in_upper_range) {
            return Err(InvalidChar)
        }
    }
    Ok(())
}

const fn char_to_digit(b: u8) -> Digit {
    (if b <= b'9' {
        b.wrapping_sub(b'0')
    } else if b <= b'Z' {
        b.wrapping_sub(b'A').wrapping_add(10)
    } else {
        b.wrapping_sub(b'a').wrapping_add(10)
    }) as Digit
}

/// # String representation conversion
impl ApInt {
    /// Creates a value of bitwidth `w` from the integer representation of
    /// `src` in the given `radix`. If `src` should be interpreted as
    /// unsigned, `sign` should be `None`, otherwise it should be set to the
    /// sign.
    ///
    /// # Errors
    ///
    /// The radix must be one of 2, 8, 10, 16, or 36. The characters `0..=9`,
    /// `a..=z`, and `A..=Z` are allowed depending on the radix. The char `_`
    /// is ignored, and all other chars result in an error. `src` cannot be
    /// empty. The value of the string must be representable in the bitwidth
    /// `w` with the specified sign, otherwise an overflow error is returned;
    /// [ApInt::bits_needed] gives a sufficient `w` for any given string.
    pub fn from_bytes_radix(
        sign: Option<bool>,
        src: &[u8],
        radix: u8,
        w: NonZeroUsize,
    ) -> Result<Self, ParseError> {
        verify_for_bytes(src, radix)?;
        let mut res = if radix.is_power_of_two() {
            Self::pow2_from_bytes(src, radix, w)?
        } else {
            Self::general_from_bytes(src, radix, w)?
        };
        if let Some(sign) = sign {
            if sign {
                if res.lz() == 0 && !res.is_imin() {
                    // these cannot be represented as negative
                    return Err(Overflow)
                }
                // handles `imin` correctly
                res.neg_assign(true);
            } else if res.lz() == 0 {
                // these cannot be represented as positive
                return Err(Overflow)
            }
        }
        Ok(res)
    }

    /// The accumulation loop for power of two radixes, which works by
    /// shift-oring one digit at a time
    fn pow2_from_bytes(src: &[u8], radix: u8, w: NonZeroUsize) -> Result<Self, ParseError> {
        let log2 = radix.trailing_zeros() as usize;
        let mut res = Self::zero(w);
        let mut shl = 0;
        for i in (0..src.len()).rev() {
            let b = src[i];
            if b == b'_' {
                continue
            }
            let char_digit = char_to_digit(b);
            res.digit_or_assign(char_digit, shl);
            shl += log2;
            if shl >= w.get() {
                // check that the last digit did not cross the end
                if (BITS - (char_digit.leading_zeros() as usize)) + shl - log2 > w.get() {
                    return Err(Overflow)
                }
                // there may be a bunch of leading zeros, so do not return an
                // error yet
                for b in &src[..i] {
                    match *b {
                        b'_' | b'0' => (),
                        _ => return Err(Overflow),
                    }
                }
                break
            }
        }
        Ok(res)
    }

    /// The accumulation loop for non power of two radixes, which multiplies a
    /// running radix exponential
    fn general_from_bytes(src: &[u8], radix: u8, w: NonZeroUsize) -> Result<Self, ParseError> {
        // the accumulator
        let mut res = Self::zero(w);
        // contains the radix exponential
        let mut exp = Self::uone(w);
        for i in (0..src.len()).rev() {
            let b = src[i];
            if b == b'_' {
                continue
            }
            let o0 = res.short_mul_add_assign(&exp, char_to_digit(b));
            if o0 {
                return Err(Overflow)
            }
            let o1 = exp.short_cin_mul(0, radix as Digit);
            if o1 != 0 {
                // there may be a bunch of leading zeros, so do not return an
                // error yet
                for b in &src[..i] {
                    match *b {
                        b'_' | b'0' => (),
                        _ => return Err(Overflow),
                    }
                }
                break
            }
        }
        Ok(res)
    }

    /// Creates a value of bitwidth `w` from the string `src` in the given
    /// `radix`. A leading `-` makes the result the negative of the digits and
    /// requires the value to fit the signed interpretation of `w` bits; a
    /// leading `+` or no sign indicator parses as unsigned.
    ///
    /// # Errors
    ///
    /// See [ApInt::from_bytes_radix].
    pub fn from_str_radix(w: NonZeroUsize, src: &str, radix: u8) -> Result<Self, ParseError> {
        let src = src.as_bytes();
        match src.first() {
            Some(b'-') => Self::from_bytes_radix(Some(true), &src[1..], radix, w),
            Some(b'+') => Self::from_bytes_radix(None, &src[1..], radix, w),
            _ => Self::from_bytes_radix(None, src, radix, w),
        }
    }

    /// Returns a bitwidth sufficient (but possibly not minimal) for
    /// [ApInt::from_str_radix] of `src` to succeed. Callers that do not know
    /// the width of textual input ahead of time should size it with this.
    ///
    /// # Errors
    ///
    /// If the radix is invalid, the digits are empty, or the string length
    /// approaches memory exhaustion, an error is returned.
    pub fn bits_needed(src: &str, radix: u8) -> Result<usize, ParseError> {
        let src = src.as_bytes();
        let (src, signed) = match src.first() {
            Some(b'-') => (&src[1..], true),
            Some(b'+') => (&src[1..], false),
            _ => (src, false),
        };
        let len = src.iter().filter(|b| **b != b'_').count();
        if len == 0 {
            return Err(Empty)
        }
        Ok(bits_upper_bound(len, radix)? + (signed as usize))
    }

    /// Creates a `Vec<u8>` of the digits of `self` in the given `radix`, most
    /// significant first with no leading zeros. `signed` selects the signed
    /// interpretation, in which case a `-` indicator is prepended for
    /// negative values. `prefix` prepends the C-literal radix indicator:
    /// `0b` for binary, `0` for octal, and `0x` for hexadecimal.
    ///
    /// # Panics
    ///
    /// If `radix` is not one of 2, 8, 10, 16, or 36, this function will
    /// panic.
    #[track_caller]
    #[must_use]
    pub fn to_vec_radix(&self, radix: u8, signed: bool, prefix: bool) -> Vec<u8> {
        assert!(
            RADIXES.contains(&radix),
            "radix {} is not one of 2, 8, 10, 16, or 36",
            radix
        );
        let neg = signed && self.msb();
        // the unsigned interpretation of `imin` is exactly its magnitude, so
        // the negation wrapping back to itself does the right thing
        let mut pad = self.clone();
        pad.neg_assign(neg);
        let mut digits = Vec::with_capacity(chars_upper_bound(pad.sig(), radix).unwrap() + 3);
        if radix.is_power_of_two() {
            // fast shift-based digit extraction
            let log2 = radix.trailing_zeros() as usize;
            let mask = (1 << log2) - 1;
            let chars = core::cmp::max(1, pad.sig().div_ceil(log2));
            for j in 0..chars {
                digits.push((pad.get_digit(j * log2) & mask) as u8);
            }
        } else {
            loop {
                digits.push(pad.short_udivide_assign(radix as Digit) as u8);
                if pad.is_zero() {
                    break
                }
            }
        }
        let mut dst = Vec::with_capacity(digits.len() + 3);
        if neg {
            dst.push(b'-');
        }
        if prefix {
            match radix {
                2 => dst.extend_from_slice(b"0b"),
                8 => dst.push(b'0'),
                16 => dst.extend_from_slice(b"0x"),
                _ => (),
            }
        }
        for d in digits.iter().rev() {
            dst.push(if *d < 10 { b'0' + d } else { b'a' + (d - 10) });
        }
        dst
    }

    /// [ApInt::to_vec_radix], but returning a `String`
    #[track_caller]
    #[must_use]
    pub fn to_string_radix(&self, radix: u8, signed: bool, prefix: bool) -> String {
        // `to_vec_radix` only produces valid utf8
        String::from_utf8(self.to_vec_radix(radix, signed, prefix)).unwrap()
    }

    /// Renders the signed interpretation of `self` in `radix` with no prefix
    #[track_caller]
    #[must_use]
    pub fn to_string_signed(&self, radix: u8) -> String {
        self.to_string_radix(radix, true, false)
    }

    /// Renders the unsigned interpretation of `self` in `radix` with no
    /// prefix
    #[track_caller]
    #[must_use]
    pub fn to_string_unsigned(&self, radix: u8) -> String {
        self.to_string_radix(radix, false, false)
    }
}

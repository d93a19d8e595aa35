use crate::ApInt;

/// # Floating point conversion
///
/// These convert by assembling the IEEE-754 exponent and mantissa fields
/// manually, rounding to nearest even, and overflowing to infinity. Values
/// whose magnitude fits a single digit go through the hardware conversion,
/// which has the same rounding behavior.
impl ApInt {
    /// Rounds `self` to the nearest `f64`, interpreting the bits as signed if
    /// `signed` is set
    #[must_use]
    pub fn to_f64(&self, signed: bool) -> f64 {
        if signed && self.msb() {
            // the unsigned interpretation of the wrapped negation is the
            // magnitude, including for `imin`
            return -self.wrapping_neg().to_f64(false)
        }
        let sig = self.sig();
        if sig <= 64 {
            return self.first() as f64
        }
        let exp = sig - 1;
        if exp > 1023 {
            return f64::INFINITY
        }
        // the top 53 significant bits, with the implicit one at bit 52
        let shift = sig - 53;
        let mut mant = self.lshr(shift).first();
        if self.get_bit(shift - 1) {
            // round up on a set round bit unless exactly halfway to an even
            // mantissa
            let sticky = self.tz() < (shift - 1);
            if sticky || ((mant & 1) != 0) {
                mant += 1;
            }
        }
        let mut exp = exp as u64;
        if mant == (1 << 53) {
            // rounding overflowed the mantissa
            mant >>= 1;
            exp += 1;
            if exp > 1023 {
                return f64::INFINITY
            }
        }
        f64::from_bits(((exp + 1023) << 52) | (mant & ((1 << 52) - 1)))
    }

    /// Rounds `self` to the nearest `f32`, interpreting the bits as signed if
    /// `signed` is set
    #[must_use]
    pub fn to_f32(&self, signed: bool) -> f32 {
        if signed && self.msb() {
            return -self.wrapping_neg().to_f32(false)
        }
        let sig = self.sig();
        if sig <= 64 {
            return self.first() as f32
        }
        let exp = sig - 1;
        if exp > 127 {
            return f32::INFINITY
        }
        // the top 24 significant bits, with the implicit one at bit 23
        let shift = sig - 24;
        let mut mant = self.lshr(shift).first() as u32;
        if self.get_bit(shift - 1) {
            let sticky = self.tz() < (shift - 1);
            if sticky || ((mant & 1) != 0) {
                mant += 1;
            }
        }
        let mut exp = exp as u32;
        if mant == (1 << 24) {
            mant >>= 1;
            exp += 1;
            if exp > 127 {
                return f32::INFINITY
            }
        }
        f32::from_bits(((exp + 127) << 23) | (mant & ((1 << 23) - 1)))
    }
}

use core::ops::{
    AddAssign, BitAndAssign, BitOrAssign, BitXorAssign, MulAssign, Neg, Not, ShlAssign, SubAssign,
};

use crate::ApInt;

impl ShlAssign<usize> for ApInt {
    fn shl_assign(&mut self, s: usize) {
        ApInt::shl_assign(self, s);
    }
}

impl<'a> BitAndAssign<&'a ApInt> for ApInt {
    fn bitand_assign(&mut self, rhs: &'a Self) {
        self.and_assign(rhs);
    }
}

impl<'a> BitOrAssign<&'a ApInt> for ApInt {
    fn bitor_assign(&mut self, rhs: &'a Self) {
        self.or_assign(rhs);
    }
}

impl<'a> BitXorAssign<&'a ApInt> for ApInt {
    fn bitxor_assign(&mut self, rhs: &'a Self) {
        self.xor_assign(rhs);
    }
}

impl<'a> AddAssign<&'a ApInt> for ApInt {
    fn add_assign(&mut self, rhs: &'a Self) {
        ApInt::add_assign(self, rhs);
    }
}

impl<'a> SubAssign<&'a ApInt> for ApInt {
    fn sub_assign(&mut self, rhs: &'a Self) {
        ApInt::sub_assign(self, rhs);
    }
}

impl<'a> MulAssign<&'a ApInt> for ApInt {
    fn mul_assign(&mut self, rhs: &'a Self) {
        ApInt::mul_assign(self, rhs);
    }
}

impl Not for ApInt {
    type Output = ApInt;

    fn not(mut self) -> ApInt {
        self.not_assign();
        self
    }
}

impl Neg for ApInt {
    type Output = ApInt;

    fn neg(mut self) -> ApInt {
        self.neg_assign(true);
        self
    }
}

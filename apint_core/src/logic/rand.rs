use crate::ApInt;

/// `rand_support` functions
impl ApInt {
    /// Randomly-assigns `self` using a `rand_core::RngCore` random number
    /// generator. This fills every digit from `RngCore::next_u64` in little
    /// endian order and then clears the unused bits, so the output is
    /// deterministic for a given seeded rng.
    ///
    /// ```
    /// // Example using the `rand_xoshiro` crate.
    /// use apint_core::{bw, ApInt};
    /// use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
    ///
    /// let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    /// let mut x = ApInt::zero(bw(100));
    /// x.rand_assign_using(&mut rng);
    /// let mut y = ApInt::zero(bw(100));
    /// y.rand_assign_using(&mut rng);
    /// assert_ne!(x, y);
    /// ```
    pub fn rand_assign_using<R>(&mut self, rng: &mut R)
    where
        R: rand_core::RngCore,
    {
        for digit in self.as_mut_slice() {
            *digit = rng.next_u64();
        }
        self.clear_unused_bits();
    }
}

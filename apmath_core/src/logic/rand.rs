use rand_core::RngCore;

use crate::ApInt;

/// `rand_support` functions
impl ApInt {
    /// Randomly-assigns `self` using a `rand_core::RngCore` random number
    /// generator, one whole limb per draw, then clears the unused bits.
    ///
    /// ```
    /// // Example using the `rand_xoshiro` crate.
    /// use apmath_core::ApInt;
    /// use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
    ///
    /// let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    /// let mut x = ApInt::zero(100);
    /// x.rand_using(&mut rng);
    /// assert_eq!(x.bitwidth(), 100);
    /// ```
    pub fn rand_using<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        for limb in self.limbs_mut() {
            *limb = rng.next_u64();
        }
        self.clear_unused_bits();
    }
}

use crate::ApInt;

/// # Bitwise operations
impl ApInt {
    /// And-assigns by `rhs`
    ///
    /// # Panics
    ///
    /// If the bitwidths differ
    #[track_caller]
    pub fn btwand(&mut self, rhs: &Self) -> &mut Self {
        self.assert_same_width(rhs);
        for (x, y) in self.limbs_mut().iter_mut().zip(rhs.limbs().iter()) {
            *x &= y;
        }
        self
    }

    /// Or-assigns by `rhs`
    ///
    /// # Panics
    ///
    /// If the bitwidths differ
    #[track_caller]
    pub fn btwor(&mut self, rhs: &Self) -> &mut Self {
        self.assert_same_width(rhs);
        for (x, y) in self.limbs_mut().iter_mut().zip(rhs.limbs().iter()) {
            *x |= y;
        }
        self
    }

    /// Xor-assigns by `rhs`
    ///
    /// # Panics
    ///
    /// If the bitwidths differ
    #[track_caller]
    pub fn btwxor(&mut self, rhs: &Self) -> &mut Self {
        self.assert_same_width(rhs);
        for (x, y) in self.limbs_mut().iter_mut().zip(rhs.limbs().iter()) {
            *x ^= y;
        }
        self.clear_unused_bits();
        self
    }

    /// Complements the live bits
    pub fn btwnot(&mut self) -> &mut Self {
        for limb in self.limbs_mut() {
            *limb = !*limb;
        }
        self.clear_unused_bits();
        self
    }
}

use apmath_internals::*;

use crate::ApInt;

/// # Summation
impl ApInt {
    /// Increment-assigns `self` by one if `cin` is set, wrapping on
    /// overflow past the declared width
    pub(crate) fn inc(&mut self, cin: bool) {
        if !cin {
            return
        }
        for limb in self.limbs_mut() {
            match limb.overflowing_add(1) {
                (v, false) => {
                    *limb = v;
                    break
                }
                (v, true) => {
                    *limb = v;
                }
            }
        }
        self.clear_unused_bits();
    }

    /// Add-assigns by `rhs` modulo `2^w`. The carry out of the top bit is
    /// discarded.
    ///
    /// # Panics
    ///
    /// If the bitwidths differ
    #[track_caller]
    pub fn add(&mut self, rhs: &Self) -> &mut Self {
        self.assert_same_width(rhs);
        add_in_place(self.limbs_mut(), rhs.limbs());
        self.clear_unused_bits();
        self
    }

    /// Subtract-assigns by `rhs` modulo `2^w`
    ///
    /// # Panics
    ///
    /// If the bitwidths differ
    #[track_caller]
    pub fn sub(&mut self, rhs: &Self) -> &mut Self {
        self.assert_same_width(rhs);
        sub_in_place(self.limbs_mut(), rhs.limbs());
        self.clear_unused_bits();
        self
    }

    /// Two's complement negation. Zero and the signed minimum value are the
    /// fixed points.
    pub fn negate(&mut self) -> &mut Self {
        for limb in self.limbs_mut() {
            *limb = !*limb;
        }
        self.inc(true);
        self.clear_unused_bits();
        self
    }
}

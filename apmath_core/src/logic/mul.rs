use alloc::vec;

use apmath_internals::*;

use crate::ApInt;

/// # Multiplication
impl ApInt {
    /// Multiply-assigns by `rhs` modulo `2^w`, schoolbook limb by limb. The
    /// partial products accumulate into a fresh buffer, so the left operand
    /// is effectively snapshotted before anything is written.
    ///
    /// # Panics
    ///
    /// If the bitwidths differ
    #[track_caller]
    pub fn mul(&mut self, rhs: &Self) -> &mut Self {
        self.assert_same_width(rhs);
        let len = self.len();
        let mut pad = vec![0 as Limb; len];
        for self_i in 0..len {
            // carry from the short multiplication and from the accumulation
            let mut carry0 = 0;
            let mut carry1 = 0;
            for rhs_i in 0..(len - self_i) {
                let tmp0 = widen_mul_add(self.limbs()[self_i], rhs.limbs()[rhs_i], carry0);
                carry0 = tmp0.1;
                let tmp1 = widen_add(pad[self_i + rhs_i], tmp0.0, carry1);
                carry1 = tmp1.1;
                pad[self_i + rhs_i] = tmp1.0;
            }
        }
        self.limbs_mut().copy_from_slice(&pad);
        self.clear_unused_bits();
        self
    }
}

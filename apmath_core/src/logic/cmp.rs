use core::cmp::Ordering;

use apmath_internals::*;

use crate::ApInt;

/// # Comparison
///
/// No relational operators are exposed: the choice between unsigned and
/// signed order must always be made explicitly through `ucmp` or `scmp`.
impl ApInt {
    /// If `self` is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs().iter().all(|&limb| limb == 0)
    }

    /// If every live bit of `self` is set
    #[must_use]
    pub fn is_umax(&self) -> bool {
        let len = self.len();
        if self.last() != top_limb_mask(self.bitwidth()) {
            return false
        }
        self.limbs()[..(len - 1)].iter().all(|&limb| limb == MAX)
    }

    /// If `self` is the signed minimum value, only the sign bit set
    #[must_use]
    pub fn is_smin(&self) -> bool {
        let len = self.len();
        let top = if self.extra() == 0 {
            1 << (BITS - 1)
        } else {
            1 << (self.extra() - 1)
        };
        self.last() == top && self.limbs()[..(len - 1)].iter().all(|&limb| limb == 0)
    }

    /// Unsigned three-way comparison against `rhs`, lexicographic from the
    /// most significant limb down
    ///
    /// # Panics
    ///
    /// If the bitwidths differ
    #[track_caller]
    #[must_use]
    pub fn ucmp(&self, rhs: &Self) -> Ordering {
        self.assert_same_width(rhs);
        cmp_limbs(self.limbs(), rhs.limbs())
    }

    /// Unsigned three-way comparison against a scalar. The scalar is
    /// implicitly zero-extended, except that a single-limb `self` first
    /// applies its top limb mask to the scalar so that the comparison takes
    /// place within `self`'s equivalence class:
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use apmath_core::ApInt;
    ///
    /// assert_eq!(ApInt::from_u64(0xFF, 4).ucmp_u64(15), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn ucmp_u64(&self, rhs: u64) -> Ordering {
        if self.len() == 1 {
            self.first().cmp(&(rhs & top_limb_mask(self.bitwidth())))
        } else {
            if self.limbs()[1..].iter().any(|&limb| limb != 0) {
                return Ordering::Greater
            }
            self.first().cmp(&rhs)
        }
    }

    /// Signed three-way comparison against `rhs`. If the sign bits differ
    /// the negative value is the smaller one, otherwise the order agrees
    /// with `ucmp`.
    ///
    /// # Panics
    ///
    /// If the bitwidths differ
    #[track_caller]
    #[must_use]
    pub fn scmp(&self, rhs: &Self) -> Ordering {
        self.assert_same_width(rhs);
        match (self.msb(), rhs.msb()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => cmp_limbs(self.limbs(), rhs.limbs()),
        }
    }
}

/// If `self` and `rhs` have unmatching bitwidths, `false` will be returned.
impl PartialEq for ApInt {
    fn eq(&self, rhs: &Self) -> bool {
        self.bitwidth() == rhs.bitwidth() && self.ucmp(rhs) == Ordering::Equal
    }
}

impl Eq for ApInt {}

impl PartialEq<u64> for ApInt {
    fn eq(&self, rhs: &u64) -> bool {
        self.ucmp_u64(*rhs) == Ordering::Equal
    }
}

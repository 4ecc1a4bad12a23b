use core::cmp::Ordering;

use apmath_internals::*;

use crate::ApInt;

/// # Division
///
/// `udivrem` is the sole division primitive; every other flavour is a
/// projection or sign-fixup composition over it. Signed quotients truncate
/// toward zero, so the remainder is zero or carries the sign of the
/// dividend.
///
/// Note that the signed divisions overflow when the dividend is the signed
/// minimum and the divisor is negative one. The overflow wraps: the quotient
/// is again the signed minimum and the remainder is zero, consistent with
/// `negate` of the signed minimum being a fixed point.
impl ApInt {
    /// Unsigned-divides `self` by `div`, returning the quotient and
    /// remainder at the same bitwidth. Restoring division, one dividend bit
    /// per step from the most significant set bit down.
    ///
    /// # Panics
    ///
    /// If the bitwidths differ or `div` is zero
    #[track_caller]
    #[must_use]
    pub fn udivrem(&self, div: &Self) -> (Self, Self) {
        self.assert_same_width(div);
        assert!(!div.is_zero(), "`ApInt` division by zero");
        let w = self.bitwidth();
        let mut quo = ApInt::zero(w);
        let mut rem = ApInt::zero(w);
        // leading zeros of the dividend would only shift zeros into the
        // remainder
        let sig = w - self.clz();
        for i in (0..sig).rev() {
            shl1_in_place(rem.limbs_mut(), self.test(i));
            if cmp_limbs(rem.limbs(), div.limbs()) != Ordering::Less {
                sub_in_place(rem.limbs_mut(), div.limbs());
                quo.set(i);
            }
        }
        (quo, rem)
    }

    /// Signed-divides `self` by `div`, returning the quotient and remainder
    /// at the same bitwidth. The quotient truncates toward zero. Both
    /// operands are reduced to their magnitudes, divided unsigned, and the
    /// signs are restored afterwards; the signed minimum reads as its own
    /// magnitude under the unsigned interpretation, so no widening is
    /// needed.
    ///
    /// # Panics
    ///
    /// If the bitwidths differ or `div` is zero
    #[track_caller]
    #[must_use]
    pub fn sdivrem(&self, div: &Self) -> (Self, Self) {
        let duo_neg = self.negative();
        let div_neg = div.negative();
        let mut duo = self.clone();
        if duo_neg {
            duo.negate();
        }
        let mut div = div.clone();
        if div_neg {
            div.negate();
        }
        let (mut quo, mut rem) = duo.udivrem(&div);
        if duo_neg != div_neg {
            quo.negate();
        }
        if duo_neg {
            rem.negate();
        }
        (quo, rem)
    }

    /// Unsigned-divide-assigns by `rhs`
    ///
    /// # Panics
    ///
    /// If the bitwidths differ or `rhs` is zero
    #[track_caller]
    pub fn udiv(&mut self, rhs: &Self) -> &mut Self {
        let (quo, _) = self.udivrem(rhs);
        *self = quo;
        self
    }

    /// Unsigned-remainder-assigns by `rhs`
    ///
    /// # Panics
    ///
    /// If the bitwidths differ or `rhs` is zero
    #[track_caller]
    pub fn urem(&mut self, rhs: &Self) -> &mut Self {
        let (_, rem) = self.udivrem(rhs);
        *self = rem;
        self
    }

    /// Signed-divide-assigns by `rhs`, truncating toward zero
    ///
    /// # Panics
    ///
    /// If the bitwidths differ or `rhs` is zero
    #[track_caller]
    pub fn sdiv(&mut self, rhs: &Self) -> &mut Self {
        let (quo, _) = self.sdivrem(rhs);
        *self = quo;
        self
    }

    /// Signed-remainder-assigns by `rhs`. The remainder is zero or has the
    /// sign of the dividend.
    ///
    /// # Panics
    ///
    /// If the bitwidths differ or `rhs` is zero
    #[track_caller]
    pub fn srem(&mut self, rhs: &Self) -> &mut Self {
        let (_, rem) = self.sdivrem(rhs);
        *self = rem;
        self
    }

    /// Unsigned-divides `self` in place by a single limb and returns the
    /// remainder. Backs the radix serialization loop.
    pub(crate) fn short_udiv_in_place(&mut self, div: Limb) -> Limb {
        debug_assert!(div != 0);
        let mut rem = 0;
        for i in (0..self.len()).rev() {
            let limb = self.limbs()[i];
            let tmp = dd_division((limb, rem), div);
            self.limbs_mut()[i] = tmp.0;
            rem = tmp.1;
        }
        rem
    }
}

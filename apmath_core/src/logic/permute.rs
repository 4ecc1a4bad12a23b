use apmath_internals::*;

use crate::ApInt;

/// # Shifts and rotates
///
/// Shift amounts must be in `[0, w)`; rotation amounts are reduced mod `w`.
/// Shifts are split into a whole-limb move and a sub-limb shift with carry
/// from the adjacent limb, so the sub-limb step never performs an out of
/// range limb shift when the amount is limb aligned.
impl ApInt {
    #[inline]
    #[track_caller]
    fn assert_shift_in_range(&self, s: usize) {
        assert!(
            s < self.bitwidth(),
            "shift amount {s} is out of range for an `ApInt` of bitwidth {}",
            self.bitwidth()
        );
    }

    /// Logical-left-shift-assigns by `s` bits, filling with zeros. Bits
    /// shifted past the top are lost.
    ///
    /// # Panics
    ///
    /// If `s >= self.bitwidth()`
    #[track_caller]
    pub fn lshl(&mut self, s: usize) -> &mut Self {
        self.assert_shift_in_range(s);
        if s != 0 {
            shl_in_place(self.limbs_mut(), s);
            self.clear_unused_bits();
        }
        self
    }

    /// Logical-right-shift-assigns by `s` bits, filling with zeros
    ///
    /// # Panics
    ///
    /// If `s >= self.bitwidth()`
    #[track_caller]
    pub fn lshr(&mut self, s: usize) -> &mut Self {
        self.assert_shift_in_range(s);
        if s != 0 {
            // the unused top bits are clear, so only zeros shift in
            shr_in_place(self.limbs_mut(), s);
        }
        self
    }

    /// Arithmetic-left-shift-assigns by `s` bits, identical to [ApInt::lshl]
    ///
    /// # Panics
    ///
    /// If `s >= self.bitwidth()`
    #[track_caller]
    pub fn ashl(&mut self, s: usize) -> &mut Self {
        self.lshl(s)
    }

    /// Arithmetic-right-shift-assigns by `s` bits, filling with copies of
    /// the pre-shift sign bit
    ///
    /// # Panics
    ///
    /// If `s >= self.bitwidth()`
    #[track_caller]
    pub fn ashr(&mut self, s: usize) -> &mut Self {
        let sign = self.msb();
        self.lshr(s);
        if sign && s != 0 {
            let w = self.bitwidth();
            self.fill_ones_from(w - s);
        }
        self
    }

    /// Left-rotate-assigns by `s mod w` bits
    pub fn rotl(&mut self, s: usize) -> &mut Self {
        let w = self.bitwidth();
        let s = s % w;
        if s != 0 {
            let mut tmp = self.clone();
            tmp.lshr(w - s);
            self.lshl(s);
            self.btwor(&tmp);
        }
        self
    }

    /// Right-rotate-assigns by `s mod w` bits
    pub fn rotr(&mut self, s: usize) -> &mut Self {
        let w = self.bitwidth();
        let s = s % w;
        if s != 0 {
            let mut tmp = self.clone();
            tmp.lshl(w - s);
            self.lshr(s);
            self.btwor(&tmp);
        }
        self
    }
}

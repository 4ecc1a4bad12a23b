use apmath_internals::*;

use crate::ApInt;

macro_rules! apint_to_ty {
    ($($ty:ident $to:ident);*;) => {
        $(
            /// Converts to the native integer type, truncating if `self` is
            /// wider
            #[must_use]
            pub fn $to(&self) -> $ty {
                self.first() as $ty
            }
        )*
    };
}

/// # Width casting
impl ApInt {
    /// Zero-extends to `w` bits; the new bits are zero. If `w` is less than
    /// the current bitwidth, `self` is truncated instead. Note that there is
    /// no separate truncation method because this one subsumes it.
    ///
    /// # Panics
    ///
    /// If `w == 0` or `w > MAX_BITWIDTH`
    #[track_caller]
    pub fn zext(&mut self, w: usize) -> &mut Self {
        let bw = ApInt::check_width(w);
        self.resize_storage(regular_limbs(w));
        self.set_bitwidth(bw);
        self.clear_unused_bits();
        self
    }

    /// Sign-extends to `w` bits; when growing a negative value the new bits
    /// are one. If `w` is less than the current bitwidth, `self` is
    /// truncated.
    ///
    /// # Panics
    ///
    /// If `w == 0` or `w > MAX_BITWIDTH`
    #[track_caller]
    pub fn sext(&mut self, w: usize) -> &mut Self {
        let old_w = self.bitwidth();
        let sign = self.msb();
        self.zext(w);
        if w > old_w && sign {
            self.fill_ones_from(old_w);
        }
        self
    }

    apint_to_ty!(
        u8 to_u8;
        u16 to_u16;
        u32 to_u32;
        u64 to_u64;
        usize to_usize;
        i8 to_i8;
        i16 to_i16;
        i32 to_i32;
        i64 to_i64;
        isize to_isize;
    );

    /// Converts the least significant bit to a `bool`
    #[must_use]
    pub fn to_bool(&self) -> bool {
        self.lsb()
    }
}

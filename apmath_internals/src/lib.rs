//! This crate contains common developer utilities for crates within the
//! `apmath` system: the `Limb` definition, bitwidth bookkeeping helpers, the
//! widening limb primitives that all multi-limb arithmetic is built from, and
//! the common parsing error type. Most users should never have to interact
//! with this directly, there is a reexport of the important items through
//! `apmath_core` and `apmath`.

#![no_std]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]
#![allow(clippy::needless_range_loop)]

mod limbs;
mod serde_common;
mod widening;

pub use limbs::{add_in_place, cmp_limbs, shl1_in_place, shl_in_place, shr_in_place, sub_in_place};
pub use serde_common::ParseError;
pub use widening::{dd_division, widen_add, widen_mul_add};

/// The basic element of the multi-limb representation. Values are sequences
/// of limbs in little-endian order (index 0 is least significant).
pub type Limb = u64;

/// Signed version of `Limb`
pub type ILimb = i64;

/// Bitwidth of a `Limb`
pub const BITS: usize = Limb::BITS as usize;

/// Maximum value of a `Limb`
pub const MAX: Limb = Limb::MAX;

/// Number of bytes in a `Limb`
pub const LIMB_BYTES: usize = (Limb::BITS / u8::BITS) as usize;

/// The largest bitwidth any integer in the system can be declared with
pub const MAX_BITWIDTH: usize = u32::MAX as usize;

/// Returns the number of live bits in the most significant limb given `w`,
/// except that a full top limb maps to 0 rather than `BITS`. In other words,
/// `w mod BITS`.
#[inline]
pub const fn extra(w: usize) -> usize {
    w & (BITS - 1)
}

/// Returns the number of _whole_ limbs (not including a limb with unused
/// bits) given `w`
#[inline]
pub const fn whole_limbs(w: usize) -> usize {
    w.wrapping_shr(BITS.trailing_zeros())
}

/// Returns the number of limbs needed to represent `w` bits, including any
/// limb with unused bits
#[inline]
pub const fn regular_limbs(w: usize) -> usize {
    whole_limbs(w).wrapping_add((extra(w) != 0) as usize)
}

/// Returns the mask of live bits in the most significant limb of a `w` bit
/// integer
#[inline]
pub const fn top_limb_mask(w: usize) -> Limb {
    if extra(w) == 0 {
        MAX
    } else {
        (1 << extra(w)) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitwidth_bookkeeping() {
        assert_eq!(regular_limbs(1), 1);
        assert_eq!(regular_limbs(64), 1);
        assert_eq!(regular_limbs(65), 2);
        assert_eq!(regular_limbs(128), 2);
        assert_eq!(whole_limbs(65), 1);
        assert_eq!(extra(65), 1);
        assert_eq!(top_limb_mask(64), MAX);
        assert_eq!(top_limb_mask(4), 0xF);
        assert_eq!(top_limb_mask(127), MAX >> 1);
    }
}

#![allow(dead_code)]

use apmath::ApInt;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};

/// Bitwidths that exercise the single limb, limb boundary, and multi limb
/// cases
#[cfg(not(miri))]
pub const BWS: &[usize] = &[
    1, 2, 3, 7, 8, 16, 31, 32, 33, 63, 64, 65, 97, 127, 128, 150, 192, 256,
];
#[cfg(miri)]
pub const BWS: &[usize] = &[1, 7, 63, 64, 65, 128];

#[cfg(not(miri))]
pub const ITERS: usize = 64;
#[cfg(miri)]
pub const ITERS: usize = 4;

pub fn rng() -> Xoshiro128StarStar {
    Xoshiro128StarStar::seed_from_u64(0)
}

/// Checks that the bits above the declared width are clear and that the
/// limb view has the derived length
#[track_caller]
pub fn check_invariants(x: &ApInt) {
    let w = x.bitwidth();
    assert_eq!(x.limbs().len(), (w + 63) / 64);
    let extra = w % 64;
    if extra != 0 {
        assert_eq!(x.limbs().last().unwrap() >> extra, 0, "unused bits are set");
    }
}

/// Checks for equality and that invariants are being kept
#[track_caller]
pub fn eq(lhs: &ApInt, rhs: &ApInt) {
    check_invariants(lhs);
    check_invariants(rhs);
    assert!(
        lhs == rhs,
        "lhs and rhs are not equal when they should be:\nlhs:{:?} rhs:{:?}",
        lhs,
        rhs
    );
}

//! Arbitrary precision integer library
//!
//! This is the core library of the `apmath` system of crates. It supplies the
//! [ApInt] storage type, an exact integer of caller chosen bitwidth `w` in
//! `[1, u32::MAX]` with value semantics in `Z/2^w Z`, together with a
//! value-returning free function layer over the mutating methods.
//!
//! Operations involving two integers require the operands to be of equal
//! bitwidth; signedness is never implicit but selected per operation (`udiv`
//! vs `sdiv`, `ucmp` vs `scmp`, `lshr` vs `ashr`, and so on).
//!
//! Recoverable failures (malformed strings, values not fitting a requested
//! width) return a handleable `Result`. Precondition violations such as
//! mismatched bitwidths, out of range shift amounts, or division by zero are
//! programmer bugs and panic.

#![no_std]
// There are many guaranteed nonzero lengths
#![allow(clippy::len_without_is_empty)]
// We are using special indexing everywhere
#![allow(clippy::needless_range_loop)]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

pub use apmath_internals::{Limb, ParseError, MAX_BITWIDTH};

pub(crate) mod data;
pub use data::ApInt;

mod logic;

mod ops;
pub use ops::{
    add, ashl, ashr, btwand, btwnot, btwor, btwxor, lshl, lshr, mul, negate, rotl, rotr, scmp,
    sdiv, sdivrem, sext, srem, sub, ucmp, ucmp_u64, udiv, udivrem, urem, zext,
};

pub mod prelude {
    pub use crate::ApInt;
}

//! Value-returning wrappers over the mutating [ApInt] methods, giving an
//! expression-oriented API. The primary operand is taken by value, so a
//! caller passing an rvalue moves instead of copying.

use core::cmp::Ordering;

use crate::ApInt;

/// Computes the sum of `lhs` and `rhs`
#[track_caller]
#[must_use]
pub fn add(mut lhs: ApInt, rhs: &ApInt) -> ApInt {
    lhs.add(rhs);
    lhs
}

/// Computes the difference of `lhs` and `rhs`
#[track_caller]
#[must_use]
pub fn sub(mut lhs: ApInt, rhs: &ApInt) -> ApInt {
    lhs.sub(rhs);
    lhs
}

/// Computes the product of `lhs` and `rhs`
#[track_caller]
#[must_use]
pub fn mul(lhs: &ApInt, rhs: &ApInt) -> ApInt {
    let mut res = lhs.clone();
    res.mul(rhs);
    res
}

/// Computes the quotient and remainder of `duo` and `div`, interpreted as
/// unsigned integers
#[track_caller]
#[must_use]
pub fn udivrem(duo: &ApInt, div: &ApInt) -> (ApInt, ApInt) {
    duo.udivrem(div)
}

/// Computes the quotient of `lhs` and `rhs`, interpreted as unsigned
/// integers
#[track_caller]
#[must_use]
pub fn udiv(lhs: &ApInt, rhs: &ApInt) -> ApInt {
    lhs.udivrem(rhs).0
}

/// Computes the remainder of `lhs` and `rhs`, interpreted as unsigned
/// integers
#[track_caller]
#[must_use]
pub fn urem(lhs: &ApInt, rhs: &ApInt) -> ApInt {
    lhs.udivrem(rhs).1
}

/// Computes the quotient and remainder of `duo` and `div`, interpreted as
/// signed integers. The quotient truncates toward zero.
#[track_caller]
#[must_use]
pub fn sdivrem(duo: &ApInt, div: &ApInt) -> (ApInt, ApInt) {
    duo.sdivrem(div)
}

/// Computes the quotient of `lhs` and `rhs`, interpreted as signed
/// integers. The result truncates toward zero.
#[track_caller]
#[must_use]
pub fn sdiv(lhs: &ApInt, rhs: &ApInt) -> ApInt {
    lhs.sdivrem(rhs).0
}

/// Computes the remainder of `lhs` and `rhs`, interpreted as signed
/// integers
#[track_caller]
#[must_use]
pub fn srem(lhs: &ApInt, rhs: &ApInt) -> ApInt {
    lhs.sdivrem(rhs).1
}

/// Computes the bitwise AND of `lhs` and `rhs`
#[track_caller]
#[must_use]
pub fn btwand(mut lhs: ApInt, rhs: &ApInt) -> ApInt {
    lhs.btwand(rhs);
    lhs
}

/// Computes the bitwise OR of `lhs` and `rhs`
#[track_caller]
#[must_use]
pub fn btwor(mut lhs: ApInt, rhs: &ApInt) -> ApInt {
    lhs.btwor(rhs);
    lhs
}

/// Computes the bitwise XOR of `lhs` and `rhs`
#[track_caller]
#[must_use]
pub fn btwxor(mut lhs: ApInt, rhs: &ApInt) -> ApInt {
    lhs.btwxor(rhs);
    lhs
}

/// Computes the bitwise complement of `operand`
#[must_use]
pub fn btwnot(mut operand: ApInt) -> ApInt {
    operand.btwnot();
    operand
}

/// Logically shifts `operand` left by `s` bits
#[track_caller]
#[must_use]
pub fn lshl(mut operand: ApInt, s: usize) -> ApInt {
    operand.lshl(s);
    operand
}

/// Logically shifts `operand` right by `s` bits
#[track_caller]
#[must_use]
pub fn lshr(mut operand: ApInt, s: usize) -> ApInt {
    operand.lshr(s);
    operand
}

/// Arithmetically shifts `operand` left by `s` bits, identical to [lshl]
#[track_caller]
#[must_use]
pub fn ashl(mut operand: ApInt, s: usize) -> ApInt {
    operand.ashl(s);
    operand
}

/// Arithmetically shifts `operand` right by `s` bits, filling with the sign
/// bit
#[track_caller]
#[must_use]
pub fn ashr(mut operand: ApInt, s: usize) -> ApInt {
    operand.ashr(s);
    operand
}

/// Rotates `operand` left by `s mod w` bits
#[must_use]
pub fn rotl(mut operand: ApInt, s: usize) -> ApInt {
    operand.rotl(s);
    operand
}

/// Rotates `operand` right by `s mod w` bits
#[must_use]
pub fn rotr(mut operand: ApInt, s: usize) -> ApInt {
    operand.rotr(s);
    operand
}

/// Computes the two's complement negation of `operand`
#[must_use]
pub fn negate(mut operand: ApInt) -> ApInt {
    operand.negate();
    operand
}

/// Zero-extends `operand` to `w` bits, truncating when `w` is smaller than
/// the current bitwidth
#[track_caller]
#[must_use]
pub fn zext(mut operand: ApInt, w: usize) -> ApInt {
    operand.zext(w);
    operand
}

/// Sign-extends `operand` to `w` bits, truncating when `w` is smaller than
/// the current bitwidth
#[track_caller]
#[must_use]
pub fn sext(mut operand: ApInt, w: usize) -> ApInt {
    operand.sext(w);
    operand
}

/// Performs unsigned three-way comparison between `lhs` and `rhs`
#[track_caller]
#[must_use]
pub fn ucmp(lhs: &ApInt, rhs: &ApInt) -> Ordering {
    lhs.ucmp(rhs)
}

/// Performs unsigned three-way comparison between `lhs` and a zero-extended
/// scalar
#[must_use]
pub fn ucmp_u64(lhs: &ApInt, rhs: u64) -> Ordering {
    lhs.ucmp_u64(rhs)
}

/// Performs signed three-way comparison between `lhs` and `rhs`
#[track_caller]
#[must_use]
pub fn scmp(lhs: &ApInt, rhs: &ApInt) -> Ordering {
    lhs.scmp(rhs)
}

//! Conversions between [ApInt] and [ApFloat], either by raw bit pattern or
//! by numeric value through a host integer type. The trait seams take the
//! place of the specialized casts a C-family library would expose.

use apmath_core::ApInt;

use crate::{ApFloat, ApFloatPrec};

/// Conversion preserving the raw bit representation
pub trait Bitcast<From>: Sized {
    fn bitcast(from: &From) -> Self;
}

/// Converts `from` to the value of type `To` with the same bit
/// representation as `from`
#[track_caller]
#[must_use]
pub fn bitcast<From, To: Bitcast<From>>(from: &From) -> To {
    To::bitcast(from)
}

impl Bitcast<ApFloat> for ApInt {
    /// Reinterprets the float as an integer of its total bitwidth
    fn bitcast(from: &ApFloat) -> ApInt {
        ApInt::from_u64(from.to_bits(), from.precision().total_bitwidth())
    }
}

impl Bitcast<ApInt> for ApFloat {
    /// Reinterprets the integer as the float of matching total bitwidth
    ///
    /// # Panics
    ///
    /// If the bitwidth of `from` is neither 32 nor 64
    #[track_caller]
    fn bitcast(from: &ApInt) -> ApFloat {
        match from.bitwidth() {
            32 => ApFloat::single(f32::from_bits(from.to_u32())),
            64 => ApFloat::double(f64::from_bits(from.to_u64())),
            w => panic!("cannot bitcast an `ApInt` of bitwidth {w} to an `ApFloat`"),
        }
    }
}

/// Conversion preserving the numeric value under an unsigned interpretation
pub trait Valuecast<From>: Sized {
    fn valuecast(from: &From, to_bitwidth: usize) -> Self;
}

/// Converts `from` to type `To` with bitwidth `to_bitwidth`, interpreting
/// integers as unsigned
#[track_caller]
#[must_use]
pub fn valuecast<From, To: Valuecast<From>>(from: &From, to_bitwidth: usize) -> To {
    To::valuecast(from, to_bitwidth)
}

impl Valuecast<ApFloat> for ApInt {
    /// Numeric truncation toward zero through the host unsigned integer of
    /// width `to_bitwidth`
    ///
    /// # Panics
    ///
    /// If `to_bitwidth` is not one of 8, 16, 32, or 64
    #[track_caller]
    fn valuecast(from: &ApFloat, to_bitwidth: usize) -> ApInt {
        let value = from.to_f64();
        let bits = match to_bitwidth {
            8 => value as u8 as u64,
            16 => value as u16 as u64,
            32 => value as u32 as u64,
            64 => value as u64,
            w => panic!("cannot valuecast an `ApFloat` to an `ApInt` of bitwidth {w}"),
        };
        ApInt::from_u64(bits, to_bitwidth)
    }
}

impl Valuecast<ApInt> for ApFloat {
    /// Conversion through the host `u64` after zero-extension to 64 bits
    ///
    /// # Panics
    ///
    /// If `to_bitwidth` is not 32 or 64
    #[track_caller]
    fn valuecast(from: &ApInt, to_bitwidth: usize) -> ApFloat {
        // `to_u64` is the zero-extension (or truncation) of `from` to 64
        // bits
        let value = from.to_u64();
        match to_bitwidth {
            32 => ApFloat::single(value as f32),
            64 => ApFloat::double(value as f64),
            w => panic!("cannot valuecast an `ApInt` to an `ApFloat` of bitwidth {w}"),
        }
    }
}

/// Conversion preserving the numeric value under a signed interpretation
pub trait SignedValuecast<From>: Sized {
    fn signed_valuecast(from: &From, to_bitwidth: usize) -> Self;
}

/// Converts `from` to type `To` with bitwidth `to_bitwidth`, interpreting
/// integers as signed
#[track_caller]
#[must_use]
pub fn signed_valuecast<From, To: SignedValuecast<From>>(from: &From, to_bitwidth: usize) -> To {
    To::signed_valuecast(from, to_bitwidth)
}

impl SignedValuecast<ApFloat> for ApInt {
    /// Numeric truncation toward zero through the host signed integer of
    /// width `to_bitwidth`
    ///
    /// # Panics
    ///
    /// If `to_bitwidth` is not one of 8, 16, 32, or 64
    #[track_caller]
    fn signed_valuecast(from: &ApFloat, to_bitwidth: usize) -> ApInt {
        let value = from.to_f64();
        let bits = match to_bitwidth {
            8 => value as i8 as u64,
            16 => value as i16 as u64,
            32 => value as i32 as u64,
            64 => value as i64 as u64,
            w => panic!("cannot signed valuecast an `ApFloat` to an `ApInt` of bitwidth {w}"),
        };
        ApInt::from_u64(bits, to_bitwidth)
    }
}

impl SignedValuecast<ApInt> for ApFloat {
    /// Conversion through the host `i64` after sign-extension to 64 bits
    ///
    /// # Panics
    ///
    /// If `to_bitwidth` is not 32 or 64
    #[track_caller]
    fn signed_valuecast(from: &ApInt, to_bitwidth: usize) -> ApFloat {
        let mut wide = from.clone();
        wide.sext(64);
        let value = wide.to_i64();
        match to_bitwidth {
            32 => ApFloat::single(value as f32),
            64 => ApFloat::double(value as f64),
            w => panic!("cannot signed valuecast an `ApInt` to an `ApFloat` of bitwidth {w}"),
        }
    }
}

//! This crate compiles all the interfaces of `apmath_core` and
//! `apmath_float`: the [ApInt] arbitrary width integer with its
//! value-returning free function layer, the [ApFloat] host float shim, and
//! the `bitcast`/`valuecast`/`signed_valuecast` conversions between them.

pub use apmath_core::*;
pub use apmath_float::{
    abs, acos, asin, atan, bitcast, cbrt, cmp, cos, exp, exp10, exp2, hypot, log, log10, log2,
    pow, precision_cast, signed_valuecast, sin, sqrt, tan, valuecast, ApFloat, ApFloatPrec,
    Bitcast, SignedValuecast, Valuecast,
};

pub mod prelude {
    pub use crate::{ApFloat, ApFloatPrec, ApInt};
}

//! Floating point shim and conversions for the `apmath` system of crates
//!
//! [ApFloat] is a container for one host float tagged with its precision.
//! Only the single `(23, 8)` and double `(52, 11)` mantissa/exponent presets
//! are supported, and every operation delegates to the host FPU and host
//! math library; this is temporary until proper binary float emulation at
//! arbitrary precision is implemented.
//!
//! The conversion entry points `bitcast`, `valuecast`, and
//! `signed_valuecast` move values between [ApFloat] and
//! [ApInt](apmath_core::ApInt) by raw bit pattern or by numeric value.

// There are many guaranteed nonzero lengths
#![allow(clippy::len_without_is_empty)]

mod conversion;
mod float;

pub use conversion::{bitcast, signed_valuecast, valuecast, Bitcast, SignedValuecast, Valuecast};
pub use float::{
    abs, acos, asin, atan, cbrt, cmp, cos, exp, exp10, exp2, hypot, log, log10, log2, pow,
    precision_cast, sin, sqrt, tan, ApFloat, ApFloatPrec,
};

pub mod prelude {
    pub use crate::{ApFloat, ApFloatPrec};
}

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use apmath_core::ParseError;

/// A floating point precision, described by the widths of the mantissa and
/// exponent fields. Only the [single](ApFloatPrec::SINGLE) and
/// [double](ApFloatPrec::DOUBLE) presets are legal to construct an
/// [ApFloat] with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApFloatPrec {
    /// The number of bits used to represent the mantissa
    pub mantissa_width: u32,
    /// The number of bits used to represent the exponent
    pub exponent_width: u32,
}

impl ApFloatPrec {
    /// The precision of a host `f32`
    pub const SINGLE: ApFloatPrec = ApFloatPrec {
        mantissa_width: 23,
        exponent_width: 8,
    };
    /// The precision of a host `f64`
    pub const DOUBLE: ApFloatPrec = ApFloatPrec {
        mantissa_width: 52,
        exponent_width: 11,
    };

    /// Returns `mantissa_width + exponent_width + 1` (one extra for the sign
    /// bit)
    #[must_use]
    pub const fn total_bitwidth(self) -> usize {
        (self.mantissa_width + self.exponent_width + 1) as usize
    }
}

#[derive(Clone, Copy)]
pub(crate) enum Repr {
    Single(f32),
    Double(f64),
}

/// A floating point value of selectable precision. Precision is specified on
/// construction and can be changed with [ApFloat::set_precision]; operations
/// involving two values require the operands to be of the same precision.
///
/// The value is one host float, `f32` for single and `f64` for double
/// precision; arithmetic, classification, parsing, and formatting all
/// forward to the host.
#[derive(Clone, Copy)]
pub struct ApFloat {
    pub(crate) repr: Repr,
}

/// The constant the bit pattern hash fold is seeded and salted with
const GOLDEN: u64 = 0x9e37_79b9_7f4a_7c15;

impl ApFloat {
    #[inline]
    #[track_caller]
    fn is_single_precision(precision: ApFloatPrec) -> bool {
        match precision {
            ApFloatPrec::SINGLE => true,
            ApFloatPrec::DOUBLE => false,
            _ => panic!(
                "unsupported `ApFloatPrec` with mantissa width {} and exponent width {}",
                precision.mantissa_width, precision.exponent_width
            ),
        }
    }

    pub(crate) fn single(value: f32) -> Self {
        ApFloat {
            repr: Repr::Single(value),
        }
    }

    pub(crate) fn double(value: f64) -> Self {
        ApFloat {
            repr: Repr::Double(value),
        }
    }

    /// Zero-value construction with the given precision
    ///
    /// # Panics
    ///
    /// If `precision` is neither the single nor the double preset
    #[track_caller]
    pub fn zero(precision: ApFloatPrec) -> Self {
        Self::from_f64(0.0, precision)
    }

    /// Constructs from `value` cast to the given precision
    ///
    /// # Panics
    ///
    /// If `precision` is neither the single nor the double preset
    #[track_caller]
    pub fn from_f64(value: f64, precision: ApFloatPrec) -> Self {
        if Self::is_single_precision(precision) {
            Self::single(value as f32)
        } else {
            Self::double(value)
        }
    }

    /// The precision of this value
    #[must_use]
    pub fn precision(&self) -> ApFloatPrec {
        match self.repr {
            Repr::Single(_) => ApFloatPrec::SINGLE,
            Repr::Double(_) => ApFloatPrec::DOUBLE,
        }
    }

    /// Converts to a host `f32`, rounding if double precision
    #[must_use]
    pub fn to_f32(&self) -> f32 {
        match self.repr {
            Repr::Single(x) => x,
            Repr::Double(x) => x as f32,
        }
    }

    /// Converts to a host `f64`
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self.repr {
            Repr::Single(x) => x as f64,
            Repr::Double(x) => x,
        }
    }

    /// The raw bit pattern, zero-extended to 64 bits for single precision
    #[must_use]
    pub fn to_bits(&self) -> u64 {
        match self.repr {
            Repr::Single(x) => x.to_bits() as u64,
            Repr::Double(x) => x.to_bits(),
        }
    }

    #[inline]
    #[track_caller]
    fn assert_same_precision(&self, rhs: &Self) {
        assert!(
            self.precision() == rhs.precision(),
            "mismatched `ApFloat` precisions"
        );
    }

    /// Add-assigns by `rhs`
    ///
    /// # Panics
    ///
    /// If the precisions differ
    #[track_caller]
    pub fn add(&mut self, rhs: &Self) -> &mut Self {
        self.assert_same_precision(rhs);
        match (&mut self.repr, &rhs.repr) {
            (Repr::Single(x), Repr::Single(y)) => *x += y,
            (Repr::Double(x), Repr::Double(y)) => *x += y,
            _ => unreachable!(),
        }
        self
    }

    /// Subtract-assigns by `rhs`
    ///
    /// # Panics
    ///
    /// If the precisions differ
    #[track_caller]
    pub fn sub(&mut self, rhs: &Self) -> &mut Self {
        self.assert_same_precision(rhs);
        match (&mut self.repr, &rhs.repr) {
            (Repr::Single(x), Repr::Single(y)) => *x -= y,
            (Repr::Double(x), Repr::Double(y)) => *x -= y,
            _ => unreachable!(),
        }
        self
    }

    /// Multiply-assigns by `rhs`
    ///
    /// # Panics
    ///
    /// If the precisions differ
    #[track_caller]
    pub fn mul(&mut self, rhs: &Self) -> &mut Self {
        self.assert_same_precision(rhs);
        match (&mut self.repr, &rhs.repr) {
            (Repr::Single(x), Repr::Single(y)) => *x *= y,
            (Repr::Double(x), Repr::Double(y)) => *x *= y,
            _ => unreachable!(),
        }
        self
    }

    /// Divide-assigns by `rhs`
    ///
    /// # Panics
    ///
    /// If the precisions differ
    #[track_caller]
    pub fn div(&mut self, rhs: &Self) -> &mut Self {
        self.assert_same_precision(rhs);
        match (&mut self.repr, &rhs.repr) {
            (Repr::Single(x), Repr::Single(y)) => *x /= y,
            (Repr::Double(x), Repr::Double(y)) => *x /= y,
            _ => unreachable!(),
        }
        self
    }

    /// Swaps the values of `self` and `rhs`, representations included
    pub fn swap(&mut self, rhs: &mut Self) {
        core::mem::swap(self, rhs);
    }

    /// Flips the sign
    pub fn negate(&mut self) -> &mut Self {
        match &mut self.repr {
            Repr::Single(x) => *x = -*x,
            Repr::Double(x) => *x = -*x,
        }
        self
    }

    /// Switches representation by host conversion
    ///
    /// # Panics
    ///
    /// If `precision` is neither the single nor the double preset
    #[track_caller]
    pub fn set_precision(&mut self, precision: ApFloatPrec) -> &mut Self {
        *self = Self::from_f64(self.to_f64(), precision);
        self
    }

    /// Three-way comparison against `rhs` in host float order. Comparisons
    /// involving a NaN yield `Equal`, because the host cannot order them.
    ///
    /// # Panics
    ///
    /// If the precisions differ
    #[track_caller]
    #[must_use]
    pub fn cmp(&self, rhs: &Self) -> Ordering {
        self.assert_same_precision(rhs);
        let (a, b) = (self.to_f64(), rhs.to_f64());
        if a < b {
            Ordering::Less
        } else if a > b {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Three-way comparison against a host `f64`
    #[must_use]
    pub fn cmp_f64(&self, rhs: f64) -> Ordering {
        let a = self.to_f64();
        if a < rhs {
            Ordering::Less
        } else if a > rhs {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// If the sign bit is set. Note that this is true for negative zero.
    #[must_use]
    pub fn signbit(&self) -> bool {
        match self.repr {
            Repr::Single(x) => x.is_sign_negative(),
            Repr::Double(x) => x.is_sign_negative(),
        }
    }

    /// If the value is positive or negative infinity
    #[must_use]
    pub fn is_inf(&self) -> bool {
        match self.repr {
            Repr::Single(x) => x.is_infinite(),
            Repr::Double(x) => x.is_infinite(),
        }
    }

    /// If the value is any NaN
    #[must_use]
    pub fn is_nan(&self) -> bool {
        match self.repr {
            Repr::Single(x) => x.is_nan(),
            Repr::Double(x) => x.is_nan(),
        }
    }

    /// Computes a deterministic 64 bit hash of the bit pattern. Negative
    /// zero hashes as positive zero to stay consistent with equality.
    ///
    /// Note that this is meant for use with associative containers and is
    /// not a cryptographic hash.
    #[must_use]
    pub fn hash_value(&self) -> u64 {
        let limb = if self.cmp_f64(0.0) == Ordering::Equal && !self.is_nan() {
            0
        } else {
            self.to_bits()
        };
        let mut seed = GOLDEN;
        seed ^= limb
            .wrapping_add(GOLDEN)
            .wrapping_add(seed << 6)
            .wrapping_add(seed >> 2);
        seed
    }

    /// Parses `src` with the host float parser and casts to the given
    /// precision
    ///
    /// # Panics
    ///
    /// If `precision` is neither the single nor the double preset
    #[track_caller]
    pub fn parse(src: &str, precision: ApFloatPrec) -> Result<ApFloat, ParseError> {
        let src = src.trim();
        if src.is_empty() {
            return Err(ParseError::Empty)
        }
        match src.parse::<f64>() {
            Ok(value) => Ok(Self::from_f64(value, precision)),
            Err(_) => Err(ParseError::InvalidChar),
        }
    }
}

impl Default for ApFloat {
    /// A double precision zero
    fn default() -> Self {
        ApFloat::zero(ApFloatPrec::DOUBLE)
    }
}

/// If `self` and `rhs` have unmatching precisions, `false` will be returned.
impl PartialEq for ApFloat {
    fn eq(&self, rhs: &Self) -> bool {
        self.precision() == rhs.precision() && self.cmp(rhs) == Ordering::Equal
    }
}

impl PartialEq<f64> for ApFloat {
    fn eq(&self, rhs: &f64) -> bool {
        self.cmp_f64(*rhs) == Ordering::Equal
    }
}

/// Host float order; values of unmatching precisions are unordered, as are
/// NaNs.
impl PartialOrd for ApFloat {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        if self.precision() != rhs.precision() {
            return None
        }
        self.to_f64().partial_cmp(&rhs.to_f64())
    }
}

impl Hash for ApFloat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

/// Formats with the host float formatter
impl fmt::Display for ApFloat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.repr {
            Repr::Single(x) => fmt::Display::fmt(&x, f),
            Repr::Double(x) => fmt::Display::fmt(&x, f),
        }
    }
}

impl fmt::Debug for ApFloat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.repr {
            Repr::Single(x) => write!(f, "{x:?}_f32"),
            Repr::Double(x) => write!(f, "{x:?}_f64"),
        }
    }
}

/// Three-way comparison of `lhs` and `rhs` in host float order
///
/// # Panics
///
/// If the precisions differ
#[track_caller]
#[must_use]
pub fn cmp(lhs: &ApFloat, rhs: &ApFloat) -> Ordering {
    lhs.cmp(rhs)
}

/// Sets the precision of `operand` to `precision` by host conversion
///
/// # Panics
///
/// If `precision` is neither the single nor the double preset
#[track_caller]
#[must_use]
pub fn precision_cast(mut operand: ApFloat, precision: ApFloatPrec) -> ApFloat {
    operand.set_precision(precision);
    operand
}

macro_rules! forward_unary_fn {
    ($($fn_name:ident)*) => {
        $(
            /// Forwards to the host implementation at the precision of `arg`
            #[must_use]
            pub fn $fn_name(arg: &ApFloat) -> ApFloat {
                match arg.repr {
                    Repr::Single(x) => ApFloat::single(x.$fn_name()),
                    Repr::Double(x) => ApFloat::double(x.$fn_name()),
                }
            }
        )*
    };
}

forward_unary_fn!(abs exp exp2 ln log2 log10 sqrt cbrt sin cos tan asin acos atan);

/// Computes the natural logarithm of `arg`
#[must_use]
pub fn log(arg: &ApFloat) -> ApFloat {
    ln(arg)
}

/// Computes 10 raised to the power of `arg`
#[must_use]
pub fn exp10(arg: &ApFloat) -> ApFloat {
    match arg.repr {
        Repr::Single(x) => ApFloat::single(10.0f32.powf(x)),
        Repr::Double(x) => ApFloat::double(10.0f64.powf(x)),
    }
}

/// Computes `base` raised to the power of `exp`
///
/// # Panics
///
/// If the precisions differ
#[track_caller]
#[must_use]
pub fn pow(base: &ApFloat, exp: &ApFloat) -> ApFloat {
    base.assert_same_precision(exp);
    match (&base.repr, &exp.repr) {
        (Repr::Single(x), Repr::Single(y)) => ApFloat::single(x.powf(*y)),
        (Repr::Double(x), Repr::Double(y)) => ApFloat::double(x.powf(*y)),
        _ => unreachable!(),
    }
}

/// Computes the length of the hypotenuse of a right triangle with legs `a`
/// and `b`
///
/// # Panics
///
/// If the precisions differ
#[track_caller]
#[must_use]
pub fn hypot(a: &ApFloat, b: &ApFloat) -> ApFloat {
    a.assert_same_precision(b);
    match (&a.repr, &b.repr) {
        (Repr::Single(x), Repr::Single(y)) => ApFloat::single(x.hypot(*y)),
        (Repr::Double(x), Repr::Double(y)) => ApFloat::double(x.hypot(*y)),
        _ => unreachable!(),
    }
}

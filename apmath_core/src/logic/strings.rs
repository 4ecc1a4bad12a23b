use alloc::{
    string::String,
    vec::Vec,
};
use core::{fmt, str::FromStr};

use apmath_internals::*;

use crate::ApInt;

const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Base-aware in-place division by two of a big-endian digit array,
/// returning the parity of the value before the halving
fn halve_in_place(digits: &mut [u8], radix: u8) -> u8 {
    let mut carry = 0u32;
    for digit in digits.iter_mut() {
        let cur = carry * (radix as u32) + (*digit as u32);
        *digit = (cur >> 1) as u8;
        carry = cur & 1;
    }
    carry as u8
}

#[track_caller]
fn assert_radix(radix: u8) {
    assert!(
        radix >= 2 && radix <= 36,
        "radix {radix} is outside of the range 2..=36"
    );
}

/// # String conversion
impl ApInt {
    /// Converts to a string in the given radix, interpreting `self` as an
    /// unsigned integer. Digits are `0..9` then `A..Z`; a zero value renders
    /// as `"0"`.
    ///
    /// # Panics
    ///
    /// If `radix` is outside of the range `2..=36`
    #[track_caller]
    #[must_use]
    pub fn to_string_radix(&self, radix: u8) -> String {
        assert_radix(radix);
        let mut tmp = self.clone();
        let mut out: Vec<u8> = Vec::new();
        while !tmp.is_zero() {
            let digit = tmp.short_udiv_in_place(radix as Limb);
            out.push(DIGITS[digit as usize]);
        }
        if out.is_empty() {
            out.push(b'0');
        }
        out.reverse();
        // only ASCII digits were pushed
        String::from_utf8(out).unwrap()
    }

    /// Converts to a string in the given radix, interpreting `self` as a
    /// signed integer. Negative values format their magnitude behind a `-`;
    /// the signed minimum value reads as its own magnitude under the
    /// unsigned interpretation, so negation covers every case.
    ///
    /// # Panics
    ///
    /// If `radix` is outside of the range `2..=36`
    #[track_caller]
    #[must_use]
    pub fn signed_to_string_radix(&self, radix: u8) -> String {
        assert_radix(radix);
        if !self.msb() {
            return self.to_string_radix(radix)
        }
        let mut magnitude = self.clone();
        magnitude.negate();
        let mut out = String::from("-");
        out.push_str(&magnitude.to_string_radix(radix));
        out
    }

    /// Parses `src` in the given radix.
    ///
    /// All characters except digits valid in `radix` and an initial `-`
    /// (appearing before any digit) are ignored. A `bitwidth` of zero sizes
    /// the result exactly as wide as required to represent the number, with
    /// one extra sign bit when negative; a nonzero `bitwidth` is used as is,
    /// failing with [ParseError::Overflow] when the number does not fit.
    /// Negative inputs are negated into two's complement at the final width.
    ///
    /// ```
    /// use apmath_core::ApInt;
    ///
    /// let x = ApInt::parse(" - f'F", 16, 0).unwrap();
    /// assert_eq!(x.bitwidth(), 9);
    /// assert_eq!(x.to_u64(), 0x101);
    /// ```
    pub fn parse(src: &str, radix: u8, bitwidth: usize) -> Result<ApInt, ParseError> {
        if radix < 2 || radix > 36 {
            return Err(ParseError::InvalidRadix)
        }
        // the earlier of the first digit (positive) or first `-` (negative)
        // decides the sign
        let mut negative = false;
        let mut sign_decided = false;
        let mut digits: Vec<u8> = Vec::new();
        for &c in src.as_bytes() {
            let digit = match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'z' => c - b'a' + 10,
                b'A'..=b'Z' => c - b'A' + 10,
                b'-' if !sign_decided => {
                    negative = true;
                    sign_decided = true;
                    continue
                }
                _ => continue,
            };
            if digit >= radix {
                continue
            }
            sign_decided = true;
            digits.push(digit);
        }
        if digits.is_empty() {
            return Err(ParseError::Empty)
        }
        // Halve the digit array until it is exhausted, pushing the parity
        // bits at incrementing positions. The number of halvings is the
        // minimum number of bits needed.
        let mut limbs: Vec<Limb> = Vec::new();
        let mut required = 0usize;
        while digits.iter().any(|&digit| digit != 0) {
            if (bitwidth != 0 && required == bitwidth) || required == MAX_BITWIDTH {
                return Err(ParseError::Overflow)
            }
            let bit = halve_in_place(&mut digits, radix);
            if bit != 0 {
                let i = whole_limbs(required);
                if i >= limbs.len() {
                    limbs.resize(i + 1, 0);
                }
                limbs[i] |= 1 << extra(required);
            }
            required += 1;
        }
        let w = if bitwidth == 0 {
            core::cmp::max(1, required + (negative as usize))
        } else {
            bitwidth
        };
        if w > MAX_BITWIDTH {
            return Err(ParseError::Overflow)
        }
        let mut res = ApInt::from_limbs(&limbs, w);
        if negative {
            // a set sign bit would read back as positive after negation
            if bitwidth != 0 && res.msb() {
                return Err(ParseError::Overflow)
            }
            res.negate();
        }
        Ok(res)
    }
}

impl FromStr for ApInt {
    type Err = ParseError;

    /// Radix 10 parsing with automatic width discovery, `ApInt::parse(s, 10, 0)`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApInt::parse(s, 10, 0)
    }
}

impl fmt::Debug for ApInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}_u{}", self.to_string_radix(16), self.bitwidth())
    }
}

/// Formats the unsigned decimal representation
impl fmt::Display for ApInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.to_string_radix(10))
    }
}

impl fmt::LowerHex for ApInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = self.to_string_radix(16);
        s.make_ascii_lowercase();
        f.pad(&s)
    }
}

impl fmt::UpperHex for ApInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.to_string_radix(16))
    }
}

impl fmt::Binary for ApInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.to_string_radix(2))
    }
}

impl fmt::Octal for ApInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.to_string_radix(8))
    }
}

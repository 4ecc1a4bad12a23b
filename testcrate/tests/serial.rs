//! String conversion behavior

mod common;

use apmath::{ApInt, ParseError};
use common::{eq, rng, BWS, ITERS};

#[test]
fn radix_round_trip() {
    let mut rng = rng();
    for &w in BWS {
        let mut a = ApInt::zero(w);
        for _ in 0..ITERS / 8 {
            a.rand_using(&mut rng);
            for radix in 2..=36u8 {
                let s = a.to_string_radix(radix);
                eq(&ApInt::parse(&s, radix, w).unwrap(), &a);
                // the signed form round-trips as well, except for the signed
                // minimum whose magnitude does not fit the fixed width
                if !a.is_smin() {
                    let s = a.signed_to_string_radix(radix);
                    eq(&ApInt::parse(&s, radix, w).unwrap(), &a);
                }
            }
        }
    }
}

#[test]
fn unsigned_formatting() {
    assert_eq!(ApInt::umax(64).to_string_radix(16), "FFFFFFFFFFFFFFFF");
    assert_eq!(ApInt::from_u64(u64::MAX, 64).to_string_radix(10), "18446744073709551615");
    assert_eq!(ApInt::zero(1).to_string_radix(10), "0");
    assert_eq!(ApInt::zero(256).to_string_radix(36), "0");
    assert_eq!(ApInt::from_u64(1, 1).to_string_radix(2), "1");
    assert_eq!(ApInt::from_u64(255, 9).to_string_radix(2), "11111111");
    assert_eq!(ApInt::from_u64(35, 8).to_string_radix(36), "Z");
    // a value wider than one limb
    let x = ApInt::parse("123456789ABCDEF0123456789", 16, 100).unwrap();
    assert_eq!(x.to_string_radix(16), "123456789ABCDEF0123456789");
    assert_eq!(x.limbs(), &[0xABCD_EF01_2345_6789, 0x1_2345_6789]);
}

#[test]
fn signed_formatting() {
    let neg = ApInt::parse("-255", 10, 0).unwrap();
    assert_eq!(neg.bitwidth(), 9);
    assert_eq!(neg.signed_to_string_radix(10), "-255");
    assert_eq!(neg.signed_to_string_radix(16), "-FF");
    // non-negative defers to the unsigned form
    assert_eq!(ApInt::from_u64(42, 16).signed_to_string_radix(10), "42");
    // the signed minimum formats its full magnitude
    assert_eq!(ApInt::smin(8).signed_to_string_radix(10), "-128");
    assert_eq!(ApInt::smin(64).signed_to_string_radix(10), "-9223372036854775808");
    assert_eq!(ApInt::umax(8).signed_to_string_radix(10), "-1");
}

#[test]
fn parse_sign_and_ignored_characters() {
    // the earlier of the first digit or first `-` decides the sign, all
    // other characters are ignored
    let x = ApInt::parse(" - f'F", 16, 0).unwrap();
    assert_eq!(x.bitwidth(), 9);
    assert_eq!(x.to_u64(), 0x101);
    let x = ApInt::parse("1_000_000", 10, 0).unwrap();
    assert_eq!(x.to_u64(), 1_000_000);
    // a `-` after the first digit does not negate
    let x = ApInt::parse("12-34", 10, 0).unwrap();
    assert_eq!(x.to_u64(), 1234);
    // digits invalid in the radix are ignored entirely
    let x = ApInt::parse("19", 8, 0).unwrap();
    assert_eq!(x.to_u64(), 1);
    // case insensitivity
    let x = ApInt::parse("aB", 16, 0).unwrap();
    assert_eq!(x.to_u64(), 0xAB);
}

#[test]
fn parse_width_policy() {
    // automatic width is the minimum number of bits, plus a sign bit when
    // negative
    assert_eq!(ApInt::parse("0", 10, 0).unwrap().bitwidth(), 1);
    assert_eq!(ApInt::parse("1", 10, 0).unwrap().bitwidth(), 1);
    assert_eq!(ApInt::parse("2", 10, 0).unwrap().bitwidth(), 2);
    assert_eq!(ApInt::parse("255", 10, 0).unwrap().bitwidth(), 8);
    assert_eq!(ApInt::parse("256", 10, 0).unwrap().bitwidth(), 9);
    assert_eq!(ApInt::parse("-1", 10, 0).unwrap().bitwidth(), 2);
    // negative zero is reported as positive
    let x = ApInt::parse("-0", 10, 0).unwrap();
    assert_eq!(x.bitwidth(), 1);
    assert!(x.is_zero());

    // fixed widths
    let x = ApInt::parse("255", 10, 8).unwrap();
    assert_eq!(x.to_u64(), 255);
    assert!(matches!(ApInt::parse("256", 10, 8), Err(ParseError::Overflow)));
    // a negative value may not have its sign bit already set
    assert!(matches!(ApInt::parse("-128", 10, 8), Err(ParseError::Overflow)));
    // but one less negates cleanly into two's complement
    let x = ApInt::parse("-127", 10, 8).unwrap();
    assert_eq!(x.to_u64(), 129);
    let x = ApInt::parse("-1", 10, 64).unwrap();
    eq(&x, &ApInt::umax(64));
}

#[test]
fn parse_failures() {
    assert!(matches!(ApInt::parse("123", 1, 0), Err(ParseError::InvalidRadix)));
    assert!(matches!(ApInt::parse("123", 37, 0), Err(ParseError::InvalidRadix)));
    assert!(matches!(ApInt::parse("", 10, 0), Err(ParseError::Empty)));
    assert!(matches!(ApInt::parse("-", 10, 0), Err(ParseError::Empty)));
    assert!(matches!(ApInt::parse("xyz", 10, 0), Err(ParseError::Empty)));
    // `FromStr` is radix 10 with width discovery
    let x: ApInt = "-300".parse().unwrap();
    assert_eq!(x.bitwidth(), 10);
    assert_eq!(x.signed_to_string_radix(10), "-300");
    assert!("".parse::<ApInt>().is_err());
}

#[test]
fn display_uses_decimal() {
    let x = ApInt::parse("987654321987654321987654321", 10, 0).unwrap();
    assert_eq!(format!("{x}"), "987654321987654321987654321");
}

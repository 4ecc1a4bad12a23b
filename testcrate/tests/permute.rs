//! Shift, rotate, extension, and bit manipulation behavior

mod common;

use apmath::{ashl, ashr, lshl, lshr, rotl, rotr, sext, zext, ApInt};
use common::{check_invariants, eq, rng, BWS, ITERS};

#[test]
fn shift_round_trip() {
    let mut rng = rng();
    for &w in BWS {
        let mut a = ApInt::zero(w);
        for _ in 0..ITERS {
            a.rand_using(&mut rng);
            for s in [0, 1, w / 3, w / 2, w - 1] {
                if s >= w {
                    continue
                }
                // shifting back down zeros the top `s` bits
                let masked = lshr(lshl(a.clone(), s), s);
                let mut mask = ApInt::umax(w);
                mask.lshr(s);
                let mut expected = a.clone();
                expected.btwand(&mask);
                eq(&masked, &expected);

                // arithmetic left is logical left
                eq(&ashl(a.clone(), s), &lshl(a.clone(), s));

                // arithmetic right of a non-negative value is logical right
                let mut non_neg = a.clone();
                if w > 1 {
                    non_neg.clear(w - 1);
                }
                if !non_neg.negative() {
                    eq(&ashr(non_neg.clone(), s), &lshr(non_neg.clone(), s));
                }
            }
        }
    }
}

#[test]
fn arithmetic_right_fills_with_sign() {
    for &w in BWS {
        // all ones stays all ones under any arithmetic right shift
        for s in [0, 1, w - 1] {
            if s >= w {
                continue
            }
            eq(&ashr(ApInt::umax(w), s), &ApInt::umax(w));
        }
        // the sign bit of the signed minimum smears downwards
        if w > 1 {
            let x = ashr(ApInt::smin(w), 1);
            assert_eq!(x.clz(), 0);
            assert_eq!(x.popcount(), 2);
            assert_eq!(x.ctz(), w - 2);
        }
        // shifting by `w - 1` turns any negative value into all ones
        eq(&ashr(ApInt::smin(w), w - 1), &ApInt::umax(w));
    }
}

#[test]
fn rotation_inverse() {
    let mut rng = rng();
    for &w in BWS {
        let mut a = ApInt::zero(w);
        for _ in 0..ITERS {
            a.rand_using(&mut rng);
            for s in [0, 1, w / 2, w - 1, w, w + 1, 3 * w + 2] {
                eq(&rotr(rotl(a.clone(), s), s), &a);
                // a full rotation is the identity
                eq(&rotl(a.clone(), w), &a);
                // rotating left by `s` is rotating right by `w - s`
                eq(&rotl(a.clone(), s % w), &rotr(a.clone(), w - (s % w)));
            }
        }
    }
    let mut x = ApInt::from_u64(0b1011, 4);
    x.rotl(1);
    assert_eq!(x.to_u64(), 0b0111);
    x.rotr(2);
    assert_eq!(x.to_u64(), 0b1101);
}

#[test]
fn extension_round_trip() {
    let mut rng = rng();
    for &w in BWS {
        let mut a = ApInt::zero(w);
        for _ in 0..ITERS {
            a.rand_using(&mut rng);
            for grow in [w, w + 1, w + 63, w + 64, 2 * w] {
                // zero extension is value preserving in both directions
                eq(&zext(zext(a.clone(), grow), w), &a);
                let wide = zext(a.clone(), grow);
                check_invariants(&wide);
                assert_eq!(wide.bitwidth(), grow);
                if grow > w {
                    // the newly grown bits are zero
                    assert!(!wide.test(w));
                    assert!(!wide.test(grow - 1));
                }

                // sign extension preserves the signed value
                let swide = sext(a.clone(), grow);
                check_invariants(&swide);
                eq(&zext(swide.clone(), w), &a);
                if grow > w {
                    assert_eq!(swide.negative(), a.negative());
                }
            }
        }
    }
}

#[test]
fn extension_fills() {
    // growing a negative value fills with ones, a positive one with zeros
    let x = sext(ApInt::from_u64(0b100, 3), 100);
    assert_eq!(x.clz(), 0);
    assert_eq!(x.ctz(), 2);
    assert_eq!(x.popcount(), 98);
    let y = zext(ApInt::from_u64(0b100, 3), 100);
    assert_eq!(y.clz(), 97);
    assert_eq!(y.popcount(), 1);
    // truncation masks
    let t = zext(ApInt::umax(100), 40);
    eq(&t, &ApInt::umax(40));
    let t = sext(ApInt::umax(100), 40);
    eq(&t, &ApInt::umax(40));
}

#[test]
fn bitset_laws() {
    let mut rng = rng();
    for &w in BWS {
        let mut a = ApInt::zero(w);
        for _ in 0..ITERS {
            a.rand_using(&mut rng);
            for n in [0, w / 2, w - 1] {
                a.set(n);
                assert!(a.test(n));
                a.clear(n);
                assert!(!a.test(n));
                let before = a.clone();
                a.flip(n);
                assert_ne!(a.test(n), before.test(n));
                a.flip(n);
                eq(&a, &before);
                a.set_to(n, true);
                assert!(a.test(n));
                a.set_to(n, false);
                assert!(!a.test(n));
                a = before;
            }
            // complement is an involution and flips every live bit
            let before = a.clone();
            let ones = a.popcount();
            a.btwnot();
            check_invariants(&a);
            assert_eq!(a.popcount(), w - ones);
            a.btwnot();
            eq(&a, &before);

            if !a.is_zero() {
                assert!(a.popcount() + a.clz() + a.ctz() <= w);
                assert!(a.clz() + a.ctz() < w);
            } else {
                assert_eq!(a.clz(), w);
                assert_eq!(a.ctz(), w);
                assert_eq!(a.popcount(), 0);
            }
        }
        assert!(ApInt::umax(w).all());
        assert!(!ApInt::zero(w).any());
        assert!(ApInt::zero(w).none());
    }
}

//! Algebraic identities that must hold for all values of matching bitwidth

mod common;

use core::cmp::Ordering;

use apmath::{add, mul, negate, sub, ApInt};
use common::{check_invariants, eq, rng, BWS, ITERS};

#[test]
fn additive_group() {
    let mut rng = rng();
    for &w in BWS {
        let mut a = ApInt::zero(w);
        let mut b = ApInt::zero(w);
        let mut c = ApInt::zero(w);
        for _ in 0..ITERS {
            a.rand_using(&mut rng);
            b.rand_using(&mut rng);
            c.rand_using(&mut rng);

            // a + (-a) == 0
            eq(&add(a.clone(), &negate(a.clone())), &ApInt::zero(w));
            // commutativity
            eq(&add(a.clone(), &b), &add(b.clone(), &a));
            // associativity
            eq(
                &add(add(a.clone(), &b), &c),
                &add(a.clone(), &add(b.clone(), &c)),
            );
            // subtraction inverts addition
            eq(&sub(add(a.clone(), &b), &b), &a);
            // double negation
            eq(&negate(negate(a.clone())), &a);
        }
        // negation fixed points
        eq(&negate(ApInt::zero(w)), &ApInt::zero(w));
        eq(&negate(ApInt::smin(w)), &ApInt::smin(w));
    }
}

#[test]
fn multiplicative_ring() {
    let mut rng = rng();
    for &w in BWS {
        let one = ApInt::from_u64(1, w);
        let zero = ApInt::zero(w);
        let mut a = ApInt::zero(w);
        let mut b = ApInt::zero(w);
        let mut c = ApInt::zero(w);
        for _ in 0..ITERS {
            a.rand_using(&mut rng);
            b.rand_using(&mut rng);
            c.rand_using(&mut rng);

            eq(&mul(&a, &b), &mul(&b, &a));
            eq(&mul(&mul(&a, &b), &c), &mul(&a, &mul(&b, &c)));
            // distributivity over addition
            eq(
                &mul(&a, &add(b.clone(), &c)),
                &add(mul(&a, &b), &mul(&a, &c)),
            );
            eq(&mul(&a, &one), &a);
            eq(&mul(&a, &zero), &zero);
        }
    }
}

#[test]
fn division_identity() {
    let mut rng = rng();
    for &w in BWS {
        let mut n = ApInt::zero(w);
        let mut d = ApInt::zero(w);
        for _ in 0..ITERS {
            n.rand_using(&mut rng);
            d.rand_using(&mut rng);
            if d.is_zero() {
                d.set(0);
            }
            let (q, r) = n.udivrem(&d);
            check_invariants(&q);
            check_invariants(&r);
            assert_eq!(r.ucmp(&d), Ordering::Less);
            // n == q * d + r
            eq(&add(mul(&q, &d), &r), &n);

            let mut quo = n.clone();
            quo.udiv(&d);
            eq(&quo, &q);
            let mut rem = n.clone();
            rem.urem(&d);
            eq(&rem, &r);
        }
    }
}

#[test]
fn signed_division_truncates_toward_zero() {
    let mut rng = rng();
    for &w in BWS {
        let mut n = ApInt::zero(w);
        let mut d = ApInt::zero(w);
        for _ in 0..ITERS {
            n.rand_using(&mut rng);
            d.rand_using(&mut rng);
            if d.is_zero() {
                d.set(0);
            }
            let (q, r) = n.sdivrem(&d);
            check_invariants(&q);
            check_invariants(&r);
            // n == q * d + r in the wrapping ring
            eq(&add(mul(&q, &d), &r), &n);
            // the remainder is zero or takes the sign of the dividend
            assert!(r.is_zero() || (r.negative() == n.negative()));
            // |r| < |d|; the magnitude of the signed minimum reads correctly
            // under the unsigned interpretation, so a negated `smin` divisor
            // is covered too
            let mut r_mag = r.clone();
            if r_mag.negative() {
                r_mag.negate();
            }
            let mut d_mag = d.clone();
            if d_mag.negative() {
                d_mag.negate();
            }
            assert_eq!(r_mag.ucmp(&d_mag), Ordering::Less);

            let mut quo = n.clone();
            quo.sdiv(&d);
            eq(&quo, &q);
            let mut rem = n.clone();
            rem.srem(&d);
            eq(&rem, &r);
        }
    }
}

#[test]
fn signed_division_overflow_wraps() {
    for &w in BWS {
        let smin = ApInt::smin(w);
        let neg_one = ApInt::umax(w);
        let (q, r) = smin.sdivrem(&neg_one);
        eq(&q, &smin);
        assert!(r.is_zero());
    }
}

#[test]
fn concrete_signed_division() {
    let w = 96;
    let seven = ApInt::from_u64(7, w);
    let two = ApInt::from_u64(2, w);
    let neg_seven = negate(seven.clone());
    let neg_two = negate(two.clone());

    let (q, r) = seven.sdivrem(&neg_two);
    eq(&q, &negate(ApInt::from_u64(3, w)));
    eq(&r, &ApInt::from_u64(1, w));

    let (q, r) = neg_seven.sdivrem(&two);
    eq(&q, &negate(ApInt::from_u64(3, w)));
    eq(&r, &negate(ApInt::from_u64(1, w)));

    let (q, r) = neg_seven.sdivrem(&neg_two);
    eq(&q, &ApInt::from_u64(3, w));
    eq(&r, &negate(ApInt::from_u64(1, w)));
}

#[test]
fn comparison_order() {
    let mut rng = rng();
    for &w in BWS {
        let zero = ApInt::zero(w);
        let mut a = ApInt::zero(w);
        let mut b = ApInt::zero(w);
        for _ in 0..ITERS {
            a.rand_using(&mut rng);
            b.rand_using(&mut rng);

            assert_eq!(a.ucmp(&a), Ordering::Equal);
            assert_eq!(a.scmp(&a), Ordering::Equal);
            assert_eq!(a.ucmp(&b), b.ucmp(&a).reverse());
            assert_eq!(a.scmp(&b), b.scmp(&a).reverse());
            // a value is negative exactly when it sorts below zero
            if !a.is_zero() {
                assert_eq!(a.scmp(&zero) == Ordering::Less, a.negative());
            }
            // unsigned successor ordering
            if !a.is_umax() {
                let succ = add(a.clone(), &ApInt::from_u64(1, w));
                assert_eq!(a.ucmp(&succ), Ordering::Less);
            }
        }
        assert_eq!(ApInt::smin(w).scmp(&ApInt::smax(w)), Ordering::Less);
        assert_eq!(ApInt::umin(w).ucmp(&ApInt::umax(w)), Ordering::Less);
        assert_eq!(ApInt::umax(w).scmp(&ApInt::zero(w)), Ordering::Less);
    }
    // equality requires equal bitwidths
    assert_ne!(ApInt::zero(64), ApInt::zero(65));
}

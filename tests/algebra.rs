// Copyright 2026 the polynest developers
// released under MIT license

use polynest::{Coeff, Exp, Mono, Poly};
use proptest::prelude::*;

fn c(v: Coeff) -> Poly {
    Poly::from_coeff(v)
}

fn p<const N: usize>(monos: [(Poly, Exp); N]) -> Poly {
    Poly::from_monos(
        monos
            .into_iter()
            .map(|(coeff, exp)| Mono::new(coeff, exp))
            .collect(),
    )
}

#[test]
fn opposite_linear_terms_cancel() {
    let a = p([(c(1), 1)]);
    let b = p([(c(-1), 1)]);
    let sum = a.add(&b);
    assert!(sum.is_zero());
    assert_eq!(sum, c(0));
}

#[test]
fn construction_merges_and_cancels() {
    let poly = Poly::from_monos(vec![Mono::new(c(3), 2), Mono::new(c(-3), 2)]);
    assert!(poly.is_zero());
}

#[test]
fn lone_constant_term_collapses() {
    let poly = Poly::from_monos(vec![Mono::new(c(7), 0)]);
    assert!(poly.is_coeff());
    assert_eq!(poly, c(7));
}

#[test]
fn evaluation_round_trip() {
    let x = p([(c(1), 1)]);
    assert_eq!(x.at(5), c(5));
}

#[test]
fn clone_outlives_original() {
    let original = p([(p([(c(2), 1)]), 3)]);
    let copy = original.clone();
    assert_eq!(copy, original);
    drop(original);
    assert_eq!(format!("{copy}"), "((2,1),3)");
}

#[test]
fn rendering_follows_pair_grammar() {
    assert_eq!(format!("{}", c(-4)), "-4");
    let poly = p([(c(1), 0), (p([(c(2), 1)]), 3)]);
    assert_eq!(format!("{poly}"), "(1,0)+((2,1),3)");
}

// Strategies keep coefficients and exponents small so that intermediate
// products of three operands stay well inside i64.

fn small_coeff() -> impl Strategy<Value = Coeff> {
    -20i64..20
}

fn arb_poly() -> impl Strategy<Value = Poly> {
    let leaf = small_coeff().prop_map(Poly::from_coeff);
    leaf.prop_recursive(3, 24, 4, |inner| {
        proptest::collection::vec((inner, 0u32..5), 1..4).prop_map(|monos| {
            Poly::from_monos(
                monos
                    .into_iter()
                    .map(|(coeff, exp)| Mono::new(coeff, exp))
                    .collect(),
            )
        })
    })
}

fn nonzero_poly() -> impl Strategy<Value = Poly> {
    arb_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

proptest! {
    // Ring axioms

    #[test]
    fn add_commutative(a in arb_poly(), b in arb_poly()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn add_associative(a in arb_poly(), b in arb_poly(), c in arb_poly()) {
        prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
    }

    #[test]
    fn mul_commutative(a in arb_poly(), b in arb_poly()) {
        prop_assert_eq!(a.mul(&b), b.mul(&a));
    }

    #[test]
    fn mul_associative(a in arb_poly(), b in arb_poly(), c in arb_poly()) {
        prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
    }

    #[test]
    fn distributive(a in arb_poly(), b in arb_poly(), c in arb_poly()) {
        // a * (b + c) = a * b + a * c
        prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
    }

    #[test]
    fn add_identity(a in arb_poly()) {
        prop_assert_eq!(a.add(&Poly::zero()), a);
    }

    #[test]
    fn additive_inverse(a in arb_poly()) {
        prop_assert!(a.add(&a.neg()).is_zero());
        prop_assert!(a.sub(&a).is_zero());
    }

    #[test]
    fn mul_identity(a in arb_poly()) {
        prop_assert_eq!(a.mul(&Poly::one()), a);
    }

    #[test]
    fn mul_zero(a in arb_poly()) {
        prop_assert!(a.mul(&Poly::zero()).is_zero());
    }

    // Degree properties

    #[test]
    fn degree_adds_under_mul(a in nonzero_poly(), b in nonzero_poly()) {
        // the integers form a domain, so leading terms cannot cancel
        prop_assert_eq!(a.mul(&b).deg(), a.deg() + b.deg());
    }

    #[test]
    fn zero_degree_is_minus_one(a in arb_poly()) {
        prop_assert_eq!(a.mul(&Poly::zero()).deg(), -1);
    }

    #[test]
    fn top_exponent_matches_deg_by(a in nonzero_poly()) {
        let top = a.monos().last().map(|m| m.exp() as i32).unwrap_or(0);
        prop_assert_eq!(a.deg_by(0), top);
    }

    // Evaluation is a ring homomorphism

    #[test]
    fn evaluation_is_additive(a in arb_poly(), b in arb_poly(), x in -4i64..4) {
        prop_assert_eq!(a.add(&b).at(x), a.at(x).add(&b.at(x)));
    }

    #[test]
    fn evaluation_is_multiplicative(a in arb_poly(), b in arb_poly(), x in -4i64..4) {
        prop_assert_eq!(a.mul(&b).at(x), a.at(x).mul(&b.at(x)));
    }
}

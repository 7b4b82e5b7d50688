// Copyright 2026 the polynest developers
// released under MIT license

use crate::mono::Mono;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops;

/// Coefficient type. Arithmetic uses the built-in operators, so overflow
/// panics in debug builds and wraps in release builds.
pub type Coeff = i64;

/// Exponent type.
pub type Exp = u32;

/// A sparse polynomial with integer coefficients.
///
/// A polynomial is either a plain coefficient or a sum of monomials over its
/// outermost variable. Monomial coefficients are themselves polynomials over
/// the next nested variable, so a tree of `Poly` values represents a
/// multivariate polynomial.
///
/// Every reachable value is canonical: zero is always the coefficient `0`,
/// monomial lists are strictly ascending by exponent and contain no zero
/// terms, and a lone `x^0` term is collapsed into its coefficient. The
/// representation is private so that non-canonical values cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poly {
    repr: Repr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Repr {
    /// A constant with respect to all remaining variables.
    Coeff(Coeff),
    /// Monomials over the current variable, sorted ascending by exponent.
    Monos(Vec<Mono>),
}

impl Poly {
    /// Creates a constant polynomial.
    pub fn from_coeff(c: Coeff) -> Self {
        Self {
            repr: Repr::Coeff(c),
        }
    }

    /// Creates the zero polynomial.
    pub fn zero() -> Self {
        Self::from_coeff(0)
    }

    /// Creates the constant polynomial 1.
    pub fn one() -> Self {
        Self::from_coeff(1)
    }

    /// Returns true if this polynomial is a plain coefficient.
    pub fn is_coeff(&self) -> bool {
        matches!(self.repr, Repr::Coeff(_))
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        matches!(self.repr, Repr::Coeff(0))
    }

    /// Returns the value of a plain-coefficient polynomial.
    pub fn as_coeff(&self) -> Option<Coeff> {
        match self.repr {
            Repr::Coeff(c) => Some(c),
            Repr::Monos(_) => None,
        }
    }

    /// Returns the monomials over the current variable.
    /// Empty for a plain coefficient.
    pub fn monos(&self) -> &[Mono] {
        match &self.repr {
            Repr::Coeff(_) => &[],
            Repr::Monos(monos) => monos,
        }
    }

    /// Sums a collection of monomials into a polynomial.
    ///
    /// The input does not have to be sorted; monomials with equal exponents
    /// are combined by adding their coefficients, and terms whose coefficients
    /// cancel to zero are dropped.
    pub fn from_monos(mut monos: Vec<Mono>) -> Self {
        monos.sort_by_key(Mono::exp);

        // combine like terms
        let mut merged: Vec<Mono> = Vec::with_capacity(monos.len());
        for mono in monos {
            match merged.last_mut() {
                Some(last) if last.exp() == mono.exp() => last.absorb(mono),
                _ => merged.push(mono),
            }
        }
        merged.retain(|m| !m.is_zero());

        Self::from_canonical(merged)
    }

    /// Builds a polynomial from a list that is already sorted, deduplicated,
    /// and free of zero terms, applying the final collapse rules.
    fn from_canonical(mut monos: Vec<Mono>) -> Self {
        debug_assert!(
            monos.windows(2).all(|w| w[0].exp() < w[1].exp()),
            "{:?}",
            monos
        );
        debug_assert!(monos.iter().all(|m| !m.is_zero()));

        if monos.is_empty() {
            return Self::zero();
        }
        // a lone x^0 term is just its coefficient, which is already canonical
        if monos.len() == 1 && monos[0].exp() == 0 {
            return monos.pop().unwrap().into_coeff();
        }
        Self {
            repr: Repr::Monos(monos),
        }
    }
}

/// Algebra routines built on core functionality.
impl Poly {
    /// Adds two polynomials.
    pub fn add(&self, other: &Self) -> Self {
        match (&self.repr, &other.repr) {
            (Repr::Coeff(a), Repr::Coeff(b)) => Self::from_coeff(a + b),
            (Repr::Coeff(0), Repr::Monos(_)) => other.clone(),
            (Repr::Monos(_), Repr::Coeff(0)) => self.clone(),
            (Repr::Coeff(c), Repr::Monos(monos)) | (Repr::Monos(monos), Repr::Coeff(c)) => {
                // the scalar rides along as a degree-0 monomial
                let scalar = [Mono::new(Self::from_coeff(*c), 0)];
                Self::from_canonical(merge_add(&scalar, monos))
            }
            (Repr::Monos(a), Repr::Monos(b)) => Self::from_canonical(merge_add(a, b)),
        }
    }

    /// Returns the additive inverse.
    pub fn neg(&self) -> Self {
        match &self.repr {
            Repr::Coeff(c) => Self::from_coeff(-c),
            // negation changes no exponents and cancels no terms
            Repr::Monos(monos) => Self {
                repr: Repr::Monos(
                    monos
                        .iter()
                        .map(|m| Mono::new(m.coeff().neg(), m.exp()))
                        .collect(),
                ),
            },
        }
    }

    /// Subtracts `other` from `self`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook convolution).
    pub fn mul(&self, other: &Self) -> Self {
        match (&self.repr, &other.repr) {
            (Repr::Coeff(a), Repr::Coeff(b)) => Self::from_coeff(a * b),
            (Repr::Coeff(c), Repr::Monos(monos)) | (Repr::Monos(monos), Repr::Coeff(c)) => {
                Self::scaled(monos, *c)
            }
            (Repr::Monos(a), Repr::Monos(b)) => {
                let mut products = Vec::with_capacity(a.len() * b.len());
                for x in a {
                    for y in b {
                        products.push(Mono::new(x.coeff().mul(y.coeff()), x.exp() + y.exp()));
                    }
                }
                Self::from_monos(products)
            }
        }
    }

    /// Scales a monomial list by a plain coefficient.
    fn scaled(monos: &[Mono], c: Coeff) -> Self {
        if c == 0 {
            return Self::zero();
        }
        let scalar = Self::from_coeff(c);
        let scaled = monos
            .iter()
            .map(|m| Mono::new(m.coeff().mul(&scalar), m.exp()))
            .filter(|m| !m.is_zero())
            .collect();
        Self::from_canonical(scaled)
    }

    /// Total degree: the largest sum of exponents across all nesting levels,
    /// or -1 for the zero polynomial.
    pub fn deg(&self) -> i32 {
        match &self.repr {
            Repr::Coeff(0) => -1,
            Repr::Coeff(_) => 0,
            Repr::Monos(monos) => monos
                .iter()
                .map(|m| m.exp() as i32 + m.coeff().deg())
                .max()
                .unwrap(),
        }
    }

    /// Degree with respect to the variable at nesting depth `var_idx`
    /// (0 = this polynomial's own variable), or -1 for the zero polynomial.
    pub fn deg_by(&self, var_idx: usize) -> i32 {
        match &self.repr {
            Repr::Coeff(0) => -1,
            Repr::Coeff(_) => 0,
            Repr::Monos(monos) => {
                if var_idx == 0 {
                    // sorted ascending, so the last entry carries the top exponent
                    monos.last().unwrap().exp() as i32
                } else {
                    // a deeper variable can show up in any term's coefficient
                    monos
                        .iter()
                        .map(|m| m.coeff().deg_by(var_idx - 1))
                        .max()
                        .unwrap()
                }
            }
        }
    }

    /// Evaluates the outermost variable at `x`.
    ///
    /// The result is a polynomial over the remaining variables, with every
    /// nesting depth shifted down by one. An exponent of 0 contributes the
    /// multiplicative identity even when `x` is 0.
    pub fn at(&self, x: Coeff) -> Self {
        let monos = match &self.repr {
            Repr::Coeff(_) => return self.clone(),
            Repr::Monos(monos) => monos,
        };
        let mut acc = Self::zero();
        for mono in monos {
            let weight = Self::from_coeff(x.pow(mono.exp()));
            acc = acc.add(&weight.mul(mono.coeff()));
        }
        acc
    }
}

/// Merges two exponent-sorted monomial lists, adding the coefficients of
/// matching exponents and dropping terms that cancel.
fn merge_add(a: &[Mono], b: &[Mono]) -> Vec<Mono> {
    let mut a_iter = a.iter();
    let mut b_iter = b.iter();
    let mut a_next = a_iter.next();
    let mut b_next = b_iter.next();
    let mut out = Vec::with_capacity(a.len() + b.len());
    while a_next.is_some() || b_next.is_some() {
        match (a_next, b_next) {
            (Some(x), None) => {
                out.push(x.clone());
                a_next = a_iter.next();
            }
            (None, Some(y)) => {
                out.push(y.clone());
                b_next = b_iter.next();
            }
            (Some(x), Some(y)) => match x.exp().cmp(&y.exp()) {
                Ordering::Less => {
                    out.push(x.clone());
                    a_next = a_iter.next();
                }
                Ordering::Greater => {
                    out.push(y.clone());
                    b_next = b_iter.next();
                }
                Ordering::Equal => {
                    let sum = x.coeff().add(y.coeff());
                    if !sum.is_zero() {
                        out.push(Mono::new(sum, x.exp()));
                    }
                    a_next = a_iter.next();
                    b_next = b_iter.next();
                }
            },
            (None, None) => unreachable!("loop should have terminated"),
        }
    }
    debug_assert!(out.windows(2).all(|w| w[0].exp() < w[1].exp()));
    out
}

impl From<Coeff> for Poly {
    fn from(c: Coeff) -> Self {
        Self::from_coeff(c)
    }
}

impl FromIterator<Mono> for Poly {
    fn from_iter<T: IntoIterator<Item = Mono>>(iter: T) -> Self {
        Self::from_monos(iter.into_iter().collect())
    }
}

impl ops::Add for &Poly {
    type Output = Poly;
    fn add(self, rhs: Self) -> Poly {
        Poly::add(self, rhs)
    }
}

impl ops::Add for Poly {
    type Output = Poly;
    fn add(self, rhs: Self) -> Poly {
        Poly::add(&self, &rhs)
    }
}

impl ops::Sub for &Poly {
    type Output = Poly;
    fn sub(self, rhs: Self) -> Poly {
        Poly::sub(self, rhs)
    }
}

impl ops::Sub for Poly {
    type Output = Poly;
    fn sub(self, rhs: Self) -> Poly {
        Poly::sub(&self, &rhs)
    }
}

impl ops::Mul for &Poly {
    type Output = Poly;
    fn mul(self, rhs: Self) -> Poly {
        Poly::mul(self, rhs)
    }
}

impl ops::Mul for Poly {
    type Output = Poly;
    fn mul(self, rhs: Self) -> Poly {
        Poly::mul(&self, &rhs)
    }
}

impl ops::Neg for &Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        Poly::neg(self)
    }
}

impl ops::Neg for Poly {
    type Output = Poly;
    fn neg(self) -> Poly {
        Poly::neg(&self)
    }
}

impl Zero for Poly {
    fn zero() -> Self {
        Poly::zero()
    }

    fn is_zero(&self) -> bool {
        Poly::is_zero(self)
    }
}

impl One for Poly {
    fn one() -> Self {
        Poly::one()
    }
}

impl Display for Poly {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.repr {
            Repr::Coeff(c) => write!(f, "{c}"),
            Repr::Monos(monos) => {
                for (ii, mono) in monos.iter().enumerate() {
                    if ii > 0 {
                        write!(f, "+")?;
                    }
                    write!(f, "({},{})", mono.coeff(), mono.exp())?;
                }
                Ok(())
            }
        }
    }
}

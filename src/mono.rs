// Copyright 2026 the polynest developers
// released under MIT license

use crate::poly::{Exp, Poly};

/// A single term `p * x^e`.
/// The coefficient `p` is itself a polynomial, taken over the next nested
/// variable rather than over `x`. A `Mono` only ever lives inside the
/// monomial list of a [`Poly`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mono {
    coeff: Poly,
    exp: Exp,
}

impl Mono {
    /// Creates the monomial `coeff * x^exp`, taking ownership of the
    /// coefficient polynomial.
    pub fn new(coeff: Poly, exp: Exp) -> Self {
        Self { coeff, exp }
    }

    /// The exponent of the current variable.
    pub fn exp(&self) -> Exp {
        self.exp
    }

    /// The coefficient polynomial.
    pub fn coeff(&self) -> &Poly {
        &self.coeff
    }

    /// True if the coefficient is identically zero, i.e. the term vanishes.
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    /// Folds an equal-exponent monomial into this one by adding coefficients.
    pub(crate) fn absorb(&mut self, other: Mono) {
        debug_assert_eq!(self.exp, other.exp);
        self.coeff = self.coeff.add(&other.coeff);
    }

    /// Consumes the monomial, returning its coefficient polynomial.
    pub(crate) fn into_coeff(self) -> Poly {
        self.coeff
    }
}

// Copyright 2026 the polynest developers
// released under MIT license

//! Sparse multivariate polynomials with exact integer coefficients.
//!
//! Polynomials are stored recursively: a sum of monomials over the outermost
//! variable, whose coefficients are themselves polynomials over the next
//! nested variable.

mod mono;
mod poly;

pub use mono::Mono;
pub use poly::{Coeff, Exp, Poly};

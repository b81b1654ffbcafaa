//! Roots of real and complex polynomials, with their multiplicities.
//!
//! Polynomials of degree up to 4 are solved with closed form formulas
//! (linear, quadratic, Cardano's cubic and Ferrari's quartic), higher degrees
//! with the Durand–Kerner–Weierstrass simultaneous iteration. The roots come
//! back as a [`RootMultiset`], an unordered collection that keeps track of
//! how many times each root occurs.
//!
//! ```
//! use polyroots::{complex, multiset, roots};
//!
//! // x³ + 3x² + 3x + 1 = (x + 1)³
//! let r = roots(&[1.0, 3.0, 3.0, 1.0], true)?;
//! assert_eq!(r, multiset![complex!(-1.0), complex!(-1.0), complex!(-1.0)]);
//! # Ok::<(), polyroots::Error>(())
//! ```
//!
//! Coefficients are always given highest degree first. Coefficients that are
//! zero within machine epsilon are handled before solving: leading zeros
//! lower the degree and a zero constant term is a root at the origin.
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[macro_use]
mod macros;

mod complex;
mod error;
mod multiset;
mod poly;
mod scalar;
mod util;

pub use complex::{Complex, Complex32, Complex64};
pub use error::{Error, Result};
pub use multiset::{IntoIter, Iter, RootMultiset};
pub use poly::{
    roots::{
        complex_roots, roots, Method, RootsBuilder, RootsReport, DEFAULT_MAX_ITER,
        MAX_CLOSED_FORM_DEGREE,
    },
    Polynomial, Polynomial32, Polynomial64,
};
pub use scalar::RealScalar;

pub use num;

#[doc(hidden)]
pub use util::__testing;

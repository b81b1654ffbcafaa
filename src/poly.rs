use std::fmt::{self, Display};

use itertools::Itertools;
use num::{One, Zero};

use crate::{
    util::{complex::complex_fmt, doc_macros::errors_invalid_polynomial},
    Complex, Error, RealScalar, Result,
};

pub(crate) mod roots;

/// A univariate polynomial with complex coefficients, stored highest degree
/// first: `[c₀, c₁, …, c_d]` is `c₀·xᵈ + c₁·xᵈ⁻¹ + … + c_d`.
///
/// A polynomial always has at least one coefficient that is not (almost)
/// zero. Leading zeros are allowed, they are factored out when solving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<R: RealScalar>(pub(crate) Vec<Complex<R>>);

pub type Polynomial32 = Polynomial<f32>;
pub type Polynomial64 = Polynomial<f64>;

impl<R: RealScalar> Polynomial<R> {
    /// Create a polynomial from real coefficients, highest degree first.
    ///
    /// # Errors
    #[doc = errors_invalid_polynomial!()]
    ///
    /// # Examples
    /// ```
    /// use polyroots::Polynomial64;
    ///
    /// let p = Polynomial64::new(&[2.0, 0.0, -1.0])?;
    /// assert_eq!(p.degree(), 2);
    /// assert!(Polynomial64::new(&[]).is_err());
    /// assert!(Polynomial64::new(&[0.0, 0.0]).is_err());
    /// # Ok::<(), polyroots::Error>(())
    /// ```
    pub fn new(coeffs: &[R]) -> Result<Self> {
        Self::from_vec(coeffs.iter().copied().map(Complex::from_real).collect_vec())
    }

    /// Create a polynomial from complex coefficients, highest degree first.
    ///
    /// # Errors
    #[doc = errors_invalid_polynomial!()]
    pub fn from_complex(coeffs: &[Complex<R>]) -> Result<Self> {
        Self::from_vec(coeffs.to_vec())
    }

    fn from_vec(coeffs: Vec<Complex<R>>) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(Error::InvalidPolynomial {
                reason: "no coefficients",
            });
        }
        if coeffs.iter().all(|c| c.is_almost_zero()) {
            return Err(Error::InvalidPolynomial {
                reason: "the zero polynomial has no defined roots",
            });
        }
        Ok(Self(coeffs))
    }

    /// Monic polynomial with the given roots, `Π (x - rᵢ)`. No roots gives
    /// the constant `1`.
    ///
    /// ```
    /// use polyroots::{complex, Polynomial64};
    ///
    /// let p = Polynomial64::from_roots(&[complex!(1.0), complex!(2.0)]);
    /// assert_eq!(p, Polynomial64::new(&[1.0, -3.0, 2.0])?);
    /// # Ok::<(), polyroots::Error>(())
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[Complex<R>]) -> Self {
        let mut coeffs = Vec::with_capacity(roots.len() + 1);
        coeffs.push(Complex::one());
        for &r in roots {
            coeffs.push(Complex::zero());
            for i in (1..coeffs.len()).rev() {
                let prev = coeffs[i - 1];
                coeffs[i] -= r * prev;
            }
        }
        Self(coeffs)
    }

    /// Number of coefficients minus one. Leading zeros are counted.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.0.len() - 1
    }

    /// Coefficients, highest degree first.
    #[must_use]
    pub fn coeffs(&self) -> &[Complex<R>] {
        &self.0
    }

    /// Evaluate at `x` with Horner's method.
    ///
    /// ```
    /// use polyroots::{complex, poly};
    ///
    /// let p = poly![1.0, 0.0, 1.0]?;
    /// assert_eq!(p.eval(complex!(0.0, 1.0)), complex!(0.0, 0.0));
    /// assert_eq!(p.eval(complex!(2.0)), complex!(5.0));
    /// # Ok::<(), polyroots::Error>(())
    /// ```
    pub fn eval(&self, x: Complex<R>) -> Complex<R> {
        eval(&self.0, x)
    }

    /// Multiply every coefficient by `factor`. The roots do not change unless
    /// `factor` is zero.
    #[must_use]
    pub fn scaled(&self, factor: Complex<R>) -> Self {
        Self(self.0.iter().map(|&c| c * factor).collect())
    }
}

pub(crate) fn eval<R: RealScalar>(coeffs: &[Complex<R>], x: Complex<R>) -> Complex<R> {
    coeffs
        .iter()
        .fold(Complex::zero(), |acc, &c| acc * x + c)
}

impl<R: RealScalar> Display for Polynomial<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let terms = self
            .0
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| match degree - i {
                0 => complex_fmt(*c),
                1 => format!("{}x", complex_fmt(*c)),
                n => format!("{}x^{n}", complex_fmt(*c)),
            })
            .join(" + ");
        write!(f, "{terms}")
    }
}

use std::iter;

use num::Zero;

use crate::{
    util::doc_macros::{
        errors_invalid_polynomial, errors_unsupported_degree, panic_quartic, panic_r_from_f64,
    },
    Complex, Error, Polynomial, RealScalar, Result, RootMultiset,
};

mod closed_form;
mod durand_kerner;

/// Highest degree with a closed form solution.
pub const MAX_CLOSED_FORM_DEGREE: usize = 4;

/// Default iteration cap of the Durand–Kerner method.
pub const DEFAULT_MAX_ITER: usize = 1000;

/// How the roots were computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Linear, quadratic, cubic or quartic formula. Also reported when the
    /// polynomial reduced to a constant.
    ClosedForm,

    /// Durand–Kerner–Weierstrass simultaneous iteration.
    DurandKerner,
}

/// The roots of a polynomial together with some information on how they were
/// found.
#[derive(Debug, Clone)]
pub struct RootsReport<R: RealScalar> {
    /// Every root, counted with its multiplicity.
    pub roots: RootMultiset<Complex<R>>,
    /// Whether a closed form or the iterative method produced the roots.
    pub method: Method,
    /// Iterations performed by the iterative method, zero for closed forms.
    pub iterations: usize,
    /// False iff the iteration cap was reached before the estimates settled.
    /// The roots are then the last estimate.
    pub converged: bool,
}

/// Configures a root search, obtained with [`Polynomial::solver`].
///
/// # Examples
/// ```
/// use polyroots::{poly, Method};
///
/// let p = poly![1.0, 0.0, -1.0]?;
/// let report = p.solver().prefer_closed_form(false).max_iter(200).finish()?;
/// assert_eq!(report.method, Method::DurandKerner);
/// assert_eq!(report.roots.len(), 2);
/// # Ok::<(), polyroots::Error>(())
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct RootsBuilder<'a, R: RealScalar> {
    poly: &'a Polynomial<R>,
    prefer_closed_form: bool,
    allow_iterative: bool,
    epsilon: R,
    max_iter: usize,
}

impl<'a, R: RealScalar> RootsBuilder<'a, R> {
    fn new(poly: &'a Polynomial<R>) -> Self {
        Self {
            poly,
            prefer_closed_form: true,
            allow_iterative: true,
            epsilon: R::epsilon(),
            max_iter: DEFAULT_MAX_ITER,
        }
    }

    /// Use the closed form solutions up to degree 4. Defaults to `true`; when
    /// `false` every degree goes through the iterative method.
    pub fn prefer_closed_form(mut self, prefer: bool) -> Self {
        self.prefer_closed_form = prefer;
        self
    }

    /// Whether the iterative method may be used at all. Defaults to `true`.
    /// When `false`, polynomials of degree higher than 4 are rejected and
    /// [`RootsBuilder::prefer_closed_form`] is ignored.
    pub fn allow_iterative(mut self, allow: bool) -> Self {
        self.allow_iterative = allow;
        self
    }

    /// The iterative method stops once no estimate moves by more than
    /// `epsilon` in one step. Defaults to the machine epsilon of `R`.
    pub fn epsilon(mut self, epsilon: R) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Iteration cap of the iterative method. Defaults to 1000.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Find all roots.
    ///
    /// Zero coefficients in leading position are dropped and zero constant
    /// terms are factored out as roots at the origin before choosing a method,
    /// so the degree that matters is the degree of what remains.
    ///
    /// # Errors
    #[doc = errors_unsupported_degree!()]
    ///
    /// # Panics
    #[doc = panic_quartic!()]
    #[doc = panic_r_from_f64!()]
    pub fn finish(self) -> Result<RootsReport<R>> {
        let (reduced, _) = reduce(&self.poly.0);
        let degree = reduced.len() - 1;
        if degree > MAX_CLOSED_FORM_DEGREE && !self.allow_iterative {
            return Err(Error::UnsupportedDegree { degree });
        }
        Ok(self.run())
    }

    /// Never fails when the iterative method is allowed.
    fn run(self) -> RootsReport<R> {
        let (reduced, zeros) = reduce(&self.poly.0);
        let degree = reduced.len() - 1;
        let zero_roots = iter::repeat(Complex::zero()).take(zeros);

        let use_closed_form = degree <= MAX_CLOSED_FORM_DEGREE
            && (self.prefer_closed_form || !self.allow_iterative);
        if use_closed_form || degree == 0 {
            log::debug!("degree {degree}: closed form");
            let mut roots = closed_form::solve(reduced);
            roots.extend(zero_roots);
            return RootsReport {
                roots,
                method: Method::ClosedForm,
                iterations: 0,
                converged: true,
            };
        }

        log::debug!("degree {degree}: Durand-Kerner");
        let (estimates, iterations, converged) =
            durand_kerner::durand_kerner(reduced, self.epsilon, self.max_iter);
        let mut roots: RootMultiset<_> = estimates.into_iter().collect();
        roots.extend(zero_roots);
        RootsReport {
            roots,
            method: Method::DurandKerner,
            iterations,
            converged,
        }
    }
}

impl<R: RealScalar> Polynomial<R> {
    /// All roots, counted with multiplicity.
    ///
    /// With `prefer_closed_form` the roots of polynomials of degree 4 or less
    /// come from explicit formulas, otherwise (and always for higher degrees)
    /// they are approximated with the Durand–Kerner method with its default
    /// settings. Use [`Polynomial::solver`] for more control.
    ///
    /// # Panics
    #[doc = panic_quartic!()]
    #[doc = panic_r_from_f64!()]
    ///
    /// # Examples
    /// ```
    /// use polyroots::{complex, multiset, poly};
    ///
    /// let roots = poly![1.0, 2.0, 1.0]?.roots(true);
    /// assert_eq!(roots, multiset![complex!(-1.0), complex!(-1.0)]);
    ///
    /// let roots = poly![1.0, 0.0, 1.0]?.roots(true);
    /// assert_eq!(roots, multiset![complex!(0.0, -1.0), complex!(0.0, 1.0)]);
    /// # Ok::<(), polyroots::Error>(())
    /// ```
    #[must_use]
    pub fn roots(&self, prefer_closed_form: bool) -> RootMultiset<Complex<R>> {
        self.solver()
            .prefer_closed_form(prefer_closed_form)
            .run()
            .roots
    }

    /// A configurable root search, see [`RootsBuilder`].
    pub fn solver(&self) -> RootsBuilder<'_, R> {
        RootsBuilder::new(self)
    }
}

/// Roots of the polynomial with the given real coefficients, highest degree
/// first.
///
/// # Errors
#[doc = errors_invalid_polynomial!()]
///
/// # Panics
#[doc = panic_quartic!()]
#[doc = panic_r_from_f64!()]
///
/// # Examples
/// ```
/// use polyroots::{complex, multiset, roots};
///
/// assert_eq!(roots(&[1.0, 1.0], true)?, multiset![complex!(-1.0)]);
/// assert!(roots(&[0.0, 1.0], true)?.is_empty());
/// # Ok::<(), polyroots::Error>(())
/// ```
pub fn roots<R: RealScalar>(
    coeffs: &[R],
    prefer_closed_form: bool,
) -> Result<RootMultiset<Complex<R>>> {
    Ok(Polynomial::new(coeffs)?.roots(prefer_closed_form))
}

/// Roots of the polynomial with the given complex coefficients, highest
/// degree first.
///
/// # Errors
#[doc = errors_invalid_polynomial!()]
///
/// # Panics
#[doc = panic_quartic!()]
#[doc = panic_r_from_f64!()]
pub fn complex_roots<R: RealScalar>(
    coeffs: &[Complex<R>],
    prefer_closed_form: bool,
) -> Result<RootMultiset<Complex<R>>> {
    Ok(Polynomial::from_complex(coeffs)?.roots(prefer_closed_form))
}

/// Strip almost zero leading coefficients and almost zero constant terms.
///
/// Returns what is left and how many roots at the origin were factored out.
/// The input must contain at least one coefficient that is not almost zero.
pub(crate) fn reduce<R: RealScalar>(coeffs: &[Complex<R>]) -> (&[Complex<R>], usize) {
    match coeffs {
        [lead, rest @ ..] if !rest.is_empty() && lead.is_almost_zero() => {
            log::debug!("dropping leading coefficient {lead}");
            reduce(rest)
        }
        [init @ .., last] if !init.is_empty() && last.is_almost_zero() => {
            log::debug!("factoring out a root at zero");
            let (reduced, zeros) = reduce(init);
            (reduced, zeros + 1)
        }
        _ => (coeffs, 0),
    }
}

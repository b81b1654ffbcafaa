//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;

use crate::{Complex64, Polynomial64, RootMultiset};

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.state.f64())
    }
}

/// Uniformly distributed real values in `[min, max)`, as complex numbers.
pub struct RandStreamR64 {
    real_stream: RandStreamF64,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            real_stream: RandStreamF64::new(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = (self.real_stream.next()?).mul_add(self.max - self.min, self.min);
        Some(Complex64::new(re, 0.0))
    }
}

/// Uniformly distributed complex values in a rectangle.
pub struct RandStreamC64Cartesian {
    real_stream: RandStreamF64,
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
}

impl RandStreamC64Cartesian {
    #[must_use]
    pub fn new(seed: u64, min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Self {
        assert!(
            min_re <= max_re && min_im <= max_im,
            "minimum should be smaller or equal to maximum"
        );
        Self {
            real_stream: RandStreamF64::new(seed),
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }
}

impl Iterator for RandStreamC64Cartesian {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = (self.real_stream.next()?).mul_add(self.max_re - self.min_re, self.min_re);
        let im = (self.real_stream.next()?).mul_add(self.max_im - self.min_im, self.min_im);
        Some(Complex64::new(re, im))
    }
}

/// Generate one test case where the roots are known and can be compared
///
/// # Panics
/// If `scale_stream` runs out.
pub fn test_case_roots(
    roots_stream: impl Iterator<Item = Complex64>,
    mut scale_stream: impl Iterator<Item = Complex64>,
    degree: usize,
) -> (Polynomial64, Vec<Complex64>) {
    let roots = roots_stream.take(degree).collect_vec();
    let poly = Polynomial64::from_roots(&roots)
        .scaled(scale_stream.next().expect("rng stream should be infinite"));
    (poly, roots)
}

/// Generate one test case with real coefficients: the roots come in conjugate
/// pairs, plus one real root (the real part of the next sample) if `degree`
/// is odd.
///
/// # Panics
/// If `roots_stream` or `scale_stream` run out.
pub fn test_case_conj_roots(
    mut roots_stream: impl Iterator<Item = Complex64>,
    mut scale_stream: impl Iterator<Item = Complex64>,
    degree: usize,
) -> (Polynomial64, Vec<Complex64>) {
    let mut roots = roots_stream
        .by_ref()
        .take(degree / 2)
        .flat_map(|z| [z, z.conj()])
        .collect_vec();
    if degree % 2 == 1 {
        let z = roots_stream.next().expect("rng stream should be infinite");
        roots.push(Complex64::new(z.re, 0.0));
    }
    let poly = Polynomial64::from_roots(&roots)
        .scaled(scale_stream.next().expect("rng stream should be infinite"));
    (poly, roots)
}

/// Check that all roots have been found, matching each expected root with the
/// closest remaining found root.
#[must_use]
pub fn check_roots(found: &RootMultiset<Complex64>, expected: &[Complex64], tol: f64) -> bool {
    let mut found = found.iter().copied().collect_vec();
    if found.len() != expected.len() {
        return false;
    }

    for r1 in expected {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in found.iter().enumerate() {
            let d = (*r1 - *r2).abs();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        found.remove(best_idx);
    }
    true
}

/// Largest `|p(z)|` over the given points.
#[must_use]
pub fn max_residual(poly: &Polynomial64, points: &RootMultiset<Complex64>) -> f64 {
    points
        .iter()
        .map(|&z| poly.eval(z).abs())
        .fold(0.0, f64::max)
}

use itertools::Itertools;
use num::One;

use crate::{poly::eval, Complex, RealScalar};

/// Find all roots at once with the Durand–Kerner–Weierstrass method.
///
/// Every estimate is updated in lockstep from the previous iterate,
/// `zᵢ ← zᵢ - p(zᵢ) / Πⱼ≠ᵢ (zᵢ - zⱼ)`, until no estimate moves by more than
/// `epsilon` or `max_iter` iterations have been performed.
///
/// Returns the estimates, the number of iterations and whether the estimates
/// settled. Hitting the cap is not an error, the last estimate is returned.
///
/// The leading coefficient must not be zero and the degree must be at least
/// one.
pub(super) fn durand_kerner<R: RealScalar>(
    coeffs: &[Complex<R>],
    epsilon: R,
    max_iter: usize,
) -> (Vec<Complex<R>>, usize, bool) {
    debug_assert!(coeffs.len() >= 2);
    debug_assert!(!coeffs[0].is_almost_zero());

    let lead = coeffs[0];
    let monic = if lead.is_one() {
        coeffs.to_vec()
    } else {
        coeffs.iter().map(|&c| c / lead).collect_vec()
    };

    let mut points = initial_guesses(monic.len() - 1);
    let mut next = points.clone();

    for i in 1..=max_iter {
        for (k, z) in next.iter_mut().enumerate() {
            let zk = points[k];
            let denom: Complex<R> = points
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != k)
                .map(|(_, &zj)| zk - zj)
                .product();
            *z = zk - eval(&monic, zk) / denom;
        }
        log::trace!("{next:?}");

        let settled = points
            .iter()
            .zip(&next)
            .all(|(&old, &new)| (old - new).abs() <= epsilon);
        std::mem::swap(&mut points, &mut next);
        if settled {
            log::debug!("converged after {i} iterations");
            return (points, i, true);
        }
    }

    log::warn!("did not converge within {max_iter} iterations, returning last estimate");
    (points, max_iter, false)
}

/// Powers of `0.4 + 0.9i`, which is neither real nor a root of unity, so the
/// seeds are distinct and not symmetric about the real axis.
fn initial_guesses<R: RealScalar>(n: usize) -> Vec<Complex<R>> {
    let seed = Complex::new(
        R::from_f64(0.4).expect("overflow"),
        R::from_f64(0.9).expect("overflow"),
    );
    let mut guesses = Vec::with_capacity(n);
    let mut z = Complex::one();
    for _ in 0..n {
        guesses.push(z);
        z *= seed;
    }
    guesses
}

#[cfg(test)]
mod test {
    use super::{durand_kerner, initial_guesses};
    use crate::{Complex32, Complex64};

    fn c(re: f64) -> Complex64 {
        Complex64::new(re, 0.0)
    }

    #[test]
    fn seeds() {
        let g = initial_guesses::<f64>(3);
        assert_eq!(g[0], c(1.0));
        assert_eq!(g[1], Complex64::new(0.4, 0.9));
        assert!((g[2] - Complex64::new(0.16 - 0.81, 0.72)).abs() < 1E-15);
    }

    #[test]
    fn seeds_f32() {
        let g = initial_guesses::<f32>(2);
        assert_eq!(g[0], Complex32::new(1.0, 0.0));
        assert_eq!(g[1], Complex32::new(0.4, 0.9));
    }

    #[test]
    fn linear_settles_on_second_step() {
        let (roots, iterations, converged) = durand_kerner(&[c(1.0), c(1.0)], f64::EPSILON, 1000);
        assert_eq!(roots, vec![c(-1.0)]);
        assert_eq!(iterations, 2);
        assert!(converged);
    }

    #[test]
    fn not_monic() {
        // 2(x - 1)(x - 2)(x + 3)
        let coeffs = [c(2.0), c(0.0), c(-14.0), c(12.0)];
        let (roots, _, _) = durand_kerner(&coeffs, 1E-12, 1000);
        let mut re = roots.iter().map(|z| z.re).collect::<Vec<_>>();
        re.sort_by(f64::total_cmp);
        for (r, e) in re.iter().zip([-3.0, 1.0, 2.0]) {
            assert!((r - e).abs() < 1E-9);
        }
        for z in &roots {
            assert!(z.im.abs() < 1E-9);
        }
    }

    #[test]
    fn zero_iterations() {
        let (roots, iterations, converged) = durand_kerner(&[c(1.0), c(0.0), c(1.0)], 1E-12, 0);
        assert_eq!(roots, initial_guesses::<f64>(2));
        assert_eq!(iterations, 0);
        assert!(!converged);
    }
}

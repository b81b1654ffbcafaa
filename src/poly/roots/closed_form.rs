//! Explicit formulas for polynomials of degree 4 or less.
//!
//! Coefficients are highest degree first. Lower degree sub-problems (the
//! resolvent cubic, the biquadratic cases) go back through [`solve`], so they
//! get the same zero-coefficient reduction as the top level.

use std::cmp::Ordering;

use num::{One, Zero};

use super::reduce;
use crate::{Complex, RealScalar, RootMultiset};

/// Dispatch on degree after stripping zero coefficients.
///
/// # Panics
/// If the degree is higher than 4.
pub(super) fn solve<R: RealScalar>(coeffs: &[Complex<R>]) -> RootMultiset<Complex<R>> {
    let (coeffs, zeros) = reduce(coeffs);
    let mut roots = match *coeffs {
        [_] => RootMultiset::new(),
        [a, b] => linear(a, b),
        [a, b, c] => quadratic(a, b, c),
        [a, b, c, d] => cubic(a, b, c, d),
        [a, b, c, d, e] => quartic(a, b, c, d, e),
        _ => unreachable!("no closed form for degree {}", coeffs.len() - 1),
    };
    roots.insert_many(Complex::zero(), zeros);
    roots
}

/// Divide through by the leading coefficient, unless it is already one.
fn monic<R: RealScalar, const N: usize>(
    lead: Complex<R>,
    rest: [Complex<R>; N],
) -> [Complex<R>; N] {
    if lead.is_one() {
        rest
    } else {
        rest.map(|x| x / lead)
    }
}

fn linear<R: RealScalar>(a: Complex<R>, b: Complex<R>) -> RootMultiset<Complex<R>> {
    let [b] = monic(a, [b]);
    multiset![-b]
}

/// The square root of the discriminant gets the sign that avoids cancellation
/// against `b`, and the second root comes from the product of the roots.
fn quadratic<R: RealScalar>(
    a: Complex<R>,
    b: Complex<R>,
    c: Complex<R>,
) -> RootMultiset<Complex<R>> {
    let two = R::from_f64(2.0).expect("overflow");
    let four = R::from_f64(4.0).expect("overflow");

    let discriminant = b * b - a * c * four;
    let mut d_sqrt = discriminant.sqrt();
    // for real b: flip when b is negative
    if (b.conj() * d_sqrt).re < R::zero() {
        d_sqrt = -d_sqrt;
    }
    let x1 = -(b + d_sqrt) / (a * two);
    let x2 = c / (a * x1);
    multiset![x1, x2]
}

fn cubic<R: RealScalar>(
    a: Complex<R>,
    b: Complex<R>,
    c: Complex<R>,
    d: Complex<R>,
) -> RootMultiset<Complex<R>> {
    let half = R::from_f64(0.5).expect("overflow");
    let two = R::from_f64(2.0).expect("overflow");
    let three = R::from_f64(3.0).expect("overflow");
    let four = R::from_f64(4.0).expect("overflow");
    let nine = R::from_f64(9.0).expect("overflow");
    let twenty_seven = R::from_f64(27.0).expect("overflow");

    let [b, c, d] = monic(a, [b, c, d]);

    let b2 = b * b;
    let b3 = b2 * b;
    let d0 = b2 - c * three;
    let d1 = b3 * two - b * c * nine + d * twenty_seven;
    // -27 times the discriminant
    let disc = d1 * d1 - d0 * d0 * d0 * four;

    match (d0.is_almost_zero(), disc.is_almost_zero()) {
        (true, true) => {
            log::debug!("cubic: triple root");
            let x = -b / three;
            multiset![x, x, x]
        }
        (false, true) => {
            log::debug!("cubic: double root");
            let x12 = (d * nine - b * c) / (d0 * two);
            let x3 = (b * c * four - d * nine - b3) / d0;
            multiset![x12, x12, x3]
        }
        _ => {
            let s = disc.sqrt();
            // the larger candidate is at least |s| > 0
            let (plus, minus) = (d1 + s, d1 - s);
            let big = if plus.abs() >= minus.abs() { plus } else { minus };
            let cc = (big * half).cbrt();

            let omega = Complex::new(-half, three.sqrt() * half);
            [cc, omega * cc, omega.conj() * cc]
                .into_iter()
                .map(|u| -(b + u + d0 / u) / three)
                .collect()
        }
    }
}

/// Ferrari's method on the depressed quartic, with the biquadratic shortcuts.
fn quartic<R: RealScalar>(
    lead: Complex<R>,
    a: Complex<R>,
    b: Complex<R>,
    c: Complex<R>,
    d: Complex<R>,
) -> RootMultiset<Complex<R>> {
    let half = R::from_f64(0.5).expect("overflow");
    let two = R::from_f64(2.0).expect("overflow");
    let three = R::from_f64(3.0).expect("overflow");
    let four = R::from_f64(4.0).expect("overflow");
    let eight = R::from_f64(8.0).expect("overflow");
    let sixteen = R::from_f64(16.0).expect("overflow");
    let sixty_four = R::from_f64(64.0).expect("overflow");
    let two_fifty_six = R::from_f64(256.0).expect("overflow");

    let [a, b, c, d] = monic(lead, [a, b, c, d]);
    let one = Complex::one();

    if a.is_almost_zero() && c.is_almost_zero() {
        log::debug!("quartic: biquadratic");
        return solve(&[one, b, d]).flat_map(|square| {
            let x = square.sqrt();
            [x, -x]
        });
    }

    // x = u - a/4 gives u⁴ + pu² + qu + r
    let a2 = a * a;
    let a_on_4 = a / four;
    let p = b - a2 * three / eight;
    let q = (a2 * a - a * b * four) / eight + c;
    let r = (-(a2 * a2 * three) - a * c * sixty_four + a2 * b * sixteen) / two_fifty_six + d;

    if q.is_almost_zero() {
        log::debug!("quartic: depressed quartic is biquadratic");
        return solve(&[one, p, r]).flat_map(|square| {
            let u = square.sqrt();
            [u - a_on_4, -u - a_on_4]
        });
    }

    let p2 = p * p;
    let resolvent = [
        one,
        p * R::from_f64(2.5).expect("overflow"),
        p2 * two - r,
        p * (p2 - r) * half - q * q / eight,
    ];
    // any root works, the one furthest from -p/2 keeps q / w well conditioned
    let y = solve(&resolvent)
        .iter()
        .copied()
        .max_by(|y1, y2| {
            let m1 = (p + *y1 * two).abs();
            let m2 = (p + *y2 * two).abs();
            m1.partial_cmp(&m2).unwrap_or(Ordering::Equal)
        })
        .expect("a cubic always has three roots");
    let y2 = y * two;
    let w = (p + y2).sqrt();
    assert!(
        !w.is_zero(),
        "p + 2y vanished for a depressed quartic that is not biquadratic"
    );

    let p3_plus_2y = p * three + y2;
    let fraction = q * two / w;
    let s_plus = (-(p3_plus_2y + fraction)).sqrt();
    let s_minus = (-(p3_plus_2y - fraction)).sqrt();
    [
        (w + s_plus) * half,
        (-w + s_minus) * half,
        (w - s_plus) * half,
        (-w - s_minus) * half,
    ]
    .into_iter()
    .map(|u| u - a_on_4)
    .collect()
}

#[cfg(test)]
mod test {
    use super::solve;
    use crate::{Complex32, Complex64, RootMultiset};

    fn solve_real(coeffs: &[f64]) -> RootMultiset<Complex64> {
        let coeffs: Vec<Complex64> = coeffs.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        solve(&coeffs)
    }

    fn minus_one() -> Complex64 {
        Complex64::new(-1.0, 0.0)
    }

    fn i() -> Complex64 {
        Complex64::new(0.0, 1.0)
    }

    #[test]
    fn linear() {
        assert_eq!(solve_real(&[1.0, 1.0]), multiset![minus_one()]);
        assert_eq!(solve_real(&[-10.0, 50.0]), multiset![Complex64::new(5.0, 0.0)]);
    }

    #[test]
    fn quadratic_exact_cases() {
        assert_eq!(solve_real(&[1.0, 2.0, 1.0]), multiset![minus_one(), minus_one()]);
        assert_eq!(solve_real(&[1.0, 0.0, 1.0]), multiset![-i(), i()]);
    }

    #[test]
    fn quadratic_avoids_cancellation() {
        // roots 1e8 and 1e-8, the naive formula loses the small one entirely
        let roots = solve_real(&[1.0, -1E8, 1.0]).to_sorted_vec();
        assert!((roots[0].re - 1E-8).abs() < 1E-22);
        assert!((roots[1].re - 1E8).abs() < 1E-6);
    }

    #[test]
    fn quadratic_complex_coefficients() {
        // (x - i)(x - 2i) = x² - 3ix - 2
        let coeffs = [
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, -3.0),
            Complex64::new(-2.0, 0.0),
        ];
        let roots = solve(&coeffs);
        let expected = multiset![Complex64::new(0.0, 1.0), Complex64::new(0.0, 2.0)];
        assert!(roots.close_to(&expected, 1E-14));
    }

    #[test]
    fn cubic_triple_root() {
        assert_eq!(
            solve_real(&[1.0, 3.0, 3.0, 1.0]),
            multiset![minus_one(), minus_one(), minus_one()]
        );
    }

    #[test]
    fn cubic_double_root() {
        // (x - 1)²(x + 2) = x³ - 3x + 2
        let roots = solve_real(&[1.0, 0.0, -3.0, 2.0]);
        let expected = multiset![
            Complex64::new(1.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(-2.0, 0.0)
        ];
        assert!(roots.close_to(&expected, 1E-12));
    }

    #[test]
    fn cubic_general() {
        let roots = solve_real(&[1.0, 1.0, 1.0, 1.0]);
        assert!(roots.close_to(&multiset![minus_one(), -i(), i()], 1E-12));

        // not monic, three real roots: 2(x - 1)(x - 2)(x - 3)
        let roots = solve_real(&[2.0, -12.0, 22.0, -12.0]);
        let expected = multiset![
            Complex64::new(1.0, 0.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(3.0, 0.0)
        ];
        assert!(roots.close_to(&expected, 1E-12));
    }

    #[test]
    fn cubic_zero_d0() {
        // x³ - 8: D0 = 0 but the discriminant is not
        let roots = solve_real(&[1.0, 0.0, 0.0, -8.0]);
        for r in &roots {
            assert!((r.abs() - 2.0).abs() < 1E-12);
            assert!((*r * *r * *r - Complex64::new(8.0, 0.0)).abs() < 1E-12);
        }
        assert_eq!(roots.len(), 3);
    }

    #[test]
    fn constants_in_f32() {
        let coeffs = [1.0_f32, 4.0, 6.0, 4.0, 1.0].map(|x| Complex32::new(x, 0.0));
        let minus_one = Complex32::new(-1.0, 0.0);
        assert_eq!(solve(&coeffs), multiset![minus_one, minus_one, minus_one, minus_one]);
        let coeffs = [1.0_f32, 3.0, 3.0, 1.0].map(|x| Complex32::new(x, 0.0));
        assert_eq!(solve(&coeffs), multiset![minus_one, minus_one, minus_one]);
    }

    #[test]
    fn quartic_quadruple_root() {
        assert_eq!(
            solve_real(&[1.0, 4.0, 6.0, 4.0, 1.0]),
            multiset![minus_one(), minus_one(), minus_one(), minus_one()]
        );
    }

    #[test]
    fn quartic_biquadratic() {
        // (x² - 1)(x² - 4)
        let roots = solve_real(&[1.0, 0.0, -5.0, 0.0, 4.0]);
        let expected = multiset![
            Complex64::new(1.0, 0.0),
            Complex64::new(-1.0, 0.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(-2.0, 0.0)
        ];
        assert!(roots.close_to(&expected, 1E-14));
    }

    #[test]
    fn quartic_ferrari() {
        // fifth roots of unity except 1
        let roots = solve_real(&[1.0, 1.0, 1.0, 1.0, 1.0]);
        let expected: RootMultiset<Complex64> = (1..5)
            .map(|k| Complex64::from_polar(1.0, f64::from(k) * std::f64::consts::TAU / 5.0))
            .collect();
        assert!(roots.close_to(&expected, 1E-12));

        // 3(x - 1)(x + 2)(x - 3i)(x + 0.5)
        let expected = multiset![
            Complex64::new(1.0, 0.0),
            Complex64::new(-2.0, 0.0),
            Complex64::new(0.0, 3.0),
            Complex64::new(-0.5, 0.0)
        ];
        let v = expected.iter().copied().collect::<Vec<_>>();
        let p = crate::Polynomial64::from_roots(&v).scaled(Complex64::new(3.0, 0.0));
        assert!(solve(p.coeffs()).close_to(&expected, 1E-12));
    }

    #[test]
    fn quartic_reduces() {
        assert_eq!(
            solve_real(&[1.0, 3.0, 3.0, 1.0, 0.0]),
            solve_real(&[1.0, 3.0, 3.0, 1.0]) + [Complex64::new(0.0, 0.0)]
        );
        assert_eq!(solve_real(&[0.0, 1.0, 3.0, 3.0, 1.0]), solve_real(&[1.0, 3.0, 3.0, 1.0]));
    }
}

// Implementation of operator traits for complex numbers, forwarded to
// `num::Complex`

use std::{
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use super::Complex;
use crate::RealScalar;

impl<R: RealScalar> Neg for Complex<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

macro_rules! impl_forward {
    ($($trait:ident, $method:ident);* $(;)?) => {
        $(
            impl<R: RealScalar> $trait for Complex<R> {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self::Output {
                    Self(self.0.$method(rhs.0))
                }
            }
        )*
    };
}

impl_forward!(
    Add, add;
    Sub, sub;
    Mul, mul;
);

impl<R: RealScalar> Div for Complex<R> {
    type Output = Self;

    /// Multiplies by the reciprocal computed from the modulus, so that `|rhs|²`
    /// is never formed.
    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0.fdiv(rhs.0))
    }
}

macro_rules! impl_scalar_rhs {
    ($($trait:ident, $method:ident);* $(;)?) => {
        $(
            impl<R: RealScalar> $trait<R> for Complex<R> {
                type Output = Self;

                fn $method(self, rhs: R) -> Self::Output {
                    Self(self.0.$method(rhs))
                }
            }
        )*
    };
}

impl_scalar_rhs!(
    Add, add;
    Sub, sub;
    Mul, mul;
    Div, div;
);

macro_rules! impl_assign {
    ($($trait:ident, $method:ident, $op:tt);* $(;)?) => {
        $(
            impl<R: RealScalar> $trait for Complex<R> {
                fn $method(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }

            impl<R: RealScalar> $trait<R> for Complex<R> {
                fn $method(&mut self, rhs: R) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

impl_assign!(
    AddAssign, add_assign, +;
    SubAssign, sub_assign, -;
    MulAssign, mul_assign, *;
    DivAssign, div_assign, /;
);

// scalar on the left, only for concrete primitive types because of the orphan
// rule
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl Add<Complex<$t>> for $t {
                type Output = Complex<$t>;

                fn add(self, rhs: Complex<$t>) -> Self::Output {
                    Complex(self + rhs.0)
                }
            }

            impl Sub<Complex<$t>> for $t {
                type Output = Complex<$t>;

                fn sub(self, rhs: Complex<$t>) -> Self::Output {
                    Complex(self - rhs.0)
                }
            }

            impl Mul<Complex<$t>> for $t {
                type Output = Complex<$t>;

                fn mul(self, rhs: Complex<$t>) -> Self::Output {
                    Complex(self * rhs.0)
                }
            }

            impl Div<Complex<$t>> for $t {
                type Output = Complex<$t>;

                fn div(self, rhs: Complex<$t>) -> Self::Output {
                    Complex::from_real(self) / rhs
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64);

impl<R: RealScalar> Sum for Complex<R> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|z| z.0).sum())
    }
}

impl<R: RealScalar> Product for Complex<R> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|z| z.0).product())
    }
}

#[cfg(test)]
mod test {
    use crate::Complex64;

    fn c() -> Complex64 {
        Complex64::new(3.0, -5.0)
    }

    fn d() -> Complex64 {
        Complex64::new(-7.0, 120.0)
    }

    #[test]
    fn addition() {
        assert_eq!(c() + d(), Complex64::new(-4.0, 115.0));
        assert_eq!(c() + d(), d() + c());
        assert_eq!(c() + 2.0, Complex64::new(5.0, -5.0));
        assert_eq!(2.0 + c(), Complex64::new(5.0, -5.0));
    }

    #[test]
    fn subtraction() {
        assert_eq!(c() - d(), Complex64::new(10.0, -125.0));
        assert_eq!(c() - 2.0, Complex64::new(1.0, -5.0));
        assert_eq!(2.0 - c(), Complex64::new(-1.0, 5.0));
    }

    #[test]
    fn multiplication() {
        let (c, d) = (c(), d());
        let expected = Complex64::new(c.re * d.re - c.im * d.im, c.im * d.re + c.re * d.im);
        assert_eq!(c * d, expected);
        assert_eq!(c * d, d * c);
        assert_eq!(c * 2.0, Complex64::new(6.0, -10.0));
        assert_eq!(2.0 * c, Complex64::new(6.0, -10.0));
    }

    #[test]
    fn division() {
        let (c, d) = (c(), d());
        let denom = d.re * d.re + d.im * d.im;
        let expected = Complex64::new(
            (c.re * d.re + c.im * d.im) / denom,
            (c.im * d.re - c.re * d.im) / denom,
        );
        assert!((c / d - expected).abs() < 1E-15);
        assert!((c / d * d - c).abs() < 1E-13);
        assert_eq!(c / 2.0, Complex64::new(1.5, -2.5));
        assert!((1.0 / c - c.reciprocal()).abs() < 1E-15);
    }

    /// Naive division would overflow computing |d|²
    #[test]
    fn division_does_not_overflow() {
        let big = Complex64::new(1E300, 1E300);
        let q = big / big;
        assert!((q - Complex64::new(1.0, 0.0)).abs() < 1E-15);
    }

    #[test]
    fn negation() {
        assert_eq!(-c(), Complex64::new(-3.0, 5.0));
    }

    #[test]
    fn assign_ops() {
        let mut z = c();
        z += d();
        z -= d();
        z *= 2.0;
        z /= 2.0;
        assert!((z - c()).abs() < 1E-15);
    }

    #[test]
    fn sum_and_product() {
        let v = [c(), d(), Complex64::new(1.0, 1.0)];
        assert_eq!(v.iter().copied().sum::<Complex64>(), c() + d() + Complex64::new(1.0, 1.0));
        assert_eq!(
            v.iter().copied().product::<Complex64>(),
            c() * d() * Complex64::new(1.0, 1.0)
        );
    }
}

//! Principal-value roots, exponentials, logarithms and the trigonometric and
//! hyperbolic families.
//!
//! Everything is computed by [`num::Complex`]. The wrappers here only pin down
//! the branch on the negative real axis and the corner cases of `pow`.

use num::Zero;

use crate::{Complex, RealScalar};

macro_rules! forward {
    ($($name:ident),* $(,)?) => {
        $(
            #[must_use]
            pub fn $name(self) -> Self {
                Self(self.0.$name())
            }
        )*
    };
}

impl<R: RealScalar> Complex<R> {
    /// Principal square root.
    ///
    /// A real, non-negative operand has a real, non-negative root. Otherwise the
    /// result lies in the right half-plane and its imaginary part has the sign
    /// of the operand's imaginary part, a negative zero counts as positive.
    ///
    /// ```
    /// use polyroots::Complex64;
    ///
    /// assert_eq!(Complex64::new(-4.0, 0.0).sqrt(), Complex64::new(0.0, 2.0));
    /// assert_eq!(Complex64::new(-4.0, -0.0).sqrt(), Complex64::new(0.0, 2.0));
    /// assert_eq!(Complex64::new(9.0, 0.0).sqrt(), Complex64::new(3.0, 0.0));
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        if self.is_real() && self.re >= R::zero() {
            return Self::from_real(self.re.sqrt());
        }
        if self.im.is_zero() {
            return Self::new(R::zero(), (-self.re).sqrt());
        }
        Self(self.0.sqrt())
    }

    /// Principal natural logarithm, the imaginary part is in `(-π, π]`.
    #[must_use]
    pub fn ln(self) -> Self {
        Self(num::Complex::new(self.re, self.im + R::zero()).ln())
    }

    /// Principal power `self^exponent`.
    ///
    /// `x^0 = 1` for every `x`, `0^0` included, and `0^x = 0` for real positive
    /// `x`. Everything else is `exp(exponent * ln(self))`.
    #[must_use]
    pub fn pow(self, exponent: Self) -> Self {
        if self.is_zero() && exponent.is_real() && exponent.re > R::zero() {
            return Self::zero();
        }
        Self(self.0.powc(exponent.0))
    }

    /// [`Complex::pow`] with a real exponent.
    #[must_use]
    pub fn powf(self, exponent: R) -> Self {
        if self.is_zero() && exponent > R::zero() {
            return Self::zero();
        }
        Self(self.0.powf(exponent))
    }

    forward!(cbrt, exp, log10);
    forward!(sin, cos, tan, asin, acos, atan);
    forward!(sinh, cosh, tanh, asinh, acosh, atanh);
}

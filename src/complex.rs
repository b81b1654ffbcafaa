use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

use num::{complex::ComplexFloat, One, Zero};

use crate::RealScalar;

mod funcs;
mod impl_num;

/// A complex number in Cartesian form, a thin wrapper around
/// [`num::Complex`].
///
/// The wrapper exists to make complex numbers usable as keys of a
/// [`crate::RootMultiset`]: `Eq` and `Hash` are implemented so that they are
/// consistent with `==` for every value that is not NaN. The real and
/// imaginary parts, and every method of [`num::Complex`] that is not shadowed
/// here, are reachable through `Deref`.
///
/// Equality (`==`) is exact, component-wise IEEE equality (so `-0.0 == 0.0`).
/// Use [`Complex::close_to`] or [`Complex::approx_eq`] wherever round-off is
/// expected.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(transparent)]
pub struct Complex<R>(num::Complex<R>);

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

impl<R> Deref for Complex<R> {
    type Target = num::Complex<R>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<R> DerefMut for Complex<R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<R: RealScalar> Complex<R> {
    pub const fn new(re: R, im: R) -> Self {
        Self(num::Complex::new(re, im))
    }

    pub fn from_real(re: R) -> Self {
        Self::new(re, R::zero())
    }

    /// Create a complex number from its modulus and argument.
    ///
    /// ```
    /// use polyroots::Complex64;
    ///
    /// let z = Complex64::from_polar(2.0, std::f64::consts::FRAC_PI_2);
    /// assert!(z.close_to(Complex64::new(0.0, 2.0), 1E-12));
    /// ```
    pub fn from_polar(abs: R, arg: R) -> Self {
        Self(num::Complex::from_polar(abs, arg))
    }

    /// The imaginary unit
    pub fn i() -> Self {
        Self(num::Complex::i())
    }

    /// Euclidean norm, `hypot(re, im)`
    pub fn abs(self) -> R {
        self.0.norm()
    }

    /// Angle in `(-π, π]`.
    ///
    /// A negative zero imaginary part counts as zero, so the negative real axis
    /// maps to `π`.
    pub fn arg(self) -> R {
        (self.im + R::zero()).atan2(self.re)
    }

    pub fn norm_sqr(self) -> R {
        self.0.norm_sqr()
    }

    /// True iff the imaginary part is within `ε` of zero.
    pub fn is_real(self) -> bool {
        self.im.is_almost_zero()
    }

    /// True iff both parts are within `ε` of zero.
    ///
    /// [`Zero::is_zero`] is the exact counterpart.
    pub fn is_almost_zero(self) -> bool {
        self.re.is_almost_zero() && self.im.is_almost_zero()
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    #[must_use]
    pub fn conj(self) -> Self {
        Self(self.0.conj())
    }

    /// `1 / self`.
    ///
    /// The reciprocal of zero is the point at infinity `(+∞, 0)`, there is no
    /// panic.
    #[must_use]
    pub fn reciprocal(self) -> Self {
        if self.is_zero() {
            return Self::new(R::infinity(), R::zero());
        }
        Self(self.0.finv())
    }

    /// Projection onto the Riemann sphere: finite values are unchanged, any
    /// infinite value maps to `(+∞, ±0)` keeping the sign of the imaginary part.
    #[must_use]
    pub fn proj(self) -> Self {
        if self.is_finite() {
            return self;
        }
        let im = if self.im.is_sign_negative() {
            -R::zero()
        } else {
            R::zero()
        };
        Self::new(R::infinity(), im)
    }

    /// `self * i`
    #[must_use]
    pub fn mul_i(self) -> Self {
        Self::new(-self.im, self.re)
    }

    /// Modulus based approximate equality: exactly equal, or the moduli differ
    /// by less than `epsilon`.
    ///
    /// This does not look at the phase, so two values with the same modulus are
    /// always "close", and for large moduli component-wise drift is hidden. Use
    /// `(a - b).abs() < epsilon` when the distance between the two points
    /// matters.
    pub fn close_to(self, other: Self, epsilon: R) -> bool {
        if self == other {
            return true;
        }
        (self.abs() - other.abs()).abs() < epsilon
    }

    /// [`Complex::close_to`] with `ε` as tolerance.
    pub fn approx_eq(self, other: Self) -> bool {
        self.close_to(other, R::epsilon())
    }
}

impl<R: RealScalar> Eq for Complex<R> {}

impl<R: RealScalar> Hash for Complex<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.re.hash_key().hash(state);
        self.im.hash_key().hash(state);
    }
}

impl<R: RealScalar> Zero for Complex<R> {
    fn zero() -> Self {
        Self(num::Complex::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<R: RealScalar> One for Complex<R> {
    fn one() -> Self {
        Self(num::Complex::one())
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl<R: RealScalar> From<R> for Complex<R> {
    fn from(re: R) -> Self {
        Self::from_real(re)
    }
}

impl<R: RealScalar> From<num::Complex<R>> for Complex<R> {
    fn from(z: num::Complex<R>) -> Self {
        Self(z)
    }
}

impl<R: RealScalar> From<Complex<R>> for num::Complex<R> {
    fn from(z: Complex<R>) -> Self {
        z.0
    }
}

impl<R: RealScalar> Display for Complex<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plus = if self.im.is_sign_negative() { "" } else { "+" };
        write!(f, "({}{plus}{}i)", self.re, self.im)
    }
}

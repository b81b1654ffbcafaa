use std::fmt::{Debug, Display};

use num::{traits::FloatConst, Float, FromPrimitive};

/// The floating point capability every type in this crate is generic over.
///
/// Implemented for [`f32`] and [`f64`]. Comparisons that are not
/// algebraically exact ("is this discriminant zero?") go through
/// [`RealScalar::is_almost_zero`] and [`RealScalar::approx_eq`], which use the
/// type's own machine epsilon.
pub trait RealScalar:
    Float + FloatConst + FromPrimitive + Debug + Display + Default + Send + Sync + 'static
{
    /// Bit pattern used for hashing.
    ///
    /// `-0.0` and `+0.0` compare equal, so they must share a key.
    fn hash_key(self) -> u64;

    /// `|self| < ε`
    fn is_almost_zero(self) -> bool {
        self.abs() < Self::epsilon()
    }

    /// Exactly equal, or closer than `ε`.
    ///
    /// ```
    /// use polyroots::RealScalar;
    ///
    /// assert!(1.0_f64.approx_eq(1.0 + f64::EPSILON / 2.0));
    /// assert!(!1.0_f64.approx_eq(1.0 + 4.0 * f64::EPSILON));
    /// ```
    fn approx_eq(self, other: Self) -> bool {
        self == other || (other - self).abs() < Self::epsilon()
    }
}

impl RealScalar for f32 {
    fn hash_key(self) -> u64 {
        u64::from((self + 0.0).to_bits())
    }
}

impl RealScalar for f64 {
    fn hash_key(self) -> u64 {
        (self + 0.0).to_bits()
    }
}

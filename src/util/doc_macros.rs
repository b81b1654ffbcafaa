//! Macros for reducing doc comment boilerplate.

/// Documents `from_f64` panics.
macro_rules! panic_r_from_f64 {
    () => {
        "For `f32` and `f64` this does not panic. A custom [`crate::RealScalar`] whose [`num::FromPrimitive::from_f64`] cannot represent small constants such as `0.4` or `256` makes it panic.\n\n"
    };
}
pub(crate) use panic_r_from_f64;

/// Documents [`crate::Error::InvalidPolynomial`] errors.
macro_rules! errors_invalid_polynomial {
    () => {
        "- `InvalidPolynomial`: there are no coefficients, or every coefficient is zero (within machine epsilon).\n"
    };
}
pub(crate) use errors_invalid_polynomial;

/// Documents [`crate::Error::UnsupportedDegree`] errors.
macro_rules! errors_unsupported_degree {
    () => {
        "- `UnsupportedDegree`: the iterative method was disabled and the polynomial, after removing zero leading coefficients and roots at zero, has degree higher than 4.\n"
    };
}
pub(crate) use errors_unsupported_degree;

/// Documents the quartic formula's internal consistency check.
macro_rules! panic_quartic {
    () => {
        "Does not panic for valid input. The quartic formula asserts an invariant of Ferrari's method (the square root of `p + 2y` is not zero when the depressed quartic is not biquadratic), a panic there is a bug.\n\n"
    };
}
pub(crate) use panic_quartic;

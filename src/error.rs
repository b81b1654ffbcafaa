use thiserror::Error;

/// The top-level error type for this crate.
///
/// Failing to converge is not an error: the iterative solver always returns
/// its best estimate, see [`crate::RootsReport::converged`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The coefficient list does not describe a polynomial with roots to find.
    #[error("invalid polynomial: {reason}")]
    InvalidPolynomial { reason: &'static str },

    /// No closed form exists for this degree and the iterative method was
    /// disabled.
    #[error("no closed form for degree {degree} and the iterative solver is disabled")]
    UnsupportedDegree { degree: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

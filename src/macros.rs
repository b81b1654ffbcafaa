//! Literal helpers.

/// Shorthand for [`Complex::new`](crate::Complex::new).
///
/// A single argument builds a real value.
///
/// ```
/// use polyroots::{complex, Complex64};
///
/// assert_eq!(complex!(1.0, -2.0), Complex64::new(1.0, -2.0));
/// assert_eq!(complex!(3.0_f64), Complex64::new(3.0, 0.0));
/// ```
#[macro_export]
macro_rules! complex {
    ($re:expr, $im:expr $(,)?) => {
        $crate::Complex::new($re, $im)
    };
    ($re:expr $(,)?) => {
        $crate::Complex::from_real($re)
    };
}

/// Build a [`Polynomial`](crate::Polynomial) from real coefficients, highest
/// degree first. Expands to [`Polynomial::new`](crate::Polynomial::new), so
/// the result is a [`Result`](crate::Result).
///
/// ```
/// use polyroots::poly;
///
/// let p = poly![1.0, -3.0, 2.0]?;
/// assert_eq!(p.degree(), 2);
/// # Ok::<(), polyroots::Error>(())
/// ```
#[macro_export]
macro_rules! poly {
    ($($c:expr),* $(,)?) => {
        $crate::Polynomial::new(&[$($c),*])
    };
}

/// Build a [`RootMultiset`](crate::RootMultiset), counting repeated values.
///
/// ```
/// use polyroots::multiset;
///
/// let m = multiset![2, 1, 2];
/// assert_eq!(m.count_of(&2), 2);
/// assert_eq!(m.len(), 3);
/// ```
#[macro_export]
macro_rules! multiset {
    () => {
        $crate::RootMultiset::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::RootMultiset::from([$($x),+])
    };
}

// internal utilities for printing and ordering complex numbers

use std::cmp::Ordering;

use crate::{Complex, RealScalar};

// sort a vector of complex numbers lexicographically, using their real part first
pub(crate) fn complex_sort_mut<R: RealScalar>(v: &mut [Complex<R>]) {
    v.sort_by(|a, b| {
        let re_ord = a.re.partial_cmp(&b.re).unwrap_or(Ordering::Equal);
        if re_ord != Ordering::Equal {
            return re_ord;
        }
        a.im.partial_cmp(&b.im).unwrap_or(Ordering::Equal)
    });
}

/// real values print without the imaginary part
pub(crate) fn complex_fmt<R: RealScalar>(c: Complex<R>) -> String {
    if c.im.is_zero() {
        format!("{}", c.re)
    } else {
        format!("{c}")
    }
}

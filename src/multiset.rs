use std::{
    collections::{hash_map, HashMap},
    fmt::{self, Debug, Display},
    hash::Hash,
};

use itertools::Itertools;

use crate::{util::complex::complex_sort_mut, Complex, RealScalar};

mod impl_ops;

/// An unordered collection that tracks how many times each value occurs.
///
/// This is the natural shape of "the roots of a polynomial": the order of the
/// roots carries no meaning, their multiplicity does. Building a multiset from
/// a list counts duplicates instead of discarding them.
///
/// # Examples
/// ```
/// use polyroots::{multiset, RootMultiset};
///
/// let a = multiset![1, 1, 2];
/// let b = multiset![1, 2, 2];
/// assert_eq!(a.count_of(&1), 2);
/// assert_eq!(a.intersection(&b), multiset![1, 2]);
/// assert_eq!(a.union(&b), multiset![1, 1, 1, 2, 2, 2]);
/// ```
///
/// Lookups go through `Eq`, so a value that is not equal to itself (a complex
/// number with a NaN part) is still counted by [`RootMultiset::len`] and
/// iterated over, but every occurrence is stored separately and
/// [`RootMultiset::count_of`] and [`RootMultiset::contains`] never find it.
/// Check [`crate::Complex::is_nan`] on the roots of a failed iteration.
#[derive(Clone)]
pub struct RootMultiset<T: Eq + Hash> {
    // invariant: no value is ever stored with multiplicity zero
    values: HashMap<T, usize>,
}

impl<T: Eq + Hash> RootMultiset<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: HashMap::with_capacity(capacity),
        }
    }

    /// Total number of elements, i.e. the sum of all multiplicities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.values().sum()
    }

    /// Number of distinct elements.
    #[must_use]
    pub fn count_distinct(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Multiplicity of `value`, zero when absent.
    ///
    /// Always zero for NaN, see the type level documentation.
    pub fn count_of(&self, value: &T) -> usize {
        self.values.get(value).copied().unwrap_or(0)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.values.contains_key(value)
    }

    /// Add one occurrence of `value`.
    pub fn insert(&mut self, value: T) {
        self.insert_many(value, 1);
    }

    /// Add `n` occurrences of `value`. Does nothing if `n` is zero.
    pub fn insert_many(&mut self, value: T, n: usize) {
        if n == 0 {
            return;
        }
        *self.values.entry(value).or_insert(0) += n;
    }

    /// Remove one occurrence of `value`. Returns false if it was not present.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.values.get_mut(value) {
            Some(n) if *n > 1 => {
                *n -= 1;
                true
            }
            Some(_) => {
                self.values.remove(value);
                true
            }
            None => false,
        }
    }

    /// Remove every occurrence of `value`, returning how many there were.
    pub fn remove_all(&mut self, value: &T) -> usize {
        self.values.remove(value).unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterate over the elements, yielding each value once per unit of
    /// multiplicity. The order is unspecified.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.values.iter(),
            current: None,
        }
    }

    /// Iterate over `(value, multiplicity)` pairs.
    pub fn iter_distinct(&self) -> impl Iterator<Item = (&T, usize)> {
        self.values.iter().map(|(v, n)| (v, *n))
    }

    /// True iff every element of `self` occurs in `other` at least as often.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.values.iter().all(|(v, n)| other.count_of(v) >= *n)
    }

    pub fn is_strict_subset(&self, other: &Self) -> bool {
        self.is_subset(other) && self != other
    }

    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    pub fn is_strict_superset(&self, other: &Self) -> bool {
        other.is_strict_subset(self)
    }

    /// Combine each element with an accumulator, once per unit of multiplicity.
    pub fn fold<B>(&self, init: B, f: impl FnMut(B, &T) -> B) -> B {
        self.iter().fold(init, f)
    }

    /// Apply `f` to every element. The multiplicity of an image is the sum of
    /// the multiplicities of its preimages.
    pub fn map<U: Eq + Hash>(&self, mut f: impl FnMut(&T) -> U) -> RootMultiset<U> {
        let mut out = RootMultiset::with_capacity(self.count_distinct());
        for (v, n) in &self.values {
            out.insert_many(f(v), *n);
        }
        out
    }

    /// Apply `f` to every element and take the union of the results.
    pub fn flat_map<U: Eq + Hash, I: IntoIterator<Item = U>>(
        &self,
        mut f: impl FnMut(&T) -> I,
    ) -> RootMultiset<U> {
        let mut out = RootMultiset::new();
        for (v, n) in &self.values {
            for u in f(v) {
                out.insert_many(u, *n);
            }
        }
        out
    }
}

impl<T: Eq + Hash + Clone> RootMultiset<T> {
    /// Multiplicities are added.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (v, n) in &other.values {
            out.insert_many(v.clone(), *n);
        }
        out
    }

    /// Pointwise minimum of the multiplicities.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (small, large) = if self.count_distinct() <= other.count_distinct() {
            (self, other)
        } else {
            (other, self)
        };
        let mut out = Self::with_capacity(small.count_distinct());
        for (v, n) in &small.values {
            out.insert_many(v.clone(), (*n).min(large.count_of(v)));
        }
        out
    }

    /// Relative complement: the elements of `self` left over after removing
    /// those matched in `other`, multiplicities subtracted with a floor at zero.
    #[must_use]
    pub fn complement(&self, other: &Self) -> Self {
        let mut out = Self::with_capacity(self.count_distinct());
        for (v, n) in &self.values {
            out.insert_many(v.clone(), n.saturating_sub(other.count_of(v)));
        }
        out
    }

    /// Symmetric difference, `(self \ other) ∪ (other \ self)`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.complement(other).union(&other.complement(self))
    }

    /// Keep the elements for which `pred` holds.
    #[must_use]
    pub fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> Self {
        let mut out = Self::new();
        for (v, n) in &self.values {
            if pred(v) {
                out.insert_many(v.clone(), *n);
            }
        }
        out
    }

    /// One-to-one matching of the elements of `self` with those of `other`
    /// under a custom equivalence, respecting multiplicity.
    ///
    /// Each element of `self` consumes an exactly equal element of `other` if
    /// there is one, otherwise the first element of `other` for which
    /// `matches` holds. Matching is greedy, so `matches` should be much
    /// tighter than the distance between distinct elements.
    pub fn matches_by(&self, other: &Self, mut matches: impl FnMut(&T, &T) -> bool) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut remaining = other.clone();
        for value in self {
            let found = if remaining.contains(value) {
                Some(value.clone())
            } else {
                remaining
                    .values
                    .keys()
                    .find(|candidate| matches(value, *candidate))
                    .cloned()
            };
            match found {
                Some(v) => {
                    remaining.remove(&v);
                }
                None => return false,
            }
        }
        remaining.is_empty()
    }
}

impl<R: RealScalar> RootMultiset<Complex<R>> {
    /// True iff the two multisets can be matched element by element so that
    /// every pair is closer than `epsilon`.
    ///
    /// This compares the distance between points, which is stricter than
    /// [`Complex::close_to`].
    pub fn close_to(&self, other: &Self, epsilon: R) -> bool {
        self.matches_by(other, |a, b| (*a - *b).abs() < epsilon)
    }

    /// Elements sorted lexicographically by real part then imaginary part.
    /// Handy for stable output.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<Complex<R>> {
        let mut v = self.iter().copied().collect_vec();
        complex_sort_mut(&mut v);
        v
    }
}

impl<T: Eq + Hash> Default for RootMultiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for RootMultiset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<T: Eq + Hash> Eq for RootMultiset<T> {}

impl<T: Eq + Hash + Debug> Debug for RootMultiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Eq + Hash + Display> Display for RootMultiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().join(", "))
    }
}

impl<T: Eq + Hash> Extend<T> for RootMultiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T: Eq + Hash> FromIterator<T> for RootMultiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for RootMultiset<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Eq + Hash> From<Vec<T>> for RootMultiset<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

/// Borrowing iterator over a [`RootMultiset`], see [`RootMultiset::iter`].
pub struct Iter<'a, T> {
    inner: hash_map::Iter<'a, T, usize>,
    current: Option<(&'a T, usize)>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((value, remaining)) = self.current.as_mut() {
                if *remaining > 0 {
                    *remaining -= 1;
                    return Some(*value);
                }
            }
            let (value, n) = self.inner.next()?;
            self.current = Some((value, *n));
        }
    }
}

/// Owning iterator over a [`RootMultiset`].
pub struct IntoIter<T> {
    inner: hash_map::IntoIter<T, usize>,
    current: Option<(T, usize)>,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.current.take() {
                Some((value, 1)) => return Some(value),
                Some((value, n)) if n > 1 => {
                    self.current = Some((value.clone(), n - 1));
                    return Some(value);
                }
                _ => {}
            }
            self.current = Some(self.inner.next()?);
        }
    }
}

impl<T: Eq + Hash + Clone> IntoIterator for RootMultiset<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.values.into_iter(),
            current: None,
        }
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a RootMultiset<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::RootMultiset;
    use crate::Complex64;

    #[test]
    fn construction_counts_duplicates() {
        let m = multiset![1, 1, 2, 3, 3, 3];
        assert_eq!(m.len(), 6);
        assert_eq!(m.count_distinct(), 3);
        assert_eq!(m.count_of(&3), 3);
        assert_eq!(m.count_of(&4), 0);
        assert_eq!(m, RootMultiset::from(vec![3, 1, 3, 2, 1, 3]));
    }

    #[test]
    fn insert_and_remove() {
        let mut m = RootMultiset::new();
        m.insert("a");
        m.insert("a");
        m.insert_many("b", 0);
        assert!(!m.contains(&"b"));
        assert!(m.remove(&"a"));
        assert_eq!(m.count_of(&"a"), 1);
        assert!(m.remove(&"a"));
        assert!(!m.contains(&"a"));
        assert!(!m.remove(&"a"));
        assert!(m.is_empty());
    }

    #[test]
    fn remove_all_and_clear() {
        let mut m = multiset![7, 7, 7, 8];
        assert_eq!(m.remove_all(&7), 3);
        assert_eq!(m.remove_all(&7), 0);
        assert_eq!(m, multiset![8]);
        m.clear();
        assert!(m.is_empty());
    }

    #[test]
    fn iteration_respects_multiplicity() {
        let m = multiset![1, 1, 2];
        let v = m.iter().copied().sorted().collect_vec();
        assert_eq!(v, vec![1, 1, 2]);
        let v = m.clone().into_iter().sorted().collect_vec();
        assert_eq!(v, vec![1, 1, 2]);
        let distinct = m.iter_distinct().map(|(v, n)| (*v, n)).sorted().collect_vec();
        assert_eq!(distinct, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn intersection() {
        assert_eq!(
            multiset![1, 1, 2].intersection(&multiset![1, 2, 2]),
            multiset![1, 2]
        );
        assert_eq!(multiset![1, 2].intersection(&multiset![3]), multiset![]);
    }

    #[test]
    fn union_sums_multiplicities() {
        let u = multiset![1, 1, 2].union(&multiset![1, 3]);
        assert_eq!(u, multiset![1, 1, 1, 2, 3]);
    }

    #[test]
    fn complement_and_difference() {
        let a = multiset![1, 1, 1, 2];
        let b = multiset![1, 2, 2, 3];
        assert_eq!(a.complement(&b), multiset![1, 1]);
        assert_eq!(b.complement(&a), multiset![2, 3]);
        assert_eq!(a.difference(&b), multiset![1, 1, 2, 3]);
        assert_eq!(a.difference(&b), b.difference(&a));
    }

    #[test]
    fn algebra_laws() {
        let a = multiset![1, 1, 2, 5];
        let b = multiset![1, 2, 2, 3];
        let empty = RootMultiset::new();
        assert_eq!(a.union(&b.complement(&a)), a.union(&b).complement(&a.intersection(&b)));
        assert_eq!(a.union(&empty), a);
        assert_eq!(a.intersection(&empty), empty);
        assert_eq!(a.intersection(&b), b.intersection(&a));
        assert_eq!(a.union(&b).len(), a.len() + b.len());
    }

    #[test]
    fn inclusion() {
        let a = multiset![1, 2];
        let b = multiset![1, 1, 2];
        assert!(a.is_subset(&b));
        assert!(a.is_strict_subset(&b));
        assert!(b.is_superset(&a));
        assert!(b.is_strict_superset(&a));
        assert!(a.is_subset(&a));
        assert!(!a.is_strict_subset(&a));
        assert!(!b.is_subset(&a));
    }

    #[test]
    fn higher_order() {
        let m = multiset![1, 1, 2, 3];
        assert_eq!(m.filter(|x| x % 2 == 1), multiset![1, 1, 3]);
        assert_eq!(m.map(|x| x % 2), multiset![1, 1, 0, 1]);
        assert_eq!(m.flat_map(|x| [*x, -*x]), multiset![1, 1, -1, -1, 2, -2, 3, -3]);
        assert_eq!(m.fold(0, |acc, x| acc + x), 7);
    }

    #[test]
    fn display() {
        assert_eq!(RootMultiset::<i32>::new().to_string(), "{}");
        assert_eq!(multiset![4, 4].to_string(), "{4, 4}");
    }

    #[test]
    fn complex_close_to() {
        let a = multiset![Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0)];
        let b = multiset![Complex64::new(0.0, 1.0 + 1E-9), Complex64::new(1.0 - 1E-9, 0.0)];
        assert!(a.close_to(&b, 1E-6));
        assert!(!a.close_to(&b, 1E-12));
        // same moduli but different points are not close
        let c = multiset![Complex64::new(-1.0, 0.0), Complex64::new(0.0, -1.0)];
        assert!(!a.close_to(&c, 1E-6));
        assert!(a.matches_by(&c, |x, y| x.close_to(*y, 1E-6)));
    }

    #[test]
    fn complex_close_to_multiplicity() {
        let one = Complex64::new(1.0, 0.0);
        let a = multiset![one, one];
        let b = multiset![one, Complex64::new(1.0 + 1E-9, 0.0)];
        assert!(a.close_to(&b, 1E-6));
        assert!(!a.close_to(&multiset![one], 1E-6));
    }

    #[test]
    fn sorted_vec() {
        let m = multiset![
            Complex64::new(1.0, 0.0),
            Complex64::new(-1.0, 2.0),
            Complex64::new(-1.0, -2.0)
        ];
        assert_eq!(
            m.to_sorted_vec(),
            vec![
                Complex64::new(-1.0, -2.0),
                Complex64::new(-1.0, 2.0),
                Complex64::new(1.0, 0.0)
            ]
        );
    }

    #[test]
    fn nan_is_counted_but_never_found() {
        let nan = Complex64::new(f64::NAN, 0.0);
        let mut m = multiset![Complex64::new(1.0, 0.0)];
        m.insert(nan);
        m.insert(nan);
        assert_eq!(m.len(), 3);
        assert_eq!(m.count_distinct(), 3);
        assert_eq!(m.count_of(&nan), 0);
        assert!(!m.contains(&nan));
        assert_eq!(m.iter().filter(|z| z.is_nan()).count(), 2);
    }
}

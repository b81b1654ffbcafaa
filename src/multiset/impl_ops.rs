// Implementation of operator traits for multisets

use std::{
    hash::Hash,
    ops::{Add, AddAssign, BitAnd, BitAndAssign, BitXor, BitXorAssign, Sub, SubAssign},
};

use super::RootMultiset;

/// `+` is the union, and accepts anything iterable.
impl<T: Eq + Hash, I: IntoIterator<Item = T>> Add<I> for RootMultiset<T> {
    type Output = Self;

    fn add(mut self, rhs: I) -> Self::Output {
        self.extend(rhs);
        self
    }
}

impl<T: Eq + Hash, I: IntoIterator<Item = T>> AddAssign<I> for RootMultiset<T> {
    fn add_assign(&mut self, rhs: I) {
        self.extend(rhs);
    }
}

macro_rules! impl_set_op {
    ($($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:ident);* $(;)?) => {
        $(
            impl<T: Eq + Hash + Clone> $trait for RootMultiset<T> {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self::Output {
                    RootMultiset::$op(&self, &rhs)
                }
            }

            impl<T: Eq + Hash + Clone> $trait for &RootMultiset<T> {
                type Output = RootMultiset<T>;

                fn $method(self, rhs: Self) -> Self::Output {
                    RootMultiset::$op(self, rhs)
                }
            }

            impl<T: Eq + Hash + Clone> $assign_trait for RootMultiset<T> {
                fn $assign_method(&mut self, rhs: Self) {
                    *self = RootMultiset::$op(self, &rhs);
                }
            }
        )*
    };
}

impl_set_op!(
    Sub, sub, SubAssign, sub_assign, complement;
    BitAnd, bitand, BitAndAssign, bitand_assign, intersection;
    BitXor, bitxor, BitXorAssign, bitxor_assign, difference;
);

impl<T: Eq + Hash + Clone> Add for &RootMultiset<T> {
    type Output = RootMultiset<T>;

    fn add(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

#[cfg(test)]
mod test {
    use crate::RootMultiset;

    #[test]
    fn add_is_union() {
        let a = multiset![1, 2];
        let b = multiset![2, 3];
        assert_eq!(&a + &b, multiset![1, 2, 2, 3]);
        assert_eq!(a.clone() + b, multiset![1, 2, 2, 3]);
        assert_eq!(a.clone() + vec![5, 5], multiset![1, 2, 5, 5]);
        let mut c = a;
        c += [1];
        assert_eq!(c, multiset![1, 1, 2]);
    }

    #[test]
    fn set_operators() {
        let a = multiset![1, 1, 2];
        let b = multiset![1, 2, 2];
        assert_eq!(&a & &b, multiset![1, 2]);
        assert_eq!(&a - &b, multiset![1]);
        assert_eq!(&a ^ &b, multiset![1, 2]);
        assert_eq!(a.clone() & b.clone(), a.intersection(&b));
    }

    #[test]
    fn assign_operators() {
        let mut a: RootMultiset<i32> = multiset![1, 1, 2];
        a -= multiset![1];
        assert_eq!(a, multiset![1, 2]);
        a &= multiset![2, 2];
        assert_eq!(a, multiset![2]);
        a ^= multiset![2, 3];
        assert_eq!(a, multiset![3]);
    }
}

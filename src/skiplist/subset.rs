// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Set relations by merging two level-0 chains.

use std::convert::Infallible;

use rand::rngs::StdRng;
use rand_core::RngCore;

use super::set::OrderedSet;
use crate::error::Error;
use crate::order::OrderRelation;

impl<T, O: OrderRelation<T>, R: RngCore> OrderedSet<T, O, R> {
    /// Return whether every value of `self` is also in `other`.
    ///
    /// Both chains are walked once in step, so this is O(n + m). Values are
    /// compared with `self`'s order relation.
    pub fn is_subset_of<O2, R2>(
        &self,
        other: &OrderedSet<T, O2, R2>,
    ) -> Result<bool, Error<O::Error>> {
        if self.len() > other.len() {
            return Ok(false);
        }

        let mut mine = self.iter();
        let mut current = mine.next();
        for theirs in other.iter() {
            let Some(value) = current else {
                return Ok(true);
            };
            if self.order.less_than(value, theirs).map_err(Error::Comparison)? {
                // `value` falls between two of `other`'s values.
                return Ok(false);
            }
            if self.order.equal(value, theirs).map_err(Error::Comparison)? {
                current = mine.next();
            }
        }

        return Ok(current.is_none());
    }

    /// Return whether every value of `other` is also in `self`.
    ///
    /// Compares with `self`'s order relation.
    pub fn is_superset_of<O2, R2>(
        &self,
        other: &OrderedSet<T, O2, R2>,
    ) -> Result<bool, Error<O::Error>> {
        if other.len() > self.len() {
            return Ok(false);
        }

        let mut theirs = other.iter();
        let mut current = theirs.next();
        for mine in self.iter() {
            let Some(value) = current else {
                return Ok(true);
            };
            if self.order.less_than(value, mine).map_err(Error::Comparison)? {
                return Ok(false);
            }
            if self.order.equal(value, mine).map_err(Error::Comparison)? {
                current = theirs.next();
            }
        }

        return Ok(current.is_none());
    }

    /// Return whether both sets hold equal values.
    ///
    /// Pairs values in order and stops at the first mismatch. Compares with
    /// `self`'s order relation.
    pub fn set_eq<O2, R2>(&self, other: &OrderedSet<T, O2, R2>) -> Result<bool, Error<O::Error>> {
        if self.len() != other.len() {
            return Ok(false);
        }
        for (mine, theirs) in self.iter().zip(other.iter()) {
            if !self.order.equal(mine, theirs).map_err(Error::Comparison)? {
                return Ok(false);
            }
        }
        return Ok(true);
    }

    /// Return whether the sets share no value.
    pub fn is_disjoint<O2, R2>(
        &self,
        other: &OrderedSet<T, O2, R2>,
    ) -> Result<bool, Error<O::Error>> {
        let mut mine = self.iter();
        let mut theirs = other.iter();
        let mut a = mine.next();
        let mut b = theirs.next();

        while let (Some(x), Some(y)) = (a, b) {
            if self.order.less_than(x, y).map_err(Error::Comparison)? {
                a = mine.next();
            } else if self.order.equal(x, y).map_err(Error::Comparison)? {
                return Ok(false);
            } else {
                b = theirs.next();
            }
        }

        return Ok(true);
    }

    /// Return whether every value of `self` appears in `items`.
    ///
    /// `items` is first collected into a set with `self`'s order relation
    /// and configuration, then merged as in [`is_subset_of`](Self::is_subset_of).
    pub fn is_subset_of_iter<I>(&self, items: I) -> Result<bool, Error<O::Error>>
    where
        O: Clone,
        I: IntoIterator<Item = T>,
    {
        let config = self.config.clone();
        let rng: StdRng = config.rng();
        let mut other = OrderedSet::from_parts(self.order.clone(), rng, config);
        other.try_extend(items)?;
        return self.is_subset_of(&other);
    }
}

impl<T, O, R, R2> PartialEq<OrderedSet<T, O, R2>> for OrderedSet<T, O, R>
where
    O: OrderRelation<T, Error = Infallible>,
    R: RngCore,
{
    fn eq(&self, other: &OrderedSet<T, O, R2>) -> bool {
        return matches!(self.set_eq(other), Ok(true));
    }
}

impl<T, O, R> Eq for OrderedSet<T, O, R>
where
    O: OrderRelation<T, Error = Infallible>,
    R: RngCore,
{
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::error::Error;
    use crate::order::Incomparable;
    use crate::order::Partial;
    use crate::skiplist::OrderedSet;

    fn set_of(values: &[i32]) -> OrderedSet<i32> {
        let mut set = OrderedSet::with_config(Config::new().with_seed(12)).unwrap();
        set.try_extend(values.iter().copied()).unwrap();
        return set;
    }

    #[test]
    fn subset_is_reflexive() {
        let s = set_of(&[1, 5, 8]);
        assert_eq!(s.is_subset_of(&s), Ok(true));
        let empty = set_of(&[]);
        assert_eq!(empty.is_subset_of(&empty), Ok(true));
    }

    #[test]
    fn subset_examples() {
        let small = set_of(&[1, 5, 8]);
        let large = set_of(&[1, 3, 5, 8, 9]);
        assert_eq!(small.is_subset_of(&large), Ok(true));
        assert_eq!(large.is_subset_of(&small), Ok(false));
        assert_eq!(large.is_superset_of(&small), Ok(true));
        assert_eq!(small.is_superset_of(&large), Ok(false));
    }

    #[test]
    fn empty_is_subset_of_everything() {
        let empty = set_of(&[]);
        let s = set_of(&[2, 4]);
        assert_eq!(empty.is_subset_of(&s), Ok(true));
        assert_eq!(s.is_subset_of(&empty), Ok(false));
        assert_eq!(s.is_superset_of(&empty), Ok(true));
    }

    #[test]
    fn missing_middle_value() {
        let a = set_of(&[1, 4, 9]);
        let b = set_of(&[1, 3, 5, 9, 12]);
        assert_eq!(a.is_subset_of(&b), Ok(false));
    }

    #[test]
    fn value_past_the_end() {
        let a = set_of(&[1, 20]);
        let b = set_of(&[1, 3, 5, 9, 12]);
        assert_eq!(a.is_subset_of(&b), Ok(false));
        assert_eq!(b.is_superset_of(&a), Ok(false));
    }

    #[test]
    fn subset_of_plain_sequence() {
        let s = set_of(&[1, 5, 8]);
        assert_eq!(s.is_subset_of_iter(vec![9, 8, 1, 3, 5, 1]), Ok(true));
        assert_eq!(s.is_subset_of_iter(vec![1, 5]), Ok(false));
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a = set_of(&[3, 1, 2]);
        let mut b = OrderedSet::with_config(Config::new().with_seed(99)).unwrap();
        b.try_extend([2, 3, 1, 3]).unwrap();
        assert_eq!(a.set_eq(&b), Ok(true));
        assert_eq!(a, b);
        assert_ne!(a, set_of(&[1, 2]));
        assert_ne!(a, set_of(&[1, 2, 4]));
        assert_eq!(set_of(&[]), set_of(&[]));
    }

    #[test]
    fn disjoint_sets() {
        let odd = set_of(&[1, 3, 5, 7]);
        let even = set_of(&[2, 4, 6]);
        assert_eq!(odd.is_disjoint(&even), Ok(true));
        assert_eq!(odd.is_disjoint(&set_of(&[])), Ok(true));
        assert_eq!(odd.is_disjoint(&set_of(&[6, 7])), Ok(false));
        assert_eq!(even.is_disjoint(&set_of(&[0, 2])), Ok(false));
    }

    #[test]
    fn comparison_failure_propagates() {
        let mut one = OrderedSet::with_order(Partial, Config::new().with_seed(3)).unwrap();
        one.add(1.0).unwrap();
        // The first value of an empty set is never compared.
        let mut nan = OrderedSet::with_order(Partial, Config::new().with_seed(4)).unwrap();
        nan.add(f64::NAN).unwrap();

        assert_eq!(one.is_subset_of(&nan), Err(Error::Comparison(Incomparable)));
        assert_eq!(one.is_disjoint(&nan), Err(Error::Comparison(Incomparable)));
        assert_eq!(one.set_eq(&nan), Err(Error::Comparison(Incomparable)));
        assert_eq!(
            one.is_subset_of_iter(vec![1.0, f64::NAN]),
            Err(Error::Comparison(Incomparable))
        );
    }
}

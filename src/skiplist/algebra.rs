// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Union, intersection and differences as new sets.
//!
//! Both inputs are merged along level 0 and the surviving values are
//! appended to a fresh set in ascending order. Appending links each new node
//! after the last node of every level it occupies, so building the result
//! takes no searches.

use rand::rngs::StdRng;
use rand_core::RngCore;
use smallvec::smallvec;
use tracing::debug;
use tracing::trace;

use super::arena::HEAD;
use super::set::Frontier;
use super::set::OrderedSet;
use crate::config::DuplicatePolicy;
use crate::error::Error;
use crate::order::OrderRelation;

/// Which parts of a merge end up in the result.
#[derive(Clone, Copy)]
struct Keep {
    /// Values only in `self`.
    left: bool,
    /// Values in both sets.
    both: bool,
    /// Values only in `other`.
    right: bool,
}

impl<T, O: OrderRelation<T>, R: RngCore> OrderedSet<T, O, R> {
    /// Append `value` after every stored value.
    ///
    /// `value` must be greater than everything in the set. `tail` holds the
    /// last node of each level and is updated in place.
    fn push_last(&mut self, value: T, tail: &mut Frontier) -> Result<(), Error<O::Error>> {
        let node_level = self.levels.random_level();
        let idx = self
            .arena
            .alloc(value, node_level)
            .map_err(|_| Error::AllocationFailure)?;

        if node_level > self.level {
            debug!(from = self.level, to = node_level, "ordered_set.grow");
            self.level = node_level;
        }
        for level in 0..=node_level {
            self.arena.set_next(tail[level], level, idx);
            tail[level] = idx;
        }

        self.len += 1;
        self.check_invariants();
        return Ok(());
    }
}

impl<T, O, R> OrderedSet<T, O, R>
where
    T: Clone,
    O: OrderRelation<T> + Clone,
    R: RngCore,
{
    /// Values in either set.
    ///
    /// For values present in both, the configured [`DuplicatePolicy`] picks
    /// the instance: `Upsert` takes `other`'s, `Set` keeps `self`'s. Both
    /// sets must be ordered by the same relation.
    pub fn union<R2>(
        &self,
        other: &OrderedSet<T, O, R2>,
    ) -> Result<OrderedSet<T, O, StdRng>, Error<O::Error>> {
        let keep = Keep {
            left: true,
            both: true,
            right: true,
        };
        return self.merge(other, keep);
    }

    /// Values in both sets, with instances picked as in [`union`](Self::union).
    pub fn intersection<R2>(
        &self,
        other: &OrderedSet<T, O, R2>,
    ) -> Result<OrderedSet<T, O, StdRng>, Error<O::Error>> {
        let keep = Keep {
            left: false,
            both: true,
            right: false,
        };
        return self.merge(other, keep);
    }

    /// Values of `self` absent from `other`.
    pub fn difference<R2>(
        &self,
        other: &OrderedSet<T, O, R2>,
    ) -> Result<OrderedSet<T, O, StdRng>, Error<O::Error>> {
        let keep = Keep {
            left: true,
            both: false,
            right: false,
        };
        return self.merge(other, keep);
    }

    /// Values in exactly one of the sets.
    pub fn symmetric_difference<R2>(
        &self,
        other: &OrderedSet<T, O, R2>,
    ) -> Result<OrderedSet<T, O, StdRng>, Error<O::Error>> {
        let keep = Keep {
            left: true,
            both: false,
            right: true,
        };
        return self.merge(other, keep);
    }

    // --- Merge ---

    /// Walk both sets in step and append the kept values to a new set with
    /// `self`'s order and configuration.
    fn merge<R2>(
        &self,
        other: &OrderedSet<T, O, R2>,
        keep: Keep,
    ) -> Result<OrderedSet<T, O, StdRng>, Error<O::Error>> {
        let config = self.config.clone();
        let rng: StdRng = config.rng();
        let mut out = OrderedSet::from_parts(self.order.clone(), rng, config);
        let mut tail: Frontier = smallvec![HEAD; out.config.max_level];

        let mut mine = self.iter();
        let mut theirs = other.iter();
        let mut a = mine.next();
        let mut b = theirs.next();

        loop {
            match (a, b) {
                (Some(x), Some(y)) => {
                    if self.order.less_than(x, y).map_err(Error::Comparison)? {
                        if keep.left {
                            out.push_last(x.clone(), &mut tail)?;
                        }
                        a = mine.next();
                    } else if self.order.equal(x, y).map_err(Error::Comparison)? {
                        if keep.both {
                            let chosen = match self.config.duplicates {
                                DuplicatePolicy::Upsert => y,
                                DuplicatePolicy::Set => x,
                            };
                            out.push_last(chosen.clone(), &mut tail)?;
                        }
                        a = mine.next();
                        b = theirs.next();
                    } else {
                        if keep.right {
                            out.push_last(y.clone(), &mut tail)?;
                        }
                        b = theirs.next();
                    }
                }
                (Some(x), None) if keep.left => {
                    out.push_last(x.clone(), &mut tail)?;
                    a = mine.next();
                }
                (None, Some(y)) if keep.right => {
                    out.push_last(y.clone(), &mut tail)?;
                    b = theirs.next();
                }
                _ => break,
            }
        }

        trace!(left = self.len(), right = other.len(), len = out.len(), "ordered_set.merge");
        return Ok(out);
    }
}

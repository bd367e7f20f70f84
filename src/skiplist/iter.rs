// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Ascending traversal along level 0.
//!
//! Every iterator walks the level-0 chain from the header's first successor
//! to the end and then stays exhausted; walking again takes a new iterator.
//! The set cannot be mutated while one of these iterators is alive: [`Iter`]
//! borrows it, [`SharedIter`] holds it behind an `Rc`, and [`IntoIter`] owns
//! it outright.

use std::iter::FusedIterator;
use std::rc::Rc;

use super::arena::Arena;
use super::arena::Idx;
use super::arena::NULL;
use super::set::OrderedSet;

/// Borrowing iterator over a set, in ascending order.
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    current: Idx,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == NULL {
            return None;
        }

        let idx = self.current;
        self.current = self.arena.next(idx, 0);
        self.remaining -= 1;
        return Some(self.arena.value(idx));
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        return Iter {
            arena: self.arena,
            current: self.current,
            remaining: self.remaining,
        };
    }
}

/// Iterator that keeps its set alive through a shared `Rc` handle.
///
/// Yields clones, since the values stay owned by the set.
pub struct SharedIter<T, O, R> {
    set: Rc<OrderedSet<T, O, R>>,
    current: Idx,
    remaining: usize,
}

impl<T: Clone, O, R> Iterator for SharedIter<T, O, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.current == NULL {
            return None;
        }

        let idx = self.current;
        self.current = self.set.arena.next(idx, 0);
        self.remaining -= 1;
        return Some(self.set.arena.value(idx).clone());
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl<T: Clone, O, R> ExactSizeIterator for SharedIter<T, O, R> {}

impl<T: Clone, O, R> FusedIterator for SharedIter<T, O, R> {}

/// Owning iterator, moving values out in ascending order.
pub struct IntoIter<T, O, R> {
    set: OrderedSet<T, O, R>,
    current: Idx,
}

impl<T, O, R> Iterator for IntoIter<T, O, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.current == NULL {
            return None;
        }

        let idx = self.current;
        let node = self.set.arena.node_mut(idx);
        self.current = node.next[0];
        self.set.len -= 1;
        // The chain stays linked; dropping the set skips emptied slots.
        return node.value.take();
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.set.len, Some(self.set.len));
    }
}

impl<T, O, R> ExactSizeIterator for IntoIter<T, O, R> {}

impl<T, O, R> FusedIterator for IntoIter<T, O, R> {}

impl<T, O, R> OrderedSet<T, O, R> {
    /// Iterate over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        return Iter {
            arena: &self.arena,
            current: self.first_idx(),
            remaining: self.len,
        };
    }

    /// Iterate over a shared set, holding a reference count on it until the
    /// iterator is dropped.
    pub fn iter_shared(self: &Rc<Self>) -> SharedIter<T, O, R> {
        return SharedIter {
            set: Rc::clone(self),
            current: self.first_idx(),
            remaining: self.len,
        };
    }
}

impl<'a, T, O, R> IntoIterator for &'a OrderedSet<T, O, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return self.iter();
    }
}

impl<T, O, R> IntoIterator for OrderedSet<T, O, R> {
    type Item = T;
    type IntoIter = IntoIter<T, O, R>;

    fn into_iter(self) -> IntoIter<T, O, R> {
        let current = self.first_idx();
        return IntoIter { set: self, current };
    }
}

// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Bulk population with an explicit failure policy.
//!
//! Under [`BuildPolicy::Rollback`] every change made by a failing extension
//! is recorded and undone in reverse order: new nodes are unlinked and
//! displaced values are put back. Each new node is logged with its
//! predecessors, which are its predecessors again by the time it is undone,
//! so unlinking costs one step per level. Undoing never compares values, so
//! it cannot fail itself. The level is not restored.

use rand_core::RngCore;
use tracing::warn;

use super::arena::Idx;
use super::set::Frontier;
use super::set::OrderedSet;
use super::set::Outcome;
use crate::config::BuildPolicy;
use crate::error::Error;
use crate::order::OrderRelation;

/// One change to undo.
enum Undo<T> {
    Inserted(Idx, Frontier),
    Replaced(Idx, T),
}

impl<T, O: OrderRelation<T>, R: RngCore> OrderedSet<T, O, R> {
    /// Add every value from `items`, in order.
    ///
    /// On failure, [`Config::build`](crate::Config::build) decides what
    /// remains: `Partial` keeps the values added before the failing one,
    /// `Rollback` restores the set to its contents before the call.
    pub fn try_extend<I>(&mut self, items: I) -> Result<(), Error<O::Error>>
    where
        I: IntoIterator<Item = T>,
    {
        let policy = self.config.duplicates;

        if self.config.build == BuildPolicy::Partial {
            for item in items {
                self.insert_with(item, policy)?;
            }
            return Ok(());
        }

        let mut undo: Vec<Undo<T>> = Vec::new();
        for item in items {
            let outcome = match self.insert_with(item, policy) {
                Ok(outcome) => outcome,
                Err(err) => {
                    self.rollback(undo);
                    return Err(err);
                }
            };
            let step = match outcome {
                Outcome::Inserted(idx, frontier) => Undo::Inserted(idx, frontier),
                Outcome::Replaced(idx, old) => Undo::Replaced(idx, old),
                Outcome::Kept => continue,
            };
            if undo.try_reserve(1).is_err() {
                // Put this step back first so the whole batch unwinds.
                self.undo_step(step);
                self.rollback(undo);
                return Err(Error::AllocationFailure);
            }
            undo.push(step);
        }
        return Ok(());
    }
}

impl<T, O, R> OrderedSet<T, O, R> {
    fn rollback(&mut self, undo: Vec<Undo<T>>) {
        if undo.is_empty() {
            return;
        }
        warn!(steps = undo.len(), len = self.len, "ordered_set.rollback");
        for step in undo.into_iter().rev() {
            self.undo_step(step);
        }
        self.check_invariants();
    }

    fn undo_step(&mut self, step: Undo<T>) {
        match step {
            Undo::Inserted(idx, frontier) => {
                self.unlink(idx, &frontier);
                drop(self.arena.release(idx));
                self.len -= 1;
            }
            Undo::Replaced(idx, old) => {
                *self.arena.value_mut(idx) = old;
            }
        }
    }

    /// Unlink node `target` from behind its recorded predecessors.
    fn unlink(&mut self, target: Idx, frontier: &Frontier) {
        for level in 0..=self.arena.level(target) {
            let pred = frontier[level];
            debug_assert_eq!(self.arena.next(pred, level), target);
            let after = self.arena.next(target, level);
            self.arena.set_next(pred, level, after);
        }
    }
}

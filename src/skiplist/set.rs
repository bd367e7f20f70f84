// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! The ordered set: locate, insert, remove and lookup.

use std::convert::Infallible;
use std::fmt;
use std::mem;

use rand::rngs::StdRng;
use rand_core::RngCore;
use smallvec::SmallVec;
use smallvec::smallvec;
use tracing::debug;
use tracing::trace;

use super::arena::Arena;
use super::arena::HEAD;
use super::arena::Idx;
use super::arena::NULL;
use super::level::LevelGenerator;
use crate::config::Config;
use crate::config::DuplicatePolicy;
use crate::config::MAX_LEVEL_LIMIT;
use crate::error::ConfigError;
use crate::error::Error;
use crate::order::Natural;
use crate::order::OrderRelation;

/// The last node visited at each level before descending. Sized for the
/// tallest allowed configuration so searches never allocate.
pub(crate) type Frontier = SmallVec<[Idx; MAX_LEVEL_LIMIT]>;

/// Result of a leveled search.
pub(crate) struct Located {
    /// First node whose value is not less than the probe, or `NULL`.
    pub(crate) successor: Idx,
    /// Predecessor at every level up to `max_level - 1`. Levels above the
    /// container level hold the header.
    pub(crate) frontier: Frontier,
}

/// What an insertion did to the structure.
pub(crate) enum Outcome<T> {
    /// A new node was spliced in after the predecessors in the frontier,
    /// one per level the node occupies.
    Inserted(Idx, Frontier),
    /// An equal value was overwritten; the displaced value is returned.
    Replaced(Idx, T),
    /// An equal value was already present and kept.
    Kept,
}

/// An ordered set of unique values backed by a skip list.
///
/// Values are kept in ascending order under the order relation `O`. Node
/// heights are drawn from the random source `R`.
pub struct OrderedSet<T, O = Natural, R = StdRng> {
    pub(crate) arena: Arena<T>,
    pub(crate) len: usize,
    /// Highest level in use. Never decreases, not even on removal.
    pub(crate) level: usize,
    pub(crate) order: O,
    pub(crate) levels: LevelGenerator<R>,
    pub(crate) config: Config,
}

impl<T: Ord> OrderedSet<T, Natural, StdRng> {
    /// Create an empty set with the default configuration.
    pub fn new() -> Self {
        let config = Config::default();
        let rng = config.rng();
        return Self::from_parts(Natural, rng, config);
    }

    /// Create an empty set ordered by `Ord`.
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        return Self::with_order(Natural, config);
    }

    /// Build a set with the default configuration from a sequence of values.
    ///
    /// Any failure drops the partially built set and returns the error.
    pub fn try_from_iter<I>(items: I) -> Result<Self, Error<Infallible>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::new();
        set.try_extend(items)?;
        return Ok(set);
    }
}

impl<T: Ord> Default for OrderedSet<T, Natural, StdRng> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T, O: OrderRelation<T>> OrderedSet<T, O, StdRng> {
    /// Create an empty set ordered by `order`, seeding levels from `config`.
    pub fn with_order(order: O, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = config.rng();
        return Ok(Self::from_parts(order, rng, config));
    }
}

impl<T, O, R> OrderedSet<T, O, R> {
    pub(crate) fn from_parts(order: O, rng: R, config: Config) -> Self {
        return OrderedSet {
            arena: Arena::new(config.max_level),
            len: 0,
            level: 0,
            order,
            levels: LevelGenerator::new(rng, config.max_level, config.probability),
            config,
        };
    }

    /// Number of values in the set.
    pub fn len(&self) -> usize {
        return self.len;
    }

    /// Return true if the set holds no values.
    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Current top level of the structure, in `0..max_level`.
    ///
    /// Grows as taller nodes are inserted and never shrinks.
    pub fn height(&self) -> usize {
        return self.level;
    }

    pub fn config(&self) -> &Config {
        return &self.config;
    }

    pub fn order(&self) -> &O {
        return &self.order;
    }

    /// Remove every value. The level is kept.
    pub fn clear(&mut self) {
        if self.len > 0 {
            debug!(len = self.len, level = self.level, "ordered_set.clear");
        }
        self.arena.reset();
        self.len = 0;
    }

    /// The smallest value, if any.
    pub fn first(&self) -> Option<&T> {
        let idx = self.first_idx();
        if idx == NULL {
            return None;
        }
        return Some(self.arena.value(idx));
    }

    /// Remove and return the smallest value.
    ///
    /// The first node heads the chain at every level it occupies, so no
    /// comparison is needed.
    pub fn pop_first(&mut self) -> Option<T> {
        let idx = self.first_idx();
        if idx == NULL {
            return None;
        }
        for level in 0..=self.arena.level(idx) {
            let after = self.arena.next(idx, level);
            self.arena.set_next(HEAD, level, after);
        }
        let value = self.arena.release(idx);
        self.len -= 1;
        trace!(len = self.len, "ordered_set.pop_first");
        self.check_invariants();
        return Some(value);
    }

    /// Index of the smallest value, or `NULL`.
    pub(crate) fn first_idx(&self) -> Idx {
        return self.arena.next(HEAD, 0);
    }

    // --- Invariant checking ---

    #[cfg(debug_assertions)]
    pub(crate) fn check_invariants(&self) {
        // Invariant 1: level-0 count matches len
        let mut count = 0usize;
        let mut idx = self.first_idx();
        while idx != NULL {
            count += 1;
            idx = self.arena.next(idx, 0);
        }
        assert_eq!(
            count, self.len,
            "INVARIANT VIOLATED: level-0 count={} != len()={}",
            count, self.len
        );

        // Invariant 2: level stays below the cap, nothing links above it
        assert!(self.level < self.config.max_level);
        for level in self.level + 1..self.config.max_level {
            assert_eq!(
                self.arena.next(HEAD, level),
                NULL,
                "INVARIANT VIOLATED: header links at level {} above level {}",
                level,
                self.level
            );
        }

        // Invariant 3: the chain at each level is a subsequence of the one below
        for level in 1..=self.level {
            let mut below = self.arena.next(HEAD, level - 1);
            let mut idx = self.arena.next(HEAD, level);
            while idx != NULL {
                while below != NULL && below != idx {
                    below = self.arena.next(below, level - 1);
                }
                assert_eq!(
                    below, idx,
                    "INVARIANT VIOLATED: node {} linked at level {} but not at level {}",
                    idx,
                    level,
                    level - 1
                );
                idx = self.arena.next(idx, level);
            }
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    pub(crate) fn check_invariants(&self) {}
}

impl<T, O: OrderRelation<T>, R: RngCore> OrderedSet<T, O, R> {
    /// Create an empty set from an order relation and a random source.
    ///
    /// `config.seed` is ignored; `rng` is used as given.
    pub fn with_parts(order: O, rng: R, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        return Ok(Self::from_parts(order, rng, config));
    }

    // --- Core operations ---

    /// Walk from the top level down, recording the predecessor frontier of
    /// `probe` and the first node not less than it.
    pub(crate) fn locate(&self, probe: &T) -> Result<Located, Error<O::Error>> {
        let mut frontier: Frontier = smallvec![HEAD; self.config.max_level];
        let mut x = HEAD;
        let mut next = NULL;

        for level in (0..=self.level).rev() {
            next = self.arena.next(x, level);
            while next != NULL
                && self
                    .order
                    .less_than(self.arena.value(next), probe)
                    .map_err(Error::Comparison)?
            {
                x = next;
                next = self.arena.next(x, level);
            }
            frontier[level] = x;
        }

        return Ok(Located {
            successor: next,
            frontier,
        });
    }

    /// Return whether the node at `idx` holds a value equal to `probe`.
    fn is_match(&self, idx: Idx, probe: &T) -> Result<bool, Error<O::Error>> {
        if idx == NULL {
            return Ok(false);
        }
        return self
            .order
            .equal(self.arena.value(idx), probe)
            .map_err(Error::Comparison);
    }

    /// Insert `value`, resolving an equal stored value with `policy`.
    ///
    /// Every comparison happens before the first write, so an error leaves
    /// the set as it was.
    pub(crate) fn insert_with(
        &mut self,
        value: T,
        policy: DuplicatePolicy,
    ) -> Result<Outcome<T>, Error<O::Error>> {
        let located = self.locate(&value)?;
        let found = located.successor;

        if self.is_match(found, &value)? {
            return match policy {
                DuplicatePolicy::Upsert => {
                    let old = mem::replace(self.arena.value_mut(found), value);
                    trace!(len = self.len, "ordered_set.replace");
                    Ok(Outcome::Replaced(found, old))
                }
                DuplicatePolicy::Set => Ok(Outcome::Kept),
            };
        }

        let (idx, frontier) = self.splice(value, located.frontier)?;
        return Ok(Outcome::Inserted(idx, frontier));
    }

    /// Link a new node holding `value` after the nodes in `frontier`.
    ///
    /// Returns the node and its predecessors at each of its levels.
    fn splice(
        &mut self,
        value: T,
        mut frontier: Frontier,
    ) -> Result<(Idx, Frontier), Error<O::Error>> {
        let node_level = self.levels.random_level();
        let idx = self
            .arena
            .alloc(value, node_level)
            .map_err(|_| Error::AllocationFailure)?;

        if node_level > self.level {
            for level in self.level + 1..=node_level {
                frontier[level] = HEAD;
            }
            debug!(from = self.level, to = node_level, "ordered_set.grow");
            self.level = node_level;
        }

        for level in 0..=node_level {
            let pred = frontier[level];
            let after = self.arena.next(pred, level);
            self.arena.set_next(idx, level, after);
            self.arena.set_next(pred, level, idx);
        }

        self.len += 1;
        trace!(level = node_level, len = self.len, "ordered_set.insert");
        self.check_invariants();
        frontier.truncate(node_level + 1);
        return Ok((idx, frontier));
    }

    /// Add `value` to the set.
    ///
    /// If an equal value is present, the configured [`DuplicatePolicy`]
    /// decides whether it is replaced or kept. Returns true if a new node
    /// was created.
    pub fn add(&mut self, value: T) -> Result<bool, Error<O::Error>> {
        let policy = self.config.duplicates;
        return match self.insert_with(value, policy)? {
            Outcome::Inserted(..) => Ok(true),
            Outcome::Replaced(..) | Outcome::Kept => Ok(false),
        };
    }

    /// Add `value`, replacing an equal stored value whatever the policy.
    /// Returns the displaced value.
    pub fn replace(&mut self, value: T) -> Result<Option<T>, Error<O::Error>> {
        return match self.insert_with(value, DuplicatePolicy::Upsert)? {
            Outcome::Replaced(_, old) => Ok(Some(old)),
            Outcome::Inserted(..) | Outcome::Kept => Ok(None),
        };
    }

    /// Remove the value equal to `probe` and return it, or `None` if absent.
    pub fn take(&mut self, probe: &T) -> Result<Option<T>, Error<O::Error>> {
        let located = self.locate(probe)?;
        let target = located.successor;
        if !self.is_match(target, probe)? {
            return Ok(None);
        }

        for level in 0..=self.arena.level(target) {
            let pred = located.frontier[level];
            if self.arena.next(pred, level) == target {
                let after = self.arena.next(target, level);
                self.arena.set_next(pred, level, after);
            }
        }

        let value = self.arena.release(target);
        self.len -= 1;
        trace!(len = self.len, "ordered_set.remove");
        self.check_invariants();
        return Ok(Some(value));
    }

    /// Remove the value equal to `probe`, failing with `NotFound` if absent.
    pub fn remove(&mut self, probe: &T) -> Result<T, Error<O::Error>> {
        return match self.take(probe)? {
            Some(value) => Ok(value),
            None => Err(Error::NotFound),
        };
    }

    /// Remove the value equal to `probe` if present. Returns true if a
    /// value was removed.
    pub fn discard(&mut self, probe: &T) -> Result<bool, Error<O::Error>> {
        return Ok(self.take(probe)?.is_some());
    }

    /// Return whether a value equal to `probe` is present.
    pub fn contains(&self, probe: &T) -> Result<bool, Error<O::Error>> {
        let located = self.locate(probe)?;
        return self.is_match(located.successor, probe);
    }

    /// Return the stored value equal to `probe`.
    ///
    /// Under [`DuplicatePolicy::Upsert`] the stored value is the most
    /// recently added one, which may differ from `probe` in everything the
    /// order relation ignores.
    pub fn get(&self, probe: &T) -> Result<&T, Error<O::Error>> {
        let located = self.locate(probe)?;
        if self.is_match(located.successor, probe)? {
            return Ok(self.arena.value(located.successor));
        }
        return Err(Error::NotFound);
    }
}

impl<T: fmt::Debug, O, R> fmt::Debug for OrderedSet<T, O, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_set().entries(self.iter()).finish();
    }
}

impl<T: fmt::Display, O, R> fmt::Display for OrderedSet<T, O, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "OrderedSet()");
        }
        write!(f, "OrderedSet({{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        return write!(f, "}})");
    }
}

impl<T, O, R> Drop for OrderedSet<T, O, R> {
    fn drop(&mut self) {
        self.arena.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Incomparable;
    use crate::order::Partial;
    use rand::SeedableRng;
    use std::rc::Rc;

    fn seeded() -> OrderedSet<i32> {
        return OrderedSet::with_config(Config::new().with_seed(1)).unwrap();
    }

    fn items<T: Clone, O, R>(set: &OrderedSet<T, O, R>) -> Vec<T> {
        return set.iter().cloned().collect();
    }

    /// Levels of the nodes along level 0, in order.
    fn towers<T, O, R>(set: &OrderedSet<T, O, R>) -> Vec<usize> {
        let mut out = Vec::new();
        let mut idx = set.first_idx();
        while idx != NULL {
            out.push(set.arena.level(idx));
            idx = set.arena.next(idx, 0);
        }
        return out;
    }

    /// A value ordered by `key` alone, tagged so replacements are visible.
    #[derive(Debug, Clone)]
    struct Tagged {
        key: i32,
        tag: &'static str,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            return self.key == other.key;
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            return Some(self.cmp(other));
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            return self.key.cmp(&other.key);
        }
    }

    fn tagged(key: i32, tag: &'static str) -> Tagged {
        return Tagged { key, tag };
    }

    #[test]
    fn empty_set() {
        let set = seeded();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert_eq!(set.height(), 0);
        assert_eq!(set.contains(&3), Ok(false));
        assert_eq!(set.get(&3), Err(Error::NotFound));
        assert_eq!(items(&set), Vec::<i32>::new());
    }

    #[test]
    fn insert_remove_scenario() {
        let config = Config::new()
            .with_seed(9)
            .with_duplicates(DuplicatePolicy::Set);
        let mut set = OrderedSet::with_config(config).unwrap();
        for value in [5, 3, 8, 3, 1] {
            set.add(value).unwrap();
        }
        assert_eq!(set.len(), 4);
        assert_eq!(items(&set), vec![1, 3, 5, 8]);

        assert_eq!(set.remove(&3), Ok(3));
        assert_eq!(set.len(), 3);
        assert_eq!(items(&set), vec![1, 5, 8]);

        assert_eq!(set.remove(&3), Err(Error::NotFound));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn add_reports_new_nodes() {
        let mut set = seeded();
        assert_eq!(set.add(4), Ok(true));
        assert_eq!(set.add(4), Ok(false));
        assert_eq!(set.add(2), Ok(true));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn upsert_replaces_stored_instance() {
        let mut set = OrderedSet::with_config(Config::new().with_seed(3)).unwrap();
        set.add(tagged(1, "first")).unwrap();
        set.add(tagged(1, "second")).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&tagged(1, "probe")).unwrap().tag, "second");
    }

    #[test]
    fn set_policy_keeps_stored_instance() {
        let config = Config::new()
            .with_seed(3)
            .with_duplicates(DuplicatePolicy::Set);
        let mut set = OrderedSet::with_config(config).unwrap();
        set.add(tagged(1, "first")).unwrap();
        set.add(tagged(1, "second")).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&tagged(1, "probe")).unwrap().tag, "first");
    }

    #[test]
    fn replace_returns_displaced_value() {
        let config = Config::new()
            .with_seed(3)
            .with_duplicates(DuplicatePolicy::Set);
        let mut set = OrderedSet::with_config(config).unwrap();
        assert!(set.replace(tagged(7, "a")).unwrap().is_none());
        let old = set.replace(tagged(7, "b")).unwrap().unwrap();
        assert_eq!(old.tag, "a");
        assert_eq!(set.get(&tagged(7, "")).unwrap().tag, "b");
    }

    #[test]
    fn take_returns_stored_value() {
        let mut set = OrderedSet::with_config(Config::new().with_seed(5)).unwrap();
        set.add(tagged(2, "stored")).unwrap();
        let taken = set.take(&tagged(2, "probe")).unwrap().unwrap();
        assert_eq!(taken.tag, "stored");
        assert!(set.take(&tagged(2, "probe")).unwrap().is_none());
    }

    #[test]
    fn discard_is_lenient() {
        let mut set = seeded();
        set.add(1).unwrap();
        assert_eq!(set.discard(&9), Ok(false));
        assert_eq!(set.len(), 1);
        assert_eq!(set.discard(&1), Ok(true));
        assert_eq!(set.discard(&1), Ok(false));
        assert!(set.is_empty());
    }

    #[test]
    fn round_trip_membership() {
        let mut set = seeded();
        for x in 0..200 {
            set.add(x * 7 % 200).unwrap();
            assert_eq!(set.contains(&(x * 7 % 200)), Ok(true));
        }
        for x in 0..200 {
            set.remove(&x).unwrap();
            assert_eq!(set.contains(&x), Ok(false));
        }
        assert!(set.is_empty());
    }

    #[test]
    fn tower_sizes_match_links() {
        let mut set = seeded();
        for x in (0..500).rev() {
            set.add(x).unwrap();
        }
        let heights = towers(&set);
        assert_eq!(heights.len(), 500);
        assert!(heights.iter().all(|&h| h <= set.height()));
        assert_eq!(heights.iter().copied().max(), Some(set.height()));
        set.check_invariants();
    }

    #[test]
    fn height_never_shrinks() {
        let mut set = seeded();
        let mut last = 0;
        for x in 0..300 {
            set.add(x).unwrap();
            assert!(set.height() >= last);
            last = set.height();
        }
        assert!(last > 0);
        for x in 0..300 {
            set.remove(&x).unwrap();
            assert_eq!(set.height(), last);
        }
        assert!(set.height() < set.config().max_level);
    }

    #[test]
    fn single_level_degrades_to_list() {
        let config = Config::new().with_seed(2).with_max_level(1);
        let mut set = OrderedSet::with_config(config).unwrap();
        for x in [9, 4, 6, 1] {
            set.add(x).unwrap();
        }
        assert_eq!(set.height(), 0);
        assert_eq!(items(&set), vec![1, 4, 6, 9]);
        assert_eq!(set.remove(&6), Ok(6));
        assert_eq!(items(&set), vec![1, 4, 9]);
    }

    #[test]
    fn failed_comparison_leaves_set_unchanged() {
        let config = Config::new().with_seed(4);
        let mut set = OrderedSet::with_order(Partial, config).unwrap();
        for x in [1.0, 2.5, -3.0, 8.0] {
            set.add(x).unwrap();
        }
        let before: Vec<f64> = items(&set);
        let height = set.height();

        assert_eq!(set.add(f64::NAN), Err(Error::Comparison(Incomparable)));
        assert_eq!(set.remove(&f64::NAN), Err(Error::Comparison(Incomparable)));
        assert_eq!(set.discard(&f64::NAN), Err(Error::Comparison(Incomparable)));
        assert_eq!(set.contains(&f64::NAN), Err(Error::Comparison(Incomparable)));
        assert!(set.get(&f64::NAN).unwrap_err().is_comparison());

        assert_eq!(set.len(), 4);
        assert_eq!(items(&set), before);
        assert_eq!(set.height(), height);
        set.check_invariants();
    }

    #[test]
    fn injected_rng_fixes_heights() {
        let build = || {
            let rng = StdRng::seed_from_u64(77);
            let mut set = OrderedSet::with_parts(Natural, rng, Config::new()).unwrap();
            for x in 0..100 {
                set.add(x).unwrap();
            }
            return towers(&set);
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut set = seeded();
        for x in 0..10 {
            set.add(x).unwrap();
        }
        let slots = set.arena.slots();
        for x in 0..5 {
            set.remove(&x).unwrap();
        }
        for x in 10..15 {
            set.add(x).unwrap();
        }
        assert_eq!(set.arena.slots(), slots);
        assert_eq!(items(&set), (5..15).collect::<Vec<_>>());
    }

    #[test]
    fn clear_keeps_level() {
        let mut set = seeded();
        for x in 0..100 {
            set.add(x).unwrap();
        }
        let height = set.height();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.height(), height);
        assert_eq!(items(&set), Vec::<i32>::new());
        set.add(3).unwrap();
        assert_eq!(items(&set), vec![3]);
    }

    #[test]
    fn drop_releases_every_value() {
        let values: Vec<Rc<u32>> = (0..5000).map(Rc::new).collect();
        let mut set = OrderedSet::with_config(Config::new().with_seed(11)).unwrap();
        set.try_extend(values.iter().rev().cloned()).unwrap();
        assert_eq!(set.len(), 5000);
        assert!(values.iter().all(|v| Rc::strong_count(v) == 2));

        set.remove(&values[10]).unwrap();
        assert_eq!(Rc::strong_count(&values[10]), 1);

        drop(set);
        assert!(values.iter().all(|v| Rc::strong_count(v) == 1));
    }

    #[test]
    fn pop_first_drains_in_order() {
        let mut set = seeded();
        assert_eq!(set.pop_first(), None);
        for x in [40, 10, 30, 20] {
            set.add(x).unwrap();
        }
        assert_eq!(set.first(), Some(&10));
        assert_eq!(set.pop_first(), Some(10));
        assert_eq!(set.pop_first(), Some(20));
        assert_eq!(set.len(), 2);
        assert_eq!(items(&set), vec![30, 40]);
        set.add(5).unwrap();
        assert_eq!(set.first(), Some(&5));
        assert_eq!(set.pop_first(), Some(5));
        assert_eq!(set.pop_first(), Some(30));
        assert_eq!(set.pop_first(), Some(40));
        assert_eq!(set.pop_first(), None);
        assert!(set.is_empty());
    }

    #[test]
    fn tallest_config_searches_inline() {
        let config = Config::new()
            .with_seed(6)
            .with_max_level(MAX_LEVEL_LIMIT)
            .with_probability(0.5);
        let mut set = OrderedSet::with_config(config).unwrap();
        for x in 0..200 {
            set.add(x).unwrap();
        }
        let located = set.locate(&100).unwrap();
        assert_eq!(located.frontier.len(), MAX_LEVEL_LIMIT);
        assert!(!located.frontier.spilled());
        assert_eq!(set.contains(&100), Ok(true));
    }

    #[test]
    fn insert_reports_its_predecessors() {
        let mut set = seeded();
        for x in [10, 30] {
            set.add(x).unwrap();
        }
        let outcome = set.insert_with(20, DuplicatePolicy::Set).unwrap();
        let Outcome::Inserted(idx, frontier) = outcome else {
            panic!("expected a new node");
        };
        assert_eq!(frontier.len(), set.arena.level(idx) + 1);
        for (level, &pred) in frontier.iter().enumerate() {
            assert_eq!(set.arena.next(pred, level), idx);
        }
    }

    #[test]
    fn display_and_debug() {
        let mut set = seeded();
        assert_eq!(set.to_string(), "OrderedSet()");
        assert_eq!(format!("{:?}", set), "{}");
        for x in [3, 1, 2] {
            set.add(x).unwrap();
        }
        assert_eq!(set.to_string(), "OrderedSet({1, 2, 3})");
        assert_eq!(format!("{:?}", set), "{1, 2, 3}");
    }
}

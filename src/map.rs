// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! A map that iterates in ascending key order.
//!
//! Keys are kept twice: once in an [`OrderedSet`] for ordering and once in a
//! hash map next to their values. Lookups go to the hash map, iteration walks
//! the ordered set. `Ord`, `Eq` and `Hash` on `K` must agree.

use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::config::Config;
use crate::error::ConfigError;
use crate::error::Error;
use crate::skiplist::OrderedSet;

pub struct SortedMap<K, V> {
    keys: OrderedSet<K>,
    values: FxHashMap<K, V>,
}

impl<K: Ord + Hash + Clone, V> SortedMap<K, V> {
    pub fn new() -> SortedMap<K, V> {
        return SortedMap {
            keys: OrderedSet::new(),
            values: FxHashMap::default(),
        };
    }

    /// Create an empty map whose key set uses `config`.
    pub fn with_config(config: Config) -> Result<SortedMap<K, V>, ConfigError> {
        return Ok(SortedMap {
            keys: OrderedSet::with_config(config)?,
            values: FxHashMap::default(),
        });
    }

    /// Build a map from key-value pairs. Later pairs win on repeated keys.
    pub fn try_from_iter<I>(items: I) -> Result<SortedMap<K, V>, Error<Infallible>>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = SortedMap::new();
        for (key, value) in items {
            map.insert(key, value)?;
        }
        return Ok(map);
    }

    pub fn len(&self) -> usize {
        return self.values.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.values.is_empty();
    }

    /// Insert a value, returning the one it displaced.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, Error<Infallible>> {
        if let Some(slot) = self.values.get_mut(&key) {
            return Ok(Some(std::mem::replace(slot, value)));
        }
        self.keys.add(key.clone())?;
        self.values.insert(key, value);
        return Ok(None);
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        return self.values.get(key);
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        return self.values.get_mut(key);
    }

    pub fn contains_key(&self, key: &K) -> bool {
        return self.values.contains_key(key);
    }

    /// Remove a key, failing with `NotFound` if it is absent.
    pub fn remove(&mut self, key: &K) -> Result<V, Error<Infallible>> {
        let Some(value) = self.values.remove(key) else {
            return Err(Error::NotFound);
        };
        self.keys.discard(key)?;
        return Ok(value);
    }

    /// Iterate over entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        return self
            .keys
            .iter()
            .filter_map(|key| self.values.get(key).map(|value| (key, value)));
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        return self.keys.iter();
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        return self.iter().map(|(_, value)| value);
    }
}

impl<K: Ord + Hash + Clone, V> Default for SortedMap<K, V> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<K: Ord + Hash + Clone + fmt::Debug, V: fmt::Debug> fmt::Debug for SortedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_map().entries(self.iter()).finish();
    }
}

impl<K: Ord + Hash + Clone + fmt::Display, V: fmt::Display> fmt::Display for SortedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "SortedMap()");
        }
        write!(f, "SortedMap({{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        return write!(f, "}})");
    }
}

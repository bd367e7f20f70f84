// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Skipset - ordered sets over a probabilistic skip list.
//!
//! Values are ordered by a caller-supplied [`OrderRelation`] that is allowed
//! to fail. A failed comparison aborts the operation and leaves the set
//! exactly as it was.
//!
//! # Quick Start
//!
//! ```
//! use skipset::{Config, DuplicatePolicy, Error, OrderedSet};
//!
//! let config = Config::new().with_duplicates(DuplicatePolicy::Set);
//! let mut set = OrderedSet::with_config(config).unwrap();
//! for x in [5, 3, 8, 3, 1] {
//!     set.add(x).unwrap();
//! }
//! assert_eq!(set.len(), 4);
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 8]);
//!
//! set.remove(&3).unwrap();
//! assert_eq!(set.remove(&3), Err(Error::NotFound));
//! assert_eq!(set.to_string(), "OrderedSet({1, 5, 8})");
//! ```

pub mod config;
pub mod error;
pub mod map;
pub mod order;
pub mod skiplist;

pub use config::BuildPolicy;
pub use config::Config;
pub use config::DuplicatePolicy;
pub use error::ConfigError;
pub use error::Error;
pub use map::SortedMap;
pub use order::OrderRelation;
pub use skiplist::OrderedSet;

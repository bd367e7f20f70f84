// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Skip list engine behind [`OrderedSet`].
//!
//! A classic skip list with one value per node. Every node sits on level 0;
//! each level above holds a random subset of the one below, so a search can
//! skip over long runs of values before descending.
//!
//! ```text
//! Level 2: HEAD ----------------> 5 ------------------------> NULL
//! Level 1: HEAD ------> 2 ------> 5 -------------> 11 ------> NULL
//! Level 0: HEAD -> 1 -> 2 -> 3 -> 5 -> 7 -> 8 ---> 11 -> 13 -> NULL
//! ```
//!
//! # Operations
//!
//! - `add(value)` / `replace(value)`: O(log n) expected
//! - `remove(value)` / `discard(value)` / `take(value)`: O(log n) expected
//! - `contains(value)` / `get(value)`: O(log n) expected
//! - `pop_first()` / `first()`: O(1) expected
//! - `is_subset_of(other)` / `set_eq(other)` / `is_disjoint(other)`: O(n + m)
//! - `union(other)` and the other merges: O(n + m), no searches
//! - `iter()`: O(1) per step, ascending
//! - `len()` / `height()`: O(1)
//!
//! # Search
//!
//! Every operation starts from the same leveled search. From the top level
//! down, advance while the next value is less than the probe, then record
//! the node where the walk stopped. The recorded nodes form the predecessor
//! frontier: inserting splices a new node in right after them, removing
//! unlinks the node right after them.
//!
//! # Storage
//!
//! Nodes live in an arena and link by `u32` index. Slot 0 is the header.
//! Removed slots are recycled through a free list. Dropping the set walks
//! level 0 once.

mod algebra;
mod arena;
mod extend;
mod iter;
pub mod level;
mod set;
mod subset;

pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::SharedIter;
pub use level::LevelGenerator;
pub use set::OrderedSet;

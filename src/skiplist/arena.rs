// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Index-addressed node storage.
//!
//! Nodes live in a growable arena and link to each other by index. Slot 0 is
//! the header, which holds no value and carries a link at every level.
//! Released slots go on a free list and are reused by later allocations.

use std::collections::TryReserveError;

use smallvec::SmallVec;
use smallvec::smallvec;

/// Node index type. u32 saves space vs usize on 64-bit.
pub(crate) type Idx = u32;

/// Null index marker.
pub(crate) const NULL: Idx = Idx::MAX;

/// Index of the header node.
pub(crate) const HEAD: Idx = 0;

/// Forward links of one node, one per level it occupies.
pub(crate) type Links = SmallVec<[Idx; 4]>;

/// A node in the arena.
pub(crate) struct Node<T> {
    /// `None` for the header and for free slots.
    pub(crate) value: Option<T>,
    /// `next[level]` is the following node at that level. A node at level
    /// `l` has exactly `l + 1` links.
    pub(crate) next: Links,
}

/// Raised when the arena cannot grow.
#[derive(Debug)]
pub(crate) struct AllocError;

impl From<TryReserveError> for AllocError {
    fn from(_: TryReserveError) -> Self {
        return AllocError;
    }
}

impl From<smallvec::CollectionAllocErr> for AllocError {
    fn from(_: smallvec::CollectionAllocErr) -> Self {
        return AllocError;
    }
}

pub(crate) struct Arena<T> {
    nodes: Vec<Node<T>>,
    /// Invariant: `free.capacity() >= nodes.len()`, so `release` never allocates.
    free: Vec<Idx>,
}

impl<T> Arena<T> {
    /// Create an arena holding only a header with `max_level` null links.
    pub(crate) fn new(max_level: usize) -> Arena<T> {
        let head = Node {
            value: None,
            next: smallvec![NULL; max_level],
        };
        let mut nodes = Vec::with_capacity(1);
        nodes.push(head);
        return Arena {
            nodes,
            free: Vec::with_capacity(1),
        };
    }

    // --- Node access helpers ---

    pub(crate) fn node_mut(&mut self, idx: Idx) -> &mut Node<T> {
        return &mut self.nodes[idx as usize];
    }

    /// Follow the link of `idx` at `level`.
    pub(crate) fn next(&self, idx: Idx, level: usize) -> Idx {
        return self.nodes[idx as usize].next[level];
    }

    pub(crate) fn set_next(&mut self, idx: Idx, level: usize, to: Idx) {
        self.nodes[idx as usize].next[level] = to;
    }

    /// Level of a node, i.e. its highest link index.
    pub(crate) fn level(&self, idx: Idx) -> usize {
        return self.nodes[idx as usize].next.len() - 1;
    }

    /// Value of a live node.
    pub(crate) fn value(&self, idx: Idx) -> &T {
        return match &self.nodes[idx as usize].value {
            Some(value) => value,
            None => unreachable!("node {} holds no value", idx),
        };
    }

    pub(crate) fn value_mut(&mut self, idx: Idx) -> &mut T {
        return match &mut self.nodes[idx as usize].value {
            Some(value) => value,
            None => unreachable!("node {} holds no value", idx),
        };
    }

    // --- Allocation ---

    /// Allocate an unlinked node at `level` holding `value`.
    ///
    /// On failure the arena is unchanged and `value` is dropped.
    pub(crate) fn alloc(&mut self, value: T, level: usize) -> Result<Idx, AllocError> {
        let mut next = Links::new();
        next.try_reserve(level + 1)?;
        next.extend(std::iter::repeat(NULL).take(level + 1));

        if let Some(idx) = self.free.pop() {
            let node = self.node_mut(idx);
            node.value = Some(value);
            node.next = next;
            return Ok(idx);
        }

        if self.nodes.len() >= NULL as usize {
            return Err(AllocError);
        }
        self.nodes.try_reserve(1)?;
        let wanted = self.nodes.len() + 1;
        if self.free.capacity() < wanted {
            self.free.try_reserve(wanted - self.free.len())?;
        }
        let idx = self.nodes.len() as Idx;
        self.nodes.push(Node {
            value: Some(value),
            next,
        });
        return Ok(idx);
    }

    /// Release a node that is no longer linked, returning its value.
    pub(crate) fn release(&mut self, idx: Idx) -> T {
        let node = self.node_mut(idx);
        let value = node.value.take();
        node.next = Links::new();
        self.free.push(idx);
        return match value {
            Some(value) => value,
            None => unreachable!("node {} released twice", idx),
        };
    }

    /// Drop every value and return to a lone header.
    ///
    /// Walks level 0 one node at a time; no recursion however long the chain.
    /// Slots whose value was already moved out are skipped over.
    pub(crate) fn reset(&mut self) {
        let mut idx = self.nodes[HEAD as usize].next[0];
        while idx != NULL {
            let node = &mut self.nodes[idx as usize];
            idx = node.next[0];
            drop(node.value.take());
        }
        self.nodes.truncate(1);
        self.free.clear();
        for link in self.nodes[HEAD as usize].next.iter_mut() {
            *link = NULL;
        }
    }

    /// Number of slots, including the header and free slots.
    #[cfg(test)]
    pub(crate) fn slots(&self) -> usize {
        return self.nodes.len();
    }

    /// Number of slots waiting for reuse.
    #[cfg(test)]
    pub(crate) fn free_slots(&self) -> usize {
        return self.free.len();
    }
}

//! Payload-indexed vertex storage.
//!
//! Payloads live in a dense `Vec` in insertion order so the "all payloads"
//! view is a plain slice. Each vertex also owns a stable [`NodeKey`], a slot
//! in a free-list backed table, which the edge index uses for adjacency.
//! Keys never move when another vertex is removed; only the dense position
//! of later vertices shifts down by one.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `lookup` | \(O(n)\) | comparator scan over the dense payload slice |
//! | `reserve_one` + `push` | \(O(1)\) amortized | reuses a free slot when one exists |
//! | `detach` | \(O(n)\) | stable removal keeps insertion order |
//! | `payload` | \(O(1)\) | slot -> dense position -> payload |

use std::cmp::Ordering;

use crate::error::Result;

/// Stable handle of a vertex inside one graph.
///
/// Valid from insertion until the vertex is detached; the slot may then be
/// reused by a later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeKey(usize);

impl NodeKey {
    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

enum Slot {
    /// Dense position of the vertex in `payloads`/`order`.
    Occupied(usize),
    /// Next free slot.
    Free(Option<usize>),
}

pub(crate) struct NodeTable<T> {
    payloads: Vec<T>,
    /// Parallel to `payloads`: the key of each dense position.
    order: Vec<NodeKey>,
    slots: Vec<Slot>,
    free_head: Option<usize>,
}

impl<T> NodeTable<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            payloads: Vec::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            free_head: None,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.payloads.len()
    }

    /// Upper bound (exclusive) on key indices; sizes traversal scratch buffers.
    #[inline]
    pub(crate) fn key_bound(&self) -> usize {
        self.slots.len()
    }

    /// Linear comparator scan. `compare` is called as `compare(probe, stored)`.
    pub(crate) fn lookup<C>(&self, compare: &C, probe: &T) -> Option<NodeKey>
    where
        C: Fn(&T, &T) -> Ordering,
    {
        self.payloads
            .iter()
            .position(|stored| compare(probe, stored) == Ordering::Equal)
            .map(|pos| self.order[pos])
    }

    /// Reserves storage for one more vertex so the following [`NodeTable::push`]
    /// cannot allocate. On `NoMemory` the table is unchanged.
    pub(crate) fn reserve_one(&mut self) -> Result<()> {
        self.payloads.try_reserve(1)?;
        self.order.try_reserve(1)?;
        if self.free_head.is_none() {
            self.slots.try_reserve(1)?;
        }
        Ok(())
    }

    /// Appends a vertex, reusing a free slot when one exists.
    pub(crate) fn push(&mut self, payload: T) -> NodeKey {
        let pos = self.payloads.len();
        let idx = match self.free_head {
            Some(idx) => {
                self.free_head = match self.slots[idx] {
                    Slot::Free(next) => next,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                self.slots[idx] = Slot::Occupied(pos);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(pos));
                self.slots.len() - 1
            }
        };

        let key = NodeKey(idx);
        self.payloads.push(payload);
        self.order.push(key);
        key
    }

    /// Removes a vertex from the ordered sequence and frees its slot.
    ///
    /// The caller must already have purged every edge touching `key`.
    pub(crate) fn detach(&mut self, key: NodeKey) -> T {
        let pos = self.position(key);
        let payload = self.payloads.remove(pos);
        self.order.remove(pos);

        for (shifted, later) in self.order[pos..].iter().enumerate() {
            self.slots[later.index()] = Slot::Occupied(pos + shifted);
        }

        self.slots[key.index()] = Slot::Free(self.free_head);
        self.free_head = Some(key.index());
        payload
    }

    #[inline]
    pub(crate) fn position(&self, key: NodeKey) -> usize {
        match self.slots[key.index()] {
            Slot::Occupied(pos) => pos,
            Slot::Free(_) => panic!("node key {} refers to a removed vertex", key.index()),
        }
    }

    #[inline]
    pub(crate) fn payload(&self, key: NodeKey) -> &T {
        &self.payloads[self.position(key)]
    }

    #[inline]
    pub(crate) fn payloads(&self) -> &[T] {
        &self.payloads
    }

    /// Keys in insertion order.
    #[inline]
    pub(crate) fn keys(&self) -> &[NodeKey] {
        &self.order
    }

    /// Key of the first-inserted surviving vertex.
    #[inline]
    pub(crate) fn seed(&self) -> Option<NodeKey> {
        self.order.first().copied()
    }

    /// Moves every payload out in insertion order, leaving the table empty.
    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, T> {
        self.order.clear();
        self.slots.clear();
        self.free_head = None;
        self.payloads.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn lookup_uses_comparator_equality() {
        let mut table = NodeTable::with_capacity(4);
        let a = table.push(10);
        let b = table.push(20);

        assert_eq!(table.lookup(&cmp, &10), Some(a));
        assert_eq!(table.lookup(&cmp, &20), Some(b));
        assert_eq!(table.lookup(&cmp, &30), None);

        // Comparator that only looks at the tens digit.
        let coarse = |x: &i32, y: &i32| (x / 10).cmp(&(y / 10));
        assert_eq!(table.lookup(&coarse, &17), Some(a));
    }

    #[test]
    fn detach_preserves_order_and_keys() {
        let mut table = NodeTable::with_capacity(0);
        let keys: Vec<_> = (0..5).map(|i| table.push(i)).collect();

        assert_eq!(table.detach(keys[1]), 1);
        assert_eq!(table.payloads(), &[0, 2, 3, 4]);
        assert_eq!(table.keys(), &[keys[0], keys[2], keys[3], keys[4]]);

        // Surviving keys still resolve to their own payloads.
        assert_eq!(*table.payload(keys[3]), 3);
        assert_eq!(table.position(keys[4]), 3);
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut table = NodeTable::with_capacity(0);
        let a = table.push(1);
        let _b = table.push(2);
        table.detach(a);

        let c = table.push(3);
        assert_eq!(c.index(), a.index());
        assert_eq!(table.key_bound(), 2);
        assert_eq!(table.payloads(), &[2, 3]);
        assert_eq!(table.seed().map(|k| *table.payload(k)), Some(2));
    }

    #[test]
    fn drain_yields_insertion_order() {
        let mut table = NodeTable::with_capacity(0);
        for i in [5, 1, 9] {
            table.reserve_one().unwrap();
            table.push(i);
        }
        let drained: Vec<_> = table.drain().collect();
        assert_eq!(drained, vec![5, 1, 9]);
        assert_eq!(table.len(), 0);
        assert_eq!(table.seed(), None);
    }
}

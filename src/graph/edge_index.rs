//! Forward and backward adjacency, kept in sync.
//!
//! Topology is stored structure-of-arrays style, parallel to the node table's
//! slots: `lists[key]` holds the outgoing targets and incoming sources of the
//! vertex with that key. The incoming list exists so that vertex removal and
//! `indegree` cost \(O(\deg)\) instead of a whole-graph scan.
//!
//! Invariant: `b` appears in `lists[a].outgoing` exactly when `a` appears in
//! `lists[b].incoming`, and `edge_count` equals the total length of either
//! family of lists.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `connect` | \(O(\text{out-degree})\) | duplicate check scans the source's own edges |
//! | `disconnect` | \(O(\text{out-degree} + \text{in-degree})\) | stable deletes on both sides |
//! | `purge` | \(O(\sum \deg)\) over the vertex and its neighbours | no whole-graph scan |
//! | `out_degree` / `in_degree` | \(O(1)\) | `Vec::len` |

use crate::error::{GraphError, Result};
use crate::graph::node_table::NodeKey;

#[derive(Default)]
struct Adjacency {
    outgoing: Vec<NodeKey>,
    incoming: Vec<NodeKey>,
}

pub(crate) struct EdgeIndex {
    lists: Vec<Adjacency>,
    edge_count: usize,
}

/// Stable delete of the first occurrence of `key`.
fn remove_first(list: &mut Vec<NodeKey>, key: NodeKey) -> bool {
    match list.iter().position(|&k| k == key) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}

impl EdgeIndex {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            lists: Vec::with_capacity(capacity),
            edge_count: 0,
        }
    }

    #[inline]
    pub(crate) fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Reserves room for a vertex slot that is about to be handed out, so the
    /// follow-up [`EdgeIndex::attach`] cannot fail.
    pub(crate) fn reserve_slot(&mut self, key_bound: usize) -> Result<()> {
        if key_bound >= self.lists.len() {
            self.lists.try_reserve(key_bound + 1 - self.lists.len())?;
        }
        Ok(())
    }

    /// Installs empty adjacency for a freshly allocated key.
    pub(crate) fn attach(&mut self, key: NodeKey) {
        let idx = key.index();
        if idx >= self.lists.len() {
            self.lists.resize_with(idx + 1, Adjacency::default);
        } else {
            self.lists[idx] = Adjacency::default();
        }
    }

    #[inline]
    pub(crate) fn outgoing(&self, key: NodeKey) -> &[NodeKey] {
        &self.lists[key.index()].outgoing
    }

    #[inline]
    pub(crate) fn out_degree(&self, key: NodeKey) -> usize {
        self.lists[key.index()].outgoing.len()
    }

    #[inline]
    pub(crate) fn in_degree(&self, key: NodeKey) -> usize {
        self.lists[key.index()].incoming.len()
    }

    #[inline]
    pub(crate) fn has_edge(&self, from: NodeKey, to: NodeKey) -> bool {
        self.outgoing(from).contains(&to)
    }

    /// Adds `from -> to`. Self-loops are allowed once.
    pub(crate) fn connect(&mut self, from: NodeKey, to: NodeKey) -> Result<()> {
        if self.has_edge(from, to) {
            return Err(GraphError::DuplicateEdge);
        }

        self.lists[from.index()].outgoing.try_reserve(1)?;
        self.lists[to.index()].incoming.try_reserve(1)?;

        self.lists[from.index()].outgoing.push(to);
        self.lists[to.index()].incoming.push(from);
        self.edge_count += 1;
        Ok(())
    }

    /// Removes `from -> to`, keeping the relative order of remaining entries.
    pub(crate) fn disconnect(&mut self, from: NodeKey, to: NodeKey) -> Result<()> {
        if !remove_first(&mut self.lists[from.index()].outgoing, to) {
            return Err(GraphError::NotFound);
        }
        let mirrored = remove_first(&mut self.lists[to.index()].incoming, from);
        debug_assert!(mirrored, "missing back-reference for edge {from:?} -> {to:?}");
        self.edge_count -= 1;
        Ok(())
    }

    /// Severs every edge touching `key` and returns how many were removed.
    ///
    /// Must run before the node table detaches `key`.
    pub(crate) fn purge(&mut self, key: NodeKey) -> usize {
        let Adjacency { outgoing, incoming } = std::mem::take(&mut self.lists[key.index()]);
        let mut removed = 0;

        for target in outgoing {
            if target != key {
                let mirrored = remove_first(&mut self.lists[target.index()].incoming, key);
                debug_assert!(mirrored, "missing back-reference for edge {key:?} -> {target:?}");
            }
            removed += 1;
        }

        for source in incoming {
            // A self-loop was already counted on the outgoing side.
            if source != key {
                let mirrored = remove_first(&mut self.lists[source.index()].outgoing, key);
                debug_assert!(mirrored, "missing forward reference for edge {source:?} -> {key:?}");
                removed += 1;
            }
        }

        self.edge_count -= removed;
        removed
    }

    /// Checks forward/backward symmetry for the given live keys and the edge
    /// counter identity.
    pub(crate) fn is_consistent(&self, live: &[NodeKey]) -> bool {
        let mut out_total = 0;
        let mut in_total = 0;

        for &a in live {
            let adj = &self.lists[a.index()];
            out_total += adj.outgoing.len();
            in_total += adj.incoming.len();

            for &b in &adj.outgoing {
                let forward = adj.outgoing.iter().filter(|&&k| k == b).count();
                let backward = self.lists[b.index()]
                    .incoming
                    .iter()
                    .filter(|&&k| k == a)
                    .count();
                if forward != 1 || backward != 1 {
                    return false;
                }
            }
            for &b in &adj.incoming {
                if !self.lists[b.index()].outgoing.contains(&a) {
                    return false;
                }
            }
        }

        out_total == self.edge_count && in_total == self.edge_count
    }
}

//! A directed graph over caller-supplied payloads.
//!
//! Vertices are identified by payload, not by handle: every argument is
//! resolved through the graph's comparator, so any value that compares equal
//! to a stored payload addresses that vertex. Edges are unique per ordered
//! pair; self-loops are allowed.

use std::cmp::Ordering;
use std::fmt;

use crate::config::{GraphConfig, SearchStrategy};
use crate::error::{GraphError, Rejected, Result};
use crate::graph::edge_index::EdgeIndex;
use crate::graph::invariants::invariant_assert;
use crate::graph::node_table::{NodeKey, NodeTable};
use crate::graph::ownership::Ownership;
use crate::graph::traversal::{self, Traverse};
use crate::graph::view::NeighborView;

/// Comparator used by [`Digraph::ordered`].
pub type OrdComparator<T> = fn(&T, &T) -> Ordering;

/// A directed graph storing unique payloads with unique directed edges.
///
/// `C` is the total-order comparator; two payloads are the same vertex when
/// it returns [`Ordering::Equal`]. Payload release on removal and drop follows
/// the [`Ownership`] chosen at construction.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert` | \(O(n)\) | comparator scan for duplicates |
/// | `connect` | \(O(n + \text{out-degree})\) | two lookups, duplicate check on the source only |
/// | `disconnect` | \(O(n + \deg)\) | stable delete on both endpoints |
/// | `remove` | \(O(n + \sum \deg)\) | purge touches only the vertex's neighbours |
/// | `outdegree` / `indegree` | \(O(n)\) | lookup, then `Vec::len` |
/// | `reachable` / `has_cycle` / `is_connected` | \(O(n + m)\) | |
///
/// ```rust
/// use digraph::Digraph;
///
/// let mut g = Digraph::ordered();
/// for city in ["oslo", "bergen", "tromso"] {
///     g.insert(city).unwrap();
/// }
/// g.connect(&"oslo", &"bergen").unwrap();
/// g.connect(&"bergen", &"tromso").unwrap();
///
/// assert!(g.reachable(&"oslo", &"tromso"));
/// assert!(!g.has_cycle());
/// assert_eq!(g.neighbors(&"oslo").unwrap().to_vec(), vec![&"bergen"]);
/// ```
pub struct Digraph<T, C = OrdComparator<T>> {
    nodes: NodeTable<T>,
    edges: EdgeIndex,
    compare: C,
    ownership: Ownership<T>,
    search: SearchStrategy,
}

impl<T: Ord> Digraph<T> {
    /// Creates an empty graph that compares payloads with [`Ord`] and
    /// borrows them.
    pub fn ordered() -> Self {
        let compare: OrdComparator<T> = T::cmp;
        Self::new(compare)
    }
}

impl<T: Ord> Default for Digraph<T> {
    fn default() -> Self {
        Self::ordered()
    }
}

impl<T, C> Digraph<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty graph; payloads stay caller-owned.
    pub fn new(compare: C) -> Self {
        Self::with_ownership(compare, Ownership::Borrowed)
    }

    /// Creates an empty graph that owns its payloads and releases each one
    /// through `destroy`, which must be `'static` (see [`Destroyer`](crate::graph::Destroyer)).
    pub fn with_destroyer<F>(compare: C, destroy: F) -> Self
    where
        F: FnMut(T) + 'static,
    {
        Self::with_ownership(compare, Ownership::owned(destroy))
    }

    /// Creates an empty graph with an explicit ownership policy.
    pub fn with_ownership(compare: C, ownership: Ownership<T>) -> Self {
        Self::with_config(compare, ownership, GraphConfig::default())
    }

    /// Creates an empty graph with an explicit ownership policy and configuration.
    pub fn with_config(compare: C, ownership: Ownership<T>, config: GraphConfig) -> Self {
        Self {
            nodes: NodeTable::with_capacity(config.node_capacity),
            edges: EdgeIndex::with_capacity(config.node_capacity),
            compare,
            ownership,
            search: config.search,
        }
    }

    #[inline]
    fn lookup(&self, payload: &T) -> Option<NodeKey> {
        self.nodes.lookup(&self.compare, payload)
    }

    #[inline]
    fn resolve(&self, payload: &T) -> Result<NodeKey> {
        self.lookup(payload).ok_or(GraphError::NotFound)
    }

    /// Inserts a payload as a new vertex at the end of the insertion order.
    ///
    /// # Errors
    /// - [`GraphError::DuplicatePayload`] if an equal payload is already stored
    /// - [`GraphError::NoMemory`] if storage could not grow
    ///
    /// On error the payload is dropped without reaching the destroyer; use
    /// [`Digraph::try_insert`] to get it back.
    pub fn insert(&mut self, payload: T) -> Result<()> {
        self.try_insert(payload).map_err(|rejected| rejected.error)
    }

    /// Like [`Digraph::insert`], but hands the payload back on failure.
    pub fn try_insert(&mut self, payload: T) -> std::result::Result<(), Rejected<T>> {
        if self.lookup(&payload).is_some() {
            graph_debug!("insert rejected: duplicate payload");
            return Err(Rejected {
                error: GraphError::DuplicatePayload,
                payload,
            });
        }

        let reserved = self
            .edges
            .reserve_slot(self.nodes.key_bound())
            .and_then(|()| self.nodes.reserve_one());
        if let Err(error) = reserved {
            graph_debug!(%error, "insert rejected");
            return Err(Rejected { error, payload });
        }

        let key = self.nodes.push(payload);
        self.edges.attach(key);
        graph_trace!(key = key.index(), nodes = self.nodes.len(), "vertex inserted");
        Ok(())
    }

    /// Adds the directed edge `from -> to`.
    ///
    /// # Errors
    /// - [`GraphError::NotFound`] if either payload is missing
    /// - [`GraphError::DuplicateEdge`] if the edge already exists
    /// - [`GraphError::NoMemory`] if storage could not grow
    pub fn connect(&mut self, from: &T, to: &T) -> Result<()> {
        let from_key = self.resolve(from)?;
        let to_key = self.resolve(to)?;
        if let Err(error) = self.edges.connect(from_key, to_key) {
            graph_debug!(%error, from = from_key.index(), to = to_key.index(), "connect rejected");
            return Err(error);
        }
        graph_trace!(
            from = from_key.index(),
            to = to_key.index(),
            edges = self.edges.edge_count(),
            "edge connected"
        );
        Ok(())
    }

    /// Removes the directed edge `from -> to`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if either payload or the edge is missing.
    pub fn disconnect(&mut self, from: &T, to: &T) -> Result<()> {
        let from_key = self.resolve(from)?;
        let to_key = self.resolve(to)?;
        self.edges.disconnect(from_key, to_key)?;
        graph_trace!(
            from = from_key.index(),
            to = to_key.index(),
            edges = self.edges.edge_count(),
            "edge disconnected"
        );
        Ok(())
    }

    /// Removes a vertex and every edge touching it, then releases the stored
    /// payload according to the ownership policy.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if the payload is missing.
    pub fn remove(&mut self, payload: &T) -> Result<()> {
        let stored = self.take(payload)?;
        self.ownership.release(stored);
        Ok(())
    }

    /// Removes a vertex and every edge touching it, returning the stored
    /// payload to the caller instead of releasing it.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if the payload is missing.
    pub fn take(&mut self, payload: &T) -> Result<T> {
        let key = self.resolve(payload)?;
        self.edges.purge(key);
        let stored = self.nodes.detach(key);
        graph_trace!(
            key = key.index(),
            nodes = self.nodes.len(),
            edges = self.edges.edge_count(),
            "vertex removed"
        );
        Ok(stored)
    }

    /// Outgoing neighbours of `payload`, in edge-insertion order.
    ///
    /// The view borrows the graph; it cannot outlive the next mutation.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if the payload is missing.
    pub fn neighbors(&self, payload: &T) -> Result<NeighborView<'_, T>> {
        let key = self.resolve(payload)?;
        Ok(NeighborView::new(self.edges.outgoing(key), &self.nodes))
    }

    /// Every stored payload, in insertion order.
    #[inline]
    pub fn payloads(&self) -> &[T] {
        self.nodes.payloads()
    }

    /// The stored payload that compares equal to `probe`.
    #[inline]
    pub fn get(&self, probe: &T) -> Option<&T> {
        self.lookup(probe).map(|key| self.nodes.payload(key))
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Number of directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }

    /// Returns `true` if a payload equal to `payload` is stored.
    #[inline]
    pub fn contains(&self, payload: &T) -> bool {
        self.lookup(payload).is_some()
    }

    /// Number of edges leaving `payload`; 0 if it is missing.
    pub fn outdegree(&self, payload: &T) -> usize {
        self.lookup(payload).map_or(0, |key| self.edges.out_degree(key))
    }

    /// Number of edges entering `payload`; 0 if it is missing.
    pub fn indegree(&self, payload: &T) -> usize {
        self.lookup(payload).map_or(0, |key| self.edges.in_degree(key))
    }

    /// Returns `true` if the edge `from -> to` exists.
    pub fn has_edge(&self, from: &T, to: &T) -> bool {
        match (self.lookup(from), self.lookup(to)) {
            (Some(a), Some(b)) => self.edges.has_edge(a, b),
            _ => false,
        }
    }

    /// Returns `true` if `to` can be reached from `from` along outgoing edges.
    ///
    /// Every stored payload reaches itself. Missing payloads yield `false`.
    pub fn reachable(&self, from: &T, to: &T) -> bool {
        match (self.lookup(from), self.lookup(to)) {
            (Some(a), Some(b)) => traversal::reachable(&self.edges, self.nodes.key_bound(), a, b, self.search),
            _ => false,
        }
    }

    /// Returns `true` if the graph contains a directed cycle, self-loops included.
    pub fn has_cycle(&self) -> bool {
        traversal::has_cycle(&self.edges, self.nodes.keys(), self.nodes.key_bound())
    }

    /// Returns `true` if every vertex is reachable from the first-inserted one.
    ///
    /// Empty and single-vertex graphs are connected.
    pub fn is_connected(&self) -> bool {
        traversal::is_connected(&self.nodes, &self.edges, self.search)
    }

    /// Breadth-first iterator over everything reachable from `start`.
    pub fn bfs(&self, start: &T) -> Option<Traverse<'_, T>> {
        self.traverse(start, SearchStrategy::BreadthFirst)
    }

    /// Depth-first iterator over everything reachable from `start`.
    pub fn dfs(&self, start: &T) -> Option<Traverse<'_, T>> {
        self.traverse(start, SearchStrategy::DepthFirst)
    }

    fn traverse(&self, start: &T, strategy: SearchStrategy) -> Option<Traverse<'_, T>> {
        let key = self.lookup(start)?;
        Some(Traverse::new(&self.nodes, &self.edges, key, strategy))
    }

    /// Validates the structural invariants of the graph.
    ///
    /// This method checks that:
    /// 1. No two stored payloads compare equal
    /// 2. Every outgoing entry has exactly one mirrored incoming entry
    /// 3. `edge_count` equals the sum of out-degrees and of in-degrees
    ///
    /// Returns `true` if all invariants hold. In debug builds a violation also
    /// panics with a description.
    pub fn validate_invariants(&self) -> bool {
        let payloads = self.nodes.payloads();
        let unique = payloads.iter().enumerate().all(|(i, a)| {
            payloads[i + 1..]
                .iter()
                .all(|b| (self.compare)(a, b) != Ordering::Equal)
        });
        let positions = self
            .nodes
            .keys()
            .iter()
            .enumerate()
            .all(|(pos, &key)| self.nodes.position(key) == pos);

        invariant_assert(unique, "payloads must be unique under the comparator")
            && invariant_assert(positions, "node keys must map to their dense positions")
            && invariant_assert(
                self.edges.is_consistent(self.nodes.keys()),
                "adjacency must be symmetric and match the edge count",
            )
    }
}

impl<T, C> Digraph<T, C> {
    /// Returns `true` if the graph releases payloads through a destroyer.
    #[inline]
    pub fn is_owning(&self) -> bool {
        self.ownership.is_owned()
    }

    /// The search frontier used by reachability and connectivity.
    #[inline]
    pub fn search_strategy(&self) -> SearchStrategy {
        self.search
    }
}

impl<T, C> Drop for Digraph<T, C> {
    fn drop(&mut self) {
        if !self.ownership.is_owned() {
            return;
        }
        graph_trace!(payloads = self.nodes.len(), "releasing payloads on drop");
        for payload in self.nodes.drain() {
            self.ownership.release(payload);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Digraph<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.nodes.keys().iter().map(|&key| {
                (
                    self.nodes.payload(key),
                    NeighborView::new(self.edges.outgoing(key), &self.nodes),
                )
            }))
            .finish()
    }
}

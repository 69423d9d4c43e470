//! Read-only structural queries.
//!
//! Every algorithm here borrows the node table and edge index immutably and
//! allocates only per-query scratch state sized to the key bound, so all of
//! them run in \(O(V + E)\) time and \(O(V)\) extra space.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::config::SearchStrategy;
use crate::graph::access::visited::{Color, ColorMarks, VisitedSet};
use crate::graph::edge_index::EdgeIndex;
use crate::graph::node_table::{NodeKey, NodeTable};

enum Frontier {
    Queue(VecDeque<NodeKey>),
    Stack(Vec<NodeKey>),
}

impl Frontier {
    fn new(strategy: SearchStrategy) -> Self {
        match strategy {
            SearchStrategy::BreadthFirst => Frontier::Queue(VecDeque::new()),
            SearchStrategy::DepthFirst => Frontier::Stack(Vec::new()),
        }
    }

    #[inline]
    fn push(&mut self, key: NodeKey) {
        match self {
            Frontier::Queue(q) => q.push_back(key),
            Frontier::Stack(s) => s.push(key),
        }
    }

    #[inline]
    fn pop(&mut self) -> Option<NodeKey> {
        match self {
            Frontier::Queue(q) => q.pop_front(),
            Frontier::Stack(s) => s.pop(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Frontier::Queue(q) => q.len(),
            Frontier::Stack(s) => s.len(),
        }
    }
}

/// Forward-edge search yielding node keys.
///
/// A node is marked visited when it is first pushed, so each node is yielded
/// at most once. The start node is marked before any edge is followed.
pub(crate) struct Search<'a> {
    edges: &'a EdgeIndex,
    visited: VisitedSet,
    frontier: Frontier,
}

impl<'a> Search<'a> {
    pub(crate) fn new(edges: &'a EdgeIndex, key_bound: usize, start: NodeKey, strategy: SearchStrategy) -> Self {
        let mut visited = VisitedSet::new(key_bound);
        let mut frontier = Frontier::new(strategy);
        visited.try_visit(start.index());
        frontier.push(start);
        Self {
            edges,
            visited,
            frontier,
        }
    }
}

impl Iterator for Search<'_> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<NodeKey> {
        let u = self.frontier.pop()?;
        for &v in self.edges.outgoing(u) {
            if self.visited.try_visit(v.index()) {
                self.frontier.push(v);
            }
        }
        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.frontier.len(), Some(self.visited.len()))
    }
}

impl FusedIterator for Search<'_> {}

/// `true` iff `to` is visited by a forward search from `from`.
///
/// `reachable(x, x)` holds for every live `x`, with or without a self-loop.
pub(crate) fn reachable(
    edges: &EdgeIndex,
    key_bound: usize,
    from: NodeKey,
    to: NodeKey,
    strategy: SearchStrategy,
) -> bool {
    if from == to {
        return true;
    }
    let mut search = Search::new(edges, key_bound, from, strategy);
    // Checking the visited set on every pop exits as soon as `to` is discovered,
    // rather than when it is dequeued.
    while search.next().is_some() {
        if search.visited.is_visited(to.index()) {
            return true;
        }
    }
    false
}

/// Three-color DFS from every white node in insertion order.
///
/// Reports a cycle the first time an edge leads into a gray node; a self-loop
/// qualifies because its target is the gray node being expanded.
pub(crate) fn has_cycle(edges: &EdgeIndex, order: &[NodeKey], key_bound: usize) -> bool {
    let mut colors = ColorMarks::new(key_bound);
    // (node, index of the next outgoing edge to follow)
    let mut stack: Vec<(NodeKey, usize)> = Vec::new();

    for &root in order {
        if colors.get(root.index()) != Color::White {
            continue;
        }
        colors.set(root.index(), Color::Gray);
        stack.push((root, 0));

        while let Some(&(node, next)) = stack.last() {
            let outgoing = edges.outgoing(node);
            if next == outgoing.len() {
                colors.set(node.index(), Color::Black);
                stack.pop();
                continue;
            }

            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }
            let target = outgoing[next];
            match colors.get(target.index()) {
                Color::Gray => return true,
                Color::White => {
                    colors.set(target.index(), Color::Gray);
                    stack.push((target, 0));
                }
                Color::Black => {}
            }
        }
    }

    false
}

/// `true` iff every node is reachable from the first-inserted one.
///
/// Empty and single-node graphs are connected. Only the forward direction is
/// checked, so this answers "is everything downstream of the seed".
pub(crate) fn is_connected<T>(nodes: &NodeTable<T>, edges: &EdgeIndex, strategy: SearchStrategy) -> bool {
    let Some(seed) = nodes.seed() else {
        return true;
    };
    let reached = Search::new(edges, nodes.key_bound(), seed, strategy).count();
    reached == nodes.len()
}

/// Iterator over the payloads reachable from a start vertex.
///
/// Created by [`Digraph::bfs`](crate::Digraph::bfs) and
/// [`Digraph::dfs`](crate::Digraph::dfs). The start payload is yielded first;
/// every reachable payload is yielded exactly once.
pub struct Traverse<'a, T> {
    nodes: &'a NodeTable<T>,
    search: Search<'a>,
}

impl<'a, T> Traverse<'a, T> {
    pub(crate) fn new(nodes: &'a NodeTable<T>, edges: &'a EdgeIndex, start: NodeKey, strategy: SearchStrategy) -> Self {
        Self {
            nodes,
            search: Search::new(edges, nodes.key_bound(), start, strategy),
        }
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.search.next().map(|key| self.nodes.payload(key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.search.size_hint()
    }
}

impl<T> FusedIterator for Traverse<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        nodes: NodeTable<u32>,
        edges: EdgeIndex,
        keys: Vec<NodeKey>,
    }

    impl Fixture {
        fn new(n: u32, edge_list: &[(usize, usize)]) -> Self {
            let mut nodes = NodeTable::with_capacity(0);
            let mut edges = EdgeIndex::with_capacity(0);
            let mut keys = Vec::new();
            for i in 0..n {
                edges.reserve_slot(nodes.key_bound()).unwrap();
                nodes.reserve_one().unwrap();
                let key = nodes.push(i);
                edges.attach(key);
                keys.push(key);
            }
            for &(a, b) in edge_list {
                edges.connect(keys[a], keys[b]).unwrap();
            }
            Self { nodes, edges, keys }
        }

        fn cyclic(&self) -> bool {
            has_cycle(&self.edges, self.nodes.keys(), self.nodes.key_bound())
        }

        fn reaches(&self, a: usize, b: usize, strategy: SearchStrategy) -> bool {
            reachable(&self.edges, self.nodes.key_bound(), self.keys[a], self.keys[b], strategy)
        }
    }

    #[test]
    fn search_orders_follow_strategy() {
        // 0 -> 1, 0 -> 2, 1 -> 3
        let f = Fixture::new(4, &[(0, 1), (0, 2), (1, 3)]);

        let bfs: Vec<_> = Traverse::new(&f.nodes, &f.edges, f.keys[0], SearchStrategy::BreadthFirst)
            .copied()
            .collect();
        assert_eq!(bfs, vec![0, 1, 2, 3]);

        let dfs: Vec<_> = Traverse::new(&f.nodes, &f.edges, f.keys[0], SearchStrategy::DepthFirst)
            .copied()
            .collect();
        assert_eq!(dfs.len(), 4);
        assert_eq!(dfs[0], 0);
        assert_eq!(dfs[1], 2);
    }

    #[test]
    fn reachability_is_directional() {
        let f = Fixture::new(3, &[(0, 1), (1, 2)]);
        for strategy in [SearchStrategy::BreadthFirst, SearchStrategy::DepthFirst] {
            assert!(f.reaches(0, 2, strategy));
            assert!(!f.reaches(2, 0, strategy));
            assert!(f.reaches(2, 2, strategy));
        }
    }

    #[test]
    fn cycle_detection() {
        assert!(!Fixture::new(0, &[]).cyclic());
        assert!(!Fixture::new(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).cyclic());
        assert!(Fixture::new(1, &[(0, 0)]).cyclic());
        assert!(Fixture::new(3, &[(0, 1), (1, 2), (2, 0)]).cyclic());
        // Cycle only reachable from a later root.
        assert!(Fixture::new(4, &[(0, 1), (2, 3), (3, 2)]).cyclic());
    }

    #[test]
    fn connectivity_from_seed_only() {
        assert!(is_connected(&Fixture::new(0, &[]).nodes, &EdgeIndex::with_capacity(0), SearchStrategy::default()));

        let single = Fixture::new(1, &[]);
        assert!(is_connected(&single.nodes, &single.edges, SearchStrategy::default()));

        let hub = Fixture::new(3, &[(0, 1), (0, 2)]);
        assert!(is_connected(&hub.nodes, &hub.edges, SearchStrategy::DepthFirst));

        // Everything reaches the seed, but the seed reaches nothing.
        let sink = Fixture::new(3, &[(1, 0), (2, 0)]);
        assert!(!is_connected(&sink.nodes, &sink.edges, SearchStrategy::BreadthFirst));
    }
}

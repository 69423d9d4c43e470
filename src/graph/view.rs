//! Borrowed read-only projections of graph storage.
//!
//! A view holds a shared borrow of the graph, so the compiler rejects any
//! mutating call while one is alive: "valid until the next mutation" is a
//! lifetime, not a runtime check.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Index;

use crate::graph::node_table::{NodeKey, NodeTable};

/// Outgoing neighbours of one vertex, in edge-insertion order.
///
/// Returned by [`Digraph::neighbors`](crate::Digraph::neighbors).
pub struct NeighborView<'a, T> {
    targets: &'a [NodeKey],
    nodes: &'a NodeTable<T>,
}

impl<'a, T> NeighborView<'a, T> {
    pub(crate) fn new(targets: &'a [NodeKey], nodes: &'a NodeTable<T>) -> Self {
        Self { targets, nodes }
    }

    /// Number of outgoing neighbours.
    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if the vertex has no outgoing edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// The `index`-th neighbour, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.targets.get(index).map(|&key| self.nodes.payload(key))
    }

    /// The first neighbour added.
    #[inline]
    pub fn first(&self) -> Option<&'a T> {
        self.get(0)
    }

    /// The most recently added neighbour.
    #[inline]
    pub fn last(&self) -> Option<&'a T> {
        self.targets.last().map(|&key| self.nodes.payload(key))
    }

    /// Iterates the neighbours.
    #[inline]
    pub fn iter(&self) -> NeighborIter<'a, T> {
        NeighborIter {
            targets: self.targets.iter(),
            nodes: self.nodes,
        }
    }

    /// Collects the neighbours into a vector of references.
    pub fn to_vec(&self) -> Vec<&'a T> {
        self.iter().collect()
    }
}

impl<T> Clone for NeighborView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NeighborView<'_, T> {}

impl<T> Index<usize> for NeighborView<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.nodes.payload(self.targets[index])
    }
}

impl<'a, T> IntoIterator for NeighborView<'a, T> {
    type Item = &'a T;
    type IntoIter = NeighborIter<'a, T>;

    fn into_iter(self) -> NeighborIter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &NeighborView<'a, T> {
    type Item = &'a T;
    type IntoIter = NeighborIter<'a, T>;

    fn into_iter(self) -> NeighborIter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for NeighborView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq<[T]> for NeighborView<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

/// Iterator over a [`NeighborView`].
pub struct NeighborIter<'a, T> {
    targets: std::slice::Iter<'a, NodeKey>,
    nodes: &'a NodeTable<T>,
}

impl<'a, T> Iterator for NeighborIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.targets.next().map(|&key| self.nodes.payload(key))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.targets.size_hint()
    }
}

impl<T> DoubleEndedIterator for NeighborIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.targets.next_back().map(|&key| self.nodes.payload(key))
    }
}

impl<T> ExactSizeIterator for NeighborIter<'_, T> {}

impl<T> FusedIterator for NeighborIter<'_, T> {}

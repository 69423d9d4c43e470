//! Directed graph storage and algorithms.
//!
//! The graph is split into cooperating parts that share one node-key space:
//! - `node_table`: insertion-ordered payload storage with comparator lookup
//! - `edge_index`: paired outgoing/incoming adjacency keyed by node
//! - [`traversal`]: reachability, cycle detection, connectivity and iterators
//! - [`view`]: borrowed read-only projections of internal storage
//!
//! [`Digraph`] composes them and resolves every payload argument through the
//! comparator before touching adjacency.

pub(crate) mod access;
pub mod digraph;
pub(crate) mod edge_index;
pub(crate) mod invariants;
pub(crate) mod node_table;
pub mod ownership;
pub mod traversal;
pub mod view;

pub use digraph::{Digraph, OrdComparator};
pub use ownership::{Destroyer, Ownership};
pub use traversal::Traverse;
pub use view::{NeighborIter, NeighborView};

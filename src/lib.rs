//! # `digraph` - Payload-Addressed Directed Graphs
//!
//! A directed graph container over caller-supplied payloads. Vertices are
//! identified by value through a caller-provided total-order comparator, not
//! by handle, and edges are unique per ordered pair.
//!
//! ## Guarantees
//!
//! ### Structural
//! - **Unique payloads**: no two stored payloads compare equal.
//! - **Unique edges**: at most one edge per ordered `(from, to)` pair; self-loops allowed.
//! - **Symmetric adjacency**: every outgoing entry has exactly one mirrored incoming
//!   entry, so `edge_count == Σ outdegree == Σ indegree` at all times.
//! - **Stable order**: vertices and neighbours keep insertion order across removals.
//!
//! ### Failure
//! - Contract violations are detected before any mutation.
//! - Allocation failure is reported as [`GraphError::NoMemory`] and leaves the
//!   graph exactly as it was.
//!
//! ### Borrowing
//! Views such as [`NeighborView`] and [`Digraph::payloads`] borrow the graph,
//! so the compiler rejects any mutation while one is alive.
//!
//! ## Architecture
//!
//! 1. **Node table**: insertion-ordered payloads with stable, reusable node keys.
//! 2. **Edge index**: outgoing and incoming adjacency per node key.
//! 3. **Traversal engine**: BFS/DFS reachability, three-color cycle detection,
//!    seed connectivity.
//! 4. **Views**: borrowed projections over neighbours and payloads.
//!
//! Payload ownership is explicit: [`Ownership::Owned`] releases payloads through
//! a destroyer on removal and drop, [`Ownership::Borrowed`] never does.
//!
//! The [`nullable`] module exposes the same operations with `Option` arguments
//! for callers that model absent handles.
//!
//! ## Example
//!
//! ```rust
//! use digraph::{Digraph, GraphError};
//!
//! let mut g = Digraph::ordered();
//! for step in ["fetch", "build", "test"] {
//!     g.insert(step).unwrap();
//! }
//! g.connect(&"fetch", &"build").unwrap();
//! g.connect(&"build", &"test").unwrap();
//!
//! assert_eq!(g.connect(&"fetch", &"build"), Err(GraphError::DuplicateEdge));
//! assert!(g.reachable(&"fetch", &"test"));
//! assert!(g.is_connected());
//! assert!(!g.has_cycle());
//!
//! g.remove(&"build").unwrap();
//! assert_eq!(g.edge_count(), 0);
//! assert_eq!(g.payloads(), &["fetch", "test"]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod graph;
pub mod nullable;
pub mod status;

pub use config::{GraphConfig, SearchStrategy};
pub use error::{GraphError, Rejected, Result};
pub use graph::{Digraph, NeighborView, Ownership, Traverse};
pub use status::GraphStatus;

// Compile-time layout assertions
const _: () = {
    use core::mem;

    // Status codes cross the flat interface as plain integers.
    assert!(mem::size_of::<GraphStatus>() == mem::size_of::<i32>());

    // Errors are fieldless and cheap to copy around.
    assert!(mem::size_of::<GraphError>() == 1);
};

//! Scratch state shared by the traversal engine.
//!
//! Visited bitsets and color marks are sized to the node-key bound and
//! allocated per query.

pub(crate) mod visited;

//! Scratch state for graph traversals.
//!
//! This provides two internal buffers, both indexed by node key:
//! - `VisitedSet`: a word-packed bitset for plain reachability searches
//! - `ColorMarks`: white/gray/black marks for cycle detection
//!
//! Both are allocated per query and sized to the node table's key bound, so a
//! traversal never touches the graph's own storage for bookkeeping.

/// A dense, word-packed visited set.
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    bits: usize,
}

impl VisitedSet {
    #[inline]
    pub(crate) fn new(bits: usize) -> Self {
        Self {
            words: vec![0u64; bits.div_ceil(64)],
            bits,
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.bits
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and marks it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        assert!(node < self.bits, "node {node} out of bounds for visited set of {}", self.bits);
        let word = &mut self.words[node / 64];
        let mask = 1u64 << (node % 64);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        node < self.bits && self.words[node / 64] & (1u64 << (node % 64)) != 0
    }
}

/// Three-color DFS state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    /// Not yet discovered.
    White,
    /// On the current DFS path.
    Gray,
    /// Fully explored.
    Black,
}

/// Per-node color marks for cycle detection.
pub(crate) struct ColorMarks {
    marks: Vec<Color>,
}

impl ColorMarks {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            marks: vec![Color::White; len],
        }
    }

    #[inline(always)]
    pub(crate) fn get(&self, idx: usize) -> Color {
        self.marks[idx]
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, idx: usize, color: Color) {
        self.marks[idx] = color;
    }
}

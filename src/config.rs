//! Construction-time configuration.

/// Frontier discipline used by reachability and connectivity searches.
///
/// Both visit the same set of vertices; they differ only in visit order and
/// in how early a positive reachability answer is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchStrategy {
    /// FIFO queue.
    #[default]
    BreadthFirst,
    /// LIFO stack.
    DepthFirst,
}

/// Graph configuration.
///
/// ```rust
/// use digraph::{GraphConfig, SearchStrategy};
///
/// let config = GraphConfig::new()
///     .with_node_capacity(1024)
///     .with_search(SearchStrategy::DepthFirst);
/// assert_eq!(config.node_capacity, 1024);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphConfig {
    /// Number of vertices to pre-allocate storage for.
    pub node_capacity: usize,
    /// Search frontier for `reachable` and `is_connected`.
    pub search: SearchStrategy,
}

impl GraphConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate storage for `capacity` vertices.
    pub fn with_node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }

    /// Select the search frontier.
    pub fn with_search(mut self, search: SearchStrategy) -> Self {
        self.search = search;
        self
    }
}

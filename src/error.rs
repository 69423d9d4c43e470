//! Error types for graph operations.

use thiserror::Error;

/// Errors returned by fallible graph operations.
///
/// The variants fall into two families:
///
/// ## Contract violations
/// - [`GraphError::NullArgument`] - a required argument was absent (only produced by
///   the [`nullable`](crate::nullable) facade, the typed API cannot express it)
/// - [`GraphError::DuplicatePayload`] - the payload compares equal to a stored one
/// - [`GraphError::DuplicateEdge`] - the directed edge already exists
/// - [`GraphError::NotFound`] - a payload or edge is missing
///
/// These are always detected before the graph is touched.
///
/// ## Resource exhaustion
/// - [`GraphError::NoMemory`] - storage could not grow; the graph is left as it was
///
/// [`GraphError::InvalidOperation`] is reserved and never returned today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GraphError {
    /// A required argument was absent.
    #[error("required argument is null")]
    NullArgument,

    /// The payload already exists under the graph's comparator.
    #[error("payload already present in the graph")]
    DuplicatePayload,

    /// The directed edge already exists.
    #[error("edge already present in the graph")]
    DuplicateEdge,

    /// A payload or edge is not present.
    #[error("payload or edge not found")]
    NotFound,

    /// Internal storage could not be grown.
    #[error("out of memory while growing graph storage")]
    NoMemory,

    /// Reserved for operations that are invalid in the current state.
    #[error("invalid operation")]
    InvalidOperation,
}

impl From<std::collections::TryReserveError> for GraphError {
    fn from(_: std::collections::TryReserveError) -> Self {
        GraphError::NoMemory
    }
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// A payload handed back by [`Digraph::try_insert`](crate::Digraph::try_insert).
///
/// The graph never took ownership of it, so the destroyer was not invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected<T> {
    /// Why the insertion failed.
    pub error: GraphError,
    /// The payload, returned untouched.
    pub payload: T,
}

impl<T> Rejected<T> {
    /// Splits the rejection into the error and the payload.
    pub fn into_parts(self) -> (GraphError, T) {
        (self.error, self.payload)
    }
}

impl<T: std::fmt::Debug> std::fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "payload {:?} rejected: {}", self.payload, self.error)
    }
}

impl<T: std::fmt::Debug> std::error::Error for Rejected<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

//! Closed status-code enumeration for fallible operations.
//!
//! `GraphStatus` is the flat, integer-coded view of [`GraphError`] for callers
//! that want a single code per call (the [`nullable`](crate::nullable) facade
//! and anything bridging to a C-style interface).

use crate::error::{GraphError, Result};

/// Outcome code of a status-returning graph operation.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphStatus {
    /// The operation succeeded.
    Ok = 0,
    /// A required argument was absent.
    NullArgument = 1,
    /// The payload already exists.
    DuplicatePayload = 2,
    /// The directed edge already exists.
    DuplicateEdge = 3,
    /// A payload or edge is missing.
    NotFound = 4,
    /// Storage could not be grown.
    NoMemory = 5,
    /// Reserved.
    InvalidOperation = 6,
}

impl GraphStatus {
    /// Returns `true` for [`GraphStatus::Ok`].
    #[inline]
    pub fn is_ok(self) -> bool {
        self == GraphStatus::Ok
    }

    /// Returns the numeric code.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Converts back into a `Result`, `Ok(())` for [`GraphStatus::Ok`].
    pub fn into_result(self) -> Result<()> {
        match self {
            GraphStatus::Ok => Ok(()),
            GraphStatus::NullArgument => Err(GraphError::NullArgument),
            GraphStatus::DuplicatePayload => Err(GraphError::DuplicatePayload),
            GraphStatus::DuplicateEdge => Err(GraphError::DuplicateEdge),
            GraphStatus::NotFound => Err(GraphError::NotFound),
            GraphStatus::NoMemory => Err(GraphError::NoMemory),
            GraphStatus::InvalidOperation => Err(GraphError::InvalidOperation),
        }
    }
}

impl From<GraphError> for GraphStatus {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::NullArgument => GraphStatus::NullArgument,
            GraphError::DuplicatePayload => GraphStatus::DuplicatePayload,
            GraphError::DuplicateEdge => GraphStatus::DuplicateEdge,
            GraphError::NotFound => GraphStatus::NotFound,
            GraphError::NoMemory => GraphStatus::NoMemory,
            GraphError::InvalidOperation => GraphStatus::InvalidOperation,
        }
    }
}

impl<T> From<&Result<T>> for GraphStatus {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => GraphStatus::Ok,
            Err(err) => GraphStatus::from(*err),
        }
    }
}

impl<T> From<Result<T>> for GraphStatus {
    fn from(result: Result<T>) -> Self {
        GraphStatus::from(&result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_declaration_order() {
        let all = [
            GraphStatus::Ok,
            GraphStatus::NullArgument,
            GraphStatus::DuplicatePayload,
            GraphStatus::DuplicateEdge,
            GraphStatus::NotFound,
            GraphStatus::NoMemory,
            GraphStatus::InvalidOperation,
        ];
        for (expected, status) in all.iter().enumerate() {
            assert_eq!(status.code(), expected as i32);
        }
    }

    #[test]
    fn status_and_result_convert_both_ways() {
        assert!(GraphStatus::from(&Ok::<(), GraphError>(())).is_ok());
        assert_eq!(
            GraphStatus::from(Err::<(), _>(GraphError::DuplicateEdge)),
            GraphStatus::DuplicateEdge
        );
        assert_eq!(GraphStatus::NotFound.into_result(), Err(GraphError::NotFound));
        assert_eq!(GraphStatus::Ok.into_result(), Ok(()));
    }
}

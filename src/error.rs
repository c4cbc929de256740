//! Allocation and capacity failures shared by `LinkedList` and `HashTable`.

use core::fmt;
use std::collections::TryReserveError;

/// Reported when a structure cannot grow. Operations returning this error
/// leave the structure exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocError {
    /// The bucket array could not be allocated.
    TryReserve(TryReserveError),
    /// A list already holds `limit` nodes.
    CapacityExceeded { limit: usize },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocError::TryReserve(e) => write!(f, "allocation failed: {}", e),
            AllocError::CapacityExceeded { limit } => {
                write!(f, "list capacity of {} nodes exceeded", limit)
            }
        }
    }
}

impl std::error::Error for AllocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AllocError::TryReserve(e) => Some(e),
            AllocError::CapacityExceeded { .. } => None,
        }
    }
}

impl From<TryReserveError> for AllocError {
    fn from(e: TryReserveError) -> Self {
        AllocError::TryReserve(e)
    }
}

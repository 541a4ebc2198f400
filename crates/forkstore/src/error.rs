//! Error types for the store layer.

use thiserror::Error;

use forkstore_core::{CoreError, StoreId};

/// Errors that can occur during store operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// A read walked the chain to its root without finding a value.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A handle was presented that this registry never allocated.
    #[error("unknown store handle: {0}")]
    UnknownHandle(StoreId),
}

impl StoreError {
    /// Whether this is the unset-chain failure.
    pub const fn is_unset(&self) -> bool {
        matches!(self, StoreError::Core(CoreError::UnsetValue))
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

//! Error types for the forkstore core.

use thiserror::Error;

/// Core errors for value resolution.
///
/// There is exactly one semantic failure in the core: a read walked a fork
/// chain to its root without finding a defined value. No default is ever
/// substituted for it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    #[error("no value defined anywhere in the chain")]
    UnsetValue,
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

//! Strong handle type for registry-owned stores.
//!
//! Handles are newtyped indexes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle identifying a store inside a registry.
///
/// A `StoreId` is an index into the registry's arena. It is only meaningful
/// for the registry that issued it; the registry rejects handles it never
/// allocated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StoreId(pub u32);

impl StoreId {
    /// Create a handle from a raw index.
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index.
    pub const fn index(&self) -> u32 {
        self.0
    }

    /// Index as usize, for slot lookup.
    pub const fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StoreId({})", self.0)
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "store#{}", self.0)
    }
}

impl From<u32> for StoreId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl From<StoreId> for u32 {
    fn from(id: StoreId) -> Self {
        id.0
    }
}

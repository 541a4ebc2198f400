//! The cell: the unit of optional local state held by a store.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// An optional value slot with a write counter.
///
/// A cell starts unset and transitions to set via [`Cell::set`]. It never
/// synthesizes a default: reading an unset cell is [`CoreError::UnsetValue`].
/// Repeated writes are allowed; last write wins and the counter records how
/// many occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell<V> {
    slot: Option<V>,
    writes: u64,
}

impl<V> Cell<V> {
    /// Create a new unset cell.
    pub const fn unset() -> Self {
        Self {
            slot: None,
            writes: 0,
        }
    }

    /// Whether the cell has ever been written.
    pub const fn is_set(&self) -> bool {
        self.slot.is_some()
    }

    /// Set the cell, overwriting any previous value.
    pub fn set(&mut self, value: V) {
        self.slot = Some(value);
        self.writes += 1;
    }

    /// The cell's value, if set.
    pub fn get(&self) -> Option<&V> {
        self.slot.as_ref()
    }

    /// The cell's value, or `UnsetValue` if never written.
    pub fn value(&self) -> Result<&V> {
        self.slot.as_ref().ok_or(CoreError::UnsetValue)
    }

    /// How many writes this cell has absorbed.
    pub const fn writes(&self) -> u64 {
        self.writes
    }
}

impl<V> Default for Cell<V> {
    fn default() -> Self {
        Self::unset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_starts_unset() {
        let cell: Cell<u64> = Cell::unset();
        assert!(!cell.is_set());
        assert_eq!(cell.get(), None);
        assert_eq!(cell.value(), Err(CoreError::UnsetValue));
        assert_eq!(cell.writes(), 0);
    }

    #[test]
    fn test_cell_set_and_overwrite() {
        let mut cell = Cell::unset();
        cell.set(5u64);
        assert_eq!(cell.value(), Ok(&5));
        assert_eq!(cell.writes(), 1);

        cell.set(9);
        assert_eq!(cell.value(), Ok(&9));
        assert_eq!(cell.writes(), 2);
    }

    #[test]
    fn test_cell_serde() {
        let mut cell = Cell::unset();
        cell.set(3u64);
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell<u64> = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }
}

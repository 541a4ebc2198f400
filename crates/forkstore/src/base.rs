//! Base store: the terminal node of a fork chain.

use std::sync::RwLock;

use forkstore_core::Cell;

use crate::error::Result;
use crate::traits::Store;

/// Terminal store with no parent.
///
/// The only place genuine, parent-independent state lives. Thread-safe via
/// RwLock; many forks may read it concurrently.
pub struct BaseStore<V> {
    cell: RwLock<Cell<V>>,
}

impl<V> BaseStore<V> {
    /// Create a new base store with an unset cell.
    pub fn new() -> Self {
        Self {
            cell: RwLock::new(Cell::unset()),
        }
    }

    /// Whether the local cell has been written.
    pub fn is_set(&self) -> bool {
        self.cell.read().unwrap().is_set()
    }

    /// How many writes this store has absorbed.
    pub fn writes(&self) -> u64 {
        self.cell.read().unwrap().writes()
    }
}

impl<V> Default for BaseStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Send + Sync> Store<V> for BaseStore<V> {
    fn read(&self) -> Result<V> {
        let cell = self.cell.read().unwrap();
        Ok(cell.value()?.clone())
    }

    fn write(&self, value: V) {
        self.cell.write().unwrap().set(value);
    }

    fn read_then_write(&self, value: V) -> Result<V> {
        // Single lock across the pair so no other write interleaves.
        let mut cell = self.cell.write().unwrap();
        let previous = cell.value()?.clone();
        cell.set(value);
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use forkstore_core::CoreError;

    #[test]
    fn test_base_unset_read_fails() {
        let store: BaseStore<u64> = BaseStore::new();
        assert_eq!(store.read(), Err(StoreError::Core(CoreError::UnsetValue)));
    }

    #[test]
    fn test_base_write_then_read() {
        let store = BaseStore::new();
        store.write(11u64);
        assert_eq!(store.read().unwrap(), 11);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_base_read_then_write() {
        let store = BaseStore::new();
        store.write(1u64);
        let previous = store.read_then_write(2).unwrap();
        assert_eq!(previous, 1);
        assert_eq!(store.read().unwrap(), 2);
    }

    #[test]
    fn test_base_read_then_write_fails_without_writing() {
        let store: BaseStore<u64> = BaseStore::new();
        let err = store.read_then_write(5).unwrap_err();
        assert!(err.is_unset());
        // The failed read must abort the whole operation.
        assert!(!store.is_set());
        assert_eq!(store.writes(), 0);
    }
}

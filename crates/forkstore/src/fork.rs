//! Forked store: a copy-on-write view over a parent store.

use std::sync::{Arc, RwLock};

use forkstore_core::Cell;

use crate::error::Result;
use crate::traits::Store;

/// A store backed by a parent until locally overridden.
///
/// Construction records the parent reference only; it never reads or copies
/// the parent's current value. Reads fall back along the parent chain while
/// the local cell is unset (lazy fallback, not a snapshot). Writes always
/// target the local cell, so a fork never mutates any ancestor, and sibling
/// forks of the same parent are isolated from each other.
pub struct ForkedStore<V> {
    parent: Arc<dyn Store<V>>,
    cell: RwLock<Cell<V>>,
}

impl<V: Clone + Send + Sync + 'static> ForkedStore<V> {
    /// Fork a new store off `parent`.
    ///
    /// The parent may be a [`BaseStore`](crate::BaseStore) or another
    /// `ForkedStore`; chains are acyclic by construction because a parent
    /// must exist before any fork references it.
    pub fn new(parent: Arc<dyn Store<V>>) -> Self {
        Self {
            parent,
            cell: RwLock::new(Cell::unset()),
        }
    }

    /// Whether this fork has locally overridden its parent.
    pub fn is_overridden(&self) -> bool {
        self.cell.read().unwrap().is_set()
    }

    /// How many local writes this fork has absorbed.
    pub fn writes(&self) -> u64 {
        self.cell.read().unwrap().writes()
    }
}

impl<V: Clone + Send + Sync + 'static> Store<V> for ForkedStore<V> {
    fn read(&self) -> Result<V> {
        {
            let cell = self.cell.read().unwrap();
            if let Some(value) = cell.get() {
                return Ok(value.clone());
            }
        }
        // Local cell unset: fall back to the parent chain.
        self.parent.read()
    }

    fn write(&self, value: V) {
        self.cell.write().unwrap().set(value);
    }

    fn read_then_write(&self, value: V) -> Result<V> {
        // Hold the local write lock across the pair. The parent read below
        // takes no lock on this instance, and the chain is acyclic, so this
        // cannot deadlock.
        let mut cell = self.cell.write().unwrap();
        let previous = match cell.get() {
            Some(local) => local.clone(),
            None => self.parent.read()?,
        };
        cell.set(value);
        Ok(previous)
    }
}

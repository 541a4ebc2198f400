//! Registry: an arena of stores indexed by handle.
//!
//! A deployment environment would hold a pile of independently constructed
//! store instances; the registry makes that ownership explicit. All nodes
//! live in one arena, forks reference parents by [`StoreId`], and the
//! registry outliving its handles means a parent can never be dropped
//! before its forks.

use std::sync::RwLock;

use serde::Serialize;
use tracing::debug;

use forkstore_core::{Cell, CoreError, StoreId};

use crate::error::{Result, StoreError};

/// Result of a traced read: the value plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<V> {
    /// The resolved value.
    pub value: V,
    /// The ancestor whose cell supplied the value.
    pub source: StoreId,
    /// How many parent links the resolver walked (0 = local hit).
    pub depth: u64,
}

/// One node in the arena.
struct Node<V> {
    parent: Option<StoreId>,
    cell: Cell<V>,
}

/// Arena of stores with fork-chain resolution.
///
/// Acyclicity is structural: `fork` only accepts an already-allocated
/// handle, so a node's parent index is always smaller than its own and the
/// resolver walk always terminates.
pub struct Registry<V> {
    inner: RwLock<Vec<Node<V>>>,
}

impl<V: Clone> Registry<V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    /// Allocate a terminal store with an unset cell.
    pub fn base(&self) -> StoreId {
        let mut nodes = self.inner.write().unwrap();
        let id = StoreId::from_index(nodes.len() as u32);
        nodes.push(Node {
            parent: None,
            cell: Cell::unset(),
        });
        debug!(%id, "allocated base store");
        id
    }

    /// Allocate a fork whose reads fall back to `parent`.
    ///
    /// Records the parent handle only; the parent's current value is not
    /// read or copied. Fails with `UnknownHandle` if `parent` was never
    /// allocated by this registry.
    pub fn fork(&self, parent: StoreId) -> Result<StoreId> {
        let mut nodes = self.inner.write().unwrap();
        if parent.as_usize() >= nodes.len() {
            return Err(StoreError::UnknownHandle(parent));
        }
        let id = StoreId::from_index(nodes.len() as u32);
        nodes.push(Node {
            parent: Some(parent),
            cell: Cell::unset(),
        });
        debug!(%id, %parent, "allocated fork");
        Ok(id)
    }

    /// Set a store's cell, overwriting any previous value.
    pub fn write(&self, id: StoreId, value: V) -> Result<()> {
        let mut nodes = self.inner.write().unwrap();
        let node = Self::node_mut(&mut nodes, id)?;
        node.cell.set(value);
        debug!(%id, writes = node.cell.writes(), "wrote store");
        Ok(())
    }

    /// Resolve a store's value, falling back along the parent chain.
    pub fn read(&self, id: StoreId) -> Result<V> {
        let nodes = self.inner.read().unwrap();
        Ok(Self::resolve_in(&nodes, id)?.value)
    }

    /// As [`Registry::read`], but report the source handle and the depth
    /// the resolver walked.
    pub fn resolve(&self, id: StoreId) -> Result<Resolution<V>> {
        let nodes = self.inner.read().unwrap();
        let resolution = Self::resolve_in(&nodes, id)?;
        debug!(
            %id,
            source = %resolution.source,
            depth = resolution.depth,
            "resolved read"
        );
        Ok(resolution)
    }

    /// Resolve, then write, returning the pre-write value.
    ///
    /// The registry write lock is held across the pair, so no other write
    /// can be observed between the read and the write. Fail-fast: if the
    /// chain is fully unset, nothing is written.
    pub fn read_then_write(&self, id: StoreId, value: V) -> Result<V> {
        let mut nodes = self.inner.write().unwrap();
        let previous = Self::resolve_in(&nodes, id)?.value;
        // Handle validity was established by the resolve above.
        nodes[id.as_usize()].cell.set(value);
        debug!(%id, "read-then-write committed");
        Ok(previous)
    }

    /// Number of parent links between `id` and its chain root.
    pub fn depth(&self, id: StoreId) -> Result<u64> {
        let nodes = self.inner.read().unwrap();
        let mut node = Self::node(&nodes, id)?;
        let mut depth = 0;
        while let Some(parent) = node.parent {
            node = &nodes[parent.as_usize()];
            depth += 1;
        }
        Ok(depth)
    }

    /// Number of allocated stores.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Whether no store has been allocated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serializable dump of the registry topology and cell state.
    pub fn snapshot(&self) -> Snapshot<V> {
        let nodes = self.inner.read().unwrap();
        let stores = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| SnapshotEntry {
                id: StoreId::from_index(index as u32),
                parent: node.parent,
                value: node.cell.get().cloned(),
                writes: node.cell.writes(),
            })
            .collect();
        Snapshot { stores }
    }

    /// The fork chain resolver: walk from `start` toward the root, first
    /// set cell wins.
    fn resolve_in(nodes: &[Node<V>], start: StoreId) -> Result<Resolution<V>> {
        let mut current = Self::node(nodes, start)?;
        let mut source = start;
        let mut depth = 0;
        loop {
            if let Some(value) = current.cell.get() {
                return Ok(Resolution {
                    value: value.clone(),
                    source,
                    depth,
                });
            }
            match current.parent {
                Some(parent) => {
                    current = &nodes[parent.as_usize()];
                    source = parent;
                    depth += 1;
                }
                None => return Err(CoreError::UnsetValue.into()),
            }
        }
    }

    fn node<'a>(nodes: &'a [Node<V>], id: StoreId) -> Result<&'a Node<V>> {
        nodes
            .get(id.as_usize())
            .ok_or(StoreError::UnknownHandle(id))
    }

    fn node_mut<'a>(nodes: &'a mut [Node<V>], id: StoreId) -> Result<&'a mut Node<V>> {
        nodes
            .get_mut(id.as_usize())
            .ok_or(StoreError::UnknownHandle(id))
    }
}

impl<V: Clone> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable registry dump.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<V> {
    pub stores: Vec<SnapshotEntry<V>>,
}

/// One store's entry in a [`Snapshot`].
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotEntry<V> {
    pub id: StoreId,
    pub parent: Option<StoreId>,
    pub value: Option<V>,
    pub writes: u64,
}

//! # Forkstore
//!
//! Layered value store with copy-on-write forks and fallback-chained reads.
//!
//! ## Overview
//!
//! A fork of a store defers reads to its parent until the fork performs its
//! own write, after which the fork's value takes precedence. Writes flow
//! downward only (a fork never mutates an ancestor); reads flow upward on a
//! local miss until a defined cell is found, or fail with `UnsetValue` when
//! the whole chain is unset.
//!
//! Two representations of the same semantics:
//!
//! - [`BaseStore`] / [`ForkedStore`] - standalone instances chained through
//!   `Arc<dyn Store<V>>` parent references
//! - [`Registry`] - an arena owning all stores, addressed by [`StoreId`]
//!   handle, with a traced resolver and a serializable snapshot
//!
//! ## Usage
//!
//! ```rust
//! use forkstore::Registry;
//!
//! let registry = Registry::new();
//! let base = registry.base();
//! registry.write(base, 1u64).unwrap();
//!
//! let fork = registry.fork(base).unwrap();
//! assert_eq!(registry.read(fork).unwrap(), 1);
//!
//! // Copy-on-write: the fork's write leaves the base untouched.
//! let previous = registry.read_then_write(fork, 2).unwrap();
//! assert_eq!(previous, 1);
//! assert_eq!(registry.read(fork).unwrap(), 2);
//! assert_eq!(registry.read(base).unwrap(), 1);
//! ```
//!
//! ## Design Notes
//!
//! - **Lazy fallback, not a snapshot**: forking records the parent
//!   reference only; the parent's value is read at resolution time
//! - **Fail-fast combined operation**: `read_then_write` does not write
//!   when the read fails
//! - **Acyclic by construction**: a parent must exist before a fork can
//!   reference it, so resolver walks always terminate

pub mod base;
pub mod error;
pub mod fork;
pub mod registry;
pub mod traits;

pub use base::BaseStore;
pub use error::{Result, StoreError};
pub use fork::ForkedStore;
pub use registry::{Registry, Resolution, Snapshot, SnapshotEntry};
pub use traits::Store;

pub use forkstore_core::{Cell, CoreError, StoreId};

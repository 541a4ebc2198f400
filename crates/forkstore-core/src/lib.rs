//! # Forkstore Core
//!
//! Pure primitives for forkstore: cells, handles, and core errors.
//!
//! This crate contains no I/O and no locking. It is plain data that the
//! store layer builds on.
//!
//! ## Key Types
//!
//! - [`Cell`] - An optional value slot, the unit of local state in a store
//! - [`StoreId`] - Handle identifying a store inside a registry
//! - [`CoreError`] - The single semantic failure: a fully unset chain

pub mod cell;
pub mod error;
pub mod handle;

pub use cell::Cell;
pub use error::{CoreError, Result};
pub use handle::StoreId;

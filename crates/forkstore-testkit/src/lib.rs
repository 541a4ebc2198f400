//! # Forkstore Testkit
//!
//! Testing utilities for forkstore.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: the staged-fork deployment driver that reproduces the
//!   observed deploy / read / read-then-write sequence
//! - **Generators**: proptest strategies for values, topologies, and
//!   operation sequences
//! - **Model**: a naive reference implementation of fork-chain semantics
//!   for differential property tests
//!
//! ## Fixtures
//!
//! ```rust
//! use forkstore_testkit::fixtures::ChainFixture;
//!
//! let mut fixture = ChainFixture::new(1);
//! let f1 = fixture.deploy_fork_of_root(2);
//! assert_eq!(fixture.run_get_then_write(f1).unwrap(), 1);
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use forkstore_testkit::generators::{op_sequence, topology};
//!
//! proptest! {
//!     #[test]
//!     fn registry_matches_model(parents in topology(8), ops in op_sequence(24)) {
//!         // apply ops to a Registry and a ModelChain, compare observations
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod model;

pub use fixtures::ChainFixture;
pub use generators::{op_sequence, topology, value, Op};
pub use model::ModelChain;

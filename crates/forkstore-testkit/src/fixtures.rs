//! Test fixtures and helpers.
//!
//! `ChainFixture` reproduces the observed deployment shape: a base store
//! written once, then forks deployed with a staged value that a later
//! get-then-write call commits.

use std::collections::HashMap;

use forkstore::{Registry, Result};
use forkstore_core::StoreId;

/// A registry plus the staged value deployed with each fork.
pub struct ChainFixture {
    registry: Registry<u64>,
    root: StoreId,
    staged: HashMap<StoreId, u64>,
}

impl ChainFixture {
    /// Deploy a base store and write `root_value` into it.
    pub fn new(root_value: u64) -> Self {
        let registry = Registry::new();
        let root = registry.base();
        registry
            .write(root, root_value)
            .expect("freshly allocated root handle");
        Self {
            registry,
            root,
            staged: HashMap::new(),
        }
    }

    /// The root store's handle.
    pub fn root(&self) -> StoreId {
        self.root
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Registry<u64> {
        &self.registry
    }

    /// Deploy a fork of `parent`, staging `value` for a later
    /// [`ChainFixture::run_get_then_write`]. Deployment records the parent
    /// only; nothing is read or written yet.
    pub fn deploy_fork(&mut self, parent: StoreId, value: u64) -> StoreId {
        let fork = self
            .registry
            .fork(parent)
            .expect("parent handle came from this fixture");
        self.staged.insert(fork, value);
        fork
    }

    /// Deploy a fork of the root store.
    pub fn deploy_fork_of_root(&mut self, value: u64) -> StoreId {
        self.deploy_fork(self.root, value)
    }

    /// Run the fork's get-then-write step: resolve the current value, then
    /// commit the value staged at deployment. Returns the resolved
    /// (pre-write) value.
    pub fn run_get_then_write(&self, fork: StoreId) -> Result<u64> {
        let staged = *self
            .staged
            .get(&fork)
            .expect("fork was deployed through this fixture");
        self.registry.read_then_write(fork, staged)
    }

    /// Read a store's current value.
    pub fn get(&self, id: StoreId) -> Result<u64> {
        self.registry.read(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_root() {
        let fixture = ChainFixture::new(1);
        assert_eq!(fixture.get(fixture.root()).unwrap(), 1);
    }

    #[test]
    fn test_fixture_observed_deployment() {
        // Base written 1; fork staged 2; fork-of-fork staged 3; a second
        // fork of the first fork also staged 3.
        let mut fixture = ChainFixture::new(1);

        let f1 = fixture.deploy_fork_of_root(2);
        assert_eq!(fixture.run_get_then_write(f1).unwrap(), 1);
        assert_eq!(fixture.get(f1).unwrap(), 2);

        let f2 = fixture.deploy_fork(f1, 3);
        assert_eq!(fixture.run_get_then_write(f2).unwrap(), 2);
        assert_eq!(fixture.get(f2).unwrap(), 3);

        let f3 = fixture.deploy_fork(f1, 3);
        assert_eq!(fixture.run_get_then_write(f3).unwrap(), 2);
        assert_eq!(fixture.get(f3).unwrap(), 3);

        // Nothing upstream moved.
        assert_eq!(fixture.get(f1).unwrap(), 2);
        assert_eq!(fixture.get(fixture.root()).unwrap(), 1);
    }

    #[test]
    fn test_fixture_staged_value_not_written_at_deploy() {
        let mut fixture = ChainFixture::new(7);
        let fork = fixture.deploy_fork_of_root(8);

        // Deployment stages only; the fork still reads through to the root.
        assert_eq!(fixture.get(fork).unwrap(), 7);
    }
}

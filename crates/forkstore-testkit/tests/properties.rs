//! Differential property tests: the registry against the naive model.

use proptest::prelude::*;

use forkstore::{Registry, StoreId};
use forkstore_testkit::generators::{op_sequence, topology, Op};
use forkstore_testkit::model::ModelChain;

/// Build a registry and a model from the same parent table.
fn build(parents: &[Option<usize>]) -> (Registry<u64>, Vec<StoreId>, ModelChain) {
    let registry = Registry::new();
    let mut model = ModelChain::new();
    let mut handles = Vec::with_capacity(parents.len());

    for parent in parents {
        match parent {
            None => {
                handles.push(registry.base());
                model.base();
            }
            Some(p) => {
                let handle = registry
                    .fork(handles[*p])
                    .expect("parent allocated earlier in the table");
                handles.push(handle);
                model.fork(*p);
            }
        }
    }

    (registry, handles, model)
}

proptest! {
    /// Any operation sequence over any topology produces identical
    /// observations from the registry and the model.
    #[test]
    fn registry_matches_model(
        parents in topology(8),
        ops in op_sequence(24),
    ) {
        let (registry, handles, mut model) = build(&parents);

        for (pick, op) in ops {
            let target = pick.index(parents.len());
            let handle = handles[target];

            match op {
                Op::Write { value } => {
                    registry.write(handle, value).unwrap();
                    model.write(target, value);
                }
                Op::Read => {
                    prop_assert_eq!(registry.read(handle).ok(), model.read(target));
                }
                Op::ReadThenWrite { value } => {
                    prop_assert_eq!(
                        registry.read_then_write(handle, value).ok(),
                        model.read_then_write(target, value)
                    );
                }
            }
        }

        // Final sweep: every store agrees, and so do the write counters.
        let snapshot = registry.snapshot();
        for (target, handle) in handles.iter().enumerate() {
            prop_assert_eq!(registry.read(*handle).ok(), model.read(target));
            prop_assert_eq!(snapshot.stores[target].writes, model.writes(target));
        }
    }

    /// Writes never leak upward: after any sequence, a store's own cell
    /// matches only what was written to it directly.
    #[test]
    fn writes_stay_local(
        parents in topology(8),
        ops in op_sequence(24),
    ) {
        let (registry, handles, mut model) = build(&parents);

        for (pick, op) in ops {
            let target = pick.index(parents.len());
            let handle = handles[target];
            match op {
                Op::Write { value } => {
                    registry.write(handle, value).unwrap();
                    model.write(target, value);
                }
                Op::Read => {}
                Op::ReadThenWrite { value } => {
                    let _ = registry.read_then_write(handle, value);
                    let _ = model.read_then_write(target, value);
                }
            }
        }

        // A node with zero direct writes must have an unset local cell,
        // whatever happened to its descendants.
        let snapshot = registry.snapshot();
        for (target, entry) in snapshot.stores.iter().enumerate() {
            if model.writes(target) == 0 {
                prop_assert_eq!(entry.value, None);
                prop_assert_eq!(entry.writes, 0);
            }
        }
    }
}

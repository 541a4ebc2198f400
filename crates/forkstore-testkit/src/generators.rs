//! Proptest generators for property-based testing.

use proptest::prelude::*;
use proptest::sample::Index;

/// Generate a value to store.
pub fn value() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Generate a fork topology as a parent table.
///
/// Entry 0 is always a base (`None`); entry `i > 0` forks some
/// earlier-allocated node. Parents always pre-exist their forks, which is
/// the same structural acyclicity the registry enforces.
pub fn topology(max_nodes: usize) -> impl Strategy<Value = Vec<Option<usize>>> {
    prop::collection::vec(any::<Index>(), 0..max_nodes).prop_map(|picks| {
        let mut parents = vec![None];
        for (i, pick) in picks.iter().enumerate() {
            parents.push(Some(pick.index(i + 1)));
        }
        parents
    })
}

/// One operation against some store in a chain.
#[derive(Debug, Clone)]
pub enum Op {
    Write { value: u64 },
    Read,
    ReadThenWrite { value: u64 },
}

/// Generate a single operation.
pub fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        value().prop_map(|value| Op::Write { value }),
        Just(Op::Read),
        value().prop_map(|value| Op::ReadThenWrite { value }),
    ]
}

/// Generate an operation sequence. Each entry pairs a target picker (an
/// index into however many stores the topology produced) with an operation.
pub fn op_sequence(max_len: usize) -> impl Strategy<Value = Vec<(Index, Op)>> {
    prop::collection::vec((any::<Index>(), op()), 0..max_len)
}

//! Naive reference model of fork-chain semantics.
//!
//! Deliberately simple: parent indexes and `Option` cells, resolution by a
//! plain loop. Differential tests drive the real registry and this model
//! with the same operations and require identical observations.

/// One model node: parent index (if any) and the cell contents.
#[derive(Debug, Clone)]
struct ModelNode {
    parent: Option<usize>,
    value: Option<u64>,
    writes: u64,
}

/// The reference model.
#[derive(Debug, Clone, Default)]
pub struct ModelChain {
    nodes: Vec<ModelNode>,
}

impl ModelChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a base node.
    pub fn base(&mut self) -> usize {
        self.nodes.push(ModelNode {
            parent: None,
            value: None,
            writes: 0,
        });
        self.nodes.len() - 1
    }

    /// Allocate a fork of an existing node. Panics on a bad index; the
    /// model is only ever driven with indexes it handed out.
    pub fn fork(&mut self, parent: usize) -> usize {
        assert!(parent < self.nodes.len(), "fork of unknown model node");
        self.nodes.push(ModelNode {
            parent: Some(parent),
            value: None,
            writes: 0,
        });
        self.nodes.len() - 1
    }

    /// Set a node's cell.
    pub fn write(&mut self, index: usize, value: u64) {
        let node = &mut self.nodes[index];
        node.value = Some(value);
        node.writes += 1;
    }

    /// Resolve a read by walking parent links; `None` when the whole chain
    /// is unset.
    pub fn read(&self, index: usize) -> Option<u64> {
        let mut current = index;
        loop {
            let node = &self.nodes[current];
            if let Some(value) = node.value {
                return Some(value);
            }
            current = node.parent?;
        }
    }

    /// Resolve then write; fail-fast, no write when the read resolves to
    /// nothing.
    pub fn read_then_write(&mut self, index: usize, value: u64) -> Option<u64> {
        let previous = self.read(index)?;
        self.write(index, value);
        Some(previous)
    }

    /// Number of writes a node has absorbed.
    pub fn writes(&self, index: usize) -> u64 {
        self.nodes[index].writes
    }

    /// Number of nodes in the model.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the model is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

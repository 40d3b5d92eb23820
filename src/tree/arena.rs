//! # Node Arena
//!
//! Flat storage for tree nodes. Nodes are addressed by [`NodeId`] indices
//! into a `Vec`, so the tree is a strict exclusive-ownership hierarchy: a
//! node is referenced by exactly one parent (or is the root) and holds no
//! back-pointers.
//!
//! Slots are never freed individually. The animated workload only ever
//! inserts, and `clear()` discards the whole arena at once, so a free list
//! would be dead weight.

use eyre::{ensure, Result};
use smallvec::SmallVec;

use crate::config::INLINE_CHILDREN;

/// Index into the node arena. `u32` supports ~4 billion nodes, far beyond
/// anything a hand-driven animation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A single B-Tree node: sorted keys plus child ids. A node is a leaf iff it
/// has no children; leaf-ness is derived, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub keys: Vec<i64>,
    pub children: SmallVec<[NodeId; INLINE_CHILDREN]>,
}

impl Node {
    pub fn leaf(keys: Vec<i64>) -> Self {
        Self {
            keys,
            children: SmallVec::new(),
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Append-only node storage.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Result<&Node> {
        ensure!(
            id.index() < self.nodes.len(),
            "node {} out of bounds (arena holds {} nodes)",
            id,
            self.nodes.len()
        );
        Ok(&self.nodes[id.index()])
    }

    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        ensure!(
            id.index() < self.nodes.len(),
            "node {} out of bounds (arena holds {} nodes)",
            id,
            self.nodes.len()
        );
        Ok(&mut self.nodes[id.index()])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_assigns_sequential_ids() {
        let mut arena = Arena::new();
        let a = arena.alloc(Node::leaf(vec![1]));
        let b = arena.alloc(Node::leaf(vec![2]));
        assert_eq!(a, NodeId(0));
        assert_eq!(b, NodeId(1));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn get_rejects_out_of_bounds_ids() {
        let arena = Arena::new();
        assert!(arena.get(NodeId(0)).is_err());
    }

    #[test]
    fn leafness_is_derived_from_children() {
        let mut arena = Arena::new();
        let child = arena.alloc(Node::leaf(vec![1]));
        let mut parent = Node::leaf(vec![5]);
        assert!(parent.is_leaf());
        parent.children.push(child);
        assert!(!parent.is_leaf());
    }
}

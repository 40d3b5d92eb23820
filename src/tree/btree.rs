//! # B-Tree Insertion Engine
//!
//! Classic order-*t* insertion with preemptive splitting: a full child is
//! split before the descent enters it, so `insert_non_full` always operates
//! on a node with spare capacity and never needs to back up the tree.
//!
//! ## Split Mechanics
//!
//! A full node holds `2t - 1` keys. The median sits at index
//! `max_keys / 2` (integer division — the middle element of an odd-length
//! array). Splitting moves the keys above the median into a fresh sibling,
//! promotes the median into the parent, and leaves both siblings with
//! exactly `t - 1` keys:
//!
//! ```text
//!   parent: [.. P ..]                 parent: [.. P  M ..]
//!             │              split              │    │
//!   child:  [a b M c d]      ───>     child:  [a b] │
//!                                     sibling:    [c d]
//! ```
//!
//! ## Root Growth
//!
//! The root has no parent to absorb a promoted median, so a full root is
//! handled by allocating a brand-new empty root whose sole child is the old
//! root, then splitting that child. This is the only way the tree gains
//! height, which is what keeps every leaf at the same depth.

use eyre::{bail, ensure, Result};
use smallvec::{smallvec, SmallVec};

use super::arena::{Arena, Node, NodeId};
use crate::config::{INLINE_CHILDREN, MIN_DEGREE};

/// One structural effect of an insertion, in the order it occurred.
/// Consumers (the animation engine, the CLI) turn these into captions;
/// the tree itself attaches no presentation meaning to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationEvent {
    /// First-ever insertion created a singleton root.
    RootCreated { node: NodeId, key: i64 },
    /// The root was full: a new root was allocated above it.
    RootGrown { new_root: NodeId, old_root: NodeId },
    /// A full child was split and its median promoted into the parent.
    Split {
        parent: NodeId,
        child: NodeId,
        sibling: NodeId,
        median: i64,
    },
    /// The key reached its leaf and was placed at `position`.
    KeyPlaced {
        node: NodeId,
        key: i64,
        position: usize,
    },
}

/// An in-memory B-Tree of minimum degree `t` over `i64` keys.
///
/// Duplicate keys are permitted and order-preserving among equals (see the
/// module docs in [`crate::tree`]). There is no delete operation: the
/// animated lifecycle is insert-only, and `clear()` rebuilds from scratch.
#[derive(Debug, Clone)]
pub struct BTree {
    arena: Arena,
    root: Option<NodeId>,
    degree: usize,
}

impl BTree {
    pub fn new(degree: usize) -> Result<Self> {
        ensure!(
            degree >= MIN_DEGREE,
            "degree {} below minimum {}: a split could not produce two non-empty siblings",
            degree,
            MIN_DEGREE
        );
        Ok(Self {
            arena: Arena::new(),
            root: None,
            degree,
        })
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Maximum keys per node: `2t - 1`.
    #[inline]
    pub fn max_keys(&self) -> usize {
        2 * self.degree - 1
    }

    /// Minimum keys per non-root node: `t - 1`.
    #[inline]
    pub fn min_keys(&self) -> usize {
        self.degree - 1
    }

    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.arena.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Discard the whole tree. The next insertion behaves exactly like the
    /// first ever: it lazily creates a singleton root.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Insert `key`, returning the mutation events in occurrence order.
    pub fn insert(&mut self, key: i64) -> Result<Vec<MutationEvent>> {
        let mut events = Vec::new();

        let Some(root_id) = self.root else {
            let node = self.arena.alloc(Node::leaf(vec![key]));
            self.root = Some(node);
            events.push(MutationEvent::RootCreated { node, key });
            return Ok(events);
        };

        if self.arena.get(root_id)?.keys.len() == self.max_keys() {
            // Root split: grow a new root above the old one, then split the
            // old root as its child 0. Sole source of tree height.
            let new_root = self.arena.alloc(Node {
                keys: Vec::new(),
                children: smallvec![root_id],
            });
            self.root = Some(new_root);
            events.push(MutationEvent::RootGrown {
                new_root,
                old_root: root_id,
            });
            self.split_child(new_root, 0, &mut events)?;
            self.insert_non_full(new_root, key, &mut events)?;
        } else {
            self.insert_non_full(root_id, key, &mut events)?;
        }

        Ok(events)
    }

    /// Split the full child at `parent.children[index]`, promoting its median
    /// key into `parent` at `index`.
    ///
    /// Precondition: the child holds exactly `max_keys` keys and the parent
    /// has spare capacity (guaranteed by the preemptive-split descent).
    fn split_child(
        &mut self,
        parent_id: NodeId,
        index: usize,
        events: &mut Vec<MutationEvent>,
    ) -> Result<()> {
        let max_keys = self.max_keys();
        let mid = max_keys / 2;

        let parent = self.arena.get(parent_id)?;
        ensure!(
            index < parent.children.len(),
            "split_child: child index {} out of bounds in node {} ({} children)",
            index,
            parent_id,
            parent.children.len()
        );
        ensure!(
            parent.keys.len() < max_keys,
            "split_child: parent {} is full and cannot absorb a median",
            parent_id
        );
        let child_id = parent.children[index];

        let (median, upper_keys, upper_children) = {
            let child = self.arena.get_mut(child_id)?;
            ensure!(
                child.keys.len() == max_keys,
                "split_child: node {} has {} keys, split requires a full node ({})",
                child_id,
                child.keys.len(),
                max_keys
            );

            let upper_keys = child.keys.split_off(mid + 1);
            let Some(median) = child.keys.pop() else {
                bail!("split_child: node {} lost its median", child_id);
            };
            let upper_children: SmallVec<[NodeId; INLINE_CHILDREN]> = if child.is_leaf() {
                SmallVec::new()
            } else {
                child.children.drain(mid + 1..).collect()
            };
            (median, upper_keys, upper_children)
        };

        let sibling_id = self.arena.alloc(Node {
            keys: upper_keys,
            children: upper_children,
        });

        let parent = self.arena.get_mut(parent_id)?;
        parent.keys.insert(index, median);
        parent.children.insert(index + 1, sibling_id);

        events.push(MutationEvent::Split {
            parent: parent_id,
            child: child_id,
            sibling: sibling_id,
            median,
        });
        Ok(())
    }

    /// Insert into the subtree rooted at a node known to have spare capacity.
    ///
    /// The child-selection scan runs right-to-left with a strict `>` so that
    /// duplicates descend into (and land in) the rightmost eligible position.
    fn insert_non_full(
        &mut self,
        node_id: NodeId,
        key: i64,
        events: &mut Vec<MutationEvent>,
    ) -> Result<()> {
        let max_keys = self.max_keys();

        let node = self.arena.get(node_id)?;
        ensure!(
            node.keys.len() < max_keys,
            "insert_non_full: node {} is full",
            node_id
        );

        if node.is_leaf() {
            let node = self.arena.get_mut(node_id)?;
            let mut i = node.keys.len();
            while i > 0 && node.keys[i - 1] > key {
                i -= 1;
            }
            node.keys.insert(i, key);
            events.push(MutationEvent::KeyPlaced {
                node: node_id,
                key,
                position: i,
            });
            return Ok(());
        }

        let mut i = node.keys.len();
        while i > 0 && node.keys[i - 1] > key {
            i -= 1;
        }
        ensure!(
            i < node.children.len(),
            "insert_non_full: node {} has {} keys but only {} children",
            node_id,
            node.keys.len(),
            node.children.len()
        );

        let child_id = node.children[i];
        if self.arena.get(child_id)?.keys.len() == max_keys {
            self.split_child(node_id, i, events)?;
            // The promoted median now sits at keys[i]; step past it when the
            // new key belongs in the upper sibling.
            if self.arena.get(node_id)?.keys[i] < key {
                i += 1;
            }
        }

        let next = self.arena.get(node_id)?.children[i];
        self.insert_non_full(next, key, events)
    }

    /// All keys in non-decreasing order. Length equals the number of
    /// insertions, duplicates included.
    pub fn in_order(&self) -> Result<Vec<i64>> {
        let mut keys = Vec::new();
        if let Some(root) = self.root {
            self.collect_in_order(root, &mut keys)?;
        }
        Ok(keys)
    }

    fn collect_in_order(&self, node_id: NodeId, out: &mut Vec<i64>) -> Result<()> {
        let node = self.arena.get(node_id)?;
        if node.is_leaf() {
            out.extend_from_slice(&node.keys);
            return Ok(());
        }
        for (i, &key) in node.keys.iter().enumerate() {
            self.collect_in_order(node.children[i], out)?;
            out.push(key);
        }
        if let Some(&last) = node.children.last() {
            self.collect_in_order(last, out)?;
        }
        Ok(())
    }

    /// Total number of stored keys, duplicates included.
    pub fn key_count(&self) -> Result<usize> {
        let mut count = 0;
        if let Some(root) = self.root {
            self.count_keys(root, &mut count)?;
        }
        Ok(count)
    }

    fn count_keys(&self, node_id: NodeId, count: &mut usize) -> Result<()> {
        let node = self.arena.get(node_id)?;
        *count += node.keys.len();
        for &child in &node.children {
            self.count_keys(child, count)?;
        }
        Ok(())
    }

    /// Number of levels: 0 for the empty tree, 1 for a lone root.
    pub fn height(&self) -> Result<usize> {
        let mut height = 0;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            height += 1;
            cursor = self.arena.get(id)?.children.first().copied();
        }
        Ok(height)
    }

    /// Verify every structural invariant, walking the whole tree:
    ///
    /// 1. occupancy bounds (root exempt from the minimum),
    /// 2. `k` keys implies `k + 1` children for internal nodes,
    /// 3. keys ascend within each node (non-strictly; duplicates allowed),
    /// 4. subtree separation around each separator key,
    /// 5. all leaves at the same depth,
    /// 6. every arena slot reachable exactly once.
    pub fn check_invariants(&self) -> Result<()> {
        let Some(root) = self.root else {
            ensure!(
                self.arena.is_empty(),
                "empty tree still holds {} arena nodes",
                self.arena.len()
            );
            return Ok(());
        };

        let mut visited = vec![false; self.arena.len()];
        let mut leaf_depth = None;
        self.check_node(root, true, 0, &mut leaf_depth, &mut visited, None, None)?;

        if let Some(unreached) = visited.iter().position(|&v| !v) {
            bail!("arena node n{} is unreachable from the root", unreached);
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn check_node(
        &self,
        node_id: NodeId,
        is_root: bool,
        depth: usize,
        leaf_depth: &mut Option<usize>,
        visited: &mut [bool],
        lower: Option<i64>,
        upper: Option<i64>,
    ) -> Result<()> {
        ensure!(
            !visited[node_id.index()],
            "node {} reached twice: tree is not a strict hierarchy",
            node_id
        );
        visited[node_id.index()] = true;

        let node = self.arena.get(node_id)?;

        if is_root {
            ensure!(!node.keys.is_empty(), "non-empty tree has a keyless root");
        } else {
            ensure!(
                node.keys.len() >= self.min_keys(),
                "node {} underflows: {} keys, minimum {}",
                node_id,
                node.keys.len(),
                self.min_keys()
            );
        }
        ensure!(
            node.keys.len() <= self.max_keys(),
            "node {} overflows: {} keys, maximum {}",
            node_id,
            node.keys.len(),
            self.max_keys()
        );

        for pair in node.keys.windows(2) {
            ensure!(
                pair[0] <= pair[1],
                "node {} keys out of order: {} before {}",
                node_id,
                pair[0],
                pair[1]
            );
        }
        // Duplicates are allowed tree-wide, so the separation bounds are
        // inclusive on both sides.
        if let Some(lo) = lower {
            ensure!(
                node.keys.first().map_or(true, |&k| k >= lo),
                "node {} violates its lower separator bound {}",
                node_id,
                lo
            );
        }
        if let Some(hi) = upper {
            ensure!(
                node.keys.last().map_or(true, |&k| k <= hi),
                "node {} violates its upper separator bound {}",
                node_id,
                hi
            );
        }

        if node.is_leaf() {
            match *leaf_depth {
                None => *leaf_depth = Some(depth),
                Some(expected) => ensure!(
                    depth == expected,
                    "leaf {} at depth {}, expected {}",
                    node_id,
                    depth,
                    expected
                ),
            }
            return Ok(());
        }

        ensure!(
            node.children.len() == node.keys.len() + 1,
            "internal node {} has {} keys but {} children",
            node_id,
            node.keys.len(),
            node.children.len()
        );
        for (i, &child) in node.children.iter().enumerate() {
            let lo = if i == 0 { lower } else { Some(node.keys[i - 1]) };
            let hi = if i == node.keys.len() {
                upper
            } else {
                Some(node.keys[i])
            };
            self.check_node(child, false, depth + 1, leaf_depth, visited, lo, hi)?;
        }
        Ok(())
    }
}

//! # B-Tree Engine
//!
//! This module implements the in-memory B-Tree that TreeLab animates. It is a
//! classic order-*t* B-Tree (CLRS-style): all nodes store keys, interior nodes
//! additionally store children, and insertion splits full nodes on the way
//! down so that no recursive call ever sees a full target.
//!
//! ## Arena-Based Node Storage
//!
//! Nodes live in a `Vec` arena and reference each other through [`NodeId`]
//! indices rather than pointers or reference-counted cells:
//!
//! ```text
//!  Arena: [ Node0 | Node1 | Node2 | Node3 | ... ]
//!             ▲        ▲
//!             │        └── NodeId(1)
//!   root: NodeId(0)
//! ```
//!
//! This keeps mutation explicit (every structural change goes through
//! `&mut BTree`), makes snapshots a plain `clone()`, and avoids the
//! shared-ownership tricks an object-graph representation would need for
//! change detection.
//!
//! ## Occupancy Bounds
//!
//! For minimum degree `t`:
//!
//! | Bound      | Value    | Applies to        |
//! |------------|----------|-------------------|
//! | `max_keys` | `2t - 1` | every node        |
//! | `min_keys` | `t - 1`  | every non-root    |
//!
//! The root may hold as few as 1 key (0 only in the empty tree).
//!
//! ## Duplicate Keys
//!
//! Duplicates are permitted. The insertion scans right-to-left with a strict
//! `> key` comparison, so an equal key always lands to the right of existing
//! equals: insertion order among equals is preserved in the in-order
//! traversal.
//!
//! ## Mutation Events
//!
//! Every insertion returns the list of [`MutationEvent`]s it produced (root
//! creation, root growth, splits, final key placement). The animation engine
//! turns these into captioned steps; the tree itself knows nothing about
//! animation.

mod arena;
mod btree;

pub use arena::{Arena, Node, NodeId};
pub use btree::{BTree, MutationEvent};

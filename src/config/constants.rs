//! # TreeLab Configuration Constants
//!
//! This module centralizes all configuration constants, grouping interdependent
//! values together and documenting their relationships.
//!
//! ## Dependency Graph
//!
//! ```text
//! DEFAULT_DEGREE (3)
//!       │
//!       ├─> max_keys = 2 * degree - 1 (derived per-tree, see BTree)
//!       │
//!       └─> MIN_DEGREE (2) — a degree below 2 cannot form a valid B-Tree
//!             (max_keys would be 1, so a split could not produce two
//!              non-empty siblings plus a promoted median)
//!
//! INSERT_DELAY_MS (500)
//!       │
//!       └─> Delay between an insert reaching the queue front and its
//!           application. Gives the learner a perceptible "scheduled" phase.
//!
//! SAMPLE_STAGGER_MS (600)
//!       │
//!       └─> Delay between consecutive sample-data insertions, measured
//!           from the completion of the previous one (sequential pipeline,
//!           never overlapping timers).
//!
//! BASE_CHILD_SPACING (200.0)
//!       │
//!       └─> Halved per tree level, floored at MIN_CHILD_SPACING (120.0)
//!           so deep siblings never collapse onto each other.
//! ```
//!
//! ## Usage
//!
//! Import constants from this module rather than defining them locally:
//!
//! ```ignore
//! use crate::config::{DEFAULT_DEGREE, INSERT_DELAY_MS};
//! ```

// ============================================================================
// TREE SHAPE CONFIGURATION
// ============================================================================

/// Default minimum degree *t* of the tree.
/// A node holds at most `2t - 1` keys and (if internal) at most `2t` children.
pub const DEFAULT_DEGREE: usize = 3;

/// Smallest degree that forms a valid B-Tree.
/// At t = 2 a full node has 3 keys, the minimum a split can redistribute
/// into two 1-key siblings plus a promoted median.
pub const MIN_DEGREE: usize = 2;

/// Inline capacity for a node's child list. Trees of the degrees this crate
/// animates (t <= 4) never spill this to the heap.
pub const INLINE_CHILDREN: usize = 8;

const _: () = assert!(MIN_DEGREE >= 2, "MIN_DEGREE below 2 cannot split");
const _: () = assert!(
    DEFAULT_DEGREE >= MIN_DEGREE,
    "DEFAULT_DEGREE must be a valid degree"
);
const _: () = assert!(
    2 * DEFAULT_DEGREE <= INLINE_CHILDREN,
    "default-degree child lists must fit the inline capacity"
);

// ============================================================================
// ANIMATION SCHEDULING
// Timing for the insertion pipeline. All delays are measured from the
// completion of the previous operation, never from a shared start instant.
// ============================================================================

/// Delay before an insertion at the queue front is applied.
pub const INSERT_DELAY_MS: u64 = 500;

/// Delay between consecutive sample-data insertions.
pub const SAMPLE_STAGGER_MS: u64 = 600;

/// The fixed demo sequence loaded by "sample data".
/// Eight insertions into a degree-3 tree exercise the root split and leave
/// a height-2 tree with a single root key.
pub const SAMPLE_KEYS: [i64; 8] = [10, 20, 5, 6, 12, 30, 7, 17];

// ============================================================================
// STEP PLAYBACK
// ============================================================================

/// Base interval between autoplay step advances at speed 1.0.
pub const STEP_INTERVAL_MS: u64 = 800;

/// Playback speed bounds. Speed divides STEP_INTERVAL_MS, so 4.0 plays a
/// step every 200ms and 0.25 every 3200ms.
pub const MIN_PLAYBACK_SPEED: f32 = 0.25;
pub const MAX_PLAYBACK_SPEED: f32 = 4.0;

// ============================================================================
// LAYOUT GEOMETRY
// Canvas coordinates for node placement. Purely cosmetic: the layout has no
// invariant-checking role and any non-overlapping heuristic would do.
// ============================================================================

/// Canvas position of the root node.
pub const ROOT_X: f32 = 400.0;
pub const ROOT_Y: f32 = 60.0;

/// Vertical distance between tree levels.
pub const LEVEL_VERTICAL_SPACING: f32 = 80.0;

/// Horizontal spacing between siblings at the root's children; halved per
/// level below that.
pub const BASE_CHILD_SPACING: f32 = 200.0;

/// Floor for sibling spacing at any depth.
pub const MIN_CHILD_SPACING: f32 = 120.0;

// ============================================================================
// SVG RENDERING
// ============================================================================

/// Width of one key cell inside a node rectangle.
pub const KEY_CELL_WIDTH: f32 = 28.0;

/// Height of a node rectangle.
pub const NODE_HEIGHT: f32 = 36.0;

/// Padding added around the tree's bounding box in the emitted SVG viewport.
pub const SVG_MARGIN: f32 = 40.0;

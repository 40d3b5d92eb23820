//! # TreeLab - Educational B-Tree Animation Engine
//!
//! TreeLab teaches B-Tree insertion by turning every mutation into a
//! playable sequence of captioned snapshots. The library is the engine a
//! visual frontend drives; the bundled CLI is one such frontend.
//!
//! ## Quick Start
//!
//! ```
//! use treelab::engine::{ManualClock, Orchestrator};
//! use treelab::config::INSERT_DELAY_MS;
//!
//! # fn main() -> eyre::Result<()> {
//! let mut engine = Orchestrator::new(3, ManualClock::new())?;
//! let handle = engine.schedule_insert(42);
//!
//! engine.clock().advance(INSERT_DELAY_MS);
//! let applied = engine.poll()?;
//! assert_eq!(applied[0].key, 42);
//! assert!(!handle.is_cancelled());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! TreeLab uses a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │       Frontends (CLI, embedders)    │
//! ├─────────────────────────────────────┤
//! │   Orchestrator (scheduling, cancel) │
//! ├──────────────────┬──────────────────┤
//! │   Step log +     │    Renderers     │
//! │   Player         │   (SVG, text)    │
//! ├──────────────────┴──────────────────┤
//! │   Layout calculator (x/y per node)  │
//! ├─────────────────────────────────────┤
//! │   B-Tree engine (arena of nodes)    │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Design Points
//!
//! - **Arena-of-nodes tree**: nodes are `Vec` slots addressed by index, so
//!   snapshots are plain clones and mutation is always explicit.
//! - **Sequential insertion pipeline**: scheduled insertions apply strictly
//!   in program order; each delay starts when the predecessor completes.
//! - **Deterministic time**: everything time-driven reads a `Clock` trait,
//!   so tests run on a hand-advanced clock.
//! - **Duplicates allowed**: equal keys coexist, insertion order preserved
//!   among equals.

pub mod cli;
pub mod config;
pub mod engine;
pub mod layout;
pub mod render;
pub mod tree;

pub use engine::{AppliedOp, OperationHandle, Orchestrator, Player, Step, StepKind};
pub use layout::{Layout, NodePos};
pub use render::{render_svg, render_text};
pub use tree::{BTree, MutationEvent, Node, NodeId};

//! # TreeLab CLI Module
//!
//! Interactive terminal frontend for the animation engine. It drives the
//! same [`Orchestrator`](crate::engine::Orchestrator) a graphical frontend
//! would, with a wall clock, and prints step captions as they are recorded.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      CLI Entry Point                        │
//! │                     (bin/treelab.rs)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │                         REPL Loop                           │
//! │  - Reads input via rustyline                                │
//! │  - Parses commands, dispatches to the engine                │
//! │  - Polls the engine until scheduled inserts drain           │
//! ├─────────────────────────────────────────────────────────────┤
//! │     Commands          │     Renderers         │   History   │
//! │  (insert, sample,     │  text tree + SVG      │  Persistent │
//! │   steps, svg, ...)    │  (render module)      │ ~/.treelab_*│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Commands
//!
//! | Command           | Description                                    |
//! |-------------------|------------------------------------------------|
//! | `insert <key>`    | Schedule an integer insertion                  |
//! | `sample`          | Load the fixed demo sequence                   |
//! | `reset`           | Cancel pending work and discard the tree       |
//! | `show`            | Print the current tree per level               |
//! | `steps`           | List recorded steps with the cursor marked     |
//! | `goto <n>`        | Move the step cursor                           |
//! | `next` / `prev`   | Step the cursor forward / backward             |
//! | `play [speed]`    | Autoplay steps, optional speed multiplier      |
//! | `svg <path>`      | Write the current snapshot as an SVG file      |
//! | `check`           | Verify tree invariants                         |
//! | `help`            | Show available commands                        |
//! | `quit` / `exit`   | Leave the REPL                                 |
//!
//! ## History
//!
//! Command history is persisted to `~/.treelab_history` by default and can
//! be overridden with the `TREELAB_HISTORY` environment variable.
//!
//! ## Module Organization
//!
//! - `repl`: Main read-eval-print loop with rustyline integration
//! - `commands`: Command parsing
//! - `history`: History file path resolution

pub mod commands;
pub mod history;
pub mod repl;

pub use repl::Repl;

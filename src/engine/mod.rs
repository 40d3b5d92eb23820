//! # Animation Engine
//!
//! The step-driven engine that turns tree mutations into a playable
//! sequence of captioned snapshots.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Orchestrator                            │
//! │  - FIFO queue of scheduled insertions                       │
//! │  - sequential pipeline: op N+1's delay starts when op N     │
//! │    completes (never overlapping timers)                     │
//! │  - per-operation cancellation tokens                        │
//! ├──────────────────┬──────────────────────┬───────────────────┤
//! │   BTree engine   │  Layout calculator   │    Step log       │
//! │  (tree module)   │  (layout module)     │  + Player         │
//! └──────────────────┴──────────────────────┴───────────────────┘
//!                           ▲
//!                           │ now_ms()
//!                    ┌──────┴───────┐
//!                    │ Clock trait  │  SystemClock / ManualClock
//!                    └──────────────┘
//! ```
//!
//! ## Scheduling Model
//!
//! Single-threaded and cooperative: nothing runs until the owner calls
//! [`Orchestrator::poll`]. An insertion becomes due a fixed delay after it
//! reaches the queue front, so a batch of scheduled insertions applies
//! strictly in program order and a cancelled operation is skipped without
//! side effects. There are no background timers to race against and no
//! stale captures of a previous tree state.
//!
//! ## Steps
//!
//! Each applied insertion records steps into the shared [`Player`]:
//! an announce step (pre-mutation snapshot), one step per structural event
//! (root growth, splits), and a settled step with the final snapshot and
//! fresh layout. The player replays these under manual navigation or
//! clock-driven autoplay with a bounded speed multiplier.

mod clock;
mod orchestrator;
mod steps;

pub use clock::{Clock, ManualClock, SystemClock};
pub use orchestrator::{AppliedOp, OperationHandle, Orchestrator};
pub use steps::{Player, Step, StepKind};

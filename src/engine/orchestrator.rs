//! Insertion orchestrator: the scheduling layer between user intent and
//! tree mutation.
//!
//! ## Sequential Pipeline
//!
//! Scheduled insertions sit in a FIFO queue. An operation's delay starts
//! when it reaches the queue front — i.e. when the previous operation has
//! completed — so a batch of N insertions applies strictly in program
//! order, each against the tree state its predecessors produced. There is
//! no shared start instant and no captured tree reference to go stale.
//!
//! ## Cancellation
//!
//! `schedule_insert` returns an [`OperationHandle`] wrapping a shared
//! cancellation token. A cancelled operation is dropped from the queue at
//! poll time without touching the tree or the step log. `reset()` cancels
//! every pending handle before discarding the tree, so no insertion can
//! land on the fresh tree afterwards.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use eyre::Result;
use tracing::{debug, trace};

use super::clock::Clock;
use super::steps::{Player, Step, StepKind};
use crate::config::{INSERT_DELAY_MS, SAMPLE_KEYS, SAMPLE_STAGGER_MS};
use crate::layout::Layout;
use crate::tree::{BTree, MutationEvent};

/// Caller-side handle to a scheduled insertion.
#[derive(Debug, Clone)]
pub struct OperationHandle {
    id: u64,
    cancelled: Arc<AtomicBool>,
}

impl OperationHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Cancel the operation. Safe to call at any time: once the operation
    /// has applied, cancelling is a no-op.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[derive(Debug)]
struct ScheduledInsert {
    id: u64,
    key: i64,
    delay_ms: u64,
    /// Set when the operation reaches the queue front; None while a
    /// predecessor is still pending.
    due_ms: Option<u64>,
    cancelled: Arc<AtomicBool>,
}

/// Record of one applied insertion, returned from [`Orchestrator::poll`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedOp {
    pub id: u64,
    pub key: i64,
    pub splits: usize,
    pub root_grew: bool,
}

/// Owns the tree, its layout, the step log, and the pending-insert queue.
#[derive(Debug)]
pub struct Orchestrator<C: Clock> {
    tree: BTree,
    layout: Layout,
    player: Player,
    queue: VecDeque<ScheduledInsert>,
    clock: C,
    next_op_id: u64,
}

impl<C: Clock> Orchestrator<C> {
    pub fn new(degree: usize, clock: C) -> Result<Self> {
        let tree = BTree::new(degree)?;
        let layout = Layout::compute(&tree)?;
        Ok(Self {
            tree,
            layout,
            player: Player::new(),
            queue: VecDeque::new(),
            clock,
            next_op_id: 0,
        })
    }

    pub fn tree(&self) -> &BTree {
        &self.tree
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Schedule one insertion after the standard delay.
    pub fn schedule_insert(&mut self, key: i64) -> OperationHandle {
        self.schedule_with_delay(key, INSERT_DELAY_MS)
    }

    /// Schedule the fixed demo sequence, staggered as a sequential pipeline.
    pub fn load_sample(&mut self) -> Vec<OperationHandle> {
        SAMPLE_KEYS
            .iter()
            .map(|&key| self.schedule_with_delay(key, SAMPLE_STAGGER_MS))
            .collect()
    }

    fn schedule_with_delay(&mut self, key: i64, delay_ms: u64) -> OperationHandle {
        let id = self.next_op_id;
        self.next_op_id += 1;
        let cancelled = Arc::new(AtomicBool::new(false));

        // Only a queue-front operation gets a due time now; followers wait
        // for their predecessor to complete.
        let due_ms = if self.queue.is_empty() {
            Some(self.clock.now_ms() + delay_ms)
        } else {
            None
        };

        debug!(id, key, delay_ms, "scheduled insert");
        self.queue.push_back(ScheduledInsert {
            id,
            key,
            delay_ms,
            due_ms,
            cancelled: Arc::clone(&cancelled),
        });
        OperationHandle { id, cancelled }
    }

    /// Apply every due operation. Call this from the owner's event loop;
    /// nothing happens between polls.
    pub fn poll(&mut self) -> Result<Vec<AppliedOp>> {
        let mut applied = Vec::new();

        loop {
            // Drop cancelled front operations without side effects.
            while self
                .queue
                .front()
                .is_some_and(|op| op.cancelled.load(Ordering::Relaxed))
            {
                if let Some(op) = self.queue.pop_front() {
                    trace!(id = op.id, key = op.key, "skipped cancelled insert");
                }
            }

            let now = self.clock.now_ms();
            let Some(front) = self.queue.front_mut() else {
                break;
            };
            let due = *front.due_ms.get_or_insert(now + front.delay_ms);
            if now < due {
                break;
            }

            let Some(op) = self.queue.pop_front() else {
                break;
            };
            applied.push(self.apply(op)?);

            // The successor's delay starts now that this op is done.
            if let Some(next) = self.queue.front_mut() {
                next.due_ms = Some(self.clock.now_ms() + next.delay_ms);
            }
        }

        // Autoplay shares the poll cadence.
        self.player.tick(self.clock.now_ms());
        Ok(applied)
    }

    /// Milliseconds until the front operation is due, if one is scheduled.
    /// Used by interactive frontends to pick a sleep interval.
    pub fn next_due_in_ms(&self) -> Option<u64> {
        let front = self.queue.front()?;
        let due = front.due_ms?;
        Some(due.saturating_sub(self.clock.now_ms()))
    }

    fn apply(&mut self, op: ScheduledInsert) -> Result<AppliedOp> {
        debug!(id = op.id, key = op.key, "applying insert");

        self.player.push(Step {
            snapshot: self.tree.clone(),
            layout: self.layout.clone(),
            caption: format!("Inserting {}", op.key),
            kind: StepKind::Announce,
        });

        let events = self.tree.insert(op.key)?;
        self.layout = Layout::compute(&self.tree)?;

        let mut splits = 0;
        let mut root_grew = false;
        for event in &events {
            match event {
                MutationEvent::RootGrown { .. } => {
                    root_grew = true;
                    self.player.push(Step {
                        snapshot: self.tree.clone(),
                        layout: self.layout.clone(),
                        caption: "Root was full: new root created above it".to_string(),
                        kind: StepKind::RootGrown,
                    });
                }
                MutationEvent::Split { median, .. } => {
                    splits += 1;
                    self.player.push(Step {
                        snapshot: self.tree.clone(),
                        layout: self.layout.clone(),
                        caption: format!("Node full: split, median {median} promoted"),
                        kind: StepKind::Split,
                    });
                }
                MutationEvent::RootCreated { .. } | MutationEvent::KeyPlaced { .. } => {}
            }
        }

        self.player.push(Step {
            snapshot: self.tree.clone(),
            layout: self.layout.clone(),
            caption: format!("{} settled into place", op.key),
            kind: StepKind::Settled,
        });

        Ok(AppliedOp {
            id: op.id,
            key: op.key,
            splits,
            root_grew,
        })
    }

    /// Cancel all pending insertions and discard the tree, layout, and step
    /// log. The next insertion behaves like the first ever.
    pub fn reset(&mut self) {
        let cancelled = self.queue.len();
        for op in &self.queue {
            op.cancelled.store(true, Ordering::Relaxed);
        }
        self.queue.clear();
        self.tree.clear();
        self.layout = Layout::default();
        self.player.clear();
        debug!(cancelled, "engine reset");
    }
}

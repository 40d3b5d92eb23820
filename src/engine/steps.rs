//! Step log and playback.
//!
//! A [`Step`] is a full snapshot of the tree plus its layout and a caption
//! describing what just happened. The [`Player`] owns the ordered log and a
//! cursor over it, supporting manual navigation (first/prev/next/last/goto)
//! and clock-driven autoplay with a speed multiplier.

use tracing::trace;

use crate::config::{MAX_PLAYBACK_SPEED, MIN_PLAYBACK_SPEED, STEP_INTERVAL_MS};
use crate::layout::Layout;
use crate::tree::BTree;

/// What kind of moment a step captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// An insertion was announced; snapshot precedes the mutation.
    Announce,
    /// The root was full and a new root grew above it.
    RootGrown,
    /// A full node was split and its median promoted.
    Split,
    /// The insertion settled; snapshot is the post-mutation tree.
    Settled,
}

/// One captioned snapshot in the playback sequence.
#[derive(Debug, Clone)]
pub struct Step {
    pub snapshot: BTree,
    pub layout: Layout,
    pub caption: String,
    pub kind: StepKind,
}

/// Cursor over the step log with optional autoplay.
///
/// The cursor follows the end of the log while new steps arrive (so a live
/// session always shows the latest state), and detaches as soon as the user
/// navigates backwards.
#[derive(Debug)]
pub struct Player {
    steps: Vec<Step>,
    cursor: usize,
    follow: bool,
    playing: bool,
    speed: f32,
    last_advance_ms: u64,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            cursor: 0,
            follow: true,
            playing: false,
            speed: 1.0,
            last_advance_ms: 0,
        }
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
        if self.follow {
            self.cursor = self.steps.len() - 1;
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&Step> {
        self.steps.get(self.cursor)
    }

    pub fn step_at(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Iterate captions with their indices, for listing in a UI.
    pub fn captions(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, s)| (i, s.caption.as_str()))
    }

    pub fn goto(&mut self, index: usize) -> bool {
        if index >= self.steps.len() {
            return false;
        }
        self.cursor = index;
        self.follow = index + 1 == self.steps.len();
        true
    }

    pub fn first(&mut self) -> bool {
        if self.steps.is_empty() {
            return false;
        }
        self.goto(0)
    }

    pub fn last(&mut self) -> bool {
        if self.steps.is_empty() {
            return false;
        }
        self.goto(self.steps.len() - 1)
    }

    pub fn next(&mut self) -> bool {
        if self.cursor + 1 >= self.steps.len() {
            return false;
        }
        self.goto(self.cursor + 1)
    }

    pub fn prev(&mut self) -> bool {
        if self.cursor == 0 || self.steps.is_empty() {
            return false;
        }
        self.goto(self.cursor - 1)
    }

    /// Start autoplay from the current cursor. The first advance happens
    /// one interval after `now_ms`.
    pub fn play(&mut self, now_ms: u64) {
        self.playing = true;
        self.last_advance_ms = now_ms;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Speed multiplier, clamped to the configured bounds. Speed divides
    /// the base step interval.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(MIN_PLAYBACK_SPEED, MAX_PLAYBACK_SPEED);
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    fn interval_ms(&self) -> u64 {
        (STEP_INTERVAL_MS as f32 / self.speed) as u64
    }

    /// Advance the cursor if autoplay is on and an interval has elapsed.
    /// Pauses automatically at the end of the log. Returns true if the
    /// cursor moved.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.playing || now_ms.saturating_sub(self.last_advance_ms) < self.interval_ms() {
            return false;
        }
        if self.next() {
            self.last_advance_ms = now_ms;
            trace!(cursor = self.cursor, "autoplay advanced");
            true
        } else {
            self.playing = false;
            false
        }
    }

    pub fn clear(&mut self) {
        self.steps.clear();
        self.cursor = 0;
        self.follow = true;
        self.playing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;

    fn step(caption: &str) -> Step {
        let tree = BTree::new(3).unwrap();
        Step {
            layout: Layout::compute(&tree).unwrap(),
            snapshot: tree,
            caption: caption.to_string(),
            kind: StepKind::Settled,
        }
    }

    fn player_with(n: usize) -> Player {
        let mut player = Player::new();
        for i in 0..n {
            player.push(step(&format!("step {i}")));
        }
        player
    }

    #[test]
    fn cursor_follows_the_log_until_user_navigates() {
        let mut player = player_with(3);
        assert_eq!(player.cursor(), 2);

        player.prev();
        assert_eq!(player.cursor(), 1);

        // Detached: new steps no longer drag the cursor forward.
        player.push(step("step 3"));
        assert_eq!(player.cursor(), 1);

        // Jumping to the end re-attaches.
        player.last();
        player.push(step("step 4"));
        assert_eq!(player.cursor(), 4);
    }

    #[test]
    fn navigation_is_bounded() {
        let mut player = player_with(2);
        assert!(!player.next());
        assert!(player.prev());
        assert!(!player.prev());
        assert!(!player.goto(2));
        assert!(player.goto(1));
    }

    #[test]
    fn empty_player_refuses_navigation() {
        let mut player = Player::new();
        assert!(!player.first());
        assert!(!player.last());
        assert!(!player.next());
        assert!(!player.prev());
        assert!(player.current().is_none());
    }

    #[test]
    fn autoplay_advances_on_interval_and_pauses_at_end() {
        let mut player = player_with(3);
        player.first();
        player.play(1000);

        // Not yet due.
        assert!(!player.tick(1000 + STEP_INTERVAL_MS - 1));
        assert!(player.tick(1000 + STEP_INTERVAL_MS));
        assert_eq!(player.cursor(), 1);

        assert!(player.tick(1000 + 2 * STEP_INTERVAL_MS));
        assert_eq!(player.cursor(), 2);

        // At the end: tick pauses instead of advancing.
        assert!(!player.tick(1000 + 3 * STEP_INTERVAL_MS));
        assert!(!player.is_playing());
    }

    #[test]
    fn speed_divides_the_interval_and_is_clamped() {
        let mut player = player_with(5);
        player.first();
        player.set_speed(2.0);
        player.play(0);
        assert!(!player.tick(STEP_INTERVAL_MS / 2 - 1));
        assert!(player.tick(STEP_INTERVAL_MS / 2));

        player.set_speed(100.0);
        assert_eq!(player.speed(), MAX_PLAYBACK_SPEED);
        player.set_speed(0.0);
        assert_eq!(player.speed(), MIN_PLAYBACK_SPEED);
    }
}

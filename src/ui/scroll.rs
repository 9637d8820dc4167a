// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven visibility: the floating call-to-action and the one-shot
//! entrance animation of cards.
//!
//! Scroll events arrive far more often than frames. [`ScrollReactor::record`]
//! only stores the latest offset and asks for a frame; the derived state is
//! recomputed once in [`ScrollReactor::on_frame`], however many scroll
//! events arrived in between.

use crate::app::config::defaults::{REVEAL_DURATION_MS, REVEAL_INTERSECTION_RATIO, REVEAL_TRANSLATE};
use crate::ui::page_layout::{intersection_ratio, Block};
use std::time::{Duration, Instant};

/// Whether the floating call-to-action is shown at `offset`.
#[must_use]
pub fn cta_visible(offset: f32, threshold: f32) -> bool {
    offset >= threshold
}

/// Latest scroll position seen by the reactor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Observation {
    pub offset: f32,
    pub viewport_height: f32,
}

/// Coalesces scroll events into at most one recomputation per frame.
#[derive(Debug, Clone)]
pub struct ScrollReactor {
    threshold: f32,
    latest: Observation,
    applied: Observation,
    frame_pending: bool,
    cta_visible: bool,
    recomputations: u64,
}

impl ScrollReactor {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            latest: Observation::default(),
            applied: Observation::default(),
            frame_pending: false,
            cta_visible: cta_visible(0.0, threshold),
            recomputations: 0,
        }
    }

    /// Stores a scroll position. Returns `true` when this call requested a
    /// new frame, `false` when one was already pending.
    pub fn record(&mut self, offset: f32, viewport_height: f32) -> bool {
        self.latest = Observation {
            offset,
            viewport_height,
        };
        let newly_requested = !self.frame_pending;
        self.frame_pending = true;
        newly_requested
    }

    /// Asks for a recomputation with the current position (startup, resize).
    pub fn request_frame(&mut self) {
        self.frame_pending = true;
    }

    /// Runs the pending recomputation, if any.
    pub fn on_frame(&mut self) -> Option<Observation> {
        if !self.frame_pending {
            return None;
        }
        self.frame_pending = false;
        self.applied = self.latest;
        self.cta_visible = cta_visible(self.applied.offset, self.threshold);
        self.recomputations += 1;
        Some(self.applied)
    }

    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    #[must_use]
    pub fn cta_visible(&self) -> bool {
        self.cta_visible
    }

    /// Position used by the last recomputation.
    #[must_use]
    pub fn applied(&self) -> Observation {
        self.applied
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    #[must_use]
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

// ============================================================================
// Entrance animation
// ============================================================================

/// Lifecycle of a single revealable block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Animating { since: Instant },
    Done,
}

/// How a block is drawn at a given moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealAppearance {
    pub alpha: f32,
    /// Downward offset still to be travelled.
    pub translate: f32,
}

impl RevealAppearance {
    pub const HIDDEN: Self = Self {
        alpha: 0.0,
        translate: REVEAL_TRANSLATE,
    };
    pub const SHOWN: Self = Self {
        alpha: 1.0,
        translate: 0.0,
    };
}

/// Tracks which blocks have played their entrance animation.
///
/// Blocks are identified by their position in
/// [`PageLayout::blocks`](crate::ui::page_layout::PageLayout::blocks).
#[derive(Debug, Clone)]
pub struct RevealTracker {
    states: Vec<RevealState>,
    duration: Duration,
}

impl RevealTracker {
    /// Creates a tracker for `count` blocks. With reduced motion every
    /// block starts out done.
    #[must_use]
    pub fn new(count: usize, reduced_motion: bool) -> Self {
        let initial = if reduced_motion {
            RevealState::Done
        } else {
            RevealState::Pending
        };
        Self {
            states: vec![initial; count],
            duration: Duration::from_millis(REVEAL_DURATION_MS),
        }
    }

    /// Starts the animation of every pending block that intersects the
    /// viewport by at least the reveal ratio. Returns how many started.
    pub fn observe(&mut self, blocks: &[Block], viewport: Observation, now: Instant) -> usize {
        let mut started = 0;
        for (state, block) in self.states.iter_mut().zip(blocks) {
            if *state != RevealState::Pending {
                continue;
            }
            let ratio = intersection_ratio(
                block.top,
                block.height,
                viewport.offset,
                viewport.viewport_height,
            );
            if ratio >= REVEAL_INTERSECTION_RATIO {
                *state = RevealState::Animating { since: now };
                started += 1;
            }
        }
        started
    }

    /// Finishes animations whose duration has elapsed.
    pub fn tick(&mut self, now: Instant) {
        for state in &mut self.states {
            if let RevealState::Animating { since } = *state {
                if now.saturating_duration_since(since) >= self.duration {
                    *state = RevealState::Done;
                }
            }
        }
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.states
            .iter()
            .any(|state| matches!(state, RevealState::Animating { .. }))
    }

    /// Animation progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, index: usize, now: Instant) -> f32 {
        match self.states.get(index) {
            Some(RevealState::Pending) => 0.0,
            Some(RevealState::Animating { since }) => {
                let elapsed = now.saturating_duration_since(*since).as_secs_f32();
                (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
            }
            Some(RevealState::Done) | None => 1.0,
        }
    }

    #[must_use]
    pub fn appearance(&self, index: usize, now: Instant) -> RevealAppearance {
        let t = ease_out(self.progress(index, now));
        RevealAppearance {
            alpha: t,
            translate: (1.0 - t) * REVEAL_TRANSLATE,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::page_layout::BlockKind;

    fn block(top: f32) -> Block {
        Block {
            kind: BlockKind::FlightCard,
            index: 0,
            top,
            height: 100.0,
        }
    }

    fn viewport(offset: f32) -> Observation {
        Observation {
            offset,
            viewport_height: 600.0,
        }
    }

    #[test]
    fn cta_threshold_is_inclusive() {
        assert!(!cta_visible(299.0, 300.0));
        assert!(cta_visible(300.0, 300.0));
        assert!(cta_visible(1_000.0, 300.0));
    }

    #[test]
    fn many_scroll_events_cause_one_recomputation() {
        let mut reactor = ScrollReactor::new(300.0);

        assert!(reactor.record(10.0, 600.0));
        for offset in 11..200 {
            assert!(!reactor.record(offset as f32, 600.0));
        }
        assert!(!reactor.record(450.0, 600.0));

        assert_eq!(reactor.on_frame().map(|o| o.offset), Some(450.0));
        assert_eq!(reactor.on_frame(), None);
        assert_eq!(reactor.recomputations(), 1);
        assert!(reactor.cta_visible());
    }

    #[test]
    fn cta_hides_again_when_scrolling_back() {
        let mut reactor = ScrollReactor::new(300.0);
        reactor.record(500.0, 600.0);
        reactor.on_frame();
        assert!(reactor.cta_visible());

        reactor.record(299.0, 600.0);
        reactor.on_frame();
        assert!(!reactor.cta_visible());
    }

    #[test]
    fn block_reveals_at_ten_percent() {
        let start = Instant::now();
        let mut tracker = RevealTracker::new(1, false);

        // 9% of the block inside the viewport
        assert_eq!(tracker.observe(&[block(591.0)], viewport(0.0), start), 0);
        assert_eq!(tracker.state(0), Some(RevealState::Pending));

        assert_eq!(tracker.observe(&[block(590.0)], viewport(0.0), start), 1);
        assert_eq!(tracker.state(0), Some(RevealState::Animating { since: start }));
    }

    #[test]
    fn animation_completes_and_never_restarts() {
        let start = Instant::now();
        let blocks = [block(100.0)];
        let mut tracker = RevealTracker::new(1, false);
        tracker.observe(&blocks, viewport(0.0), start);

        tracker.tick(start + Duration::from_millis(499));
        assert!(tracker.is_animating());
        tracker.tick(start + Duration::from_millis(500));
        assert_eq!(tracker.state(0), Some(RevealState::Done));

        // Leaving and re-entering the viewport does nothing
        tracker.observe(&blocks, viewport(5_000.0), start);
        assert_eq!(tracker.observe(&blocks, viewport(0.0), start), 0);
        assert_eq!(tracker.state(0), Some(RevealState::Done));
    }

    #[test]
    fn reduced_motion_starts_done() {
        let tracker = RevealTracker::new(3, true);
        let now = Instant::now();
        for index in 0..3 {
            assert_eq!(tracker.state(index), Some(RevealState::Done));
            assert_eq!(tracker.appearance(index, now), RevealAppearance::SHOWN);
        }
        assert!(!tracker.is_animating());
    }

    #[test]
    fn appearance_moves_from_hidden_to_shown() {
        let start = Instant::now();
        let mut tracker = RevealTracker::new(1, false);
        assert_eq!(tracker.appearance(0, start), RevealAppearance::HIDDEN);

        tracker.observe(&[block(0.0)], viewport(0.0), start);
        let midway = tracker.appearance(0, start + Duration::from_millis(250));
        assert!(midway.alpha > 0.0 && midway.alpha < 1.0);
        assert!(midway.translate > 0.0 && midway.translate < REVEAL_TRANSLATE);
    }
}

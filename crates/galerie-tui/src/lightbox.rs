//! Modal overlay state: open item, focus trap, and swap transitions.
//!
//! One `Lightbox` instance backs the artwork viewer and another the poster
//! viewer. The overlay owns keyboard focus while open; Tab cycles a fixed
//! control ring and never escapes to the page underneath.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::swipe::SwipeDirection;

/// Item pushed out of view before the replacement settles in.
const PUSH_OUT_MS: u64 = 140;
/// Replacement item settling into place.
const SETTLE_MS: u64 = 60;

/// Focusable controls of an open overlay, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Close,
    Prev,
    Next,
    Contact,
}

impl Control {
    const RING: [Control; 4] = [Control::Close, Control::Prev, Control::Next, Control::Contact];
}

/// Cycles focus over the overlay controls, wrapping at both ends.
#[derive(Debug, Clone, Copy)]
pub struct FocusTrap {
    index: usize,
}

impl FocusTrap {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn current(&self) -> Control {
        Control::RING[self.index]
    }

    pub fn focus_next(&mut self) {
        self.index = (self.index + 1) % Control::RING.len();
    }

    pub fn focus_prev(&mut self) {
        self.index = (self.index + Control::RING.len() - 1) % Control::RING.len();
    }
}

impl Default for FocusTrap {
    fn default() -> Self {
        Self::new()
    }
}

/// Phase of an item swap animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    PushOut,
    Settle,
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    phase: TransitionPhase,
    direction: SwipeDirection,
    deadline: Instant,
    /// Index to display once the push-out completes.
    next_index: usize,
}

/// Remembers whether page scrolling was already locked when an overlay
/// opened, so nested opens restore the right state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollLock {
    prior: Option<bool>,
}

impl ScrollLock {
    /// Lock and remember the previous state. Returns the new lock value.
    pub fn acquire(&mut self, currently_locked: bool) -> bool {
        if self.prior.is_none() {
            self.prior = Some(currently_locked);
        }
        true
    }

    /// Restore the state from before [`acquire`](Self::acquire).
    pub fn release(&mut self) -> bool {
        self.prior.take().unwrap_or(false)
    }
}

/// Modal viewer over a cyclic list of items.
#[derive(Debug, Clone)]
pub struct Lightbox {
    selected: Option<usize>,
    item_count: usize,
    focus: FocusTrap,
    transition: Option<Transition>,
}

impl Lightbox {
    pub fn new(item_count: usize) -> Self {
        Self {
            selected: None,
            item_count,
            focus: FocusTrap::new(),
            transition: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Index of the item on screen, accounting for an in-flight swap.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn focused_control(&self) -> Control {
        self.focus.current()
    }

    pub fn focus_next(&mut self) {
        if self.is_open() {
            self.focus.focus_next();
        }
    }

    pub fn focus_prev(&mut self) {
        if self.is_open() {
            self.focus.focus_prev();
        }
    }

    /// Open at an index. Focus lands on the close control.
    pub fn open(&mut self, index: usize) {
        if self.item_count == 0 || index >= self.item_count {
            return;
        }
        self.selected = Some(index);
        self.focus = FocusTrap::new();
        self.transition = None;
        debug!(index, "lightbox opened");
    }

    /// Close and drop any in-flight transition.
    pub fn close(&mut self) {
        self.selected = None;
        self.transition = None;
    }

    /// Track a live item count. Closes when the list empties, clamps a
    /// selection that fell past the end, and drops a swap aimed at a
    /// removed item.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        if !self.is_open() {
            return;
        }
        if count == 0 {
            debug!("item list emptied, closing lightbox");
            self.close();
            return;
        }
        if self.selected.is_some_and(|sel| sel >= count) {
            self.selected = Some(count - 1);
            self.transition = None;
        }
        if self.transition.is_some_and(|t| t.next_index >= count) {
            self.transition = None;
        }
    }

    pub fn transition_phase(&self) -> Option<TransitionPhase> {
        self.transition.map(|t| t.phase)
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Start an animated swap in the given direction. Gestures arriving
    /// while a swap is running are dropped rather than queued.
    pub fn swipe(&mut self, direction: SwipeDirection, now: Instant) -> bool {
        let Some(current) = self.selected else {
            return false;
        };
        if self.transition.is_some() || self.item_count < 2 {
            return false;
        }

        let next_index = match direction {
            SwipeDirection::Next => (current + 1) % self.item_count,
            SwipeDirection::Prev => (current + self.item_count - 1) % self.item_count,
        };
        self.transition = Some(Transition {
            phase: TransitionPhase::PushOut,
            direction,
            deadline: now + Duration::from_millis(PUSH_OUT_MS),
            next_index,
        });
        true
    }

    /// Step to the adjacent item without animation. Wraps at both ends.
    pub fn step(&mut self, direction: SwipeDirection) {
        let Some(current) = self.selected else {
            return;
        };
        if self.transition.is_some() || self.item_count < 2 {
            return;
        }
        self.selected = Some(match direction {
            SwipeDirection::Next => (current + 1) % self.item_count,
            SwipeDirection::Prev => (current + self.item_count - 1) % self.item_count,
        });
    }

    /// Horizontal offset hint for rendering the transition, in [-1, 1].
    /// Negative values slide left.
    pub fn transition_offset(&self, now: Instant) -> f64 {
        let Some(t) = self.transition else {
            return 0.0;
        };
        let (total_ms, remaining) = match t.phase {
            TransitionPhase::PushOut => (
                PUSH_OUT_MS,
                t.deadline.saturating_duration_since(now).as_millis() as u64,
            ),
            TransitionPhase::Settle => (
                SETTLE_MS,
                t.deadline.saturating_duration_since(now).as_millis() as u64,
            ),
        };
        let progress = 1.0 - remaining.min(total_ms) as f64 / total_ms as f64;
        let sign = match t.direction {
            SwipeDirection::Next => -1.0,
            SwipeDirection::Prev => 1.0,
        };
        match t.phase {
            TransitionPhase::PushOut => sign * progress,
            TransitionPhase::Settle => -sign * (1.0 - progress),
        }
    }

    /// Advance the swap animation.
    pub fn on_tick(&mut self, now: Instant) {
        let Some(mut t) = self.transition else {
            return;
        };
        if now < t.deadline {
            return;
        }
        match t.phase {
            TransitionPhase::PushOut => {
                // Item swapped at the midpoint, then settles in.
                self.selected = Some(t.next_index);
                t.phase = TransitionPhase::Settle;
                t.deadline = now + Duration::from_millis(SETTLE_MS);
                self.transition = Some(t);
            }
            TransitionPhase::Settle => {
                self.transition = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_focuses_close() {
        let mut lightbox = Lightbox::new(6);
        lightbox.open(2);
        assert!(lightbox.is_open());
        assert_eq!(lightbox.selected(), Some(2));
        assert_eq!(lightbox.focused_control(), Control::Close);
    }

    #[test]
    fn test_open_out_of_range_ignored() {
        let mut lightbox = Lightbox::new(3);
        lightbox.open(7);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_focus_trap_wraps_both_ways() {
        let mut lightbox = Lightbox::new(3);
        lightbox.open(0);

        lightbox.focus_prev();
        assert_eq!(lightbox.focused_control(), Control::Contact);

        for expected in [Control::Close, Control::Prev, Control::Next, Control::Contact] {
            lightbox.focus_next();
            assert_eq!(lightbox.focused_control(), expected);
        }
    }

    #[test]
    fn test_step_wraps_cyclically() {
        let mut lightbox = Lightbox::new(3);
        lightbox.open(0);

        lightbox.step(SwipeDirection::Prev);
        assert_eq!(lightbox.selected(), Some(2));
        lightbox.step(SwipeDirection::Next);
        assert_eq!(lightbox.selected(), Some(0));
    }

    #[test]
    fn test_swipe_transitions_through_phases() {
        let mut lightbox = Lightbox::new(4);
        let start = Instant::now();
        lightbox.open(1);

        assert!(lightbox.swipe(SwipeDirection::Next, start));
        assert_eq!(lightbox.transition_phase(), Some(TransitionPhase::PushOut));
        // Still showing the old item during push-out
        assert_eq!(lightbox.selected(), Some(1));

        lightbox.on_tick(start + Duration::from_millis(150));
        assert_eq!(lightbox.transition_phase(), Some(TransitionPhase::Settle));
        assert_eq!(lightbox.selected(), Some(2));

        lightbox.on_tick(start + Duration::from_millis(220));
        assert!(!lightbox.is_transitioning());
    }

    #[test]
    fn test_gestures_rejected_during_transition() {
        let mut lightbox = Lightbox::new(4);
        let start = Instant::now();
        lightbox.open(0);

        assert!(lightbox.swipe(SwipeDirection::Next, start));
        assert!(!lightbox.swipe(SwipeDirection::Next, start + Duration::from_millis(50)));

        let before = lightbox.selected();
        lightbox.step(SwipeDirection::Next);
        assert_eq!(lightbox.selected(), before);
    }

    #[test]
    fn test_single_item_never_transitions() {
        let mut lightbox = Lightbox::new(1);
        lightbox.open(0);
        assert!(!lightbox.swipe(SwipeDirection::Next, Instant::now()));
        lightbox.step(SwipeDirection::Prev);
        assert_eq!(lightbox.selected(), Some(0));
    }

    #[test]
    fn test_close_cancels_transition() {
        let mut lightbox = Lightbox::new(4);
        lightbox.open(0);
        lightbox.swipe(SwipeDirection::Next, Instant::now());
        lightbox.close();
        assert!(!lightbox.is_open());
        assert!(!lightbox.is_transitioning());
    }

    #[test]
    fn test_shrinking_item_count_clamps_selection() {
        let mut lightbox = Lightbox::new(3);
        lightbox.open(2);

        lightbox.set_item_count(2);
        assert_eq!(lightbox.selected(), Some(1));

        lightbox.set_item_count(0);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_shrinking_item_count_drops_stale_transition() {
        let mut lightbox = Lightbox::new(3);
        lightbox.open(1);
        assert!(lightbox.swipe(SwipeDirection::Next, Instant::now()));

        // The swap targeted index 2, which no longer exists
        lightbox.set_item_count(2);
        assert!(!lightbox.is_transitioning());
        assert_eq!(lightbox.selected(), Some(1));
    }

    #[test]
    fn test_scroll_lock_restores_prior_state() {
        let mut lock = ScrollLock::default();
        assert!(lock.acquire(false));
        assert!(!lock.release());

        // Already locked by another overlay: stays locked on release
        assert!(lock.acquire(true));
        assert!(lock.release());
    }
}

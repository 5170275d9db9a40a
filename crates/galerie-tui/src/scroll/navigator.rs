//! Section navigation: programmatic scrolls paired with the auto-scroll
//! signal.
//!
//! A navigation emits the start signal strictly before the scroll command
//! and the end signal only after the viewport has provably come to rest
//! plus a settle delay, so listeners (banner, menu) never react to the
//! programmatic scroll as if the user had scrolled.

use std::time::{Duration, Instant};

use galerie_core::{AutoScrollSignal, ScrollConfig};
use tracing::{debug, warn};

use super::animator::ScrollAnimator;
use crate::sections::{PageLayout, SectionId};

/// Completion watch for one in-flight navigation.
#[derive(Debug)]
struct ScrollWatch {
    started: Instant,
    target: u16,
    last_offset: u16,
    stable_polls: u8,
    next_poll: Instant,
    /// Set once, by whichever detection path fires first.
    settle_at: Option<Instant>,
}

/// Drives the animator toward section targets and settles the signal.
///
/// Completion is detected by a race of three mechanisms: the animator
/// reporting the target reached, the polled offset staying stable for
/// `stability_checks` consecutive polls, and a hard ceiling. Settlement is
/// idempotent; exactly one end signal is emitted per navigation.
#[derive(Debug)]
pub struct SectionNavigator {
    signal: AutoScrollSignal,
    poll_interval: Duration,
    stability_checks: u8,
    max_wait: Duration,
    settle_delay: Duration,
    watch: Option<ScrollWatch>,
}

impl SectionNavigator {
    pub fn new(signal: AutoScrollSignal, config: &ScrollConfig) -> Self {
        Self {
            signal,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            stability_checks: config.stability_checks,
            max_wait: Duration::from_millis(config.max_wait_ms),
            settle_delay: Duration::from_millis(config.settle_delay_ms),
            watch: None,
        }
    }

    /// A navigation is in flight (scrolling or settling).
    pub fn is_navigating(&self) -> bool {
        self.watch.is_some()
    }

    /// Scroll the viewport so the section's top edge lands at the header
    /// margin. Returns false without emitting any signal or starting any
    /// timer when the section is not present in the page.
    pub fn navigate_to(
        &mut self,
        section: SectionId,
        layout: &PageLayout,
        animator: &mut ScrollAnimator,
        now: Instant,
    ) -> bool {
        let Some(target) = layout.scroll_target(section) else {
            warn!(section = section.as_str(), "section not found, scroll aborted");
            return false;
        };
        let target = target.min(layout.max_scroll());

        // Start must be observable before the scroll command runs.
        self.signal.start();
        debug!(section = section.as_str(), row = target, "navigation started");

        animator.scroll_to(target, layout.max_scroll(), now);

        self.watch = Some(ScrollWatch {
            started: now,
            target,
            last_offset: animator.current_scroll(),
            stable_polls: 0,
            next_poll: now + self.poll_interval,
            settle_at: None,
        });
        true
    }

    /// Advance completion detection. Call every tick after the animator
    /// update.
    pub fn on_tick(&mut self, animator: &ScrollAnimator, now: Instant) {
        let Some(watch) = self.watch.as_mut() else {
            return;
        };

        // Settling: the race already resolved, wait out the layout delay.
        if let Some(settle_at) = watch.settle_at {
            if now >= settle_at {
                self.watch = None;
                self.signal.end();
                debug!("navigation settled");
            }
            return;
        }

        let offset = animator.current_scroll();
        let mut complete =
            !animator.needs_update() && offset == watch.target;

        // Stability fallback: the animator may never report completion for
        // a zero-distance scroll, and user input can retarget it mid-way.
        while now >= watch.next_poll {
            watch.next_poll += self.poll_interval;
            if offset.abs_diff(watch.last_offset) <= 1 {
                watch.stable_polls += 1;
            } else {
                watch.stable_polls = 0;
                watch.last_offset = offset;
            }
        }
        if watch.stable_polls >= self.stability_checks {
            complete = true;
        }

        // Hard ceiling so the signal can never be stuck true.
        if now.saturating_duration_since(watch.started) >= self.max_wait {
            complete = true;
        }

        if complete {
            watch.settle_at = Some(now + self.settle_delay);
        }
    }

    /// Drop the watch without emitting the end signal. For teardown only;
    /// a cancelled owner must not produce late callbacks.
    pub fn cancel(&mut self) {
        self.watch = None;
    }
}

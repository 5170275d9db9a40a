//! Frame-by-frame viewport scroll animation.

use std::time::{Duration, Instant};

use galerie_core::{EasingType, ScrollConfig};

use super::easing::{lerp_u16, progress, EasingTypeExt};

/// State of one running animation.
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

/// Animates the page scroll offset toward a target row.
///
/// Call [`scroll_to`](Self::scroll_to) or [`scroll_by`](Self::scroll_by)
/// from input handlers, then [`update`](Self::update) every tick to get the
/// interpolated offset. Deltas arriving within one frame are batched.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current_scroll: u16,
    pending_delta: i32,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current_scroll: 0,
            pending_delta: 0,
        }
    }

    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.config.animation_duration_ms)
    }

    fn is_smooth(&self) -> bool {
        self.config.smooth_enabled && self.config.animation_duration_ms > 0
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether another update is needed before the viewport is at rest.
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Final offset once any running animation completes.
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.current_scroll
    }

    /// Jump without animating.
    pub fn set_scroll(&mut self, scroll: u16) {
        self.animation = None;
        self.current_scroll = scroll;
        self.pending_delta = 0;
    }

    /// Animate toward an absolute row, clamped to `max_scroll`.
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16, now: Instant) {
        let target = target.min(max_scroll);

        if !self.is_smooth() {
            self.current_scroll = target;
            self.animation = None;
            return;
        }

        let from = self.current_scroll;
        if from == target {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from,
            to: target,
            duration: self.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Scroll by a delta (positive = down). Batched until the next update.
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.is_smooth() {
            self.current_scroll =
                (self.current_scroll as i32 + delta).clamp(0, max_scroll as i32) as u16;
            self.animation = None;
            return;
        }
        self.pending_delta += delta;
    }

    pub fn scroll_down(&mut self, max_scroll: u16) {
        let lines = if self.is_smooth() {
            1
        } else {
            self.config.scroll_lines as i32
        };
        self.scroll_by(lines, max_scroll);
    }

    pub fn scroll_up(&mut self, max_scroll: u16) {
        let lines = if self.is_smooth() {
            1
        } else {
            self.config.scroll_lines as i32
        };
        self.scroll_by(-lines, max_scroll);
    }

    pub fn scroll_half_page(&mut self, down: bool, viewport_height: u16, max_scroll: u16) {
        let half = (viewport_height / 2).max(1) as i32;
        self.scroll_by(if down { half } else { -half }, max_scroll);
    }

    /// Advance the animation and return the current offset.
    pub fn update(&mut self, max_scroll: u16, now: Instant) -> u16 {
        if self.pending_delta != 0 {
            let target = self.target_scroll();
            let new_target =
                (target as i32 + self.pending_delta).clamp(0, max_scroll as i32) as u16;
            self.pending_delta = 0;

            if new_target != self.current_scroll {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.current_scroll,
                    to: new_target,
                    duration: self.animation_duration(),
                    easing: self.config.easing,
                });
            }
        }

        if let Some(ref anim) = self.animation {
            if now.saturating_duration_since(anim.start) >= anim.duration {
                self.current_scroll = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = progress(anim.start, anim.duration, now);
                let eased = anim.easing.apply(t);
                self.current_scroll = lerp_u16(anim.from, anim.to, eased).min(max_scroll);
            }
        }

        self.current_scroll
    }

    /// Stop at the current position, dropping any pending work.
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(smooth: bool) -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: smooth,
            animation_duration_ms: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let mut animator = ScrollAnimator::new(config(false));
        animator.scroll_to(100, 200, Instant::now());
        assert_eq!(animator.current_scroll(), 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_starts() {
        let mut animator = ScrollAnimator::new(config(true));
        animator.scroll_to(100, 200, Instant::now());
        assert!(animator.is_animating());
        assert_eq!(animator.target_scroll(), 100);
    }

    #[test]
    fn test_zero_distance_scroll_does_not_animate() {
        let mut animator = ScrollAnimator::new(config(true));
        animator.set_scroll(40);
        animator.scroll_to(40, 200, Instant::now());
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_scroll_by_batching() {
        let mut animator = ScrollAnimator::new(config(true));
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);

        animator.update(200, Instant::now());
        assert_eq!(animator.target_scroll(), 30);
    }

    #[test]
    fn test_animation_reaches_target() {
        let start = Instant::now();
        let mut animator = ScrollAnimator::new(config(true));
        animator.scroll_to(80, 200, start);

        let offset = animator.update(200, start + Duration::from_millis(200));
        assert_eq!(offset, 80);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_scroll_clamp_max() {
        let mut animator = ScrollAnimator::new(ScrollConfig::default());
        animator.set_scroll(50);
        animator.scroll_to(300, 100, Instant::now());
        animator.update(100, Instant::now());
        assert!(animator.target_scroll() <= 100);
    }
}

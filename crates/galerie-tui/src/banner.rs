//! Exhibition banner: rotation, marquee, and scroll-linked shading.

use std::time::{Duration, Instant};

use galerie_core::BannerConfig;

use crate::scroll::easing::smoothstep;

/// Marquee sub-phase for narrow terminals: hold, scroll the text out to
/// the left, pause, slide back in, hold, repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarqueePhase {
    HoldStart,
    ScrollLeft,
    Gap,
    SlideIn,
    HoldEnd,
}

#[derive(Debug, Clone)]
struct Marquee {
    phase: MarqueePhase,
    phase_started: Instant,
}

impl Marquee {
    fn new(now: Instant) -> Self {
        Self {
            phase: MarqueePhase::HoldStart,
            phase_started: now,
        }
    }

    fn phase_duration(&self, config: &BannerConfig) -> Duration {
        let ms = match self.phase {
            MarqueePhase::HoldStart => config.marquee_hold_start_ms,
            MarqueePhase::ScrollLeft => config.marquee_scroll_left_ms,
            MarqueePhase::Gap => config.marquee_gap_ms,
            MarqueePhase::SlideIn => config.marquee_slide_in_ms,
            MarqueePhase::HoldEnd => config.marquee_hold_end_ms,
        };
        Duration::from_millis(ms)
    }

    fn advance(&mut self, config: &BannerConfig, now: Instant) {
        while now.saturating_duration_since(self.phase_started) >= self.phase_duration(config) {
            let duration = self.phase_duration(config);
            self.phase = match self.phase {
                MarqueePhase::HoldStart => MarqueePhase::ScrollLeft,
                MarqueePhase::ScrollLeft => MarqueePhase::Gap,
                MarqueePhase::Gap => MarqueePhase::SlideIn,
                MarqueePhase::SlideIn => MarqueePhase::HoldEnd,
                MarqueePhase::HoldEnd => MarqueePhase::HoldStart,
            };
            // A phase configured to zero advances once per tick
            if duration.is_zero() {
                self.phase_started = now;
                break;
            }
            self.phase_started += duration;
        }
    }

    /// Horizontal text offset in columns. The text travels 110% of its own
    /// width so it fully clears the banner before re-entering.
    fn offset(&self, config: &BannerConfig, text_width: u16, now: Instant) -> i32 {
        let travel = -(text_width as i32 * 11 / 10);
        let elapsed = now.saturating_duration_since(self.phase_started);
        let duration = self.phase_duration(config);
        let t = if duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
        };
        match self.phase {
            MarqueePhase::HoldStart | MarqueePhase::HoldEnd => 0,
            MarqueePhase::ScrollLeft => (travel as f64 * t).round() as i32,
            MarqueePhase::Gap => travel,
            MarqueePhase::SlideIn => (travel as f64 * (1.0 - smoothstep(t))).round() as i32,
        }
    }
}

/// Header banner state machine.
///
/// Visible whenever not manually dismissed and at least one active
/// exhibition exists. With more than one active exhibition a rotation
/// timer advances the displayed index every marquee cycle plus a buffer.
/// Dismissal is manual only and cancels the rotation timer outright.
#[derive(Debug, Clone)]
pub struct BannerController {
    config: BannerConfig,
    dismissed: bool,
    menu_open: bool,
    /// Suppresses menu-close-on-scroll during menu-driven navigation,
    /// alongside the shared auto-scroll flag.
    navigating: bool,
    current_index: usize,
    rotation_deadline: Option<Instant>,
    marquee: Option<Marquee>,
    scroll_progress: f64,
}

impl BannerController {
    pub fn new(config: BannerConfig) -> Self {
        Self {
            config,
            dismissed: false,
            menu_open: false,
            navigating: false,
            current_index: 0,
            rotation_deadline: None,
            marquee: None,
            scroll_progress: 0.0,
        }
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn is_visible(&self, active_count: usize) -> bool {
        !self.dismissed && active_count > 0
    }

    /// Manual show/hide toggle. Hiding cancels the rotation timer so no
    /// orphaned callback rotates a hidden banner.
    pub fn toggle_dismissed(&mut self, now: Instant) {
        self.dismissed = !self.dismissed;
        if self.dismissed {
            self.rotation_deadline = None;
            self.marquee = None;
        } else {
            self.marquee = Some(Marquee::new(now));
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Index into the active exhibition list, clamped to the live count.
    pub fn display_index(&self, active_count: usize) -> usize {
        if active_count == 0 {
            0
        } else {
            self.current_index % active_count
        }
    }

    /// Advance rotation and marquee timers.
    pub fn on_tick(&mut self, active_count: usize, now: Instant) {
        if !self.is_visible(active_count) {
            self.rotation_deadline = None;
            return;
        }

        if let Some(marquee) = self.marquee.as_mut() {
            marquee.advance(&self.config, now);
        } else {
            self.marquee = Some(Marquee::new(now));
        }

        if active_count <= 1 {
            self.rotation_deadline = None;
            return;
        }

        let interval = Duration::from_millis(self.config.rotation_interval_ms());
        match self.rotation_deadline {
            None => self.rotation_deadline = Some(now + interval),
            Some(deadline) if now >= deadline => {
                self.current_index = (self.current_index + 1) % active_count;
                self.rotation_deadline = Some(now + interval);
                self.marquee = Some(Marquee::new(now));
            }
            Some(_) => {}
        }
    }

    /// Marquee text offset in columns for the current frame.
    pub fn marquee_offset(&self, text_width: u16, now: Instant) -> i32 {
        self.marquee
            .as_ref()
            .map(|m| m.offset(&self.config, text_width, now))
            .unwrap_or(0)
    }

    /// Scroll-linked shading value in [0, 1]: scroll distance over one
    /// viewport height, clamped. Cosmetic only.
    pub fn update_scroll_progress(&mut self, scroll_y: u16, viewport_height: u16) {
        if viewport_height == 0 {
            self.scroll_progress = 0.0;
            return;
        }
        self.scroll_progress = (scroll_y as f64 / viewport_height as f64).min(1.0);
    }

    pub fn scroll_progress(&self) -> f64 {
        self.scroll_progress
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    pub fn set_navigating(&mut self, navigating: bool) {
        self.navigating = navigating;
    }

    /// React to a user scroll: closes the open menu unless the scroll is
    /// programmatic (shared flag) or menu navigation is in progress
    /// (local flag). Returns whether the menu was closed.
    pub fn on_user_scroll(&mut self, auto_scrolling: bool) -> bool {
        if !self.menu_open || auto_scrolling || self.navigating {
            return false;
        }
        self.menu_open = false;
        true
    }

    pub fn rotation_armed(&self) -> bool {
        self.rotation_deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> BannerController {
        BannerController::new(BannerConfig::default())
    }

    #[test]
    fn test_visible_requires_active_exhibitions() {
        let banner = controller();
        assert!(banner.is_visible(1));
        assert!(!banner.is_visible(0));
    }

    #[test]
    fn test_dismissal_is_manual_and_sticky() {
        let mut banner = controller();
        let now = Instant::now();
        banner.toggle_dismissed(now);
        assert!(!banner.is_visible(3));
        banner.toggle_dismissed(now);
        assert!(banner.is_visible(3));
    }

    #[test]
    fn test_rotation_wraps_modulo_active_count() {
        let mut banner = controller();
        let start = Instant::now();
        let interval = Duration::from_millis(banner.config.rotation_interval_ms());

        banner.on_tick(3, start);
        assert!(banner.rotation_armed());

        let mut now = start;
        for expected in [1, 2, 0, 1] {
            now += interval;
            banner.on_tick(3, now);
            assert_eq!(banner.current_index(), expected);
        }
    }

    #[test]
    fn test_no_rotation_with_single_exhibition() {
        let mut banner = controller();
        banner.on_tick(1, Instant::now());
        assert!(!banner.rotation_armed());
    }

    #[test]
    fn test_dismissal_cancels_rotation_timer() {
        let mut banner = controller();
        let now = Instant::now();
        banner.on_tick(2, now);
        assert!(banner.rotation_armed());

        banner.toggle_dismissed(now);
        assert!(!banner.rotation_armed());
        banner.on_tick(2, now + Duration::from_secs(60));
        assert_eq!(banner.current_index(), 0);
    }

    #[test]
    fn test_display_index_clamps_to_live_count() {
        let mut banner = controller();
        banner.current_index = 5;
        assert_eq!(banner.display_index(2), 1);
        assert_eq!(banner.display_index(0), 0);
    }

    #[test]
    fn test_scroll_progress_clamped_and_monotonic() {
        let mut banner = controller();
        banner.update_scroll_progress(0, 40);
        assert_eq!(banner.scroll_progress(), 0.0);

        let mut prev = 0.0;
        for y in [5u16, 10, 20, 40, 80] {
            banner.update_scroll_progress(y, 40);
            assert!(banner.scroll_progress() >= prev);
            assert!(banner.scroll_progress() <= 1.0);
            prev = banner.scroll_progress();
        }
        assert_eq!(banner.scroll_progress(), 1.0);

        banner.update_scroll_progress(100, 0);
        assert_eq!(banner.scroll_progress(), 0.0);
    }

    #[test]
    fn test_menu_close_suppressed_during_programmatic_scroll() {
        let mut banner = controller();
        banner.set_menu_open(true);

        assert!(!banner.on_user_scroll(true));
        assert!(banner.is_menu_open());

        banner.set_navigating(true);
        assert!(!banner.on_user_scroll(false));
        assert!(banner.is_menu_open());

        banner.set_navigating(false);
        assert!(banner.on_user_scroll(false));
        assert!(!banner.is_menu_open());
    }

    #[test]
    fn test_marquee_holds_then_travels() {
        let mut banner = controller();
        let start = Instant::now();
        banner.on_tick(1, start);

        // HoldStart keeps the text at rest
        assert_eq!(banner.marquee_offset(40, start + Duration::from_millis(100)), 0);

        // Mid ScrollLeft the text has moved left
        let mid_scroll = start
            + Duration::from_millis(banner.config.marquee_hold_start_ms)
            + Duration::from_millis(banner.config.marquee_scroll_left_ms / 2);
        banner.on_tick(1, mid_scroll);
        assert!(banner.marquee_offset(40, mid_scroll) < 0);
    }
}

//! Smooth scrolling for the page viewport.
//!
//! `easing` holds the pure curve and interpolation math, `animator` the
//! frame-by-frame animation state, and `navigator` the section navigation
//! primitive that pairs scrolls with the auto-scroll signal.

pub mod animator;
pub mod easing;
pub mod navigator;

pub use animator::ScrollAnimator;
pub use navigator::SectionNavigator;

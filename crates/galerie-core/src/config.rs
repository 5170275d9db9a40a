use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub banner: BannerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll timeout in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Directory holding artwork and poster images
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            assets_dir: default_assets_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Easing curve used by scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable smooth scrolling animations
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing function for animations
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Lines per scroll step when smooth scrolling is disabled
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Animation frame rate
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Interval between scroll stability polls in milliseconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
    /// Consecutive stable polls required to consider a scroll finished
    #[serde(default = "default_stability_checks")]
    pub stability_checks: u8,
    /// Hard ceiling on scroll completion detection in milliseconds
    #[serde(default = "default_max_wait")]
    pub max_wait_ms: u64,
    /// Delay after completion before the end signal is emitted
    #[serde(default = "default_settle_delay")]
    pub settle_delay_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: default_easing(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
            poll_interval_ms: default_poll_interval(),
            stability_checks: default_stability_checks(),
            max_wait_ms: default_max_wait(),
            settle_delay_ms: default_settle_delay(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerConfig {
    /// Hold before the marquee starts moving, in milliseconds
    #[serde(default = "default_marquee_hold_start")]
    pub marquee_hold_start_ms: u64,
    /// Duration of the leftward marquee scroll
    #[serde(default = "default_marquee_scroll_left")]
    pub marquee_scroll_left_ms: u64,
    /// Pause between scroll-out and slide-in
    #[serde(default = "default_marquee_gap")]
    pub marquee_gap_ms: u64,
    /// Duration of the slide back in from the left
    #[serde(default = "default_marquee_slide_in")]
    pub marquee_slide_in_ms: u64,
    /// Hold at the end of the cycle
    #[serde(default = "default_marquee_hold_end")]
    pub marquee_hold_end_ms: u64,
    /// Extra buffer so rotation never cuts the marquee mid-animation
    #[serde(default = "default_rotate_buffer")]
    pub rotate_buffer_ms: u64,
}

impl BannerConfig {
    /// Full marquee cycle duration, without the rotation buffer
    pub fn marquee_cycle_ms(&self) -> u64 {
        self.marquee_hold_start_ms
            + self.marquee_scroll_left_ms
            + self.marquee_gap_ms
            + self.marquee_slide_in_ms
            + self.marquee_hold_end_ms
    }

    /// Interval between exhibition rotations
    pub fn rotation_interval_ms(&self) -> u64 {
        self.marquee_cycle_ms() + self.rotate_buffer_ms
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            marquee_hold_start_ms: default_marquee_hold_start(),
            marquee_scroll_left_ms: default_marquee_scroll_left(),
            marquee_gap_ms: default_marquee_gap(),
            marquee_slide_in_ms: default_marquee_slide_in(),
            marquee_hold_end_ms: default_marquee_hold_end(),
            rotate_buffer_ms: default_rotate_buffer(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the platform config directory.
    ///
    /// Missing file is not an error; defaults apply.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: AppConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("could not determine config directory".into()))?;
        Ok(dir.join("galerie").join("config.toml"))
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    50
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_animation_duration() -> u64 {
    150
}

fn default_easing() -> EasingType {
    EasingType::Cubic
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u16 {
    60
}

fn default_poll_interval() -> u64 {
    50
}

fn default_stability_checks() -> u8 {
    5
}

fn default_max_wait() -> u64 {
    3000
}

fn default_settle_delay() -> u64 {
    250
}

fn default_marquee_hold_start() -> u64 {
    1800
}

fn default_marquee_scroll_left() -> u64 {
    7500
}

fn default_marquee_gap() -> u64 {
    250
}

fn default_marquee_slide_in() -> u64 {
    3000
}

fn default_marquee_hold_end() -> u64 {
    1600
}

fn default_rotate_buffer() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.scroll.smooth_enabled);
        assert_eq!(config.scroll.animation_duration_ms, 150);
        assert_eq!(config.scroll.easing, EasingType::Cubic);
        assert_eq!(config.scroll.poll_interval_ms, 50);
        assert_eq!(config.scroll.stability_checks, 5);
        assert_eq!(config.scroll.max_wait_ms, 3000);
        assert_eq!(config.scroll.settle_delay_ms, 250);
        assert_eq!(config.ui.tick_rate_ms, 50);
    }

    #[test]
    fn test_marquee_cycle() {
        let banner = BannerConfig::default();
        assert_eq!(banner.marquee_cycle_ms(), 1800 + 7500 + 250 + 3000 + 1600);
        assert_eq!(banner.rotation_interval_ms(), banner.marquee_cycle_ms() + 300);
    }

    #[test]
    fn test_partial_config_parses() {
        let config: AppConfig = toml::from_str(
            r#"
            [scroll]
            smooth_enabled = false
            easing = "linear"
            "#,
        )
        .unwrap();
        assert!(!config.scroll.smooth_enabled);
        assert_eq!(config.scroll.easing, EasingType::Linear);
        // Untouched sections keep their defaults
        assert_eq!(config.banner.rotate_buffer_ms, 300);
    }
}

pub mod catalog;
pub mod config;
pub mod error;
pub mod exhibition;
pub mod signal;

pub use config::{AppConfig, BannerConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use signal::{AutoScrollSignal, ScrollPhase};

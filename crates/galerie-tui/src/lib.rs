pub mod app;
pub mod assets;
pub mod banner;
pub mod event;
pub mod input;
pub mod lightbox;
pub mod scroll;
pub mod sections;
pub mod swipe;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use theme::Theme;

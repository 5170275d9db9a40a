pub mod artwork_lightbox;
pub mod header;
pub mod page;
pub mod poster_lightbox;
pub mod status_bar;

pub use artwork_lightbox::ArtworkLightboxWidget;
pub use header::HeaderWidget;
pub use page::PageWidget;
pub use poster_lightbox::PosterLightboxWidget;
pub use status_bar::StatusBarWidget;

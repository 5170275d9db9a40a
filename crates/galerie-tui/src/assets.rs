//! Artwork and poster images loaded from the assets directory.

use std::collections::HashMap;
use std::path::PathBuf;

use image::DynamicImage;
use tracing::warn;

/// Lazily loads and caches images by relative path.
///
/// A failed load is cached as `None` so the warning is emitted once and the
/// viewer falls back to a placeholder instead of retrying every frame.
pub struct ImageCache {
    assets_dir: PathBuf,
    images: HashMap<String, Option<DynamicImage>>,
}

impl ImageCache {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            images: HashMap::new(),
        }
    }

    /// Fetch an image, loading it from disk on first access.
    pub fn get(&mut self, relative: &str) -> Option<&DynamicImage> {
        if !self.images.contains_key(relative) {
            let path = self.assets_dir.join(relative);
            let loaded = match image::open(&path) {
                Ok(img) => Some(img),
                Err(err) => {
                    warn!(path = %path.display(), %err, "failed to load image");
                    None
                }
            };
            self.images.insert(relative.to_string(), loaded);
        }
        self.images.get(relative).and_then(|img| img.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_image_cached_as_none() {
        let mut cache = ImageCache::new("/nonexistent");
        assert!(cache.get("no-such.jpg").is_none());
        // Second lookup hits the negative cache
        assert!(cache.get("no-such.jpg").is_none());
        assert_eq!(cache.images.len(), 1);
    }
}

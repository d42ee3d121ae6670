use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::image_loader::DisplayBuffer;

/// Small LRU of decoded buffers for images next to the current one.
pub struct ImageCache {
    buffers: HashMap<PathBuf, DisplayBuffer>,
    max_cache_size: usize,
    access_order: Vec<PathBuf>,
}

impl ImageCache {
    pub fn new(max_size: usize) -> Self {
        Self {
            buffers: HashMap::new(),
            max_cache_size: max_size.max(1),
            access_order: Vec::new(),
        }
    }

    /// Removes and returns the buffer for `path`; the caller takes ownership.
    pub fn take(&mut self, path: &Path) -> Option<DisplayBuffer> {
        let buffer = self.buffers.remove(path)?;
        if let Some(pos) = self.access_order.iter().position(|p| p == path) {
            self.access_order.remove(pos);
        }
        Some(buffer)
    }

    pub fn insert(&mut self, path: PathBuf, buffer: DisplayBuffer) {
        if let Some(pos) = self.access_order.iter().position(|p| *p == path) {
            self.access_order.remove(pos);
        }

        while self.buffers.len() >= self.max_cache_size && !self.access_order.is_empty() {
            let oldest = self.access_order.remove(0);
            self.buffers.remove(&oldest);
        }

        self.buffers.insert(path.clone(), buffer);
        self.access_order.push(path);
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.buffers.contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scaling::ScaleBounds;
    use image::{DynamicImage, RgbImage};

    fn buffer(name: &str) -> (PathBuf, DisplayBuffer) {
        let path = PathBuf::from(name);
        let image = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        let buffer = DisplayBuffer::from_image(path.clone(), image, ScaleBounds::new(2, 2));
        (path, buffer)
    }

    #[test]
    fn test_evicts_oldest_entry() {
        let mut cache = ImageCache::new(2);
        for name in ["a.png", "b.png", "c.png"] {
            let (path, buf) = buffer(name);
            cache.insert(path, buf);
        }

        assert!(!cache.contains(Path::new("a.png")));
        assert!(cache.contains(Path::new("b.png")));
        assert!(cache.contains(Path::new("c.png")));
    }

    #[test]
    fn test_take_removes_entry() {
        let mut cache = ImageCache::new(2);
        let (path, buf) = buffer("a.png");
        cache.insert(path.clone(), buf);

        let taken = cache.take(&path).unwrap();
        assert_eq!(taken.source(), path.as_path());
        assert!(!cache.contains(&path));
        assert!(cache.take(&path).is_none());
    }

    #[test]
    fn test_reinsert_refreshes_recency() {
        let mut cache = ImageCache::new(2);
        let (a, buf_a) = buffer("a.png");
        let (b, buf_b) = buffer("b.png");
        cache.insert(a.clone(), buf_a.clone());
        cache.insert(b, buf_b);
        cache.insert(a.clone(), buf_a);

        let (c, buf_c) = buffer("c.png");
        cache.insert(c, buf_c);

        assert!(cache.contains(&a));
        assert!(!cache.contains(Path::new("b.png")));
    }
}

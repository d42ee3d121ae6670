use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use rayon::prelude::*;
use tracing::debug;

use crate::core::image_cache::ImageCache;
use crate::core::image_list::{RowId, RowProvider};
use crate::core::image_loader::DisplayBuffer;
use crate::core::scaling::ScaleBounds;

/// Decodes the neighbours of the current row off the UI thread.
///
/// Results travel back over a channel and are merged into an [`ImageCache`]
/// by [`PreloadManager::process_loaded_images`], which runs on the UI thread.
pub struct PreloadManager {
    buffer_receiver: mpsc::Receiver<DisplayBuffer>,
    buffer_sender: mpsc::Sender<DisplayBuffer>,
    loading_paths: Arc<Mutex<HashSet<PathBuf>>>,
    preload_range: usize,
    bounds: ScaleBounds,
}

impl PreloadManager {
    pub fn new(preload_range: usize, bounds: ScaleBounds) -> Self {
        let (sender, receiver) = mpsc::channel();

        Self {
            buffer_receiver: receiver,
            buffer_sender: sender,
            loading_paths: Arc::new(Mutex::new(HashSet::new())),
            preload_range,
            bounds,
        }
    }

    pub fn preload_around<L: RowProvider + ?Sized>(
        &self,
        list: &L,
        current: RowId,
        image_cache: &ImageCache,
    ) {
        let paths_to_load: Vec<PathBuf> = neighbours(list, current, self.preload_range)
            .into_iter()
            .filter_map(|row| list.path_for_row(row).ok())
            .filter(|path| !image_cache.contains(path))
            .collect();

        if !paths_to_load.is_empty() {
            self.spawn_loading_thread(paths_to_load);
        }
    }

    fn spawn_loading_thread(&self, paths: Vec<PathBuf>) {
        let sender = self.buffer_sender.clone();
        let loading_paths = Arc::clone(&self.loading_paths);
        let bounds = self.bounds;

        thread::spawn(move || {
            paths
                .into_par_iter()
                .filter_map(|path| {
                    {
                        let mut loading = loading_paths.lock().ok()?;
                        if !loading.insert(path.clone()) {
                            return None;
                        }
                    }

                    let result = DisplayBuffer::load(&path, bounds);

                    if let Ok(mut loading) = loading_paths.lock() {
                        loading.remove(&path);
                    }

                    match result {
                        Ok(buffer) => Some(buffer),
                        Err(e) => {
                            debug!("preload skipped: {e}");
                            None
                        }
                    }
                })
                .for_each(|buffer| {
                    // Receiver gone means the window closed.
                    let _ = sender.send(buffer);
                });
        });
    }

    /// Moves finished buffers into the cache. Returns how many arrived.
    pub fn process_loaded_images(&self, image_cache: &mut ImageCache) -> usize {
        let mut received = 0;
        while let Ok(buffer) = self.buffer_receiver.try_recv() {
            image_cache.insert(buffer.source().to_path_buf(), buffer);
            received += 1;
        }
        received
    }
}

/// Rows within `range` steps of `current`, nearest first.
fn neighbours<L: RowProvider + ?Sized>(list: &L, current: RowId, range: usize) -> Vec<RowId> {
    let mut rows = Vec::new();
    let mut before = Some(current);
    let mut after = Some(current);

    for _ in 0..range {
        after = after.and_then(|row| list.next_row(row));
        before = before.and_then(|row| list.previous_row(row));
        rows.extend(after);
        rows.extend(before);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::image_list::ImageList;
    use image::RgbImage;
    use std::time::{Duration, Instant};

    #[test]
    fn test_neighbours_stop_at_list_ends() {
        let list = ImageList::from_paths(["a", "b", "c", "d"].map(PathBuf::from));
        let first = list.first_row().unwrap();
        let second = list.next_row(first).unwrap();

        assert_eq!(neighbours(&list, first, 1), vec![second]);
        assert_eq!(neighbours(&list, second, 5).len(), 3);
        assert!(neighbours(&list, first, 0).is_empty());
    }

    #[test]
    fn test_preloads_next_image_into_cache() {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<PathBuf> = ["a.png", "b.png"]
            .iter()
            .map(|name| {
                let path = dir.path().join(name);
                RgbImage::new(40, 30).save(&path).unwrap();
                path
            })
            .collect();
        let list = ImageList::from_paths(paths.clone());

        let manager = PreloadManager::new(1, ScaleBounds::new(20, 20));
        let mut cache = ImageCache::new(4);
        manager.preload_around(&list, list.first_row().unwrap(), &cache);

        let deadline = Instant::now() + Duration::from_secs(10);
        while !cache.contains(&paths[1]) && Instant::now() < deadline {
            manager.process_loaded_images(&mut cache);
            thread::sleep(Duration::from_millis(10));
        }

        let buffer = cache.take(&paths[1]).expect("neighbour was not preloaded");
        assert_eq!(buffer.scaled().width(), 20);
        assert!(!cache.contains(&paths[0]));
    }
}

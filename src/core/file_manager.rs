use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::image_format::ImageFormat;
use crate::core::image_list::{ImageList, RowId};
use crate::error::Result;
use crate::i18n::en::FILTER_IMAGES;

pub struct FileManager;

impl FileManager {
    pub fn scan_directory(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
        let mut image_paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && ImageFormat::is_supported(p))
            .collect();

        image_paths.sort();
        Ok(image_paths)
    }

    /// Builds the image list for a file or a directory.
    ///
    /// For a file, the list holds its directory and the returned row points
    /// at the file. For a directory, the row is the first image. The row is
    /// `None` only when the list is empty.
    pub fn open_target(target: &Path) -> Result<(ImageList, Option<RowId>)> {
        let target = fs::canonicalize(target)?;

        let (dir, selected) = if target.is_dir() {
            (target.as_path(), None)
        } else {
            let parent = target.parent().unwrap_or_else(|| Path::new("/"));
            (parent, Some(target.as_path()))
        };

        let images = ImageList::from_paths(Self::scan_directory(dir)?);
        let start = selected
            .and_then(|path| images.find_row(path))
            .or_else(|| images.first_row());

        debug!(dir = %dir.display(), count = images.len(), "scanned image directory");
        Ok((images, start))
    }

    pub fn get_supported_file_filter() -> (&'static str, Vec<&'static str>) {
        (FILTER_IMAGES, ImageFormat::get_supported_extensions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::image_list::RowProvider;
    use image::RgbImage;

    fn populate(dir: &Path) {
        for name in ["c.png", "a.jpg", "b.bmp"] {
            RgbImage::new(2, 2).save(dir.join(name)).unwrap();
        }
        fs::write(dir.join("notes.txt"), "skip me").unwrap();
        fs::create_dir(dir.join("nested.png")).unwrap();
    }

    #[test]
    fn test_scan_directory_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());

        let names: Vec<String> = FileManager::scan_directory(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.jpg", "b.bmp", "c.png"]);
    }

    #[test]
    fn test_open_file_selects_it() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());

        let (images, start) = FileManager::open_target(&dir.path().join("b.bmp")).unwrap();
        assert_eq!(images.len(), 3);
        let path = images.path_for_row(start.unwrap()).unwrap();
        assert_eq!(path.file_name().unwrap(), "b.bmp");
    }

    #[test]
    fn test_open_directory_starts_at_first_image() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());

        let (images, start) = FileManager::open_target(dir.path()).unwrap();
        assert_eq!(start, images.first_row());
        let path = images.path_for_row(start.unwrap()).unwrap();
        assert_eq!(path.file_name().unwrap(), "a.jpg");
    }

    #[test]
    fn test_open_unsupported_file_falls_back_to_first_image() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());

        let (images, start) = FileManager::open_target(&dir.path().join("notes.txt")).unwrap();
        assert_eq!(start, images.first_row());
    }

    #[test]
    fn test_open_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let (images, start) = FileManager::open_target(dir.path()).unwrap();
        assert!(images.is_empty());
        assert_eq!(start, None);
    }

    #[test]
    fn test_open_missing_target_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileManager::open_target(&dir.path().join("gone.png")).is_err());
    }
}

use std::path::Path;

/// Raster formats the bundled decoders can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Bmp,
    Gif,
    Tiff,
    Webp,
}

impl ImageFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "bmp" => Some(ImageFormat::Bmp),
            "gif" => Some(ImageFormat::Gif),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn is_supported(path: &Path) -> bool {
        Self::from_path(path).is_some()
    }

    pub fn get_supported_extensions() -> Vec<&'static str> {
        vec!["jpg", "jpeg", "png", "bmp", "gif", "tiff", "tif", "webp"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(ImageFormat::from_extension("JPG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("Tif"), Some(ImageFormat::Tiff));
        assert_eq!(ImageFormat::from_extension("svg"), None);
    }

    #[test]
    fn test_is_supported() {
        assert!(ImageFormat::is_supported(Path::new("/tmp/sunset.PNG")));
        assert!(!ImageFormat::is_supported(Path::new("/tmp/notes.txt")));
        assert!(!ImageFormat::is_supported(Path::new("/tmp/no_extension")));
    }

    #[test]
    fn test_every_listed_extension_is_recognised() {
        for ext in ImageFormat::get_supported_extensions() {
            assert!(ImageFormat::from_extension(ext).is_some(), "{ext}");
        }
    }
}

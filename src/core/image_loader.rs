use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageReader};

use crate::core::scaling::ScaleBounds;
use crate::error::{Result, ViewerError};

/// Which of the two decoded buffers is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeVariant {
    Original,
    #[default]
    Scaled,
}

/// The decoded image at the current position, as decoded and fitted to the
/// display box. Both buffers always come from the same file.
#[derive(Debug, Clone)]
pub struct DisplayBuffer {
    source: PathBuf,
    original: DynamicImage,
    scaled: DynamicImage,
}

impl DisplayBuffer {
    pub fn load(path: &Path, bounds: ScaleBounds) -> Result<Self> {
        let original = decode_image(path)?;
        Ok(Self::from_image(path.to_path_buf(), original, bounds))
    }

    pub fn from_image(source: PathBuf, original: DynamicImage, bounds: ScaleBounds) -> Self {
        let (width, height) = bounds.scaled_dimensions(original.width(), original.height());
        let scaled = original.resize_exact(width, height, FilterType::Triangle);
        Self {
            source,
            original,
            scaled,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn original(&self) -> &DynamicImage {
        &self.original
    }

    pub fn scaled(&self) -> &DynamicImage {
        &self.scaled
    }

    pub fn get(&self, variant: SizeVariant) -> &DynamicImage {
        match variant {
            SizeVariant::Original => self.original(),
            SizeVariant::Scaled => self.scaled(),
        }
    }
}

/// Decodes `path`, trusting the file contents over its extension.
pub fn decode_image(path: &Path) -> Result<DynamicImage> {
    let decode_error = |source: ImageError| ViewerError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path).map_err(|e| decode_error(ImageError::IoError(e)))?;
    let reader = reader
        .with_guessed_format()
        .map_err(|e| decode_error(ImageError::IoError(e)))?;
    reader.decode().map_err(decode_error)
}

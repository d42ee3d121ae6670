use std::path::PathBuf;
use thiserror::Error;

use crate::core::image_list::RowId;

#[derive(Debug, Error)]
pub enum ViewerError {
    /// The file is missing, unreadable or not a decodable image.
    #[error("could not decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A row reference outlived the row it pointed at.
    #[error("row {0} no longer resolves to an image")]
    NotFound(RowId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("wallpaper setter failed: {0}")]
    Process(String),

    #[error("invalid settings file: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ViewerError>;

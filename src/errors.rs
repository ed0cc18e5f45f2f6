//! Crate-wide error type

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::exif::ExifError;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("EXIF error: {0}")]
    Exif(#[from] ExifError),

    #[error("Failed to parse TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported catalog format: {}", .0.display())]
    UnsupportedCatalog(PathBuf),

    #[error("Photo not found: {0}")]
    PhotoNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type CaptureResult<T> = Result<T, CaptureError>;

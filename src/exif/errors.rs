//! Error types for EXIF parsing

use std::io;

use thiserror::Error;

/// Reasons a buffer could not be read as EXIF-carrying JPEG
#[derive(Debug, Error)]
pub enum ExifError {
    /// Read past the end of the buffer, or another I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The buffer does not start with the JPEG start-of-image marker
    #[error("Missing JPEG start-of-image marker")]
    NotJpeg,
    /// A segment did not start with 0xFF
    #[error("Corrupted JPEG: expected a marker at offset {0}")]
    CorruptedSegment(u64),
    /// Every segment was walked without finding APP1
    #[error("No APP1 segment found")]
    MissingApp1,
    /// The APP1 segment does not start with "Exif"
    #[error("APP1 segment does not carry an Exif signature")]
    MissingSignature,
    /// Invalid TIFF byte order mark
    #[error("Invalid byte order marker: {0:#06x}")]
    InvalidByteOrder(u16),
    /// TIFF magic number is not 42
    #[error("Invalid TIFF magic number: {0:#06x}")]
    InvalidMagic(u16),
    /// First IFD offset points inside the TIFF header
    #[error("Invalid IFD offset: {0}")]
    InvalidIfdOffset(u32),
}

/// Result type for EXIF operations
pub type ExifResult<T> = Result<T, ExifError>;

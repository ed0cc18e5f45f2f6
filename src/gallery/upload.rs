//! Metadata for newly uploaded photos
//!
//! EXIF fields are combined with the dimensions found by decoding the
//! image header. Each EXIF dimension wins on its own when present and
//! non-zero.

use std::io::Cursor;

use image::ImageReader;
use log::debug;
use serde::Serialize;

use crate::exif::{self, ExifData};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Everything known about an uploaded file before the user edits it
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMetadata {
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// File size in MB, one decimal
    pub file_size: f64,
    pub exif: ExifData,
}

/// Gathers upload metadata from a complete file
pub fn resolve_metadata(data: &[u8]) -> UploadMetadata {
    let exif = exif::read_exif(data);
    let probed = probe_dimensions(data);

    let width = exif.width.filter(|&w| w != 0).or(probed.map(|(w, _)| w));
    let height = exif.height.filter(|&h| h != 0).or(probed.map(|(_, h)| h));

    UploadMetadata {
        width,
        height,
        file_size: size_in_mb(data.len()),
        exif,
    }
}

fn size_in_mb(bytes: usize) -> f64 {
    (bytes as f64 / BYTES_PER_MB * 10.0).round() / 10.0
}

/// Reads the natural dimensions from the image header
pub fn probe_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    let reader = ImageReader::new(Cursor::new(data)).with_guessed_format().ok()?;
    match reader.into_dimensions() {
        Ok(dimensions) => Some(dimensions),
        Err(e) => {
            debug!("Could not probe image dimensions: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        RgbImage::new(width, height).write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_probed_dimensions_without_exif() {
        let metadata = resolve_metadata(&png(8, 5));
        assert_eq!((metadata.width, metadata.height), (Some(8), Some(5)));
        assert!(metadata.exif.is_empty());
        assert_eq!(metadata.file_size, 0.0);
    }

    #[test]
    fn test_file_size_rounds_to_one_decimal() {
        assert_eq!(size_in_mb(0), 0.0);
        assert_eq!(size_in_mb(1024 * 1024), 1.0);
        assert_eq!(size_in_mb(1_320_000), 1.3);
        assert_eq!(size_in_mb(3_100_000), 3.0);
    }

    #[test]
    fn test_undecodable_data_has_no_dimensions() {
        let metadata = resolve_metadata(b"not an image");
        assert_eq!(metadata.width, None);
        assert_eq!(metadata.height, None);
    }
}

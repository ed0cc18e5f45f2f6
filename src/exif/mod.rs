//! EXIF metadata reader for JPEG files
//!
//! This module walks the JPEG marker segments to the APP1 block, reads
//! the embedded TIFF header and image file directories, and maps a small
//! set of camera fields to display-ready values.
//!
//! Two entry points exist. [`read_exif`] never fails: any problem with
//! the input yields an empty [`ExifData`]. [`ExifReader::parse`] is the
//! strict variant and reports why a buffer could not be read.

pub mod constants;
pub mod errors;
pub mod ifd;
pub(crate) mod jpeg;
pub mod metadata;
pub mod reader;
pub mod tags;
#[cfg(test)]
mod tests;

use std::fs;
use std::path::Path;

use log::{debug, warn};

pub use errors::{ExifError, ExifResult};
pub use ifd::{Ifd, IfdEntry};
pub use metadata::ExifData;
pub use reader::ExifReader;
pub use tags::{Dictionary, ExifField, ExifTags, TagValue};

/// Reads camera metadata from a complete JPEG file held in memory
///
/// Malformed, truncated or EXIF-less input produces an empty result.
pub fn read_exif(data: &[u8]) -> ExifData {
    match ExifReader::parse(data) {
        Ok(tags) => ExifData::from_tags(&tags),
        Err(e) => {
            debug!("No EXIF metadata recovered: {}", e);
            ExifData::default()
        }
    }
}

/// Reads camera metadata from a JPEG file on disk
///
/// The whole file is loaded before parsing. An unreadable file produces
/// an empty result, like any other parse failure.
pub fn read_exif_file<P: AsRef<Path>>(path: P) -> ExifData {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(data) => read_exif(&data),
        Err(e) => {
            warn!("Could not read {}: {}", path.display(), e);
            ExifData::default()
        }
    }
}

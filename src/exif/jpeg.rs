//! JPEG marker segment walking
//!
//! JPEG framing is always big-endian, independent of the byte order the
//! embedded TIFF header declares later on.

use std::io::{Seek, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, trace};

use crate::exif::constants::jpeg;
use crate::exif::errors::{ExifError, ExifResult};
use crate::io::seekable::SeekableReader;

/// Checks the start-of-image marker and returns the offset of the APP1
/// segment
///
/// Segments are skipped by their declared length, which includes the
/// length field itself but not the two marker bytes.
pub fn find_app1(reader: &mut dyn SeekableReader) -> ExifResult<u64> {
    let len = reader.byte_len()?;
    reader.seek(SeekFrom::Start(0))?;

    if reader.read_u16::<BigEndian>()? != jpeg::START_OF_IMAGE {
        return Err(ExifError::NotJpeg);
    }

    let mut offset: u64 = 2;
    while offset < len {
        reader.seek(SeekFrom::Start(offset))?;

        if reader.read_u8()? != jpeg::MARKER_PREFIX {
            return Err(ExifError::CorruptedSegment(offset));
        }

        let marker = reader.read_u8()?;
        if marker == jpeg::APP1 {
            debug!("APP1 segment at offset {}", offset);
            return Ok(offset);
        }

        let segment_length = reader.read_u16::<BigEndian>()?;
        trace!("Skipping segment {:#04x} of length {} at offset {}", marker, segment_length, offset);
        offset += 2 + segment_length as u64;
    }

    Err(ExifError::MissingApp1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_finds_app1_after_skipping_app0() {
        let data: Vec<u8> = vec![
            0xFF, 0xD8, // SOI
            0xFF, 0xE0, 0x00, 0x04, 0xAA, 0xBB, // APP0 with 2 payload bytes
            0xFF, 0xE1, 0x00, 0x02, // APP1
        ];
        let mut cursor = Cursor::new(data);
        assert_eq!(find_app1(&mut cursor).unwrap(), 8);
    }

    #[test]
    fn test_rejects_missing_soi() {
        let mut cursor = Cursor::new(vec![0x89, 0x50, 0x4E, 0x47]);
        assert!(matches!(find_app1(&mut cursor), Err(ExifError::NotJpeg)));
    }

    #[test]
    fn test_rejects_corrupted_marker() {
        let mut cursor = Cursor::new(vec![0xFF, 0xD8, 0x00, 0xE0, 0x00, 0x02]);
        assert!(matches!(find_app1(&mut cursor), Err(ExifError::CorruptedSegment(2))));
    }

    #[test]
    fn test_runs_off_the_end_without_app1() {
        let mut cursor = Cursor::new(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x02]);
        assert!(matches!(find_app1(&mut cursor), Err(ExifError::MissingApp1)));
    }
}

//! Seekable reader abstraction
//!
//! The EXIF parser jumps between segment headers, directory entries and
//! out-of-line values, so it needs random access on top of plain reads.

use std::io::{Cursor, Read, Seek, SeekFrom};

/// A reader that can both read and reposition itself
pub trait SeekableReader: Read + Seek {
    /// Total length of the underlying data in bytes
    fn byte_len(&mut self) -> std::io::Result<u64> {
        let position = self.stream_position()?;
        let len = self.seek(SeekFrom::End(0))?;
        self.seek(SeekFrom::Start(position))?;
        Ok(len)
    }
}

impl<T: Read + Seek> SeekableReader for T {}

/// Wraps a complete in-memory file for parsing
pub fn from_bytes(data: &[u8]) -> Cursor<&[u8]> {
    Cursor::new(data)
}

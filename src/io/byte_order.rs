//! Byte order handling for TIFF-structured metadata
//!
//! EXIF payloads embed a TIFF header whose first two bytes decide how
//! every following multi-byte value is read. The detected order is turned
//! into a handler once and then used for the rest of the parse.

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::Result;

use crate::exif::constants::header;
use crate::exif::errors::{ExifError, ExifResult};
use crate::io::seekable::SeekableReader;

/// Byte order declared by a TIFF header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order (II)
    LittleEndian,
    /// Big-endian byte order (MM)
    BigEndian,
}

impl ByteOrder {
    /// Reads the two-byte order mark at the current position
    pub fn detect(reader: &mut dyn SeekableReader) -> ExifResult<Self> {
        let mark = reader.read_u16::<BigEndian>()?;
        Self::from_mark(mark)
    }

    /// Maps an order mark to a byte order
    pub fn from_mark(mark: u16) -> ExifResult<Self> {
        match mark {
            header::LITTLE_ENDIAN_MARK => Ok(ByteOrder::LittleEndian),
            header::BIG_ENDIAN_MARK => Ok(ByteOrder::BigEndian),
            _ => Err(ExifError::InvalidByteOrder(mark)),
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (II)",
            ByteOrder::BigEndian => "Big Endian (MM)",
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }

    /// Extracts a SHORT stored in the first two bytes of a four-byte
    /// value field that was read as a LONG in this byte order
    pub fn inline_short(&self, value_field: u32) -> u16 {
        match self {
            ByteOrder::LittleEndian => (value_field & 0xFFFF) as u16,
            ByteOrder::BigEndian => (value_field >> 16) as u16,
        }
    }
}

/// Strategy for reading multi-byte values in a fixed byte order
pub trait ByteOrderHandler {
    /// Read a u16 value
    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16>;

    /// Read a u32 value
    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32>;

    /// Read a rational value (two u32 values as numerator/denominator)
    fn read_rational(&self, reader: &mut dyn SeekableReader) -> Result<(u32, u32)> {
        let numerator = self.read_u32(reader)?;
        let denominator = self.read_u32(reader)?;
        Ok((numerator, denominator))
    }
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16> {
        reader.read_u16::<LittleEndian>()
    }

    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32> {
        reader.read_u32::<LittleEndian>()
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16> {
        reader.read_u16::<BigEndian>()
    }

    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32> {
        reader.read_u32::<BigEndian>()
    }
}

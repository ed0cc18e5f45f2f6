//! EXIF reader implementation
//!
//! Locates the APP1 segment of a JPEG, validates the TIFF header inside
//! it, then reads the TIFF-level directory and, when present, the EXIF
//! sub-directory it points to. All multi-byte reads after the byte order
//! mark go through the handler created from that mark.

use std::io::{Read, Seek, SeekFrom};

use log::{debug, info, trace};

use crate::exif::constants::{field_types, header};
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::ifd::{Ifd, IfdEntry};
use crate::exif::jpeg;
use crate::exif::constants::jpeg::SEGMENT_HEADER_SIZE;
use crate::exif::tags::{Dictionary, ExifField, ExifTags, TagValue};
use crate::io::byte_order::{ByteOrder, ByteOrderHandler};
use crate::io::seekable::{self, SeekableReader};

/// Location and byte order of the TIFF structure inside APP1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Absolute offset of the TIFF header; all directory offsets are
    /// relative to it
    pub start: u64,
    /// Byte order declared by the header
    pub byte_order: ByteOrder,
    /// Offset of the first directory, relative to `start`
    pub first_ifd_offset: u32,
}

/// Reader for the EXIF block of a JPEG file
#[derive(Default)]
pub struct ExifReader {
    /// Header of the last successful read
    header: Option<TiffHeader>,
    /// Directories visited during the last read, in visiting order
    directories: Vec<Ifd>,
}

impl ExifReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a complete JPEG file held in memory
    pub fn parse(data: &[u8]) -> ExifResult<ExifTags> {
        let mut cursor = seekable::from_bytes(data);
        ExifReader::new().read(&mut cursor)
    }

    /// Reads the EXIF tags from the given reader
    ///
    /// 1. Find the APP1 segment
    /// 2. Validate the "Exif" signature and TIFF header
    /// 3. Read the TIFF-level directory
    /// 4. Follow ExifIFDPointer into the EXIF sub-directory and merge it
    pub fn read(&mut self, reader: &mut dyn SeekableReader) -> ExifResult<ExifTags> {
        self.header = None;
        self.directories.clear();

        let app1_offset = jpeg::find_app1(reader)?;
        let header = Self::read_tiff_header(reader, app1_offset + SEGMENT_HEADER_SIZE)?;
        debug!(
            "TIFF header at {}: {}, first IFD at {}",
            header.start,
            header.byte_order.name(),
            header.first_ifd_offset
        );
        self.header = Some(header);

        let walker = DirectoryWalker::new(header);

        let tiff_ifd = walker.read_ifd(reader, header.first_ifd_offset)?;
        let mut tags = walker.read_tags(reader, &tiff_ifd, Dictionary::Tiff)?;
        self.directories.push(tiff_ifd);

        let exif_pointer = tags
            .get(ExifField::ExifIfdPointer)
            .and_then(|value| value.as_u32())
            .filter(|&offset| offset != 0);

        if let Some(pointer) = exif_pointer {
            debug!("Following ExifIFDPointer to {}", pointer);
            let exif_ifd = walker.read_ifd(reader, pointer)?;
            let exif_tags = walker.read_tags(reader, &exif_ifd, Dictionary::Exif)?;
            self.directories.push(exif_ifd);
            tags.merge(exif_tags);
        }

        info!("Read {} EXIF tags from {} directories", tags.len(), self.directories.len());
        Ok(tags)
    }

    /// Header found by the last successful read
    pub fn header(&self) -> Option<&TiffHeader> {
        self.header.as_ref()
    }

    /// Directories visited by the last read
    pub fn directories(&self) -> &[Ifd] {
        &self.directories
    }

    /// Validates the APP1 payload starting at `start` and reads the TIFF
    /// header that follows the signature
    fn read_tiff_header(reader: &mut dyn SeekableReader, start: u64) -> ExifResult<TiffHeader> {
        reader.seek(SeekFrom::Start(start))?;

        let mut signature = [0u8; 4];
        reader.read_exact(&mut signature)?;
        if &signature != header::EXIF_SIGNATURE {
            return Err(ExifError::MissingSignature);
        }

        let tiff_start = start + header::EXIF_PREAMBLE_SIZE;
        reader.seek(SeekFrom::Start(tiff_start))?;

        let byte_order = ByteOrder::detect(reader)?;
        let handler = byte_order.create_handler();

        let magic = handler.read_u16(reader)?;
        if magic != header::TIFF_MAGIC {
            return Err(ExifError::InvalidMagic(magic));
        }

        let first_ifd_offset = handler.read_u32(reader)?;
        if first_ifd_offset < header::MIN_IFD_OFFSET {
            return Err(ExifError::InvalidIfdOffset(first_ifd_offset));
        }

        Ok(TiffHeader {
            start: tiff_start,
            byte_order,
            first_ifd_offset,
        })
    }
}

/// Reads directories and values once the byte order is known
struct DirectoryWalker {
    header: TiffHeader,
    handler: Box<dyn ByteOrderHandler>,
}

impl DirectoryWalker {
    fn new(header: TiffHeader) -> Self {
        Self {
            handler: header.byte_order.create_handler(),
            header,
        }
    }

    fn absolute(&self, offset: u32) -> u64 {
        self.header.start + offset as u64
    }

    /// Reads the entry count and every 12-byte entry of a directory
    fn read_ifd(&self, reader: &mut dyn SeekableReader, offset: u32) -> ExifResult<Ifd> {
        reader.seek(SeekFrom::Start(self.absolute(offset)))?;

        let entry_count = self.handler.read_u16(reader)?;
        debug!("IFD at {} has {} entries", offset, entry_count);

        let mut ifd = Ifd::new(offset as u64);
        for _ in 0..entry_count {
            let tag = self.handler.read_u16(reader)?;
            let field_type = self.handler.read_u16(reader)?;
            let count = self.handler.read_u32(reader)?;
            let value_field = self.handler.read_u32(reader)?;
            ifd.add_entry(IfdEntry::new(tag, field_type, count, value_field));
        }

        Ok(ifd)
    }

    /// Decodes every entry the dictionary recognises
    fn read_tags(&self, reader: &mut dyn SeekableReader, ifd: &Ifd, dictionary: Dictionary) -> ExifResult<ExifTags> {
        let mut tags = ExifTags::new();

        for entry in &ifd.entries {
            let Some(field) = dictionary.lookup(entry.tag) else {
                continue;
            };

            match self.read_value(reader, entry)? {
                Some(value) => {
                    trace!("{} = {}", field, value);
                    tags.insert(field, value);
                }
                None => debug!("Leaving {} undecoded: {}", field, entry.description()),
            }
        }

        Ok(tags)
    }

    /// Decodes single SHORT, LONG and RATIONAL values
    fn read_value(&self, reader: &mut dyn SeekableReader, entry: &IfdEntry) -> ExifResult<Option<TagValue>> {
        if !entry.is_single() {
            return Ok(None);
        }

        let value = match entry.field_type {
            field_types::SHORT => Some(TagValue::Short(self.header.byte_order.inline_short(entry.value_field))),
            field_types::LONG => Some(TagValue::Long(entry.value_field)),
            field_types::RATIONAL => {
                reader.seek(SeekFrom::Start(self.absolute(entry.value_field)))?;
                let (numerator, denominator) = self.handler.read_rational(reader)?;
                Some(TagValue::Rational(numerator, denominator))
            }
            _ => None,
        };

        Ok(value)
    }
}

//! Image File Directory structures
//!
//! An EXIF block stores its tags in TIFF directories: a two-byte entry
//! count followed by fixed-size 12-byte entries. Values of four bytes or
//! less live in the entry itself, larger ones (rationals) are referenced
//! by an offset from the start of the TIFF header.

use std::fmt;

use log::trace;

use crate::exif::constants::field_types;

/// One 12-byte directory entry, undecoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfdEntry {
    /// Tag identifier
    pub tag: u16,
    /// Field type
    pub field_type: u16,
    /// Number of values
    pub count: u32,
    /// The value itself, or an offset relative to the TIFF header
    pub value_field: u32,
}

impl IfdEntry {
    pub fn new(tag: u16, field_type: u16, count: u32, value_field: u32) -> Self {
        trace!(
            "IFD entry: tag={:#06x}, type={} ({}), count={}, value/offset={}",
            tag,
            field_type,
            field_type_name(field_type),
            count,
            value_field
        );

        Self {
            tag,
            field_type,
            count,
            value_field,
        }
    }

    /// Whether the entry holds exactly one value; only those are decoded
    pub fn is_single(&self) -> bool {
        self.count == 1
    }

    /// Returns a human-readable description of this entry
    pub fn description(&self) -> String {
        format!(
            "Tag: {:#06x}, Type: {} ({}), Count: {}, Value/Offset: {}",
            self.tag,
            self.field_type,
            field_type_name(self.field_type),
            self.count,
            self.value_field
        )
    }
}

/// A parsed directory
#[derive(Debug, Clone, Default)]
pub struct Ifd {
    /// Offset of the directory relative to the TIFF header
    pub offset: u64,
    /// Entries in file order
    pub entries: Vec<IfdEntry>,
}

impl Ifd {
    pub fn new(offset: u64) -> Self {
        Self {
            offset,
            entries: Vec::new(),
        }
    }

    pub fn add_entry(&mut self, entry: IfdEntry) {
        self.entries.push(entry);
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for Ifd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "IFD (offset: {})", self.offset)?;
        writeln!(f, "  Number of entries: {}", self.entries.len())?;
        for entry in &self.entries {
            writeln!(f, "    {}", entry.description())?;
        }
        Ok(())
    }
}

/// Name of a TIFF field type, for logging
pub fn field_type_name(field_type: u16) -> &'static str {
    match field_type {
        1 => "BYTE",
        2 => "ASCII",
        field_types::SHORT => "SHORT",
        field_types::LONG => "LONG",
        field_types::RATIONAL => "RATIONAL",
        6 => "SBYTE",
        7 => "UNDEFINED",
        8 => "SSHORT",
        9 => "SLONG",
        10 => "SRATIONAL",
        11 => "FLOAT",
        12 => "DOUBLE",
        _ => "Unknown",
    }
}

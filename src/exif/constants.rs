//! JPEG and EXIF format constants

/// JPEG marker bytes
pub mod jpeg {
    /// Every segment starts with this byte
    pub const MARKER_PREFIX: u8 = 0xFF;
    /// Start of image, always the first two bytes of the file
    pub const START_OF_IMAGE: u16 = 0xFFD8;
    /// APP1, the application segment that carries EXIF
    pub const APP1: u8 = 0xE1;
    /// Bytes from a segment start to its payload (marker + length)
    pub const SEGMENT_HEADER_SIZE: u64 = 4;
}

/// EXIF/TIFF header constants
pub mod header {
    /// Signature at the start of the APP1 payload
    pub const EXIF_SIGNATURE: &[u8; 4] = b"Exif";
    /// Signature plus the two padding bytes before the TIFF header
    pub const EXIF_PREAMBLE_SIZE: u64 = 6;
    /// "II" byte order mark
    pub const LITTLE_ENDIAN_MARK: u16 = 0x4949;
    /// "MM" byte order mark
    pub const BIG_ENDIAN_MARK: u16 = 0x4D4D;
    /// TIFF magic number (42)
    pub const TIFF_MAGIC: u16 = 0x002A;
    /// Smallest valid first IFD offset (right after the header)
    pub const MIN_IFD_OFFSET: u32 = 8;
}

/// Field types decoded by the reader
pub mod field_types {
    pub const SHORT: u16 = 3;    // 16-bit unsigned integer
    pub const LONG: u16 = 4;     // 32-bit unsigned integer
    pub const RATIONAL: u16 = 5; // Two LONGs: numerator and denominator
}

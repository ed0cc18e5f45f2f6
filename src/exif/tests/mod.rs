//! Tests for the EXIF reader

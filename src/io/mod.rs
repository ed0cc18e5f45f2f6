//! I/O utilities for binary metadata parsing
//!
//! Byte order strategies and the reader abstraction the EXIF parser
//! walks over an in-memory buffer with.

pub mod seekable;
pub mod byte_order;

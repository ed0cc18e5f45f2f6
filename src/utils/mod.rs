//! Utility modules shared by the commands
//!
//! Logging backend, progress reporting and output formatting.

pub mod logger;
pub mod progress;
pub mod format_utils;

//! EXIF metadata command

use std::fs;
use std::path::PathBuf;

use clap::ArgMatches;
use log::{debug, info, warn};

use crate::commands::command_traits::Command;
use crate::errors::{CaptureError, CaptureResult};
use crate::exif::ExifReader;
use crate::gallery::upload;
use crate::utils::format_utils;
use crate::utils::progress::ProgressTracker;

/// Prints camera metadata for one or more JPEG files
pub struct ExifCommand {
    inputs: Vec<PathBuf>,
    /// Print the decoded tag map and parser errors instead of the summary
    raw: bool,
}

impl ExifCommand {
    pub fn new(args: &ArgMatches) -> CaptureResult<Self> {
        let inputs: Vec<PathBuf> = args
            .get_many::<String>("input")
            .ok_or_else(|| CaptureError::InvalidArgument("Missing input file".to_string()))?
            .map(PathBuf::from)
            .collect();

        Ok(ExifCommand {
            inputs,
            raw: args.get_flag("raw"),
        })
    }

    fn describe(&self, data: &[u8]) -> String {
        if self.raw {
            let mut reader = ExifReader::new();
            let mut cursor = crate::io::seekable::from_bytes(data);
            return match reader.read(&mut cursor) {
                Ok(tags) => {
                    let mut out = String::new();
                    if let Some(header) = reader.header() {
                        out.push_str(&format!("  Byte order: {}\n", header.byte_order.name()));
                    }
                    for ifd in reader.directories() {
                        debug!("{}", ifd);
                    }
                    out.push_str(&tags.to_string());
                    out
                }
                Err(e) => format!("  Parse failed: {}\n", e),
            };
        }

        let metadata = upload::resolve_metadata(data);
        let mut out = metadata.exif.to_string();
        if metadata.exif.width.is_none() {
            if let (Some(width), Some(height)) = (metadata.width, metadata.height) {
                out.push_str(&format!("  Decoded size: {}x{}\n", width, height));
            }
        }
        out.push_str(&format!("  File size: {}\n", format_utils::format_file_size(metadata.file_size)));
        out
    }
}

impl Command for ExifCommand {
    fn execute(&self) -> CaptureResult<()> {
        info!("Reading EXIF metadata from {} file(s)", self.inputs.len());

        let progress = if self.inputs.len() > 1 {
            ProgressTracker::new(self.inputs.len() as u64, "Reading EXIF")
        } else {
            ProgressTracker::hidden()
        };

        for path in &self.inputs {
            progress.set_message(&path.display().to_string());
            match fs::read(path) {
                Ok(data) => progress.println(&format!("{}:\n{}", path.display(), self.describe(&data).trim_end())),
                Err(e) => {
                    warn!("Could not read {}: {}", path.display(), e);
                    progress.println(&format!("{}:\n  Unreadable: {}", path.display(), e));
                }
            }
            progress.increment(1);
        }

        progress.finish();
        Ok(())
    }
}

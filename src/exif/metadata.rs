//! User-facing camera metadata

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::exif::tags::{ExifField, ExifTags};

/// Camera metadata recovered from a JPEG
///
/// Every field is optional; absence means "unknown", never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExifData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// ISO speed as a plain integer string, e.g. "3200"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso: Option<String>,
    /// F-number, e.g. "f/2.8"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aperture: Option<String>,
    /// Exposure, e.g. "1/500 s" or "30 s"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure_time: Option<String>,
}

impl ExifData {
    /// Maps decoded tags to display values
    ///
    /// Zero-valued ISO, FNumber and ExposureTime are treated as missing.
    pub fn from_tags(tags: &ExifTags) -> Self {
        let iso = tags
            .get(ExifField::IsoSpeedRatings)
            .map(|value| value.as_f64())
            .filter(|&iso| iso != 0.0)
            .map(format_number);

        let aperture = tags
            .get(ExifField::FNumber)
            .map(|value| value.as_f64())
            .filter(|&f_number| f_number != 0.0)
            .map(|f_number| format!("f/{}", format_number(f_number)));

        let exposure_time = tags
            .get(ExifField::ExposureTime)
            .map(|value| value.as_f64())
            .and_then(format_exposure);

        ExifData {
            width: tags.get(ExifField::PixelXDimension).and_then(|v| v.as_u32()),
            height: tags.get(ExifField::PixelYDimension).and_then(|v| v.as_u32()),
            iso,
            aperture,
            exposure_time,
        }
    }

    /// True when no field could be recovered
    pub fn is_empty(&self) -> bool {
        *self == ExifData::default()
    }
}

/// Formats an exposure time in seconds
///
/// Sub-second exposures are shown as a rounded reciprocal ("1/500 s").
pub fn format_exposure(seconds: f64) -> Option<String> {
    if seconds.is_nan() || seconds <= 0.0 {
        return None;
    }

    if seconds < 1.0 {
        Some(format!("1/{} s", (1.0 / seconds).round()))
    } else {
        Some(format!("{} s", format_number(seconds)))
    }
}

/// Shortest decimal form of a number: 8.0 -> "8", 2.8 -> "2.8"
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

impl fmt::Display for ExifData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "  No EXIF metadata");
        }
        if let (Some(width), Some(height)) = (self.width, self.height) {
            writeln!(f, "  Dimensions: {}x{}", width, height)?;
        }
        if let Some(iso) = &self.iso {
            writeln!(f, "  ISO: {}", iso)?;
        }
        if let Some(aperture) = &self.aperture {
            writeln!(f, "  Aperture: {}", aperture)?;
        }
        if let Some(exposure) = &self.exposure_time {
            writeln!(f, "  Exposure: {}", exposure)?;
        }
        Ok(())
    }
}

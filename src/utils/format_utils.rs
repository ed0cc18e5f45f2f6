//! Display helpers for command output

use chrono::{DateTime, Utc};

/// Star rating as five glyphs, e.g. 3 -> "★★★☆☆"
pub fn format_rating(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// File size in MB with one decimal
pub fn format_file_size(megabytes: f64) -> String {
    format!("{:.1} MB", megabytes)
}

/// Minute-precision UTC timestamp
pub fn format_instant(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Optional field with a placeholder for unknown values
pub fn or_unknown(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

//! EXIF tag dictionaries and decoded values
//!
//! The dictionaries are read once from the bundled `exif_tags.toml`.
//! A tag id only has meaning within the directory it was found in, so
//! the TIFF-level directory and the EXIF sub-directory each get their
//! own dictionary.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::warn;

lazy_static! {
    static ref DICTIONARIES: TagDictionaries = {
        let content = include_str!("../../exif_tags.toml");
        TagDictionaries::parse(content).unwrap_or_else(|e| {
            warn!("Failed to parse EXIF tag dictionaries: {}", e);
            TagDictionaries::default()
        })
    };
}

/// Semantic fields the reader knows how to recover
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExifField {
    Orientation,
    ExifIfdPointer,
    IsoSpeedRatings,
    ApertureValue,
    ExposureTime,
    FNumber,
    PixelXDimension,
    PixelYDimension,
}

impl ExifField {
    /// The field's name as used in the EXIF standard
    pub fn name(&self) -> &'static str {
        match self {
            ExifField::Orientation => "Orientation",
            ExifField::ExifIfdPointer => "ExifIFDPointer",
            ExifField::IsoSpeedRatings => "ISOSpeedRatings",
            ExifField::ApertureValue => "ApertureValue",
            ExifField::ExposureTime => "ExposureTime",
            ExifField::FNumber => "FNumber",
            ExifField::PixelXDimension => "PixelXDimension",
            ExifField::PixelYDimension => "PixelYDimension",
        }
    }
}

impl FromStr for ExifField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Orientation" => Ok(ExifField::Orientation),
            "ExifIFDPointer" => Ok(ExifField::ExifIfdPointer),
            "ISOSpeedRatings" => Ok(ExifField::IsoSpeedRatings),
            "ApertureValue" => Ok(ExifField::ApertureValue),
            "ExposureTime" => Ok(ExifField::ExposureTime),
            "FNumber" => Ok(ExifField::FNumber),
            "PixelXDimension" => Ok(ExifField::PixelXDimension),
            "PixelYDimension" => Ok(ExifField::PixelYDimension),
            _ => Err(format!("Unknown EXIF field: {}", s)),
        }
    }
}

impl fmt::Display for ExifField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which tag dictionary applies to a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dictionary {
    /// The first directory after the TIFF header
    Tiff,
    /// The directory the ExifIFDPointer tag points to
    Exif,
}

impl Dictionary {
    /// Looks up a tag id, returning `None` for tags this dictionary ignores
    pub fn lookup(&self, tag: u16) -> Option<ExifField> {
        let table = match self {
            Dictionary::Tiff => &DICTIONARIES.tiff,
            Dictionary::Exif => &DICTIONARIES.exif,
        };
        table.get(&tag).copied()
    }

    /// Number of tags this dictionary recognises
    pub fn tag_count(&self) -> usize {
        match self {
            Dictionary::Tiff => DICTIONARIES.tiff.len(),
            Dictionary::Exif => DICTIONARIES.exif.len(),
        }
    }
}

#[derive(Debug, Default)]
struct TagDictionaries {
    tiff: HashMap<u16, ExifField>,
    exif: HashMap<u16, ExifField>,
}

impl TagDictionaries {
    fn parse(content: &str) -> Result<Self, String> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| format!("Failed to parse TOML: {}", e))?;

        let mut dictionaries = TagDictionaries::default();
        Self::parse_table(&toml_value, "tiff_tags", &mut dictionaries.tiff);
        Self::parse_table(&toml_value, "exif_tags", &mut dictionaries.exif);
        Ok(dictionaries)
    }

    fn parse_table(toml_value: &toml::Value, table_name: &str, target: &mut HashMap<u16, ExifField>) {
        let Some(table) = toml_value.get(table_name).and_then(|v| v.as_table()) else {
            warn!("Tag table [{}] missing", table_name);
            return;
        };

        for (key, value) in table {
            let id = parse_tag_id(key);
            let field = value.as_str().map(ExifField::from_str);
            match (id, field) {
                (Some(id), Some(Ok(field))) => {
                    target.insert(id, field);
                }
                _ => warn!("Skipping tag entry {} in [{}]", key, table_name),
            }
        }
    }
}

fn parse_tag_id(key: &str) -> Option<u16> {
    match key.strip_prefix("0x").or_else(|| key.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16).ok(),
        None => key.parse().ok(),
    }
}

/// A single decoded directory value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagValue {
    Short(u16),
    Long(u32),
    /// Numerator and denominator
    Rational(u32, u32),
}

impl TagValue {
    /// Numeric value; a rational with a zero denominator counts as 0
    pub fn as_f64(&self) -> f64 {
        match *self {
            TagValue::Short(v) => v as f64,
            TagValue::Long(v) => v as f64,
            TagValue::Rational(_, 0) => 0.0,
            TagValue::Rational(n, d) => n as f64 / d as f64,
        }
    }

    /// Integer value for SHORT and LONG fields
    pub fn as_u32(&self) -> Option<u32> {
        match *self {
            TagValue::Short(v) => Some(v as u32),
            TagValue::Long(v) => Some(v),
            TagValue::Rational(..) => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Short(v) => write!(f, "{} [SHORT]", v),
            TagValue::Long(v) => write!(f, "{} [LONG]", v),
            TagValue::Rational(n, d) => write!(f, "{}/{} [RATIONAL]", n, d),
        }
    }
}

/// Decoded tags keyed by semantic field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExifTags {
    values: BTreeMap<ExifField, TagValue>,
}

impl ExifTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ExifField, value: TagValue) {
        self.values.insert(field, value);
    }

    pub fn get(&self, field: ExifField) -> Option<TagValue> {
        self.values.get(&field).copied()
    }

    /// Merges another set of tags into this one; `other` wins on collisions
    pub fn merge(&mut self, other: ExifTags) {
        self.values.extend(other.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ExifField, TagValue)> + '_ {
        self.values.iter().map(|(field, value)| (*field, *value))
    }
}

impl fmt::Display for ExifTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, value) in self.iter() {
            writeln!(f, "  {}: {}", field, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionaries_load_from_bundled_table() {
        assert_eq!(Dictionary::Tiff.tag_count(), 2);
        assert_eq!(Dictionary::Exif.tag_count(), 8);
        assert_eq!(Dictionary::Exif.lookup(0x829A), Some(ExifField::ExposureTime));
        assert_eq!(Dictionary::Tiff.lookup(0x8769), Some(ExifField::ExifIfdPointer));
    }

    #[test]
    fn test_tiff_dictionary_ignores_exif_only_tags() {
        assert_eq!(Dictionary::Tiff.lookup(0x8827), None);
        assert_eq!(Dictionary::Exif.lookup(0x8827), Some(ExifField::IsoSpeedRatings));
        assert_eq!(Dictionary::Exif.lookup(0x0100), None);
    }

    #[test]
    fn test_tag_id_parsing() {
        assert_eq!(parse_tag_id("0xA002"), Some(0xA002));
        assert_eq!(parse_tag_id("274"), Some(274));
        assert_eq!(parse_tag_id("0xZZ"), None);
    }

    #[test]
    fn test_rational_with_zero_denominator_is_zero() {
        assert_eq!(TagValue::Rational(5, 0).as_f64(), 0.0);
        assert_eq!(TagValue::Rational(28, 10).as_f64(), 2.8);
        assert_eq!(TagValue::Rational(28, 10).as_u32(), None);
    }

    #[test]
    fn test_merge_prefers_incoming_values() {
        let mut base = ExifTags::new();
        base.insert(ExifField::Orientation, TagValue::Short(1));
        base.insert(ExifField::ExifIfdPointer, TagValue::Long(26));

        let mut sub = ExifTags::new();
        sub.insert(ExifField::Orientation, TagValue::Short(6));
        base.merge(sub);

        assert_eq!(base.get(ExifField::Orientation), Some(TagValue::Short(6)));
        assert_eq!(base.len(), 2);
    }
}

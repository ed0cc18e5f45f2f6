//! Photo records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A photo in the portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Star rating, 0 (unrated) to 5
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// File size in MB
    #[serde(default)]
    pub file_size: Option<f64>,
    #[serde(default)]
    pub iso: Option<String>,
    #[serde(default)]
    pub aperture: Option<String>,
    #[serde(default)]
    pub exposure_time: Option<String>,
}

impl Photo {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Writes an edit session's result back into the record
    pub fn apply_edit(&mut self, edit: &EditablePhoto) {
        self.title = edit.title.clone();
        self.description = if edit.description.is_empty() {
            None
        } else {
            Some(edit.description.clone())
        };
        self.tags = edit.tags.clone();
        self.rating = edit.rating;
        self.iso = edit.iso.clone();
        self.aperture = edit.aperture.clone();
        self.exposure_time = edit.exposure_time.clone();
    }
}

/// The fields of a photo the detail view lets the user edit
///
/// This is the value kept in the edit history, so equality is
/// field-by-field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditablePhoto {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub rating: u8,
    pub iso: Option<String>,
    pub aperture: Option<String>,
    pub exposure_time: Option<String>,
}

impl EditablePhoto {
    pub fn from_photo(photo: &Photo) -> Self {
        EditablePhoto {
            title: photo.title.clone(),
            description: photo.description.clone().unwrap_or_default(),
            tags: photo.tags.clone(),
            rating: photo.rating,
            iso: photo.iso.clone(),
            aperture: photo.aperture.clone(),
            exposure_time: photo.exposure_time.clone(),
        }
    }

    /// Copy with `tag` appended; blank or already present tags give an
    /// unchanged copy
    pub fn with_tag(&self, tag: &str) -> Self {
        let tag = tag.trim();
        let mut next = self.clone();
        if !tag.is_empty() && !next.tags.iter().any(|t| t == tag) {
            next.tags.push(tag.to_string());
        }
        next
    }

    /// Copy with `tag` removed
    pub fn without_tag(&self, tag: &str) -> Self {
        let mut next = self.clone();
        next.tags.retain(|t| t != tag);
        next
    }

    /// Copy with the rating clamped to 0..=5
    pub fn with_rating(&self, rating: u8) -> Self {
        EditablePhoto {
            rating: rating.min(5),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;

    fn andromeda() -> Photo {
        Photo {
            id: "m31".to_string(),
            title: "Andromeda Galaxy".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 14).unwrap(),
            url: "m31.jpg".to_string(),
            description: None,
            tags: vec!["galaxy".to_string()],
            rating: 4,
            width: None,
            height: None,
            file_size: None,
            iso: Some("1600".to_string()),
            aperture: None,
            exposure_time: None,
        }
    }

    #[test]
    fn test_tag_edits_through_history() {
        let photo = andromeda();
        let mut history = History::new(EditablePhoto::from_photo(&photo));

        let tagged = history.present().with_tag(" deep-sky ");
        assert!(history.set_state(tagged));
        // Adding the same tag again yields an equal record
        let again = history.present().with_tag("deep-sky");
        assert!(!history.set_state(again));

        assert_eq!(history.present().tags, vec!["galaxy", "deep-sky"]);
        history.undo();
        assert_eq!(history.present().tags, vec!["galaxy"]);
    }

    #[test]
    fn test_apply_edit_round_trips_description() {
        let mut photo = andromeda();
        let mut edit = EditablePhoto::from_photo(&photo).with_rating(9).without_tag("galaxy");
        edit.description = "Shot from a Bortle 3 site".to_string();

        photo.apply_edit(&edit);
        assert_eq!(photo.rating, 5);
        assert!(photo.tags.is_empty());
        assert_eq!(photo.description.as_deref(), Some("Shot from a Bortle 3 site"));

        photo.apply_edit(&EditablePhoto::from_photo(&andromeda()));
        assert_eq!(photo.description, None);
    }
}

//! Viewing advice derived from the moon's brightness bucket

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::astro::moon::RatingKey;
use crate::astro::text;

/// How favourable the night is for an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Excellent,
    Good,
    Fair,
    Poor,
    Challenging,
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Quality::Excellent => "Excellent",
            Quality::Good => "Good",
            Quality::Fair => "Fair",
            Quality::Poor => "Poor",
            Quality::Challenging => "Challenging",
        };
        f.write_str(label)
    }
}

/// Rating plus a one-line explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub quality: Quality,
    pub description: String,
}

/// Advice for visual observing and for imaging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewingConditions {
    pub stargazing: Advice,
    pub astrophotography: Advice,
}

/// Looks up the viewing advice for a rating key
///
/// Returns `None` only if the bundled table lacks the key.
pub fn viewing_conditions(rating: RatingKey) -> Option<ViewingConditions> {
    text::conditions(rating.key()).cloned()
}

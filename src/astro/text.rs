//! Bundled English text for phase names and viewing advice

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::warn;
use serde::Deserialize;

use crate::astro::conditions::ViewingConditions;

lazy_static! {
    static ref MOON_TEXT: MoonText = {
        let content = include_str!("../../moon_text.toml");
        toml::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse moon text table: {}", e);
            MoonText::default()
        })
    };
}

#[derive(Debug, Default, Deserialize)]
struct MoonText {
    #[serde(default)]
    phases: HashMap<String, String>,
    #[serde(default)]
    conditions: HashMap<String, ViewingConditions>,
}

/// Resolves a text key against the English table
///
/// Keys follow `moon.phases.<index>`. Unknown keys come back unchanged,
/// so a missing translation shows up as its key instead of vanishing.
pub fn english(key: &str) -> String {
    key.strip_prefix("moon.phases.")
        .and_then(|index| MOON_TEXT.phases.get(index))
        .cloned()
        .unwrap_or_else(|| key.to_string())
}

/// Viewing advice stored under a rating key
pub(crate) fn conditions(rating_key: &str) -> Option<&'static ViewingConditions> {
    MOON_TEXT.conditions.get(rating_key)
}

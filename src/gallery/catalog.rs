//! Photo catalogs loaded from TOML or JSON

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::errors::{CaptureError, CaptureResult};
use crate::gallery::photo::Photo;
use crate::gallery::query::{GalleryQuery, Page};

/// Navigation direction in the photo detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// A collection of photos
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl Catalog {
    pub fn new(photos: Vec<Photo>) -> Self {
        Catalog { photos }
    }

    /// Parses a catalog written as `[[photos]]` tables
    pub fn from_toml_str(content: &str) -> CaptureResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parses a catalog written as `{"photos": [...]}`
    pub fn from_json_str(content: &str) -> CaptureResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads a catalog, choosing the format from the file extension
    pub fn load<P: AsRef<Path>>(path: P) -> CaptureResult<Self> {
        let path = path.as_ref();
        debug!("Loading catalog from {}", path.display());

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let catalog = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&fs::read_to_string(path)?)?,
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?)?,
            _ => return Err(CaptureError::UnsupportedCatalog(path.to_path_buf())),
        };

        info!("Loaded {} photos from {}", catalog.photos.len(), path.display());
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&Photo> {
        self.photos.iter().find(|photo| photo.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Photo> {
        self.photos.iter_mut().find(|photo| photo.id == id)
    }

    /// Every tag used in the catalog, sorted and de-duplicated
    pub fn all_tags(&self) -> Vec<String> {
        self.photos
            .iter()
            .flat_map(|photo| photo.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn query(&self, query: &GalleryQuery) -> Page<&Photo> {
        query.run(&self.photos)
    }

    /// The photo after or before `id` in the filtered, sorted list,
    /// wrapping around at both ends
    pub fn neighbor(&self, query: &GalleryQuery, id: &str, direction: Direction) -> Option<&Photo> {
        let listed = query.filter_and_sort(&self.photos);
        let position = listed.iter().position(|photo| photo.id == id)?;
        let len = listed.len();

        let next = match direction {
            Direction::Next => (position + 1) % len,
            Direction::Previous => (position + len - 1) % len,
        };
        Some(listed[next])
    }
}

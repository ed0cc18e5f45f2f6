//! Favorite photos persisted as a JSON list of ids
//!
//! Loaded once when opened and written back on every change.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::errors::CaptureResult;

/// Ordered set of favorite photo ids backed by a file
#[derive(Debug, Clone)]
pub struct Favorites {
    path: PathBuf,
    ids: Vec<String>,
}

impl Favorites {
    /// Opens the store at `path`
    ///
    /// A missing or unreadable file starts an empty store.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();

        let ids = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("Could not parse favorites in {}: {}", path.display(), e);
                Vec::new()
            }),
            Err(e) => {
                debug!("No favorites loaded from {}: {}", path.display(), e);
                Vec::new()
            }
        };

        Favorites { path, ids }
    }

    /// Adds or removes `id` and saves the store
    ///
    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: &str) -> CaptureResult<bool> {
        let now_favorite = match self.ids.iter().position(|existing| existing == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id.to_string());
                true
            }
        };

        self.save()?;
        Ok(now_favorite)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Favorite ids in the order they were added
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    fn save(&self) -> CaptureResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(&self.ids)?)?;
        Ok(())
    }
}

//! Favorite toggle command

use std::path::PathBuf;

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::errors::{CaptureError, CaptureResult};
use crate::gallery::{Catalog, Favorites};

/// Adds a photo to the favorites store, or removes it if already present
pub struct FavoriteCommand {
    id: String,
    store: PathBuf,
    /// Catalog used to check that the id exists
    catalog: Option<PathBuf>,
}

impl FavoriteCommand {
    pub fn new(args: &ArgMatches) -> CaptureResult<Self> {
        let id = args
            .get_one::<String>("id")
            .ok_or_else(|| CaptureError::InvalidArgument("Missing photo id".to_string()))?;
        let store = args
            .get_one::<String>("store")
            .ok_or_else(|| CaptureError::InvalidArgument("Missing favorites store".to_string()))?;

        Ok(FavoriteCommand {
            id: id.clone(),
            store: PathBuf::from(store),
            catalog: args.get_one::<String>("catalog").map(PathBuf::from),
        })
    }
}

impl Command for FavoriteCommand {
    fn execute(&self) -> CaptureResult<()> {
        if let Some(path) = &self.catalog {
            let catalog = Catalog::load(path)?;
            if catalog.get(&self.id).is_none() {
                return Err(CaptureError::PhotoNotFound(self.id.clone()));
            }
        }

        let mut favorites = Favorites::load(&self.store);
        let added = favorites.toggle(&self.id)?;
        info!("Favorites now hold {} photo(s)", favorites.ids().len());

        if added {
            println!("Added {} to favorites", self.id);
        } else {
            println!("Removed {} from favorites", self.id);
        }
        Ok(())
    }
}

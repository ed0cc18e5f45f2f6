//! Gallery listing command

use std::path::PathBuf;

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::errors::{CaptureError, CaptureResult};
use crate::gallery::{Catalog, Favorites, GalleryQuery, SortOption, PHOTOS_PER_PAGE};
use crate::utils::format_utils;

/// Lists one page of a photo catalog
pub struct GalleryCommand {
    catalog: PathBuf,
    query: GalleryQuery,
    /// Favorites store used to mark entries
    favorites: Option<PathBuf>,
}

impl GalleryCommand {
    /// Creates a new gallery command from command line arguments
    ///
    /// # Arguments
    /// * `args` - Parsed `gallery` subcommand arguments
    ///
    /// # Returns
    /// The command, or an error for missing or malformed arguments
    pub fn new(args: &ArgMatches) -> CaptureResult<Self> {
        let catalog = args
            .get_one::<String>("catalog")
            .ok_or_else(|| CaptureError::InvalidArgument("Missing catalog file".to_string()))?;

        let tags = args
            .get_many::<String>("tag")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        let sort = match args.get_one::<String>("sort") {
            Some(value) => value.parse::<SortOption>().map_err(CaptureError::InvalidArgument)?,
            None => SortOption::default(),
        };

        let query = GalleryQuery {
            tags,
            search: args.get_one::<String>("search").cloned().unwrap_or_default(),
            min_rating: args.get_one::<u8>("min-rating").copied().unwrap_or(0),
            sort,
            page: args.get_one::<usize>("page").copied().unwrap_or(1),
            per_page: args.get_one::<usize>("per-page").copied().unwrap_or(PHOTOS_PER_PAGE),
        };

        Ok(GalleryCommand {
            catalog: PathBuf::from(catalog),
            query,
            favorites: args.get_one::<String>("favorites").map(PathBuf::from),
        })
    }
}

impl Command for GalleryCommand {
    fn execute(&self) -> CaptureResult<()> {
        info!("Loading catalog {}", self.catalog.display());
        let catalog = Catalog::load(&self.catalog)?;
        let favorites = self.favorites.as_ref().map(Favorites::load);

        let page = catalog.query(&self.query);
        info!(
            "{} matching photo(s), page {} of {}",
            page.total_items, page.page, page.total_pages
        );

        if page.items.is_empty() {
            println!("No photos match the current filters");
            return Ok(());
        }

        for photo in &page.items {
            let marker = match &favorites {
                Some(store) if store.contains(&photo.id) => "♥",
                _ => " ",
            };
            println!(
                "{} {:<12} {} {}  {}",
                marker,
                photo.id,
                photo.date,
                format_utils::format_rating(photo.rating),
                photo.title
            );
            if !photo.tags.is_empty() {
                println!("               [{}]", photo.tags.join(", "));
            }
        }

        println!(
            "Page {}/{} ({} photos, sorted by {})",
            page.page, page.total_pages, page.total_items, self.query.sort
        );
        Ok(())
    }
}

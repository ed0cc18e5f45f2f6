//! Gallery filtering, sorting and pagination

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::gallery::photo::Photo;

/// Photos shown per gallery page
pub const PHOTOS_PER_PAGE: usize = 12;

/// Gallery sort orders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOption {
    #[default]
    Newest,
    Oldest,
    /// Highest rating first
    Rating,
    /// Alphabetical by title, ignoring case
    Title,
}

impl SortOption {
    fn compare(&self, a: &Photo, b: &Photo) -> Ordering {
        match self {
            SortOption::Newest => b.date.cmp(&a.date),
            SortOption::Oldest => a.date.cmp(&b.date),
            SortOption::Rating => b.rating.cmp(&a.rating),
            SortOption::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        }
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "newest" => Ok(SortOption::Newest),
            "oldest" => Ok(SortOption::Oldest),
            "rating" => Ok(SortOption::Rating),
            "title" => Ok(SortOption::Title),
            _ => Err(format!("Unknown sort option '{}' (expected newest, oldest, rating or title)", s)),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortOption::Newest => "newest",
            SortOption::Oldest => "oldest",
            SortOption::Rating => "rating",
            SortOption::Title => "title",
        };
        f.write_str(name)
    }
}

/// Filters and page selection for the gallery view
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryQuery {
    /// Every active tag must be present on a photo
    pub tags: Vec<String>,
    /// Case-insensitive substring of the title or of any tag
    pub search: String,
    /// Minimum star rating; 0 disables the filter
    pub min_rating: u8,
    pub sort: SortOption,
    /// 1-based page number
    pub page: usize,
    pub per_page: usize,
}

impl Default for GalleryQuery {
    fn default() -> Self {
        GalleryQuery {
            tags: Vec::new(),
            search: String::new(),
            min_rating: 0,
            sort: SortOption::default(),
            page: 1,
            per_page: PHOTOS_PER_PAGE,
        }
    }
}

impl GalleryQuery {
    pub fn matches(&self, photo: &Photo) -> bool {
        let tag_match = self.tags.iter().all(|tag| photo.has_tag(tag));

        let search_match = self.search.is_empty() || {
            let query = self.search.to_lowercase();
            photo.title.to_lowercase().contains(&query)
                || photo.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
        };

        let rating_match = self.min_rating == 0 || photo.rating >= self.min_rating;

        tag_match && search_match && rating_match
    }

    /// Matching photos in display order
    pub fn filter_and_sort<'a>(&self, photos: &'a [Photo]) -> Vec<&'a Photo> {
        let mut selected: Vec<&Photo> = photos.iter().filter(|photo| self.matches(photo)).collect();
        selected.sort_by(|a, b| self.sort.compare(a, b));
        selected
    }

    /// Runs the query and cuts out the requested page
    pub fn run<'a>(&self, photos: &'a [Photo]) -> Page<&'a Photo> {
        Page::slice(self.filter_and_sort(photos), self.page, self.per_page)
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    /// Cuts page `page` (1-based) out of `all`; out-of-range pages are
    /// empty
    pub fn slice(all: Vec<T>, page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_items = all.len();
        let total_pages = total_items.div_ceil(per_page);

        let start = page.saturating_sub(1).saturating_mul(per_page);
        let items = if page == 0 || start >= total_items {
            Vec::new()
        } else {
            all.into_iter().skip(start).take(per_page).collect()
        };

        Page {
            items,
            page,
            total_pages,
            total_items,
        }
    }
}

//! Photo catalog, gallery queries, favorites and upload metadata

pub mod catalog;
pub mod favorites;
pub mod photo;
pub mod query;
pub mod upload;

pub use catalog::{Catalog, Direction};
pub use favorites::Favorites;
pub use photo::{EditablePhoto, Photo};
pub use query::{GalleryQuery, Page, SortOption, PHOTOS_PER_PAGE};
pub use upload::{resolve_metadata, UploadMetadata};

pub mod io;
pub mod exif;
pub mod astro;
pub mod history;
pub mod gallery;
pub mod commands;
pub mod utils;
pub mod errors;

pub use errors::{CaptureError, CaptureResult};
pub use exif::{read_exif, read_exif_file, ExifData, ExifError, ExifReader};
pub use astro::{moon_phase, moon_phase_en, next_major_phase, next_major_phase_en, MoonPhase, NextPhase};
pub use history::History;
pub use gallery::{Catalog, EditablePhoto, Favorites, GalleryQuery, Photo};

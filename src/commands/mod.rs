//! CLI command implementations
//!
//! Each subcommand is a `Command`; the factory picks one from the parsed
//! arguments.

pub mod command_traits;
pub mod exif_command;
pub mod favorite_command;
pub mod gallery_command;
pub mod moon_command;

pub use command_traits::{Command, CommandFactory};
pub use exif_command::ExifCommand;
pub use favorite_command::FavoriteCommand;
pub use gallery_command::GalleryCommand;
pub use moon_command::MoonCommand;

use clap::ArgMatches;

use crate::errors::{CaptureError, CaptureResult};

/// Factory mapping subcommands to command instances
#[derive(Default)]
pub struct CelestialCommandFactory;

impl CelestialCommandFactory {
    pub fn new() -> Self {
        CelestialCommandFactory
    }
}

impl CommandFactory for CelestialCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> CaptureResult<Box<dyn Command>> {
        match args.subcommand() {
            Some(("exif", sub)) => Ok(Box::new(ExifCommand::new(sub)?)),
            Some(("moon", sub)) => Ok(Box::new(MoonCommand::new(sub)?)),
            Some(("gallery", sub)) => Ok(Box::new(GalleryCommand::new(sub)?)),
            Some(("favorite", sub)) => Ok(Box::new(FavoriteCommand::new(sub)?)),
            Some((name, _)) => Err(CaptureError::InvalidArgument(format!("Unknown command: {}", name))),
            None => Err(CaptureError::InvalidArgument("No command given".to_string())),
        }
    }
}

//! Command pattern interfaces for the CLI

use clap::ArgMatches;

use crate::errors::CaptureResult;

/// An executable CLI operation
pub trait Command {
    /// Execute the command
    fn execute(&self) -> CaptureResult<()>;
}

/// Builds the command selected by the parsed arguments
pub trait CommandFactory {
    fn create_command(&self, args: &ArgMatches) -> CaptureResult<Box<dyn Command>>;
}

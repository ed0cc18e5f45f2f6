use clap::{value_parser, Arg, ArgAction, Command as ClapCommand};
use log::{error, LevelFilter};
use std::process;

use celestial_capture::commands::{CelestialCommandFactory, CommandFactory};
use celestial_capture::utils::logger::Logger;

fn build_cli() -> ClapCommand {
    ClapCommand::new("celestial")
        .version(env!("CARGO_PKG_VERSION"))
        .about("EXIF metadata, moon phases and photo catalogs for astrophotographers")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write log records to this file")
                .value_name("FILE")
                .global(true),
        )
        .subcommand(
            ClapCommand::new("exif")
                .about("Print camera metadata from JPEG files")
                .arg(
                    Arg::new("input")
                        .help("Input JPEG file(s)")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                )
                .arg(
                    Arg::new("raw")
                        .long("raw")
                        .help("Print the decoded tag map and parse errors")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            ClapCommand::new("moon")
                .about("Show the moon phase and viewing conditions")
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("Instant to evaluate (RFC 3339 or YYYY-MM-DD); defaults to now")
                        .value_name("DATE"),
                ),
        )
        .subcommand(
            ClapCommand::new("gallery")
                .about("List a page of photos from a catalog")
                .arg(
                    Arg::new("catalog")
                        .help("Catalog file (.toml or .json)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("tag")
                        .long("tag")
                        .help("Only photos carrying this tag (repeatable)")
                        .value_name("TAG")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("search")
                        .long("search")
                        .help("Case-insensitive text matched against titles and tags")
                        .value_name("QUERY"),
                )
                .arg(
                    Arg::new("min-rating")
                        .long("min-rating")
                        .help("Minimum star rating (0-5)")
                        .value_name("N")
                        .value_parser(value_parser!(u8).range(0..=5)),
                )
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .help("Sort order (newest, oldest, rating, title)")
                        .value_name("ORDER")
                        .default_value("newest"),
                )
                .arg(
                    Arg::new("page")
                        .long("page")
                        .help("Page number, starting at 1")
                        .value_name("N")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("per-page")
                        .long("per-page")
                        .help("Photos per page")
                        .value_name("N")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("favorites")
                        .long("favorites")
                        .help("Favorites store used to mark entries")
                        .value_name("FILE"),
                ),
        )
        .subcommand(
            ClapCommand::new("favorite")
                .about("Toggle a photo in the favorites store")
                .arg(Arg::new("id").help("Photo id").required(true).index(1))
                .arg(
                    Arg::new("store")
                        .long("store")
                        .help("Favorites store (JSON)")
                        .value_name("FILE")
                        .required(true),
                )
                .arg(
                    Arg::new("catalog")
                        .long("catalog")
                        .help("Catalog used to check that the photo exists")
                        .value_name("FILE"),
                ),
        )
}

fn init_logging(verbose: bool, log_file: Option<&String>) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    match log_file {
        Some(path) => {
            if let Err(e) = Logger::init_global_logger(path, level) {
                eprintln!("Error setting up log file {}: {}", path, e);
                process::exit(1);
            }
        }
        None => {
            env_logger::Builder::from_default_env()
                .filter_level(level)
                .format_timestamp(None)
                .init();
        }
    }
}

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_flag("verbose"), matches.get_one::<String>("log-file"));

    let factory = CelestialCommandFactory::new();

    match factory.create_command(&matches) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

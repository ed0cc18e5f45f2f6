//! Moon phase command

use chrono::{DateTime, NaiveDate, Utc};
use clap::ArgMatches;
use log::{debug, info};

use crate::astro::{self, MoonDisc};
use crate::commands::command_traits::Command;
use crate::errors::{CaptureError, CaptureResult};
use crate::utils::format_utils;

/// Radius used when reporting the terminator ellipse
const DISC_RADIUS: f64 = 100.0;

/// Prints the moon phase and viewing advice for an instant
pub struct MoonCommand {
    at: DateTime<Utc>,
}

impl MoonCommand {
    /// Creates a new moon command from command line arguments
    ///
    /// `--date` accepts an RFC 3339 timestamp or a plain `YYYY-MM-DD`
    /// date (midnight UTC). Without it the current time is used.
    pub fn new(args: &ArgMatches) -> CaptureResult<Self> {
        let at = match args.get_one::<String>("date") {
            Some(value) => parse_instant(value)?,
            None => Utc::now(),
        };

        Ok(MoonCommand { at })
    }
}

/// Parses an RFC 3339 timestamp or a calendar date
fn parse_instant(value: &str) -> CaptureResult<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Ok(at.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CaptureError::InvalidArgument(format!("Invalid date '{}': expected RFC 3339 or YYYY-MM-DD", value)))
}

impl Command for MoonCommand {
    fn execute(&self) -> CaptureResult<()> {
        info!("Computing moon phase for {}", self.at);

        let moon = astro::moon_phase_en(self.at);
        let disc = MoonDisc::from_fraction(moon.phase_fraction, DISC_RADIUS);
        debug!(
            "Disc: waxing={}, crescent={}, terminator_rx={:.1}",
            disc.waxing, disc.crescent, disc.terminator_rx
        );

        println!("{} {}", moon.emoji(), moon.phase_name);
        println!("  Date: {}", format_utils::format_instant(&self.at));
        println!("  Illumination: {}%", moon.illumination);
        println!("  Cycle position: {:.3}", moon.phase_fraction);
        println!("  Rating: {}", moon.rating);
        println!(
            "  Lit side: {} ({})",
            if disc.waxing { "right, waxing" } else { "left, waning" },
            if disc.crescent { "crescent" } else { "gibbous" }
        );

        if let Some(conditions) = astro::viewing_conditions(moon.rating) {
            println!(
                "  Stargazing: {} - {}",
                conditions.stargazing.quality, conditions.stargazing.description
            );
            println!(
                "  Astrophotography: {} - {}",
                conditions.astrophotography.quality, conditions.astrophotography.description
            );
        }

        let next = astro::next_major_phase_en(self.at);
        let when = astro::describe_when(next.at.date_naive(), self.at.date_naive());
        println!(
            "  Next: {} {} ({}, {})",
            next.phase.emoji(),
            next.name,
            when,
            format_utils::format_instant(&next.at)
        );

        Ok(())
    }
}

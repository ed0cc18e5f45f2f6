//! Moon phase and next major phase

use std::f64::consts::PI;
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use log::trace;

use crate::astro::text;

/// Mean length of a lunation in days
pub const SYNODIC_MONTH: f64 = 29.53058867;

/// Reference new moon, 2023-01-21T20:53:00Z, in Unix milliseconds
pub const REFERENCE_NEW_MOON_MS: i64 = 1_674_334_380_000;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Nudge that moves an instant sitting exactly on a major phase past it
const PHASE_EPSILON_DAYS: f64 = 0.001;

/// The reference new moon as a timestamp
pub fn reference_new_moon() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + Duration::milliseconds(REFERENCE_NEW_MOON_MS)
}

/// The eight named phases, indexed 0 (new) to 7 (waning crescent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseName {
    const ALL: [PhaseName; 8] = [
        PhaseName::NewMoon,
        PhaseName::WaxingCrescent,
        PhaseName::FirstQuarter,
        PhaseName::WaxingGibbous,
        PhaseName::FullMoon,
        PhaseName::WaningGibbous,
        PhaseName::LastQuarter,
        PhaseName::WaningCrescent,
    ];

    /// Phase for an index; wraps modulo 8
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 8]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Key used to look up the localized name
    pub fn text_key(&self) -> String {
        format!("moon.phases.{}", self.index())
    }

    pub fn emoji(&self) -> &'static str {
        ["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"][self.index()]
    }
}

/// Brightness bucket that selects viewing advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingKey {
    NewMoon,
    Crescent,
    Quarter,
    Gibbous,
    FullMoon,
}

impl RatingKey {
    /// Buckets an illumination percentage
    pub fn from_illumination(percent: f64) -> Self {
        if percent <= 15.0 {
            RatingKey::NewMoon
        } else if percent <= 40.0 {
            RatingKey::Crescent
        } else if percent <= 60.0 {
            RatingKey::Quarter
        } else if percent <= 90.0 {
            RatingKey::Gibbous
        } else {
            RatingKey::FullMoon
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            RatingKey::NewMoon => "newMoon",
            RatingKey::Crescent => "crescent",
            RatingKey::Quarter => "quarter",
            RatingKey::Gibbous => "gibbous",
            RatingKey::FullMoon => "fullMoon",
        }
    }
}

impl fmt::Display for RatingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Snapshot of the moon at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct MoonPhase {
    /// Position in the cycle, [0, 1): 0 new, 0.5 full
    pub phase_fraction: f64,
    /// Lit share of the disc in percent, rounded
    pub illumination: u8,
    pub phase: PhaseName,
    /// Localized phase name
    pub phase_name: String,
    pub rating: RatingKey,
}

impl MoonPhase {
    pub fn phase_index(&self) -> usize {
        self.phase.index()
    }

    pub fn emoji(&self) -> &'static str {
        self.phase.emoji()
    }
}

/// The next new, first quarter, full or last quarter moon
#[derive(Debug, Clone, PartialEq)]
pub struct NextPhase {
    pub phase: PhaseName,
    /// Localized phase name
    pub name: String,
    pub at: DateTime<Utc>,
}

fn days_since_reference(at: DateTime<Utc>) -> f64 {
    (at.timestamp_millis() - REFERENCE_NEW_MOON_MS) as f64 / MS_PER_DAY
}

/// Days since the most recent new moon, in [0, SYNODIC_MONTH)
fn cycle_age(at: DateTime<Utc>) -> f64 {
    let age = days_since_reference(at).rem_euclid(SYNODIC_MONTH);
    if age >= SYNODIC_MONTH {
        0.0
    } else {
        age
    }
}

/// Computes the moon phase at `at`
///
/// `lookup` resolves text keys (`moon.phases.<index>`) to display text.
pub fn moon_phase<F>(at: DateTime<Utc>, lookup: F) -> MoonPhase
where
    F: Fn(&str) -> String,
{
    let fraction = cycle_age(at) / SYNODIC_MONTH;
    let illumination = (0.5 * (1.0 - (2.0 * PI * fraction).cos()) * 100.0).round();
    let phase = PhaseName::from_index((fraction * 8.0 + 0.5).floor() as usize);

    trace!("Moon at {}: fraction={:.4}, illumination={}%", at, fraction, illumination);

    MoonPhase {
        phase_fraction: fraction,
        illumination: illumination as u8,
        phase,
        phase_name: lookup(phase.text_key().as_str()),
        rating: RatingKey::from_illumination(illumination),
    }
}

/// [`moon_phase`] with the bundled English names
pub fn moon_phase_en(at: DateTime<Utc>) -> MoonPhase {
    moon_phase(at, text::english)
}

/// Predicts the next major phase after `at`
pub fn next_major_phase<F>(at: DateTime<Utc>, lookup: F) -> NextPhase
where
    F: Fn(&str) -> String,
{
    let age = cycle_age(at);
    let adjusted = age + PHASE_EPSILON_DAYS;

    let (phase, target_age) = if adjusted < SYNODIC_MONTH * 0.25 {
        (PhaseName::FirstQuarter, SYNODIC_MONTH * 0.25)
    } else if adjusted < SYNODIC_MONTH * 0.5 {
        (PhaseName::FullMoon, SYNODIC_MONTH * 0.5)
    } else if adjusted < SYNODIC_MONTH * 0.75 {
        (PhaseName::LastQuarter, SYNODIC_MONTH * 0.75)
    } else {
        (PhaseName::NewMoon, SYNODIC_MONTH)
    };

    let days_until = target_age - age;
    let until = Duration::milliseconds((days_until * MS_PER_DAY).round() as i64);

    NextPhase {
        phase,
        name: lookup(phase.text_key().as_str()),
        at: at + until,
    }
}

/// [`next_major_phase`] with the bundled English names
pub fn next_major_phase_en(at: DateTime<Utc>) -> NextPhase {
    next_major_phase(at, text::english)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(d: f64) -> Duration {
        Duration::milliseconds((d * MS_PER_DAY).round() as i64)
    }

    #[test]
    fn test_reference_instant_is_new_moon() {
        let moon = moon_phase_en(reference_new_moon());
        assert!(moon.phase_fraction.abs() < 1e-9);
        assert_eq!(moon.illumination, 0);
        assert_eq!(moon.phase_index(), 0);
        assert_eq!(moon.phase_name, "New Moon");
        assert_eq!(moon.rating, RatingKey::NewMoon);
    }

    #[test]
    fn test_half_month_later_is_full() {
        let moon = moon_phase_en(reference_new_moon() + days(SYNODIC_MONTH / 2.0));
        assert!((moon.phase_fraction - 0.5).abs() < 1e-6);
        assert_eq!(moon.illumination, 100);
        assert_eq!(moon.phase_index(), 4);
        assert_eq!(moon.phase, PhaseName::FullMoon);
        assert_eq!(moon.rating, RatingKey::FullMoon);
        assert_eq!(moon.emoji(), "🌕");
    }

    #[test]
    fn test_first_quarter_is_half_lit() {
        let moon = moon_phase_en(reference_new_moon() + days(SYNODIC_MONTH / 4.0));
        assert_eq!(moon.illumination, 50);
        assert_eq!(moon.phase, PhaseName::FirstQuarter);
        assert_eq!(moon.rating, RatingKey::Quarter);
    }

    #[test]
    fn test_dates_before_reference_stay_in_range() {
        let moon = moon_phase_en(reference_new_moon() - days(SYNODIC_MONTH * 3.0 + 2.0));
        assert!(moon.phase_fraction >= 0.0 && moon.phase_fraction < 1.0);
        assert_eq!(moon.phase, PhaseName::WaningCrescent);
    }

    #[test]
    fn test_phase_index_rounds_to_nearest_bucket() {
        // Just short of the end of the cycle rounds back to new moon
        let moon = moon_phase_en(reference_new_moon() + days(SYNODIC_MONTH * 0.97));
        assert_eq!(moon.phase_index(), 0);
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(RatingKey::from_illumination(15.0), RatingKey::NewMoon);
        assert_eq!(RatingKey::from_illumination(16.0), RatingKey::Crescent);
        assert_eq!(RatingKey::from_illumination(40.0), RatingKey::Crescent);
        assert_eq!(RatingKey::from_illumination(60.0), RatingKey::Quarter);
        assert_eq!(RatingKey::from_illumination(90.0), RatingKey::Gibbous);
        assert_eq!(RatingKey::from_illumination(91.0), RatingKey::FullMoon);
    }

    #[test]
    fn test_custom_lookup_is_used() {
        let moon = moon_phase(reference_new_moon(), |key| format!("[{}]", key));
        assert_eq!(moon.phase_name, "[moon.phases.0]");
    }

    #[test]
    fn test_next_phase_after_full_moon_is_last_quarter() {
        let full = reference_new_moon() + days(SYNODIC_MONTH / 2.0);
        let next = next_major_phase_en(full + days(1.0));

        assert_eq!(next.phase, PhaseName::LastQuarter);
        assert_eq!(next.name, "Last Quarter");

        let expected = reference_new_moon() + days(SYNODIC_MONTH * 0.75);
        assert!((next.at - expected).num_seconds().abs() <= 1);
    }

    #[test]
    fn test_next_phase_on_exact_boundary_moves_on() {
        let first_quarter = reference_new_moon() + days(SYNODIC_MONTH / 4.0);
        let next = next_major_phase_en(first_quarter);
        assert_eq!(next.phase, PhaseName::FullMoon);
    }

    #[test]
    fn test_next_phase_late_in_cycle_is_new_moon() {
        let late = reference_new_moon() + days(SYNODIC_MONTH * 0.9);
        let next = next_major_phase_en(late);

        assert_eq!(next.phase, PhaseName::NewMoon);
        let expected = reference_new_moon() + days(SYNODIC_MONTH);
        assert!((next.at - expected).num_seconds().abs() <= 1);
    }
}

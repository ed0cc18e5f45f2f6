//! Lunar phase calculations
//!
//! A mean-synodic-month model anchored on a known new moon. Accuracy is
//! indicative (circular orbit, no libration), which is all the stargazing
//! dashboard needs.

pub mod conditions;
pub mod disc;
pub mod moon;
pub mod text;
pub mod when;

pub use conditions::{viewing_conditions, Advice, Quality, ViewingConditions};
pub use disc::MoonDisc;
pub use moon::{
    moon_phase, moon_phase_en, next_major_phase, next_major_phase_en, MoonPhase, NextPhase, PhaseName, RatingKey,
    SYNODIC_MONTH,
};
pub use when::{describe_when, PhaseWhen};

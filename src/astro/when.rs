//! Relative wording for an upcoming phase date

use std::fmt;

use chrono::NaiveDate;

/// When a phase happens relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseWhen {
    Tonight,
    Tomorrow,
    /// Between two and seven days out
    InDays(i64),
    OnDate(NaiveDate),
}

/// Describes `target` relative to `today`, both as calendar dates
pub fn describe_when(target: NaiveDate, today: NaiveDate) -> PhaseWhen {
    match (target - today).num_days() {
        0 => PhaseWhen::Tonight,
        1 => PhaseWhen::Tomorrow,
        days @ 2..=7 => PhaseWhen::InDays(days),
        _ => PhaseWhen::OnDate(target),
    }
}

impl fmt::Display for PhaseWhen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseWhen::Tonight => write!(f, "Tonight"),
            PhaseWhen::Tomorrow => write!(f, "Tomorrow"),
            PhaseWhen::InDays(days) => write!(f, "In {} days", days),
            PhaseWhen::OnDate(date) => write!(f, "On {}", date.format("%b %-d")),
        }
    }
}

//! Geometry of the lit part of the lunar disc
//!
//! The disc is drawn as a lit half-disc on the waxing (right) or waning
//! (left) side, corrected by an ellipse along the terminator: dark for a
//! crescent, lit for a gibbous moon.

use std::f64::consts::PI;

/// Shape parameters for drawing the moon at a given phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonDisc {
    /// Phase fraction normalized to [0, 1)
    pub fraction: f64,
    /// Lit side is on the right (fraction <= 0.5)
    pub waxing: bool,
    /// Less than half lit; the terminator ellipse is drawn dark
    pub crescent: bool,
    /// Horizontal half-axis of the terminator ellipse
    pub terminator_rx: f64,
}

impl MoonDisc {
    pub fn from_fraction(fraction: f64, radius: f64) -> Self {
        let p = fraction - fraction.floor();

        MoonDisc {
            fraction: p,
            waxing: p <= 0.5,
            crescent: !(0.25..=0.75).contains(&p),
            terminator_rx: radius * (2.0 * PI * p).cos().abs(),
        }
    }
}

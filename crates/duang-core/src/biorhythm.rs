//! Biorhythm sine cycles measured in days since birth.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

/// Physical cycle length in days.
pub const PHYSICAL_CYCLE: f64 = 23.0;
/// Emotional cycle length in days.
pub const EMOTIONAL_CYCLE: f64 = 28.0;
/// Intellectual cycle length in days.
pub const INTELLECTUAL_CYCLE: f64 = 33.0;

/// Round to one decimal place.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// One cycle value: `50 + 50*sin(2π·days/period)`, rounded to one decimal.
/// The amplitude bound keeps every value inside [0, 100].
fn cycle(days: i64, period: f64) -> f64 {
    let d = days as f64;
    round1(50.0 + 50.0 * (TAU * d / period).sin())
}

/// The three biorhythm percentages for a given day count since birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Biorhythm {
    /// Physical cycle value (23-day period), in [0, 100].
    pub physical: f64,
    /// Emotional cycle value (28-day period), in [0, 100].
    pub emotional: f64,
    /// Intellectual cycle value (33-day period), in [0, 100].
    pub intellectual: f64,
}

impl Biorhythm {
    /// Compute the three cycles for a number of days since birth.
    pub fn at(days_since_birth: i64) -> Self {
        Self {
            physical: cycle(days_since_birth, PHYSICAL_CYCLE),
            emotional: cycle(days_since_birth, EMOTIONAL_CYCLE),
            intellectual: cycle(days_since_birth, INTELLECTUAL_CYCLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn day_zero_is_midline() {
        let b = Biorhythm::at(0);
        assert_eq!(b.physical, 50.0);
        assert_eq!(b.emotional, 50.0);
        assert_eq!(b.intellectual, 50.0);
    }

    #[test]
    fn full_cycle_returns_to_midline() {
        // 23*28*33 days is a whole number of all three periods.
        let b = Biorhythm::at(23 * 28 * 33);
        assert_eq!(b.physical, 50.0);
        assert_eq!(b.emotional, 50.0);
        assert_eq!(b.intellectual, 50.0);
    }

    #[test]
    fn one_decimal_rounding() {
        let b = Biorhythm::at(5);
        assert_eq!(b.physical, round1(b.physical));
        assert_eq!(b.emotional, round1(b.emotional));
        assert_eq!(b.intellectual, round1(b.intellectual));
    }

    proptest! {
        #[test]
        fn values_bounded(days in 0i64..=60_000) {
            let b = Biorhythm::at(days);
            for v in [b.physical, b.emotional, b.intellectual] {
                prop_assert!((0.0..=100.0).contains(&v), "{v} out of range at day {days}");
            }
        }
    }
}

//! Validated birth dates and the day arithmetic derived from them.
//!
//! A [`BirthDate`] is guaranteed to be a real calendar date: Feb 30, Apr 31,
//! or Feb 29 outside a leap year are rejected at construction with
//! [`AstroError::InvalidDate`] rather than clamped.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{AstroError, AstroResult};

/// Year offset between the common era and the Buddhist era.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// A validated calendar birth date.
///
/// Serializes as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Build a birth date, rejecting combinations that do not exist on the
    /// calendar.
    pub fn new(year: i32, month: u32, day: u32) -> AstroResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(AstroError::InvalidDate { year, month, day })
    }

    /// The calendar year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// The calendar month (1-12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// The day of month (1-31).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// The underlying calendar date.
    pub fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Day-of-year approximation using uniform 30-day months.
    ///
    /// This is the deliberately crude formula the moon and Vedic sign tables
    /// are bucketed by. It is not the calendar-accurate ordinal day.
    pub fn approx_day_of_year(self) -> u32 {
        (self.0.month() - 1) * 30 + self.0.day()
    }

    /// The birth year expressed in the Buddhist era.
    pub fn buddhist_era(self) -> i32 {
        self.0.year() + BUDDHIST_ERA_OFFSET
    }

    /// Whole days elapsed from this date to `as_of` (negative if in the
    /// future).
    pub fn days_until(self, as_of: NaiveDate) -> i64 {
        as_of.signed_duration_since(self.0).num_days()
    }

    /// Age in whole years as of the given date, approximated as elapsed
    /// days divided by 365.
    pub fn age_years(self, as_of: NaiveDate) -> i64 {
        self.days_until(as_of) / 365
    }

    /// Compact `YYYYMMDD` encoding used as the stable seed key.
    pub fn seed_key(self) -> String {
        format!(
            "{:04}{:02}{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for BirthDate {
    type Err = AstroError;

    fn from_str(s: &str) -> AstroResult<Self> {
        let mut parts = s.trim().splitn(3, '-');
        let parse_part = |p: Option<&str>| {
            p.and_then(|v| v.parse::<i64>().ok())
                .ok_or_else(|| AstroError::DateFormat(s.to_string()))
        };
        let year = parse_part(parts.next())?;
        let month = parse_part(parts.next())?;
        let day = parse_part(parts.next())?;
        let (month, day) = (
            u32::try_from(month).map_err(|_| AstroError::DateFormat(s.to_string()))?,
            u32::try_from(day).map_err(|_| AstroError::DateFormat(s.to_string()))?,
        );
        let year = i32::try_from(year).map_err(|_| AstroError::DateFormat(s.to_string()))?;
        Self::new(year, month, day)
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

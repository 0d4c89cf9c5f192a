//! The astrological profile bundle produced from one birth date.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::biorhythm::Biorhythm;
use crate::date::BirthDate;
use crate::numerology::Numerology;
use crate::zodiac::{ChineseZodiac, VedicSign, WesternSign, moon_sign};

/// Everything derivable from a birth date, bundled as one immutable value.
///
/// The five divination sections are optional so that a partial bundle
/// (e.g. deserialized from an older client) stays representable;
/// [`AstroProfile::calculate`] always fills all of them. Prediction
/// confidence downstream is scored on how many of the five are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstroProfile {
    /// The validated birth date this profile was computed from.
    pub birth_date: BirthDate,
    /// Age in whole years as of the reference date (days / 365).
    pub age: i64,
    /// Chinese zodiac animal and element.
    pub chinese: Option<ChineseZodiac>,
    /// Western tropical sign.
    pub western: Option<WesternSign>,
    /// Approximate moon sign.
    pub moon: Option<WesternSign>,
    /// Vedic sign (carries its own Western equivalent).
    pub vedic: Option<VedicSign>,
    /// Pythagorean numerology set.
    pub numerology: Option<Numerology>,
    /// Biorhythm cycles as of the reference date.
    pub biorhythm: Biorhythm,
    /// Birth year in the Buddhist era.
    pub buddhist_era: i32,
}

impl AstroProfile {
    /// Number of divination sections confidence is scored against.
    pub const REQUIRED_SECTIONS: usize = 5;

    /// Compute the full profile for a birth date as of a reference date.
    ///
    /// Pure: the same `(birth, as_of)` pair always produces an identical
    /// profile.
    pub fn calculate(birth: BirthDate, as_of: NaiveDate) -> Self {
        let (year, month, day) = (birth.year(), birth.month(), birth.day());
        Self {
            birth_date: birth,
            age: birth.age_years(as_of),
            chinese: Some(ChineseZodiac::from_year(year)),
            western: Some(WesternSign::from_month_day(month, day)),
            moon: Some(moon_sign(month, day)),
            vedic: Some(VedicSign::from_month_day(month, day)),
            numerology: Some(Numerology::for_date(birth)),
            biorhythm: Biorhythm::at(birth.days_until(as_of)),
            buddhist_era: birth.buddhist_era(),
        }
    }

    /// Compute the profile as of today (UTC).
    pub fn calculate_now(birth: BirthDate) -> Self {
        Self::calculate(birth, Utc::now().date_naive())
    }

    /// How many of the five required divination sections are present.
    pub fn section_count(&self) -> usize {
        [
            self.chinese.is_some(),
            self.western.is_some(),
            self.moon.is_some(),
            self.vedic.is_some(),
            self.numerology.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::{ChineseAnimal, ChineseElement};

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 6, 1).unwrap()
    }

    #[test]
    fn calculate_is_pure() {
        let birth = BirthDate::new(1990, 1, 1).unwrap();
        let a = AstroProfile::calculate(birth, as_of());
        let b = AstroProfile::calculate(birth, as_of());
        assert_eq!(a, b);
    }

    #[test]
    fn concrete_1990_scenario() {
        let birth = BirthDate::new(1990, 1, 1).unwrap();
        let profile = AstroProfile::calculate(birth, as_of());
        let chinese = profile.chinese.unwrap();
        assert_eq!(chinese.animal, ChineseAnimal::Horse);
        assert_eq!(chinese.element, ChineseElement::Fire);
        assert_eq!(profile.western, Some(WesternSign::Capricorn));
        assert_eq!(profile.numerology.unwrap().life_path, 3);
        assert_eq!(profile.buddhist_era, 2533);
        assert_eq!(profile.age, 30);
    }

    #[test]
    fn all_sections_present_after_calculate() {
        let birth = BirthDate::new(2000, 2, 29).unwrap();
        let profile = AstroProfile::calculate(birth, as_of());
        assert_eq!(profile.section_count(), AstroProfile::REQUIRED_SECTIONS);
    }

    #[test]
    fn section_count_tracks_missing_sections() {
        let birth = BirthDate::new(1990, 1, 1).unwrap();
        let mut profile = AstroProfile::calculate(birth, as_of());
        profile.numerology = None;
        profile.moon = None;
        assert_eq!(profile.section_count(), 3);
    }

    #[test]
    fn serde_round_trip() {
        let birth = BirthDate::new(1985, 7, 9).unwrap();
        let profile = AstroProfile::calculate(birth, as_of());
        let json = serde_json::to_string(&profile).unwrap();
        let back: AstroProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}

//! Core horoscope calculator: validated birth dates, zodiac sign tables
//! across traditions, Pythagorean numerology, and biorhythm cycles.
//!
//! Everything here is a pure, deterministic function of the birth date (and
//! an explicit "as of" reference date). There is no ephemeris computation —
//! all signs are calendar-bucket lookups, by design.

/// Biorhythm sine cycles.
pub mod biorhythm;
/// Validated birth dates and day arithmetic.
pub mod date;
/// Error types used throughout the crate.
pub mod error;
/// Supported display languages.
pub mod language;
/// Numerology numbers derived from the date digits.
pub mod numerology;
/// The combined astrological profile bundle.
pub mod profile;
/// Zodiac sign tables: Western, Chinese, moon, Vedic.
pub mod zodiac;

/// Re-export the biorhythm bundle.
pub use biorhythm::Biorhythm;
/// Re-export the validated birth date.
pub use date::BirthDate;
/// Re-export error types.
pub use error::{AstroError, AstroResult};
/// Re-export the language selector.
pub use language::Language;
/// Re-export the numerology bundle.
pub use numerology::Numerology;
/// Re-export the profile bundle.
pub use profile::AstroProfile;
/// Re-export the zodiac sign types.
pub use zodiac::{ChineseAnimal, ChineseElement, ChineseZodiac, VedicSign, WesternSign};

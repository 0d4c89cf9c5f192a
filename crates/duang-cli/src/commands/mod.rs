pub mod lucky;
pub mod predict;
pub mod profile;

use duang_core::{BirthDate, Language};
use duang_predict::Period;

/// Parse a `YYYY-MM-DD` argument into a validated birth date.
pub fn parse_date(s: &str) -> Result<BirthDate, String> {
    s.parse::<BirthDate>().map_err(|e| e.to_string())
}

/// Parse a language code argument.
pub fn parse_lang(s: &str) -> Result<Language, String> {
    Language::parse(s).ok_or_else(|| format!("unsupported language: \"{s}\" (use th, en, or zh)"))
}

/// Parse a forecast period argument.
pub fn parse_period(s: &str) -> Result<Period, String> {
    Period::parse(s)
        .ok_or_else(|| format!("unknown period: \"{s}\" (use daily, weekly, or monthly)"))
}

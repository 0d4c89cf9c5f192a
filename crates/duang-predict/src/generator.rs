//! The prediction generator: deterministic, per-category sentence selection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use duang_core::{AstroProfile, BirthDate, Language};

use crate::category::{Category, Period};
use crate::error::{PredictError, PredictResult};
use crate::sampler::{prediction_seed, sample_distinct};
use crate::templates::{TemplateSet, overview};

/// Sentences selected for one life category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPrediction {
    /// The life category.
    pub category: Category,
    /// The selected sentences, in sampling order.
    pub lines: Vec<String>,
}

/// A complete prediction for one birth date, period, and language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// The forecast horizon this was sampled for.
    pub period: Period,
    /// Data-completeness score in [0, 100], one decimal.
    pub confidence: f64,
    /// Period-specific overview sentence (weekly and monthly only).
    pub overview: Option<String>,
    /// Per-category selections, in [`Category::all`] order.
    pub categories: Vec<CategoryPrediction>,
    /// When this prediction was generated. Informational only; not part of
    /// the determinism contract.
    pub generated_at: DateTime<Utc>,
}

impl Prediction {
    /// The selected sentences for one category, if present.
    pub fn category(&self, category: Category) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.lines.as_slice())
    }
}

/// Lucky numbers, colors, and weekdays derived for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckyElements {
    /// Life path number plus two fixed arithmetic derivatives.
    pub numbers: [u32; 3],
    /// Static localized color names.
    pub colors: Vec<String>,
    /// Static localized weekday names.
    pub days: Vec<String>,
}

/// Leading decimal digit of `n`.
fn lead_digit(mut n: u32) -> u32 {
    while n >= 10 {
        n /= 10;
    }
    n
}

/// Round to one decimal place.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Generates reproducible horoscope predictions in one display language.
///
/// Holds only a reference to that language's static template table; cheap to
/// construct per request, and never shares sampler state between calls.
#[derive(Debug, Clone)]
pub struct PredictionGenerator {
    language: Language,
    templates: &'static TemplateSet,
}

impl PredictionGenerator {
    /// How many sentences are drawn per category.
    pub const SENTENCES_PER_CATEGORY: usize = 3;

    /// Build a generator for a known language.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            templates: TemplateSet::for_language(language),
        }
    }

    /// Build a generator from a user-supplied language code.
    ///
    /// Unknown codes fail here, at construction, rather than on first use.
    pub fn from_code(code: &str) -> PredictResult<Self> {
        Language::parse(code)
            .map(Self::new)
            .ok_or_else(|| PredictError::UnsupportedLanguage(code.to_string()))
    }

    /// The generator's display language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Deterministically select `count` distinct sentences for one category.
    ///
    /// The seed is derived from the birth date and the category/period key,
    /// so repeated calls with identical arguments return the identical
    /// ordered list, across processes.
    pub fn sample_category(
        &self,
        category: Category,
        birth: BirthDate,
        period: Period,
        count: usize,
    ) -> Vec<String> {
        let key = format!("{}_{}", category.key(), period.key());
        let seed = prediction_seed(birth, &key);
        sample_distinct(self.templates.category(category), seed, count)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Generate the full prediction for a profile and period.
    ///
    /// Confidence scores how many of the five divination sections the
    /// profile carries; absent sections lower the score rather than being
    /// silently defaulted.
    pub fn generate(&self, profile: &AstroProfile, period: Period) -> Prediction {
        let birth = profile.birth_date;
        let categories = Category::all()
            .iter()
            .map(|&category| CategoryPrediction {
                category,
                lines: self.sample_category(
                    category,
                    birth,
                    period,
                    Self::SENTENCES_PER_CATEGORY,
                ),
            })
            .collect();

        let present = profile.section_count() as f64;
        let confidence = round1(present / AstroProfile::REQUIRED_SECTIONS as f64 * 100.0);

        Prediction {
            period,
            confidence,
            overview: overview(self.language, period).map(str::to_string),
            categories,
            generated_at: Utc::now(),
        }
    }

    /// Weekly forecast: [`Self::generate`] with the period fixed to weekly,
    /// which attaches the static weekly overview sentence.
    pub fn weekly_forecast(&self, profile: &AstroProfile) -> Prediction {
        self.generate(profile, Period::Weekly)
    }

    /// Monthly outlook: [`Self::generate`] with the period fixed to monthly,
    /// which attaches the static monthly overview sentence.
    pub fn monthly_outlook(&self, profile: &AstroProfile) -> Prediction {
        self.generate(profile, Period::Monthly)
    }

    /// Lucky numbers, colors, and weekdays for a profile.
    ///
    /// Requires the numerology section: a profile without it is an error,
    /// not a silent life-path default.
    pub fn lucky_elements(&self, profile: &AstroProfile) -> PredictResult<LuckyElements> {
        let numerology = profile
            .numerology
            .ok_or(PredictError::MissingField("numerology"))?;
        let lp = numerology.life_path;

        let colors: &[&str] = match self.language {
            Language::Thai => &["ฟ้า", "เขียว", "ทอง"],
            Language::English => &["Blue", "Green", "Gold"],
            Language::Chinese => &["蓝色", "绿色", "金色"],
        };
        let days: &[&str] = match self.language {
            Language::Thai => &["พุธ", "พฤหัสบดี", "ศุกร์"],
            Language::English => &["Wednesday", "Thursday", "Friday"],
            Language::Chinese => &["周三", "周四", "周五"],
        };

        Ok(LuckyElements {
            numbers: [lp, lead_digit(lp * 2), lead_digit(lp + 7)],
            colors: colors.iter().map(|s| (*s).to_string()).collect(),
            days: days.iter().map(|s| (*s).to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn profile() -> AstroProfile {
        let birth = BirthDate::new(1990, 1, 1).unwrap();
        let as_of = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
        AstroProfile::calculate(birth, as_of)
    }

    #[test]
    fn generate_is_idempotent() {
        let generator = PredictionGenerator::new(Language::English);
        let p = profile();
        let a = generator.generate(&p, Period::Daily);
        let b = generator.generate(&p, Period::Daily);
        assert_eq!(a.categories, b.categories);
        assert_eq!(a.confidence, b.confidence);
        assert_eq!(a.overview, b.overview);
    }

    #[test]
    fn covers_all_six_categories() {
        let generator = PredictionGenerator::new(Language::Thai);
        let prediction = generator.generate(&profile(), Period::Daily);
        assert_eq!(prediction.categories.len(), 6);
        for cat in Category::all() {
            let lines = prediction.category(*cat).unwrap();
            assert_eq!(lines.len(), PredictionGenerator::SENTENCES_PER_CATEGORY);
            for (i, a) in lines.iter().enumerate() {
                for b in &lines[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn full_profile_scores_full_confidence() {
        let generator = PredictionGenerator::new(Language::English);
        let prediction = generator.generate(&profile(), Period::Daily);
        assert_eq!(prediction.confidence, 100.0);
    }

    #[test]
    fn missing_sections_lower_confidence() {
        let generator = PredictionGenerator::new(Language::English);
        let mut p = profile();
        p.moon = None;
        p.vedic = None;
        let prediction = generator.generate(&p, Period::Daily);
        assert_eq!(prediction.confidence, 60.0);
    }

    #[test]
    fn periods_select_different_sentences_or_overview() {
        let generator = PredictionGenerator::new(Language::English);
        let p = profile();
        let daily = generator.generate(&p, Period::Daily);
        let weekly = generator.weekly_forecast(&p);
        let monthly = generator.monthly_outlook(&p);
        assert!(daily.overview.is_none());
        assert!(weekly.overview.is_some());
        assert!(monthly.overview.is_some());
        assert_ne!(weekly.overview, monthly.overview);
        // Period feeds the seed, so the sampled sentences differ too.
        assert_ne!(daily.categories, weekly.categories);
    }

    #[test]
    fn unsupported_language_fails_at_construction() {
        assert!(PredictionGenerator::from_code("en").is_ok());
        let err = PredictionGenerator::from_code("de").unwrap_err();
        assert_eq!(err, PredictError::UnsupportedLanguage("de".to_string()));
    }

    #[test]
    fn lucky_numbers_from_life_path() {
        let generator = PredictionGenerator::new(Language::English);
        // 1990-01-01 has life path 3: [3, 6, lead(10)=1].
        let lucky = generator.lucky_elements(&profile()).unwrap();
        assert_eq!(lucky.numbers, [3, 6, 1]);
        assert_eq!(lucky.colors.len(), 3);
        assert_eq!(lucky.days.len(), 3);
    }

    #[test]
    fn lucky_elements_require_numerology() {
        let generator = PredictionGenerator::new(Language::English);
        let mut p = profile();
        p.numerology = None;
        assert_eq!(
            generator.lucky_elements(&p),
            Err(PredictError::MissingField("numerology"))
        );
    }

    #[test]
    fn prediction_serializes_with_lowercase_keys() {
        let generator = PredictionGenerator::new(Language::English);
        let prediction = generator.generate(&profile(), Period::Weekly);
        let json = serde_json::to_value(&prediction).unwrap();
        assert_eq!(json["period"], "weekly");
        assert_eq!(json["confidence"], 100.0);
        assert_eq!(json["categories"][0]["category"], "financial");
        assert_eq!(json["categories"][0]["lines"].as_array().unwrap().len(), 3);
        let back: Prediction = serde_json::from_value(json).unwrap();
        assert_eq!(back.categories, prediction.categories);
    }

    #[test]
    fn lead_digit_samples() {
        assert_eq!(lead_digit(3), 3);
        assert_eq!(lead_digit(10), 1);
        assert_eq!(lead_digit(22), 2);
        assert_eq!(lead_digit(187), 1);
    }
}

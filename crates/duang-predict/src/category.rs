//! Life categories and forecast periods.

use duang_core::Language;
use serde::{Deserialize, Serialize};

/// The six life categories every prediction covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Money, investments, windfalls.
    Financial,
    /// Work and professional life.
    Career,
    /// Romance and relationships.
    Love,
    /// Physical and mental wellbeing.
    Health,
    /// Family and relatives.
    Family,
    /// Study and learning.
    Education,
}

impl Category {
    /// All categories in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Financial,
            Self::Career,
            Self::Love,
            Self::Health,
            Self::Family,
            Self::Education,
        ]
    }

    /// Stable lowercase key used in seed derivation.
    pub fn key(self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::Career => "career",
            Self::Love => "love",
            Self::Health => "health",
            Self::Family => "family",
            Self::Education => "education",
        }
    }

    /// The category heading in the given display language.
    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Financial, Language::Thai) => "การเงิน",
            (Self::Career, Language::Thai) => "การงาน",
            (Self::Love, Language::Thai) => "ความรัก",
            (Self::Health, Language::Thai) => "สุขภาพ",
            (Self::Family, Language::Thai) => "ครอบครัว",
            (Self::Education, Language::Thai) => "การศึกษา",
            (Self::Financial, Language::English) => "Financial",
            (Self::Career, Language::English) => "Career",
            (Self::Love, Language::English) => "Love",
            (Self::Health, Language::English) => "Health",
            (Self::Family, Language::English) => "Family",
            (Self::Education, Language::English) => "Education",
            (Self::Financial, Language::Chinese) => "财务",
            (Self::Career, Language::Chinese) => "事业",
            (Self::Love, Language::Chinese) => "爱情",
            (Self::Health, Language::Chinese) => "健康",
            (Self::Family, Language::Chinese) => "家庭",
            (Self::Education, Language::Chinese) => "教育",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// The forecast horizon a prediction is sampled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// One day.
    Daily,
    /// One week.
    Weekly,
    /// One month.
    Monthly,
}

impl Period {
    /// All periods.
    pub fn all() -> &'static [Self] {
        &[Self::Daily, Self::Weekly, Self::Monthly]
    }

    /// Stable lowercase key used in seed derivation.
    pub fn key(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Parse a period from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Some(Self::Daily),
            "weekly" | "week" => Some(Self::Weekly),
            "monthly" | "month" => Some(Self::Monthly),
            _ => None,
        }
    }

    /// The period name in the given display language.
    pub fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Daily, Language::Thai) => "รายวัน",
            (Self::Weekly, Language::Thai) => "รายสัปดาห์",
            (Self::Monthly, Language::Thai) => "รายเดือน",
            (Self::Daily, Language::English) => "Daily",
            (Self::Weekly, Language::English) => "Weekly",
            (Self::Monthly, Language::English) => "Monthly",
            (Self::Daily, Language::Chinese) => "每日",
            (Self::Weekly, Language::Chinese) => "每周",
            (Self::Monthly, Language::Chinese) => "每月",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

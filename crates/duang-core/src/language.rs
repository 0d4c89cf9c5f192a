//! Display languages supported by the static text tables.

use serde::{Deserialize, Serialize};

/// A display language for sign labels and prediction templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Thai ("th").
    Thai,
    /// English ("en").
    English,
    /// Simplified Chinese ("zh").
    Chinese,
}

impl Language {
    /// All supported languages.
    pub fn all() -> &'static [Self] {
        &[Self::Thai, Self::English, Self::Chinese]
    }

    /// The two-letter language code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Thai => "th",
            Self::English => "en",
            Self::Chinese => "zh",
        }
    }

    /// The language's own name for itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Thai => "ไทย",
            Self::English => "English",
            Self::Chinese => "中文",
        }
    }

    /// Parse a language from a user-supplied code or name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "th" | "tha" | "thai" => Some(Self::Thai),
            "en" | "eng" | "english" => Some(Self::English),
            "zh" | "cn" | "chinese" => Some(Self::Chinese),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Thai => write!(f, "Thai"),
            Self::English => write!(f, "English"),
            Self::Chinese => write!(f, "Chinese"),
        }
    }
}

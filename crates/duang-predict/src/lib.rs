//! Deterministic horoscope prediction generator.
//!
//! Given an [`duang_core::AstroProfile`], selects canned prediction
//! sentences per life category from static per-language template tables.
//! Selection is seeded from the birth date and the category/period key, so
//! the same inputs always reproduce the same prediction — there is no
//! global random state anywhere.

/// Life categories and forecast periods.
pub mod category;
/// Error types for prediction generation.
pub mod error;
/// The prediction generator and its output types.
pub mod generator;
/// Seed derivation and without-replacement sampling.
pub mod sampler;
/// Static per-language sentence tables.
pub mod templates;

/// Re-export category and period selectors.
pub use category::{Category, Period};
/// Re-export error types.
pub use error::{PredictError, PredictResult};
/// Re-export the generator and its outputs.
pub use generator::{CategoryPrediction, LuckyElements, Prediction, PredictionGenerator};

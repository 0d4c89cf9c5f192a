use thiserror::Error;

/// Alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

/// Errors that can occur when building astrological data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstroError {
    /// The given year/month/day combination is not a real calendar date.
    #[error("invalid date: {year:04}-{month:02}-{day:02} does not exist")]
    InvalidDate {
        /// Requested year.
        year: i32,
        /// Requested month (1-12).
        month: u32,
        /// Requested day of month.
        day: u32,
    },

    /// A date string could not be parsed as `YYYY-MM-DD`.
    #[error("invalid date format: \"{0}\" (expected YYYY-MM-DD)")]
    DateFormat(String),
}

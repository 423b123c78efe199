use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Invalid date range: {end} is before {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Household size must be at least 1")]
    InvalidHouseholdSize,

    #[error("Cuisine distribution sums to {sum} days but the range covers {days}")]
    DistributionMismatch { sum: u32, days: u32 },

    #[error("No main dish candidates for {0} cuisine")]
    NoCandidate(String),

    #[error("Menu API unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Menu API call timed out after {0}s")]
    RemoteTimeout(u64),

    #[error("Menu API response could not be parsed: {0}")]
    ResponseParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl MenuError {
    /// True for failures of the remote menu strategy, all of which are
    /// recoverable by falling back to the local planner.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            MenuError::RemoteUnavailable(_)
                | MenuError::RemoteTimeout(_)
                | MenuError::ResponseParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;

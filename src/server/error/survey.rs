use thiserror::Error;

use crate::server::error::data::DataError;

#[derive(Error, Debug)]
pub enum SurveyError {
    /// The survey's start date falls after its end date.
    #[error("start date cannot be after end date")]
    InvalidDateRange,

    /// The survey year is later than the current calendar year.
    #[error("survey year cannot be in the future")]
    InvalidYear { year: i32, current_year: i32 },

    /// The survey does not exist or its identifier is malformed.
    #[error("survey not found")]
    NotFound,

    #[error(transparent)]
    Data(#[from] DataError),
}

impl SurveyError {
    /// Whether the error was caused by the submitted survey fields rather than by
    /// storage or a lookup.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidDateRange | Self::InvalidYear { .. })
    }
}

use thiserror::Error;

use crate::server::error::data::DataError;

#[derive(Error, Debug)]
pub enum SectionError {
    /// The section's survey_id does not resolve to an existing survey.
    #[error("invalid SurveyID")]
    InvalidSurveyReference,

    #[error(transparent)]
    Data(#[from] DataError),
}

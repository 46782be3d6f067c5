use thiserror::Error;

use crate::server::error::data::DataError;

#[derive(Error, Debug)]
pub enum StudentError {
    /// Another student already uses the submitted email or phone number.
    #[error("email or phone number already exists")]
    DuplicateContact,

    /// Deletion target does not exist.
    ///
    /// Controllers match on this variant to answer 404 "Student not found"; any
    /// other delete failure is reported with its own message.
    #[error("student not found")]
    NotFound,

    #[error(transparent)]
    Data(#[from] DataError),
}

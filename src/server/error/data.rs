use thiserror::Error;

/// Errors raised by the repositories.
///
/// `InvalidIdentifier` and `NotFound` are kept apart so callers can tell a malformed
/// identifier from a well-formed one that matched nothing.
#[derive(Error, Debug)]
pub enum DataError {
    /// The identifier could not be parsed into the stored identifier format.
    #[error("invalid {entity} ID")]
    InvalidIdentifier {
        /// Collection the identifier was meant for
        entity: &'static str,
        /// The raw value supplied by the caller
        value: String,
    },

    /// No record matched the identifier.
    #[error("{entity} not found")]
    NotFound {
        /// Collection that was searched
        entity: &'static str,
        /// Normalized identifier that matched nothing
        id: String,
    },

    /// Storage driver failure.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

use uuid::Uuid;

use crate::server::error::data::DataError;

/// Generates a new record identifier.
///
/// Identifiers are random UUIDs rendered as 32 lowercase hex characters, the form
/// in which they are stored and exposed over the API.
///
/// # Returns
/// - `String` - Freshly generated identifier
pub fn new_record_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Parses a caller-supplied identifier into its stored form.
///
/// Any textual UUID form is accepted (hyphenated, simple, braced, URN, mixed case)
/// and normalized to the simple lowercase form used as the primary key.
///
/// # Arguments
/// - `entity` - Collection name used in the error message
/// - `value` - The identifier as received from the client
///
/// # Returns
/// - `Ok(String)` - Normalized identifier
/// - `Err(DataError::InvalidIdentifier)` - The value is not a valid identifier
pub fn parse_record_id(entity: &'static str, value: &str) -> Result<String, DataError> {
    Uuid::try_parse(value.trim())
        .map(|id| id.simple().to_string())
        .map_err(|_| DataError::InvalidIdentifier {
            entity,
            value: value.to_string(),
        })
}

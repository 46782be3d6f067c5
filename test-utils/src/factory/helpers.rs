//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique field values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to derive distinct titles, emails and phone numbers so that records created
/// by default factories never collide with each other.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a record identifier in the stored format (32 lowercase hex characters).
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Creates a survey and a section that references it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((survey, section))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_section_with_survey(
    db: &DatabaseConnection,
) -> Result<(entity::survey::Model, entity::section::Model), DbErr> {
    let survey = crate::factory::survey::create_survey(db).await?;
    let section = crate::factory::section::create_section(db, &survey.id).await?;

    Ok((survey, section))
}

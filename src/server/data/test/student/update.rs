use super::*;

/// Tests updating a student.
///
/// Verifies every editable field is replaced, `updated_at` is written and the stored
/// `created_at` is kept.
///
/// Expected: Ok with updated student
#[tokio::test]
async fn updates_student_and_keeps_created_at() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::student::StudentFactory::new(db)
        .timestamps(1_600_000_000)
        .build()
        .await?;

    let updated = StudentRepository::new(db)
        .update(UpdateStudentParams {
            id: created.id.clone(),
            name: "Citra".to_string(),
            email: "citra@example.com".to_string(),
            phone_number: "0899".to_string(),
            university_name: "UI".to_string(),
            start_year: 2019,
            is_active: false,
            updated_at: 1_700_000_000,
        })
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Citra");
    assert!(!updated.is_active);
    assert_eq!(updated.created_at, 1_600_000_000);
    assert_eq!(updated.updated_at, 1_700_000_000);

    let stored = entity::prelude::Student::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.email, "citra@example.com");
    assert_eq!(stored.created_at, 1_600_000_000);

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Err(DataError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_student() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentRepository::new(db)
        .update(UpdateStudentParams {
            id: factory::helpers::new_record_id(),
            name: "Nobody".to_string(),
            email: String::new(),
            phone_number: String::new(),
            university_name: String::new(),
            start_year: 0,
            is_active: false,
            updated_at: 0,
        })
        .await;

    assert!(matches!(result, Err(DataError::NotFound { .. })));

    Ok(())
}

use super::*;

/// Tests updating a student.
///
/// Expected: Ok with `updated_at` refreshed and `created_at` kept
#[tokio::test]
async fn refreshes_updated_at_and_keeps_created_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::StudentFactory::new(db)
        .timestamps(1_600_000_000)
        .build()
        .await?;

    let updated = StudentService::new(db)
        .update(UpdateStudentParams {
            id: student.id.clone(),
            name: "Renamed".to_string(),
            email: student.email.clone(),
            phone_number: student.phone_number.clone(),
            university_name: student.university_name.clone(),
            start_year: student.start_year,
            is_active: false,
            updated_at: 0,
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert!(!updated.is_active);
    assert_eq!(updated.created_at, 1_600_000_000);
    assert!(updated.updated_at > 1_600_000_000);

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Err(DataError::NotFound) from the existence check
#[tokio::test]
async fn returns_not_found_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentService::new(db)
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

    assert!(matches!(
        result,
        Err(StudentError::Data(DataError::NotFound { .. }))
    ));

    Ok(())
}

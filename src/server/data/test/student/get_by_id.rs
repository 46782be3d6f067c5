use super::*;

/// Tests retrieving an existing student.
///
/// Expected: Ok with matching student
#[tokio::test]
async fn returns_student_by_id() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::student::StudentFactory::new(db)
        .name("Budi")
        .email("budi@example.com")
        .build()
        .await?;

    let student = StudentRepository::new(db).get_by_id(&created.id).await?;

    assert_eq!(student.id, created.id);
    assert_eq!(student.name, "Budi");
    assert_eq!(student.email, "budi@example.com");

    Ok(())
}

/// Tests retrieving a student that does not exist.
///
/// Expected: Err(DataError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_student() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentRepository::new(db)
        .get_by_id(&factory::helpers::new_record_id())
        .await;

    assert!(matches!(
        result,
        Err(DataError::NotFound { entity: "student", .. })
    ));

    Ok(())
}

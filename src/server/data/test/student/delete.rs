use super::*;

/// Tests deleting a student.
///
/// Expected: Ok with student removed
#[tokio::test]
async fn deletes_student() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_student(db).await?;

    StudentRepository::new(db).delete(&created.id).await?;

    assert!(entity::prelude::Student::find_by_id(created.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a student with a malformed identifier.
///
/// Expected: Err(DataError::InvalidIdentifier)
#[tokio::test]
async fn rejects_malformed_id() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentRepository::new(db).delete("zzz").await;

    assert!(matches!(result, Err(DataError::InvalidIdentifier { .. })));

    Ok(())
}

use super::*;

/// Tests listing every stored student.
///
/// Expected: Ok with all students
#[tokio::test]
async fn returns_all_students() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_student(db).await?;
    }

    let students = StudentRepository::new(db).get_all().await?;

    assert_eq!(students.len(), 3);

    Ok(())
}

use super::*;

/// Tests deleting a survey.
///
/// Expected: Ok with survey removed from the database
#[tokio::test]
async fn deletes_survey() -> Result<(), DataError> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_survey(db).await?;

    SurveyRepository::new(db).delete(&created.id).await?;

    let stored = entity::prelude::Survey::find_by_id(created.id).one(db).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests that deleting a survey leaves its sections in place.
///
/// Expected: Ok with the section still stored
#[tokio::test]
async fn leaves_sections_of_deleted_survey() -> Result<(), DataError> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (survey, section) = factory::helpers::create_section_with_survey(db).await?;

    SurveyRepository::new(db).delete(&survey.id).await?;

    let stored = entity::prelude::Section::find_by_id(section.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests deleting a survey twice.
///
/// Expected: second delete returns Err(DataError::NotFound)
#[tokio::test]
async fn returns_not_found_on_second_delete() -> Result<(), DataError> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_survey(db).await?;
    let repo = SurveyRepository::new(db);

    repo.delete(&created.id).await?;
    let result = repo.delete(&created.id).await;

    assert!(matches!(result, Err(DataError::NotFound { .. })));

    Ok(())
}

use super::*;

/// Tests deleting a section.
///
/// Expected: Ok with section removed and its survey untouched
#[tokio::test]
async fn deletes_section() -> Result<(), DataError> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (survey, section) = factory::helpers::create_section_with_survey(db).await?;

    SectionRepository::new(db).delete(&section.id).await?;

    assert!(entity::prelude::Section::find_by_id(section.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Survey::find_by_id(survey.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a section that does not exist.
///
/// Expected: Err(DataError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_section() -> Result<(), DataError> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SectionRepository::new(db)
        .delete(&factory::helpers::new_record_id())
        .await;

    assert!(matches!(result, Err(DataError::NotFound { .. })));

    Ok(())
}

use super::*;

/// Tests deleting a section then looking it up.
///
/// Expected: delete Ok, lookup Err(DataError::NotFound)
#[tokio::test]
async fn deleted_section_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_survey, section) = factory::helpers::create_section_with_survey(db).await?;
    let service = SectionService::new(db);

    assert!(service.delete(&section.id).await.is_ok());
    assert!(matches!(
        service.get_by_id(&section.id).await,
        Err(SectionError::Data(DataError::NotFound { .. }))
    ));

    Ok(())
}

/// Tests deleting a section that does not exist.
///
/// Expected: Err(DataError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_section() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SectionService::new(db)
        .delete(&factory::helpers::new_record_id())
        .await;

    assert!(matches!(
        result,
        Err(SectionError::Data(DataError::NotFound { .. }))
    ));

    Ok(())
}

use super::*;

/// Tests retrieving an existing survey.
///
/// Expected: Ok with matching survey
#[tokio::test]
async fn returns_survey_by_id() -> Result<(), DataError> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::survey::SurveyFactory::new(db)
        .title("Exit Survey")
        .year(2022)
        .build()
        .await?;

    let survey = SurveyRepository::new(db).get_by_id(&created.id).await?;

    assert_eq!(survey.id, created.id);
    assert_eq!(survey.title, "Exit Survey");
    assert_eq!(survey.year, 2022);

    Ok(())
}

/// Tests that identifiers in hyphenated or uppercase form resolve to the same record.
///
/// Expected: Ok with matching survey
#[tokio::test]
async fn accepts_hyphenated_id() -> Result<(), DataError> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_survey(db).await?;
    let hyphenated = uuid::Uuid::parse_str(&created.id)
        .unwrap()
        .hyphenated()
        .to_string()
        .to_uppercase();

    let survey = SurveyRepository::new(db).get_by_id(&hyphenated).await?;

    assert_eq!(survey.id, created.id);

    Ok(())
}

/// Tests retrieving a survey that does not exist.
///
/// Expected: Err(DataError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_survey() -> Result<(), DataError> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let missing = test_utils::factory::helpers::new_record_id();
    let result = SurveyRepository::new(db).get_by_id(&missing).await;

    assert!(matches!(result, Err(DataError::NotFound { entity: "survey", .. })));

    Ok(())
}

/// Tests retrieving a survey with a malformed identifier.
///
/// Expected: Err(DataError::InvalidIdentifier)
#[tokio::test]
async fn rejects_malformed_id() -> Result<(), DataError> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SurveyRepository::new(db).get_by_id("not-an-id").await;

    assert!(matches!(
        result,
        Err(DataError::InvalidIdentifier { entity: "survey", .. })
    ));

    Ok(())
}

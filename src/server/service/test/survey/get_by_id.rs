use super::*;

/// Tests that a malformed identifier is reported as not found.
///
/// Expected: Err(SurveyError::NotFound)
#[tokio::test]
async fn reports_malformed_id_as_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SurveyService::new(db).get_by_id("bogus").await;

    assert!(matches!(result, Err(SurveyError::NotFound)));

    Ok(())
}

/// Tests listing surveys through the service.
///
/// Expected: Ok with every stored survey
#[tokio::test]
async fn lists_all_surveys() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_survey(db).await?;
    factory::create_survey(db).await?;

    let surveys = SurveyService::new(db).get_all().await.unwrap();

    assert_eq!(surveys.len(), 2);

    Ok(())
}

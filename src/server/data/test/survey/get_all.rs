use super::*;

/// Tests listing surveys from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_surveys() -> Result<(), DataError> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let surveys = SurveyRepository::new(db).get_all().await?;

    assert!(surveys.is_empty());

    Ok(())
}

/// Tests listing every stored survey.
///
/// Expected: Ok with all surveys
#[tokio::test]
async fn returns_all_surveys() -> Result<(), DataError> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_survey(db).await?;
    let second = factory::create_survey(db).await?;

    let surveys = SurveyRepository::new(db).get_all().await?;

    assert_eq!(surveys.len(), 2);
    assert!(surveys.iter().any(|s| s.id == first.id));
    assert!(surveys.iter().any(|s| s.id == second.id));

    Ok(())
}

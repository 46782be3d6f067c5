use super::*;

fn update_params(survey: &entity::survey::Model) -> UpdateSurveyParams {
    UpdateSurveyParams {
        id: survey.id.clone(),
        title: survey.title.clone(),
        description: survey.description.clone(),
        start_date: survey.start_date,
        end_date: survey.end_date,
        is_published: survey.is_published,
        year: survey.year,
    }
}

/// Tests updating a survey's fields.
///
/// Expected: Ok with new values stored
#[tokio::test]
async fn updates_survey() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let survey = factory::create_survey(db).await?;
    let mut params = update_params(&survey);
    params.title = "Updated".to_string();
    params.is_published = true;

    let updated = SurveyService::new(db).update(params).await.unwrap();

    assert_eq!(updated.title, "Updated");
    assert!(updated.is_published);

    Ok(())
}

/// Tests that sending `false` for the published flag keeps a published survey published.
///
/// Expected: Ok with `is_published` still true
#[tokio::test]
async fn keeps_published_flag_when_update_sends_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let survey = factory::survey::SurveyFactory::new(db)
        .published(true)
        .build()
        .await?;
    let mut params = update_params(&survey);
    params.is_published = false;

    let updated = SurveyService::new(db).update(params).await.unwrap();

    assert!(updated.is_published);
    let stored = entity::prelude::Survey::find_by_id(survey.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_published);

    Ok(())
}

/// Tests that updates re-check the date range.
///
/// Expected: Err(SurveyError::InvalidDateRange) with the stored survey unchanged
#[tokio::test]
async fn rejects_start_after_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let survey = factory::create_survey(db).await?;
    let mut params = update_params(&survey);
    params.title = "Should not stick".to_string();
    params.start_date = survey.end_date + Duration::days(1);

    let result = SurveyService::new(db).update(params).await;

    assert!(matches!(result, Err(SurveyError::InvalidDateRange)));
    let stored = entity::prelude::Survey::find_by_id(survey.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, survey.title);

    Ok(())
}

/// Tests updating a survey that does not exist.
///
/// Expected: Err(SurveyError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_survey() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let survey = factory::survey::SurveyFactory::new(db).build().await?;
    let mut params = update_params(&survey);
    params.id = factory::helpers::new_record_id();

    let result = SurveyService::new(db).update(params).await;

    assert!(matches!(result, Err(SurveyError::NotFound)));

    Ok(())
}

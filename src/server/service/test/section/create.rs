use super::*;

/// Tests creating a section for an existing survey.
///
/// Expected: Ok with section stored against the survey
#[tokio::test]
async fn creates_section_for_existing_survey() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let survey = factory::create_survey(db).await?;

    let section = SectionService::new(db)
        .create(CreateSectionParams {
            title: "Section 1".to_string(),
            description: String::new(),
            survey_id: survey.id.clone(),
        })
        .await
        .unwrap();

    assert_eq!(section.survey_id, survey.id);
    assert_eq!(entity::prelude::Section::find().count(db).await?, 1);

    Ok(())
}

/// Tests that the survey reference is stored in normalized form.
///
/// Expected: Ok with `survey_id` in 32 character hex form
#[tokio::test]
async fn normalizes_survey_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let survey = factory::create_survey(db).await?;
    let hyphenated = uuid::Uuid::parse_str(&survey.id)
        .unwrap()
        .hyphenated()
        .to_string();

    let section = SectionService::new(db)
        .create(CreateSectionParams {
            title: "Section 1".to_string(),
            description: String::new(),
            survey_id: hyphenated,
        })
        .await
        .unwrap();

    assert_eq!(section.survey_id, survey.id);

    Ok(())
}

/// Tests that an unknown survey reference is rejected before storage.
///
/// Expected: Err(SectionError::InvalidSurveyReference) with nothing stored
#[tokio::test]
async fn rejects_unknown_survey_without_storing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SectionService::new(db)
        .create(CreateSectionParams {
            title: "Orphan".to_string(),
            description: String::new(),
            survey_id: factory::helpers::new_record_id(),
        })
        .await;

    assert!(matches!(result, Err(SectionError::InvalidSurveyReference)));
    assert_eq!(entity::prelude::Section::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a malformed survey reference is rejected the same way.
///
/// Expected: Err(SectionError::InvalidSurveyReference)
#[tokio::test]
async fn rejects_malformed_survey_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SectionService::new(db)
        .create(CreateSectionParams {
            title: "Orphan".to_string(),
            description: String::new(),
            survey_id: String::new(),
        })
        .await;

    assert!(matches!(result, Err(SectionError::InvalidSurveyReference)));
    assert_eq!(result.unwrap_err().to_string(), "invalid SurveyID");

    Ok(())
}

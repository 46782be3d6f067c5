use super::*;

/// Tests creating a survey.
///
/// Verifies that the repository assigns a 32 character hex identifier and stores
/// every field as given.
///
/// Expected: Ok with survey created
#[tokio::test]
async fn creates_survey_with_generated_id() -> Result<(), DataError> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc::now();
    let end = start + Duration::days(7);

    let repo = SurveyRepository::new(db);
    let survey = repo
        .create(CreateSurveyParams {
            title: "Tracer Study".to_string(),
            description: "Alumni survey".to_string(),
            start_date: start,
            end_date: end,
            is_published: true,
            year: 2024,
        })
        .await?;

    assert_eq!(survey.id.len(), 32);
    assert!(survey.id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(survey.title, "Tracer Study");
    assert_eq!(survey.description, "Alumni survey");
    assert!(survey.is_published);
    assert_eq!(survey.year, 2024);

    let stored = entity::prelude::Survey::find_by_id(survey.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, "Tracer Study");
    assert_eq!(stored.start_date.timestamp(), start.timestamp());
    assert_eq!(stored.end_date.timestamp(), end.timestamp());

    Ok(())
}

/// Tests that two creates never share an identifier.
///
/// Expected: two distinct records
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DataError> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SurveyRepository::new(db);
    let params = CreateSurveyParams {
        title: "Same".to_string(),
        description: String::new(),
        start_date: Utc::now(),
        end_date: Utc::now(),
        is_published: false,
        year: 2024,
    };
    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(entity::prelude::Survey::find().count(db).await?, 2);

    Ok(())
}

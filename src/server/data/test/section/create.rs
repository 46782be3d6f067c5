use super::*;

/// Tests creating a section for an existing survey.
///
/// Expected: Ok with section created
#[tokio::test]
async fn creates_section() -> Result<(), DataError> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let survey = factory::create_survey(db).await?;

    let section = SectionRepository::new(db)
        .create(CreateSectionParams {
            title: "Employment".to_string(),
            description: "Current job".to_string(),
            survey_id: survey.id.clone(),
        })
        .await?;

    assert_eq!(section.id.len(), 32);
    assert_eq!(section.title, "Employment");
    assert_eq!(section.survey_id, survey.id);

    let stored = entity::prelude::Section::find_by_id(section.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.description, "Current job");

    Ok(())
}

use super::*;

/// Tests listing sections across surveys.
///
/// Expected: Ok with every section
#[tokio::test]
async fn returns_all_sections() -> Result<(), DataError> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_survey, first) = factory::helpers::create_section_with_survey(db).await?;
    let (_other, second) = factory::helpers::create_section_with_survey(db).await?;

    let sections = SectionRepository::new(db).get_all().await?;

    assert_eq!(sections.len(), 2);
    assert!(sections.iter().any(|s| s.id == first.id));
    assert!(sections.iter().any(|s| s.id == second.id));

    Ok(())
}

/// Tests listing sections from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_sections() -> Result<(), DataError> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(SectionRepository::new(db).get_all().await?.is_empty());

    Ok(())
}

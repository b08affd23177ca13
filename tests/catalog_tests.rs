mod common;

use common::fixtures::{AUDIENCES_CSV, PATTERNS_CSV, investor_catalog};
use common::{TestResult, fixed_time, write_catalogs};
use deckplan::{
    AudienceType, PipelineBuilder, PipelineError, PresentationRequest, PresentationType, RuleError,
    RuleTable, Tone,
};
use deckplan_rules::table::{AUDIENCES_FILE, PATTERNS_FILE};

#[test]
fn test_csv_directory_loads_quoted_and_lenient_rows() -> TestResult {
    let dir = tempfile::tempdir()?;
    write_catalogs(dir.path(), &[(PATTERNS_FILE, PATTERNS_CSV), (AUDIENCES_FILE, AUDIENCES_CSV)])?;

    let table = RuleTable::load_dir(dir.path())?;
    assert_eq!(table.patterns.len(), 2);
    assert!(table.styles.is_empty());

    let workshop = &table.patterns[0];
    assert_eq!(workshop.name, "Workshop Flow");
    assert_eq!(workshop.tone, "Educational, Supportive");
    assert_eq!(workshop.common_pitfalls, "Too much text; \"Death by bullet\"");
    assert_eq!(workshop.slide_count_max, Some(40));

    let broken = &table.patterns[1];
    assert_eq!(broken.duration_min, None);
    assert_eq!(broken.duration_max, None);
    assert_eq!(broken.slide_count_min, None);
    assert_eq!(broken.slide_count_max, Some(20));

    assert_eq!(table.audiences[0].characteristics, "Eager, new to the topic");
    Ok(())
}

#[test]
fn test_pipeline_over_csv_catalogs() -> TestResult {
    let dir = tempfile::tempdir()?;
    write_catalogs(dir.path(), &[(PATTERNS_FILE, PATTERNS_CSV), (AUDIENCES_FILE, AUDIENCES_CSV)])?;
    let orchestrator = PipelineBuilder::new()
        .with_rules_dir(dir.path())
        .with_generated_at(fixed_time())
        .build()?;

    let request = PresentationRequest::builder("Intro to Rust")
        .presentation_type(PresentationType::TrainingWorkshop)
        .audience(AudienceType::StudentsTrainees)
        .duration_minutes(45)
        .tone(Tone::Educational)
        .build();
    let reasoning = orchestrator.engine().analyze(&request);
    assert_eq!(reasoning.pattern.name, "Workshop Flow");
    assert_eq!(reasoning.audience_adaptation.audience_name, "Students Trainees");
    assert_eq!(reasoning.slide_count_estimate, 29);

    let (slides, _) = orchestrator.generate(&request);
    assert_eq!(slides.len(), 29);
    Ok(())
}

#[test]
fn test_missing_directory_is_an_empty_table() -> TestResult {
    let dir = tempfile::tempdir()?;
    let table = RuleTable::load_dir(dir.path().join("not-there"))?;
    assert!(table.is_empty());
    Ok(())
}

#[test]
fn test_unterminated_quote_is_reported_with_location() -> TestResult {
    let dir = tempfile::tempdir()?;
    write_catalogs(dir.path(), &[(PATTERNS_FILE, "Pattern_Name,Tone\n\"Open,Professional\n")])?;

    let result = PipelineBuilder::new().with_rules_dir(dir.path()).build();
    match result {
        Err(PipelineError::Rules(RuleError::Csv { file, .. })) => assert_eq!(file, PATTERNS_FILE),
        other => panic!("expected a CSV error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_json_snapshot_round_trip_and_file_loading() -> TestResult {
    let table = RuleTable::from_json_str(&investor_catalog().to_string())?;
    let snapshot = table.to_json_string()?;
    assert_eq!(RuleTable::from_json_str(&snapshot)?, table);

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("rules.json");
    std::fs::write(&path, &snapshot)?;
    let orchestrator = PipelineBuilder::new().with_rules_file(&path)?.build()?;
    assert_eq!(orchestrator.engine().rules().patterns[0].name, "Seed Pitch");
    Ok(())
}

#[test]
fn test_malformed_snapshot_is_an_error() {
    let result = RuleTable::from_json_str("{\"patterns\": 3}");
    assert!(matches!(result, Err(RuleError::Json(_))));
}

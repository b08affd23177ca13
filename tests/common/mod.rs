pub mod fixtures;

use chrono::{DateTime, TimeZone, Utc};
use deckplan::{PipelineBuilder, PresentationOrchestrator, RuleTable};
use serde_json::Value;
use std::fs;
use std::path::Path;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Timestamp pinned for every deterministic run.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 4, 9, 30, 0).unwrap()
}

/// Orchestrator over the built-in defaults with a pinned clock.
pub fn default_orchestrator() -> PresentationOrchestrator {
    PipelineBuilder::new()
        .with_generated_at(fixed_time())
        .build()
        .expect("default pipeline builds")
}

/// Orchestrator over a JSON catalog snapshot with a pinned clock.
pub fn orchestrator_with(catalog: &Value) -> PresentationOrchestrator {
    let rules = RuleTable::from_json_str(&catalog.to_string()).expect("catalog fixture parses");
    PipelineBuilder::new()
        .with_rules(rules)
        .with_generated_at(fixed_time())
        .build()
        .expect("pipeline builds")
}

/// Writes `(file name, contents)` pairs into `dir`.
pub fn write_catalogs(dir: &Path, files: &[(&str, &str)]) -> std::io::Result<()> {
    for (name, contents) in files {
        fs::write(dir.join(name), contents)?;
    }
    Ok(())
}

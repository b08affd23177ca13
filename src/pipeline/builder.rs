// src/pipeline/builder.rs
use super::config::GenerationOptions;
use super::orchestrator::PresentationOrchestrator;
use crate::error::PipelineError;
use crate::executor::ExecutorImpl;
use chrono::{DateTime, Utc};
use deckplan_rules::RuleTable;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A builder for creating a `PresentationOrchestrator`.
#[derive(Default)]
pub struct PipelineBuilder {
    rules: Option<RuleTable>,
    rules_dir: Option<PathBuf>,
    options: GenerationOptions,
    executor: ExecutorImpl,
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with an empty rule table and default options.
    pub fn new() -> Self { Default::default() }

    /// Uses an already-built rule table.
    pub fn with_rules(mut self, rules: RuleTable) -> Self { self.rules = Some(rules); self }

    /// Loads the catalogs from a directory of CSV files when the pipeline is built.
    /// Missing files become empty catalogs.
    pub fn with_rules_dir<P: AsRef<Path>>(mut self, path: P) -> Self { self.rules_dir = Some(path.as_ref().to_path_buf()); self }

    /// Loads the catalogs from a JSON snapshot file right away.
    pub fn with_rules_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        self.rules = Some(RuleTable::from_json_str(&text)?);
        Ok(self)
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self { self.options.author = Some(author.into()); self }

    pub fn with_company(mut self, company: impl Into<String>) -> Self { self.options.company = Some(company.into()); self }

    /// Pins the timestamp used for slide times and the metadata date.
    pub fn with_generated_at(mut self, at: DateTime<Utc>) -> Self { self.options.generated_at = Some(at); self }

    /// Selects how `generate_batch` runs its requests.
    pub fn with_executor(mut self, executor: ExecutorImpl) -> Self { self.executor = executor; self }

    /// Consumes the builder and creates the `PresentationOrchestrator`.
    pub fn build(self) -> Result<PresentationOrchestrator, PipelineError> {
        let rules = match (self.rules, self.rules_dir) {
            (Some(_), Some(dir)) => {
                return Err(PipelineError::Config(format!(
                    "Both a rule table and a rules directory ('{}') were configured. Use only one.",
                    dir.display()
                )));
            }
            (Some(rules), None) => {
                log::info!("Using the provided rule table.");
                rules
            }
            (None, Some(dir)) => {
                log::info!("Loading rule catalogs from '{}'.", dir.display());
                RuleTable::load_dir(&dir)?
            }
            (None, None) => {
                log::info!("No rule catalogs configured. Using built-in defaults.");
                RuleTable::empty()
            }
        };

        Ok(PresentationOrchestrator::new(Arc::new(rules), self.options, self.executor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_defaults() {
        let orchestrator = PipelineBuilder::new().with_author("Ada").build().unwrap();
        assert!(orchestrator.engine().rules().is_empty());
        assert_eq!(orchestrator.options().author.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_conflicting_rule_sources_are_rejected() {
        let result = PipelineBuilder::new()
            .with_rules(RuleTable::empty())
            .with_rules_dir("catalogs")
            .build();
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }

    #[test]
    fn test_rules_dir_that_is_a_file_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = PipelineBuilder::new().with_rules_dir(file.path()).build();
        assert!(matches!(result, Err(PipelineError::Rules(_))));
    }
}

// src/error.rs
use deckplan_rules::RuleError;
use thiserror::Error;

/// Errors from the edges of the pipeline. Planning itself never fails.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Rule catalogs could not be loaded: {0}")]
    Rules(#[from] RuleError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pipeline is misconfigured: {0}")]
    Config(String),
}

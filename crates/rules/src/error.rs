use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading catalogs from disk or from a JSON snapshot.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in '{file}' at line {line}: {message}")]
    Csv {
        file: String,
        line: usize,
        message: String,
    },

    #[error("Invalid rule table JSON: {0}")]
    Json(#[from] serde_json::Error),
}

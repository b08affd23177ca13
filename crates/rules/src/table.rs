use crate::csv::{CsvConfig, parse_records};
use crate::error::RuleError;
use crate::records::{
    AnimationRecord, AudienceGuideline, ColorRecord, PatternRecord, SpeechNote, StyleRecord,
    TypographyRecord,
};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::Path;

pub const PATTERNS_FILE: &str = "presentation-patterns.csv";
pub const STYLES_FILE: &str = "styles_presentation.csv";
pub const COLORS_FILE: &str = "colors_presentation.csv";
pub const TYPOGRAPHY_FILE: &str = "typography_presentation.csv";
pub const ANIMATIONS_FILE: &str = "slide-animations.csv";
pub const AUDIENCES_FILE: &str = "audience-guidelines.csv";
pub const SPEECH_NOTES_FILE: &str = "speech-notes.csv";

/// Every catalog the planner reads, in file row order.
///
/// A table is built once and then only read, so it can be shared across
/// threads behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleTable {
    pub patterns: Vec<PatternRecord>,
    pub styles: Vec<StyleRecord>,
    pub colors: Vec<ColorRecord>,
    pub typography: Vec<TypographyRecord>,
    pub animations: Vec<AnimationRecord>,
    pub audiences: Vec<AudienceGuideline>,
    pub speech_notes: Vec<SpeechNote>,
}

impl RuleTable {
    /// A table with no rows; every resolver falls back to its built-in default.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads every catalog file found in `dir`.
    ///
    /// A missing directory or a missing file yields empty catalogs. Anything else
    /// that goes wrong while reading or parsing is an error.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self, RuleError> {
        let dir = dir.as_ref();
        if !dir.exists() {
            warn!(
                "Catalog directory '{}' does not exist; using built-in defaults.",
                dir.display()
            );
            return Ok(Self::empty());
        }
        if !dir.is_dir() {
            return Err(RuleError::Io {
                path: dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
            });
        }

        let table = Self {
            patterns: load_catalog(dir, PATTERNS_FILE)?,
            styles: load_catalog(dir, STYLES_FILE)?,
            colors: load_catalog(dir, COLORS_FILE)?,
            typography: load_catalog(dir, TYPOGRAPHY_FILE)?,
            animations: load_catalog(dir, ANIMATIONS_FILE)?,
            audiences: load_catalog(dir, AUDIENCES_FILE)?,
            speech_notes: load_catalog(dir, SPEECH_NOTES_FILE)?,
        };
        info!(
            "Loaded catalogs from '{}': {} patterns, {} styles, {} palettes, {} font pairings.",
            dir.display(),
            table.patterns.len(),
            table.styles.len(),
            table.colors.len(),
            table.typography.len()
        );
        Ok(table)
    }

    pub fn from_json_str(json: &str) -> Result<Self, RuleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, RuleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
            && self.styles.is_empty()
            && self.colors.is_empty()
            && self.typography.is_empty()
            && self.animations.is_empty()
            && self.audiences.is_empty()
            && self.speech_notes.is_empty()
    }
}

fn load_catalog<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>, RuleError> {
    let path = dir.join(file);
    if !path.exists() {
        debug!("Catalog '{}' not found; treating it as empty.", path.display());
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(&path).map_err(|source| RuleError::Io {
        path: path.clone(),
        source,
    })?;
    parse_catalog(file, &text)
}

/// Parses CSV text with a header row into typed rows.
///
/// Rows with more cells than the header are skipped with a warning. Rows with
/// fewer cells leave the trailing columns at their defaults.
pub fn parse_catalog<T: DeserializeOwned>(file: &str, text: &str) -> Result<Vec<T>, RuleError> {
    let mut records = parse_records(text, &CsvConfig::default())
        .map_err(|e| RuleError::Csv {
            file: file.to_string(),
            line: e.line,
            message: e.message,
        })?
        .into_iter();

    let Some(header) = records.next() else {
        return Ok(Vec::new());
    };
    let columns: Vec<String> = header
        .fields
        .iter()
        .map(|name| name.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in records {
        if record.fields.len() > columns.len() {
            warn!(
                "Skipping row at {}:{}: {} cells for {} columns.",
                file,
                record.line,
                record.fields.len(),
                columns.len()
            );
            continue;
        }
        let object: Map<String, Value> = columns
            .iter()
            .cloned()
            .zip(record.fields.into_iter().map(Value::String))
            .collect();
        match serde_json::from_value::<T>(Value::Object(object)) {
            Ok(row) => rows.push(row),
            Err(e) => warn!("Skipping row at {}:{}: {}", file, record.line, e),
        }
    }
    Ok(rows)
}

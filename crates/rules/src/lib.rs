//! Read-only presentation catalogs.
//!
//! A [`RuleTable`] holds every catalog the planner consults. Tables are loaded
//! from a directory of CSV files, from a JSON snapshot, or assembled in code.

pub mod csv;
pub mod error;
pub mod records;
pub mod table;

pub use error::RuleError;
pub use records::{
    AnimationRecord, AudienceGuideline, ColorRecord, PatternRecord, SpeechNote, StyleRecord,
    TypographyRecord,
};
pub use table::{RuleTable, parse_catalog};

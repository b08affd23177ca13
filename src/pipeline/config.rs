use chrono::{DateTime, Utc};

/// Deck-level settings that do not belong to a single request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationOptions {
    pub author: Option<String>,
    pub company: Option<String>,
    /// Pins `createdAt`, `modifiedAt` and the metadata date. When unset, the clock
    /// is read once per deck before planning starts.
    pub generated_at: Option<DateTime<Utc>>,
}

impl GenerationOptions {
    pub(crate) fn timestamp(&self) -> DateTime<Utc> {
        self.generated_at.unwrap_or_else(Utc::now)
    }
}

/// `strftime` pattern for the metadata date, e.g. `January 15, 2025`.
pub const METADATA_DATE_FORMAT: &str = "%B %d, %Y";
pub const METADATA_VERSION: &str = "1.0";

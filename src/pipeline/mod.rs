//! Presentation pipeline orchestration.
//!
//! - [`PipelineBuilder`]: fluent builder that loads catalogs and options
//! - [`PresentationOrchestrator`]: runs reasoning, planning and slide generation
//! - [`PresentationDocument`]: the JSON document a run produces
//!
//! # Example
//!
//! ```ignore
//! use deckplan::{PipelineBuilder, PresentationRequest};
//!
//! let orchestrator = PipelineBuilder::new()
//!     .with_rules_dir("data")
//!     .with_author("Ada")
//!     .build()?;
//!
//! let document = orchestrator.generate_document(&PresentationRequest::builder("Q3 Review").build());
//! document.write_to_file("deck.json")?;
//! ```

mod builder;
pub mod config;
pub mod document;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use config::GenerationOptions;
pub use document::{PresentationDocument, ReasoningSummary};
pub use orchestrator::{PresentationOrchestrator, detect_presentation_type};

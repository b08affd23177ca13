//! Plans slide decks from sparse presentation requests.
//!
//! A [`PresentationRequest`] is matched against rule catalogs to pick a pattern,
//! style and structure, then expanded into positioned, styled [`Slide`]s that
//! exporters consume as JSON.

pub mod error;
pub mod executor;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{
    GenerationOptions, PipelineBuilder, PresentationDocument, PresentationOrchestrator,
    ReasoningSummary, detect_presentation_type,
};

pub use deckplan_reasoning::{
    AudienceType, Choice, PresentationRequest, PresentationRequestBuilder, PresentationType,
    Reasoning, ReasoningEngine, SlidePlan, Tone,
};
pub use deckplan_rules::{RuleError, RuleTable};
pub use deckplan_slides::{ContentType, PresentationMetadata, Slide, SlideContent, SlideType};

//! Presentation reasoning.
//!
//! Turns a [`PresentationRequest`] and a [`deckplan_rules::RuleTable`] into a
//! [`Reasoning`] bundle and an ordered list of [`SlidePlan`]s. Every step is a
//! pure function; missing catalog rows resolve to built-in defaults.

pub mod advice;
pub mod animation;
pub mod audience;
pub mod engine;
pub mod estimate;
pub mod pattern;
pub mod plan;
pub mod reasoning;
pub mod request;
pub mod structure;
pub mod style;

pub use animation::{AnimationHint, AnimationIntensity, TransitionStyle};
pub use engine::{Choice, ReasoningEngine};
pub use plan::{PlanKind, SlidePlan};
pub use reasoning::Reasoning;
pub use request::{
    AudienceType, PresentationRequest, PresentationRequestBuilder, PresentationType, Tone,
    UnknownVariant,
};
pub use structure::{Section, Structure};
pub use style::ColorScheme;

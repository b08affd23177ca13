//! Slide model and the generator that fills it from slide plans.

pub mod generator;
pub mod layout;
pub mod model;

pub use generator::SlideContentGenerator;
pub use layout::slide_type_for_layout;
pub use model::{ContentType, PresentationMetadata, Slide, SlideContent, SlideType};

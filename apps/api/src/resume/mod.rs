// Resume section generation.
// All generator calls go through llm_client::Generator — no backend calls here.

pub mod handlers;
pub mod prompts;
pub mod sections;
pub mod service;

pub use sections::SectionKind;
pub use service::{GenerationRequest, SectionError, SectionService};

// Career Gateway: stateless pass-through from an action-tagged envelope to the
// generation model, bounded by a deadline and validated against an output schema.
// All model calls go through llm_client — no direct Gemini calls here.

pub mod envelope;
pub mod handlers;
pub mod prompts;
pub mod schema;
pub mod service;

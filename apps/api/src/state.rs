use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GenerationModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every request is independent.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The generation capability. `GeminiClient` in production, stubs in tests.
    pub model: Arc<dyn GenerationModel>,
}

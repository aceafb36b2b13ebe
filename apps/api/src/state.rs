use std::sync::Arc;

use crate::llm_client::CompletionBackend;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Pluggable completion backend. Production: `GroqClient`; tests swap in
    /// a scripted in-memory backend.
    pub llm: Arc<dyn CompletionBackend>,
}

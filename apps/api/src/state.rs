use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable for the process lifetime; cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Text generator behind the ask endpoint. `LlmClient` in production.
    pub generator: Arc<dyn TextGenerator>,
    /// Wall-clock bound for a single generator call.
    pub llm_timeout: Duration,
    /// Root of the static front-end (index.html, CSS, JS).
    pub static_dir: PathBuf,
}

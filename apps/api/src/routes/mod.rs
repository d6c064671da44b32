pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::ask::handlers;
use crate::state::AppState;

/// API routes plus the static front-end. Any path that is not an API route or
/// an existing file under `static_dir` falls back to `index.html`.
pub fn build_router(state: AppState) -> Router {
    let index = state.static_dir.join("index.html");
    let static_files = ServeDir::new(&state.static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/ask", post(handlers::handle_ask))
        .route("/api/search", post(handlers::handle_ask))
        .fallback_service(static_files)
        .with_state(state)
}

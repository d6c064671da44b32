//! Axum route handlers for the Ask API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::ask::prompts::build_prompt;
use crate::ask::timed::generate_with_timeout;
use crate::ask::validation::validate_query;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Missing fields deserialize as empty strings so they fail validation (400),
/// not extraction (422).
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub profile: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ask (also mounted at /api/search)
///
/// Validates the pair, builds the prompt and returns the model's Markdown answer.
/// Nothing is cached: every request reaches the generator.
#[instrument(skip_all)]
pub async fn handle_ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, AppError> {
    let Json(request) = payload
        .map_err(|e| AppError::Validation(format!("invalid request body: {}", e.body_text())))?;

    let validated = validate_query(&request.query, &request.profile)?;
    info!(
        profile = %validated.profile,
        query_chars = validated.query.chars().count(),
        "ask validated"
    );

    let prompt = build_prompt(&validated);
    let answer = generate_with_timeout(state.generator.clone(), prompt, state.llm_timeout).await?;

    info!(answer_chars = answer.chars().count(), "ask answered");
    Ok(Json(AskResponse { answer }))
}

/// GET /api/health
/// Static liveness answer. Never contacts the Gemini API.
pub async fn health_handler() -> &'static str {
    "ok"
}

//! Timed external call: races the LLM call against a wall-clock bound.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::anyhow;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::llm_client::{Prompt, TextGenerator};

/// Aborts the wrapped task when dropped, so the call never outlives its request.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Runs `generator` on `prompt` in its own task and waits at most `bound`.
///
/// Whichever settles first wins. If the bound elapses, or the caller drops this
/// future first, the call task is aborted and its result is dropped.
/// Blank text is a failure.
pub async fn generate_with_timeout(
    generator: Arc<dyn TextGenerator>,
    prompt: Prompt,
    bound: Duration,
) -> Result<String, AppError> {
    let started = Instant::now();
    let mut call = AbortOnDrop(tokio::spawn(async move { generator.generate(&prompt).await }));

    let joined = match tokio::time::timeout(bound, &mut call.0).await {
        Ok(joined) => joined,
        Err(_) => {
            let bound_ms = u64::try_from(bound.as_millis()).unwrap_or(u64::MAX);
            warn!("LLM call exceeded {bound_ms} ms, abandoning it");
            return Err(AppError::Timeout { bound_ms });
        }
    };

    let text = joined
        .map_err(|e| AppError::Internal(anyhow!("LLM call task failed: {e}")))?
        .map_err(|e| {
            warn!("LLM call failed: {e}");
            AppError::Upstream(e.to_string())
        })?;

    debug!("LLM call settled in {:?}", started.elapsed());

    if text.trim().is_empty() {
        return Err(AppError::EmptyResponse);
    }

    Ok(text)
}

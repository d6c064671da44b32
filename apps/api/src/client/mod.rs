//! Client controller: validates and submits a query, then turns the outcome
//! into the view the results section shows.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::ask::handlers::{AskRequest, AskResponse};
use crate::ask::validation::{validate_query, ValidationError};
use crate::render::{escape_text, render_markdown};

/// Labels offered by the profile selector.
pub const PROFILES: &[&str] = &[
    "Étudiant",
    "Ingénieur",
    "Entrepreneur",
    "Salarié",
    "Chercheur d'emploi",
    "Retraité",
];

pub const VALIDATION_MESSAGE: &str = "Veuillez entrer une question et sélectionner un profil.";
pub const LOADING_HEADING: &str = "Recherche en cours…";
pub const ERROR_HEADING: &str = "Erreur.";
pub const ERROR_MESSAGE: &str = "Impossible d'obtenir une réponse.";

/// Queries longer than this are shortened in the results heading.
const HEADING_MAX_CHARS: usize = 50;
const HEADING_KEEP_CHARS: usize = 47;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}{}", format_detail(.detail))]
    Status { status: u16, detail: Option<String> },
}

fn format_detail(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// State of the results section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Loading { heading: String },
    Answer { heading: String, html: String },
    Failed { heading: String, html: String },
}

impl ResultView {
    pub fn loading() -> Self {
        ResultView::Loading {
            heading: LOADING_HEADING.to_string(),
        }
    }

    pub fn answer(query: &str, markdown: &str) -> Self {
        ResultView::Answer {
            heading: format!("{}.", query_heading(query)),
            html: render_markdown(markdown),
        }
    }

    /// Inline error panel: fixed message plus the escaped detail. No retry.
    pub fn failed(detail: &str) -> Self {
        ResultView::Failed {
            heading: ERROR_HEADING.to_string(),
            html: format!(
                "<p style=\"color: red;\"><strong>{ERROR_MESSAGE}</strong></p>\n<p>Détails : {}</p>\n",
                escape_text(detail)
            ),
        }
    }

    pub fn heading(&self) -> &str {
        match self {
            ResultView::Loading { heading }
            | ResultView::Answer { heading, .. }
            | ResultView::Failed { heading, .. } => heading,
        }
    }

    pub fn html(&self) -> &str {
        match self {
            ResultView::Loading { .. } => "",
            ResultView::Answer { html, .. } | ResultView::Failed { html, .. } => html,
        }
    }
}

/// Shortens long queries to 47 characters followed by an ellipsis.
pub fn query_heading(query: &str) -> String {
    if query.chars().count() > HEADING_MAX_CHARS {
        let kept: String = query.chars().take(HEADING_KEEP_CHARS).collect();
        format!("{kept}…")
    } else {
        query.to_string()
    }
}

/// HTTP client for the ask endpoint.
#[derive(Clone)]
pub struct AskClient {
    http: Client,
    endpoint: String,
}

impl AskClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            http: Client::builder().build()?,
            endpoint: format!("{}/api/ask", base_url.trim_end_matches('/')),
        })
    }

    /// Validates, submits and returns the raw Markdown answer.
    /// Invalid input never reaches the network.
    pub async fn ask(&self, query: &str, profile: &str) -> Result<String, ClientError> {
        let validated = validate_query(query, profile)?;

        let response = self
            .http
            .post(&self.endpoint)
            .json(&AskRequest {
                query: validated.query,
                profile: validated.profile,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .map(|body| body.error);
            debug!("ask endpoint returned {status}");
            return Err(ClientError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let body: AskResponse = response.json().await?;
        Ok(body.answer)
    }

    /// Runs one submission and returns the view to display.
    ///
    /// Validation failures are returned as `Err` so the caller can show
    /// `VALIDATION_MESSAGE` without leaving the current view.
    pub async fn submit(&self, query: &str, profile: &str) -> Result<ResultView, ValidationError> {
        let query = query.trim();
        validate_query(query, profile)?;

        Ok(match self.ask(query, profile).await {
            Ok(answer) => ResultView::answer(query, &answer),
            Err(ClientError::Validation(e)) => return Err(e),
            Err(e) => ResultView::failed(&e.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_query_heading_unchanged() {
        assert_eq!(query_heading("Quel visa pour un ingénieur ?"), "Quel visa pour un ingénieur ?");
    }

    #[test]
    fn test_fifty_chars_not_truncated() {
        let query = "é".repeat(50);
        assert_eq!(query_heading(&query), query);
    }

    #[test]
    fn test_long_query_heading_truncated_by_chars() {
        let query = "é".repeat(51);
        let heading = query_heading(&query);
        assert_eq!(heading.chars().count(), 48);
        assert!(heading.ends_with('…'));
        assert!(heading.starts_with(&"é".repeat(47)));
    }

    #[test]
    fn test_answer_view_renders_markdown() {
        let view = ResultView::answer("Quel visa ?", "**Réponse**");
        assert_eq!(view.heading(), "Quel visa ?.");
        assert_eq!(view.html(), "<p><strong>Réponse</strong></p>\n");
    }

    #[test]
    fn test_failed_view_escapes_detail() {
        let view = ResultView::failed("<img src=x onerror=alert(1)>");
        assert_eq!(view.heading(), "Erreur.");
        assert!(view.html().contains("Impossible d'obtenir une réponse."));
        assert!(view.html().contains("Détails : &lt;img"));
        assert!(!view.html().contains("<img"));
    }

    #[test]
    fn test_loading_view() {
        let view = ResultView::loading();
        assert_eq!(view.heading(), "Recherche en cours…");
        assert_eq!(view.html(), "");
    }

    #[test]
    fn test_status_error_display() {
        let err = ClientError::Status {
            status: 502,
            detail: Some("AI service did not answer within 15000 ms".to_string()),
        };
        assert_eq!(err.to_string(), "HTTP 502: AI service did not answer within 15000 ms");

        let bare = ClientError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(bare.to_string(), "HTTP 500");
    }

    #[tokio::test]
    async fn test_invalid_input_never_hits_network() {
        // Port 9 (discard) is never contacted: validation fails first.
        let client = AskClient::new("http://127.0.0.1:9").unwrap();
        let err = client.ask("   ", "Ingénieur").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(ValidationError::EmptyQuery)));

        let submitted = client.submit("Quel visa ?", "").await;
        assert_eq!(submitted, Err(ValidationError::EmptyProfile));
    }

    #[test]
    fn test_profiles_are_non_empty_labels() {
        assert!(PROFILES.contains(&"Ingénieur"));
        assert!(PROFILES.iter().all(|p| !p.trim().is_empty()));
    }
}

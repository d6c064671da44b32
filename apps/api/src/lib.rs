//! Synergie: a small proxy in front of Gemini that answers visa and mobility
//! questions for a chosen profile, plus the client controller that renders them.

pub mod ask;
pub mod client;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod render;
pub mod routes;
pub mod state;

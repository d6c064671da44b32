use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LLM_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Credential variables, in lookup order.
const API_KEY_VARS: &[&str] = &["API_KEY", "GEMINI_API_KEY"];

/// Application configuration loaded from environment variables.
/// Fails at startup if the Gemini credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub static_dir: PathBuf,
    pub llm_timeout: Duration,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = API_KEY_VARS
            .iter()
            .find_map(|key| lookup(*key))
            .with_context(|| {
                format!(
                    "Required environment variable '{}' is not set",
                    API_KEY_VARS.join("' or '")
                )
            })?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let llm_timeout_ms = match lookup("LLM_TIMEOUT_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("LLM_TIMEOUT_MS must be a number of milliseconds")?,
            None => DEFAULT_LLM_TIMEOUT_MS,
        };
        if llm_timeout_ms == 0 {
            bail!("LLM_TIMEOUT_MS must be greater than zero");
        }

        Ok(Config {
            api_key,
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            llm_timeout: Duration::from_millis(llm_timeout_ms),
            gemini_model: lookup("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: lookup("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_only_api_key() {
        let config = Config::from_lookup(lookup_from(&[("API_KEY", "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.llm_timeout, Duration::from_millis(15_000));
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "9000")])).unwrap_err();
        assert!(err.to_string().contains("API_KEY"));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        assert!(Config::from_lookup(lookup_from(&[("API_KEY", "   ")])).is_err());
    }

    #[test]
    fn test_gemini_api_key_fallback() {
        let config = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "alt")])).unwrap();
        assert_eq!(config.api_key, "alt");
    }

    #[test]
    fn test_primary_api_key_wins_over_fallback() {
        let config = Config::from_lookup(lookup_from(&[
            ("API_KEY", "primary"),
            ("GEMINI_API_KEY", "alt"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "primary");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("API_KEY", "k"),
            ("PORT", "3000"),
            ("LLM_TIMEOUT_MS", "2500"),
            ("STATIC_DIR", "/srv/www"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
        ]))
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.llm_timeout, Duration::from_millis(2500));
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
    }

    #[test]
    fn test_zero_llm_timeout_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("API_KEY", "k"), ("LLM_TIMEOUT_MS", "0")]))
            .unwrap_err();
        assert!(err.to_string().contains("LLM_TIMEOUT_MS"));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err =
            Config::from_lookup(lookup_from(&[("API_KEY", "k"), ("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}

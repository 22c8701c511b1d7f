use anyhow::{Context, Result};

pub const DEFAULT_EMBEDDING_MODEL: &str = "models/embedding-001";
pub const DEFAULT_TASK_TYPE: &str = "RETRIEVAL_QUERY";
pub const DEFAULT_EMBEDDING_API_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Application configuration loaded from environment variables.
/// A missing API key does not fail startup; ranking reports it per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub embedding: EmbeddingConfig,
    pub port: u16,
    pub rust_log: String,
}

/// Everything the embedding provider needs, handed to it at construction.
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub task_type: String,
    pub api_url: String,
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            task_type: DEFAULT_TASK_TYPE.to_string(),
            api_url: DEFAULT_EMBEDDING_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let embedding = EmbeddingConfig {
            api_key: optional_env("GOOGLE_API_KEY"),
            model: optional_env("EMBEDDING_MODEL")
                .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
            task_type: optional_env("EMBEDDING_TASK_TYPE")
                .unwrap_or_else(|| DEFAULT_TASK_TYPE.to_string()),
            api_url: optional_env("EMBEDDING_API_URL")
                .unwrap_or_else(|| DEFAULT_EMBEDDING_API_URL.to_string()),
            timeout_secs: match optional_env("EMBEDDING_TIMEOUT_SECS") {
                Some(raw) => raw
                    .parse::<u64>()
                    .context("EMBEDDING_TIMEOUT_SECS must be a whole number of seconds")?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };

        Ok(Config {
            embedding,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating unset and blank values the same.
fn optional_env(key: &str) -> Option<String> {
    non_blank(std::env::var(key).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_drops_whitespace_values() {
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_non_blank_trims_value() {
        assert_eq!(non_blank(Some(" key-123\n".to_string())), Some("key-123".to_string()));
    }

    #[test]
    fn test_default_embedding_config_has_no_key() {
        let config = EmbeddingConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "models/embedding-001");
        assert_eq!(config.task_type, "RETRIEVAL_QUERY");
        assert_eq!(config.timeout_secs, 120);
    }
}

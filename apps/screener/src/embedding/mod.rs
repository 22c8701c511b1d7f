//! Embedding provider boundary.
//!
//! The ranker never talks to an embedding API directly: it goes through
//! `EmbeddingProvider`, carried as `Arc<dyn EmbeddingProvider>`. Production
//! uses `GeminiEmbedder`; tests plug in deterministic stubs.

use async_trait::async_trait;
use thiserror::Error;

pub mod gemini;

pub use gemini::GeminiEmbedder;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding API key is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("provider returned {actual} embeddings for {expected} texts")]
    CountMismatch { expected: usize, actual: usize },

    #[error("embedding {position} has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        position: usize,
        expected: usize,
        actual: usize,
    },

    #[error("provider returned an empty embedding")]
    EmptyVector,

    #[error("embedding {position} contains a non-finite value")]
    NonFinite { position: usize },
}

/// A function from an ordered batch of texts to one vector per text, same order.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embeds every text in a single request. The output order must match the input order.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Fails when the provider cannot be used at all (e.g. no credential).
    fn ensure_ready(&self) -> Result<(), EmbeddingError> {
        Ok(())
    }

    fn model_name(&self) -> &str;
}

/// Checks a provider response against the batch that produced it.
///
/// Every vector must be non-empty, finite, and share the first vector's dimension.
/// Returns the common dimension.
pub fn validate_embeddings(
    embeddings: &[Vec<f32>],
    expected: usize,
) -> Result<usize, EmbeddingError> {
    if embeddings.len() != expected {
        return Err(EmbeddingError::CountMismatch {
            expected,
            actual: embeddings.len(),
        });
    }

    let Some(first) = embeddings.first() else {
        return Ok(0);
    };
    let dim = first.len();
    if dim == 0 {
        return Err(EmbeddingError::EmptyVector);
    }

    for (position, vector) in embeddings.iter().enumerate() {
        if vector.len() != dim {
            return Err(EmbeddingError::DimensionMismatch {
                position,
                expected: dim,
                actual: vector.len(),
            });
        }
        if vector.iter().any(|v| !v.is_finite()) {
            return Err(EmbeddingError::NonFinite { position });
        }
    }

    Ok(dim)
}

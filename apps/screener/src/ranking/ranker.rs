//! Ranker — orders resumes by semantic closeness to a job description.
//!
//! Pipeline:
//! 1. provider readiness check (credential present)
//! 2. drop resumes with blank text
//! 3. one batched embedding call: `[job] ++ resumes`
//! 4. exact L2 search with k = all resumes
//! 5. min/max normalize distances into scores
//!
//! `try_rank` reports why a ranking produced nothing; `rank` logs that reason
//! and returns an empty list instead.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::embedding::{validate_embeddings, EmbeddingError, EmbeddingProvider};
use crate::models::{RankedResume, Resume};
use crate::ranking::index::{FlatL2Index, IndexError};
use crate::ranking::scoring::normalize_distances;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("embedding provider is not configured: {0}")]
    Configuration(String),

    #[error("embedding provider failed: {0}")]
    Provider(#[from] EmbeddingError),

    #[error("no resume with usable text ({submitted} submitted)")]
    EmptyInput { submitted: usize },
}

impl From<IndexError> for RankError {
    /// Positions are translated back to the provider batch, where the job is
    /// entry 0 and resume `i` in the index is entry `i + 1`.
    fn from(e: IndexError) -> Self {
        let mismatch = match e {
            IndexError::Vector {
                position,
                expected,
                actual,
            } => EmbeddingError::DimensionMismatch {
                position: position + 1,
                expected,
                actual,
            },
            IndexError::Query { expected, actual } => EmbeddingError::DimensionMismatch {
                position: 0,
                expected,
                actual,
            },
        };
        RankError::Provider(mismatch)
    }
}

#[derive(Clone)]
pub struct Ranker {
    provider: Arc<dyn EmbeddingProvider>,
}

impl Ranker {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { provider }
    }

    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    /// Ranks `resumes` against `job_text`, best match first.
    ///
    /// Never fails: configuration problems, provider errors and "nothing to rank"
    /// are logged and yield an empty list.
    pub async fn rank(&self, job_text: &str, resumes: &[Resume]) -> Vec<RankedResume> {
        match self.try_rank(job_text, resumes).await {
            Ok(ranked) => ranked,
            Err(RankError::EmptyInput { submitted }) => {
                warn!("No resumes with usable text to rank ({submitted} submitted)");
                Vec::new()
            }
            Err(e) => {
                error!("Resume ranking failed: {e}");
                Vec::new()
            }
        }
    }

    /// Same as `rank`, but hands the failure cause back to the caller.
    pub async fn try_rank(
        &self,
        job_text: &str,
        resumes: &[Resume],
    ) -> Result<Vec<RankedResume>, RankError> {
        self.provider
            .ensure_ready()
            .map_err(|e| RankError::Configuration(e.to_string()))?;

        let valid: Vec<&Resume> = resumes
            .iter()
            .filter(|r| {
                let keep = r.has_text();
                if !keep {
                    debug!("Skipping resume '{}': no extracted text", r.title);
                }
                keep
            })
            .collect();

        if valid.is_empty() {
            return Err(RankError::EmptyInput {
                submitted: resumes.len(),
            });
        }

        let mut texts = Vec::with_capacity(valid.len() + 1);
        texts.push(job_text.to_string());
        texts.extend(valid.iter().map(|r| r.text.clone()));

        let embeddings = self.provider.embed_batch(&texts).await?;
        let dim = validate_embeddings(&embeddings, texts.len())?;

        let mut vectors = embeddings.into_iter();
        let job_vector = vectors.next().ok_or(EmbeddingError::CountMismatch {
            expected: texts.len(),
            actual: 0,
        })?;

        let mut index = FlatL2Index::new(dim);
        index.add_all(vectors)?;

        let neighbors = index.search(&job_vector, index.len())?;
        let distances: Vec<f64> = neighbors.iter().map(|n| n.distance).collect();
        let scores = normalize_distances(&distances);

        let ranked: Vec<RankedResume> = neighbors
            .iter()
            .zip(scores)
            .map(|(neighbor, score)| RankedResume {
                resume: valid[neighbor.index].clone(),
                score,
            })
            .collect();

        info!(
            "Ranked {} of {} resumes (model: {}, dim: {})",
            ranked.len(),
            resumes.len(),
            self.provider.model_name(),
            dim
        );

        Ok(ranked)
    }
}

//! Axum route handlers for the Ranking API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{RankedResume, Resume};
use crate::ranking::RankError;
use crate::state::AppState;

const NO_VALID_RESUMES: &str = "No valid resumes could be processed.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub job_description: String,
    pub resumes: Vec<Resume>,
}

#[derive(Debug, Serialize)]
pub struct RankedEntry {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub title: String,
    pub score: f32,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub results: Vec<RankedEntry>,
    pub submitted: usize,
    pub ranked: usize,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RankResponse {
    fn new(ranked: Vec<RankedResume>, submitted: usize, model: &str) -> Self {
        let results: Vec<RankedEntry> = ranked
            .into_iter()
            .enumerate()
            .map(|(i, r)| RankedEntry {
                rank: i + 1,
                title: r.resume.title,
                score: r.score,
            })
            .collect();

        let message = results.is_empty().then(|| NO_VALID_RESUMES.to_string());

        Self {
            ranked: results.len(),
            results,
            submitted,
            model: model.to_string(),
            message,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/rank
///
/// Ranks the submitted resumes against the job description, best match first.
/// Resumes with no text are skipped; if none are left the response is empty
/// with an explanatory message rather than an error.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide a job description.".to_string(),
        ));
    }
    if request.resumes.is_empty() {
        return Err(AppError::Validation(
            "Please upload at least one resume.".to_string(),
        ));
    }

    let submitted = request.resumes.len();
    let ranked = match state
        .ranker
        .try_rank(&request.job_description, &request.resumes)
        .await
    {
        Ok(ranked) => ranked,
        Err(RankError::EmptyInput { .. }) => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    Ok(Json(RankResponse::new(
        ranked,
        submitted,
        state.ranker.model_name(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_assigns_one_based_ranks() {
        let ranked = vec![
            RankedResume {
                resume: Resume::new("a.pdf", "x"),
                score: 1.0,
            },
            RankedResume {
                resume: Resume::new("b.pdf", "y"),
                score: 0.0,
            },
        ];
        let response = RankResponse::new(ranked, 3, "models/embedding-001");

        assert_eq!(response.results[0].rank, 1);
        assert_eq!(response.results[1].rank, 2);
        assert_eq!(response.results[1].title, "b.pdf");
        assert_eq!(response.ranked, 2);
        assert_eq!(response.submitted, 3);
        assert!(response.message.is_none());
    }

    #[test]
    fn test_empty_response_carries_message() {
        let response = RankResponse::new(vec![], 2, "stub");
        assert_eq!(response.ranked, 0);
        assert_eq!(response.message.as_deref(), Some(NO_VALID_RESUMES));
    }
}

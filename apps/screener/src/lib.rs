//! Resume screener: ranks candidate resumes against a job description by
//! embedding similarity.

pub mod config;
pub mod embedding;
pub mod errors;
pub mod models;
pub mod ranking;
pub mod routes;
pub mod state;

pub use embedding::{EmbeddingError, EmbeddingProvider, GeminiEmbedder};
pub use models::{RankedResume, Resume};
pub use ranking::{RankError, Ranker};

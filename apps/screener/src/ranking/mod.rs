// Resume ranking: embed, index, score.
// All embedding calls go through the EmbeddingProvider held by the Ranker.

pub mod handlers;
pub mod index;
pub mod ranker;
pub mod scoring;

pub use ranker::{RankError, Ranker};

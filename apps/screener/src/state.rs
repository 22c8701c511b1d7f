use crate::ranking::Ranker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Ranker over the configured embedding provider. Stateless across requests.
    pub ranker: Ranker,
}

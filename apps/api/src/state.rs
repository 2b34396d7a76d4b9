use crate::generation::generator::ContentGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Stateless generator wrapping the strategy chosen via GENERATION_BACKEND.
    pub generator: ContentGenerator,
}

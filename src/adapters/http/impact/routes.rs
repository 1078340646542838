//! Axum router configuration for impact endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    compute_impacts, default_composition, health, list_medians, track_progress, ImpactAppState,
};

/// Create the impact API router.
///
/// # Routes
///
/// - `POST /impacts` - Compute the impact table of a composition
/// - `POST /progress` - Running total and status of the form
/// - `GET /composition/default` - Values the form resets to
/// - `GET /medians` - Benchmark medians
pub fn impact_routes() -> Router<ImpactAppState> {
    Router::new()
        .route("/impacts", post(compute_impacts))
        .route("/progress", post(track_progress))
        .route("/composition/default", get(default_composition))
        .route("/medians", get(list_medians))
}

/// Create the complete impact module router, mounted under `/api` with the
/// health probe at the root.
///
/// # Example
///
/// ```ignore
/// let app: Router = impact_router().with_state(ImpactAppState::new(aggregator));
/// ```
pub fn impact_router() -> Router<ImpactAppState> {
    Router::new()
        .nest("/api", impact_routes())
        .route("/health", get(health))
}

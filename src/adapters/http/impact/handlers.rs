//! HTTP handlers for impact endpoints.
//!
//! These handlers connect Axum routes to the application layer query handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::impact::{
    ComputeImpactsHandler, ComputeImpactsQuery, ResetCompositionHandler, TrackProgressHandler,
    TrackProgressQuery,
};
use crate::domain::foundation::ValidationError;
use crate::domain::impact::{ImpactAggregator, ELEMENT_COUNT};

use super::dto::{
    CompositionRequest, ErrorResponse, ErrorRowResponse, HealthResponse, ImpactRowResponse,
    MedianRowResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state.
///
/// The aggregator owns the reference table loaded at startup and is never
/// mutated afterwards, so requests share it without locking.
#[derive(Clone)]
pub struct ImpactAppState {
    pub aggregator: Arc<ImpactAggregator>,
}

impl ImpactAppState {
    pub fn new(aggregator: Arc<ImpactAggregator>) -> Self {
        Self { aggregator }
    }

    /// Create handlers on demand from the shared state.
    pub fn compute_impacts_handler(&self) -> ComputeImpactsHandler {
        ComputeImpactsHandler::new(self.aggregator.clone())
    }

    pub fn track_progress_handler(&self) -> TrackProgressHandler {
        TrackProgressHandler::new()
    }

    pub fn reset_composition_handler(&self) -> ResetCompositionHandler {
        ResetCompositionHandler::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/impacts - Compute the impact table of a composition
pub async fn compute_impacts(
    State(state): State<ImpactAppState>,
    Json(request): Json<CompositionRequest>,
) -> Result<impl IntoResponse, ImpactApiError> {
    let handler = state.compute_impacts_handler();
    let query = ComputeImpactsQuery {
        percentages: request.percentages,
    };

    let result = handler.handle(query)?;

    let rows: Vec<ImpactRowResponse> = result
        .into_records()
        .into_iter()
        .map(ImpactRowResponse::from)
        .collect();

    Ok(Json(rows))
}

/// POST /api/progress - Running total of the form
pub async fn track_progress(
    State(state): State<ImpactAppState>,
    Json(request): Json<CompositionRequest>,
) -> Result<impl IntoResponse, ImpactApiError> {
    let handler = state.track_progress_handler();
    let progress = handler.handle(TrackProgressQuery {
        percentages: request.percentages,
    })?;

    Ok(Json(progress))
}

/// GET /api/composition/default - Values the form resets to
pub async fn default_composition(State(state): State<ImpactAppState>) -> impl IntoResponse {
    Json(state.reset_composition_handler().handle())
}

/// GET /api/medians - Benchmark medians in category order
pub async fn list_medians(State(state): State<ImpactAppState>) -> impl IntoResponse {
    let rows: Vec<MedianRowResponse> = state
        .aggregator
        .medians()
        .entries()
        .into_iter()
        .map(MedianRowResponse::from)
        .collect();

    Json(rows)
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        elements: ELEMENT_COUNT,
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper that converts validation errors to HTTP responses.
///
/// Values a user typed are answered with the single `Erreur` row the results
/// table displays. A request with the wrong number of percentages is a client
/// bug and gets the standard error body instead.
#[derive(Debug)]
pub struct ImpactApiError(ValidationError);

impl From<ValidationError> for ImpactApiError {
    fn from(err: ValidationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ImpactApiError {
    fn into_response(self) -> axum::response::Response {
        if self.0.is_contract_violation() {
            tracing::warn!(error = %self.0, "Rejected malformed composition request");
            let error = ErrorResponse::new(self.0.code().to_string(), self.0.to_string());
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }

        let rows = vec![ErrorRowResponse::from(&self.0)];
        (StatusCode::UNPROCESSABLE_ENTITY, Json(rows)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SUM_MUST_BE_100_MESSAGE;
    use crate::domain::impact::{Element, IndicatorRecord, MedianTable, ReferenceTable};
    use axum::body::to_bytes;
    use axum::response::Response;
    use serde_json::{json, Value};

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn test_state() -> ImpactAppState {
        let table = ReferenceTable::from_rows(Element::ALL.iter().map(|&e| {
            (
                e,
                IndicatorRecord::from_values([10.0, 0.25, 0.1, 100.0, 50.0, 300.0, 20.0, 30.0, 40.0]),
            )
        }))
        .unwrap();
        ImpactAppState::new(Arc::new(ImpactAggregator::new(
            Arc::new(table),
            MedianTable::published_hea(),
        )))
    }

    fn request(pairs: &[(Element, f64)]) -> Json<CompositionRequest> {
        let mut percentages = vec![0.0; ELEMENT_COUNT];
        for (element, value) in pairs {
            percentages[element.index()] = *value;
        }
        Json(CompositionRequest { percentages })
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // compute_impacts
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn compute_impacts_returns_nine_formatted_rows() {
        let response = compute_impacts(State(test_state()), request(&[(Element::Ti, 100.0)]))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 9);
        assert_eq!(
            rows[1],
            json!({ "Impact Category": "Supply risk", "Value": "0.250", "Median value": 0.316 })
        );
        assert_eq!(rows[0]["Value"], "10.0");
        assert_eq!(rows[3]["Value"], "100");
    }

    #[tokio::test]
    async fn compute_impacts_answers_incomplete_sum_with_error_row() {
        let response = compute_impacts(State(test_state()), request(&[(Element::Fe, 99.99)]))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!([{ "Impact Category": "Erreur", "Value": SUM_MUST_BE_100_MESSAGE, "Unit": "" }])
        );
    }

    #[tokio::test]
    async fn compute_impacts_answers_out_of_range_with_error_row() {
        let response = compute_impacts(State(test_state()), request(&[(Element::W, 120.0)]))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json[0]["Value"], "W must range between 0 and 100");
    }

    #[tokio::test]
    async fn compute_impacts_rejects_wrong_length_as_bad_request() {
        let response = compute_impacts(
            State(test_state()),
            Json(CompositionRequest {
                percentages: vec![100.0],
            }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error_code"], "WRONG_ELEMENT_COUNT");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Other endpoints
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn track_progress_reports_status() {
        let response = track_progress(
            State(test_state()),
            request(&[(Element::Fe, 70.0), (Element::Ni, 40.0)]),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "total": 110.0, "status": "danger" })
        );
    }

    #[tokio::test]
    async fn default_composition_lists_elements_at_zero() {
        let response = default_composition(State(test_state())).await.into_response();

        let json = body_json(response).await;
        assert_eq!(json["elements"][0], "Al");
        assert_eq!(json["elements"][19], "Zr");
        assert_eq!(json["percentages"].as_array().unwrap().len(), ELEMENT_COUNT);
    }

    #[tokio::test]
    async fn list_medians_returns_published_benchmarks() {
        let response = list_medians(State(test_state())).await.into_response();

        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 9);
        assert_eq!(json[0]["Median value"], 19.3);
        assert_eq!(json[8]["Median value"], 41.0);
    }

    #[tokio::test]
    async fn health_reports_element_count() {
        let json = body_json(health().await.into_response()).await;
        assert_eq!(json, json!({ "status": "ok", "elements": 20 }));
    }
}

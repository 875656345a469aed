use axum::{extract::State, http::StatusCode, Extension, Json};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{Product, RecommendationRequest, RecommendationResult},
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Returns the full product catalog
pub async fn get_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.products().to_vec())
}

/// Generates recommendations for the supplied preferences and history
///
/// An empty outcome maps to 404, whether the model produced nothing usable or
/// genuinely recommended nothing. A failed completion call surfaces through
/// `AppError` as a server-error-class status instead.
pub async fn get_recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResult>> {
    tracing::info!(
        request_id = %request_id,
        history_len = request.browsing_history.len(),
        price_range = %request.preferences.price_range,
        "Processing recommendation request"
    );

    let result = state
        .recommender
        .recommend(
            &state.catalog,
            &request.preferences,
            &request.browsing_history,
        )
        .await?;

    if result.recommendations.is_empty() {
        if let Some(error) = &result.error {
            tracing::warn!(request_id = %request_id, error = %error, "Recommendation parse failure");
        }
        return Err(AppError::NotFound(
            "No recommendations generated based on provided inputs.".to_string(),
        ));
    }

    tracing::info!(
        request_id = %request_id,
        count = result.count,
        "Recommendation request completed"
    );

    Ok(Json(result))
}

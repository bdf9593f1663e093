use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{Itinerary, RecommendationBundle, TripQuery};
use crate::services::{budget, recommend, DatasetSummary};

use super::AppState;

/// Shown when no dataset row satisfies the query
pub const NO_MATCHES_MESSAGE: &str =
    "No suitable recommendations found based on the provided criteria.";

// Request/Response types

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub budget_tier: u8,
    pub recommendations: Vec<RecommendationBundle>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BudgetTierParams {
    pub budget: f64,
}

#[derive(Debug, Serialize)]
pub struct BudgetTierResponse {
    pub budget: f64,
    pub tier: u8,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Plans one recommendation bundle per requested day
pub async fn recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(query): Json<TripQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    if let Some(field) = query.non_finite_field() {
        return Err(AppError::InvalidInput(format!("{field} must be a finite number")));
    }
    if query.num_days > state.inner.max_days {
        return Err(AppError::InvalidInput(format!(
            "num_days must be at most {}",
            state.inner.max_days
        )));
    }

    tracing::info!(
        request_id = %request_id,
        budget = query.budget,
        num_days = query.num_days,
        "Processing recommendation request"
    );

    let itinerary = {
        let mut rng = state.inner.rng.lock().await;
        recommend(&state.inner.dataset, &query, &state.inner.assembler, &mut *rng)
    };

    let response = match itinerary {
        Itinerary::Planned(bundles) => RecommendationResponse {
            budget_tier: budget::classify(query.budget),
            recommendations: bundles,
            message: None,
        },
        Itinerary::NoMatches => RecommendationResponse {
            budget_tier: budget::classify(query.budget),
            recommendations: Vec::new(),
            message: Some(NO_MATCHES_MESSAGE.to_string()),
        },
    };

    tracing::info!(
        request_id = %request_id,
        days = response.recommendations.len(),
        "Recommendations ready"
    );

    Ok(Json(response))
}

/// Reports which budget tier a budget falls into
pub async fn budget_tier(Query(params): Query<BudgetTierParams>) -> Json<BudgetTierResponse> {
    Json(BudgetTierResponse {
        budget: params.budget,
        tier: budget::classify(params.budget),
    })
}

/// Row counts of the loaded dataset
pub async fn dataset_summary(State(state): State<AppState>) -> Json<DatasetSummary> {
    Json(state.inner.dataset.summary())
}

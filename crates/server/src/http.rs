//! HTTP surface: `/health`, `/api/ratings` and `/api/suggestions` over a
//! shared `AppState`.

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use catalog::SuggestionResult;
use lookups::LookupSet;

use crate::actions::{RatingsActionResult, fetch_suggestions_action};
use crate::aggregator::RatingAggregator;
use crate::error::RateFindError;
use crate::suggestions::SuggestionProvider;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: RatingAggregator,
    pub suggestions: SuggestionProvider,
}

impl AppState {
    pub fn new(lookups: &LookupSet) -> Self {
        Self {
            aggregator: RatingAggregator::new(lookups),
            suggestions: SuggestionProvider::new(lookups),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RatingsParams {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsParams {
    #[serde(default)]
    pub query: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/ratings", get(ratings))
        .route("/api/suggestions", get(suggestions))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn ratings(
    State(state): State<AppState>,
    Query(params): Query<RatingsParams>,
) -> (StatusCode, Json<RatingsActionResult>) {
    let outcome = state.aggregator.fetch_ratings(&params.title).await;
    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(RateFindError::Validation(_)) => StatusCode::BAD_REQUEST,
        Err(RateFindError::Lookup(_)) => StatusCode::BAD_GATEWAY,
    };
    (status, Json(outcome.into()))
}

async fn suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestionsParams>,
) -> Json<SuggestionResult> {
    Json(fetch_suggestions_action(&state.suggestions, &params.query).await)
}

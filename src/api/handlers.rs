use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{RecommendResponse, SearchResponse};
use crate::services::{picks, recommendations};

use super::AppState;

// Request types

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub movie_name: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

// Handlers

/// Welcome route
pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Hello, welcome to the movie recommendation API" }))
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Similar-movie recommendations for a user-supplied title
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Json<RecommendResponse>> {
    let recommendations = recommendations::recommend(
        &state.catalog,
        &state.similarity,
        Arc::clone(&state.posters),
        &request.movie_name,
    )
    .await?;

    Ok(Json(RecommendResponse { recommendations }))
}

/// Substring title search for autocomplete
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let suggestions = state.catalog.search(&params.query);
    Json(SearchResponse { suggestions })
}

/// Deterministic whole-catalog pick
pub async fn movie_of_the_day(State(state): State<AppState>) -> AppResult<Json<String>> {
    picks::movie_of_the_day(&state.catalog)
        .map(Json)
        .ok_or_else(|| AppError::Internal("Catalog is empty".to_string()))
}

/// Deterministic pick among movies matching a genre
pub async fn genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> AppResult<Json<String>> {
    picks::genre_pick(&state.catalog, &genre)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No movies found for genre '{}'", genre)))
}

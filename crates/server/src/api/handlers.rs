use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use analytics::{AnalyticsSnapshot, InteractionEvent};
use catalog::MovieRecord;
use recommender::Recommendation;

use crate::error::{AppError, AppResult};
use crate::service::{ServiceStatus, StreamService};

const DEFAULT_PAGE_SIZE: usize = 20;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct MoviesQuery {
    pub genre: Option<String>,
    pub exclude: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    pub title: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ExplainQuery {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub candidate: String,
}

#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub count: usize,
    pub movies: Vec<MovieRecord>,
}

impl From<Vec<MovieRecord>> for MoviesResponse {
    fn from(movies: Vec<MovieRecord>) -> Self {
        Self {
            count: movies.len(),
            movies,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub source_movie: String,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
pub struct MovieViews {
    pub name: String,
    pub views: usize,
}

#[derive(Debug, Serialize)]
pub struct GenreValue {
    pub name: String,
    pub value: usize,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub top_movies: Vec<MovieViews>,
    pub top_genres: Vec<GenreValue>,
    pub total_interactions: usize,
}

impl From<AnalyticsSnapshot> for AnalyticsResponse {
    fn from(snapshot: AnalyticsSnapshot) -> Self {
        Self {
            top_movies: snapshot
                .top_movies
                .into_iter()
                .map(|e| MovieViews { name: e.name, views: e.count })
                .collect(),
            top_genres: snapshot
                .top_genres
                .into_iter()
                .map(|e| GenreValue { name: e.name, value: e.count })
                .collect(),
            total_interactions: snapshot.total_interactions,
        }
    }
}

// Handlers

/// Service status
pub async fn home(State(service): State<StreamService>) -> Json<ServiceStatus> {
    Json(service.status())
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Browse by genre
pub async fn get_movies(
    State(service): State<StreamService>,
    Query(params): Query<MoviesQuery>,
) -> Json<MoviesResponse> {
    let movies = service.browse(
        params.genre.as_deref(),
        params.exclude.as_deref(),
        params.limit.unwrap_or(DEFAULT_PAGE_SIZE),
    );
    Json(movies.into())
}

/// Title search
pub async fn search_movies(
    State(service): State<StreamService>,
    Query(params): Query<SearchQuery>,
) -> Json<MoviesResponse> {
    let movies = service.search(&params.query, params.limit.unwrap_or(DEFAULT_PAGE_SIZE));
    Json(movies.into())
}

/// Explained recommendations. Unknown titles give an empty list, not a 404.
pub async fn get_recommendations(
    State(service): State<StreamService>,
    Query(params): Query<RecommendationsQuery>,
) -> AppResult<Json<RecommendationsResponse>> {
    // Candidate selection scans the whole catalog; keep it off the async workers
    let result = tokio::task::spawn_blocking(move || service.recommend(&params.title, params.limit))
        .await
        .map_err(|e| AppError::Internal(format!("recommendation task failed: {}", e)))?;

    Ok(Json(RecommendationsResponse {
        source_movie: result.source_title,
        recommendations: result.recommendations,
    }))
}

pub async fn explain(
    State(service): State<StreamService>,
    Query(params): Query<ExplainQuery>,
) -> Json<Value> {
    let explanation = service.explain(&params.source, &params.candidate);
    Json(json!({ "explanation": explanation }))
}

/// Record an interaction. Any JSON object is accepted.
pub async fn log_interaction(
    State(service): State<StreamService>,
    event: Result<Json<InteractionEvent>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(event) = event.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    service.log_event(event);
    Ok(Json(json!({ "status": "logged" })))
}

pub async fn get_analytics(State(service): State<StreamService>) -> Json<AnalyticsResponse> {
    Json(service.analytics().into())
}

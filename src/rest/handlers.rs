use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};

use crate::{
    climate::{self, ClimateError, DailySeries},
    storage::Storage,
};

use super::{
    models::{ErrorResponse, HealthResponse, TemperatureSummaryResponse},
    AppState,
};

const WELCOME: &str = concat!(
    "Welcome to the Climate App API!<br/>",
    "Available Routes:<br/>",
    "/api/v1.0/precipitation<br/>",
    "/api/v1.0/stations<br/>",
    "/api/v1.0/tobs<br/>",
    "/api/v1.0/&lt;start&gt;<br/>",
    "/api/v1.0/&lt;start&gt;/&lt;end&gt;<br/>",
);

pub async fn welcome() -> Html<&'static str> {
    Html(WELCOME)
}

pub async fn health<S: Storage + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
) -> impl IntoResponse {
    let uptime_secs = state.started_at.elapsed().map(|d| d.as_secs()).unwrap_or(0);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            uptime_secs,
        }),
    )
}

pub async fn precipitation<S: Storage + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Json<DailySeries>, ClimateError> {
    let series = climate::precipitation(&state.storage, &state.windows)?;
    Ok(Json(series))
}

pub async fn stations<S: Storage + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<String>>, ClimateError> {
    Ok(Json(climate::stations(&state.storage)?))
}

pub async fn tobs<S: Storage + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Json<DailySeries>, ClimateError> {
    let series = climate::tobs(&state.storage, &state.windows)?;
    Ok(Json(series))
}

pub async fn temps_from<S: Storage + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    Path(start): Path<String>,
) -> Result<Json<Vec<TemperatureSummaryResponse>>, ClimateError> {
    temperature_range(&state, &start, None)
}

pub async fn temps_between<S: Storage + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureSummaryResponse>>, ClimateError> {
    temperature_range(&state, &start, Some(&end))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "not found".to_string(),
        }),
    )
}

fn temperature_range<S: Storage>(
    state: &AppState<S>,
    start: &str,
    end: Option<&str>,
) -> Result<Json<Vec<TemperatureSummaryResponse>>, ClimateError> {
    let summaries = climate::temperature_range(&state.storage, &state.windows, start, end)?;
    Ok(Json(summaries.into_iter().map(Into::into).collect()))
}

//! HTTP handlers for weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::models::WeatherSnapshot;
use shared::types::GpsCoordinates;
use shared::validation::validate_coordinates;

use crate::error::{AppError, AppResult};
use crate::services::WeatherService;
use crate::AppState;

/// Query parameters for weather lookups
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Current conditions at a location (cached for 30 minutes)
pub async fn get_current_weather(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<WeatherSnapshot>> {
    validate_coordinates(query.lat, query.lon)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = WeatherService::from_config(state.db, &state.config)?;
    let snapshot = service
        .get_current(GpsCoordinates::new(query.lat, query.lon))
        .await?;
    Ok(Json(snapshot))
}

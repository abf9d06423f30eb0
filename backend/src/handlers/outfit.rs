//! HTTP handlers for outfit suggestions and saved outfits

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::models::{Occasion, OutfitCandidate, WeatherSnapshot};
use shared::types::GpsCoordinates;
use shared::validation::validate_coordinates;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::outfit::{OutfitService, SaveOutfitInput, SavedOutfit, UpdateOutfitInput};
use crate::services::WeatherService;
use crate::AppState;

/// Query parameters for outfit suggestions
#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    pub lat: f64,
    pub lon: f64,
    pub occasion: Option<String>,
}

/// Suggestions plus the weather they were assembled for
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub weather: WeatherSnapshot,
    pub outfits: Vec<OutfitCandidate>,
}

/// Generate outfit suggestions for current conditions at the user's location
pub async fn get_outfit_suggestions(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<SuggestionQuery>,
) -> AppResult<Json<SuggestionsResponse>> {
    validate_coordinates(query.lat, query.lon)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let weather_service = WeatherService::from_config(state.db.clone(), &state.config)?;
    let weather = weather_service
        .get_current(GpsCoordinates::new(query.lat, query.lon))
        .await?;

    let occasion = query
        .occasion
        .as_deref()
        .map(Occasion::from_str_or_default)
        .unwrap_or_default();

    let service = OutfitService::new(state.db);
    let outfits = service.suggest(user_id, &weather, occasion).await?;

    Ok(Json(SuggestionsResponse { weather, outfits }))
}

/// Query parameters for listing outfits
#[derive(Debug, Deserialize)]
pub struct ListOutfitsQuery {
    pub saved: Option<bool>,
}

/// List a user's outfits
pub async fn list_outfits(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<ListOutfitsQuery>,
) -> AppResult<Json<Vec<SavedOutfit>>> {
    let service = OutfitService::new(state.db);
    let outfits = service
        .list_outfits(user_id, query.saved.unwrap_or(false))
        .await?;
    Ok(Json(outfits))
}

/// Persist an outfit the user accepted
pub async fn save_outfit(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(input): Json<SaveOutfitInput>,
) -> AppResult<Json<SavedOutfit>> {
    let service = OutfitService::new(state.db);
    let outfit = service.save_outfit(user_id, input).await?;
    Ok(Json(outfit))
}

/// Update a persisted outfit's rating or saved flag
pub async fn update_outfit(
    State(state): State<AppState>,
    Path((user_id, outfit_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<UpdateOutfitInput>,
) -> AppResult<Json<SavedOutfit>> {
    let service = OutfitService::new(state.db);
    let outfit = service.update_outfit(user_id, outfit_id, input).await?;
    Ok(Json(outfit))
}

/// Delete a persisted outfit
pub async fn delete_outfit(
    State(state): State<AppState>,
    Path((user_id, outfit_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<()>> {
    let service = OutfitService::new(state.db);
    service.delete_outfit(user_id, outfit_id).await?;
    Ok(Json(()))
}

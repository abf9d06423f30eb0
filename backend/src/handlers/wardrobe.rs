//! HTTP handlers for wardrobe management endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::models::ClothingItem;
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::wardrobe::{
    CreateClothingItemInput, UpdateClothingItemInput, WardrobeService,
};
use crate::AppState;

/// Query parameters for listing wardrobe items
#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    pub category: Option<String>,
}

/// List a user's wardrobe, optionally filtered by category
pub async fn list_items(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<ListItemsQuery>,
) -> AppResult<Json<Vec<ClothingItem>>> {
    let service = WardrobeService::new(state.db);
    let items = service
        .list_items(user_id, query.category.as_deref())
        .await?;
    Ok(Json(items))
}

/// Get a single wardrobe item
pub async fn get_item(
    State(state): State<AppState>,
    Path((user_id, item_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ClothingItem>> {
    let service = WardrobeService::new(state.db);
    let item = service.get_item(user_id, item_id).await?;
    Ok(Json(item))
}

/// Catalog a new wardrobe item
pub async fn create_item(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(input): Json<CreateClothingItemInput>,
) -> AppResult<Json<ClothingItem>> {
    let service = WardrobeService::new(state.db);
    let item = service.add_item(user_id, input).await?;
    Ok(Json(item))
}

/// Update a wardrobe item
pub async fn update_item(
    State(state): State<AppState>,
    Path((user_id, item_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<UpdateClothingItemInput>,
) -> AppResult<Json<ClothingItem>> {
    let service = WardrobeService::new(state.db);
    let item = service.update_item(user_id, item_id, input).await?;
    Ok(Json(item))
}

/// Delete a wardrobe item
pub async fn delete_item(
    State(state): State<AppState>,
    Path((user_id, item_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<()>> {
    let service = WardrobeService::new(state.db);
    service.delete_item(user_id, item_id).await?;
    Ok(Json(()))
}

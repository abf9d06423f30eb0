//! Outfit service: suggestion orchestration and saved-outfit storage

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{ClothingItem, Occasion, OutfitCandidate, WeatherSnapshot};
use shared::suggestion;
use shared::validation::validate_rating;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::WardrobeService;

/// Outfit service for suggestions and persistence
#[derive(Clone)]
pub struct OutfitService {
    db: PgPool,
}

/// A persisted outfit
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SavedOutfit {
    pub id: Uuid,
    pub user_id: Uuid,
    pub item_ids: Vec<Uuid>,
    pub occasion: String,
    /// 0 = unrated, 1-5 stars
    pub rating: i32,
    pub saved: bool,
    pub weather_summary: String,
    pub created_at: DateTime<Utc>,
}

/// Input for persisting an outfit, usually a candidate the user accepted
#[derive(Debug, Deserialize)]
pub struct SaveOutfitInput {
    pub item_ids: Vec<Uuid>,
    #[serde(default = "default_occasion")]
    pub occasion: String,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub saved: bool,
    #[serde(default)]
    pub weather_summary: String,
}

fn default_occasion() -> String {
    "casual".to_string()
}

/// Input for updating a persisted outfit
#[derive(Debug, Deserialize)]
pub struct UpdateOutfitInput {
    pub rating: Option<i32>,
    pub saved: Option<bool>,
}

impl OutfitService {
    /// Create a new OutfitService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Generate outfit suggestions for a user's wardrobe under the given
    /// conditions. Suggestions are not persisted; the client saves the ones
    /// the user keeps.
    pub async fn suggest(
        &self,
        user_id: Uuid,
        weather: &WeatherSnapshot,
        occasion: Occasion,
    ) -> AppResult<Vec<OutfitCandidate>> {
        let items: Vec<ClothingItem> = WardrobeService::new(self.db.clone())
            .list_items(user_id, None)
            .await?;

        tracing::debug!(
            "Suggesting outfits from {} items ({}, occasion {})",
            items.len(),
            weather.summary(),
            occasion
        );

        Ok(suggestion::suggest(&items, weather, occasion))
    }

    /// Persist an outfit
    pub async fn save_outfit(&self, user_id: Uuid, input: SaveOutfitInput) -> AppResult<SavedOutfit> {
        if input.item_ids.is_empty() {
            return Err(AppError::Validation(
                "An outfit needs at least one item".to_string(),
            ));
        }
        validate_rating(input.rating).map_err(|e| AppError::Validation(e.to_string()))?;

        let outfit = sqlx::query_as::<_, SavedOutfit>(
            r#"
            INSERT INTO outfits (user_id, item_ids, occasion, rating, saved, weather_summary)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, item_ids, occasion, rating, saved, weather_summary, created_at
            "#,
        )
        .bind(user_id)
        .bind(&input.item_ids)
        .bind(&input.occasion)
        .bind(input.rating)
        .bind(input.saved)
        .bind(&input.weather_summary)
        .fetch_one(&self.db)
        .await?;

        Ok(outfit)
    }

    /// List a user's outfits, newest first; `saved_only` restricts to the
    /// ones the user starred
    pub async fn list_outfits(&self, user_id: Uuid, saved_only: bool) -> AppResult<Vec<SavedOutfit>> {
        let outfits = if saved_only {
            sqlx::query_as::<_, SavedOutfit>(
                r#"
                SELECT id, user_id, item_ids, occasion, rating, saved, weather_summary, created_at
                FROM outfits
                WHERE user_id = $1 AND saved = TRUE
                ORDER BY created_at DESC
                "#,
            )
            .bind(user_id)
            .fetch_all(&self.db)
            .await?
        } else {
            sqlx::query_as::<_, SavedOutfit>(
                r#"
                SELECT id, user_id, item_ids, occasion, rating, saved, weather_summary, created_at
                FROM outfits
                WHERE user_id = $1
                ORDER BY created_at DESC
                "#,
            )
            .bind(user_id)
            .fetch_all(&self.db)
            .await?
        };

        Ok(outfits)
    }

    /// Update rating/saved state of a persisted outfit
    pub async fn update_outfit(
        &self,
        user_id: Uuid,
        outfit_id: Uuid,
        input: UpdateOutfitInput,
    ) -> AppResult<SavedOutfit> {
        if let Some(rating) = input.rating {
            validate_rating(rating).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        let outfit = sqlx::query_as::<_, SavedOutfit>(
            r#"
            UPDATE outfits
            SET rating = COALESCE($3, rating),
                saved = COALESCE($4, saved)
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, item_ids, occasion, rating, saved, weather_summary, created_at
            "#,
        )
        .bind(outfit_id)
        .bind(user_id)
        .bind(input.rating)
        .bind(input.saved)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Outfit".to_string()))?;

        Ok(outfit)
    }

    /// Remove a persisted outfit
    pub async fn delete_outfit(&self, user_id: Uuid, outfit_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM outfits WHERE id = $1 AND user_id = $2")
            .bind(outfit_id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Outfit".to_string()));
        }
        Ok(())
    }
}

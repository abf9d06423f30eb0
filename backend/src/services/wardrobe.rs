//! Wardrobe service for managing cataloged clothing items

use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared::models::{ClothingItem, DominantColor};
use shared::validation::{validate_category, validate_confidence, validate_warmth_score};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Wardrobe service for per-user clothing item storage
#[derive(Clone)]
pub struct WardrobeService {
    db: PgPool,
}

/// Clothing item database row
#[derive(Debug, Clone, sqlx::FromRow)]
struct ClothingItemRow {
    id: Uuid,
    user_id: Uuid,
    category: String,
    subcategory: Option<String>,
    labels: Vec<String>,
    colors: Json<Vec<DominantColor>>,
    image_url: String,
    cutout_url: String,
    season: String,
    warmth_score: i32,
    waterproof: bool,
    breathable: bool,
    user_notes: String,
    confidence: f32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ClothingItemRow> for ClothingItem {
    fn from(row: ClothingItemRow) -> Self {
        ClothingItem {
            id: row.id,
            user_id: row.user_id,
            category: row.category,
            subcategory: row.subcategory,
            labels: row.labels,
            colors: row.colors.0,
            image_url: row.image_url,
            cutout_url: row.cutout_url,
            season: row.season,
            warmth_score: row.warmth_score,
            waterproof: row.waterproof,
            breathable: row.breathable,
            user_notes: row.user_notes,
            confidence: row.confidence,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

/// Input for cataloging a clothing item
#[derive(Debug, Deserialize)]
pub struct CreateClothingItemInput {
    pub category: String,
    pub subcategory: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub colors: Vec<DominantColor>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub cutout_url: String,
    #[serde(default = "default_season")]
    pub season: String,
    #[serde(default = "default_warmth_score")]
    pub warmth_score: i32,
    #[serde(default)]
    pub waterproof: bool,
    #[serde(default = "default_breathable")]
    pub breathable: bool,
    #[serde(default)]
    pub user_notes: String,
    #[serde(default)]
    pub confidence: f32,
}

fn default_season() -> String {
    "all".to_string()
}

fn default_warmth_score() -> i32 {
    3
}

fn default_breathable() -> bool {
    true
}

/// Input for updating a clothing item; absent fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateClothingItemInput {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub labels: Option<Vec<String>>,
    pub colors: Option<Vec<DominantColor>>,
    pub season: Option<String>,
    pub warmth_score: Option<i32>,
    pub waterproof: Option<bool>,
    pub breathable: Option<bool>,
    pub user_notes: Option<String>,
}

impl WardrobeService {
    /// Create a new WardrobeService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List a user's items, newest first, optionally restricted to a category
    pub async fn list_items(
        &self,
        user_id: Uuid,
        category: Option<&str>,
    ) -> AppResult<Vec<ClothingItem>> {
        let rows = match category {
            Some(category) => {
                sqlx::query_as::<_, ClothingItemRow>(
                    r#"
                    SELECT id, user_id, category, subcategory, labels, colors, image_url,
                           cutout_url, season, warmth_score, waterproof, breathable,
                           user_notes, confidence, created_at, updated_at
                    FROM clothing_items
                    WHERE user_id = $1 AND category = $2
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(user_id)
                .bind(category.to_lowercase())
                .fetch_all(&self.db)
                .await?
            }
            None => {
                sqlx::query_as::<_, ClothingItemRow>(
                    r#"
                    SELECT id, user_id, category, subcategory, labels, colors, image_url,
                           cutout_url, season, warmth_score, waterproof, breathable,
                           user_notes, confidence, created_at, updated_at
                    FROM clothing_items
                    WHERE user_id = $1
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(user_id)
                .fetch_all(&self.db)
                .await?
            }
        };

        Ok(rows.into_iter().map(ClothingItem::from).collect())
    }

    /// Get a single item
    pub async fn get_item(&self, user_id: Uuid, item_id: Uuid) -> AppResult<ClothingItem> {
        let row = sqlx::query_as::<_, ClothingItemRow>(
            r#"
            SELECT id, user_id, category, subcategory, labels, colors, image_url,
                   cutout_url, season, warmth_score, waterproof, breathable,
                   user_notes, confidence, created_at, updated_at
            FROM clothing_items
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(item_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Clothing item".to_string()))?;

        Ok(row.into())
    }

    /// Catalog a new item
    pub async fn add_item(
        &self,
        user_id: Uuid,
        input: CreateClothingItemInput,
    ) -> AppResult<ClothingItem> {
        validate_category(&input.category).map_err(|e| AppError::Validation(e.to_string()))?;
        validate_warmth_score(input.warmth_score)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validate_confidence(input.confidence).map_err(|e| AppError::Validation(e.to_string()))?;

        let row = sqlx::query_as::<_, ClothingItemRow>(
            r#"
            INSERT INTO clothing_items (
                user_id, category, subcategory, labels, colors, image_url,
                cutout_url, season, warmth_score, waterproof, breathable,
                user_notes, confidence
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id, user_id, category, subcategory, labels, colors, image_url,
                      cutout_url, season, warmth_score, waterproof, breathable,
                      user_notes, confidence, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(input.category.to_lowercase())
        .bind(&input.subcategory)
        .bind(&input.labels)
        .bind(Json(&input.colors))
        .bind(&input.image_url)
        .bind(&input.cutout_url)
        .bind(&input.season)
        .bind(input.warmth_score)
        .bind(input.waterproof)
        .bind(input.breathable)
        .bind(&input.user_notes)
        .bind(input.confidence)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Update an item; absent fields keep their stored values
    pub async fn update_item(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        input: UpdateClothingItemInput,
    ) -> AppResult<ClothingItem> {
        if let Some(category) = &input.category {
            validate_category(category).map_err(|e| AppError::Validation(e.to_string()))?;
        }
        if let Some(score) = input.warmth_score {
            validate_warmth_score(score).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        let row = sqlx::query_as::<_, ClothingItemRow>(
            r#"
            UPDATE clothing_items
            SET category = COALESCE($3, category),
                subcategory = COALESCE($4, subcategory),
                labels = COALESCE($5, labels),
                colors = COALESCE($6, colors),
                season = COALESCE($7, season),
                warmth_score = COALESCE($8, warmth_score),
                waterproof = COALESCE($9, waterproof),
                breathable = COALESCE($10, breathable),
                user_notes = COALESCE($11, user_notes),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, category, subcategory, labels, colors, image_url,
                      cutout_url, season, warmth_score, waterproof, breathable,
                      user_notes, confidence, created_at, updated_at
            "#,
        )
        .bind(item_id)
        .bind(user_id)
        .bind(input.category.as_ref().map(|c| c.to_lowercase()))
        .bind(&input.subcategory)
        .bind(&input.labels)
        .bind(input.colors.as_ref().map(Json))
        .bind(&input.season)
        .bind(input.warmth_score)
        .bind(input.waterproof)
        .bind(input.breathable)
        .bind(&input.user_notes)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Clothing item".to_string()))?;

        Ok(row.into())
    }

    /// Remove an item
    pub async fn delete_item(&self, user_id: Uuid, item_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM clothing_items WHERE id = $1 AND user_id = $2")
            .bind(item_id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Clothing item".to_string()));
        }
        Ok(())
    }
}

//! Clothing item models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A cataloged clothing piece
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Stored category string; resolve with [`ClothingItem::category_enum`]
    pub category: String,
    pub subcategory: Option<String>,
    /// Free-text hints from the labeling model, e.g. "umbrella", "scarf"
    pub labels: Vec<String>,
    pub colors: Vec<DominantColor>,
    pub image_url: String,
    pub cutout_url: String,
    pub season: String,
    /// 1 (very light) - 5 (very warm)
    pub warmth_score: i32,
    pub waterproof: bool,
    pub breathable: bool,
    pub user_notes: String,
    pub confidence: f32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ClothingItem {
    /// Resolve the stored category string. Items whose category does not map
    /// to a known value are excluded from outfit generation.
    pub fn category_enum(&self) -> Option<ClothingCategory> {
        self.category.parse().ok()
    }
}

/// The six fixed clothing categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClothingCategory {
    Top,
    Bottom,
    Outerwear,
    Dress,
    Shoes,
    Accessory,
}

impl ClothingCategory {
    pub const ALL: [ClothingCategory; 6] = [
        ClothingCategory::Top,
        ClothingCategory::Bottom,
        ClothingCategory::Outerwear,
        ClothingCategory::Dress,
        ClothingCategory::Shoes,
        ClothingCategory::Accessory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClothingCategory::Top => "top",
            ClothingCategory::Bottom => "bottom",
            ClothingCategory::Outerwear => "outerwear",
            ClothingCategory::Dress => "dress",
            ClothingCategory::Shoes => "shoes",
            ClothingCategory::Accessory => "accessory",
        }
    }
}

impl std::str::FromStr for ClothingCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ClothingCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or(UnknownCategory)
    }
}

impl std::fmt::Display for ClothingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category string did not match any of the six fixed categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown clothing category")]
pub struct UnknownCategory;

/// A dominant color extracted from an item photo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DominantColor {
    pub hex: String,
    pub name: String,
    pub percentage: f32,
}

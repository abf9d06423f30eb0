//! Image analysis models

use serde::{Deserialize, Serialize};

use crate::models::{ClothingCategory, DominantColor};

/// A label emitted by the vision model, with its confidence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelScore {
    pub text: String,
    pub confidence: f32,
}

/// Result of the full analysis pipeline for one photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub category: ClothingCategory,
    /// The label that determined the category, when one matched
    pub subcategory: Option<String>,
    pub labels: Vec<String>,
    /// Confidence of the matched label; 0 when no label mapped
    pub confidence: f32,
    pub colors: Vec<DominantColor>,
}

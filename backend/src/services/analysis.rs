//! Clothing photo analysis pipeline
//!
//! Orchestrates the full analysis of one photo:
//! 1. Segment clothing from background (vision service)
//! 2. Label the cutout (vision service)
//! 3. Map labels to a clothing category
//! 4. Extract dominant colors
//!
//! The segmentation backend is non-reentrant, so all segmentation calls are
//! serialized through a shared gate; everything else in the pipeline runs
//! freely, and batch analysis processes images concurrently.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use shared::color;
use shared::labeling;
use shared::models::{AnalysisResult, ClothingCategory};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::external::vision::{LabelRequest, SegmentRequest, VisionClient};

/// Below this confidence the category is still reported as a best guess, but
/// the client should ask the user to confirm it
pub const CONFIDENCE_THRESHOLD: f32 = 0.6;

/// Labels below this confidence are dropped by the labeling model
const MIN_LABEL_CONFIDENCE: f32 = 0.5;

/// Analysis pipeline service
#[derive(Clone)]
pub struct AnalysisService {
    vision: VisionClient,
    segmentation_gate: Arc<Mutex<()>>,
}

/// One photo to analyze: raw RGBA pixels, base64-encoded
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeImageInput {
    pub image_base64: String,
    pub width: u32,
    pub height: u32,
}

/// Analysis output: the result plus the background-free cutout
#[derive(Debug, Serialize)]
pub struct AnalyzedImage {
    pub analysis: AnalysisResult,
    pub cutout_base64: String,
}

/// Per-image outcome of a batch run; a failed image never fails the batch
#[derive(Debug, Serialize)]
pub struct BatchItem {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalyzedImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisService {
    /// Create a new AnalysisService instance
    pub fn new(vision: VisionClient, segmentation_gate: Arc<Mutex<()>>) -> Self {
        Self {
            vision,
            segmentation_gate,
        }
    }

    /// Full analysis pipeline for one photo
    pub async fn analyze(&self, input: AnalyzeImageInput) -> AppResult<AnalyzedImage> {
        let rgba = STANDARD
            .decode(&input.image_base64)
            .map_err(|e| AppError::Validation(format!("Invalid image payload: {}", e)))?;
        let expected = input.width as usize * input.height as usize * 4;
        if rgba.len() != expected {
            return Err(AppError::Validation(format!(
                "Image payload is {} bytes, expected {} for {}x{} RGBA",
                rgba.len(),
                expected,
                input.width,
                input.height
            )));
        }

        // Step 1: segment
        let mask = {
            let _guard = self.segmentation_gate.lock().await;
            self.vision
                .segment(&SegmentRequest {
                    image_base64: input.image_base64.clone(),
                    width: input.width,
                    height: input.height,
                })
                .await?
        };

        let mask_bytes = STANDARD
            .decode(&mask.mask_base64)
            .map_err(|e| AppError::SegmentationFailed(format!("invalid mask payload: {}", e)))?;
        if mask.width == 0 || mask.height == 0 {
            return Err(AppError::SegmentationFailed(
                "no segmentation mask produced".to_string(),
            ));
        }
        if mask_bytes.len() != mask.width as usize * mask.height as usize {
            return Err(AppError::SegmentationFailed(format!(
                "mask is {} bytes, expected {} for {}x{}",
                mask_bytes.len(),
                mask.width as usize * mask.height as usize,
                mask.width,
                mask.height
            )));
        }

        // Step 2: cut the background out
        let cutout = apply_mask(
            &rgba,
            input.width,
            input.height,
            &mask_bytes,
            mask.width,
            mask.height,
        );
        let cutout_base64 = STANDARD.encode(&cutout);

        // Step 3: label the cutout and map to a category
        let labels = self
            .vision
            .label(&LabelRequest {
                image_base64: cutout_base64.clone(),
                width: input.width,
                height: input.height,
                min_confidence: MIN_LABEL_CONFIDENCE,
            })
            .await?;

        let label_texts: Vec<String> = labels.iter().map(|l| l.text.clone()).collect();
        let best = labeling::best_match(&label_texts);
        let category = best.map(|(c, _)| c).unwrap_or(ClothingCategory::Top);
        let subcategory = best.map(|(_, label)| label.to_string());
        let confidence = subcategory
            .as_deref()
            .and_then(|matched| {
                labels
                    .iter()
                    .find(|l| l.text.eq_ignore_ascii_case(matched))
                    .map(|l| l.confidence)
            })
            .unwrap_or(0.0);

        if confidence < CONFIDENCE_THRESHOLD {
            tracing::debug!(
                "Low-confidence category {} ({:.2}); client should confirm with the user",
                category,
                confidence
            );
        }

        // Step 4: extract dominant colors
        let colors = color::dominant_colors(&cutout);

        Ok(AnalyzedImage {
            analysis: AnalysisResult {
                category,
                subcategory,
                labels: label_texts,
                confidence,
                colors,
            },
            cutout_base64,
        })
    }

    /// Analyze a batch of photos concurrently. Segmentation calls still go
    /// through the shared gate one at a time. Results come back in input
    /// order; individual failures are reported per image.
    pub async fn analyze_batch(&self, inputs: Vec<AnalyzeImageInput>) -> Vec<BatchItem> {
        let mut tasks = tokio::task::JoinSet::new();
        for (index, input) in inputs.into_iter().enumerate() {
            let service = self.clone();
            tasks.spawn(async move { (index, service.analyze(input).await) });
        }

        let mut items = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, Ok(analysis))) => items.push(BatchItem {
                    index,
                    analysis: Some(analysis),
                    error: None,
                }),
                Ok((index, Err(e))) => items.push(BatchItem {
                    index,
                    analysis: None,
                    error: Some(e.to_string()),
                }),
                Err(e) => tracing::error!("Analysis task failed to run: {}", e),
            }
        }

        items.sort_by_key(|item| item.index);
        items
    }
}

/// Applies a category mask to an RGBA image, clearing background pixels to
/// transparent. The mask is nearest-neighbor scaled onto the image; mask
/// value 0 is background, anything else is kept.
fn apply_mask(
    rgba: &[u8],
    width: u32,
    height: u32,
    mask: &[u8],
    mask_width: u32,
    mask_height: u32,
) -> Vec<u8> {
    let mut output = vec![0u8; rgba.len()];

    let scale_x = width as f32 / mask_width as f32;
    let scale_y = height as f32 / mask_height as f32;

    for y in 0..height {
        for x in 0..width {
            let mask_x = ((x as f32 / scale_x) as u32).min(mask_width - 1);
            let mask_y = ((y as f32 / scale_y) as u32).min(mask_height - 1);
            let mask_index = (mask_y * mask_width + mask_x) as usize;

            if mask[mask_index] != 0 {
                let i = ((y * width + x) * 4) as usize;
                output[i..i + 4].copy_from_slice(&rgba[i..i + 4]);
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        let mut out = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            out.extend_from_slice(&rgba);
        }
        out
    }

    #[test]
    fn mask_keeps_foreground_and_clears_background() {
        let image = solid_image(2, 2, [10, 20, 30, 255]);
        // Keep top-left and bottom-right
        let mask = [1u8, 0, 0, 7];

        let cutout = apply_mask(&image, 2, 2, &mask, 2, 2);

        assert_eq!(&cutout[0..4], &[10, 20, 30, 255]);
        assert_eq!(&cutout[4..8], &[0, 0, 0, 0]);
        assert_eq!(&cutout[8..12], &[0, 0, 0, 0]);
        assert_eq!(&cutout[12..16], &[10, 20, 30, 255]);
    }

    #[test]
    fn mask_scales_to_larger_images() {
        let image = solid_image(4, 4, [255, 255, 255, 255]);
        // Left half foreground, right half background
        let mask = [1u8, 0];

        let cutout = apply_mask(&image, 4, 4, &mask, 2, 1);

        for y in 0..4u32 {
            for x in 0..4u32 {
                let i = ((y * 4 + x) * 4) as usize;
                let expected = if x < 2 { 255 } else { 0 };
                assert_eq!(cutout[i + 3], expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn full_mask_keeps_whole_image() {
        let image = solid_image(3, 2, [1, 2, 3, 4]);
        let mask = [5u8];

        let cutout = apply_mask(&image, 3, 2, &mask, 1, 1);
        assert_eq!(cutout, image);
    }
}

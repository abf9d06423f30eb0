//! Vision service client
//!
//! Client for the hosted segmentation/labeling microservice that replaces the
//! mobile app's on-device models. Segmentation returns a category mask over
//! the input image (0 = background); labeling returns labels sorted by
//! confidence descending.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::LabelScore;

use crate::error::{AppError, AppResult};

/// Client for the segmentation/labeling microservice
#[derive(Clone)]
pub struct VisionClient {
    endpoint: String,
    api_key: String,
    http_client: Client,
}

/// Request to segment clothing out of a photo
#[derive(Debug, Serialize)]
pub struct SegmentRequest {
    /// Raw RGBA pixels, base64-encoded
    pub image_base64: String,
    pub width: u32,
    pub height: u32,
}

/// Category mask produced by the segmentation model. One byte per mask
/// pixel; 0 marks background, any other value a clothing/person region.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentationMask {
    pub mask_base64: String,
    pub width: u32,
    pub height: u32,
}

/// Request to label a (cutout) image
#[derive(Debug, Serialize)]
pub struct LabelRequest {
    pub image_base64: String,
    pub width: u32,
    pub height: u32,
    /// Labels below this confidence are not returned
    pub min_confidence: f32,
}

#[derive(Debug, Deserialize)]
struct LabelResponse {
    labels: Vec<LabelScore>,
}

impl VisionClient {
    /// Create a new VisionClient
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            endpoint,
            api_key,
            http_client: Client::new(),
        }
    }

    /// Run the segmentation model over a photo
    pub async fn segment(&self, request: &SegmentRequest) -> AppResult<SegmentationMask> {
        let url = format!("{}/v1/segment", self.endpoint);

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::SegmentationFailed(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::SegmentationFailed(format!("{} - {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::SegmentationFailed(format!("invalid response: {}", e)))
    }

    /// Run the labeling model over a (cutout) image. Labels come back sorted
    /// by confidence descending.
    pub async fn label(&self, request: &LabelRequest) -> AppResult<Vec<LabelScore>> {
        let url = format!("{}/v1/label", self.endpoint);

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::LabelingFailed(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::LabelingFailed(format!("{} - {}", status, body)));
        }

        let data: LabelResponse = response
            .json()
            .await
            .map_err(|e| AppError::LabelingFailed(format!("invalid response: {}", e)))?;

        let mut labels = data.labels;
        labels.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(labels)
    }
}

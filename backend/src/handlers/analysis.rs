//! HTTP handlers for the clothing photo analysis pipeline

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::external::vision::VisionClient;
use crate::services::analysis::{AnalysisService, AnalyzeImageInput, AnalyzedImage, BatchItem};
use crate::AppState;

/// Input for batch analysis
#[derive(Debug, Deserialize)]
pub struct BatchAnalyzeInput {
    pub images: Vec<AnalyzeImageInput>,
}

/// Results of a batch run, in input order
#[derive(Debug, Serialize)]
pub struct BatchAnalyzeResponse {
    pub results: Vec<BatchItem>,
}

/// Analyze a single clothing photo
pub async fn analyze_image(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeImageInput>,
) -> AppResult<Json<AnalyzedImage>> {
    let service = analysis_service(&state)?;
    let analyzed = service.analyze(input).await?;
    Ok(Json(analyzed))
}

/// Analyze a batch of clothing photos
pub async fn analyze_batch(
    State(state): State<AppState>,
    Json(input): Json<BatchAnalyzeInput>,
) -> AppResult<Json<BatchAnalyzeResponse>> {
    if input.images.is_empty() {
        return Err(AppError::Validation("No images to analyze".to_string()));
    }

    let service = analysis_service(&state)?;
    let results = service.analyze_batch(input.images).await;
    Ok(Json(BatchAnalyzeResponse { results }))
}

fn analysis_service(state: &AppState) -> AppResult<AnalysisService> {
    if state.config.vision.endpoint.is_empty() {
        return Err(AppError::Configuration(
            "Vision service endpoint not configured".to_string(),
        ));
    }

    Ok(AnalysisService::new(
        VisionClient::new(
            state.config.vision.endpoint.clone(),
            state.config.vision.api_key.clone(),
        ),
        state.segmentation_gate.clone(),
    ))
}

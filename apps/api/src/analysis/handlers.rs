//! Axum route handlers for the Analysis and Prompts APIs.

use axum::{extract::Path, Json};
use serde::Deserialize;

use crate::analysis::enhance::{enhance_analysis, EnhancedAnalysis};
use crate::analysis::prompts::{analysis_prompt, task_prompt, PromptSpec, TASK_LADDER_LEN};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub analysis: String,
}

/// POST /api/v1/analysis/enhance
pub async fn handle_enhance(Json(request): Json<EnhanceRequest>) -> Json<EnhancedAnalysis> {
    Json(enhance_analysis(&request.analysis))
}

/// GET /api/v1/prompts/analysis
pub async fn handle_analysis_prompt() -> Json<PromptSpec> {
    Json(analysis_prompt())
}

/// GET /api/v1/prompts/tasks/:attempt
///
/// Returns the task prompt for a 1-based model attempt.
pub async fn handle_task_prompt(Path(attempt): Path<usize>) -> Result<Json<PromptSpec>, AppError> {
    task_prompt(attempt).map(Json).ok_or_else(|| {
        AppError::NotFound(format!(
            "No task prompt for attempt {attempt}; attempts run from 1 to {TASK_LADDER_LEN}"
        ))
    })
}

//! Axum route handlers for the Conditions API.

use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};

use crate::conditions::catalog::{self, SkinCondition, CATALOG};
use crate::conditions::detector::detect;
use crate::conditions::symptoms::{conditions_for_symptom, known_symptoms};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub condition_ids: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct SymptomRequest {
    pub symptom: String,
}

#[derive(Debug, Serialize)]
pub struct SymptomResponse {
    pub symptom: String,
    pub condition_ids: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct KnownSymptomsResponse {
    pub symptoms: Vec<&'static str>,
}

/// GET /api/v1/conditions
pub async fn handle_list_conditions() -> Json<&'static [SkinCondition]> {
    Json(CATALOG)
}

/// GET /api/v1/conditions/:id
pub async fn handle_get_condition(
    Path(id): Path<String>,
) -> Result<Json<&'static SkinCondition>, AppError> {
    catalog::find(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Condition '{id}' not found")))
}

/// POST /api/v1/conditions/detect
///
/// Empty text is valid and detects nothing.
pub async fn handle_detect(Json(request): Json<DetectRequest>) -> Json<DetectResponse> {
    Json(DetectResponse {
        condition_ids: detect(&request.text),
    })
}

/// GET /api/v1/conditions/symptoms
pub async fn handle_known_symptoms() -> Json<KnownSymptomsResponse> {
    Json(KnownSymptomsResponse {
        symptoms: known_symptoms().collect(),
    })
}

/// POST /api/v1/conditions/symptoms
pub async fn handle_symptom_lookup(
    Json(request): Json<SymptomRequest>,
) -> Result<Json<SymptomResponse>, AppError> {
    if request.symptom.trim().is_empty() {
        return Err(AppError::Validation("symptom cannot be empty".to_string()));
    }

    let condition_ids = conditions_for_symptom(&request.symptom);
    Ok(Json(SymptomResponse {
        symptom: request.symptom,
        condition_ids,
    }))
}

//! Axum route handlers for the Routine API.

use axum::Json;
use serde::Deserialize;

use crate::routine::personalized::{personalized_tasks, PersonalizedTasks};
use crate::routine::synthesizer::{synthesize, Routine};

#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    #[serde(default)]
    pub condition_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PersonalizedTasksRequest {
    pub analysis: String,
}

/// POST /api/v1/routine
///
/// Builds a routine for the given condition ids, applied in order.
/// Unknown ids are ignored.
pub async fn handle_synthesize(Json(request): Json<SynthesizeRequest>) -> Json<Routine> {
    Json(synthesize(&request.condition_ids))
}

/// POST /api/v1/routine/tasks
///
/// Detects conditions in a narrative analysis and returns the synthesized
/// routine as checkable tasks.
pub async fn handle_personalized_tasks(
    Json(request): Json<PersonalizedTasksRequest>,
) -> Json<PersonalizedTasks> {
    Json(personalized_tasks(&request.analysis))
}

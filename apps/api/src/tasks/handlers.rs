//! Axum route handlers for the Tasks API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::prompts::{task_prompt, PromptSpec};
use crate::errors::AppError;
use crate::state::AppState;
use crate::tasks::models::{ParseStage, TaskRecord};
use crate::tasks::parser::parse_tasks_detailed;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseTasksRequest {
    pub response: String,
    /// 1-based model attempt that produced `response`.
    #[serde(default = "first_attempt")]
    pub attempt: usize,
}

fn first_attempt() -> usize {
    1
}

#[derive(Debug, Serialize)]
pub struct ParseTasksResponse {
    pub tasks: Vec<TaskRecord>,
    pub stage: ParseStage,
    /// Prompt for the next model attempt, when the response yielded nothing
    /// usable and attempts remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_prompt: Option<PromptSpec>,
    pub parsed_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/tasks/parse
///
/// Parses a raw model response into routine tasks. Never fails on the
/// response content: unusable text yields the default task list.
pub async fn handle_parse_tasks(
    State(state): State<AppState>,
    Json(request): Json<ParseTasksRequest>,
) -> Result<Json<ParseTasksResponse>, AppError> {
    if request.attempt == 0 {
        return Err(AppError::Validation(
            "attempt is 1-based and must be at least 1".to_string(),
        ));
    }

    let outcome = parse_tasks_detailed(&request.response);
    let next_prompt = next_prompt_for(
        outcome.stage,
        request.attempt,
        state.config.max_task_attempts,
    );

    Ok(Json(ParseTasksResponse {
        tasks: outcome.tasks,
        stage: outcome.stage,
        next_prompt,
        parsed_at: Utc::now(),
    }))
}

fn next_prompt_for(stage: ParseStage, attempt: usize, max_attempts: usize) -> Option<PromptSpec> {
    if stage != ParseStage::Fallback || attempt >= max_attempts {
        return None;
    }
    task_prompt(attempt + 1)
}

pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::conditions::handlers as conditions;
use crate::routine::handlers as routine;
use crate::state::AppState;
use crate::tasks::handlers as tasks;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_body_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Conditions API
        .route("/api/v1/conditions", get(conditions::handle_list_conditions))
        .route(
            "/api/v1/conditions/detect",
            post(conditions::handle_detect),
        )
        .route(
            "/api/v1/conditions/symptoms",
            get(conditions::handle_known_symptoms).post(conditions::handle_symptom_lookup),
        )
        .route(
            "/api/v1/conditions/:id",
            get(conditions::handle_get_condition),
        )
        // Routine API
        .route("/api/v1/routine", post(routine::handle_synthesize))
        .route(
            "/api/v1/routine/tasks",
            post(routine::handle_personalized_tasks),
        )
        // Tasks API
        .route("/api/v1/tasks/parse", post(tasks::handle_parse_tasks))
        // Analysis & prompts API
        .route("/api/v1/analysis/enhance", post(analysis::handle_enhance))
        .route(
            "/api/v1/prompts/analysis",
            get(analysis::handle_analysis_prompt),
        )
        .route(
            "/api/v1/prompts/tasks/:attempt",
            get(analysis::handle_task_prompt),
        )
        .layer(body_limit)
        .with_state(state)
}

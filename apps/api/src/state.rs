use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// The engines are pure functions over static data, so configuration is all
/// that needs sharing.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

use std::sync::Arc;

use axum::{Router, middleware};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    middleware::{catch_panic_layer, json_error_middleware},
    state::AppState,
};

use super::{metrics, root, tasks, todos, users};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(root::router())
        .merge(todos::router(state.clone()))
        .merge(users::router(state.clone()))
        .merge(tasks::router(state.clone()))
        .merge(metrics::router(state))
}

/// The full service: routes plus error normalization, panic recovery,
/// request tracing and permissive CORS.
pub fn app(state: Arc<AppState>) -> Router {
    router(state)
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

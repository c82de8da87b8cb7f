use std::sync::Arc;

use axum::{Router, extract::State, routing::get};

use crate::{
    response::{ApiResult, JsonApiResponse},
    schemas::CompletedTimeResponse,
    services::ServiceContext,
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/metrics/completed_task_time_by_user",
            get(completed_task_time_by_user),
        )
        .with_state(state)
}

async fn completed_task_time_by_user(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<CompletedTimeResponse>> {
    let rows = ServiceContext::from_state(&state)
        .metrics()
        .completed_task_time_by_user()
        .await?;
    JsonApiResponse::ok(rows)
}

use std::sync::Arc;

use axum::{Router, extract::State, routing::get};

use crate::{
    db::dao::Window,
    response::{ApiResult, JsonApiResponse},
    routes::extract::{AppJson, AppPath, AppQuery},
    schemas::{TaskCreate, TaskPatch, TaskResponse},
    services::ServiceContext,
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/task", get(list_tasks).post(create_task))
        .route(
            "/task/update/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .with_state(state)
}

async fn list_tasks(
    State(state): State<Arc<AppState>>,
    AppQuery(window): AppQuery<Window>,
) -> ApiResult<Vec<TaskResponse>> {
    let tasks = ServiceContext::from_state(&state)
        .task()
        .list_active(window)
        .await?;
    JsonApiResponse::ok(tasks.into_iter().map(TaskResponse::from).collect())
}

async fn create_task(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<TaskCreate>,
) -> ApiResult<TaskResponse> {
    let task = ServiceContext::from_state(&state).task().create(body).await?;
    JsonApiResponse::created(task.into())
}

async fn get_task(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<i32>,
) -> ApiResult<TaskResponse> {
    let task = ServiceContext::from_state(&state).task().get(id).await?;
    JsonApiResponse::ok(task.into())
}

// Existing clients expect 201 from this endpoint.
async fn update_task(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<i32>,
    AppJson(patch): AppJson<TaskPatch>,
) -> ApiResult<TaskResponse> {
    let task = ServiceContext::from_state(&state)
        .task()
        .update(id, patch)
        .await?;
    JsonApiResponse::created(task.into())
}

async fn delete_task(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<i32>,
) -> ApiResult<()> {
    ServiceContext::from_state(&state).task().delete(id).await?;
    JsonApiResponse::no_content()
}

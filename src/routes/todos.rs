use std::sync::Arc;

use axum::{Router, extract::State, routing::get};

use crate::{
    db::dao::Window,
    response::{ApiResult, JsonApiResponse},
    routes::extract::{AppJson, AppPath, AppQuery},
    schemas::{TodoCreate, TodoPatch, TodoResponse},
    services::ServiceContext,
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    let collection = get(list_todos).post(create_todo);
    let logs = get(list_logs);

    Router::new()
        .route("/todos/", collection.clone())
        .route("/todos", collection)
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/logs/", logs.clone())
        .route("/logs", logs)
        .with_state(state)
}

async fn create_todo(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<TodoCreate>,
) -> ApiResult<TodoResponse> {
    let todo = ServiceContext::from_state(&state).todo().create(body).await?;
    JsonApiResponse::created(todo.into())
}

async fn list_todos(
    State(state): State<Arc<AppState>>,
    AppQuery(window): AppQuery<Window>,
) -> ApiResult<Vec<TodoResponse>> {
    let todos = ServiceContext::from_state(&state)
        .todo()
        .list_today(window)
        .await?;
    JsonApiResponse::ok(todos.into_iter().map(TodoResponse::from).collect())
}

async fn list_logs(State(state): State<Arc<AppState>>) -> ApiResult<Vec<TodoResponse>> {
    let todos = ServiceContext::from_state(&state).todo().list_logs().await?;
    JsonApiResponse::ok(todos.into_iter().map(TodoResponse::from).collect())
}

async fn get_todo(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<i32>,
) -> ApiResult<TodoResponse> {
    let todo = ServiceContext::from_state(&state).todo().get(id).await?;
    JsonApiResponse::ok(todo.into())
}

async fn update_todo(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<i32>,
    AppJson(patch): AppJson<TodoPatch>,
) -> ApiResult<TodoResponse> {
    let todo = ServiceContext::from_state(&state)
        .todo()
        .update(id, patch)
        .await?;
    JsonApiResponse::ok(todo.into())
}

async fn delete_todo(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<i32>,
) -> ApiResult<()> {
    ServiceContext::from_state(&state).todo().delete(id).await?;
    JsonApiResponse::no_content()
}

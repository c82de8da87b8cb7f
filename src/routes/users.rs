use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    routing::{get, put},
};

use crate::{
    db::dao::Window,
    response::{ApiResult, JsonApiResponse},
    routes::extract::{AppJson, AppPath, AppQuery},
    schemas::{UserCreate, UserPatch, UserResponse},
    services::ServiceContext,
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/user", get(list_users).post(create_user))
        .route("/user/{id}", put(update_user))
        .with_state(state)
}

async fn list_users(
    State(state): State<Arc<AppState>>,
    AppQuery(window): AppQuery<Window>,
) -> ApiResult<Vec<UserResponse>> {
    let users = ServiceContext::from_state(&state).user().list(window).await?;
    JsonApiResponse::ok(users.into_iter().map(UserResponse::from).collect())
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<UserCreate>,
) -> ApiResult<UserResponse> {
    let user = ServiceContext::from_state(&state).user().create(body).await?;
    JsonApiResponse::created(user.into())
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<i32>,
    AppJson(patch): AppJson<UserPatch>,
) -> ApiResult<UserResponse> {
    let user = ServiceContext::from_state(&state)
        .user()
        .update(id, patch)
        .await?;
    JsonApiResponse::ok(user.into())
}

use axum::{Router, routing::get};
use serde_json::{Value, json};

use crate::response::{ApiResult, JsonApiResponse};

pub fn router() -> Router {
    Router::new().route("/", get(hello))
}

async fn hello() -> ApiResult<Value> {
    JsonApiResponse::ok(json!({ "Hello": "World" }))
}

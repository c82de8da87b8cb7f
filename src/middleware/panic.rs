use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::AppError;

type PanicPayload = Box<dyn Any + Send + 'static>;

/// Answers a panicking handler with a JSON 500. Debug builds include the
/// panic message; the panic hook in `logging` records the location.
pub fn catch_panic_layer() -> CatchPanicLayer<fn(PanicPayload) -> Response> {
    CatchPanicLayer::custom(panic_to_json)
}

fn panic_to_json(panic: PanicPayload) -> Response {
    let message = match panic_message(panic.as_ref()) {
        Some(details) if cfg!(debug_assertions) => format!("internal server error: {details}"),
        _ => "internal server error".to_string(),
    };
    AppError::internal(message).into_response()
}

fn panic_message(panic: &(dyn Any + Send)) -> Option<&str> {
    panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
}

use crate::core::error::ConsoleError;
use axum::{http::Uri, response::IntoResponse, response::Response};
use tracing::debug;

pub async fn fallback_handler(uri: Uri) -> Response {
    debug!(path = %uri.path(), "No route matched");

    ConsoleError::NotFound(format!("no route for {}", uri.path())).into_response()
}

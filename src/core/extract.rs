// Request extractors whose rejections render as `ConsoleError` JSON

use crate::core::error::ConsoleError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ConsoleError))]
pub struct JsonBody<T>(pub T);

/// Typed path segment, e.g. the `{id}` of `/api/users/{id}`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ConsoleError))]
pub struct PathParam<T>(pub T);

/// Query string
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ConsoleError))]
pub struct QueryParams<T>(pub T);
